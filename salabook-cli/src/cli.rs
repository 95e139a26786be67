//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    BookCommand, CancelCommand, ConfirmCommand, InitCommand, ListCommand, RemoveCommand,
    RoomAddCommand, RoomDeactivateCommand, RoomEditCommand, RoomsCommand, SeedCommand,
    SlotsCommand,
};

/// Command-line tool for managing meeting-room bookings.
#[derive(Parser)]
#[command(name = "salabook")]
#[command(version, about = "Manage meeting-room bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SALABOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Email identifying who runs the command
    #[arg(long, value_name = "EMAIL", global = true, env = "SALABOOK_USER")]
    pub user: Option<String>,

    /// Act with administrator rights
    #[arg(long, global = true, env = "SALABOOK_ADMIN")]
    pub admin: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Populate an empty database with demo rooms and bookings
    Seed(SeedCommand),

    /// List rooms
    Rooms(RoomsCommand),

    /// Add a room
    RoomAdd(RoomAddCommand),

    /// Edit a room
    RoomEdit(RoomEditCommand),

    /// Deactivate a room
    RoomDeactivate(RoomDeactivateCommand),

    /// Show free slots for a room on a date
    Slots(SlotsCommand),

    /// Book a room
    Book(BookCommand),

    /// Confirm a pending booking
    Confirm(ConfirmCommand),

    /// Cancel a booking
    Cancel(CancelCommand),

    /// Delete a booking outright
    Remove(RemoveCommand),

    /// List bookings
    List(ListCommand),
}
