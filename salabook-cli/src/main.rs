//! Main entry point for the salabook CLI.
//!
//! This is the command-line interface for the salabook room-booking
//! system. It provides commands for managing rooms and bookings:
//! - `rooms`, `room-add`, `room-edit`, `room-deactivate`: manage rooms
//! - `slots`: show free slots for a room on a date
//! - `book`, `confirm`, `cancel`, `remove`: walk bookings through their
//!   lifecycle
//! - `list`: list bookings

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = salabook::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        user: cli.user,
        admin: cli.admin,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Seed(cmd) => cmd.execute(&global),
        cli::Command::Rooms(cmd) => cmd.execute(&global),
        cli::Command::RoomAdd(cmd) => cmd.execute(&global),
        cli::Command::RoomEdit(cmd) => cmd.execute(&global),
        cli::Command::RoomDeactivate(cmd) => cmd.execute(&global),
        cli::Command::Slots(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Confirm(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
