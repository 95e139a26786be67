//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: initialize the data directory and database
//! - `seed`: populate an empty database with demo data
//! - `rooms`: list rooms
//! - `room_add`: add a room
//! - `room_edit`: edit a room
//! - `room_deactivate`: deactivate a room
//! - `slots`: show free slots for a room on a date
//! - `book`: book a room
//! - `confirm`: confirm a pending booking
//! - `cancel`: cancel a booking
//! - `remove`: delete a booking outright
//! - `list`: list bookings

pub mod book;
pub mod cancel;
pub mod confirm;
pub mod init;
pub mod list;
pub mod remove;
pub mod room_add;
pub mod room_deactivate;
pub mod room_edit;
pub mod rooms;
pub mod seed;
pub mod slots;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use confirm::ConfirmCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use room_add::RoomAddCommand;
pub use room_deactivate::RoomDeactivateCommand;
pub use room_edit::RoomEditCommand;
pub use rooms::RoomsCommand;
pub use seed::SeedCommand;
pub use slots::SlotsCommand;
