//! Slots command implementation.
//!
//! This module implements the `slots` command, which shows the free
//! hour slots of one room on one date.

use clap::Args;
use salabook::availability::free_slots;
use salabook::output::OutputFormat;
use salabook::store::{BookingFilter, Store};
use salabook::RoomId;

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_arg, GlobalOptions};

/// Show free slots for a room on a date.
#[derive(Args)]
pub struct SlotsCommand {
    /// Room id
    #[arg(value_name = "ROOM_ID")]
    room_id: i64,

    /// Date to check (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl SlotsCommand {
    /// Execute the slots command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let room_id = RoomId::new(self.room_id);
        let room = store
            .get_room(room_id)
            .map_err(CliError::from)?
            .ok_or_else(|| CliError::Library(salabook::Error::NotFound {
                resource: format!("room {room_id}"),
            }))?;

        let date = parse_date_arg(self.date.as_deref())?;
        let bookings = store
            .list_bookings(&BookingFilter::default().with_room(room_id).with_date(date))
            .map_err(CliError::from)?;

        let slots = free_slots(config.window(), &bookings);

        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let output = format
            .create_formatter()
            .format_slots(&room, date, &slots)
            .map_err(CliError::from)?;
        println!("{output}");

        Ok(())
    }
}
