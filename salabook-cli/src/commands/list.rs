//! List command implementation.
//!
//! This module implements the `list` command, which displays bookings in
//! human-readable or JSON form, optionally filtered.

use clap::Args;
use salabook::output::OutputFormat;
use salabook::store::{BookingFilter, Store};
use salabook::RoomId;

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_arg, GlobalOptions};

/// List bookings.
#[derive(Args)]
pub struct ListCommand {
    /// Filter by room id
    #[arg(long, value_name = "ROOM_ID")]
    room: Option<i64>,

    /// Filter by date
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Filter by requester email
    #[arg(long, value_name = "EMAIL")]
    email: Option<String>,

    /// Only the caller's own bookings (requires --user)
    #[arg(long)]
    mine: bool,

    /// Exclude cancelled bookings
    #[arg(long)]
    active: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let mut filter = BookingFilter::default();
        if let Some(room) = self.room {
            filter = filter.with_room(RoomId::new(room));
        }
        if let Some(ref date) = self.date {
            filter = filter.with_date(parse_date_arg(Some(date))?);
        }
        if self.mine {
            let email = global.user.clone().ok_or_else(|| {
                CliError::InvalidArguments("--mine needs an identity (use --user)".to_string())
            })?;
            filter = filter.with_requester_email(email);
        } else if let Some(email) = self.email {
            filter = filter.with_requester_email(email);
        }
        if self.active {
            filter = filter.active_only();
        }

        let bookings = store.list_bookings(&filter).map_err(CliError::from)?;

        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let output = format
            .create_formatter()
            .format_bookings(&bookings)
            .map_err(CliError::from)?;
        println!("{output}");

        Ok(())
    }
}
