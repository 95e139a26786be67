//! Book command implementation.
//!
//! This module implements the `book` command, which validates a booking
//! proposal and creates a pending booking when it passes.

use clap::Args;
use salabook::operations::{BookOptions, BookPlan, PlanExecutor};
use salabook::{BookingRequest, Hour, RoomId};

use crate::error::CliError;
use crate::utils::{
    load_configuration, local_now, open_store, parse_date_arg, GlobalOptions,
};

/// Book a room.
#[derive(Args)]
pub struct BookCommand {
    /// Room id
    #[arg(value_name = "ROOM_ID")]
    room_id: i64,

    /// Booking date (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Start hour on the 24-hour clock, e.g. 9 or 14
    #[arg(long, value_name = "HOUR")]
    start: Option<u8>,

    /// Duration in whole hours (default: from configuration)
    #[arg(long, value_name = "HOURS")]
    duration: Option<u8>,

    /// Requester name
    #[arg(long, value_name = "NAME")]
    name: String,

    /// Requester email (default: the --user identity)
    #[arg(long, value_name = "EMAIL")]
    email: Option<String>,

    /// Number of attendees
    #[arg(long, value_name = "COUNT", default_value = "1")]
    attendees: i64,

    /// What the meeting is about
    #[arg(long, value_name = "TEXT")]
    description: Option<String>,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let email = self
            .email
            .clone()
            .or_else(|| global.user.clone())
            .unwrap_or_default();

        let date = parse_date_arg(self.date.as_deref())?;
        let start_hour = self
            .start
            .map(Hour::try_from)
            .transpose()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let mut request = BookingRequest::new(date)
            .with_requester_name(self.name)
            .with_requester_email(email)
            .with_start_hour(start_hour)
            .with_duration_hours(
                self.duration
                    .unwrap_or_else(|| config.default_duration_hours()),
            )
            .with_attendees(self.attendees);
        if self.description.is_some() {
            request = request.with_description(self.description);
        }

        let options = BookOptions::new(RoomId::new(self.room_id), request, local_now());
        let plan = BookPlan::new(options, &config)
            .build_plan(&store)
            .map_err(CliError::from)?;

        let mut executor = PlanExecutor::new(&mut store);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan).map_err(CliError::from)?;

        for warning in &result.warnings {
            eprintln!("Warning: {warning}");
        }

        let booking = result
            .booking
            .ok_or_else(|| CliError::Config("plan produced no booking".to_string()))?;
        if result.dry_run {
            println!(
                "Would book {} on {} (pending)",
                booking.slot(),
                booking.date()
            );
        } else if let Some(id) = booking.id() {
            println!(
                "Booked {} on {} (pending, id {id})",
                booking.slot(),
                booking.date()
            );
        }

        Ok(())
    }
}
