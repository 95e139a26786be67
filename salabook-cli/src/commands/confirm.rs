//! Confirm command implementation.
//!
//! This module implements the `confirm` command, which moves a pending
//! booking to confirmed. Administrator rights are required.

use clap::Args;
use salabook::operations::{PlanExecutor, TransitionOptions, TransitionPlan};
use salabook::{BookingId, BookingStatus};

use crate::error::CliError;
use crate::utils::{load_configuration, local_now, open_store, require_user, GlobalOptions};

/// Confirm a pending booking.
#[derive(Args)]
pub struct ConfirmCommand {
    /// Booking id
    #[arg(value_name = "ID")]
    id: i64,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl ConfirmCommand {
    /// Execute the confirm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = require_user(global)?;
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let id = BookingId::new(self.id);
        let options = TransitionOptions::new(id, BookingStatus::Confirmed, user, local_now());
        let plan = TransitionPlan::new(options)
            .build_plan(&store)
            .map_err(CliError::from)?;

        let mut executor = PlanExecutor::new(&mut store);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan).map_err(CliError::from)?;

        if result.dry_run {
            println!("Would confirm booking {id}");
        } else {
            println!("Confirmed booking {id}");
        }

        Ok(())
    }
}
