//! Cancel command implementation.
//!
//! This module implements the `cancel` command. The booking stays on
//! record with cancelled status and stops blocking its slot.

use clap::Args;
use salabook::operations::{PlanExecutor, TransitionOptions, TransitionPlan};
use salabook::{BookingId, BookingStatus};

use crate::error::CliError;
use crate::utils::{load_configuration, local_now, open_store, require_user, GlobalOptions};

/// Cancel a booking.
#[derive(Args)]
pub struct CancelCommand {
    /// Booking id
    #[arg(value_name = "ID")]
    id: i64,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = require_user(global)?;
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let id = BookingId::new(self.id);
        let options = TransitionOptions::new(id, BookingStatus::Cancelled, user, local_now());
        let plan = TransitionPlan::new(options)
            .build_plan(&store)
            .map_err(CliError::from)?;

        let mut executor = PlanExecutor::new(&mut store);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan).map_err(CliError::from)?;

        if result.dry_run {
            println!("Would cancel booking {id}");
        } else {
            println!("Cancelled booking {id}");
        }

        Ok(())
    }
}
