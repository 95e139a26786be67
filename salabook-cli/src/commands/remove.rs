//! Remove command implementation.
//!
//! This module implements the `remove` command, which deletes a booking
//! record entirely. Cancellation is the usual path; removal is for
//! cleaning up mistakes.

use clap::Args;
use salabook::operations::{DeleteOptions, DeletePlan, PlanExecutor};
use salabook::BookingId;

use crate::error::CliError;
use crate::utils::{load_configuration, local_now, open_store, require_user, GlobalOptions};

/// Delete a booking outright.
#[derive(Args)]
pub struct RemoveCommand {
    /// Booking id
    #[arg(value_name = "ID")]
    id: i64,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = require_user(global)?;
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let id = BookingId::new(self.id);
        let plan = DeletePlan::new(DeleteOptions::new(id, user, local_now()))
            .build_plan(&store)
            .map_err(CliError::from)?;

        let mut executor = PlanExecutor::new(&mut store);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan).map_err(CliError::from)?;

        if result.dry_run {
            println!("Would remove booking {id}");
        } else {
            println!("Removed booking {id}");
        }

        Ok(())
    }
}
