//! Room-deactivate command implementation.
//!
//! This module implements the `room-deactivate` command, a soft delete:
//! the room leaves active listings but its bookings remain on record.

use clap::Args;
use salabook::operations::{PlanExecutor, RoomDeactivatePlan};
use salabook::RoomId;

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, require_user, GlobalOptions};

/// Deactivate a room.
#[derive(Args)]
pub struct RoomDeactivateCommand {
    /// Room id
    #[arg(value_name = "ID")]
    id: i64,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl RoomDeactivateCommand {
    /// Execute the room-deactivate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = require_user(global)?;
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let id = RoomId::new(self.id);
        let plan = RoomDeactivatePlan::new(id, user)
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

        if result.dry_run {
            println!("Would deactivate room {id}");
        } else {
            println!("Deactivated room {id}");
        }

        Ok(())
    }
}
