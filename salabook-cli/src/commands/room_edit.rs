//! Room-edit command implementation.
//!
//! This module implements the `room-edit` command. Flags override the
//! stored fields; anything not given keeps its current value.

use clap::Args;
use salabook::operations::{PlanExecutor, RoomEditPlan};
use salabook::store::Store;
use salabook::{Room, RoomId};

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, require_user, GlobalOptions};

/// Edit a room.
#[derive(Args)]
pub struct RoomEditCommand {
    /// Room id
    #[arg(value_name = "ID")]
    id: i64,

    /// New room name
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// New seating capacity
    #[arg(long, value_name = "CAPACITY")]
    capacity: Option<u32>,

    /// New location
    #[arg(long, value_name = "LOCATION")]
    location: Option<String>,

    /// Replace the equipment list (repeatable)
    #[arg(long = "equipment", value_name = "ITEM")]
    equipment: Option<Vec<String>>,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl RoomEditCommand {
    /// Execute the room-edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = require_user(global)?;
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let id = RoomId::new(self.id);
        let current = store
            .get_room(id)
            .map_err(CliError::from)?
            .ok_or_else(|| CliError::Library(salabook::Error::NotFound {
                resource: format!("room {id}"),
            }))?;

        let edited = Room::builder(
            self.name.unwrap_or_else(|| current.name().to_string()),
            self.capacity.unwrap_or_else(|| current.capacity()),
        )
        .id(id)
        .location(
            self.location
                .unwrap_or_else(|| current.location().to_string()),
        )
        .equipment(
            self.equipment
                .unwrap_or_else(|| current.equipment().to_vec()),
        )
        .active(current.is_active())
        .build()
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let plan = RoomEditPlan::new(edited, user)
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
            println!("Would edit room {id}");
        } else {
            println!("Updated room {id}");
        }

        Ok(())
    }
}
