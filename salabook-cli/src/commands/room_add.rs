//! Room-add command implementation.
//!
//! This module implements the `room-add` command, which creates a new
//! room. Administrator rights are required.

use clap::Args;
use salabook::operations::{PlanExecutor, RoomAddPlan};
use salabook::Room;

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, require_user, GlobalOptions};

/// Add a room.
#[derive(Args)]
pub struct RoomAddCommand {
    /// Room name
    #[arg(value_name = "NAME")]
    name: String,

    /// Seating capacity
    #[arg(value_name = "CAPACITY")]
    capacity: u32,

    /// Where the room is
    #[arg(long, value_name = "LOCATION", default_value = "")]
    location: String,

    /// Equipment available in the room (repeatable)
    #[arg(long = "equipment", value_name = "ITEM")]
    equipment: Vec<String>,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl RoomAddCommand {
    /// Execute the room-add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let user = require_user(global)?;
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let room = Room::builder(self.name, self.capacity)
            .location(self.location)
            .equipment(self.equipment)
            .build()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let plan = RoomAddPlan::new(room, user)
            .build_plan()
            .map_err(CliError::from)?;

        let mut executor = PlanExecutor::new(&mut store);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan).map_err(CliError::from)?;

        for warning in &result.warnings {
            eprintln!("Warning: {warning}");
        }

        let room = result
            .room
            .ok_or_else(|| CliError::Config("plan produced no room".to_string()))?;
        if result.dry_run {
            println!("Would add room '{}'", room.name());
        } else if let Some(id) = room.id() {
            println!("Added room '{}' with id {id}", room.name());
        }

        Ok(())
    }
}
