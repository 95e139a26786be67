//! Rooms command implementation.
//!
//! This module implements the `rooms` command, which lists rooms in
//! human-readable or JSON form.

use clap::Args;
use salabook::output::OutputFormat;
use salabook::store::Store;

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};

/// List rooms.
#[derive(Args)]
pub struct RoomsCommand {
    /// Include deactivated rooms
    #[arg(long)]
    all: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let rooms = store.list_rooms(!self.all).map_err(CliError::from)?;

        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let output = format
            .create_formatter()
            .format_rooms(&rooms)
            .map_err(CliError::from)?;
        println!("{output}");

        Ok(())
    }
}
