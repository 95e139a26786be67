//! Seed command implementation.
//!
//! This module implements the `seed` command, which fills an empty
//! database with demo rooms and bookings.

use clap::Args;
use salabook::seed::seed_demo_data;

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, parse_date_arg, GlobalOptions};

/// Populate an empty database with demo rooms and bookings.
#[derive(Args)]
pub struct SeedCommand {
    /// Date the demo bookings are anchored to (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,
}

impl SeedCommand {
    /// Execute the seed command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        let today = parse_date_arg(self.date.as_deref())?;
        let result = seed_demo_data(&mut store, today).map_err(CliError::from)?;

        if result.rooms_created == 0 {
            println!("Database already has rooms; nothing seeded");
        } else {
            println!(
                "Seeded {} rooms and {} bookings",
                result.rooms_created, result.bookings_created
            );
        }

        Ok(())
    }
}
