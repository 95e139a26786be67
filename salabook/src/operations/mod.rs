//! Booking operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for booking operations,
//! separating planning from execution to enable dry-run mode, better
//! testing, and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Analyzes the request, validates constraints, builds a plan
//! 2. **Execution**: Takes the plan and performs actual storage operations
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use salabook::config::ConfigBuilder;
//! use salabook::operations::{BookOptions, BookPlan, PlanExecutor};
//! use salabook::store::{MemoryStore, Store};
//! use salabook::{BookingRequest, Hour, Room};
//!
//! let mut store = MemoryStore::new();
//! let room = store
//!     .create_room(&Room::builder("Amambay", 8).build().unwrap())
//!     .unwrap();
//! let config = ConfigBuilder::new().build().unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let request = BookingRequest::new(date)
//!     .with_requester_name("Carlos Gomez")
//!     .with_requester_email("carlos@example.com")
//!     .with_start_hour(Some(Hour::try_from(9).unwrap()))
//!     .with_attendees(4);
//! let now = date.and_hms_opt(0, 0, 0).unwrap();
//!
//! // Generate plan
//! let options = BookOptions::new(room.id().unwrap(), request, now);
//! let plan = BookPlan::new(options, &config).build_plan(&store).unwrap();
//!
//! // Execute plan
//! let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
//! assert!(result.success);
//! ```

pub mod book;
pub mod executor;
pub mod init;
pub mod plan;
pub mod rooms;
pub mod transition;

pub use book::{BookOptions, BookPlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_store, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use rooms::{RoomAddPlan, RoomDeactivatePlan, RoomEditPlan};
pub use transition::{DeleteOptions, DeletePlan, TransitionOptions, TransitionPlan};
