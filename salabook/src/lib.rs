#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # salabook
//!
//! A library for managing meeting-room bookings.
//!
//! This library provides core types and functionality for listing rooms,
//! computing free slots within the operating window, validating booking
//! requests, and walking bookings through their lifecycle.
//!
//! ## Core Types
//!
//! - [`Hour`], [`HourRange`], and [`OperatingWindow`]: bookable time slots
//! - [`Room`] and [`Booking`]: the two stored entities
//! - [`BookingRequest`] and [`Rejection`]: booking validation
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use salabook::{Hour, HourRange, OperatingWindow};
//!
//! // The default operating window covers 08:00 to 20:00
//! let window = OperatingWindow::default();
//! assert_eq!(window.slot_count(), 12);
//!
//! // A booking occupies a half-open range of whole hours
//! let start = Hour::try_from(9).unwrap();
//! let end = Hour::try_from(11).unwrap();
//! let slot = HourRange::new(start, end).unwrap();
//! assert_eq!(slot.duration_hours(), 2);
//! assert!(window.contains_range(&slot));
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod error;
pub mod hour;
pub mod logging;
pub mod operations;
pub mod output;
pub mod room;
pub mod seed;
pub mod session;
pub mod store;
pub mod validate;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingId, BookingStatus, ValidationError};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use hour::{Hour, HourRange, OperatingWindow};
pub use logging::{init_logger, LogLevel, Logger};
pub use room::{Room, RoomId};
pub use session::User;
pub use validate::{validate, BookingRequest, RejectReason, Rejection};
