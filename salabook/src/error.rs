//! Error types for the salabook library.
//!
//! This module provides the error hierarchy for all booking operations,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::{BookingId, BookingStatus};
use crate::hour::HourRange;
use crate::room::RoomId;

/// Result type alias for operations that may fail with a salabook error.
///
/// # Examples
///
/// ```
/// use salabook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the salabook library.
///
/// This enum encompasses all error conditions that can occur while
/// managing rooms and bookings.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid clock hour was provided.
    #[error("invalid hour {value}: {reason}")]
    InvalidHour {
        /// The invalid hour value.
        value: u8,
        /// The reason the hour is invalid.
        reason: String,
    },

    /// An invalid hour range was specified.
    #[error("invalid hour range {start}-{end}: {reason}")]
    InvalidHourRange {
        /// The requested start hour.
        start: u8,
        /// The requested end hour.
        end: u8,
        /// The reason the range is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A proposed reservation was rejected by the validator.
    #[error("booking rejected: {0}")]
    Rejected(#[from] crate::validate::Rejection),

    /// The requested slot overlaps an existing booking.
    #[error("slot conflict: room {room_id} is already booked on {date} at {slot}")]
    SlotConflict {
        /// The room that is double-booked.
        room_id: RoomId,
        /// The date of the conflicting request.
        date: NaiveDate,
        /// The requested slot.
        slot: HourRange,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A status change that the booking lifecycle does not allow.
    #[error("invalid status transition for booking {id}: {from} -> {to}")]
    InvalidTransition {
        /// The booking whose status change was refused.
        id: BookingId,
        /// The current status.
        from: BookingStatus,
        /// The requested status.
        to: BookingStatus,
    },

    /// A booking's start time has already passed.
    #[error("booking {id} has already started")]
    AlreadyStarted {
        /// The booking that can no longer be changed.
        id: BookingId,
    },

    /// The acting user is not allowed to perform the operation.
    #[error("permission denied: {action}")]
    PermissionDenied {
        /// The refused action.
        action: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },
}

// Additional conversions for better ergonomics

impl From<crate::hour::InvalidHourError> for Error {
    fn from(err: crate::hour::InvalidHourError) -> Self {
        Self::InvalidHour {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::hour::InvalidHourRangeError> for Error {
    fn from(err: crate::hour::InvalidHourRangeError) -> Self {
        Self::InvalidHourRange {
            start: err.start.value(),
            end: err.end.value(),
            reason: err.reason,
        }
    }
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::Error;
    ///
    /// let err = Error::NotFound { resource: "room 9".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a booking slot conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use salabook::{Error, Hour, HourRange, RoomId};
    ///
    /// let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(10).unwrap()).unwrap();
    /// let err = Error::SlotConflict {
    ///     room_id: RoomId::new(1),
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     slot,
    /// };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SlotConflict { .. })
    }
}
