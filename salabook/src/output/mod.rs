//! Output formatting for rooms, bookings, and free slots.
//!
//! This module provides human-readable and JSON renderings of listing
//! results. Human output shows 12-hour clock times and long-form dates,
//! matching how slots are presented to requesters.

mod formatters;

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::error::Result;
use crate::hour::Hour;
use crate::room::Room;

pub use formatters::{format_hour_12, format_long_date, JsonFormatter, TextFormatter};

/// Trait for rendering listing results into different output formats.
pub trait OutputFormatter {
    /// Formats a room listing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_rooms(&self, rooms: &[Room]) -> Result<String>;

    /// Formats a booking listing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_bookings(&self, bookings: &[Booking]) -> Result<String>;

    /// Formats the free slots of one room on one date.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_slots(&self, room: &Room, date: NaiveDate, slots: &[Hour]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Text,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Creates a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
