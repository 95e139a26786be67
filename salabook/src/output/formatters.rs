//! Output formatter implementations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::Booking;
use crate::error::{Error, Result};
use crate::hour::Hour;
use crate::room::Room;

use super::OutputFormatter;

/// Formats an hour on the 12-hour clock, e.g. `9:00 AM` or `8:00 PM`.
///
/// # Examples
///
/// ```
/// use salabook::output::format_hour_12;
/// use salabook::Hour;
///
/// assert_eq!(format_hour_12(Hour::try_from(9).unwrap()), "9:00 AM");
/// assert_eq!(format_hour_12(Hour::try_from(12).unwrap()), "12:00 PM");
/// assert_eq!(format_hour_12(Hour::try_from(20).unwrap()), "8:00 PM");
/// ```
#[must_use]
pub fn format_hour_12(hour: Hour) -> String {
    let value = hour.value();
    let suffix = if value < 12 { "AM" } else { "PM" };
    let display = match value % 12 {
        0 => 12,
        other => other,
    };
    format!("{display}:00 {suffix}")
}

/// Formats a date in long form, e.g. `Monday, March 2, 2026`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::output::format_long_date;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// assert_eq!(format_long_date(date), "Monday, March 2, 2026");
/// ```
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn format_slot_12(booking: &Booking) -> String {
    format!(
        "{} - {}",
        format_hour_12(booking.slot().start()),
        format_hour_12(booking.slot().end())
    )
}

/// Human-readable formatter.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_rooms(&self, rooms: &[Room]) -> Result<String> {
        if rooms.is_empty() {
            return Ok("No rooms found.".to_string());
        }

        let mut lines = Vec::with_capacity(rooms.len());
        for room in rooms {
            let id = room
                .id()
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            let mut line = format!(
                "{id}  {} (capacity {})  {}",
                room.name(),
                room.capacity(),
                room.location()
            );
            if !room.equipment().is_empty() {
                line.push_str(&format!("  [{}]", room.equipment().join(", ")));
            }
            if !room.is_active() {
                line.push_str("  (inactive)");
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn format_bookings(&self, bookings: &[Booking]) -> Result<String> {
        if bookings.is_empty() {
            return Ok("No bookings found.".to_string());
        }

        let mut lines = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let id = booking
                .id()
                .map_or_else(|| "-".to_string(), |id| id.to_string());
            let room_name = booking
                .room()
                .map_or_else(|| format!("room {}", booking.room_id()), |room| {
                    room.name().to_string()
                });
            let mut line = format!(
                "{id}  {room_name}  {}  {}  {} <{}> ({})  {}",
                format_long_date(booking.date()),
                format_slot_12(booking),
                booking.requester_name(),
                booking.requester_email(),
                booking.attendees(),
                booking.status()
            );
            if let Some(description) = booking.description() {
                line.push_str(&format!("  - {description}"));
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn format_slots(&self, room: &Room, date: NaiveDate, slots: &[Hour]) -> Result<String> {
        let header = format!("Free slots for {} on {}:", room.name(), format_long_date(date));
        if slots.is_empty() {
            return Ok(format!("{header}\n  (fully booked)"));
        }

        let mut lines = vec![header];
        for slot in slots {
            lines.push(format!("  {}", format_hour_12(*slot)));
        }
        Ok(lines.join("\n"))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
        field: "json_output".to_string(),
        message: format!("failed to serialize to JSON: {e}"),
    })
}

#[derive(Serialize)]
struct SlotView {
    hour: u8,
    label: String,
}

#[derive(Serialize)]
struct SlotsView<'a> {
    room: &'a Room,
    date: NaiveDate,
    free_slots: Vec<SlotView>,
}

/// JSON formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_rooms(&self, rooms: &[Room]) -> Result<String> {
        to_json(&rooms)
    }

    fn format_bookings(&self, bookings: &[Booking]) -> Result<String> {
        to_json(&bookings)
    }

    fn format_slots(&self, room: &Room, date: NaiveDate, slots: &[Hour]) -> Result<String> {
        let view = SlotsView {
            room,
            date,
            free_slots: slots
                .iter()
                .map(|slot| SlotView {
                    hour: slot.value(),
                    label: format_hour_12(*slot),
                })
                .collect(),
        };
        to_json(&view)
    }
}
