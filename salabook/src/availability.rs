//! Availability computation for a room on a single date.
//!
//! The calculator is pure and context-free: callers pass the bookings
//! already filtered to one room and one date, and receive the ascending
//! list of free slot start hours. Nothing is persisted; availability is
//! recomputed on every query.

use crate::booking::Booking;
use crate::hour::{Hour, OperatingWindow};

/// Computes the free hour slots of `window` given the existing bookings
/// for one room and one date.
///
/// Every whole hour in a booking's `[start, end)` range is occupied.
/// Cancelled bookings never occupy anything. Hours outside the window are
/// not candidates regardless of booking data, so bookings that reach past
/// the window edges have no effect beyond the window bounds. Overlapping
/// input bookings (an upstream integrity violation) are tolerated: their
/// ranges simply union in the occupied set.
///
/// This function has no failure modes and no side effects.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::availability::free_slots;
/// use salabook::{Booking, Hour, HourRange, OperatingWindow, RoomId};
///
/// let window = OperatingWindow::default();
///
/// // No bookings: the whole window is free.
/// assert_eq!(free_slots(window, &[]).len(), 12);
///
/// // A 9:00-11:00 booking removes hours 9 and 10.
/// let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(11).unwrap()).unwrap();
/// let booking = Booking::builder(RoomId::new(1), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), slot)
///     .requester_name("Carlos")
///     .requester_email("carlos@example.com")
///     .build()
///     .unwrap();
/// let free: Vec<u8> = free_slots(window, &[booking]).iter().map(|h| h.value()).collect();
/// assert_eq!(free, vec![8, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
/// ```
#[must_use]
pub fn free_slots(window: OperatingWindow, bookings: &[Booking]) -> Vec<Hour> {
    // One flag per clock hour; bookings are hour-granular by construction.
    let mut occupied = [false; 24];

    for booking in bookings.iter().filter(|b| b.is_active()) {
        for hour in booking.slot().hours() {
            occupied[hour.value() as usize] = true;
        }
    }

    window
        .hours()
        .filter(|hour| !occupied[hour.value() as usize])
        .collect()
}

/// Returns `true` if every hour of `range` is free in `window` given the
/// existing bookings for one room and one date.
///
/// This is the check a booking submission must pass; the free-slot list
/// shown to users is a convenience view over the same occupancy.
///
/// # Examples
///
/// ```
/// use salabook::availability::range_is_free;
/// use salabook::{Hour, HourRange, OperatingWindow};
///
/// let window = OperatingWindow::default();
/// let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(10).unwrap()).unwrap();
/// assert!(range_is_free(window, &[], &slot));
/// ```
#[must_use]
pub fn range_is_free(
    window: OperatingWindow,
    bookings: &[crate::booking::Booking],
    range: &crate::hour::HourRange,
) -> bool {
    if !window.contains_range(range) {
        return false;
    }
    bookings
        .iter()
        .filter(|b| b.is_active())
        .all(|b| !b.slot().overlaps(range))
}
