//! Hour, hour-range, and operating-window types for the booking day.
//!
//! This module provides the time model shared by availability computation
//! and reservation validation: whole clock hours, half-open hour ranges,
//! and the fixed daily window in which rooms can be booked.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A whole clock hour within a single day (0-23).
///
/// Bookings are hour-granular: a reservation always starts and ends on a
/// whole hour.
///
/// # Examples
///
/// ```
/// use salabook::Hour;
///
/// let hour = Hour::try_from(9).unwrap();
/// assert_eq!(hour.value(), 9);
///
/// // 24 is not a clock hour
/// assert!(Hour::try_from(24).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hour(u8);

impl Hour {
    /// The minimum valid hour.
    pub const MIN: u8 = 0;

    /// The maximum valid hour.
    pub const MAX: u8 = 23;

    /// Returns the underlying hour value.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::Hour;
    ///
    /// let hour = Hour::try_from(14).unwrap();
    /// assert_eq!(hour.value(), 14);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the hour immediately after this one, if it exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::Hour;
    ///
    /// let nine = Hour::try_from(9).unwrap();
    /// assert_eq!(nine.succ().unwrap().value(), 10);
    ///
    /// let last = Hour::try_from(23).unwrap();
    /// assert!(last.succ().is_none());
    /// ```
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        Self::try_from(self.0 + 1).ok()
    }
}

impl TryFrom<u8> for Hour {
    type Error = InvalidHourError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            Err(InvalidHourError {
                value,
                reason: "hour must be between 0 and 23".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

/// Error type for invalid hour values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHourError {
    /// The invalid hour value.
    pub value: u8,
    /// The reason the hour is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidHourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hour {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidHourError {}

/// A half-open range of hours `[start, end)`.
///
/// The end hour is exclusive: a booking from 9:00 to 11:00 occupies the
/// hours 9 and 10, and another booking may start at 11:00.
///
/// # Examples
///
/// ```
/// use salabook::{Hour, HourRange};
///
/// let start = Hour::try_from(9).unwrap();
/// let end = Hour::try_from(11).unwrap();
/// let range = HourRange::new(start, end).unwrap();
///
/// assert_eq!(range.duration_hours(), 2);
/// assert!(range.contains(Hour::try_from(10).unwrap()));
/// assert!(!range.contains(Hour::try_from(11).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    start: Hour,
    end: Hour,
}

impl HourRange {
    /// Creates a new hour range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is not strictly after `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::{Hour, HourRange};
    ///
    /// let nine = Hour::try_from(9).unwrap();
    /// let ten = Hour::try_from(10).unwrap();
    ///
    /// assert!(HourRange::new(nine, ten).is_ok());
    /// assert!(HourRange::new(ten, nine).is_err());
    /// assert!(HourRange::new(nine, nine).is_err());
    /// ```
    pub fn new(start: Hour, end: Hour) -> Result<Self, InvalidHourRangeError> {
        if end <= start {
            Err(InvalidHourRangeError {
                start,
                end,
                reason: "end must be after start".into(),
            })
        } else {
            Ok(Self { start, end })
        }
    }

    /// Creates a range from a start hour and a duration in hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration is zero or the derived end hour
    /// would pass midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::{Hour, HourRange};
    ///
    /// let range = HourRange::from_start_and_duration(Hour::try_from(18).unwrap(), 2).unwrap();
    /// assert_eq!(range.end().value(), 20);
    ///
    /// assert!(HourRange::from_start_and_duration(Hour::try_from(23).unwrap(), 2).is_err());
    /// ```
    pub fn from_start_and_duration(start: Hour, duration: u8) -> Result<Self, InvalidHourRangeError> {
        if duration == 0 {
            return Err(InvalidHourRangeError {
                start,
                end: start,
                reason: "duration must be at least one hour".into(),
            });
        }
        let end_value = start.value() as u16 + u16::from(duration);
        if end_value > 24 {
            return Err(InvalidHourRangeError {
                start,
                end: start,
                reason: format!("range of {duration}h starting at {start} passes midnight"),
            });
        }
        // End 24:00 is not representable as an Hour; the operating window
        // never reaches it, so treat it as invalid here too.
        let end = Hour::try_from(end_value as u8).map_err(|_| InvalidHourRangeError {
            start,
            end: start,
            reason: "derived end hour is out of range".into(),
        })?;
        Self::new(start, end)
    }

    /// Returns the start hour (inclusive).
    #[must_use]
    pub const fn start(&self) -> Hour {
        self.start
    }

    /// Returns the end hour (exclusive).
    #[must_use]
    pub const fn end(&self) -> Hour {
        self.end
    }

    /// Returns the number of whole hours covered by the range.
    #[must_use]
    pub const fn duration_hours(&self) -> u8 {
        self.end.value() - self.start.value()
    }

    /// Returns `true` if the range covers the given hour.
    #[must_use]
    pub fn contains(&self, hour: Hour) -> bool {
        hour >= self.start && hour < self.end
    }

    /// Returns `true` if this range shares at least one hour with `other`.
    ///
    /// Ranges that merely touch (one ends where the other starts) do not
    /// overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::{Hour, HourRange};
    ///
    /// let h = |v| Hour::try_from(v).unwrap();
    /// let morning = HourRange::new(h(9), h(11)).unwrap();
    /// let adjacent = HourRange::new(h(11), h(12)).unwrap();
    /// let clashing = HourRange::new(h(10), h(12)).unwrap();
    ///
    /// assert!(!morning.overlaps(&adjacent));
    /// assert!(morning.overlaps(&clashing));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Iterates over the hours covered by the range, ascending.
    pub fn hours(&self) -> impl Iterator<Item = Hour> + '_ {
        (self.start.value()..self.end.value()).map(Hour)
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Error type for invalid hour ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHourRangeError {
    /// The start hour of the attempted range.
    pub start: Hour,
    /// The end hour of the attempted range.
    pub end: Hour,
    /// The reason the range is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidHourRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid hour range {}-{}: {}",
            self.start, self.end, self.reason
        )
    }
}

impl std::error::Error for InvalidHourRangeError {}

/// The fixed daily window of bookable hours `[start, end)`.
///
/// This is process-wide configuration, not a per-room setting. The default
/// window runs 08:00 through 20:00, which yields twelve one-hour slots with
/// start times 8 through 19.
///
/// # Examples
///
/// ```
/// use salabook::OperatingWindow;
///
/// let window = OperatingWindow::default();
/// assert_eq!(window.slot_count(), 12);
///
/// let hours: Vec<u8> = window.hours().map(|h| h.value()).collect();
/// assert_eq!(hours.first(), Some(&8));
/// assert_eq!(hours.last(), Some(&19));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingWindow {
    start: Hour,
    end: Hour,
}

impl OperatingWindow {
    /// The default first bookable hour.
    pub const DEFAULT_START: u8 = 8;

    /// The default end of the bookable day (exclusive).
    pub const DEFAULT_END: u8 = 20;

    /// Creates a new operating window.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is not strictly after `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::{Hour, OperatingWindow};
    ///
    /// let window = OperatingWindow::new(
    ///     Hour::try_from(9).unwrap(),
    ///     Hour::try_from(17).unwrap(),
    /// ).unwrap();
    /// assert_eq!(window.slot_count(), 8);
    /// ```
    pub fn new(start: Hour, end: Hour) -> Result<Self, InvalidHourRangeError> {
        if end <= start {
            Err(InvalidHourRangeError {
                start,
                end,
                reason: "window end must be after window start".into(),
            })
        } else {
            Ok(Self { start, end })
        }
    }

    /// Returns the first bookable hour.
    #[must_use]
    pub const fn start(&self) -> Hour {
        self.start
    }

    /// Returns the end of the bookable day (exclusive).
    #[must_use]
    pub const fn end(&self) -> Hour {
        self.end
    }

    /// Returns the number of one-hour slots in the window.
    #[must_use]
    pub const fn slot_count(&self) -> u8 {
        self.end.value() - self.start.value()
    }

    /// Returns `true` if the given hour is a valid slot start time.
    #[must_use]
    pub fn contains(&self, hour: Hour) -> bool {
        hour >= self.start && hour < self.end
    }

    /// Returns `true` if the whole range lies inside the window.
    ///
    /// A range may end exactly at the window end: a booking from 19:00 to
    /// 20:00 fits a window that closes at 20:00.
    #[must_use]
    pub fn contains_range(&self, range: &HourRange) -> bool {
        range.start() >= self.start && range.end() <= self.end
    }

    /// Iterates over the window's slot start hours, ascending.
    pub fn hours(&self) -> impl Iterator<Item = Hour> + '_ {
        (self.start.value()..self.end.value()).map(Hour)
    }
}

impl Default for OperatingWindow {
    fn default() -> Self {
        Self {
            start: Hour(Self::DEFAULT_START),
            end: Hour(Self::DEFAULT_END),
        }
    }
}

impl fmt::Display for OperatingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(value: u8) -> Hour {
        Hour::try_from(value).unwrap()
    }

    #[test]
    fn test_hour_valid() {
        assert_eq!(h(0).value(), 0);
        assert_eq!(h(23).value(), 23);
    }

    #[test]
    fn test_hour_invalid() {
        let err = Hour::try_from(24).unwrap_err();
        assert_eq!(err.value, 24);
        assert!(format!("{err}").contains("invalid hour 24"));
    }

    #[test]
    fn test_hour_display() {
        assert_eq!(format!("{}", h(9)), "9:00");
        assert_eq!(format!("{}", h(14)), "14:00");
    }

    #[test]
    fn test_hour_succ() {
        assert_eq!(h(8).succ(), Some(h(9)));
        assert_eq!(h(23).succ(), None);
    }

    #[test]
    fn test_range_rejects_inverted_and_empty() {
        assert!(HourRange::new(h(11), h(9)).is_err());
        assert!(HourRange::new(h(9), h(9)).is_err());
    }

    #[test]
    fn test_range_contains_is_half_open() {
        let range = HourRange::new(h(9), h(11)).unwrap();
        assert!(range.contains(h(9)));
        assert!(range.contains(h(10)));
        assert!(!range.contains(h(11)));
        assert!(!range.contains(h(8)));
    }

    #[test]
    fn test_range_duration() {
        let range = HourRange::new(h(8), h(12)).unwrap();
        assert_eq!(range.duration_hours(), 4);
    }

    #[test]
    fn test_range_from_start_and_duration() {
        let range = HourRange::from_start_and_duration(h(10), 1).unwrap();
        assert_eq!(range.start(), h(10));
        assert_eq!(range.end(), h(11));

        assert!(HourRange::from_start_and_duration(h(10), 0).is_err());
        assert!(HourRange::from_start_and_duration(h(23), 1).is_err());
        assert!(HourRange::from_start_and_duration(h(22), 3).is_err());
    }

    #[test]
    fn test_range_overlap() {
        let nine_eleven = HourRange::new(h(9), h(11)).unwrap();
        let ten_twelve = HourRange::new(h(10), h(12)).unwrap();
        let eleven_twelve = HourRange::new(h(11), h(12)).unwrap();
        let eight_nine = HourRange::new(h(8), h(9)).unwrap();

        assert!(nine_eleven.overlaps(&ten_twelve));
        assert!(ten_twelve.overlaps(&nine_eleven));
        // Touching ranges do not overlap
        assert!(!nine_eleven.overlaps(&eleven_twelve));
        assert!(!nine_eleven.overlaps(&eight_nine));
        // A range overlaps itself
        assert!(nine_eleven.overlaps(&nine_eleven));
    }

    #[test]
    fn test_range_hours_iteration() {
        let range = HourRange::new(h(9), h(12)).unwrap();
        let hours: Vec<u8> = range.hours().map(Hour::value).collect();
        assert_eq!(hours, vec![9, 10, 11]);
    }

    #[test]
    fn test_range_display() {
        let range = HourRange::new(h(9), h(11)).unwrap();
        assert_eq!(format!("{range}"), "9:00-11:00");
    }

    #[test]
    fn test_default_window() {
        let window = OperatingWindow::default();
        assert_eq!(window.start(), h(8));
        assert_eq!(window.end(), h(20));
        assert_eq!(window.slot_count(), 12);
    }

    #[test]
    fn test_window_hours_ascending() {
        let window = OperatingWindow::default();
        let hours: Vec<u8> = window.hours().map(Hour::value).collect();
        assert_eq!(hours, (8..20).collect::<Vec<u8>>());
    }

    #[test]
    fn test_window_contains() {
        let window = OperatingWindow::default();
        assert!(window.contains(h(8)));
        assert!(window.contains(h(19)));
        assert!(!window.contains(h(20)));
        assert!(!window.contains(h(7)));
    }

    #[test]
    fn test_window_contains_range() {
        let window = OperatingWindow::default();
        // May end exactly at the window end
        assert!(window.contains_range(&HourRange::new(h(19), h(20)).unwrap()));
        assert!(window.contains_range(&HourRange::new(h(8), h(9)).unwrap()));
        assert!(!window.contains_range(&HourRange::new(h(7), h(9)).unwrap()));
        assert!(!window.contains_range(&HourRange::new(h(19), h(21)).unwrap()));
    }

    #[test]
    fn test_window_rejects_inverted() {
        assert!(OperatingWindow::new(h(20), h(8)).is_err());
        assert!(OperatingWindow::new(h(8), h(8)).is_err());
    }

    #[test]
    fn test_hour_serde_transparent() {
        let json = serde_json::to_string(&h(9)).unwrap();
        assert_eq!(json, "9");
        let back: Hour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h(9));
    }
}
