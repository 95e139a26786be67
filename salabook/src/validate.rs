//! Reservation validation.
//!
//! Validation collects every problem with a proposed reservation at once,
//! as a field-to-message mapping a form can display in one pass, instead of
//! failing on the first error. On success it yields the fully-formed
//! [`Booking`] candidate ready for the storage collaborator.
//!
//! Slot conflicts are rejected here as well, not only filtered out of the
//! selectable start times: restricting the UI's options is no guarantee
//! under concurrent submissions, so the overlap check is part of the data
//! contract (and repeated atomically inside the storage layer).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::range_is_free;
use crate::booking::{Booking, BookingStatus};
use crate::hour::{Hour, HourRange, OperatingWindow};
use crate::room::Room;

/// The default booking duration when the requester does not pick one.
pub const DEFAULT_DURATION_HOURS: u8 = 1;

/// The longest selectable booking duration.
pub const MAX_DURATION_HOURS: u8 = 4;

/// A proposed reservation as submitted by a requester.
///
/// Fields hold raw form input; [`validate`] decides whether they add up to
/// a bookable reservation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::{BookingRequest, Hour};
///
/// let request = BookingRequest::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .with_requester_name("Ana Martinez")
///     .with_requester_email("ana@example.com")
///     .with_start_hour(Some(Hour::try_from(10).unwrap()))
///     .with_duration_hours(2)
///     .with_attendees(5);
/// assert_eq!(request.duration_hours(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    date: NaiveDate,
    requester_name: String,
    requester_email: String,
    start_hour: Option<Hour>,
    duration_hours: u8,
    attendees: i64,
    description: Option<String>,
}

impl BookingRequest {
    /// Creates an empty request for the given date.
    ///
    /// The duration defaults to one hour and the attendee count to one,
    /// matching the form defaults.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            requester_name: String::new(),
            requester_email: String::new(),
            start_hour: None,
            duration_hours: DEFAULT_DURATION_HOURS,
            attendees: 1,
            description: None,
        }
    }

    /// Sets the requester's name.
    #[must_use]
    pub fn with_requester_name(mut self, name: impl Into<String>) -> Self {
        self.requester_name = name.into();
        self
    }

    /// Sets the requester's email address.
    #[must_use]
    pub fn with_requester_email(mut self, email: impl Into<String>) -> Self {
        self.requester_email = email.into();
        self
    }

    /// Sets the selected start hour, or `None` when nothing was selected.
    #[must_use]
    pub const fn with_start_hour(mut self, start_hour: Option<Hour>) -> Self {
        self.start_hour = start_hour;
        self
    }

    /// Sets the requested duration in hours.
    #[must_use]
    pub const fn with_duration_hours(mut self, duration_hours: u8) -> Self {
        self.duration_hours = duration_hours;
        self
    }

    /// Sets the attendee count as entered.
    #[must_use]
    pub const fn with_attendees(mut self, attendees: i64) -> Self {
        self.attendees = attendees;
        self
    }

    /// Sets the optional meeting description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Returns the booking date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the requested duration in hours.
    #[must_use]
    pub const fn duration_hours(&self) -> u8 {
        self.duration_hours
    }

    /// Returns the selected start hour, if any.
    #[must_use]
    pub const fn start_hour(&self) -> Option<Hour> {
        self.start_hour
    }
}

/// A reason a proposed reservation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// The requester name is empty after trimming.
    MissingName,
    /// The email address is empty.
    MissingEmail,
    /// The email address does not have a `local@domain.tld` shape.
    InvalidEmail,
    /// No start time was selected.
    MissingStartTime,
    /// The attendee count is zero or negative.
    AttendeesTooLow,
    /// The attendee count exceeds the room's capacity.
    AttendeesExceedCapacity {
        /// The room's capacity, included so the message can display it.
        capacity: u32,
    },
    /// The duration is outside the selectable 1-4 hour range.
    InvalidDuration,
    /// The requested range does not fit inside the operating window.
    OutsideWindow,
    /// The requested range overlaps an existing non-cancelled booking.
    SlotConflict,
    /// The room has been soft-deleted.
    RoomInactive,
    /// The room has no identity; it was never persisted.
    UnknownRoom,
}

impl RejectReason {
    /// Returns the form field this reason belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingStartTime | Self::OutsideWindow | Self::SlotConflict => "start_time",
            Self::AttendeesTooLow | Self::AttendeesExceedCapacity { .. } => "attendees",
            Self::InvalidDuration => "duration",
            Self::RoomInactive | Self::UnknownRoom => "room",
        }
    }

    /// Returns the human-readable message for display next to the field.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::MissingName => "name is required".into(),
            Self::MissingEmail => "email address is required".into(),
            Self::InvalidEmail => "email address is not valid".into(),
            Self::MissingStartTime => "a start time must be selected".into(),
            Self::AttendeesTooLow => "attendee count must be greater than 0".into(),
            Self::AttendeesExceedCapacity { capacity } => {
                format!("attendee count exceeds the room capacity ({capacity})")
            }
            Self::InvalidDuration => {
                format!("duration must be between 1 and {MAX_DURATION_HOURS} hours")
            }
            Self::OutsideWindow => "requested time is outside the bookable hours".into(),
            Self::SlotConflict => "the requested time overlaps an existing booking".into(),
            Self::RoomInactive => "the room is no longer available for booking".into(),
            Self::UnknownRoom => "the room does not exist".into(),
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

/// The collected rejection reasons for one proposed reservation.
///
/// Never empty: a proposal with nothing wrong validates successfully.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::{validate, BookingRequest, RejectReason, Room, RoomId};
///
/// let room = Room::builder("Sala del consejo", 10)
///     .build()
///     .unwrap()
///     .with_id(RoomId::new(1));
/// let request = BookingRequest::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
///
/// let rejection = validate(&request, &room, &[], Default::default()).unwrap_err();
/// assert!(rejection.contains(&RejectReason::MissingName));
/// assert!(rejection.field_messages().contains_key("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    reasons: Vec<RejectReason>,
}

impl Rejection {
    /// Returns all rejection reasons, in field order.
    #[must_use]
    pub fn reasons(&self) -> &[RejectReason] {
        &self.reasons
    }

    /// Returns `true` if the given reason is present.
    #[must_use]
    pub fn contains(&self, reason: &RejectReason) -> bool {
        self.reasons.contains(reason)
    }

    /// Returns the field-to-message mapping a form displays in one pass.
    ///
    /// When two reasons share a field, the later one wins, matching the
    /// original form behavior.
    #[must_use]
    pub fn field_messages(&self) -> BTreeMap<&'static str, String> {
        self.reasons
            .iter()
            .map(|reason| (reason.field(), reason.message()))
            .collect()
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for reason in &self.reasons {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{reason}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

fn email_is_valid(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.find('@') {
        Some(at) if at > 0 => {
            let domain = &email[at + 1..];
            match domain.find('.') {
                Some(dot) => dot > 0 && dot + 1 < domain.len(),
                None => false,
            }
        }
        _ => false,
    }
}

/// Validates a proposed reservation against a room and its existing
/// bookings for the request's date.
///
/// All failures are collected; the result is either the fully-formed
/// pending [`Booking`] candidate or a [`Rejection`] holding every reason.
/// The `existing` slice must already be filtered to the proposal's room and
/// date, the same precondition as [`crate::availability::free_slots`].
///
/// No side effects: persisting the returned candidate is the storage
/// collaborator's job.
///
/// # Errors
///
/// Returns a [`Rejection`] when any check fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::{validate, BookingRequest, Hour, OperatingWindow, Room, RoomId};
///
/// let room = Room::builder("Sala del consejo", 10)
///     .build()
///     .unwrap()
///     .with_id(RoomId::new(1));
/// let request = BookingRequest::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .with_requester_name("Carlos Gomez")
///     .with_requester_email("carlos@example.com")
///     .with_start_hour(Some(Hour::try_from(9).unwrap()))
///     .with_duration_hours(2)
///     .with_attendees(8);
///
/// let booking = validate(&request, &room, &[], OperatingWindow::default()).unwrap();
/// assert_eq!(booking.slot().end().value(), 11);
/// ```
pub fn validate(
    request: &BookingRequest,
    room: &Room,
    existing: &[Booking],
    window: OperatingWindow,
) -> Result<Booking, Rejection> {
    let mut reasons = Vec::new();

    let name = request.requester_name.trim();
    if name.is_empty() {
        reasons.push(RejectReason::MissingName);
    }

    let email = request.requester_email.trim();
    if email.is_empty() {
        reasons.push(RejectReason::MissingEmail);
    } else if !email_is_valid(email) {
        reasons.push(RejectReason::InvalidEmail);
    }

    if request.start_hour.is_none() {
        reasons.push(RejectReason::MissingStartTime);
    }

    if request.attendees <= 0 {
        reasons.push(RejectReason::AttendeesTooLow);
    } else if request.attendees > i64::from(room.capacity()) {
        reasons.push(RejectReason::AttendeesExceedCapacity {
            capacity: room.capacity(),
        });
    }

    if request.duration_hours == 0 || request.duration_hours > MAX_DURATION_HOURS {
        reasons.push(RejectReason::InvalidDuration);
    }

    if room.id().is_none() {
        reasons.push(RejectReason::UnknownRoom);
    } else if !room.is_active() {
        reasons.push(RejectReason::RoomInactive);
    }

    // The range checks need a well-formed start and duration.
    let slot = match (request.start_hour, request.duration_hours) {
        (Some(start), d) if d >= 1 && d <= MAX_DURATION_HOURS => {
            match HourRange::from_start_and_duration(start, d) {
                Ok(slot) => {
                    if !window.contains_range(&slot) {
                        reasons.push(RejectReason::OutsideWindow);
                        None
                    } else if !range_is_free(window, existing, &slot) {
                        reasons.push(RejectReason::SlotConflict);
                        None
                    } else {
                        Some(slot)
                    }
                }
                Err(_) => {
                    reasons.push(RejectReason::OutsideWindow);
                    None
                }
            }
        }
        _ => None,
    };

    if !reasons.is_empty() {
        return Err(Rejection { reasons });
    }

    // All checks passed, so the slot and room id are present.
    let (Some(slot), Some(room_id)) = (slot, room.id()) else {
        return Err(Rejection {
            reasons: vec![RejectReason::MissingStartTime],
        });
    };

    #[allow(clippy::cast_sign_loss)]
    let attendees = request.attendees as u32;

    Booking::builder(room_id, request.date, slot)
        .requester_name(name)
        .requester_email(email)
        .attendees(attendees)
        .description(request.description.clone())
        .status(BookingStatus::Pending)
        .build()
        .map_err(|err| Rejection {
            reasons: vec![match err.field.as_str() {
                "requester_name" => RejectReason::MissingName,
                "requester_email" => RejectReason::MissingEmail,
                _ => RejectReason::AttendeesTooLow,
            }],
        })
}
