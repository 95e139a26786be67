//! Booking types for tracking room reservations.
//!
//! This module provides the booking record, its status state machine, and a
//! builder for construction with field validation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::hour::HourRange;
use crate::room::{Room, RoomId};

/// A unique identifier for a booking, assigned by the storage collaborator.
///
/// # Examples
///
/// ```
/// use salabook::BookingId;
///
/// let id = BookingId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(format!("{id}"), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Creates a booking id from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a booking.
///
/// New bookings start as `Pending`. Administrators confirm or cancel them;
/// owners may cancel their own bookings. `Cancelled` is terminal.
///
/// # Examples
///
/// ```
/// use salabook::BookingStatus;
///
/// assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
/// assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
/// assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting administrator confirmation (initial state).
    Pending,
    /// Confirmed by an administrator.
    Confirmed,
    /// Cancelled; terminal.
    Cancelled,
}

impl BookingStatus {
    /// Returns the storage representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its storage representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::BookingStatus;
    ///
    /// assert_eq!(BookingStatus::parse("pending").unwrap(), BookingStatus::Pending);
    /// assert!(BookingStatus::parse("unknown").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown booking status '{s}'"),
            }),
        }
    }

    /// Returns `true` if a booking may move from this status to `next`.
    ///
    /// Allowed transitions: pending to confirmed, pending to cancelled,
    /// confirmed to cancelled. There is no way out of cancelled, and no
    /// transition to the same status.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room reservation for a contiguous hour range on a single civil day.
///
/// Bookings reference their room by id. Query paths that join room data
/// populate the optional resolved [`Room`]; resolution is the storage
/// collaborator's job, never assumed by the core logic.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::{Booking, Hour, HourRange, RoomId};
///
/// let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(11).unwrap()).unwrap();
/// let booking = Booking::builder(
///     RoomId::new(1),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     slot,
/// )
/// .requester_name("Carlos Gomez")
/// .requester_email("carlos@example.com")
/// .attendees(8)
/// .build()
/// .unwrap();
///
/// assert_eq!(booking.slot().duration_hours(), 2);
/// assert!(booking.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: Option<BookingId>,
    room_id: RoomId,
    date: NaiveDate,
    slot: HourRange,
    requester_name: String,
    requester_email: String,
    attendees: u32,
    description: Option<String>,
    status: BookingStatus,
    room: Option<Room>,
}

impl Booking {
    /// Creates a new booking builder.
    #[must_use]
    pub fn builder(room_id: RoomId, date: NaiveDate, slot: HourRange) -> BookingBuilder {
        BookingBuilder {
            id: None,
            room_id,
            date,
            slot,
            requester_name: String::new(),
            requester_email: String::new(),
            attendees: 1,
            description: None,
            status: BookingStatus::Pending,
            room: None,
        }
    }

    /// Returns the storage-assigned id, if the booking has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<BookingId> {
        self.id
    }

    /// Returns the id of the booked room.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the booking date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the reserved hour range.
    #[must_use]
    pub const fn slot(&self) -> HourRange {
        self.slot
    }

    /// Returns the requester's name.
    #[must_use]
    pub fn requester_name(&self) -> &str {
        &self.requester_name
    }

    /// Returns the requester's email address.
    #[must_use]
    pub fn requester_email(&self) -> &str {
        &self.requester_email
    }

    /// Returns the attendee count.
    #[must_use]
    pub const fn attendees(&self) -> u32 {
        self.attendees
    }

    /// Returns the optional meeting description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the booking status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the resolved room, when the query path joined it.
    #[must_use]
    pub const fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    /// Returns `true` if the booking is not cancelled.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.status, BookingStatus::Cancelled)
    }

    /// Returns `true` if the given email owns this booking.
    ///
    /// Comparison is case-insensitive, as email addresses are.
    #[must_use]
    pub fn owned_by(&self, email: &str) -> bool {
        self.requester_email.eq_ignore_ascii_case(email.trim())
    }

    /// Returns `true` if the booking's start time lies before `now`.
    ///
    /// The library never reads the clock itself; callers supply the current
    /// local instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use salabook::{Booking, Hour, HourRange, RoomId};
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    /// let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(10).unwrap()).unwrap();
    /// let booking = Booking::builder(RoomId::new(1), date, slot)
    ///     .requester_name("Ana")
    ///     .requester_email("ana@example.com")
    ///     .build()
    ///     .unwrap();
    ///
    /// let before = date.and_hms_opt(8, 59, 0).unwrap();
    /// let after = date.and_hms_opt(9, 1, 0).unwrap();
    /// assert!(!booking.has_started(before));
    /// assert!(booking.has_started(after));
    /// ```
    #[must_use]
    pub fn has_started(&self, now: NaiveDateTime) -> bool {
        match self
            .date
            .and_hms_opt(u32::from(self.slot.start().value()), 0, 0)
        {
            Some(start) => start <= now,
            None => false,
        }
    }

    /// Returns a copy of this booking with the given id attached.
    ///
    /// Used by storage implementations after assigning an id.
    #[must_use]
    pub fn with_id(mut self, id: BookingId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy of this booking with the given status.
    #[must_use]
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns a copy of this booking with the resolved room attached.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }
}

/// Builder for creating [`Booking`] instances.
#[derive(Debug)]
pub struct BookingBuilder {
    id: Option<BookingId>,
    room_id: RoomId,
    date: NaiveDate,
    slot: HourRange,
    requester_name: String,
    requester_email: String,
    attendees: u32,
    description: Option<String>,
    status: BookingStatus,
    room: Option<Room>,
}

impl BookingBuilder {
    /// Sets the storage-assigned id.
    #[must_use]
    pub const fn id(mut self, id: BookingId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the requester's name. Leading and trailing whitespace is trimmed.
    #[must_use]
    pub fn requester_name(mut self, name: impl Into<String>) -> Self {
        self.requester_name = name.into().trim().to_string();
        self
    }

    /// Sets the requester's email. Leading and trailing whitespace is trimmed.
    #[must_use]
    pub fn requester_email(mut self, email: impl Into<String>) -> Self {
        self.requester_email = email.into().trim().to_string();
        self
    }

    /// Sets the attendee count.
    #[must_use]
    pub const fn attendees(mut self, attendees: u32) -> Self {
        self.attendees = attendees;
        self
    }

    /// Sets the optional meeting description.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());
        self
    }

    /// Sets the booking status.
    #[must_use]
    pub const fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches a resolved room.
    #[must_use]
    pub fn room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    /// Builds the booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the requester name or email is empty after
    /// trimming, or the attendee count is zero. Full form-level validation
    /// (email shape, capacity, slot conflicts) lives in
    /// [`crate::validate`]; these are the structural invariants every
    /// booking record must hold.
    pub fn build(self) -> Result<Booking, ValidationError> {
        if self.requester_name.is_empty() {
            return Err(ValidationError {
                field: "requester_name".into(),
                message: "requester name must be non-empty after trimming whitespace".into(),
            });
        }

        if self.requester_email.is_empty() {
            return Err(ValidationError {
                field: "requester_email".into(),
                message: "requester email must be non-empty after trimming whitespace".into(),
            });
        }

        if self.attendees == 0 {
            return Err(ValidationError {
                field: "attendees".into(),
                message: "attendee count must be at least 1".into(),
            });
        }

        Ok(Booking {
            id: self.id,
            room_id: self.room_id,
            date: self.date,
            slot: self.slot,
            requester_name: self.requester_name,
            requester_email: self.requester_email,
            attendees: self.attendees,
            description: self.description,
            status: self.status,
            room: self.room,
        })
    }
}

/// Error type for validation failures on domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hour::Hour;

    fn slot(start: u8, end: u8) -> HourRange {
        HourRange::new(Hour::try_from(start).unwrap(), Hour::try_from(end).unwrap()).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn base_builder() -> BookingBuilder {
        Booking::builder(RoomId::new(1), date(), slot(9, 11))
            .requester_name("Carlos Gomez")
            .requester_email("carlos@example.com")
            .attendees(8)
    }

    #[test]
    fn test_builder_basic() {
        let booking = base_builder().build().unwrap();
        assert_eq!(booking.id(), None);
        assert_eq!(booking.room_id(), RoomId::new(1));
        assert_eq!(booking.slot(), slot(9, 11));
        assert_eq!(booking.requester_name(), "Carlos Gomez");
        assert_eq!(booking.attendees(), 8);
        assert_eq!(booking.status(), BookingStatus::Pending);
        assert!(booking.room().is_none());
    }

    #[test]
    fn test_builder_trims_fields() {
        let booking = Booking::builder(RoomId::new(1), date(), slot(9, 10))
            .requester_name("  Ana Martinez  ")
            .requester_email(" ana@example.com ")
            .build()
            .unwrap();
        assert_eq!(booking.requester_name(), "Ana Martinez");
        assert_eq!(booking.requester_email(), "ana@example.com");
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        let result = Booking::builder(RoomId::new(1), date(), slot(9, 10))
            .requester_name("   ")
            .requester_email("a@b.com")
            .build();
        let err = result.unwrap_err();
        assert_eq!(err.field, "requester_name");
    }

    #[test]
    fn test_builder_rejects_empty_email() {
        let result = Booking::builder(RoomId::new(1), date(), slot(9, 10))
            .requester_name("Ana")
            .build();
        assert_eq!(result.unwrap_err().field, "requester_email");
    }

    #[test]
    fn test_builder_rejects_zero_attendees() {
        let result = base_builder().attendees(0).build();
        assert_eq!(result.unwrap_err().field, "attendees");
    }

    #[test]
    fn test_builder_blank_description_becomes_none() {
        let booking = base_builder().description(Some("   ".into())).build().unwrap();
        assert_eq!(booking.description(), None);

        let booking = base_builder()
            .description(Some(" sales review ".into()))
            .build()
            .unwrap();
        assert_eq!(booking.description(), Some("sales review"));
    }

    #[test]
    fn test_status_transitions() {
        use BookingStatus::{Cancelled, Confirmed, Pending};

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));

        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(BookingStatus::parse("confirmada").is_err());
    }

    #[test]
    fn test_is_active() {
        let booking = base_builder().build().unwrap();
        assert!(booking.is_active());
        assert!(booking.with_status(BookingStatus::Confirmed).is_active());

        let cancelled = base_builder()
            .status(BookingStatus::Cancelled)
            .build()
            .unwrap();
        assert!(!cancelled.is_active());
    }

    #[test]
    fn test_owned_by_case_insensitive() {
        let booking = base_builder().build().unwrap();
        assert!(booking.owned_by("carlos@example.com"));
        assert!(booking.owned_by("Carlos@Example.COM"));
        assert!(booking.owned_by("  carlos@example.com "));
        assert!(!booking.owned_by("ana@example.com"));
    }

    #[test]
    fn test_has_started() {
        let booking = base_builder().build().unwrap();
        let just_before = date().and_hms_opt(8, 59, 59).unwrap();
        let at_start = date().and_hms_opt(9, 0, 0).unwrap();
        let day_after = date().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();

        assert!(!booking.has_started(just_before));
        assert!(booking.has_started(at_start));
        assert!(booking.has_started(day_after));
    }

    #[test]
    fn test_with_id_and_room() {
        let room = crate::room::Room::builder("Sala del consejo", 10)
            .location("Oficina Central")
            .build()
            .unwrap()
            .with_id(RoomId::new(1));
        let booking = base_builder()
            .build()
            .unwrap()
            .with_id(BookingId::new(7))
            .with_room(room);
        assert_eq!(booking.id(), Some(BookingId::new(7)));
        assert_eq!(booking.room().unwrap().name(), "Sala del consejo");
    }

    #[test]
    fn test_booking_serde() {
        let booking = base_builder().build().unwrap().with_id(BookingId::new(3));
        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"pending\""));
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }
}
