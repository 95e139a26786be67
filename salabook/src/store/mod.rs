//! Storage layer for rooms and bookings.
//!
//! Every storage backend implements the [`Store`] trait, so the operations
//! layer and the CLI are written once against it. Two backends ship with
//! the library: [`SqliteStore`] for persistent data and [`MemoryStore`]
//! for tests and throwaway sessions.
//!
//! The conflict check for new bookings lives inside [`Store::create_booking`]
//! and runs atomically with the insert, so two concurrent submissions for
//! the same slot cannot both succeed.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use salabook::store::{BookingFilter, MemoryStore, Store};
//! use salabook::{Booking, Hour, HourRange, Room};
//!
//! let mut store = MemoryStore::new();
//! let room = store
//!     .create_room(&Room::builder("Sala del consejo", 10).build().unwrap())
//!     .unwrap();
//!
//! let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(11).unwrap()).unwrap();
//! let booking = Booking::builder(
//!     room.id().unwrap(),
//!     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//!     slot,
//! )
//! .requester_name("Carlos Gomez")
//! .requester_email("carlos@example.com")
//! .build()
//! .unwrap();
//!
//! let stored = store.create_booking(&booking).unwrap();
//! assert!(stored.id().is_some());
//!
//! let listed = store.list_bookings(&BookingFilter::default()).unwrap();
//! assert_eq!(listed.len(), 1);
//! ```

mod config;
mod memory;
pub mod migrations;
mod schema;
mod sqlite;

use chrono::NaiveDate;

use crate::booking::{Booking, BookingId, BookingStatus};
use crate::error::Result;
use crate::room::{Room, RoomId};

// Re-export public API
pub use config::{default_data_dir, resolve_store_path, StoreConfig};
pub use memory::MemoryStore;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use sqlite::SqliteStore;

/// Criteria for narrowing a booking listing.
///
/// An empty filter matches every booking. Criteria combine with AND.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::store::BookingFilter;
/// use salabook::RoomId;
///
/// let filter = BookingFilter::default()
///     .with_room(RoomId::new(1))
///     .with_date(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .active_only();
/// assert_eq!(filter.room_id(), Some(RoomId::new(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    room_id: Option<RoomId>,
    date: Option<NaiveDate>,
    requester_email: Option<String>,
    active_only: bool,
}

impl BookingFilter {
    /// Restricts the listing to one room.
    #[must_use]
    pub const fn with_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Restricts the listing to one date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Restricts the listing to bookings made with the given email.
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn with_requester_email(mut self, email: impl Into<String>) -> Self {
        self.requester_email = Some(email.into().trim().to_lowercase());
        self
    }

    /// Excludes cancelled bookings from the listing.
    #[must_use]
    pub const fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Returns the room restriction, if any.
    #[must_use]
    pub const fn room_id(&self) -> Option<RoomId> {
        self.room_id
    }

    /// Returns the date restriction, if any.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the requester-email restriction, if any.
    #[must_use]
    pub fn requester_email(&self) -> Option<&str> {
        self.requester_email.as_deref()
    }

    /// Returns `true` if cancelled bookings are excluded.
    #[must_use]
    pub const fn is_active_only(&self) -> bool {
        self.active_only
    }
}

/// A storage backend for rooms and bookings.
///
/// Implementations persist whatever they are given; validating a proposal
/// is the caller's job, except for the slot-conflict check, which every
/// backend must run atomically inside [`Store::create_booking`].
pub trait Store {
    /// Lists rooms ordered by name.
    ///
    /// With `active_only`, soft-deleted rooms are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend query fails.
    fn list_rooms(&self, active_only: bool) -> Result<Vec<Room>>;

    /// Retrieves a room by id, active or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend query fails.
    fn get_room(&self, id: RoomId) -> Result<Option<Room>>;

    /// Persists a new room and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend insert fails.
    fn create_room(&mut self, room: &Room) -> Result<Room>;

    /// Overwrites an existing room's fields.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the room has no id or does not
    /// exist, or an error if the backend update fails.
    fn update_room(&mut self, room: &Room) -> Result<Room>;

    /// Soft-deletes a room by clearing its active flag.
    ///
    /// Existing bookings for the room are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the room does not exist, or an
    /// error if the backend update fails.
    fn deactivate_room(&mut self, id: RoomId) -> Result<Room>;

    /// Lists bookings matching the filter, ordered by date, start hour,
    /// then id.
    ///
    /// Returned bookings carry their resolved [`Room`] when it still
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend query fails.
    fn list_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>>;

    /// Retrieves a booking by id, with its resolved room attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend query fails.
    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>>;

    /// Persists a new booking and returns it with its assigned id.
    ///
    /// The slot-conflict check runs atomically with the insert: if any
    /// non-cancelled booking for the same room and date overlaps the new
    /// booking's slot, nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SlotConflict`] when the slot is taken, or an
    /// error if the backend insert fails.
    fn create_booking(&mut self, booking: &Booking) -> Result<Booking>;

    /// Sets a booking's status and returns the updated booking.
    ///
    /// Lifecycle rules are enforced by the operations layer; the store
    /// writes whatever status it is given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the booking does not exist, or
    /// an error if the backend update fails.
    fn update_status(&mut self, id: BookingId, status: BookingStatus) -> Result<Booking>;

    /// Removes a booking entirely.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the booking does not exist, or
    /// an error if the backend delete fails.
    fn delete_booking(&mut self, id: BookingId) -> Result<()>;
}
