//! Booking creation operation.
//!
//! Planning validates the proposal against the room and the day's existing
//! bookings; execution persists the booking, where the store repeats the
//! conflict check atomically with the insert.

use chrono::NaiveDateTime;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::room::RoomId;
use crate::store::{BookingFilter, Store};
use crate::validate::{validate, BookingRequest};

use super::plan::{OperationPlan, PlanAction};

/// Options for creating a booking.
#[derive(Debug, Clone)]
pub struct BookOptions {
    room_id: RoomId,
    request: BookingRequest,
    now: NaiveDateTime,
}

impl BookOptions {
    /// Creates booking options for the given room and proposal.
    ///
    /// `now` is the caller's clock, used only to warn about past dates;
    /// the library never reads the system clock itself.
    #[must_use]
    pub const fn new(room_id: RoomId, request: BookingRequest, now: NaiveDateTime) -> Self {
        Self {
            room_id,
            request,
            now,
        }
    }
}

/// Plans a booking creation.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime};
/// use salabook::config::ConfigBuilder;
/// use salabook::operations::{BookOptions, BookPlan, PlanExecutor};
/// use salabook::store::{MemoryStore, Store};
/// use salabook::{BookingRequest, Hour, Room};
///
/// let mut store = MemoryStore::new();
/// let room = store
///     .create_room(&Room::builder("Amambay", 8).build().unwrap())
///     .unwrap();
/// let config = ConfigBuilder::new().build().unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let request = BookingRequest::new(date)
///     .with_requester_name("Carlos Gomez")
///     .with_requester_email("carlos@example.com")
///     .with_start_hour(Some(Hour::try_from(9).unwrap()))
///     .with_attendees(4);
/// let now = date.and_hms_opt(0, 0, 0).unwrap();
///
/// let options = BookOptions::new(room.id().unwrap(), request, now);
/// let plan = BookPlan::new(options, &config).build_plan(&store).unwrap();
/// let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
/// assert!(result.booking.unwrap().id().is_some());
/// ```
pub struct BookPlan<'a> {
    options: BookOptions,
    config: &'a Config,
}

impl<'a> BookPlan<'a> {
    /// Creates a new booking plan builder.
    #[must_use]
    pub const fn new(options: BookOptions, config: &'a Config) -> Self {
        Self { options, config }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist,
    /// [`Error::Rejected`] if the proposal fails validation, or an error if
    /// a store query fails.
    pub fn build_plan(&self, store: &dyn Store) -> Result<OperationPlan> {
        let room = store
            .get_room(self.options.room_id)?
            .ok_or_else(|| Error::NotFound {
                resource: format!("room {}", self.options.room_id),
            })?;

        // The validator decides which of these actually occupy the day.
        let existing = store.list_bookings(
            &BookingFilter::default()
                .with_room(self.options.room_id)
                .with_date(self.options.request.date()),
        )?;

        let booking = validate(&self.options.request, &room, &existing, self.config.window())?;

        let mut plan = OperationPlan::new(format!(
            "Book room '{}' on {} at {}",
            room.name(),
            booking.date(),
            booking.slot()
        ))
        .add_action(PlanAction::CreateBooking(booking));

        if self.options.request.date() < self.options.now.date() {
            plan = plan.add_warning(format!(
                "booking date {} is in the past",
                self.options.request.date()
            ));
        }

        Ok(plan)
    }
}
