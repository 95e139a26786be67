//! Booking lifecycle operations.
//!
//! Confirming, cancelling, and deleting bookings. Planning enforces the
//! lifecycle rules and who may act: administrators confirm and may change
//! any booking, requesters manage their own.

use chrono::NaiveDateTime;

use crate::booking::{BookingId, BookingStatus};
use crate::error::{Error, Result};
use crate::session::User;
use crate::store::Store;

use super::plan::{OperationPlan, PlanAction};

/// Options for changing a booking's status.
#[derive(Debug, Clone)]
pub struct TransitionOptions {
    id: BookingId,
    to: BookingStatus,
    user: User,
    now: NaiveDateTime,
}

impl TransitionOptions {
    /// Creates options for moving a booking to the given status.
    #[must_use]
    pub const fn new(id: BookingId, to: BookingStatus, user: User, now: NaiveDateTime) -> Self {
        Self { id, to, user, now }
    }
}

/// Plans a booking status change.
///
/// Allowed transitions: pending to confirmed, pending to cancelled, and
/// confirmed to cancelled while the booking has not started. Confirmation
/// requires an administrator; cancellation is open to the administrator or
/// the booking's owner.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use salabook::operations::{PlanExecutor, TransitionOptions, TransitionPlan};
/// use salabook::store::{MemoryStore, Store};
/// use salabook::{Booking, BookingStatus, Hour, HourRange, Room, User};
///
/// let mut store = MemoryStore::new();
/// let room = store
///     .create_room(&Room::builder("Amambay", 8).build().unwrap())
///     .unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(10).unwrap()).unwrap();
/// let booking = store
///     .create_booking(
///         &Booking::builder(room.id().unwrap(), date, slot)
///             .requester_name("Carlos Gomez")
///             .requester_email("carlos@example.com")
///             .build()
///             .unwrap(),
///     )
///     .unwrap();
///
/// let admin = User::new("facilities@example.com").admin();
/// let now = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let options = TransitionOptions::new(
///     booking.id().unwrap(),
///     BookingStatus::Confirmed,
///     admin,
///     now,
/// );
/// let plan = TransitionPlan::new(options).build_plan(&store).unwrap();
/// let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
/// assert_eq!(result.booking.unwrap().status(), BookingStatus::Confirmed);
/// ```
pub struct TransitionPlan {
    options: TransitionOptions,
}

impl TransitionPlan {
    /// Creates a new transition plan builder.
    #[must_use]
    pub const fn new(options: TransitionOptions) -> Self {
        Self { options }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the booking does not exist,
    /// [`Error::PermissionDenied`] if the user may not make this change,
    /// [`Error::InvalidTransition`] if the lifecycle forbids it, or
    /// [`Error::AlreadyStarted`] when cancelling a confirmed booking whose
    /// start time has passed.
    pub fn build_plan(&self, store: &dyn Store) -> Result<OperationPlan> {
        let id = self.options.id;
        let to = self.options.to;

        let booking = store.get_booking(id)?.ok_or_else(|| Error::NotFound {
            resource: format!("booking {id}"),
        })?;
        let from = booking.status();

        if !from.can_transition_to(to) {
            return Err(Error::InvalidTransition { id, from, to });
        }

        let allowed = match to {
            BookingStatus::Confirmed => self.options.user.is_admin(),
            BookingStatus::Cancelled => {
                self.options.user.is_admin() || booking.owned_by(self.options.user.email())
            }
            // can_transition_to never allows moving back to pending.
            BookingStatus::Pending => false,
        };
        if !allowed {
            return Err(Error::PermissionDenied {
                action: format!("set booking {id} to {to}"),
            });
        }

        if to == BookingStatus::Cancelled
            && from == BookingStatus::Confirmed
            && booking.has_started(self.options.now)
        {
            return Err(Error::AlreadyStarted { id });
        }

        Ok(
            OperationPlan::new(format!("Set booking {id} to {to}")).add_action(
                PlanAction::UpdateStatus { id, from, to },
            ),
        )
    }
}

/// Options for deleting a booking outright.
#[derive(Debug, Clone)]
pub struct DeleteOptions {
    id: BookingId,
    user: User,
    now: NaiveDateTime,
}

impl DeleteOptions {
    /// Creates options for deleting the given booking.
    #[must_use]
    pub const fn new(id: BookingId, user: User, now: NaiveDateTime) -> Self {
        Self { id, user, now }
    }
}

/// Plans a booking deletion.
///
/// Administrators delete any booking; owners only their own, and only
/// before it starts. Cancellation is the usual path, deletion removes the
/// record entirely.
pub struct DeletePlan {
    options: DeleteOptions,
}

impl DeletePlan {
    /// Creates a new deletion plan builder.
    #[must_use]
    pub const fn new(options: DeleteOptions) -> Self {
        Self { options }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the booking does not exist,
    /// [`Error::PermissionDenied`] if the user may not delete it, or
    /// [`Error::AlreadyStarted`] when an owner deletes a booking whose
    /// start time has passed.
    pub fn build_plan(&self, store: &dyn Store) -> Result<OperationPlan> {
        let id = self.options.id;
        let booking = store.get_booking(id)?.ok_or_else(|| Error::NotFound {
            resource: format!("booking {id}"),
        })?;

        if !self.options.user.is_admin() {
            if !booking.owned_by(self.options.user.email()) {
                return Err(Error::PermissionDenied {
                    action: format!("delete booking {id}"),
                });
            }
            if booking.has_started(self.options.now) {
                return Err(Error::AlreadyStarted { id });
            }
        }

        Ok(OperationPlan::new(format!("Delete booking {id}"))
            .add_action(PlanAction::DeleteBooking(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Booking;
    use crate::hour::{Hour, HourRange};
    use crate::operations::PlanExecutor;
    use crate::room::Room;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn before_start() -> NaiveDateTime {
        date().and_hms_opt(8, 0, 0).unwrap()
    }

    fn after_start() -> NaiveDateTime {
        date().and_hms_opt(10, 0, 0).unwrap()
    }

    fn owner() -> User {
        User::new("carlos@example.com")
    }

    fn admin() -> User {
        User::new("facilities@example.com").admin()
    }

    fn stranger() -> User {
        User::new("someone@example.com")
    }

    fn seeded_store(status: BookingStatus) -> (MemoryStore, BookingId) {
        let mut store = MemoryStore::new();
        let room = store
            .create_room(&Room::builder("Amambay", 8).build().unwrap())
            .unwrap();
        let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(10).unwrap()).unwrap();
        let booking = store
            .create_booking(
                &Booking::builder(room.id().unwrap(), date(), slot)
                    .requester_name("Carlos Gomez")
                    .requester_email("carlos@example.com")
                    .status(status)
                    .build()
                    .unwrap(),
            )
            .unwrap();
        let id = booking.id().unwrap();
        (store, id)
    }

    fn transition(
        store: &MemoryStore,
        id: BookingId,
        to: BookingStatus,
        user: User,
        now: NaiveDateTime,
    ) -> Result<OperationPlan> {
        TransitionPlan::new(TransitionOptions::new(id, to, user, now)).build_plan(store)
    }

    #[test]
    fn test_admin_confirms_pending() {
        let (mut store, id) = seeded_store(BookingStatus::Pending);
        let plan = transition(&store, id, BookingStatus::Confirmed, admin(), before_start())
            .unwrap();
        let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
        assert_eq!(result.booking.unwrap().status(), BookingStatus::Confirmed);
    }

    #[test]
    fn test_owner_cannot_confirm() {
        let (store, id) = seeded_store(BookingStatus::Pending);
        let err = transition(&store, id, BookingStatus::Confirmed, owner(), before_start())
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied { .. }));
    }

    #[test]
    fn test_owner_cancels_own_pending() {
        let (mut store, id) = seeded_store(BookingStatus::Pending);
        let plan = transition(&store, id, BookingStatus::Cancelled, owner(), before_start())
            .unwrap();
        let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
        assert_eq!(result.booking.unwrap().status(), BookingStatus::Cancelled);
    }

    #[test]
    fn test_stranger_cannot_cancel() {
        let (store, id) = seeded_store(BookingStatus::Pending);
        let err = transition(&store, id, BookingStatus::Cancelled, stranger(), before_start())
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied { .. }));
    }

    #[test]
    fn test_confirmed_cancelled_only_before_start() {
        let (store, id) = seeded_store(BookingStatus::Confirmed);

        transition(&store, id, BookingStatus::Cancelled, admin(), before_start()).unwrap();

        let err = transition(&store, id, BookingStatus::Cancelled, admin(), after_start())
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyStarted { .. }));
    }

    #[test]
    fn test_cancelled_is_terminal() {
        let (store, id) = seeded_store(BookingStatus::Cancelled);
        for to in [BookingStatus::Pending, BookingStatus::Confirmed] {
            let err = transition(&store, id, to, admin(), before_start()).unwrap_err();
            assert!(matches!(err, Error::InvalidTransition { .. }));
        }
    }

    #[test]
    fn test_transition_missing_booking() {
        let store = MemoryStore::new();
        let err = transition(
            &store,
            BookingId::new(99),
            BookingStatus::Confirmed,
            admin(),
            before_start(),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_owner_email_match_is_case_insensitive() {
        let (store, id) = seeded_store(BookingStatus::Pending);
        let user = User::new("CARLOS@Example.com");
        transition(&store, id, BookingStatus::Cancelled, user, before_start()).unwrap();
    }

    #[test]
    fn test_admin_deletes_any_booking() {
        let (mut store, id) = seeded_store(BookingStatus::Confirmed);
        let plan = DeletePlan::new(DeleteOptions::new(id, admin(), after_start()))
            .build_plan(&store)
            .unwrap();
        PlanExecutor::new(&mut store).execute(&plan).unwrap();
        assert!(store.get_booking(id).unwrap().is_none());
    }

    #[test]
    fn test_owner_deletes_own_future_booking() {
        let (mut store, id) = seeded_store(BookingStatus::Pending);
        let plan = DeletePlan::new(DeleteOptions::new(id, owner(), before_start()))
            .build_plan(&store)
            .unwrap();
        PlanExecutor::new(&mut store).execute(&plan).unwrap();
        assert!(store.get_booking(id).unwrap().is_none());
    }

    #[test]
    fn test_owner_cannot_delete_started_booking() {
        let (store, id) = seeded_store(BookingStatus::Pending);
        let err = DeletePlan::new(DeleteOptions::new(id, owner(), after_start()))
            .build_plan(&store)
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyStarted { .. }));
    }

    #[test]
    fn test_stranger_cannot_delete() {
        let (store, id) = seeded_store(BookingStatus::Pending);
        let err = DeletePlan::new(DeleteOptions::new(id, stranger(), before_start()))
            .build_plan(&store)
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied { .. }));
    }

    #[test]
    fn test_delete_missing_booking() {
        let store = MemoryStore::new();
        let err = DeletePlan::new(DeleteOptions::new(BookingId::new(5), admin(), before_start()))
            .build_plan(&store)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
