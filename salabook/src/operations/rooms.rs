//! Room administration operations.
//!
//! Adding, editing, and deactivating rooms. All three require an
//! administrator; deactivation is a soft delete so existing bookings keep
//! a resolvable room.

use crate::error::{Error, Result};
use crate::room::{Room, RoomId};
use crate::session::User;
use crate::store::{BookingFilter, Store};

use super::plan::{OperationPlan, PlanAction};

fn require_admin(user: &User, action: &str) -> Result<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(Error::PermissionDenied {
            action: action.to_string(),
        })
    }
}

/// Plans the creation of a room.
///
/// # Examples
///
/// ```
/// use salabook::operations::{PlanExecutor, RoomAddPlan};
/// use salabook::store::MemoryStore;
/// use salabook::{Room, User};
///
/// let mut store = MemoryStore::new();
/// let admin = User::new("facilities@example.com").admin();
/// let room = Room::builder("Amambay", 8).build().unwrap();
///
/// let plan = RoomAddPlan::new(room, admin).build_plan().unwrap();
/// let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
/// assert!(result.room.unwrap().id().is_some());
/// ```
pub struct RoomAddPlan {
    room: Room,
    user: User,
}

impl RoomAddPlan {
    /// Creates a new room-add plan builder.
    #[must_use]
    pub const fn new(room: Room, user: User) -> Self {
        Self { room, user }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] if the user is not an
    /// administrator.
    pub fn build_plan(&self) -> Result<OperationPlan> {
        require_admin(&self.user, "add a room")?;
        Ok(
            OperationPlan::new(format!("Add room '{}'", self.room.name()))
                .add_action(PlanAction::CreateRoom(self.room.clone())),
        )
    }
}

/// Plans an edit of an existing room.
///
/// Shrinking the capacity below the attendee count of an existing active
/// booking is allowed but warned about; those bookings were validated
/// against the capacity in force when they were made.
pub struct RoomEditPlan {
    room: Room,
    user: User,
}

impl RoomEditPlan {
    /// Creates a new room-edit plan builder for a room that carries its id.
    #[must_use]
    pub const fn new(room: Room, user: User) -> Self {
        Self { room, user }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] if the user is not an
    /// administrator, or [`Error::NotFound`] if the room has no id or does
    /// not exist.
    pub fn build_plan(&self, store: &dyn Store) -> Result<OperationPlan> {
        require_admin(&self.user, "edit a room")?;

        let id = self.room.id().ok_or_else(|| Error::NotFound {
            resource: format!("room '{}' (no id)", self.room.name()),
        })?;
        if store.get_room(id)?.is_none() {
            return Err(Error::NotFound {
                resource: format!("room {id}"),
            });
        }

        let mut plan = OperationPlan::new(format!("Edit room {id} ('{}')", self.room.name()))
            .add_action(PlanAction::UpdateRoom(self.room.clone()));

        let active = store.list_bookings(&BookingFilter::default().with_room(id).active_only())?;
        let largest = active.iter().map(crate::booking::Booking::attendees).max();
        if let Some(largest) = largest {
            if largest > self.room.capacity() {
                plan = plan.add_warning(format!(
                    "an active booking has {largest} attendees, above the new capacity {}",
                    self.room.capacity()
                ));
            }
        }

        Ok(plan)
    }
}

/// Plans the deactivation of a room.
///
/// The room disappears from active listings and stops accepting bookings;
/// its existing bookings remain on record.
pub struct RoomDeactivatePlan {
    id: RoomId,
    user: User,
}

impl RoomDeactivatePlan {
    /// Creates a new room-deactivation plan builder.
    #[must_use]
    pub const fn new(id: RoomId, user: User) -> Self {
        Self { id, user }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] if the user is not an
    /// administrator, or [`Error::NotFound`] if the room does not exist.
    pub fn build_plan(&self, store: &dyn Store) -> Result<OperationPlan> {
        require_admin(&self.user, "deactivate a room")?;

        let room = store.get_room(self.id)?.ok_or_else(|| Error::NotFound {
            resource: format!("room {}", self.id),
        })?;

        let mut plan = OperationPlan::new(format!("Deactivate room {} ('{}')", self.id, room.name()))
            .add_action(PlanAction::DeactivateRoom(self.id));

        let active =
            store.list_bookings(&BookingFilter::default().with_room(self.id).active_only())?;
        if !active.is_empty() {
            plan = plan.add_warning(format!(
                "room '{}' still has {} active booking(s); they remain on record",
                room.name(),
                active.len()
            ));
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Booking;
    use crate::hour::{Hour, HourRange};
    use crate::operations::PlanExecutor;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn admin() -> User {
        User::new("facilities@example.com").admin()
    }

    fn regular() -> User {
        User::new("carlos@example.com")
    }

    fn sample_room() -> Room {
        Room::builder("Amambay", 8).build().unwrap()
    }

    fn booking_for(room_id: RoomId, attendees: u32) -> Booking {
        let slot = HourRange::new(Hour::try_from(9).unwrap(), Hour::try_from(10).unwrap()).unwrap();
        Booking::builder(
            room_id,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            slot,
        )
        .requester_name("Carlos Gomez")
        .requester_email("carlos@example.com")
        .attendees(attendees)
        .build()
        .unwrap()
    }

    #[test]
    fn test_add_room_requires_admin() {
        let err = RoomAddPlan::new(sample_room(), regular())
            .build_plan()
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied { .. }));

        RoomAddPlan::new(sample_room(), admin()).build_plan().unwrap();
    }

    #[test]
    fn test_add_room_executes() {
        let mut store = MemoryStore::new();
        let plan = RoomAddPlan::new(sample_room(), admin()).build_plan().unwrap();
        let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
        assert_eq!(result.room.unwrap().name(), "Amambay");
        assert_eq!(store.list_rooms(true).unwrap().len(), 1);
    }

    #[test]
    fn test_edit_room_updates_fields() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room()).unwrap();
        let id = room.id().unwrap();

        let edited = Room::builder("Amambay Norte", 12).id(id).build().unwrap();
        let plan = RoomEditPlan::new(edited, admin()).build_plan(&store).unwrap();
        assert!(plan.warnings.is_empty());
        PlanExecutor::new(&mut store).execute(&plan).unwrap();

        let fetched = store.get_room(id).unwrap().unwrap();
        assert_eq!(fetched.name(), "Amambay Norte");
        assert_eq!(fetched.capacity(), 12);
    }

    #[test]
    fn test_edit_room_warns_when_capacity_shrinks_below_booking() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room()).unwrap();
        let id = room.id().unwrap();
        store.create_booking(&booking_for(id, 8)).unwrap();

        let smaller = Room::builder("Amambay", 4).id(id).build().unwrap();
        let plan = RoomEditPlan::new(smaller, admin()).build_plan(&store).unwrap();
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("8 attendees"));
    }

    #[test]
    fn test_edit_room_missing() {
        let store = MemoryStore::new();
        let ghost = Room::builder("Ghost", 4).id(RoomId::new(9)).build().unwrap();
        let err = RoomEditPlan::new(ghost, admin())
            .build_plan(&store)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_edit_room_requires_admin() {
        let store = MemoryStore::new();
        let room = Room::builder("Amambay", 8).id(RoomId::new(1)).build().unwrap();
        let err = RoomEditPlan::new(room, regular())
            .build_plan(&store)
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied { .. }));
    }

    #[test]
    fn test_deactivate_room_warns_about_active_bookings() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room()).unwrap();
        let id = room.id().unwrap();
        store.create_booking(&booking_for(id, 4)).unwrap();

        let plan = RoomDeactivatePlan::new(id, admin()).build_plan(&store).unwrap();
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("1 active booking"));

        PlanExecutor::new(&mut store).execute(&plan).unwrap();
        assert!(store.list_rooms(true).unwrap().is_empty());
        // Its booking survives.
        assert_eq!(
            store
                .list_bookings(&BookingFilter::default().with_room(id))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_deactivate_room_requires_admin_and_existence() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room()).unwrap();
        let id = room.id().unwrap();

        let err = RoomDeactivatePlan::new(id, regular())
            .build_plan(&store)
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied { .. }));

        let err = RoomDeactivatePlan::new(RoomId::new(42), admin())
            .build_plan(&store)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
