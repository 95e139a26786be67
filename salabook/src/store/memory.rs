//! In-memory storage.
//!
//! [`MemoryStore`] keeps rooms and bookings in plain maps with the same
//! observable behavior as the `SQLite` backend, for tests and throwaway
//! sessions. Nothing survives the process.

use std::collections::BTreeMap;

use crate::booking::{Booking, BookingId, BookingStatus};
use crate::error::{Error, Result};
use crate::room::{Room, RoomId};

use super::{BookingFilter, Store};

/// A [`Store`] that keeps everything in memory.
///
/// # Examples
///
/// ```
/// use salabook::store::{MemoryStore, Store};
/// use salabook::Room;
///
/// let mut store = MemoryStore::new();
/// let room = store
///     .create_room(&Room::builder("Amambay", 8).build().unwrap())
///     .unwrap();
/// assert_eq!(room.id().unwrap().value(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    rooms: BTreeMap<i64, Room>,
    bookings: BTreeMap<i64, Booking>,
    next_room_id: i64,
    next_booking_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn attach_room(&self, booking: &Booking) -> Booking {
        match self.rooms.get(&booking.room_id().value()) {
            Some(room) => booking.clone().with_room(room.clone()),
            None => booking.clone(),
        }
    }

    fn matches(filter: &BookingFilter, booking: &Booking) -> bool {
        if let Some(room_id) = filter.room_id() {
            if booking.room_id() != room_id {
                return false;
            }
        }
        if let Some(date) = filter.date() {
            if booking.date() != date {
                return false;
            }
        }
        if let Some(email) = filter.requester_email() {
            if !booking.owned_by(email) {
                return false;
            }
        }
        if filter.is_active_only() && !booking.is_active() {
            return false;
        }
        true
    }
}

impl Store for MemoryStore {
    fn list_rooms(&self, active_only: bool) -> Result<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .rooms
            .values()
            .filter(|room| !active_only || room.is_active())
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(rooms)
    }

    fn get_room(&self, id: RoomId) -> Result<Option<Room>> {
        Ok(self.rooms.get(&id.value()).cloned())
    }

    fn create_room(&mut self, room: &Room) -> Result<Room> {
        self.next_room_id += 1;
        let stored = room.clone().with_id(RoomId::new(self.next_room_id));
        self.rooms.insert(self.next_room_id, stored.clone());
        Ok(stored)
    }

    fn update_room(&mut self, room: &Room) -> Result<Room> {
        let id = room.id().ok_or_else(|| Error::NotFound {
            resource: format!("room '{}' (no id)", room.name()),
        })?;
        if !self.rooms.contains_key(&id.value()) {
            return Err(Error::NotFound {
                resource: format!("room {id}"),
            });
        }
        self.rooms.insert(id.value(), room.clone());
        Ok(room.clone())
    }

    fn deactivate_room(&mut self, id: RoomId) -> Result<Room> {
        let room = self
            .rooms
            .get(&id.value())
            .cloned()
            .ok_or_else(|| Error::NotFound {
                resource: format!("room {id}"),
            })?;
        let deactivated = room.deactivated();
        self.rooms.insert(id.value(), deactivated.clone());
        Ok(deactivated)
    }

    fn list_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .values()
            .filter(|booking| Self::matches(filter, booking))
            .map(|booking| self.attach_room(booking))
            .collect();
        bookings.sort_by(|a, b| {
            (a.date(), a.slot().start(), a.id()).cmp(&(b.date(), b.slot().start(), b.id()))
        });
        Ok(bookings)
    }

    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>> {
        Ok(self
            .bookings
            .get(&id.value())
            .map(|booking| self.attach_room(booking)))
    }

    fn create_booking(&mut self, booking: &Booking) -> Result<Booking> {
        let conflict = self.bookings.values().any(|existing| {
            existing.room_id() == booking.room_id()
                && existing.date() == booking.date()
                && existing.is_active()
                && existing.slot().overlaps(&booking.slot())
        });
        if conflict {
            return Err(Error::SlotConflict {
                room_id: booking.room_id(),
                date: booking.date(),
                slot: booking.slot(),
            });
        }

        self.next_booking_id += 1;
        let stored = booking.clone().with_id(BookingId::new(self.next_booking_id));
        self.bookings.insert(self.next_booking_id, stored.clone());
        Ok(self.attach_room(&stored))
    }

    fn update_status(&mut self, id: BookingId, status: BookingStatus) -> Result<Booking> {
        let booking = self
            .bookings
            .get(&id.value())
            .cloned()
            .ok_or_else(|| Error::NotFound {
                resource: format!("booking {id}"),
            })?;
        let updated = booking.with_status(status);
        self.bookings.insert(id.value(), updated.clone());
        Ok(self.attach_room(&updated))
    }

    fn delete_booking(&mut self, id: BookingId) -> Result<()> {
        self.bookings
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| Error::NotFound {
                resource: format!("booking {id}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hour::{Hour, HourRange};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn slot(start: u8, end: u8) -> HourRange {
        HourRange::new(Hour::try_from(start).unwrap(), Hour::try_from(end).unwrap()).unwrap()
    }

    fn sample_room(name: &str) -> Room {
        Room::builder(name, 10).build().unwrap()
    }

    fn sample_booking(room_id: RoomId, start: u8, end: u8) -> Booking {
        Booking::builder(room_id, date(), slot(start, end))
            .requester_name("Carlos Gomez")
            .requester_email("carlos@example.com")
            .attendees(4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_rooms_sorted_and_filtered() {
        let mut store = MemoryStore::new();
        store.create_room(&sample_room("Zulia")).unwrap();
        let amambay = store.create_room(&sample_room("Amambay")).unwrap();
        store.deactivate_room(amambay.id().unwrap()).unwrap();

        let all: Vec<String> = store
            .list_rooms(false)
            .unwrap()
            .into_iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(all, vec!["Amambay", "Zulia"]);

        let active = store.list_rooms(true).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name(), "Zulia");
    }

    #[test]
    fn test_conflict_detection_matches_sqlite_semantics() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room("Amambay")).unwrap();
        let room_id = room.id().unwrap();

        store.create_booking(&sample_booking(room_id, 9, 11)).unwrap();

        // Overlap rejected, adjacency allowed.
        assert!(store
            .create_booking(&sample_booking(room_id, 10, 12))
            .unwrap_err()
            .is_conflict());
        store.create_booking(&sample_booking(room_id, 11, 12)).unwrap();
    }

    #[test]
    fn test_cancelled_frees_the_slot() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room("Amambay")).unwrap();
        let room_id = room.id().unwrap();

        let first = store.create_booking(&sample_booking(room_id, 9, 11)).unwrap();
        store
            .update_status(first.id().unwrap(), BookingStatus::Cancelled)
            .unwrap();
        store.create_booking(&sample_booking(room_id, 9, 11)).unwrap();
    }

    #[test]
    fn test_bookings_carry_resolved_room() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room("Amambay")).unwrap();
        let booking = store
            .create_booking(&sample_booking(room.id().unwrap(), 9, 10))
            .unwrap();
        assert_eq!(booking.room().unwrap().name(), "Amambay");

        let listed = store.list_bookings(&BookingFilter::default()).unwrap();
        assert_eq!(listed[0].room().unwrap().name(), "Amambay");
    }

    #[test]
    fn test_filters() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room("Amambay")).unwrap();
        let room_id = room.id().unwrap();

        let first = store.create_booking(&sample_booking(room_id, 9, 10)).unwrap();
        store.create_booking(&sample_booking(room_id, 11, 12)).unwrap();
        store
            .update_status(first.id().unwrap(), BookingStatus::Cancelled)
            .unwrap();

        let active = store
            .list_bookings(&BookingFilter::default().active_only())
            .unwrap();
        assert_eq!(active.len(), 1);

        let by_email = store
            .list_bookings(&BookingFilter::default().with_requester_email("CARLOS@example.com"))
            .unwrap();
        assert_eq!(by_email.len(), 2);

        let other_date = BookingFilter::default()
            .with_date(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
        assert!(store.list_bookings(&other_date).unwrap().is_empty());
    }

    #[test]
    fn test_delete_booking() {
        let mut store = MemoryStore::new();
        let room = store.create_room(&sample_room("Amambay")).unwrap();
        let booking = store
            .create_booking(&sample_booking(room.id().unwrap(), 9, 10))
            .unwrap();
        let id = booking.id().unwrap();

        store.delete_booking(id).unwrap();
        assert!(store.get_booking(id).unwrap().is_none());
        assert!(store.delete_booking(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut store = MemoryStore::new();
        let a = store.create_room(&sample_room("A")).unwrap();
        let b = store.create_room(&sample_room("B")).unwrap();
        assert_eq!(a.id().unwrap().value(), 1);
        assert_eq!(b.id().unwrap().value(), 2);
    }
}
