//! Demo data seeding.
//!
//! Populates a store with a handful of rooms and bookings so a fresh
//! installation has something to show. Booking dates are computed relative
//! to the `today` argument, keeping the fixture usable on any day.

use chrono::{Days, NaiveDate};

use crate::booking::{Booking, BookingStatus};
use crate::error::{Error, Result};
use crate::hour::{Hour, HourRange};
use crate::room::Room;
use crate::store::Store;

/// Summary of what a seeding run inserted.
#[derive(Debug)]
pub struct SeedResult {
    /// Number of rooms created.
    pub rooms_created: usize,
    /// Number of bookings created.
    pub bookings_created: usize,
}

fn demo_rooms() -> Result<Vec<Room>> {
    let specs: [(&str, u32, &str); 6] = [
        ("Sala del consejo", 10, "Oficina Central"),
        ("Auditorio", 100, "2 Piso ECOP"),
        ("Sala Insumos", 20, "Insumos Central"),
        ("Amambay", 10, "Insumos Amambay"),
        ("San Juan nepomuceno", 12, "Oficina San Juan Nepomuceno"),
        ("Sala Piso 3", 8, "Piso 3"),
    ];

    specs
        .iter()
        .map(|(name, capacity, location)| {
            Room::builder(*name, *capacity)
                .location(*location)
                .build()
                .map_err(Error::from)
        })
        .collect()
}

fn slot(start: u8, end: u8) -> Result<HourRange> {
    let start = Hour::try_from(start)?;
    let end = Hour::try_from(end)?;
    Ok(HourRange::new(start, end)?)
}

/// Seeds the store with demo rooms and bookings.
///
/// Skips seeding entirely when the store already contains rooms, so the
/// fixture never mixes with real data.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn seed_demo_data(store: &mut dyn Store, today: NaiveDate) -> Result<SeedResult> {
    if !store.list_rooms(false)?.is_empty() {
        return Ok(SeedResult {
            rooms_created: 0,
            bookings_created: 0,
        });
    }

    let mut created_rooms = Vec::new();
    for room in demo_rooms()? {
        created_rooms.push(store.create_room(&room)?);
    }

    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| Error::Validation {
            field: "date".into(),
            message: "cannot compute the day after the given date".into(),
        })?;

    let room_id = |index: usize| {
        created_rooms[index].id().ok_or_else(|| Error::NotFound {
            resource: format!("room at seed position {index}"),
        })
    };

    let bookings = [
        Booking::builder(room_id(0)?, today, slot(9, 11)?)
            .requester_name("Carlos Gomez")
            .requester_email("carlos@ejemplo.com")
            .attendees(8)
            .description(Some("Reunion trimestral de ventas".to_string()))
            .status(BookingStatus::Confirmed)
            .build()?,
        Booking::builder(room_id(2)?, today, slot(14, 16)?)
            .requester_name("Ana Martinez")
            .requester_email("ana@ejemplo.com")
            .attendees(15)
            .description(Some("Presentacion de nuevo producto".to_string()))
            .status(BookingStatus::Confirmed)
            .build()?,
        Booking::builder(room_id(1)?, tomorrow, slot(10, 12)?)
            .requester_name("Miguel Lopez")
            .requester_email("miguel@ejemplo.com")
            .attendees(5)
            .description(Some("Sesion de brainstorming".to_string()))
            .status(BookingStatus::Pending)
            .build()?,
    ];

    let mut bookings_created = 0;
    for booking in &bookings {
        store.create_booking(booking)?;
        bookings_created += 1;
    }

    Ok(SeedResult {
        rooms_created: created_rooms.len(),
        bookings_created,
    })
}
