//! SQLite-backed storage.
//!
//! This backend manages a `SQLite` connection with WAL mode and a busy
//! timeout for concurrent access, and runs the booking conflict check
//! inside an IMMEDIATE transaction with the insert.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OpenFlags, Row, ToSql, TransactionBehavior};

use crate::booking::{Booking, BookingId, BookingStatus};
use crate::error::{Error, Result};
use crate::hour::{Hour, HourRange};
use crate::room::{Room, RoomId};

use super::config::StoreConfig;
use super::schema::{COUNT_SLOT_CONFLICTS, INSERT_BOOKING};
use super::{BookingFilter, Store};

const INSERT_ROOM: &str = r"
    INSERT INTO rooms (name, capacity, location, equipment, active)
    VALUES (?, ?, ?, ?, ?)
";

const UPDATE_ROOM: &str = r"
    UPDATE rooms
    SET name = ?, capacity = ?, location = ?, equipment = ?, active = ?
    WHERE id = ?
";

const SELECT_ROOM: &str = r"
    SELECT id, name, capacity, location, equipment, active
    FROM rooms
    WHERE id = ?
";

const SELECT_BOOKING_COLUMNS: &str = r"
    SELECT b.id, b.room_id, b.date, b.start_hour, b.end_hour,
           b.requester_name, b.requester_email, b.attendees, b.description,
           b.status,
           r.id, r.name, r.capacity, r.location, r.equipment, r.active
    FROM bookings b
    LEFT JOIN rooms r ON r.id = b.room_id
";

const UPDATE_BOOKING_STATUS: &str = "UPDATE bookings SET status = ? WHERE id = ?";

const DELETE_BOOKING: &str = "DELETE FROM bookings WHERE id = ?";

fn boxed<E: std::error::Error + Send + Sync + 'static>(err: E) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(err))
}

fn parse_date(text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(boxed)
}

fn parse_slot(start: u8, end: u8) -> rusqlite::Result<HourRange> {
    let start = Hour::try_from(start).map_err(boxed)?;
    let end = Hour::try_from(end).map_err(boxed)?;
    HourRange::new(start, end).map_err(boxed)
}

/// Deserializes a room from a row starting at `offset`.
///
/// Expects fields in this order: id, name, capacity, location, equipment,
/// active.
fn row_to_room(row: &Row<'_>, offset: usize) -> rusqlite::Result<Room> {
    let id: i64 = row.get(offset)?;
    let name: String = row.get(offset + 1)?;
    let capacity: u32 = row.get(offset + 2)?;
    let location: String = row.get(offset + 3)?;
    let equipment_json: String = row.get(offset + 4)?;
    let active: bool = row.get(offset + 5)?;

    let equipment: Vec<String> = serde_json::from_str(&equipment_json).map_err(boxed)?;

    Room::builder(name, capacity)
        .id(RoomId::new(id))
        .location(location)
        .equipment(equipment)
        .active(active)
        .build()
        .map_err(boxed)
}

/// Deserializes a booking, with its joined room when present, from a row
/// shaped like [`SELECT_BOOKING_COLUMNS`].
fn row_to_booking(row: &Row<'_>) -> rusqlite::Result<Booking> {
    let id: i64 = row.get(0)?;
    let room_id: i64 = row.get(1)?;
    let date_text: String = row.get(2)?;
    let start_hour: u8 = row.get(3)?;
    let end_hour: u8 = row.get(4)?;
    let requester_name: String = row.get(5)?;
    let requester_email: String = row.get(6)?;
    let attendees: u32 = row.get(7)?;
    let description: Option<String> = row.get(8)?;
    let status_text: String = row.get(9)?;

    let date = parse_date(&date_text)?;
    let slot = parse_slot(start_hour, end_hour)?;
    let status = BookingStatus::parse(&status_text).map_err(boxed)?;

    let mut builder = Booking::builder(RoomId::new(room_id), date, slot)
        .id(BookingId::new(id))
        .requester_name(requester_name)
        .requester_email(requester_email)
        .attendees(attendees)
        .description(description)
        .status(status);

    // The joined room id is NULL when the room row is gone.
    let joined_room: Option<i64> = row.get(10)?;
    if joined_room.is_some() {
        builder = builder.room(row_to_room(row, 10)?);
    }

    builder.build().map_err(boxed)
}

/// A [`Store`] backed by a `SQLite` database file.
///
/// # Examples
///
/// ```no_run
/// use salabook::store::{SqliteStore, Store, StoreConfig};
///
/// let config = StoreConfig::new("/tmp/salabook.db");
/// let store = SqliteStore::open(config).unwrap();
/// let rooms = store.list_rooms(true).unwrap();
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    #[allow(dead_code)]
    config: StoreConfig,
}

impl SqliteStore {
    /// Opens a store with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode for concurrent access
    /// - Configure the busy timeout
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened, the parent
    /// directory cannot be created, PRAGMA settings cannot be applied, or
    /// schema initialization or verification fails.
    pub fn open(config: StoreConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row, so query it instead of executing.
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn, config })
    }

    /// Opens a transient in-memory store, mainly for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or the schema
    /// cannot be initialized.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        super::migrations::check_schema_compatibility(&conn)?;
        Ok(Self {
            conn,
            config: StoreConfig::new(":memory:"),
        })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    fn require_room_id(room: &Room) -> Result<RoomId> {
        room.id().ok_or_else(|| Error::NotFound {
            resource: format!("room '{}' (no id)", room.name()),
        })
    }

    fn equipment_json(room: &Room) -> Result<String> {
        serde_json::to_string(room.equipment()).map_err(|e| Error::Validation {
            field: "equipment".into(),
            message: e.to_string(),
        })
    }
}

impl Store for SqliteStore {
    fn list_rooms(&self, active_only: bool) -> Result<Vec<Room>> {
        let sql = if active_only {
            "SELECT id, name, capacity, location, equipment, active FROM rooms \
             WHERE active = 1 ORDER BY name"
        } else {
            "SELECT id, name, capacity, location, equipment, active FROM rooms ORDER BY name"
        };

        let mut stmt = self.conn.prepare(sql)?;
        let rooms = stmt
            .query_map([], |row| row_to_room(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    fn get_room(&self, id: RoomId) -> Result<Option<Room>> {
        let mut stmt = self.conn.prepare(SELECT_ROOM)?;
        match stmt.query_row(params![id.value()], |row| row_to_room(row, 0)) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_room(&mut self, room: &Room) -> Result<Room> {
        let equipment = Self::equipment_json(room)?;
        self.conn.execute(
            INSERT_ROOM,
            params![
                room.name(),
                room.capacity(),
                room.location(),
                equipment,
                room.is_active(),
            ],
        )?;
        let id = RoomId::new(self.conn.last_insert_rowid());
        Ok(room.clone().with_id(id))
    }

    fn update_room(&mut self, room: &Room) -> Result<Room> {
        let id = Self::require_room_id(room)?;
        let equipment = Self::equipment_json(room)?;
        let changed = self.conn.execute(
            UPDATE_ROOM,
            params![
                room.name(),
                room.capacity(),
                room.location(),
                equipment,
                room.is_active(),
                id.value(),
            ],
        )?;
        if changed == 0 {
            return Err(Error::NotFound {
                resource: format!("room {id}"),
            });
        }
        Ok(room.clone())
    }

    fn deactivate_room(&mut self, id: RoomId) -> Result<Room> {
        let room = self.get_room(id)?.ok_or_else(|| Error::NotFound {
            resource: format!("room {id}"),
        })?;
        let deactivated = room.deactivated();
        self.update_room(&deactivated)
    }

    fn list_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        let mut sql = String::from(SELECT_BOOKING_COLUMNS);
        let mut clauses: Vec<&str> = Vec::new();
        let mut bound: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(room_id) = filter.room_id() {
            clauses.push("b.room_id = ?");
            bound.push(Box::new(room_id.value()));
        }
        if let Some(date) = filter.date() {
            clauses.push("b.date = ?");
            bound.push(Box::new(date.format("%Y-%m-%d").to_string()));
        }
        if let Some(email) = filter.requester_email() {
            clauses.push("LOWER(b.requester_email) = ?");
            bound.push(Box::new(email.to_string()));
        }
        if filter.is_active_only() {
            clauses.push("b.status != 'cancelled'");
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY b.date, b.start_hour, b.id");

        let mut stmt = self.conn.prepare(&sql)?;
        let params = rusqlite::params_from_iter(bound.iter().map(|value| value.as_ref() as &dyn ToSql));
        let bookings = stmt
            .query_map(params, row_to_booking)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookings)
    }

    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>> {
        let sql = format!("{SELECT_BOOKING_COLUMNS} WHERE b.id = ?");
        let mut stmt = self.conn.prepare(&sql)?;
        match stmt.query_row(params![id.value()], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_booking(&mut self, booking: &Booking) -> Result<Booking> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let date = booking.date().format("%Y-%m-%d").to_string();
        let conflicts: i64 = tx.query_row(
            COUNT_SLOT_CONFLICTS,
            params![
                booking.room_id().value(),
                date,
                booking.slot().end().value(),
                booking.slot().start().value(),
            ],
            |row| row.get(0),
        )?;
        if conflicts > 0 {
            return Err(Error::SlotConflict {
                room_id: booking.room_id(),
                date: booking.date(),
                slot: booking.slot(),
            });
        }

        tx.execute(
            INSERT_BOOKING,
            params![
                booking.room_id().value(),
                date,
                booking.slot().start().value(),
                booking.slot().end().value(),
                booking.requester_name(),
                booking.requester_email(),
                booking.attendees(),
                booking.description(),
                booking.status().as_str(),
            ],
        )?;

        let id = BookingId::new(tx.last_insert_rowid());
        tx.commit()?;

        let mut stored = booking.clone().with_id(id);
        if let Some(room) = self.get_room(booking.room_id())? {
            stored = stored.with_room(room);
        }
        Ok(stored)
    }

    fn update_status(&mut self, id: BookingId, status: BookingStatus) -> Result<Booking> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let changed = tx.execute(UPDATE_BOOKING_STATUS, params![status.as_str(), id.value()])?;
        if changed == 0 {
            return Err(Error::NotFound {
                resource: format!("booking {id}"),
            });
        }
        tx.commit()?;

        self.get_booking(id)?.ok_or_else(|| Error::NotFound {
            resource: format!("booking {id}"),
        })
    }

    fn delete_booking(&mut self, id: BookingId) -> Result<()> {
        let changed = self.conn.execute(DELETE_BOOKING, params![id.value()])?;
        if changed == 0 {
            return Err(Error::NotFound {
                resource: format!("booking {id}"),
            });
        }
        Ok(())
    }
}
