//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the salabook library.

use chrono::{NaiveDate, NaiveDateTime};
use salabook::config::ConfigBuilder;
use salabook::store::{SqliteStore, Store, StoreConfig};
use salabook::{BookingRequest, Config, Hour, Room};
use tempfile::TempDir;

/// Creates a SQLite store in a temporary directory.
///
/// The returned `TempDir` must be kept alive for the store's lifetime; the
/// database file is removed with it.
#[allow(dead_code)]
pub fn create_test_store() -> (TempDir, SqliteStore) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let store = SqliteStore::open(StoreConfig::new(temp.path().join("test.db")))
        .expect("Failed to open test store");
    (temp, store)
}

/// Creates a configuration with default settings.
#[allow(dead_code)]
pub fn create_test_config() -> Config {
    ConfigBuilder::new().build().expect("Failed to build config")
}

/// A fixed booking date used across tests.
#[allow(dead_code)]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

/// A clock reading from the day before [`test_date`].
#[allow(dead_code)]
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

/// Inserts a room and returns it with its assigned id.
#[allow(dead_code)]
pub fn add_room(store: &mut dyn Store, name: &str, capacity: u32) -> Room {
    let room = Room::builder(name, capacity)
        .location("Oficina Central")
        .build()
        .expect("valid room");
    store.create_room(&room).expect("Failed to create room")
}

/// A complete one-hour booking request starting at the given hour.
#[allow(dead_code)]
pub fn sample_request(start: u8) -> BookingRequest {
    BookingRequest::new(test_date())
        .with_requester_name("Carlos Gomez")
        .with_requester_email("carlos@example.com")
        .with_start_hour(Some(Hour::try_from(start).expect("valid hour")))
        .with_attendees(4)
}
