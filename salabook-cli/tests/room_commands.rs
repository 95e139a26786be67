//! Integration tests for room management commands and seeding.

mod common;

use common::{TestEnv, TEST_DATE};
use predicates::prelude::*;

#[test]
fn test_rooms_empty() {
    let env = TestEnv::new();
    env.init();

    env.command()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("No rooms found"));
}

#[test]
fn test_room_add_and_list() {
    let env = TestEnv::new();
    env.init();

    env.admin_command()
        .arg("room-add")
        .arg("Amambay")
        .arg("8")
        .arg("--location")
        .arg("Insumos Amambay")
        .arg("--equipment")
        .arg("tv")
        .arg("--equipment")
        .arg("pizarra")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added room 'Amambay'"));

    env.command()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amambay"))
        .stdout(predicate::str::contains("capacity 8"))
        .stdout(predicate::str::contains("tv, pizarra"));
}

#[test]
fn test_room_add_requires_identity_and_admin() {
    let env = TestEnv::new();
    env.init();

    // No identity at all
    let output = env
        .command()
        .arg("room-add")
        .arg("Amambay")
        .arg("8")
        .output()
        .expect("Failed to run room-add");
    assert_eq!(output.status.code(), Some(4));

    // An identity without admin rights
    let output = env
        .command()
        .arg("--user")
        .arg("carlos@example.com")
        .arg("room-add")
        .arg("Amambay")
        .arg("8")
        .output()
        .expect("Failed to run room-add");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    assert!(stderr.contains("permission denied"), "{stderr}");
}

#[test]
fn test_room_add_rejects_zero_capacity() {
    let env = TestEnv::new();
    env.init();

    let output = env
        .admin_command()
        .arg("room-add")
        .arg("Amambay")
        .arg("0")
        .output()
        .expect("Failed to run room-add");
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_room_edit_changes_fields() {
    let env = TestEnv::new();
    env.init();
    let room_id = env.add_room("Amambay", 8);

    env.admin_command()
        .arg("room-edit")
        .arg(room_id.to_string())
        .arg("--capacity")
        .arg("12")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated room"));

    env.command()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity 12"))
        // The name was not given, so it stays
        .stdout(predicate::str::contains("Amambay"));
}

#[test]
fn test_room_edit_warns_when_capacity_shrinks() {
    let env = TestEnv::new();
    env.init();
    let room_id = env.add_room("Amambay", 8);

    env.command()
        .arg("--user")
        .arg("carlos@example.com")
        .arg("book")
        .arg(room_id.to_string())
        .arg("--date")
        .arg(TEST_DATE)
        .arg("--start")
        .arg("9")
        .arg("--name")
        .arg("Carlos Gomez")
        .arg("--attendees")
        .arg("6")
        .assert()
        .success();

    env.admin_command()
        .arg("room-edit")
        .arg(room_id.to_string())
        .arg("--capacity")
        .arg("4")
        .assert()
        .success()
        .stderr(predicate::str::contains("above the new capacity"));
}

#[test]
fn test_room_deactivate() {
    let env = TestEnv::new();
    env.init();
    let room_id = env.add_room("Amambay", 8);

    env.admin_command()
        .arg("room-deactivate")
        .arg(room_id.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deactivated room"));

    // Gone from the default listing, visible with --all
    env.command()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("No rooms found"));
    env.command()
        .arg("rooms")
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("(inactive)"));

    // Booking a deactivated room is refused
    let output = env
        .command()
        .arg("--user")
        .arg("carlos@example.com")
        .arg("book")
        .arg(room_id.to_string())
        .arg("--date")
        .arg(TEST_DATE)
        .arg("--start")
        .arg("9")
        .arg("--name")
        .arg("Carlos Gomez")
        .output()
        .expect("Failed to run book");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_seed_populates_empty_database() {
    let env = TestEnv::new();
    env.init();

    env.command()
        .arg("seed")
        .arg("--date")
        .arg(TEST_DATE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 6 rooms and 3 bookings"));

    env.command()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Auditorio"))
        .stdout(predicate::str::contains("Sala del consejo"));

    // A second seed run is a no-op
    env.command()
        .arg("seed")
        .arg("--date")
        .arg(TEST_DATE)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing seeded"));
}
