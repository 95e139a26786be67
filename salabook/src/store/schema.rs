//! Database schema definitions and SQL constants.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// Equipment tags are stored as a JSON array. Rooms are never deleted;
/// the `active` flag is cleared instead so existing bookings keep a
/// resolvable room.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        location TEXT NOT NULL,
        equipment TEXT NOT NULL,
        active INTEGER NOT NULL DEFAULT 1
    )";

/// SQL statement to create the bookings table.
///
/// Dates are stored as ISO `YYYY-MM-DD` text; slots as half-open
/// `[start_hour, end_hour)` integer pairs. The status column holds the
/// lowercase lifecycle name.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        room_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        start_hour INTEGER NOT NULL,
        end_hour INTEGER NOT NULL,
        requester_name TEXT NOT NULL,
        requester_email TEXT NOT NULL,
        attendees INTEGER NOT NULL,
        description TEXT,
        status TEXT NOT NULL
    )";

/// SQL statement to create an index on (`room_id`, date).
///
/// This index speeds up availability and conflict queries, which always
/// scope to one room and one date.
pub const CREATE_ROOM_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_room_date ON bookings(room_id, date)";

/// SQL statement to create an index on the status column.
///
/// This index speeds up listings that exclude cancelled bookings.
pub const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_status ON bookings(status)";

/// SQL statement to create an index on the requester email column.
///
/// This index speeds up "my bookings" listings.
pub const CREATE_EMAIL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_email ON bookings(requester_email)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a booking.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (room_id, date, start_hour, end_hour, requester_name, requester_email,
     attendees, description, status)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to count overlapping non-cancelled bookings for a room
/// and date.
///
/// Two half-open ranges overlap when each starts before the other ends;
/// the parameters are (`room_id`, date, `end_hour`, `start_hour`).
pub const COUNT_SLOT_CONFLICTS: &str = r"
    SELECT COUNT(*) FROM bookings
    WHERE room_id = ? AND date = ? AND status != 'cancelled'
      AND start_hour < ? AND end_hour > ?
";
