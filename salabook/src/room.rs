//! Room types for bookable meeting spaces.
//!
//! Rooms carry a capacity, a location label, and optional equipment tags.
//! Administrators soft-delete rooms by clearing the active flag; inactive
//! rooms disappear from listings but their bookings remain on record.

use serde::{Deserialize, Serialize};

use crate::booking::ValidationError;

/// A unique, stable identifier for a room.
///
/// # Examples
///
/// ```
/// use salabook::RoomId;
///
/// let id = RoomId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(format!("{id}"), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i64);

impl RoomId {
    /// Creates a room id from its raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable meeting room.
///
/// # Examples
///
/// ```
/// use salabook::Room;
///
/// let room = Room::builder("Sala del consejo", 10)
///     .location("Oficina Central")
///     .equipment(vec!["projector".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(room.capacity(), 10);
/// assert!(room.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    id: Option<RoomId>,
    name: String,
    capacity: u32,
    location: String,
    equipment: Vec<String>,
    active: bool,
}

impl Room {
    /// Creates a new room builder with the required name and capacity.
    #[must_use]
    pub fn builder(name: impl Into<String>, capacity: u32) -> RoomBuilder {
        RoomBuilder {
            id: None,
            name: name.into(),
            capacity,
            location: String::new(),
            equipment: Vec::new(),
            active: true,
        }
    }

    /// Returns the storage-assigned id, if the room has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<RoomId> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum number of simultaneous occupants.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the location label.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the equipment tags.
    #[must_use]
    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    /// Returns `true` if the room has not been soft-deleted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns a copy of this room with the given id attached.
    ///
    /// Used by storage implementations after assigning an id.
    #[must_use]
    pub fn with_id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy of this room marked inactive.
    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Builder for creating [`Room`] instances.
#[derive(Debug)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: String,
    capacity: u32,
    location: String,
    equipment: Vec<String>,
    active: bool,
}

impl RoomBuilder {
    /// Sets the storage-assigned id.
    #[must_use]
    pub const fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the location label. Whitespace is trimmed.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into().trim().to_string();
        self
    }

    /// Sets the equipment tags. Blank tags are dropped.
    #[must_use]
    pub fn equipment(mut self, equipment: Vec<String>) -> Self {
        self.equipment = equipment
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming or the capacity
    /// is zero.
    pub fn build(self) -> Result<Room, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "room name must be non-empty after trimming whitespace".into(),
            });
        }

        if self.capacity == 0 {
            return Err(ValidationError {
                field: "capacity".into(),
                message: "room capacity must be a positive integer".into(),
            });
        }

        Ok(Room {
            id: self.id,
            name,
            capacity: self.capacity,
            location: self.location,
            equipment: self.equipment,
            active: self.active,
        })
    }
}
