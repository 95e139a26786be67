//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::booking::{Booking, BookingId, BookingStatus};
use crate::room::{Room, RoomId};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to one storage operation that will be performed
/// when the plan is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Create a new booking.
    CreateBooking(Booking),

    /// Change a booking's lifecycle status.
    UpdateStatus {
        /// The booking to update.
        id: BookingId,
        /// The status the booking currently has.
        from: BookingStatus,
        /// The status to set.
        to: BookingStatus,
    },

    /// Remove a booking entirely.
    DeleteBooking(BookingId),

    /// Create a new room.
    CreateRoom(Room),

    /// Overwrite an existing room's fields.
    UpdateRoom(Room),

    /// Soft-delete a room.
    DeactivateRoom(RoomId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateBooking(b) => {
                format!(
                    "Create booking for room {} on {} at {}",
                    b.room_id(),
                    b.date(),
                    b.slot()
                )
            }
            Self::UpdateStatus { id, from, to } => {
                format!("Change booking {id} status from {from} to {to}")
            }
            Self::DeleteBooking(id) => format!("Delete booking {id}"),
            Self::CreateRoom(room) => {
                format!("Create room '{}' with capacity {}", room.name(), room.capacity())
            }
            Self::UpdateRoom(room) => match room.id() {
                Some(id) => format!("Update room {id} ('{}')", room.name()),
                None => format!("Update room '{}'", room.name()),
            },
            Self::DeactivateRoom(id) => format!("Deactivate room {id}"),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use salabook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Reserve Amambay on 2026-03-02");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
