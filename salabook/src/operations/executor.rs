//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! applies them to a [`Store`].

use crate::booking::Booking;
use crate::error::Result;
use crate::room::Room;
use crate::store::Store;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The booking produced or updated by the plan, if any.
    pub booking: Option<Booking>,

    /// The room produced or updated by the plan, if any.
    pub room: Option<Room>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            booking: None,
            room: None,
        }
    }
}

/// Executes operation plans against a store.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating without changes).
///
/// # Examples
///
/// ```
/// use salabook::operations::{OperationPlan, PlanExecutor};
/// use salabook::store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// let plan = OperationPlan::new("No-op");
///
/// let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
/// assert!(result.success);
///
/// let result = PlanExecutor::new(&mut store).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    store: &'a mut dyn Store,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor over the given store.
    pub fn new(store: &'a mut dyn Store) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan's actions but does
    /// not touch the store.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// The result carries the last booking and room the plan touched, so
    /// callers can display assigned ids without a second query.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails; actions before the failing
    /// one remain applied.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::new(plan, self.dry_run);

        if self.dry_run {
            // Report payloads as planned, without ids the store would assign.
            for action in &plan.actions {
                match action {
                    PlanAction::CreateBooking(booking) => result.booking = Some(booking.clone()),
                    PlanAction::CreateRoom(room) | PlanAction::UpdateRoom(room) => {
                        result.room = Some(room.clone());
                    }
                    PlanAction::UpdateStatus { .. }
                    | PlanAction::DeleteBooking(_)
                    | PlanAction::DeactivateRoom(_) => {}
                }
            }
            return Ok(result);
        }

        for action in &plan.actions {
            match action {
                PlanAction::CreateBooking(booking) => {
                    result.booking = Some(self.store.create_booking(booking)?);
                }
                PlanAction::UpdateStatus { id, to, .. } => {
                    result.booking = Some(self.store.update_status(*id, *to)?);
                }
                PlanAction::DeleteBooking(id) => {
                    self.store.delete_booking(*id)?;
                }
                PlanAction::CreateRoom(room) => {
                    result.room = Some(self.store.create_room(room)?);
                }
                PlanAction::UpdateRoom(room) => {
                    result.room = Some(self.store.update_room(room)?);
                }
                PlanAction::DeactivateRoom(id) => {
                    result.room = Some(self.store.deactivate_room(*id)?);
                }
            }
        }

        Ok(result)
    }
}
