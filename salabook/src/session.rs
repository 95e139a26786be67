//! Request-scoped user identity.
//!
//! Operations that mutate bookings take the acting [`User`] explicitly, so
//! permission checks are testable and nothing depends on ambient session
//! state.

use serde::{Deserialize, Serialize};

/// The user on whose behalf an operation runs.
///
/// Regular users manage their own bookings; administrators also confirm
/// bookings and manage rooms.
///
/// # Examples
///
/// ```
/// use salabook::User;
///
/// let owner = User::new("carlos@example.com");
/// assert!(!owner.is_admin());
///
/// let admin = User::new("facilities@example.com").admin();
/// assert!(admin.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    email: String,
    admin: bool,
}

impl User {
    /// Creates a regular user with the given email address.
    ///
    /// The email is trimmed; comparisons against booking owners are
    /// case-insensitive.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            admin: false,
        }
    }

    /// Grants administrator rights.
    #[must_use]
    pub const fn admin(mut self) -> Self {
        self.admin = true;
        self
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns `true` if the user has administrator rights.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }
}
