//! Explicit session context.
//!
//! A [`Session`] is created by a successful login and carried through every
//! operation that needs to know who is acting, replacing ambient
//! logged-in-user globals. Logging out consumes the session; there is no way
//! to act on a session after that.

use crate::entities::Role;
use chrono::{DateTime, Utc};

/// The authenticated context for one logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The authenticated username
    pub username: String,
    /// The user's role, fixed for the lifetime of the session
    pub role: Role,
    /// When the session was established
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for an already-authenticated user. Callers outside
    /// tests should obtain sessions from `core::auth::login` instead.
    #[must_use]
    pub fn new(username: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            role,
            logged_in_at: Utc::now(),
        }
    }

    /// True iff this session belongs to an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Ends the session. Consumes `self` so no operation can use a session
    /// after logout.
    pub fn logout(self) {
        tracing::info!(username = %self.username, "Session ended");
    }
}
