//! Login notification boundary.
//!
//! Fire-and-forget: a notifier is told that a login happened and may do
//! whatever it likes with that (log it, email it, drop it). Failures stay
//! inside the notifier - nothing here can fail the login that triggered it.

use chrono::{DateTime, Utc};

/// Best-effort "a user logged in" signal.
pub trait LoginNotifier: Send + Sync {
    /// Called after a successful login. Implementations must swallow their
    /// own errors; there is no result to return.
    fn notify_login(&self, username: &str, when: DateTime<Utc>);
}

/// Default notifier: records the login in the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl LoginNotifier for TracingNotifier {
    fn notify_login(&self, username: &str, when: DateTime<Utc>) {
        tracing::info!(username, %when, "Login notification");
    }
}

/// Notifier that does nothing, for tests and notification-disabled setups.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl LoginNotifier for NoopNotifier {
    fn notify_login(&self, _username: &str, _when: DateTime<Utc>) {}
}
