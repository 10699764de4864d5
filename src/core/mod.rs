//! Core business logic - framework-agnostic lead lifecycle, scheduling,
//! reporting, and account operations. Nothing in here knows about the UI
//! layer; everything returns plain data or crate errors.

/// Credential hashing and login
pub mod auth;
/// Status-set and substring filtering for the lead directory
pub mod directory;
/// CSV bulk import with per-row validation
pub mod import;
/// Lead create/fetch/update against the store
pub mod lead;
/// Open/closed classification and pipeline buckets
pub mod lifecycle;
/// Dashboard metric aggregation
pub mod metrics;
/// Best-effort login notification boundary
pub mod notify;
/// Follow-up reminder selection
pub mod scheduler;
/// User account management
pub mod user;
