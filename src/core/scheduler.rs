//! Follow-up reminder selection.
//!
//! Derives the "due today" list for the dashboard from stored follow-up
//! dates. This is a read-only projection over a snapshot: no caching, no
//! notification state, each call is independent.

use crate::entities::lead;
use chrono::NaiveDate;

/// Returns the open leads whose follow-up date is `today` or earlier,
/// preserving the input order.
///
/// Leads with no follow-up date are excluded: "no date" means nothing is
/// scheduled, not "always due". Closed leads never appear regardless of
/// their date.
#[must_use]
pub fn due_today(leads: &[lead::Model], today: NaiveDate) -> Vec<&lead::Model> {
    leads
        .iter()
        .filter(|lead| lead.status.is_open())
        .filter(|lead| matches!(lead.next_followup, Some(date) if date <= today))
        .collect()
}
