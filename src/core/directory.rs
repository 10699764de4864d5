//! Lead directory filtering.
//!
//! Combines status-set filtering with case-insensitive substring search over
//! company and contact names. Both predicates are conjunctive when supplied;
//! an empty set and an empty query are each a no-op, so the unfiltered call
//! is the identity.

use crate::entities::{LeadStatus, lead};

/// Filters the directory view, preserving input order.
///
/// A non-empty `status_set` retains only member statuses. A non-empty
/// `query` retains leads whose `company_name` or `contact_person` contains
/// it case-insensitively; a missing contact never matches. The query is used
/// literally, whitespace included.
#[must_use]
pub fn filter_directory<'a>(
    leads: &'a [lead::Model],
    status_set: &[LeadStatus],
    query: &str,
) -> Vec<&'a lead::Model> {
    let query_lower = query.to_lowercase();
    leads
        .iter()
        .filter(|lead| status_set.is_empty() || status_set.contains(&lead.status))
        .filter(|lead| query_lower.is_empty() || matches_query(lead, &query_lower))
        .collect()
}

fn matches_query(lead: &lead::Model, query_lower: &str) -> bool {
    lead.company_name.to_lowercase().contains(query_lower)
        || lead
            .contact_person
            .as_ref()
            .is_some_and(|contact| contact.to_lowercase().contains(query_lower))
}
