//! Lead lifecycle rules.
//!
//! Pure classification over [`LeadStatus`]: the open/closed split used by the
//! scheduler and metrics, the canonical status ordering used for selection
//! lists, and the pipeline buckets backing the Kanban-style display. No side
//! effects and no failure modes.

use crate::entities::{LeadStatus, lead};

/// Kanban-style grouping of statuses for the pipeline view.
///
/// `Lost` routes to no bucket; it is dropped from the pipeline display.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PipelineBucket {
    /// Freshly captured or first-contacted leads
    NewContacted,
    /// Proposal sent or terms under negotiation
    InNegotiation,
    /// Closed and won
    Won,
}

impl LeadStatus {
    /// The canonical ordered status vocabulary, as shown in selection lists
    /// and Kanban columns.
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Contacted,
        Self::Proposal,
        Self::Negotiation,
        Self::Won,
        Self::Lost,
    ];

    /// True iff the lead is closed (won or lost). Closed leads drop out of
    /// follow-up reminders but remain in bookkeeping totals.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// True iff the lead is still in play.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !self.is_closed()
    }

    /// The pipeline bucket this status routes to, if any.
    #[must_use]
    pub const fn bucket(self) -> Option<PipelineBucket> {
        match self {
            Self::New | Self::Contacted => Some(PipelineBucket::NewContacted),
            Self::Proposal | Self::Negotiation => Some(PipelineBucket::InNegotiation),
            Self::Won => Some(PipelineBucket::Won),
            Self::Lost => None,
        }
    }
}

/// Returns the leads whose status routes to `bucket`, preserving input order.
#[must_use]
pub fn leads_in_bucket(leads: &[lead::Model], bucket: PipelineBucket) -> Vec<&lead::Model> {
    leads
        .iter()
        .filter(|lead| lead.status.bucket() == Some(bucket))
        .collect()
}
