//! Dashboard metric aggregation.
//!
//! Computes the headline numbers (pipeline value, won revenue, win rate,
//! target progress) and the chart breakdowns from a lead snapshot. All
//! functions are pure, total over their domain, and order-insensitive.

use crate::entities::{LeadStatus, ServiceInterest, lead};
use sea_orm::Iterable;

/// Aggregate dashboard metrics for one lead collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Gross sum of projected value across all leads, closed-lost included.
    /// A bookkeeping total, not a forecast.
    pub pipeline_value: f64,
    /// Sum of projected value over won leads
    pub won_value: f64,
    /// Percentage of leads with status Won, 0 for an empty collection
    pub win_rate: f64,
    /// Won value as a fraction of the revenue target, capped at 1.0;
    /// 0 when the target is not positive
    pub progress: f64,
    /// Total number of leads
    pub lead_count: usize,
    /// Number of won leads
    pub won_count: usize,
}

/// Computes all dashboard metrics in one pass over the snapshot.
///
/// Defined for every input: an empty collection yields all zeros, and a
/// non-positive `target` yields zero progress rather than dividing by zero.
#[must_use]
pub fn compute_metrics(leads: &[lead::Model], target: f64) -> Metrics {
    let pipeline_value: f64 = leads.iter().map(|lead| lead.projected_value).sum();
    let won: Vec<&lead::Model> = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Won)
        .collect();
    let won_value: f64 = won.iter().map(|lead| lead.projected_value).sum();

    let win_rate = if leads.is_empty() {
        0.0
    } else {
        // Cast precision: lead counts stay far below 2^52 in practice.
        #[allow(clippy::cast_precision_loss)]
        let rate = won.len() as f64 / leads.len() as f64 * 100.0;
        rate
    };

    let progress = if target > 0.0 {
        (won_value / target).min(1.0)
    } else {
        0.0
    };

    Metrics {
        pipeline_value,
        won_value,
        win_rate,
        progress,
        lead_count: leads.len(),
        won_count: won.len(),
    }
}

/// Counts leads per status, in the canonical status order. Statuses with no
/// leads still appear with a zero count so chart axes stay stable.
#[must_use]
pub fn count_by_status(leads: &[lead::Model]) -> Vec<(LeadStatus, usize)> {
    LeadStatus::ALL
        .into_iter()
        .map(|status| {
            let count = leads.iter().filter(|lead| lead.status == status).count();
            (status, count)
        })
        .collect()
}

/// Counts leads per service category for the services-distribution chart.
#[must_use]
pub fn count_by_service(leads: &[lead::Model]) -> Vec<(ServiceInterest, usize)> {
    ServiceInterest::iter()
        .map(|service| {
            let count = leads
                .iter()
                .filter(|lead| lead.service_interest == service)
                .count();
            (service, count)
        })
        .collect()
}
