//! Shared test utilities.
//!
//! Helpers for setting up in-memory test databases and building leads with
//! sensible defaults, so individual tests only spell out what they care
//! about.

use crate::{
    core::lead::{LeadDraft, create_lead},
    entities::{LeadStatus, ServiceInterest, lead},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A fixed "today" for tests that need a creation date.
#[must_use]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Builds an unpersisted lead model for the pure logic functions.
///
/// Defaults: mobile `9876543210`, no contact/follow-up, service SEO,
/// assigned to `alice`, added on [`today`].
#[must_use]
pub fn make_lead(company_name: &str, status: LeadStatus, projected_value: f64) -> lead::Model {
    lead::Model {
        id: 0,
        company_name: company_name.to_string(),
        contact_person: None,
        mobile: "9876543210".to_string(),
        alt_mobile: None,
        email: None,
        gst_no: None,
        address: None,
        service_interest: ServiceInterest::Seo,
        projected_value,
        status,
        next_followup: None,
        date_added: today(),
        assigned_to: "alice".to_string(),
        remarks: None,
    }
}

/// Builds an unpersisted lead with a specific follow-up date.
#[must_use]
pub fn lead_with_followup(
    company_name: &str,
    status: LeadStatus,
    next_followup: Option<NaiveDate>,
) -> lead::Model {
    let mut lead = make_lead(company_name, status, 1000.0);
    lead.next_followup = next_followup;
    lead
}

/// Persists a lead with default draft fields for the given owner.
pub async fn create_test_lead(
    db: &DatabaseConnection,
    company_name: &str,
    assigned_to: &str,
) -> Result<lead::Model> {
    create_lead(
        db,
        LeadDraft::new(company_name, "9876543210"),
        assigned_to,
        today(),
    )
    .await
}
