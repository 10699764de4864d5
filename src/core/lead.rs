//! Lead store operations.
//!
//! Create, fetch, and update for lead records. Validation happens here,
//! before anything reaches the store: a rejected draft performs no partial
//! write. Edits replace the full set of mutable fields (last-writer-wins;
//! there is deliberately no version stamping or conflict detection), and
//! leads are never deleted.

use crate::{
    config::AppConfig,
    entities::{Lead, LeadStatus, ServiceInterest, lead},
    errors::{Error, Result},
    session::Session,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};

/// The user-editable fields of a lead, used both at creation and for edits.
///
/// `date_added` and `assigned_to` are not part of the draft: both are fixed
/// at creation and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    /// Company name, required
    pub company_name: String,
    /// Contact person
    pub contact_person: Option<String>,
    /// Primary mobile number, required
    pub mobile: String,
    /// Alternate mobile number
    pub alt_mobile: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// GST registration number
    pub gst_no: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Service the lead is interested in
    pub service_interest: ServiceInterest,
    /// Projected deal value, must be non-negative
    pub projected_value: f64,
    /// Pipeline status
    pub status: LeadStatus,
    /// Next scheduled follow-up
    pub next_followup: Option<NaiveDate>,
    /// Free-text notes
    pub remarks: Option<String>,
}

impl LeadDraft {
    /// A minimal draft with the required fields set and everything else
    /// defaulted (status `New`, value 0).
    #[must_use]
    pub fn new(company_name: &str, mobile: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            contact_person: None,
            mobile: mobile.to_string(),
            alt_mobile: None,
            email: None,
            gst_no: None,
            address: None,
            service_interest: ServiceInterest::Seo,
            projected_value: 0.0,
            status: LeadStatus::New,
            next_followup: None,
            remarks: None,
        }
    }

    /// Checks the draft invariants: `company_name` and `mobile` non-blank,
    /// `projected_value` non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Company name is required".to_string(),
            });
        }
        if self.mobile.trim().is_empty() {
            return Err(Error::Validation {
                message: "Mobile number is required".to_string(),
            });
        }
        if self.projected_value < 0.0 {
            return Err(Error::Validation {
                message: format!(
                    "Projected value must be non-negative, got {}",
                    self.projected_value
                ),
            });
        }
        Ok(())
    }
}

/// Creates a new lead owned by `assigned_to`, stamped with `date_added`.
///
/// The draft is validated first; nothing is written on rejection.
pub async fn create_lead(
    db: &DatabaseConnection,
    draft: LeadDraft,
    assigned_to: &str,
    date_added: NaiveDate,
) -> Result<lead::Model> {
    draft.validate()?;

    let lead = lead::ActiveModel {
        company_name: Set(draft.company_name.trim().to_string()),
        contact_person: Set(draft.contact_person),
        mobile: Set(draft.mobile.trim().to_string()),
        alt_mobile: Set(draft.alt_mobile),
        email: Set(draft.email),
        gst_no: Set(draft.gst_no),
        address: Set(draft.address),
        service_interest: Set(draft.service_interest),
        projected_value: Set(draft.projected_value),
        status: Set(draft.status),
        next_followup: Set(draft.next_followup),
        date_added: Set(date_added),
        assigned_to: Set(assigned_to.to_string()),
        remarks: Set(draft.remarks),
        ..Default::default()
    };

    let result = lead.insert(db).await?;
    tracing::debug!(
        lead_id = result.id,
        company = %result.company_name,
        "Created lead"
    );
    Ok(result)
}

/// Fetches leads in insertion order, optionally scoped to one owner.
pub async fn fetch_leads(
    db: &DatabaseConnection,
    assigned_to: Option<&str>,
) -> Result<Vec<lead::Model>> {
    let mut query = Lead::find().order_by_asc(lead::Column::Id);
    if let Some(username) = assigned_to {
        query = query.filter(lead::Column::AssignedTo.eq(username));
    }
    query.all(db).await.map_err(Into::into)
}

/// Fetches the leads visible to a session.
///
/// Staff always see only their own leads. Admins see every lead unless
/// `scope_admin_views` is set, in which case they are filtered like staff.
pub async fn fetch_leads_for_session(
    db: &DatabaseConnection,
    session: &Session,
    config: &AppConfig,
) -> Result<Vec<lead::Model>> {
    let scope = if session.is_admin() && !config.scope_admin_views {
        None
    } else {
        Some(session.username.as_str())
    };
    fetch_leads(db, scope).await
}

/// Finds a lead by its store-assigned id.
pub async fn get_lead_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<lead::Model>> {
    Lead::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Replaces the mutable fields of an existing lead with the draft.
///
/// Status transitions are unconstrained: any status may move to any other,
/// including reopening a closed lead. `date_added` and `assigned_to` are
/// left untouched.
pub async fn update_lead(
    db: &DatabaseConnection,
    id: i64,
    draft: LeadDraft,
) -> Result<lead::Model> {
    draft.validate()?;

    let existing = Lead::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::LeadNotFound { id })?;

    let mut lead: lead::ActiveModel = existing.into();
    lead.company_name = Set(draft.company_name.trim().to_string());
    lead.contact_person = Set(draft.contact_person);
    lead.mobile = Set(draft.mobile.trim().to_string());
    lead.alt_mobile = Set(draft.alt_mobile);
    lead.email = Set(draft.email);
    lead.gst_no = Set(draft.gst_no);
    lead.address = Set(draft.address);
    lead.service_interest = Set(draft.service_interest);
    lead.projected_value = Set(draft.projected_value);
    lead.status = Set(draft.status);
    lead.next_followup = Set(draft.next_followup);
    lead.remarks = Set(draft.remarks);

    lead.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::Role;
    use crate::test_utils::{create_test_lead, setup_test_db, today};

    #[test]
    fn test_draft_validation() {
        assert!(LeadDraft::new("Acme Corp", "9876543210").validate().is_ok());

        let empty_company = LeadDraft::new("", "9876543210");
        assert!(matches!(
            empty_company.validate().unwrap_err(),
            Error::Validation { message: _ }
        ));

        let whitespace_company = LeadDraft::new("   ", "9876543210");
        assert!(whitespace_company.validate().is_err());

        let empty_mobile = LeadDraft::new("Acme Corp", "");
        assert!(empty_mobile.validate().is_err());

        let mut negative_value = LeadDraft::new("Acme Corp", "9876543210");
        negative_value.projected_value = -1.0;
        assert!(negative_value.validate().is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft_without_writing() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_lead(&db, LeadDraft::new("", "9876543210"), "alice", today()).await;
        assert!(result.is_err());
        assert!(fetch_leads(&db, None).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_fetch_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        let mut draft = LeadDraft::new("Acme Corp", "9876543210");
        draft.contact_person = Some("John Doe".to_string());
        draft.email = Some("john@acme.example".to_string());
        draft.service_interest = ServiceInterest::WebDev;
        draft.projected_value = 25_000.0;
        draft.status = LeadStatus::Contacted;
        draft.remarks = Some("Met at trade show".to_string());

        let created = create_lead(&db, draft.clone(), "alice", today()).await?;
        let fetched = get_lead_by_id(&db, created.id).await?.unwrap();

        // Field-for-field equality apart from the store-assigned id
        assert_eq!(fetched.company_name, draft.company_name);
        assert_eq!(fetched.contact_person, draft.contact_person);
        assert_eq!(fetched.mobile, draft.mobile);
        assert_eq!(fetched.email, draft.email);
        assert_eq!(fetched.service_interest, draft.service_interest);
        assert_eq!(fetched.projected_value, draft.projected_value);
        assert_eq!(fetched.status, draft.status);
        assert_eq!(fetched.assigned_to, "alice");
        assert_eq!(fetched.date_added, today());
        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_trims_required_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let lead = create_lead(
            &db,
            LeadDraft::new("  Acme Corp  ", " 9876543210 "),
            "alice",
            today(),
        )
        .await?;
        assert_eq!(lead.company_name, "Acme Corp");
        assert_eq!(lead.mobile, "9876543210");

        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_scoped_by_owner() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_lead(&db, "Acme Corp", "alice").await?;
        create_test_lead(&db, "Beta Inc", "bob").await?;
        create_test_lead(&db, "Gamma LLC", "alice").await?;

        let alice_leads = fetch_leads(&db, Some("alice")).await?;
        assert_eq!(alice_leads.len(), 2);
        assert!(alice_leads.iter().all(|lead| lead.assigned_to == "alice"));

        let all_leads = fetch_leads(&db, None).await?;
        assert_eq!(all_leads.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_scope_follows_config_flag() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_lead(&db, "Acme Corp", "alice").await?;
        create_test_lead(&db, "Beta Inc", "admin").await?;

        let admin_session = Session::new("admin", Role::Admin);
        let staff_session = Session::new("alice", Role::Staff);

        let unscoped = AppConfig::default();
        let leads = fetch_leads_for_session(&db, &admin_session, &unscoped).await?;
        assert_eq!(leads.len(), 2);

        let scoped = AppConfig {
            scope_admin_views: true,
            ..AppConfig::default()
        };
        let leads = fetch_leads_for_session(&db, &admin_session, &scoped).await?;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].assigned_to, "admin");

        // Staff are scoped regardless of the flag
        let leads = fetch_leads_for_session(&db, &staff_session, &unscoped).await?;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].assigned_to, "alice");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_lead(&db, "Acme Corp", "alice").await?;

        let mut draft = LeadDraft::new("Acme Corporation", "9876543210");
        draft.status = LeadStatus::Negotiation;
        draft.projected_value = 75_000.0;

        let updated = update_lead(&db, created.id, draft).await?;
        assert_eq!(updated.company_name, "Acme Corporation");
        assert_eq!(updated.status, LeadStatus::Negotiation);
        assert_eq!(updated.projected_value, 75_000.0);
        // Immutable fields survive the edit
        assert_eq!(updated.assigned_to, created.assigned_to);
        assert_eq!(updated.date_added, created.date_added);

        Ok(())
    }

    #[tokio::test]
    async fn test_closed_lead_may_be_reopened() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_lead(&db, "Acme Corp", "alice").await?;

        let mut draft = LeadDraft::new("Acme Corp", "9876543210");
        draft.status = LeadStatus::Won;
        let won = update_lead(&db, created.id, draft.clone()).await?;
        assert_eq!(won.status, LeadStatus::Won);

        // No transition guard: a closed lead can go back to any open status
        draft.status = LeadStatus::Contacted;
        let reopened = update_lead(&db, created.id, draft).await?;
        assert_eq!(reopened.status, LeadStatus::Contacted);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_lead_fails() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_lead(&db, 999, LeadDraft::new("Acme Corp", "9876543210")).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::LeadNotFound { id: 999 }
        ));

        Ok(())
    }
}
