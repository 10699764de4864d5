//! Lead entity - Represents one prospective-or-closed deal.
//!
//! Each lead carries the company and contact details captured at intake, a
//! projected deal value, a pipeline status, and a `next_followup` date used
//! by the reminder view. `assigned_to` scopes the lead to its owning user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lead database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    /// Unique identifier, assigned by the store at creation
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Company name, always present
    pub company_name: String,
    /// Contact person at the company, if captured
    pub contact_person: Option<String>,
    /// Primary mobile number, always present
    pub mobile: String,
    /// Alternate mobile number
    pub alt_mobile: Option<String>,
    /// Contact email address
    pub email: Option<String>,
    /// GST registration number (tax id)
    pub gst_no: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// Which agency service the lead is interested in
    pub service_interest: ServiceInterest,
    /// Projected deal value in rupees, never negative
    pub projected_value: f64,
    /// Current pipeline status
    pub status: LeadStatus,
    /// Next follow-up date, None when no follow-up is scheduled
    pub next_followup: Option<Date>,
    /// Date the lead was created, immutable
    pub date_added: Date,
    /// Username of the owning user, immutable after creation
    pub assigned_to: String,
    /// Free-text notes
    pub remarks: Option<String>,
}

/// Pipeline status vocabulary, in canonical display order.
///
/// `Won` and `Lost` are closed by convention only; a direct edit may move a
/// lead from any status to any other.
#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "lead_status")]
pub enum LeadStatus {
    /// Freshly captured, no contact made yet
    #[sea_orm(string_value = "New")]
    New,
    /// First contact made
    #[sea_orm(string_value = "Contacted")]
    Contacted,
    /// Proposal sent
    #[sea_orm(string_value = "Proposal")]
    Proposal,
    /// Terms under negotiation
    #[sea_orm(string_value = "Negotiation")]
    Negotiation,
    /// Deal closed and won
    #[sea_orm(string_value = "Won")]
    Won,
    /// Deal closed and lost
    #[sea_orm(string_value = "Lost")]
    Lost,
}

/// Service categories offered by the agency.
#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "service_interest")]
pub enum ServiceInterest {
    /// Search engine optimization
    #[sea_orm(string_value = "SEO")]
    Seo,
    /// Pay-per-click advertising
    #[sea_orm(string_value = "PPC")]
    Ppc,
    /// Social media management
    #[sea_orm(string_value = "Social Media")]
    SocialMedia,
    /// Website development
    #[sea_orm(string_value = "Web Dev")]
    WebDev,
    /// Mobile app development
    #[sea_orm(string_value = "App Dev")]
    AppDev,
    /// Branding and design
    #[sea_orm(string_value = "Branding")]
    Branding,
}

/// Leads have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
