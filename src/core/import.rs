//! CSV bulk import.
//!
//! Reads a tabular file with the recognized columns, validates each row
//! independently, and inserts the valid ones. Partial success is the normal
//! case: the report carries how many rows went in, how many were rejected,
//! and why. Imported rows are stamped with the importing user, today's date,
//! and a follow-up of today.

use crate::{
    core::lead::{LeadDraft, create_lead},
    entities::{LeadStatus, ServiceInterest},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ActiveEnum, DatabaseConnection, Iterable};
use serde::Deserialize;
use std::io::Read;

/// Outcome of one bulk import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows successfully inserted
    pub imported: usize,
    /// Rows rejected by per-row validation
    pub rejected: usize,
    /// One entry per rejected row: (1-based data row number, reason)
    pub errors: Vec<(usize, String)>,
}

/// One CSV row as uploaded. Unrecognized columns are ignored by the reader;
/// recognized-but-absent columns fall back to their defaults here.
#[derive(Debug, Deserialize)]
struct ImportRow {
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    contact_person: Option<String>,
    #[serde(default)]
    mobile: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    service_interest: Option<String>,
    #[serde(default)]
    projected_value: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    remarks: Option<String>,
}

/// Imports leads from CSV data, assigning every inserted lead to
/// `assigned_to` with `date_added` and `next_followup` set to `today`.
///
/// Rows missing `company_name` or `mobile`, or with a malformed
/// `projected_value`, are rejected individually; the rest proceed.
pub async fn import_csv<R: Read>(
    db: &DatabaseConnection,
    reader: R,
    assigned_to: &str,
    today: NaiveDate,
) -> Result<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut report = ImportReport::default();

    for (index, record) in csv_reader.deserialize::<ImportRow>().enumerate() {
        let row_number = index + 1;
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                report.rejected += 1;
                report.errors.push((row_number, format!("unreadable row: {e}")));
                continue;
            }
        };

        match row_to_draft(row, today) {
            Ok(draft) => match create_lead(db, draft, assigned_to, today).await {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    report.rejected += 1;
                    report.errors.push((row_number, e.to_string()));
                }
            },
            Err(reason) => {
                report.rejected += 1;
                report.errors.push((row_number, reason));
            }
        }
    }

    tracing::info!(
        imported = report.imported,
        rejected = report.rejected,
        assigned_to,
        "Bulk import finished"
    );
    Ok(report)
}

fn row_to_draft(row: ImportRow, today: NaiveDate) -> std::result::Result<LeadDraft, String> {
    let projected_value = match row.projected_value.as_deref().map(str::trim) {
        None | Some("") => 0.0,
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("malformed projected_value '{raw}'"))?,
    };

    let mut draft = LeadDraft::new(&row.company_name, &row.mobile);
    draft.contact_person = non_blank(row.contact_person);
    draft.email = non_blank(row.email);
    draft.service_interest = row
        .service_interest
        .as_deref()
        .and_then(parse_service)
        .unwrap_or(ServiceInterest::Seo);
    draft.projected_value = projected_value;
    draft.status = row
        .status
        .as_deref()
        .and_then(parse_status)
        .unwrap_or(LeadStatus::New);
    draft.next_followup = Some(today);
    draft.remarks = non_blank(row.remarks);

    draft.validate().map_err(|e| e.to_string())?;
    Ok(draft)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_status(label: &str) -> Option<LeadStatus> {
    LeadStatus::iter().find(|status| status.to_value().eq_ignore_ascii_case(label.trim()))
}

fn parse_service(label: &str) -> Option<ServiceInterest> {
    ServiceInterest::iter().find(|service| service.to_value().eq_ignore_ascii_case(label.trim()))
}
