//! Packaging of intake-only fields for the downstream audit trail.
//!
//! Everything the person/case records do not carry lands here, grouped
//! the way the form collects it, together with a source tag and the
//! intake timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    ApplicantStatus, CitizenshipInfo, DisabilityInfo, ExpenseRow, IncomeRow, IntakeRecord,
    ResourceRow, ReviewDocs, VoterRegistration,
};

/// Default source tag; config can override it per deployment.
pub const DEFAULT_SOURCE_TAG: &str = "intake-form";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvsMetadata {
    pub consent_date: String,
    pub submitted: bool,
    pub vr_needed: bool,
    pub vr_sent_details: String,
    pub known_institutions: String,
    pub case_assignment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetadata {
    pub income: Vec<IncomeRow>,
    pub expenses: Vec<ExpenseRow>,
    pub resources: Vec<ResourceRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeMetadata {
    pub citizenship: CitizenshipInfo,
    pub disability: DisabilityInfo,
    pub voter_registration: VoterRegistration,
    pub application_signed: bool,
    pub applicant_status: ApplicantStatus,
    pub review_docs: ReviewDocs,
    pub financials: FinancialMetadata,
    pub avs: AvsMetadata,
    pub source: String,
    /// RFC 3339, from the injected clock reading.
    pub intake_date: String,
}

/// Collect every field the output records drop into a single structure.
/// No validation happens here; the snapshot is copied as captured.
pub fn build_metadata(
    record: &IntakeRecord,
    now: DateTime<Utc>,
    source_tag: &str,
) -> IntakeMetadata {
    IntakeMetadata {
        citizenship: record.citizenship,
        disability: record.disability,
        voter_registration: record.voter_reg,
        application_signed: record.application_signed,
        applicant_status: record.applicant_status,
        review_docs: record.review_docs,
        financials: FinancialMetadata {
            income: record.income.clone(),
            expenses: record.expenses.clone(),
            resources: record.resources.clone(),
        },
        avs: AvsMetadata {
            consent_date: record.avs_consent_date.clone(),
            submitted: record.avs_submitted,
            vr_needed: record.vr_needed,
            vr_sent_details: record.vr_sent_details.clone(),
            known_institutions: record.known_institutions.clone(),
            case_assignment: record.case_assignment.clone(),
        },
        source: source_tag.to_string(),
        intake_date: now.to_rfc3339(),
    }
}
