//! One-way mapping from an intake snapshot to the downstream record pair.

use chrono::{DateTime, Utc};

use super::address::parse_address;
use super::domain::{
    CaseRecord, CaseStatus, CaseType, IntakeRecord, MailingAddress, PersonRecord, PersonStatus,
    TransformedCase,
};
use super::relationships::{authorized_reps, family_members, find_spouse, split_name};

const DEFAULT_CASE_DESCRIPTION: &str = "Case created from intake form";

/// Caller-supplied knobs for the transformer; config provides these at
/// the service surfaces.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub case_description: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            case_description: DEFAULT_CASE_DESCRIPTION.to_string(),
        }
    }
}

/// Suggest a case type from the verification flags. Disability wins over
/// citizenship; a clean record defaults to Medicaid.
pub fn infer_case_type(record: &IntakeRecord) -> CaseType {
    if record.disability.status {
        CaseType::Ltc
    } else if !record.citizenship.status {
        CaseType::General
    } else {
        CaseType::Medicaid
    }
}

/// Build the person/case record pair from a completed intake snapshot.
///
/// Pure in everything but the injected `now`, which backs the
/// application and admission dates whenever the AVS consent date was
/// left blank. Fields the case-management collaborator assigns (case
/// number, person ID, organization, date of birth, SSN, living
/// arrangement) are carried empty.
pub fn transform_intake(
    record: &IntakeRecord,
    now: DateTime<Utc>,
    options: &TransformOptions,
) -> TransformedCase {
    let address = parse_address(&record.contact.address);
    let (first_name, last_name) = split_name(&record.applicant_name);

    let default_date = if record.avs_consent_date.is_empty() {
        now.to_rfc3339()
    } else {
        record.avs_consent_date.clone()
    };

    let person = PersonRecord {
        first_name,
        last_name,
        email: record.contact.email.clone(),
        phone: record.contact.phone.clone(),
        date_of_birth: String::new(),
        ssn: String::new(),
        organization_id: None,
        living_arrangement: String::new(),
        mailing_address: MailingAddress::same_as(&address),
        address,
        authorized_reps: authorized_reps(&record.relationships),
        family_members: family_members(&record.relationships),
        status: if record.application_signed {
            PersonStatus::Active
        } else {
            PersonStatus::Pending
        },
    };

    let case_record = CaseRecord {
        mcn: String::new(),
        application_date: default_date.clone(),
        case_type: infer_case_type(record),
        person_id: String::new(),
        spouse_name: find_spouse(&record.relationships),
        status: CaseStatus::Pending,
        description: options.case_description.clone(),
        priority: false,
        living_arrangement: String::new(),
        with_waiver: false,
        admission_date: default_date,
        organization_id: String::new(),
        // The person record carries the representative list.
        authorized_reps: Vec::new(),
        retro_requested: String::new(),
    };

    TransformedCase {
        person,
        case_record,
    }
}
