use serde::{Deserialize, Serialize};

/// Marital standing the applicant selects on the first form section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantStatus {
    Individual,
    Married,
    Other,
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// Voter registration answer; the form allows leaving it blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoterRegistration {
    Yes,
    No,
    #[default]
    #[serde(rename = "")]
    Unset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Free-text, comma-separated single-line address.
    pub address: String,
    /// Masked display form, `(DDD) DDD-DDDD`.
    pub phone: String,
    pub email: String,
}

/// One row of the dynamic relationships list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    pub phone: String,
    /// Free-text relation label ("Spouse", "POA", "Daughter", ...).
    pub relation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenshipInfo {
    pub status: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilityInfo {
    pub status: bool,
}

/// Independent checklist flags from the system-verification section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDocs {
    pub budgets: bool,
    pub narratives: bool,
    pub verification: bool,
    pub interfaces: bool,
}

/// One row of the dynamic income list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRow {
    pub kind: String,
    pub person: String,
    pub amount: String,
    pub frequency: String,
}

/// One row of the dynamic expenses list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub kind: String,
    pub amount: String,
    pub frequency: String,
    pub shared: bool,
}

/// One row of the dynamic resources list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub kind: String,
    pub person: String,
    pub value: String,
    pub description: String,
}

/// Complete snapshot of the intake form at submission time.
///
/// Owned and edited by the UI layer; the pipeline only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeRecord {
    pub applicant_name: String,
    pub applicant_status: ApplicantStatus,
    pub contact: ContactInfo,
    pub relationships: Vec<Relationship>,
    pub citizenship: CitizenshipInfo,
    pub disability: DisabilityInfo,
    pub income: Vec<IncomeRow>,
    pub expenses: Vec<ExpenseRow>,
    pub resources: Vec<ResourceRow>,
    pub voter_reg: VoterRegistration,
    pub application_signed: bool,
    pub review_docs: ReviewDocs,
    /// Masked MM/DD/YYYY.
    pub avs_consent_date: String,
    pub avs_submitted: bool,
    pub vr_needed: bool,
    pub vr_sent_details: String,
    pub known_institutions: String,
    pub case_assignment: String,
}

impl Default for IntakeRecord {
    /// Blank form: one empty starter row in each dynamic list, everything
    /// else empty or unset.
    fn default() -> Self {
        Self {
            applicant_name: String::new(),
            applicant_status: ApplicantStatus::Unset,
            contact: ContactInfo::default(),
            relationships: vec![Relationship::default()],
            citizenship: CitizenshipInfo::default(),
            disability: DisabilityInfo::default(),
            income: vec![IncomeRow::default()],
            expenses: vec![ExpenseRow::default()],
            resources: vec![ResourceRow::default()],
            voter_reg: VoterRegistration::Unset,
            application_signed: false,
            review_docs: ReviewDocs::default(),
            avs_consent_date: String::new(),
            avs_submitted: false,
            vr_needed: false,
            vr_sent_details: String::new(),
            known_institutions: String::new(),
            case_assignment: String::new(),
        }
    }
}

/// Structured postal address derived from the free-text contact field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Two-letter state code when parsed, empty otherwise.
    pub state: String,
    /// Five digits, optionally `-NNNN` extended; raw passthrough on fallback.
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub same_as_physical: bool,
}

impl MailingAddress {
    /// Mailing address copied from the physical one, flagged as identical.
    pub fn same_as(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip: address.zip.clone(),
            same_as_physical: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonStatus {
    Active,
    Pending,
}

impl PersonStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PersonStatus::Active => "Active",
            PersonStatus::Pending => "Pending",
        }
    }
}

/// Lifecycle status tracked by the downstream case-management system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Active,
    Pending,
    Closed,
    Archived,
}

impl CaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CaseStatus::Active => "Active",
            CaseStatus::Pending => "Pending",
            CaseStatus::Closed => "Closed",
            CaseStatus::Archived => "Archived",
        }
    }
}

/// Case category inferred from the verification flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseType {
    #[serde(rename = "LTC")]
    Ltc,
    General,
    Medicaid,
}

impl CaseType {
    pub const fn label(self) -> &'static str {
        match self {
            CaseType::Ltc => "LTC",
            CaseType::General => "General",
            CaseType::Medicaid => "Medicaid",
        }
    }
}

/// Person payload handed to the case-management collaborator.
///
/// Fields the collaborator populates itself (date of birth, SSN, IDs,
/// living arrangement) are carried empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub ssn: String,
    pub organization_id: Option<String>,
    pub living_arrangement: String,
    pub address: Address,
    pub mailing_address: MailingAddress,
    pub authorized_reps: Vec<String>,
    pub family_members: Vec<String>,
    pub status: PersonStatus,
}

/// Case payload handed to the case-management collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Case number; assigned downstream, empty at intake.
    pub mcn: String,
    pub application_date: String,
    pub case_type: CaseType,
    /// Assigned downstream once the person record exists.
    pub person_id: String,
    pub spouse_name: String,
    pub status: CaseStatus,
    pub description: String,
    pub priority: bool,
    pub living_arrangement: String,
    pub with_waiver: bool,
    pub admission_date: String,
    pub organization_id: String,
    pub authorized_reps: Vec<String>,
    pub retro_requested: String,
}

/// The transformer's output pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedCase {
    pub person: PersonRecord,
    pub case_record: CaseRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_record_seeds_one_row_per_dynamic_list() {
        let record = IntakeRecord::default();
        assert_eq!(record.relationships.len(), 1);
        assert_eq!(record.income.len(), 1);
        assert_eq!(record.expenses.len(), 1);
        assert_eq!(record.resources.len(), 1);
        assert_eq!(record.applicant_status, ApplicantStatus::Unset);
        assert_eq!(record.voter_reg, VoterRegistration::Unset);
    }

    #[test]
    fn applicant_status_round_trips_the_blank_variant() {
        let json = serde_json::to_string(&ApplicantStatus::Unset).expect("serialize");
        assert_eq!(json, "\"\"");
        let parsed: ApplicantStatus = serde_json::from_str("\"married\"").expect("deserialize");
        assert_eq!(parsed, ApplicantStatus::Married);
    }

    #[test]
    fn case_type_serializes_with_downstream_labels() {
        assert_eq!(
            serde_json::to_string(&CaseType::Ltc).expect("serialize"),
            "\"LTC\""
        );
        assert_eq!(CaseType::General.label(), "General");
        assert_eq!(CaseType::Medicaid.label(), "Medicaid");
    }

    #[test]
    fn mailing_address_copies_physical_fields() {
        let address = Address {
            street: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
        };
        let mailing = MailingAddress::same_as(&address);
        assert!(mailing.same_as_physical);
        assert_eq!(mailing.city, "Springfield");
        assert_eq!(mailing.zip, "62701");
    }

    #[test]
    fn intake_record_deserializes_with_missing_fields_defaulted() {
        let record: IntakeRecord =
            serde_json::from_str(r#"{"applicant_name": "Mary Smith"}"#).expect("deserialize");
        assert_eq!(record.applicant_name, "Mary Smith");
        assert_eq!(record.relationships.len(), 1);
        assert!(!record.application_signed);
    }
}
