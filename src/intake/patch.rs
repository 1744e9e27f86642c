//! Field-level edits applied to an immutable intake snapshot.
//!
//! The form UI edits its record one field at a time. Rather than merging
//! partial structures over nested state, every edit is an explicit
//! `IntakePatch` applied through [`apply_patch`], which consumes the
//! current snapshot and returns the next one. Row edits addressing an
//! out-of-range index are no-ops; patching never fails.
//!
//! The phone and consent-date patches run their values through the
//! masking layer, matching how the live form wires formatters to those
//! inputs.

use super::domain::{
    ApplicantStatus, ExpenseRow, IncomeRow, IntakeRecord, Relationship, ResourceRow,
    VoterRegistration,
};
use super::mask::{format_date, format_phone};

/// One checkbox of the system-verification checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDoc {
    Budgets,
    Narratives,
    Verification,
    Interfaces,
}

/// A single user-initiated edit to the intake form.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakePatch {
    SetApplicantName(String),
    SetApplicantStatus(ApplicantStatus),
    SetAddress(String),
    SetPhone(String),
    SetEmail(String),
    AddRelationship,
    SetRelationshipName { index: usize, name: String },
    SetRelationshipPhone { index: usize, phone: String },
    SetRelationshipRelation { index: usize, relation: String },
    RemoveRelationship { index: usize },
    SetCitizenship(bool),
    SetDisability(bool),
    AddIncomeRow,
    SetIncomeRow { index: usize, row: IncomeRow },
    RemoveIncomeRow { index: usize },
    AddExpenseRow,
    SetExpenseRow { index: usize, row: ExpenseRow },
    RemoveExpenseRow { index: usize },
    AddResourceRow,
    SetResourceRow { index: usize, row: ResourceRow },
    RemoveResourceRow { index: usize },
    SetVoterReg(VoterRegistration),
    SetApplicationSigned(bool),
    SetReviewDoc { doc: ReviewDoc, checked: bool },
    SetAvsConsentDate(String),
    SetAvsSubmitted(bool),
    SetVrNeeded(bool),
    SetVrSentDetails(String),
    SetKnownInstitutions(String),
    SetCaseAssignment(String),
    /// Return to the blank form.
    Reset,
}

/// Apply one edit and return the updated snapshot.
pub fn apply_patch(mut record: IntakeRecord, patch: IntakePatch) -> IntakeRecord {
    match patch {
        IntakePatch::SetApplicantName(name) => record.applicant_name = name,
        IntakePatch::SetApplicantStatus(status) => record.applicant_status = status,
        IntakePatch::SetAddress(address) => record.contact.address = address,
        IntakePatch::SetPhone(phone) => record.contact.phone = format_phone(&phone),
        IntakePatch::SetEmail(email) => record.contact.email = email,
        IntakePatch::AddRelationship => record.relationships.push(Relationship::default()),
        IntakePatch::SetRelationshipName { index, name } => {
            if let Some(row) = record.relationships.get_mut(index) {
                row.name = name;
            }
        }
        IntakePatch::SetRelationshipPhone { index, phone } => {
            if let Some(row) = record.relationships.get_mut(index) {
                row.phone = format_phone(&phone);
            }
        }
        IntakePatch::SetRelationshipRelation { index, relation } => {
            if let Some(row) = record.relationships.get_mut(index) {
                row.relation = relation;
            }
        }
        IntakePatch::RemoveRelationship { index } => {
            if index < record.relationships.len() {
                record.relationships.remove(index);
            }
        }
        IntakePatch::SetCitizenship(status) => record.citizenship.status = status,
        IntakePatch::SetDisability(status) => record.disability.status = status,
        IntakePatch::AddIncomeRow => record.income.push(IncomeRow::default()),
        IntakePatch::SetIncomeRow { index, row } => {
            if let Some(slot) = record.income.get_mut(index) {
                *slot = row;
            }
        }
        IntakePatch::RemoveIncomeRow { index } => {
            if index < record.income.len() {
                record.income.remove(index);
            }
        }
        IntakePatch::AddExpenseRow => record.expenses.push(ExpenseRow::default()),
        IntakePatch::SetExpenseRow { index, row } => {
            if let Some(slot) = record.expenses.get_mut(index) {
                *slot = row;
            }
        }
        IntakePatch::RemoveExpenseRow { index } => {
            if index < record.expenses.len() {
                record.expenses.remove(index);
            }
        }
        IntakePatch::AddResourceRow => record.resources.push(ResourceRow::default()),
        IntakePatch::SetResourceRow { index, row } => {
            if let Some(slot) = record.resources.get_mut(index) {
                *slot = row;
            }
        }
        IntakePatch::RemoveResourceRow { index } => {
            if index < record.resources.len() {
                record.resources.remove(index);
            }
        }
        IntakePatch::SetVoterReg(answer) => record.voter_reg = answer,
        IntakePatch::SetApplicationSigned(signed) => record.application_signed = signed,
        IntakePatch::SetReviewDoc { doc, checked } => match doc {
            ReviewDoc::Budgets => record.review_docs.budgets = checked,
            ReviewDoc::Narratives => record.review_docs.narratives = checked,
            ReviewDoc::Verification => record.review_docs.verification = checked,
            ReviewDoc::Interfaces => record.review_docs.interfaces = checked,
        },
        IntakePatch::SetAvsConsentDate(date) => record.avs_consent_date = format_date(&date),
        IntakePatch::SetAvsSubmitted(submitted) => record.avs_submitted = submitted,
        IntakePatch::SetVrNeeded(needed) => record.vr_needed = needed,
        IntakePatch::SetVrSentDetails(details) => record.vr_sent_details = details,
        IntakePatch::SetKnownInstitutions(institutions) => {
            record.known_institutions = institutions
        }
        IntakePatch::SetCaseAssignment(assignment) => record.case_assignment = assignment,
        IntakePatch::Reset => record = IntakeRecord::default(),
    }

    record
}

/// Fold a sequence of edits over a snapshot, in order.
pub fn apply_patches<I>(record: IntakeRecord, patches: I) -> IntakeRecord
where
    I: IntoIterator<Item = IntakePatch>,
{
    patches.into_iter().fold(record, apply_patch)
}
