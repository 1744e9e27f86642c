//! Presence checks over the transformed record pair.

use super::domain::TransformedCase;

pub const ERR_FIRST_NAME: &str = "First name is required";
pub const ERR_LAST_NAME: &str = "Last name is required";
pub const ERR_APPLICATION_DATE: &str = "Application date is required";
pub const ERR_CASE_TYPE: &str = "Case type is required";

/// Run the fixed, ordered presence checks and collect one message per
/// failure. An empty list means the pair is ready for the downstream
/// system; whether a non-empty list blocks submission is the caller's
/// policy, not this function's.
///
/// Presence only: no email, phone, or date-format checking happens here.
pub fn validate_transformed(transformed: &TransformedCase) -> Vec<String> {
    let mut errors = Vec::new();

    if transformed.person.first_name.trim().is_empty() {
        errors.push(ERR_FIRST_NAME.to_string());
    }
    if transformed.person.last_name.trim().is_empty() {
        errors.push(ERR_LAST_NAME.to_string());
    }
    if transformed.case_record.application_date.is_empty() {
        errors.push(ERR_APPLICATION_DATE.to_string());
    }
    // Unfireable while case types are enum labels, kept for contract
    // parity with the downstream system's checks.
    if transformed.case_record.case_type.label().is_empty() {
        errors.push(ERR_CASE_TYPE.to_string());
    }

    errors
}
