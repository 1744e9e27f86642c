//! Derivations over the free-text relationship list.
//!
//! Category membership is a case-insensitive substring check on the
//! `relation` field, and categories are not mutually exclusive: an entry
//! whose relation reads "Spouse and POA" counts as both spouse and
//! authorized representative. Family membership is the only exclusive
//! bucket, defined by *not* matching any spouse or representative marker.

use super::domain::{IntakeRecord, Relationship};

const REP_MARKERS: [&str; 3] = ["authorized", "poa", "representative"];

fn relation_contains(relationship: &Relationship, marker: &str) -> bool {
    relationship.relation.to_lowercase().contains(marker)
}

fn is_authorized_rep(relationship: &Relationship) -> bool {
    REP_MARKERS
        .iter()
        .any(|marker| relation_contains(relationship, marker))
}

fn is_spouse(relationship: &Relationship) -> bool {
    relation_contains(relationship, "spouse")
}

/// Names of every authorized representative, in list order, blank names
/// dropped.
pub fn authorized_reps(relationships: &[Relationship]) -> Vec<String> {
    relationships
        .iter()
        .filter(|r| is_authorized_rep(r))
        .map(|r| r.name.clone())
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// `"name (relation)"` descriptors for every entry that is neither a
/// spouse nor an authorized representative, in list order.
///
/// An entry is dropped only when the composed descriptor is all
/// whitespace, which the embedded parentheses make practically
/// unreachable once `relation` is non-empty.
pub fn family_members(relationships: &[Relationship]) -> Vec<String> {
    relationships
        .iter()
        .filter(|r| !is_spouse(r) && !is_authorized_rep(r))
        .map(|r| format!("{} ({})", r.name, r.relation))
        .filter(|entry| !entry.trim().is_empty())
        .collect()
}

/// Name of the first spouse entry, or empty if the list has none.
pub fn find_spouse(relationships: &[Relationship]) -> String {
    relationships
        .iter()
        .find(|r| is_spouse(r))
        .map(|r| r.name.clone())
        .unwrap_or_default()
}

/// Split an applicant name into (first, last) on runs of whitespace.
///
/// The first token is the first name; everything after it, rejoined with
/// single spaces, is the last name. No tokens means both come back empty.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Every name the form knows about: the applicant first, then each
/// non-blank relationship name. Feeds UI dropdowns on the financial
/// sections.
pub fn name_options(record: &IntakeRecord) -> Vec<String> {
    let mut names = Vec::new();
    if !record.applicant_name.is_empty() {
        names.push(record.applicant_name.clone());
    }
    for relationship in &record.relationships {
        if !relationship.name.is_empty() {
            names.push(relationship.name.clone());
        }
    }
    names
}
