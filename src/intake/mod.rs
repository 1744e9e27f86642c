//! Case intake pipeline: masking, address parsing, transformation,
//! validation, and metadata packaging for the downstream case-management
//! system.

pub mod address;
pub mod domain;
pub mod mask;
pub mod metadata;
pub mod patch;
pub mod relationships;
pub mod transform;
pub mod validate;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use self::domain::{IntakeRecord, TransformedCase};
use self::metadata::{build_metadata, IntakeMetadata, DEFAULT_SOURCE_TAG};
use self::transform::{transform_intake, TransformOptions};
use self::validate::validate_transformed;

/// Everything a submission action produces: the record pair for the
/// collaborator, the audit metadata, and any validation errors the
/// caller may decide to block on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeOutcome {
    pub person: domain::PersonRecord,
    pub case_record: domain::CaseRecord,
    pub metadata: IntakeMetadata,
    pub errors: Vec<String>,
}

/// One-shot processor invoked per user submission.
///
/// Stateless apart from its configuration; safe to share and call from
/// any number of tasks.
#[derive(Debug, Clone)]
pub struct IntakePipeline {
    source_tag: String,
    options: TransformOptions,
}

impl Default for IntakePipeline {
    fn default() -> Self {
        Self {
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
            options: TransformOptions::default(),
        }
    }
}

impl IntakePipeline {
    pub fn new(source_tag: impl Into<String>, case_description: impl Into<String>) -> Self {
        Self {
            source_tag: source_tag.into(),
            options: TransformOptions {
                case_description: case_description.into(),
            },
        }
    }

    /// Transform, validate, and package one intake snapshot. `now` backs
    /// the defaulted dates and the metadata timestamp; callers pin it
    /// for determinism or pass the wall clock.
    pub fn process(&self, record: &IntakeRecord, now: DateTime<Utc>) -> IntakeOutcome {
        let transformed = transform_intake(record, now, &self.options);
        let errors = validate_transformed(&transformed);
        let metadata = build_metadata(record, now, &self.source_tag);
        let TransformedCase {
            person,
            case_record,
        } = transformed;

        IntakeOutcome {
            person,
            case_record,
            metadata,
            errors,
        }
    }
}

#[derive(Debug)]
pub enum IntakeImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for IntakeImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeImportError::Io(err) => write!(f, "failed to read intake document: {}", err),
            IntakeImportError::Json(err) => write!(f, "invalid intake JSON data: {}", err),
        }
    }
}

impl std::error::Error for IntakeImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeImportError::Io(err) => Some(err),
            IntakeImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IntakeImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for IntakeImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loader for intake documents saved as JSON, for the CLI surface.
pub struct IntakeDocument;

impl IntakeDocument {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<IntakeRecord, IntakeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<IntakeRecord, IntakeImportError> {
        let record = serde_json::from_reader(reader)?;
        Ok(record)
    }
}
