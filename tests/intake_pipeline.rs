use chrono::{DateTime, TimeZone, Utc};
use intake_bridge::intake::domain::{
    ApplicantStatus, CaseStatus, CaseType, IntakeRecord, PersonStatus, Relationship,
    VoterRegistration,
};
use intake_bridge::intake::patch::{apply_patch, apply_patches, IntakePatch, ReviewDoc};
use intake_bridge::intake::{IntakeDocument, IntakePipeline};
use std::io::Cursor;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid instant")
}

/// Drive the form the way the UI would: a blank record edited patch by
/// patch, then submitted through the pipeline.
#[test]
fn edited_form_flows_through_the_full_pipeline() {
    let record = apply_patches(
        IntakeRecord::default(),
        [
            IntakePatch::SetApplicantName("Mary Jo Smith".to_string()),
            IntakePatch::SetApplicantStatus(ApplicantStatus::Married),
            IntakePatch::SetAddress("456 Oak Avenue, Unit 2B, Portland, OR 97201".to_string()),
            IntakePatch::SetPhone("5551234567".to_string()),
            IntakePatch::SetEmail("mary@example.com".to_string()),
            IntakePatch::SetRelationshipName {
                index: 0,
                name: "John Smith".to_string(),
            },
            IntakePatch::SetRelationshipRelation {
                index: 0,
                relation: "Spouse".to_string(),
            },
            IntakePatch::AddRelationship,
            IntakePatch::SetRelationshipName {
                index: 1,
                name: "Jane Doe".to_string(),
            },
            IntakePatch::SetRelationshipRelation {
                index: 1,
                relation: "POA".to_string(),
            },
            IntakePatch::AddRelationship,
            IntakePatch::SetRelationshipName {
                index: 2,
                name: "Amy Smith".to_string(),
            },
            IntakePatch::SetRelationshipRelation {
                index: 2,
                relation: "Daughter".to_string(),
            },
            IntakePatch::SetCitizenship(true),
            IntakePatch::SetVoterReg(VoterRegistration::Yes),
            IntakePatch::SetApplicationSigned(true),
            IntakePatch::SetReviewDoc {
                doc: ReviewDoc::Verification,
                checked: true,
            },
            IntakePatch::SetAvsConsentDate("01152024".to_string()),
        ],
    );

    // Masking happened at edit time.
    assert_eq!(record.contact.phone, "(555) 123-4567");
    assert_eq!(record.avs_consent_date, "01/15/2024");

    let outcome = IntakePipeline::default().process(&record, fixed_now());

    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.person.first_name, "Mary");
    assert_eq!(outcome.person.last_name, "Jo Smith");
    assert_eq!(outcome.person.address.street, "456 Oak Avenue, Unit 2B");
    assert_eq!(outcome.person.address.city, "Portland");
    assert_eq!(outcome.person.address.state, "OR");
    assert_eq!(outcome.person.address.zip, "97201");
    assert!(outcome.person.mailing_address.same_as_physical);
    assert_eq!(outcome.person.status, PersonStatus::Active);
    assert_eq!(outcome.person.authorized_reps, vec!["Jane Doe"]);
    assert_eq!(outcome.person.family_members, vec!["Amy Smith (Daughter)"]);

    assert_eq!(outcome.case_record.case_type, CaseType::Medicaid);
    assert_eq!(outcome.case_record.status, CaseStatus::Pending);
    assert_eq!(outcome.case_record.spouse_name, "John Smith");
    assert_eq!(outcome.case_record.application_date, "01/15/2024");
    assert_eq!(outcome.case_record.admission_date, "01/15/2024");

    assert_eq!(outcome.metadata.applicant_status, ApplicantStatus::Married);
    assert_eq!(outcome.metadata.voter_registration, VoterRegistration::Yes);
    assert!(outcome.metadata.review_docs.verification);
    assert_eq!(outcome.metadata.intake_date, fixed_now().to_rfc3339());
}

#[test]
fn disability_flag_switches_the_case_type_to_ltc() {
    let record = apply_patches(
        IntakeRecord::default(),
        [
            IntakePatch::SetApplicantName("Mary Smith".to_string()),
            IntakePatch::SetDisability(true),
            IntakePatch::SetCitizenship(false),
        ],
    );

    let outcome = IntakePipeline::default().process(&record, fixed_now());
    assert_eq!(outcome.case_record.case_type, CaseType::Ltc);
}

#[test]
fn saved_document_round_trips_through_the_loader() {
    let mut record = IntakeRecord {
        applicant_name: "Mary Smith".to_string(),
        ..IntakeRecord::default()
    };
    record.relationships = vec![Relationship {
        name: "Jane Doe".to_string(),
        phone: "(555) 987-6543".to_string(),
        relation: "POA".to_string(),
    }];

    let json = serde_json::to_string(&record).expect("serialize");
    let loaded = IntakeDocument::from_reader(Cursor::new(json)).expect("load");
    assert_eq!(loaded, record);
}

#[test]
fn identical_input_and_instant_produce_identical_outcomes() {
    let record = apply_patch(
        IntakeRecord::default(),
        IntakePatch::SetApplicantName("Mary Smith".to_string()),
    );
    let pipeline = IntakePipeline::default();

    let first = pipeline.process(&record, fixed_now());
    let second = pipeline.process(&record, fixed_now());
    assert_eq!(first, second);
}

#[test]
fn incomplete_submission_collects_blocking_errors() {
    let outcome = IntakePipeline::default().process(&IntakeRecord::default(), fixed_now());

    assert_eq!(
        outcome.errors,
        vec!["First name is required", "Last name is required"]
    );
    // The pipeline still produced records; blocking is the caller's call.
    assert!(!outcome.case_record.application_date.is_empty());
    assert_eq!(outcome.case_record.case_type, CaseType::General);
}
