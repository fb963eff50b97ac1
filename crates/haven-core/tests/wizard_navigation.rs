mod support;

use haven_core::constants::{MSG_INVALID_EMAIL, MSG_REQUIRED, MSG_STEP_INVALID};
use haven_core::{NotificationKind, StepStatus, WizardError, WizardPhase};
use haven_core::WizardEventKind;
use support::{fill_step_one, harness, reach_review};

#[test]
fn valid_step_one_advances_to_step_two() {
    let mut h = harness();
    fill_step_one(&mut h.wizard);

    assert_eq!(h.wizard.go_next(), Ok(2));
    assert_eq!(h.wizard.current_step(), 2);
    assert_eq!(h.wizard.phase(), WizardPhase::Step(2));
    assert!(h.wizard.completed_steps().contains(&1));
    assert!(h.errors.is_clear());
    assert!(h.notes.is_empty());

    let frame = h.renderer.last_frame().expect("rendered after transition");
    assert_eq!(frame.steps, vec![StepStatus::Completed, StepStatus::Active, StepStatus::Pending]);
}

#[test]
fn invalid_email_blocks_and_reports_email_message() {
    let mut h = harness();
    h.wizard.set_field("firstName", "Jane").unwrap();
    h.wizard.set_field("lastName", "Doe").unwrap();
    h.wizard.set_field("email", "not-an-email").unwrap();

    let err = h.wizard.go_next().unwrap_err();
    assert!(matches!(&err, WizardError::Validation { step: 1, .. }));
    assert_eq!(h.wizard.current_step(), 1);
    assert!(h.wizard.completed_steps().is_empty());
    assert_eq!(h.errors.message_for("email").as_deref(), Some(MSG_INVALID_EMAIL));
    assert_eq!(h.notes.entries(), vec![(MSG_STEP_INVALID.to_string(), NotificationKind::Error)]);
}

#[test]
fn every_invalid_field_gets_a_message_and_one_notification() {
    let mut h = harness();

    let err = h.wizard.go_next().unwrap_err();
    let WizardError::Validation { result, .. } = err else {
        panic!("expected validation error");
    };
    assert!(!result.overall_valid);
    for (key, message) in result.invalid_fields() {
        assert!(!message.is_empty(), "{key} has no message");
    }
    assert_eq!(h.errors.visible(),
               vec![("firstName".to_string(), MSG_REQUIRED.to_string()),
                    ("lastName".to_string(), MSG_REQUIRED.to_string()),
                    ("email".to_string(), MSG_INVALID_EMAIL.to_string()),]);
    assert_eq!(h.notes.count_of(NotificationKind::Error), 1);
    assert_eq!(h.wizard.current_step(), 1);
}

#[test]
fn fixing_a_field_clears_its_error() {
    let mut h = harness();
    fill_step_one(&mut h.wizard);
    h.wizard.set_field("email", "nope").unwrap();
    assert!(h.wizard.go_next().is_err());
    assert!(h.errors.message_for("email").is_some());

    h.wizard.set_field("email", "jane@x.com").unwrap();
    assert!(h.errors.message_for("email").is_none());
    assert_eq!(h.wizard.go_next(), Ok(2));
}

#[test]
fn go_prev_never_touches_fields_or_completed_steps() {
    let mut h = harness();
    assert_eq!(h.wizard.go_prev(), Ok(1));

    fill_step_one(&mut h.wizard);
    h.wizard.go_next().unwrap();
    let fields = h.wizard.fields().clone();
    let completed = h.wizard.completed_steps().clone();

    assert_eq!(h.wizard.go_prev(), Ok(1));
    assert_eq!(h.wizard.fields(), &fields);
    assert_eq!(h.wizard.completed_steps(), &completed);
    assert_eq!(h.wizard.go_prev(), Ok(1));
}

#[test]
fn forward_navigation_revalidates_after_going_back() {
    let mut h = harness();
    fill_step_one(&mut h.wizard);
    h.wizard.go_next().unwrap();
    h.wizard.go_prev().unwrap();

    h.wizard.set_field("email", "broken").unwrap();
    assert!(h.wizard.go_next().is_err());
    assert_eq!(h.wizard.current_step(), 1);
}

#[test]
fn step_two_requires_a_role() {
    let mut h = harness();
    fill_step_one(&mut h.wizard);
    h.wizard.go_next().unwrap();

    assert!(h.wizard.go_next().is_err());
    assert_eq!(h.errors.message_for("role").as_deref(), Some(MSG_REQUIRED));

    assert_eq!(h.wizard.apply_role_preset("Tutor"), Ok(true));
    assert_eq!(h.wizard.apply_role_preset("Tutor"), Ok(false));
    assert_eq!(h.wizard.current_step(), 2);
    assert_eq!(h.wizard.go_next(), Ok(3));
}

#[test]
fn set_field_is_idempotent() {
    let mut h = harness();
    assert_eq!(h.wizard.set_field("firstName", "Jane"), Ok(true));
    let snapshot = h.wizard.fields().clone();
    let events = h.wizard.events().len();

    assert_eq!(h.wizard.set_field("firstName", "Jane"), Ok(false));
    assert_eq!(h.wizard.fields(), &snapshot);
    assert_eq!(h.wizard.events().len(), events);
}

#[test]
fn checkbox_group_is_stored_as_a_set() {
    let mut h = harness();
    h.wizard.set_field("availability", vec!["Weekends", "Evenings", "Weekends"]).unwrap();
    assert_eq!(h.wizard.fields().display("availability"), "Weekends, Evenings");
    h.wizard.set_field("availability", "Mornings").unwrap();
    assert_eq!(h.wizard.fields().display("availability"), "Mornings");
}

#[test]
fn events_trace_the_session() {
    let mut h = harness();
    fill_step_one(&mut h.wizard);
    h.wizard.set_field("email", "").unwrap();
    let _ = h.wizard.go_next();
    h.wizard.set_field("email", "jane@x.com").unwrap();
    h.wizard.go_next().unwrap();
    h.wizard.go_prev().unwrap();

    assert_eq!(h.wizard.event_kinds(),
               vec!["SessionStarted",
                    "FieldSet",
                    "FieldSet",
                    "FieldSet",
                    "FieldSet",
                    "ValidationFailed",
                    "FieldSet",
                    "StepAdvanced",
                    "StepRetreated"]);
    let seqs: Vec<u64> = h.wizard.events().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, (0..9).collect::<Vec<u64>>());
}

#[test]
fn set_option_only_touches_checkbox_groups() {
    let mut h = harness();
    h.wizard.set_field("firstName", "Jane").unwrap();
    let events = h.wizard.events().len();

    assert_eq!(h.wizard.set_option("firstName", "x", false),
               Err(WizardError::NotAnOptionGroup("firstName".into())));
    assert_eq!(h.wizard.set_option("nickname", "x", true),
               Err(WizardError::NotAnOptionGroup("nickname".into())));
    assert_eq!(h.wizard.fields().get("firstName"), Some(&haven_core::FieldValue::text("Jane")));
    assert_eq!(h.wizard.events().len(), events);
}

#[test]
fn unchecking_an_unset_group_is_a_no_op() {
    let mut h = harness();
    let events = h.wizard.events().len();
    assert_eq!(h.wizard.set_option("availability", "Weekends", false), Ok(false));
    assert!(!h.wizard.fields().contains("availability"));
    assert_eq!(h.wizard.events().len(), events);

    assert_eq!(h.wizard.set_option("availability", "Weekends", true), Ok(true));
    assert_eq!(h.wizard.set_option("availability", "Weekends", false), Ok(true));
    assert_eq!(h.wizard.fields().display("availability"), "");
    assert_eq!(h.wizard.events().len(), events + 2);
}

#[test]
fn next_on_the_last_step_stays_and_reprojects() {
    let mut h = harness();
    reach_review(&mut h.wizard);
    let frames = h.renderer.frames().len();
    h.wizard.set_field("role", "Driver").unwrap();

    assert_eq!(h.wizard.go_next(), Ok(3));
    assert_eq!(h.wizard.current_step(), 3);
    assert_eq!(h.wizard.completed_steps().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(h.wizard.summary().map(|s| s.role.as_str()), Some("Driver"));
    assert_eq!(h.renderer.frames().len(), frames);
    let projections = h.wizard
                       .events()
                       .iter()
                       .filter(|e| matches!(e.kind, WizardEventKind::SummaryProjected { .. }))
                       .count();
    assert_eq!(projections, 2);
}
