#![allow(clippy::unwrap_used, clippy::expect_used)]

use camp_core::errors::CampError;
use camp_core::logging_facility::test_capture::init_test_capture;
use camp_core::{log_op_end, log_op_error, log_op_start};
use camp_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration_and_cascade() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, cascaded_signups = 3);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].duration_ms, Some(42));
    assert_eq!(events[0].cascaded_signups, Some(3));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, CampError::InvalidAge { age: 19 }, duration_ms = 10);

    let error_event = capture.last_end(op_name).expect("Should have error event");
    assert_eq!(error_event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(error_event.err_code.as_deref(), Some("ERR_INVALID_AGE"));
    assert_eq!(error_event.err_kind.as_deref(), Some("InvalidAge"));
}

#[test]
fn test_log_macros_with_entity_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, camper_id = 7, activity_id = 2);

    let events = capture.events_for_op(op_name);
    assert_eq!(events[0].camper_id, Some(7));
    assert_eq!(events[0].activity_id, Some(2));
    assert_eq!(events[0].signup_id, None);
    assert!(events[0]
        .component
        .as_deref()
        .unwrap()
        .starts_with("logging_facility_tests"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_fails_for_unknown_op() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_count_events() {
    let capture = init_test_capture();
    let op1_name = "test_count_events_op1_unique_5";
    let op2_name = "test_count_events_op2_unique_5";

    log_op_start!(op1_name);
    log_op_start!(op2_name);
    log_op_end!(op1_name, duration_ms = 10);

    let ours = |op: Option<&str>| op == Some(op1_name) || op == Some(op2_name);
    let start_count = capture
        .count_events(|e| e.event.as_deref() == Some(EVENT_START) && ours(e.op.as_deref()));
    let end_count = capture.count_events(|e| e.is_end() && ours(e.op.as_deref()));

    assert_eq!(start_count, 2);
    assert_eq!(end_count, 1);
}
