//! Canonical schema constants for structured logging
//!
//! Every log line emitted through the logging macros uses these keys, so
//! downstream log processing can rely on them.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_ACTIVITY_ID: &str = "activity_id";
pub const FIELD_CAMPER_ID: &str = "camper_id";
pub const FIELD_SIGNUP_ID: &str = "signup_id";

// Cascade bookkeeping
pub const FIELD_CASCADED_SIGNUPS: &str = "cascaded_signups";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_entity_fields_are_distinct() {
        let fields = [FIELD_ACTIVITY_ID, FIELD_CAMPER_ID, FIELD_SIGNUP_ID];
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
