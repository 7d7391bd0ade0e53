//! In-memory capture of operation events for test assertions
//!
//! Events are decoded into the canonical camp fields, so tests can assert on
//! a cascade count or an error code without parsing formatted output.

use camp_core_types::schema::{
    FIELD_ACTIVITY_ID, FIELD_CAMPER_ID, FIELD_CASCADED_SIGNUPS, FIELD_COMPONENT,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EVENT, FIELD_OP, FIELD_SIGNUP_ID,
};
use camp_core_types::schema::{EVENT_END, EVENT_END_ERROR};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One operation event, decoded into the canonical fields
///
/// Fields the event did not carry are `None`; fields outside the canonical
/// set are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: Option<Level>,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub duration_ms: Option<u64>,
    pub activity_id: Option<i64>,
    pub camper_id: Option<i64>,
    pub signup_id: Option<i64>,
    pub cascaded_signups: Option<u64>,
    pub err_kind: Option<String>,
    pub err_code: Option<String>,
}

impl CapturedEvent {
    /// True for `end` and `end_error` events
    pub fn is_end(&self) -> bool {
        matches!(self.event.as_deref(), Some(EVENT_END) | Some(EVENT_END_ERROR))
    }
}

impl Visit for CapturedEvent {
    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            FIELD_COMPONENT => &mut self.component,
            FIELD_OP => &mut self.op,
            FIELD_EVENT => &mut self.event,
            FIELD_ERR_CODE => &mut self.err_code,
            FIELD_ERR_KIND => &mut self.err_kind,
            _ => return,
        };
        *slot = Some(value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            FIELD_ACTIVITY_ID => self.activity_id = Some(value),
            FIELD_CAMPER_ID => self.camper_id = Some(value),
            FIELD_SIGNUP_ID => self.signup_id = Some(value),
            FIELD_DURATION_MS => self.duration_ms = u64::try_from(value).ok(),
            FIELD_CASCADED_SIGNUPS => self.cascaded_signups = u64::try_from(value).ok(),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            FIELD_DURATION_MS => self.duration_ms = Some(value),
            FIELD_CASCADED_SIGNUPS => self.cascaded_signups = Some(value),
            _ => {
                if let Ok(value) = i64::try_from(value) {
                    self.record_i64(field, value);
                }
            }
        }
    }

    // `err_kind = ?kind` arrives here
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record_str(field, &format!("{:?}", value));
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent {
            level: Some(*event.metadata().level()),
            ..CapturedEvent::default()
        };
        event.record(&mut captured);

        // Only operation events are of interest
        if captured.op.is_none() {
            return;
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Handle on the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Events emitted for one operation, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .map(|events| {
                events
                    .iter()
                    .filter(|e| e.op.as_deref() == Some(op))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The most recent `end` or `end_error` event of an operation
    pub fn last_end(&self, op: &str) -> Option<CapturedEvent> {
        self.events_for_op(op).into_iter().rev().find(|e| e.is_end())
    }

    /// Count captured events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events
            .lock()
            .map(|events| events.iter().filter(|e| predicate(e)).count())
            .unwrap_or_default()
    }

    /// # Panics
    ///
    /// Panics if no event with this op and event name was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events_for_op(op);
        assert!(
            events.iter().any(|e| e.event.as_deref() == Some(event)),
            "Expected event op={} event={} not found among {} events for that op",
            op,
            event,
            events.len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (once per process)
///
/// Every test in the process shares the same buffer, so tests should filter
/// on a unique `op` name.
///
/// ```
/// use camp_core::logging_facility::test_capture::init_test_capture;
/// use camp_core::log_op_end;
///
/// let capture = init_test_capture();
/// log_op_end!("doc_capture_op", duration_ms = 4, cascaded_signups = 2);
/// assert_eq!(capture.last_end("doc_capture_op").unwrap().cascaded_signups, Some(2));
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer {
                events: events.clone(),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { events }
        })
        .clone()
}
