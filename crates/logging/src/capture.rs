//! crates/logging/src/capture.rs
//! Thread-local collection of diagnostic events.
//!
//! [`CaptureLayer`] is a tracing-subscriber layer that records every event
//! emitted on one of the [`Subsystem`] targets into a per-thread buffer. Tests
//! and embedders use it to assert on the rejection cause reported for a frame
//! without parsing formatted log output.

use std::cell::RefCell;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

use super::subsystem::Subsystem;

thread_local! {
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<CapturedEvent>> = RefCell::new(Vec::new());
}

/// Diagnostic event collected during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Category derived from the event target.
    pub subsystem: Subsystem,
    /// Severity the event was emitted with.
    pub level: Level,
    /// Rendered `message` field.
    pub message: String,
}

/// A tracing layer that stores [`Subsystem`] events in a thread-local buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureLayer;

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(subsystem) = Subsystem::from_target(metadata.target()) else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.message.unwrap_or_default();

        EVENTS.with(|e| {
            e.borrow_mut().push(CapturedEvent {
                subsystem,
                level: *metadata.level(),
                message,
            });
        });
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Drain all collected events, clearing the internal buffer.
pub fn drain_events() -> Vec<CapturedEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Runs `f` with a [`CaptureLayer`] installed as the thread's default
/// subscriber and returns its result together with the events it emitted.
///
/// Events captured before the call are discarded.
pub fn capture_events<F, R>(f: F) -> (R, Vec<CapturedEvent>)
where
    F: FnOnce() -> R,
{
    drain_events();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer);
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, drain_events())
}
