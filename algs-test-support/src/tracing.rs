//! Recording layer for capturing spans and events in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use ::tracing::field::{Field, Visit};
use ::tracing::span::{Attributes, Id, Record};
use ::tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// Layer that keeps every closed span and emitted event for later assertions.
///
/// Clones share storage, so a clone can be installed in a subscriber while the
/// original is kept for inspection.
///
/// # Examples
/// ```
/// use algs_test_support::tracing::RecordingLayer;
///
/// let layer = RecordingLayer::default();
/// assert!(layer.spans().is_empty());
/// assert!(layer.events().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingLayer {
    /// Runs `body` with a thread-local subscriber that records into a fresh
    /// layer, returning the layer alongside the closure's output.
    ///
    /// # Examples
    /// ```
    /// use algs_test_support::tracing::RecordingLayer;
    ///
    /// let (layer, ()) = RecordingLayer::capture(|| tracing::info!(answer = 42, "hello"));
    /// assert_eq!(layer.events()[0].fields["answer"], "42");
    /// ```
    pub fn capture<T>(body: impl FnOnce() -> T) -> (Self, T) {
        let layer = Self::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let output = ::tracing::subscriber::with_default(subscriber, body);
        (layer, output)
    }

    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the first event whose `message` field equals `message`.
    #[must_use]
    pub fn event_with_message(&self, message: &str) -> Option<EventRecord> {
        self.events()
            .into_iter()
            .find(|event| event.fields.get("message").map(String::as_str) == Some(message))
    }
}

/// A closed span with its name and the final value of each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Field values rendered as strings.
    pub fields: HashMap<String, String>,
}

/// An emitted event with its level, target, and rendered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Field values rendered as strings, including `message`.
    pub fields: HashMap<String, String>,
}

struct PendingSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut Fields(&mut record.fields));
        span.extensions_mut().insert(PendingSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(pending) = span.extensions_mut().get_mut::<PendingSpan>() {
            values.record(&mut Fields(&mut pending.0.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() else {
            return;
        };
        self.spans
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut Fields(&mut fields));
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
    }
}

struct Fields<'a>(&'a mut HashMap<String, String>);

impl Fields<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for Fields<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }
}
