use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Default filter when `RUST_LOG` is unset. Engine progress is visible,
/// per-hand chatter is not.
pub const DEFAULT_FILTER: &str = "warn,pokerhud_engine=info";

/// Structured log entry for testing and analysis
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Captures log entries in memory for verification
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn into_layer<S>(self) -> CaptureLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        CaptureLayer {
            capture: self,
            _phantom: PhantomData,
        }
    }
}

pub struct CaptureLayer<S> {
    capture: LogCapture,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for CaptureLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        self.capture
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

/// Initialize logging for the binary.
///
/// Logs go to stderr so stdout stays a clean JSONL stream. Calling this
/// twice keeps the first subscriber.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhud_engine::batch::{import_source, MemorySource};
    use pokerhud_engine::session::parse_session;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    fn capture<F: FnOnce()>(f: F) -> Vec<LogEntry> {
        let capture = LogCapture::new();
        let registry = Registry::default().with(capture.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, f);
        capture.entries()
    }

    #[test]
    fn skipped_hand_is_logged_as_warning() {
        let entries = capture(|| {
            let import = parse_session("PokerStars Hand #1: x\nKavarzE: bets 0.45");
            assert_eq!(import.errors.len(), 1);
        });

        let warning = entries
            .iter()
            .find(|e| e.level == Level::WARN)
            .expect("warning emitted");
        assert!(warning.message.contains("skipping hand"));
        assert!(warning.target.starts_with("pokerhud_engine"));
        assert!(warning.field("error").is_some());
    }

    #[test]
    fn import_summary_is_logged_at_info() {
        // Batch imports run on rayon workers; only the final summary is
        // emitted on the calling thread.
        let entries = capture(|| {
            let source = MemorySource::new().with_file("a.txt", "PokerStars Hand #7: x\nb: folds");
            import_source(&source);
        });

        let summary = entries
            .iter()
            .find(|e| e.level == Level::INFO && e.message.contains("import finished"))
            .expect("summary emitted");
        assert_eq!(summary.field("files"), Some("1"));
        assert_eq!(summary.field("hands"), Some("1"));
        assert_eq!(summary.field("errors"), Some("0"));
    }

    #[test]
    fn clear_drops_entries() {
        let capture = LogCapture::new();
        let registry = Registry::default().with(capture.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, || tracing::info!("first"));
        assert_eq!(capture.entries().len(), 1);
        capture.clear();
        assert!(capture.entries().is_empty());
    }
}
