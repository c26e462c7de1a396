//! ## strovare-telemetry::logging
//! **Structured logging with tracing and OpenTelemetry metadata**
//!
//! ### Expectations:
//! - All log output goes to stderr; stdout is reserved for mission reports.
//! - `RUST_LOG` overrides the configured level when set.
//! - Span-enter events are opt-in, for tracing a run instruction by
//!   instruction.

use opentelemetry::KeyValue;
use tracing::info_span;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber.
    ///
    /// `level` is the fallback filter when `RUST_LOG` is unset; `log_spans`
    /// additionally emits span-enter events.
    pub fn init(level: &str, log_spans: bool) {
        let builder = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .with_writer(std::io::stderr);
        if log_spans {
            builder.with_span_events(FmtSpan::ENTER).init()
        } else {
            builder.init()
        }
    }

    /// Logs one structured event with key/value metadata.
    pub fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!("mission_event", event_type = event_type);
        let _enter = span.enter();
        tracing::info!(metadata = ?metadata, "Mission event occurred");
    }
}
