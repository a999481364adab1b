//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - **Location**: `<data dir>/country-picker-otlp.json`
//! - **Rotation**: at 5 MB into `.1`, `.2`, `.3` backups
//! - **Format**: one OTLP/JSON `resourceSpans` document per line
//! - **Level**: `COUNTRY_TRACE_LEVEL` (any `EnvFilter` directive), default `info`
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider and the file span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotationPolicy;
pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
