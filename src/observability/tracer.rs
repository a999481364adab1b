//! Tracer provider backed by a file span exporter.
//!
//! Spans go through the SDK's simple (synchronous) processor straight into
//! [`FileSpanExporter`], which writes one OTLP JSON line per batch. The terminal
//! owns stdout, so traces never go there.

use super::file_writer::{FileWriter, RotationPolicy};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes span batches to a rotating JSON-lines file.
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: FileWriter, formatter: SpanFormatter) -> Self {
        Self {
            writer,
            formatter,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }
        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed when the formatter is built.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that exports to `file_path`.
///
/// # Parameters
///
/// * `file_path` - Active trace file; backups are written next to it
/// * `resource` - Resource attributes attached to every batch
/// * `scope` - Instrumentation scope name recorded in the output
/// * `policy` - When to rotate the trace file
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope: &'static str,
    policy: RotationPolicy,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(
        FileWriter::new(file_path, policy),
        SpanFormatter::new(resource.clone(), scope),
    );

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
