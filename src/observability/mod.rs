//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: `~/.local/share/zellij/draftboard/draftboard-otlp.json`
//! - **Automatic Rotation**: the file rotates at 10 MiB into 3 numbered backups
//! - **OTLP Format**: one OpenTelemetry JSON document per exported batch
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup from the plugin configuration
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp`]: OTLP JSON encoding
//! - [`rotation`]: Size-based rotating writer

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;
