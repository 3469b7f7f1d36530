//! Lambda handlers and ONTAP adapters for the file browser function.
//!
//! The handlers are synchronous and talk to the appliance only through the
//! [`adapters::ontap_api::OntapApi`] trait and to the log output only through
//! [`adapters::log_sink::LogSink`], so the whole invocation flow runs against
//! fakes in tests. The binary wires in the REST client and tracing sink.

pub mod adapters;
pub mod handlers;
pub mod telemetry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
