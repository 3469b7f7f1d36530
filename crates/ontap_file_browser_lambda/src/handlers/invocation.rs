use ontap_file_browser_core::connection::{acquire_connection, ConnectionPurpose};
use ontap_file_browser_core::contract::{InvocationEvent, InvocationResponse};
use ontap_file_browser_core::error::{ExtractionError, RemoteApiError};
use ontap_file_browser_core::settings::OntapSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::adapters::log_sink::LogSink;
use crate::adapters::ontap_api::OntapApi;
use crate::handlers::file_content::read_and_log_file_content;
use crate::handlers::volumes::{list_root_files, list_volumes};

/// Any failure that ends the step sequence early.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Remote(#[from] RemoteApiError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("event has no string field `file_name_with_path`")]
    MissingFilePath,
}

/// Run one invocation: list volumes, list each volume's root, then read the
/// requested file.
///
/// The first failing step is logged and ends the sequence. The response is
/// always `200` with a `"Success"` body; failures are only visible in the logs.
pub fn handle_invocation(
    event: &Value,
    settings: &OntapSettings,
    api: &impl OntapApi,
    sink: &dyn LogSink,
) -> InvocationResponse {
    sink.debug(&format!("REQUEST :: {}", pretty_json(event)));

    if let Err(error) = run_steps(event, settings, api, sink) {
        sink.error(&format!("Error occurred :: {error}"));
    }

    let response = InvocationResponse::success();
    sink.debug(&format!("RESPONSE :: {}", pretty_json(&response)));
    response
}

fn run_steps(
    event: &Value,
    settings: &OntapSettings,
    api: &impl OntapApi,
    sink: &dyn LogSink,
) -> Result<(), HandlerError> {
    let connection = acquire_connection(ConnectionPurpose::General, settings);
    list_volumes(api, &connection, &settings.svm_name, sink)?;
    list_root_files(api, &connection, &settings.svm_name, sink)?;

    let connection = acquire_connection(ConnectionPurpose::FileReadWrite, settings);
    let file_path = file_path_from(event)?;
    read_and_log_file_content(api, &connection, &settings.volume_uuid, &file_path, sink)?;
    Ok(())
}

fn file_path_from(event: &Value) -> Result<String, HandlerError> {
    InvocationEvent::deserialize(event)
        .map(|event| event.file_name_with_path)
        .map_err(|_| HandlerError::MissingFilePath)
}

fn pretty_json(value: &impl Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|error| format!("<unserializable: {error}>"))
}
