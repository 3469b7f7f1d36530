use ontap_file_browser_core::connection::ConnectionDescriptor;
use ontap_file_browser_core::contract::{FILE_READ_BYTE_OFFSET, FILE_READ_LENGTH};
use ontap_file_browser_core::error::ExtractionError;
use ontap_file_browser_core::multipart::extract_file_content;

use crate::adapters::log_sink::LogSink;
use crate::adapters::ontap_api::OntapApi;

/// Read the first byte range of `file_path` and log its content.
///
/// An error reported by the appliance is logged and swallowed. A response
/// without the octet-stream marker is returned as [`ExtractionError`] so the
/// caller can tell a rejected request from an unexpected response shape.
pub fn read_and_log_file_content(
    api: &impl OntapApi,
    connection: &ConnectionDescriptor,
    volume_uuid: &str,
    file_path: &str,
    sink: &dyn LogSink,
) -> Result<(), ExtractionError> {
    let body = match api.read_file_range(
        connection,
        volume_uuid,
        file_path,
        FILE_READ_BYTE_OFFSET,
        FILE_READ_LENGTH,
    ) {
        Ok(body) => body,
        Err(error) => {
            sink.error(&format!("Error occurred :: {error}"));
            return Ok(());
        }
    };

    let content = extract_file_content(&body)?;
    sink.info(&format!("Content of file \"{file_path}\" :: {content}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use ontap_file_browser_core::connection::MULTIPART_ACCEPT;
    use ontap_file_browser_core::error::RemoteApiError;
    use ontap_file_browser_core::multipart::CONTENT_MARKER;

    use crate::test_helpers::{
        multipart_envelope, sample_connection, ApiCall, Level, RecordingSink, ScriptedApi,
    };

    use super::*;

    fn multipart_connection() -> ConnectionDescriptor {
        ConnectionDescriptor {
            accept: Some(MULTIPART_ACCEPT.to_string()),
            ..sample_connection()
        }
    }

    #[test]
    fn logs_extracted_content() {
        let api = ScriptedApi::new().with_file_body(multipart_envelope("A\r\nB"));
        let sink = RecordingSink::new();

        read_and_log_file_content(&api, &multipart_connection(), "uuid-1", "dir/notes.txt", &sink)
            .expect("read should succeed");

        assert_eq!(
            sink.lines_at(Level::Info),
            vec!["Content of file \"dir/notes.txt\" :: A\nB"]
        );
    }

    #[test]
    fn requests_first_bounded_range_of_configured_volume() {
        let api = ScriptedApi::new().with_file_body(multipart_envelope("hello"));
        let sink = RecordingSink::new();

        read_and_log_file_content(&api, &multipart_connection(), "uuid-1", "notes.txt", &sink)
            .expect("read should succeed");

        assert_eq!(
            api.calls(),
            vec![ApiCall::ReadFileRange {
                volume_uuid: "uuid-1".to_string(),
                path: "notes.txt".to_string(),
                byte_offset: 0,
                length: 1023,
                accept: Some(MULTIPART_ACCEPT.to_string()),
            }]
        );
    }

    #[test]
    fn empty_content_is_logged_as_empty_string() {
        let raw = format!("--b\n{CONTENT_MARKER}\n--b--\n");
        let api = ScriptedApi::new().with_file_body(raw);
        let sink = RecordingSink::new();

        read_and_log_file_content(&api, &multipart_connection(), "uuid-1", "empty.txt", &sink)
            .expect("read should succeed");

        assert_eq!(
            sink.lines_at(Level::Info),
            vec!["Content of file \"empty.txt\" :: "]
        );
    }

    #[test]
    fn remote_error_is_logged_and_swallowed() {
        let api = ScriptedApi::new().failing_read(RemoteApiError::Api {
            status: 404,
            code: Some("917927".to_string()),
            message: "Entry doesn't exist".to_string(),
        });
        let sink = RecordingSink::new();

        read_and_log_file_content(&api, &multipart_connection(), "uuid-1", "missing.txt", &sink)
            .expect("remote errors are not returned");

        assert_eq!(
            sink.lines_at(Level::Error),
            vec!["Error occurred :: ONTAP API returned status 404: Entry doesn't exist (code 917927)"]
        );
        assert!(sink.lines_at(Level::Info).is_empty());
    }

    #[test]
    fn missing_marker_is_returned_and_nothing_is_logged() {
        let api = ScriptedApi::new().with_file_body("{\"name\": \"notes.txt\"}");
        let sink = RecordingSink::new();

        let error =
            read_and_log_file_content(&api, &multipart_connection(), "uuid-1", "notes.txt", &sink)
                .expect_err("marker is missing");

        assert!(matches!(error, ExtractionError::MarkerNotFound { .. }));
        assert!(sink.records().is_empty());
    }
}
