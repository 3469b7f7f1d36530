use httpmock::prelude::*;
use ontap_file_browser_core::settings::OntapSettings;
use ontap_file_browser_lambda::adapters::rest_client::RestOntapApi;
use ontap_file_browser_lambda::handlers::invocation::handle_invocation;
use ontap_file_browser_lambda::test_helpers::{multipart_envelope, Level, RecordingSink};
use serde_json::json;

fn settings_for(server: &MockServer) -> OntapSettings {
    OntapSettings {
        host: server.address().to_string(),
        username: "fsxadmin".to_string(),
        password: "secret".to_string(),
        svm_name: "svm1".to_string(),
        volume_uuid: "uuid-data".to_string(),
    }
}

#[test]
fn invocation_lists_and_reads_against_rest_api() {
    let server = MockServer::start();
    let volumes = server.mock(|when, then| {
        when.method(GET)
            .path("/api/storage/volumes")
            .query_param("svm.name", "svm1")
            .header("accept", "application/json");
        then.status(200).json_body(json!({
            "records": [
                {"uuid": "uuid-root", "name": "svm1_root"},
                {"uuid": "uuid-data", "name": "data"}
            ],
            "num_records": 2
        }));
    });
    let root_listing = server.mock(|when, then| {
        when.method(GET).path("/api/storage/volumes/uuid-root/files/");
        then.status(200).json_body(json!({
            "records": [{"type": "directory", "path": "", "name": "."}],
            "num_records": 1
        }));
    });
    let data_listing = server.mock(|when, then| {
        when.method(GET).path("/api/storage/volumes/uuid-data/files/");
        then.status(200).json_body(json!({
            "records": [
                {"type": "directory", "path": "", "name": "."},
                {"type": "file", "path": "", "name": "notes.txt"}
            ],
            "num_records": 2
        }));
    });
    let read = server.mock(|when, then| {
        when.method(GET)
            .path("/api/storage/volumes/uuid-data/files/notes.txt")
            .query_param("byte_offset", "0")
            .query_param("length", "1023")
            .header("accept", "multipart/form-data");
        then.status(200)
            .body(multipart_envelope("first line\r\n\r\nsecond line"));
    });

    let sink = RecordingSink::new();
    let response = handle_invocation(
        &json!({"file_name_with_path": "notes.txt"}),
        &settings_for(&server),
        &RestOntapApi::insecure_http(),
        &sink,
    );

    assert_eq!(response.status_code, 200);
    volumes.assert_hits(2);
    root_listing.assert();
    data_listing.assert();
    read.assert();

    let info = sink.lines_at(Level::Info);
    assert_eq!(
        info.iter()
            .filter(|line| line.starts_with("Volume 1 ::"))
            .count(),
        2
    );
    assert!(info
        .iter()
        .any(|line| line == "File 2 :: type = \"file\", path = \"\", name = \"notes.txt\""));
    assert_eq!(
        info.last().map(String::as_str),
        Some("Content of file \"notes.txt\" :: first line\nsecond line")
    );
    assert!(sink.lines_at(Level::Error).is_empty());
}

#[test]
fn unauthorized_appliance_still_returns_success() {
    let server = MockServer::start();
    let volumes = server.mock(|when, then| {
        when.method(GET).path("/api/storage/volumes");
        then.status(401).json_body(json!({
            "error": {"message": "not authorized for that command", "code": "6"}
        }));
    });

    let sink = RecordingSink::new();
    let response = handle_invocation(
        &json!({"file_name_with_path": "notes.txt"}),
        &settings_for(&server),
        &RestOntapApi::insecure_http(),
        &sink,
    );

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "\"Success\"");
    volumes.assert_hits(1);
    assert_eq!(
        sink.lines_at(Level::Error),
        vec!["Error occurred :: ONTAP API returned status 401: not authorized for that command (code 6)"]
    );
}

#[test]
fn unreachable_appliance_is_logged_as_transport_failure() {
    let server = MockServer::start();
    let mut settings = settings_for(&server);
    settings.host = "127.0.0.1:1".to_string();

    let sink = RecordingSink::new();
    let response = handle_invocation(
        &json!({"file_name_with_path": "notes.txt"}),
        &settings,
        &RestOntapApi::insecure_http(),
        &sink,
    );

    assert_eq!(response.status_code, 200);
    let errors = sink.lines_at(Level::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error occurred :: transport failure:"));
}
