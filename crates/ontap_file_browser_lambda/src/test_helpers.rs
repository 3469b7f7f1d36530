//! Fakes for the handler seams, shared by unit and integration tests.

use std::collections::HashMap;
use std::sync::Mutex;

use ontap_file_browser_core::connection::ConnectionDescriptor;
use ontap_file_browser_core::contract::{FileEntrySummary, VolumeSummary};
use ontap_file_browser_core::error::RemoteApiError;
use ontap_file_browser_core::multipart::CONTENT_MARKER;
use ontap_file_browser_core::settings::OntapSettings;

use crate::adapters::log_sink::LogSink;
use crate::adapters::ontap_api::OntapApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

/// Log sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().expect("poisoned mutex").clone()
    }

    pub fn lines_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.records
            .lock()
            .expect("poisoned mutex")
            .push((level, message.to_string()));
    }
}

impl LogSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListVolumes {
        svm_name: String,
        accept: Option<String>,
    },
    ListFiles {
        volume_uuid: String,
        path: String,
        accept: Option<String>,
    },
    ReadFileRange {
        volume_uuid: String,
        path: String,
        byte_offset: u64,
        length: u64,
        accept: Option<String>,
    },
}

/// In-memory appliance with canned responses. Volumes without scripted files
/// have an empty root directory.
#[derive(Debug)]
pub struct ScriptedApi {
    volumes: Result<Vec<VolumeSummary>, RemoteApiError>,
    files: HashMap<String, Result<Vec<FileEntrySummary>, RemoteApiError>>,
    file_body: Result<Vec<u8>, RemoteApiError>,
    calls: Mutex<Vec<ApiCall>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            volumes: Ok(Vec::new()),
            files: HashMap::new(),
            file_body: Ok(multipart_envelope("")),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volumes(mut self, volumes: &[(&str, &str)]) -> Self {
        self.volumes = Ok(volumes
            .iter()
            .map(|(name, uuid)| VolumeSummary {
                name: name.to_string(),
                uuid: uuid.to_string(),
            })
            .collect());
        self
    }

    pub fn failing_volumes(mut self, error: RemoteApiError) -> Self {
        self.volumes = Err(error);
        self
    }

    /// Entries are `(type, name)` pairs at the root path.
    pub fn with_files(mut self, volume_uuid: &str, entries: &[(&str, &str)]) -> Self {
        let entries = entries
            .iter()
            .map(|(entry_type, name)| FileEntrySummary {
                entry_type: entry_type.to_string(),
                path: String::new(),
                name: name.to_string(),
            })
            .collect();
        self.files.insert(volume_uuid.to_string(), Ok(entries));
        self
    }

    pub fn failing_files(mut self, volume_uuid: &str, error: RemoteApiError) -> Self {
        self.files.insert(volume_uuid.to_string(), Err(error));
        self
    }

    pub fn with_file_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.file_body = Ok(body.into());
        self
    }

    pub fn failing_read(mut self, error: RemoteApiError) -> Self {
        self.file_body = Err(error);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().expect("poisoned mutex").clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().expect("poisoned mutex").push(call);
    }
}

impl OntapApi for ScriptedApi {
    fn list_volumes(
        &self,
        connection: &ConnectionDescriptor,
        svm_name: &str,
    ) -> Result<Vec<VolumeSummary>, RemoteApiError> {
        self.record(ApiCall::ListVolumes {
            svm_name: svm_name.to_string(),
            accept: connection.accept.clone(),
        });
        self.volumes.clone()
    }

    fn list_files(
        &self,
        connection: &ConnectionDescriptor,
        volume_uuid: &str,
        path: &str,
    ) -> Result<Vec<FileEntrySummary>, RemoteApiError> {
        self.record(ApiCall::ListFiles {
            volume_uuid: volume_uuid.to_string(),
            path: path.to_string(),
            accept: connection.accept.clone(),
        });
        self.files
            .get(volume_uuid)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn read_file_range(
        &self,
        connection: &ConnectionDescriptor,
        volume_uuid: &str,
        path: &str,
        byte_offset: u64,
        length: u64,
    ) -> Result<Vec<u8>, RemoteApiError> {
        self.record(ApiCall::ReadFileRange {
            volume_uuid: volume_uuid.to_string(),
            path: path.to_string(),
            byte_offset,
            length,
            accept: connection.accept.clone(),
        });
        self.file_body.clone()
    }
}

/// A byte-range read response the way the appliance frames it.
pub fn multipart_envelope(content: &str) -> Vec<u8> {
    format!(
        "--3f1d9c\r\nContent-Disposition: form-data; name=\"notes.txt\"\r\n{CONTENT_MARKER}\r\n\r\n{content}\r\n--3f1d9c--\r\n"
    )
    .into_bytes()
}

pub fn sample_settings() -> OntapSettings {
    OntapSettings {
        host: "management.fs-0123.fsx.us-east-1.amazonaws.com".to_string(),
        username: "fsxadmin".to_string(),
        password: "secret".to_string(),
        svm_name: "svm1".to_string(),
        volume_uuid: "uuid-target".to_string(),
    }
}

pub fn sample_connection() -> ConnectionDescriptor {
    ConnectionDescriptor {
        host: "10.0.0.5".to_string(),
        username: "fsxadmin".to_string(),
        password: "secret".to_string(),
        verify_tls: false,
        accept: None,
    }
}

pub fn not_authorized() -> RemoteApiError {
    RemoteApiError::Api {
        status: 401,
        code: None,
        message: "not authorized".to_string(),
    }
}
