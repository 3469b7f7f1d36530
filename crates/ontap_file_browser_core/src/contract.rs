use serde::{Deserialize, Serialize};

pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const SUCCESS_MESSAGE: &str = "Success";

/// Directory listed by the root file lister.
pub const ROOT_DIRECTORY_PATH: &str = "";

pub const FILE_READ_BYTE_OFFSET: u64 = 0;
/// Upper bound passed as `length` on the byte-range read. Anything past it is truncated.
pub const FILE_READ_LENGTH: u64 = 1023;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationEvent {
    pub file_name_with_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    /// The fixed response returned by every invocation.
    ///
    /// `body` holds the JSON encoding of the message, quotes included.
    pub fn success() -> Self {
        Self {
            status_code: SUCCESS_STATUS_CODE,
            body: serde_json::Value::from(SUCCESS_MESSAGE).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeSummary {
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntrySummary {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub path: String,
    pub name: String,
}

/// Single collection page as returned by the ONTAP REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionPage<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub num_records: Option<usize>,
}
