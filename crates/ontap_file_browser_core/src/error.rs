use thiserror::Error;

/// Failure reported by, or while talking to, the ONTAP management API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteApiError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("ONTAP API returned status {status}: {message}{}", code_suffix(.code))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("malformed ONTAP API response: {0}")]
    Decode(String),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|code| format!(" (code {code})"))
        .unwrap_or_default()
}

/// The file-read envelope did not have the expected shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("file read response is not valid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("content marker `{marker}` not found in file read response")]
    MarkerNotFound { marker: &'static str },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be configured")]
    Missing { key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListVolumes,
    ListRootFiles,
    ReadFileContent,
    ExtractFileContent,
    HandleInvocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    Propagate,
    LogAndContinue,
}

/// What each operation does with a failure raised inside it.
pub const fn error_policy(operation: Operation) -> OnError {
    match operation {
        Operation::ListVolumes | Operation::ListRootFiles | Operation::ExtractFileContent => {
            OnError::Propagate
        }
        Operation::ReadFileContent | Operation::HandleInvocation => OnError::LogAndContinue,
    }
}
