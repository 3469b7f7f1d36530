use std::fmt;

use crate::error::ConfigError;

pub const DNS_NAME_ENV: &str = "FSX_ONTAP_FS_DNS_NAME";
pub const USER_NAME_ENV: &str = "FSX_ONTAP_FS_USER_NAME";
pub const PASSWORD_ENV: &str = "FSX_ONTAP_FS_PASSWORD";
pub const SVM_NAME_ENV: &str = "FSX_ONTAP_SVM_NAME";
pub const VOLUME_UUID_ENV: &str = "FSX_ONTAP_VOLUME_UUID";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Appliance endpoint, credentials and targets for one invocation.
///
/// Values are only checked for presence. Bad credentials or an unknown SVM
/// surface later as remote API errors.
#[derive(Clone, PartialEq, Eq)]
pub struct OntapSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub svm_name: String,
    pub volume_uuid: String,
}

impl OntapSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing { key });

        Ok(Self {
            host: required(DNS_NAME_ENV)?,
            username: required(USER_NAME_ENV)?,
            password: required(PASSWORD_ENV)?,
            svm_name: required(SVM_NAME_ENV)?,
            volume_uuid: required(VOLUME_UUID_ENV)?,
        })
    }
}

impl fmt::Debug for OntapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntapSettings")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("svm_name", &self.svm_name)
            .field("volume_uuid", &self.volume_uuid)
            .finish()
    }
}

/// Verbosity requested through `LOG_LEVEL`, using the level names the
/// function has always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    NotSet,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
    }

    /// Case-insensitive, no trimming. Unset and unrecognized values fall back
    /// to `NotSet`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::NotSet;
        };

        match raw.to_ascii_uppercase().as_str() {
            "DEBUG" => Self::Debug,
            "INFO" => Self::Info,
            "WARNING" => Self::Warning,
            "ERROR" => Self::Error,
            "CRITICAL" => Self::Critical,
            _ => Self::NotSet,
        }
    }

    /// Debug verbosity also turns on per-request tracing in the REST adapter.
    pub fn traces_requests(self) -> bool {
        self == Self::Debug
    }
}
