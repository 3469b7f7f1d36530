use std::fmt;

use crate::settings::OntapSettings;

pub const FILE_READ_WRITE_TAG: &str = "file_read_write";
pub const VOLUME_FILE_LIST_TAG: &str = "volume_file_list";
pub const MULTIPART_ACCEPT: &str = "multipart/form-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPurpose {
    FileReadWrite,
    General,
}

impl ConnectionPurpose {
    /// Any tag other than `file_read_write` is a general-purpose connection.
    pub fn from_tag(tag: &str) -> Self {
        if tag == FILE_READ_WRITE_TAG {
            Self::FileReadWrite
        } else {
            Self::General
        }
    }
}

/// Everything needed to issue requests against one management endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    pub host: String,
    pub username: String,
    pub password: String,
    pub verify_tls: bool,
    /// Overrides the default `Accept` header when set.
    pub accept: Option<String>,
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .field("accept", &self.accept)
            .finish()
    }
}

/// Build a descriptor for `purpose`. No I/O happens here.
pub fn acquire_connection(
    purpose: ConnectionPurpose,
    settings: &OntapSettings,
) -> ConnectionDescriptor {
    let accept = match purpose {
        ConnectionPurpose::FileReadWrite => Some(MULTIPART_ACCEPT.to_string()),
        ConnectionPurpose::General => None,
    };

    ConnectionDescriptor {
        host: settings.host.clone(),
        username: settings.username.clone(),
        password: settings.password.clone(),
        verify_tls: false,
        accept,
    }
}
