use ontap_file_browser_core::connection::ConnectionDescriptor;
use ontap_file_browser_core::contract::{CollectionPage, FileEntrySummary, VolumeSummary};
use ontap_file_browser_core::error::RemoteApiError;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::adapters::ontap_api::OntapApi;

const JSON_ACCEPT: &str = "application/json";
const VOLUME_FIELDS: &str = "name,uuid";
const FILE_FIELDS: &str = "type,path,name";

/// Blocking client for the ONTAP REST API (`/api/...`).
///
/// A fresh HTTP client is built per request from the connection descriptor,
/// so trust settings and credentials always follow the connection passed in.
#[derive(Debug, Clone)]
pub struct RestOntapApi {
    scheme: &'static str,
    trace_requests: bool,
}

impl Default for RestOntapApi {
    fn default() -> Self {
        Self::new()
    }
}

impl RestOntapApi {
    pub fn new() -> Self {
        Self {
            scheme: "https",
            trace_requests: false,
        }
    }

    /// Plain HTTP, for local mock appliances.
    pub fn insecure_http() -> Self {
        Self {
            scheme: "http",
            ..Self::new()
        }
    }

    /// Log every request URL and response status at debug level.
    pub fn with_request_tracing(mut self, enabled: bool) -> Self {
        self.trace_requests = enabled;
        self
    }

    pub fn volumes_url(
        &self,
        connection: &ConnectionDescriptor,
        svm_name: &str,
    ) -> Result<Url, RemoteApiError> {
        let mut url = self.api_url(connection, &["storage", "volumes"])?;
        url.query_pairs_mut()
            .append_pair("svm.name", svm_name)
            .append_pair("fields", VOLUME_FIELDS);
        Ok(url)
    }

    /// `path` becomes a single percent-encoded segment, so `dir/a.txt` is sent
    /// as `dir%2Fa.txt` and the root path leaves a trailing slash.
    pub fn file_url(
        &self,
        connection: &ConnectionDescriptor,
        volume_uuid: &str,
        path: &str,
    ) -> Result<Url, RemoteApiError> {
        self.api_url(connection, &["storage", "volumes", volume_uuid, "files", path])
    }

    fn api_url(
        &self,
        connection: &ConnectionDescriptor,
        segments: &[&str],
    ) -> Result<Url, RemoteApiError> {
        let host = connection.host.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}://{}", self.scheme, host)).map_err(|err| {
            RemoteApiError::Transport(format!("invalid appliance endpoint `{host}`: {err}"))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                RemoteApiError::Transport(format!("appliance endpoint `{host}` cannot be a base"))
            })?
            .clear()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    fn get(&self, connection: &ConnectionDescriptor, url: Url) -> Result<Response, RemoteApiError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!connection.verify_tls)
            .build()
            .map_err(|err| {
                RemoteApiError::Transport(format!("failed to build HTTP client: {err}"))
            })?;
        let accept = connection.accept.as_deref().unwrap_or(JSON_ACCEPT);

        if self.trace_requests {
            tracing::debug!(
                component = "ontap_rest",
                method = "GET",
                url = %url,
                accept,
                "request"
            );
        }

        let response = client
            .get(url)
            .basic_auth(&connection.username, Some(&connection.password))
            .header(ACCEPT, accept)
            .send()
            .map_err(|err| RemoteApiError::Transport(err.to_string()))?;

        let status = response.status();
        if self.trace_requests {
            tracing::debug!(component = "ontap_rest", status = status.as_u16(), "response");
        }

        if !status.is_success() {
            return Err(api_error(response));
        }
        Ok(response)
    }

    fn get_collection<T: DeserializeOwned>(
        &self,
        connection: &ConnectionDescriptor,
        url: Url,
    ) -> Result<Vec<T>, RemoteApiError> {
        let page: CollectionPage<T> = self
            .get(connection, url)?
            .json()
            .map_err(|err| RemoteApiError::Decode(err.to_string()))?;
        Ok(page.records)
    }
}

impl OntapApi for RestOntapApi {
    fn list_volumes(
        &self,
        connection: &ConnectionDescriptor,
        svm_name: &str,
    ) -> Result<Vec<VolumeSummary>, RemoteApiError> {
        let url = self.volumes_url(connection, svm_name)?;
        self.get_collection(connection, url)
    }

    fn list_files(
        &self,
        connection: &ConnectionDescriptor,
        volume_uuid: &str,
        path: &str,
    ) -> Result<Vec<FileEntrySummary>, RemoteApiError> {
        let mut url = self.file_url(connection, volume_uuid, path)?;
        url.query_pairs_mut().append_pair("fields", FILE_FIELDS);
        self.get_collection(connection, url)
    }

    fn read_file_range(
        &self,
        connection: &ConnectionDescriptor,
        volume_uuid: &str,
        path: &str,
        byte_offset: u64,
        length: u64,
    ) -> Result<Vec<u8>, RemoteApiError> {
        let mut url = self.file_url(connection, volume_uuid, path)?;
        url.query_pairs_mut()
            .append_pair("byte_offset", &byte_offset.to_string())
            .append_pair("length", &length.to_string());

        let body = self
            .get(connection, url)?
            .bytes()
            .map_err(|err| RemoteApiError::Transport(err.to_string()))?;
        Ok(body.to_vec())
    }
}

#[derive(Deserialize)]
struct OntapErrorBody {
    error: OntapErrorDetail,
}

#[derive(Deserialize)]
struct OntapErrorDetail {
    message: String,
    code: Option<Value>,
}

fn api_error(response: Response) -> RemoteApiError {
    let status = response.status();
    let text = response.text().unwrap_or_default();

    match serde_json::from_str::<OntapErrorBody>(&text) {
        Ok(body) => RemoteApiError::Api {
            status: status.as_u16(),
            code: body.error.code.map(|code| match code {
                Value::String(code) => code,
                other => other.to_string(),
            }),
            message: body.error.message,
        },
        Err(_) => RemoteApiError::Api {
            status: status.as_u16(),
            code: None,
            message: if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            },
        },
    }
}
