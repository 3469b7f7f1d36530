use ontap_file_browser_core::connection::ConnectionDescriptor;
use ontap_file_browser_core::contract::{FileEntrySummary, VolumeSummary};
use ontap_file_browser_core::error::RemoteApiError;

/// The three management API operations the function consumes.
///
/// Every call names the connection it runs on; there is no ambient default.
pub trait OntapApi {
    fn list_volumes(
        &self,
        connection: &ConnectionDescriptor,
        svm_name: &str,
    ) -> Result<Vec<VolumeSummary>, RemoteApiError>;

    fn list_files(
        &self,
        connection: &ConnectionDescriptor,
        volume_uuid: &str,
        path: &str,
    ) -> Result<Vec<FileEntrySummary>, RemoteApiError>;

    /// Returns the raw response body, which is a multipart envelope when the
    /// connection asks for `multipart/form-data`.
    fn read_file_range(
        &self,
        connection: &ConnectionDescriptor,
        volume_uuid: &str,
        path: &str,
        byte_offset: u64,
        length: u64,
    ) -> Result<Vec<u8>, RemoteApiError>;
}
