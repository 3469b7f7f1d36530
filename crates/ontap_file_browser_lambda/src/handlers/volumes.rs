use ontap_file_browser_core::connection::ConnectionDescriptor;
use ontap_file_browser_core::contract::{FileEntrySummary, VolumeSummary, ROOT_DIRECTORY_PATH};
use ontap_file_browser_core::error::RemoteApiError;

use crate::adapters::log_sink::LogSink;
use crate::adapters::ontap_api::OntapApi;

/// Log every volume owned by `svm_name`, in the order the appliance returns them.
///
/// Remote failures propagate; nothing is retried.
pub fn list_volumes(
    api: &impl OntapApi,
    connection: &ConnectionDescriptor,
    svm_name: &str,
    sink: &dyn LogSink,
) -> Result<(), RemoteApiError> {
    let volumes = api.list_volumes(connection, svm_name)?;
    sink.info(&svm_header(svm_name));
    for (index, volume) in volumes.iter().enumerate() {
        sink.info(&volume_line(index + 1, volume));
    }
    Ok(())
}

/// Log the root directory entries of every volume owned by `svm_name`.
///
/// Fetches the volume collection itself instead of sharing one with
/// [`list_volumes`], so either lister can run alone. The first failing call
/// stops the walk.
pub fn list_root_files(
    api: &impl OntapApi,
    connection: &ConnectionDescriptor,
    svm_name: &str,
    sink: &dyn LogSink,
) -> Result<(), RemoteApiError> {
    let volumes = api.list_volumes(connection, svm_name)?;
    sink.info(&svm_header(svm_name));
    for (index, volume) in volumes.iter().enumerate() {
        sink.info(&volume_line(index + 1, volume));
        sink.info(&format!("Files for volume \"{}\"...", volume.name));

        let entries = api.list_files(connection, &volume.uuid, ROOT_DIRECTORY_PATH)?;
        for (entry_index, entry) in entries.iter().enumerate() {
            sink.info(&file_line(entry_index + 1, entry));
        }
    }
    Ok(())
}

fn svm_header(svm_name: &str) -> String {
    format!("Volumes for SVM \"{svm_name}\"...")
}

fn volume_line(ordinal: usize, volume: &VolumeSummary) -> String {
    format!(
        "Volume {ordinal} :: name = \"{}\", uuid = \"{}\"",
        volume.name, volume.uuid
    )
}

fn file_line(ordinal: usize, entry: &FileEntrySummary) -> String {
    format!(
        "File {ordinal} :: type = \"{}\", path = \"{}\", name = \"{}\"",
        entry.entry_type, entry.path, entry.name
    )
}
