//! Shared ONTAP file browser domain primitives.
//!
//! This crate owns the invocation contract, settings, connection descriptors,
//! and the multipart file-read parser. It intentionally excludes HTTP and
//! Lambda runtime concerns so every piece can be tested without an appliance.

pub mod connection;
pub mod contract;
pub mod error;
pub mod multipart;
pub mod settings;
