pub mod file_content;
pub mod invocation;
pub mod volumes;
