pub mod log_sink;
pub mod ontap_api;
pub mod rest_client;
