use lambda_runtime::{service_fn, Error, LambdaEvent};
use ontap_file_browser_core::contract::InvocationResponse;
use ontap_file_browser_core::settings::{LogLevel, OntapSettings};
use ontap_file_browser_lambda::adapters::log_sink::TracingLogSink;
use ontap_file_browser_lambda::adapters::rest_client::RestOntapApi;
use ontap_file_browser_lambda::handlers::invocation::handle_invocation;
use ontap_file_browser_lambda::telemetry::init_logging;
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    api: &RestOntapApi,
) -> Result<InvocationResponse, Error> {
    // Read at invocation time, never cached.
    let settings = OntapSettings::from_env()?;

    let response = tokio::task::block_in_place(|| {
        handle_invocation(&event.payload, &settings, api, &TracingLogSink)
    });
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let level = LogLevel::from_env();
    init_logging(level).map_err(Error::from)?;

    let api = RestOntapApi::new().with_request_tracing(level.traces_requests());
    let api = &api;
    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, api).await
    }))
    .await
}
