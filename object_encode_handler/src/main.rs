use aws_config::environment::EnvironmentVariableCredentialsProvider;
use handler::handler;
use lambda_entrypoint::Entrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use serde_json::value::RawValue;
use std::sync::Arc;

mod config;
mod encode;
mod error;
mod handler;
mod model;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::Config::fixed();

    // Credentials come from the process environment only; the transport is
    // TLS by default.
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(config.region)
        .credentials_provider(EnvironmentVariableCredentialsProvider::new())
        .load()
        .await;

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config));

    tracing::trace!("initialized s3 client");

    let shared_s3_client = Arc::new(s3_client);

    let func = service_fn(move |event: LambdaEvent<Box<RawValue>>| {
        let s3_client = shared_s3_client.clone();
        async move { handler(s3_client, event).await }
    });

    run(func).await
}
