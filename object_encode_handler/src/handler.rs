use lambda_runtime::LambdaEvent;
use serde_json::value::RawValue;
use std::sync::Arc;

use crate::{
    encode,
    error::HandlerError,
    model::{EncodeRequest, EncodeResponse},
    service,
};

/// Processes one invocation: validate the payload, download the object,
/// base64 encode it.
///
/// The stages run strictly in order and the first failure ends the
/// invocation; nothing is retried.
#[tracing::instrument(skip(s3_client, event))]
pub async fn handler(
    s3_client: Arc<service::s3::S3>,
    event: LambdaEvent<Box<RawValue>>,
) -> Result<EncodeResponse, HandlerError> {
    let request = EncodeRequest::from_payload(event.payload.get())?;

    tracing::info!(
        bucket = %request.s3_bucket,
        key = %request.s3_key,
        "attempting to download object"
    );

    let stream = s3_client
        .get_object_stream(&request.s3_bucket, &request.s3_key)
        .await
        .inspect_err(|e| tracing::error!(error=?e, "failed to download object"))?;

    tracing::info!("download completed");

    let payload = encode::encode_object_stream(stream)
        .await
        .inspect_err(|e| tracing::error!(error=?e, "failed to read object body"))?;

    Ok(EncodeResponse::new(payload))
}
