use anyhow::{Context, Result};
use aws_sdk_s3 as s3;
use aws_sdk_s3::primitives::ByteStream;
use lambda_runtime::tracing;

#[tracing::instrument(skip(client))]
pub async fn get_object_stream(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<ByteStream> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not get item {key} from bucket {bucket}"))?;

    Ok(resp.body)
}
