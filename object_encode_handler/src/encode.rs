use anyhow::Context;
use aws_sdk_s3::primitives::ByteStream;
use base64::{engine::general_purpose, Engine as _};

/// Drains the object stream into memory and produces its base64 encoding.
///
/// The stream must be positioned at the start of the object, which a fresh
/// GetObject body always is. An empty object encodes to an empty string.
pub async fn encode_object_stream(mut stream: ByteStream) -> anyhow::Result<String> {
    let mut bytes: Vec<u8> = Vec::new();

    while let Some(chunk) = stream
        .try_next()
        .await
        .context("could not read object stream")?
    {
        bytes.extend_from_slice(&chunk);
    }

    Ok(general_purpose::STANDARD.encode(bytes))
}
