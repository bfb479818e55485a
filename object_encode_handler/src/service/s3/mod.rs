mod get_object_stream;
use anyhow::Result;
use aws_sdk_s3 as s3;
use aws_sdk_s3::primitives::ByteStream;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Opens a read stream over the object at the given bucket and key.
    #[tracing::instrument(skip(self))]
    pub async fn get_object_stream(&self, bucket: &str, key: &str) -> Result<ByteStream> {
        get_object_stream::get_object_stream(&self.inner, bucket, key).await
    }
}
