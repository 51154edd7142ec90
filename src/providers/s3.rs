use log::{debug, error, info};
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// S3-backed blob store
#[derive(Debug, Clone)]
pub struct S3Store
{   client: Client
}

impl S3Store
{   pub fn new(client: Client) -> Self
    {   debug!("Creating S3Store");
        S3Store { client }
    }

    pub fn from_conf(conf: &aws_config::SdkConfig) -> Self
    {   Self::new(Client::new(conf))
    }
}

impl super::BlobStore for S3Store
{   async fn put_text(
      &self
    , bucket: &str
    , key: &str
    , content: String
    ) -> Result<(), crate::error::Error>
    {   debug!("put_object {}/{} ({} bytes)", bucket, key, content.len());

        self.client
          .put_object()
          .bucket(bucket)
          .key(key)
          .content_type(TEXT_CONTENT_TYPE)
          .body(ByteStream::from(content.into_bytes()))
          .send()
          .await
          .map_err(|e| {
            let err = super::classify_sdk_error(&e);
            error!("put_object failed ({}): {}", err.kind(), err);
            err
          })?;

        info!("Blog saved in s3 bucket {} with key {}", bucket, key);
        Ok(())
    }
}
