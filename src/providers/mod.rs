//! Downstream services: the text-generation model and the object store

pub mod bedrock;
pub mod s3;

use std::future::Future;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};

// Re-export for convenience
pub use bedrock::BedrockGenerator;
pub use s3::S3Store;

/// Hosted text-generation model
pub trait TextGenerator: Send + Sync
{   /// Generated text for one request
    fn generate(
      &self
    , request: &crate::request::GenerationRequest
    ) -> impl Future<Output = Result<String, crate::error::Error>> + Send;
}

/// Object store accepting text payloads
pub trait BlobStore: Send + Sync
{   fn put_text(
      &self
    , bucket: &str
    , key: &str
    , content: String
    ) -> impl Future<Output = Result<(), crate::error::Error>> + Send;
}

/// Map an SDK failure onto the crate's error kinds.
/// Retries already happened inside the SDK client by the time this runs.
pub fn classify_sdk_error<E, R>(err: &SdkError<E, R>)
  -> crate::error::Error
where E: std::error::Error + 'static
    , R: std::fmt::Debug
{   let detail = DisplayErrorContext(err).to_string();
    match err
    {   SdkError::TimeoutError(_) => crate::error::Error::Timeout
      , SdkError::DispatchFailure(failure) if failure.is_timeout() => {
          crate::error::Error::Timeout
        }
      , SdkError::ServiceError(_) => {
          crate::error::Error::ApiError(detail)
        }
      , SdkError::ResponseError(_) => {
          crate::error::Error::ParseError(detail)
        }
      , _ => crate::error::Error::HttpError(detail)
    }
}
