use std::fmt;

/// Error type for blog generation operations
/// Implements Clone so tests can compare failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Request body has no string `blog_topic`
    MissingTopic
  , /// Request body is not valid JSON
    InvalidJson
  , /// Model or store call timed out
    Timeout
  , /// Transport-level failure reaching the service
    HttpError(String)
  , /// Service answered with an error
    ApiError(String)
  , /// Failed to parse the model response
    ParseError(String)
  , /// Model response had no generated text
    MissingGeneration
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl Error
{   /// Short label used in log lines
    pub fn kind(&self) -> &'static str
    {   match self
        {   Error::MissingTopic => "missing_topic"
          , Error::InvalidJson => "invalid_json"
          , Error::Timeout => "timeout"
          , Error::HttpError(_) => "transport"
          , Error::ApiError(_) => "service"
          , Error::ParseError(_) => "malformed_response"
          , Error::MissingGeneration => "missing_generation"
          , Error::InvalidConfiguration(_) => "configuration"
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingTopic => {
              write!(f, "Missing 'blog_topic' in the request body")
            }
          , Error::InvalidJson => {
              write!(f, "Invalid JSON in the request body")
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::MissingGeneration => {
              write!(f,
                "Model response contained no generated text"
              )
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::InvalidConfiguration(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::InvalidConfiguration(s.to_string())
    }
}
