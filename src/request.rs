//! Inbound event, generation and response types

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, TimeZone};
use log::{debug, error};

pub const OBJECT_KEY_PREFIX: &str = "blog-output/";
pub const OBJECT_KEY_TIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// ===== Inbound =====

/// HTTP-trigger envelope; only the encoded body is read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventEnvelope
{   #[serde(default)]
    pub body: Option<String>
}

/// Decoded request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRequest
{   pub blog_topic: String
}

/// Extract the blog topic from a raw event
pub fn parse_topic(event: &serde_json::Value)
  -> Result<String, crate::error::Error>
{   let envelope: EventEnvelope
      = serde_json::from_value(event.clone()).map_err(|e| {
        error!("Event is not an envelope: {}", e);
        crate::error::Error::MissingTopic
      })?;

    let body = envelope.body.ok_or_else(|| {
      error!("Event has no body");
      crate::error::Error::MissingTopic
    })?;

    // Parsed as a value first so a repeated key keeps its last value
    let value: serde_json::Value
      = serde_json::from_str(&body).map_err(|e| {
        error!("Invalid JSON in the request body: {}", e);
        crate::error::Error::InvalidJson
      })?;

    let request: TopicRequest
      = serde_json::from_value(value).map_err(|e| {
        error!("Missing 'blog_topic' in the request body: {}", e);
        crate::error::Error::MissingTopic
      })?;

    debug!("Parsed blog topic: {}", request.blog_topic);
    Ok(request.blog_topic)
}

// ===== Generation =====

/// Instruction-formatted prompt for a topic
pub fn build_prompt(topic: &str) -> String
{   format!(
      " <s>[INST]Human: Write a 200 word blog on the topic {}.</s>\n    Assistant: [/INST]:\n",
      topic
    )
}

/// One call to the text-generation model
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest
{   pub prompt: String
  , pub model_id: String
  , pub params: crate::config::DecodingParams
}

impl GenerationRequest
{   pub fn for_topic(
      topic: &str
    , model_id: &str
    , params: crate::config::DecodingParams
    ) -> Self
    {   GenerationRequest
        {   prompt: build_prompt(topic)
          , model_id: model_id.to_string()
          , params
        }
    }
}

/// Generated text paired with the model that was asked for it.
/// Empty text means generation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation
{   pub text: String
  , pub model_id: String
}

impl Generation
{   pub fn failed(model_id: &str) -> Self
    {   Generation
        {   text: String::new()
          , model_id: model_id.to_string()
        }
    }

    pub fn is_empty(&self) -> bool
    {   self.text.is_empty()
    }
}

// ===== Storage =====

/// `blog-output/<time>.txt` for the given instant
pub fn object_key<Tz>(now: &DateTime<Tz>) -> String
where Tz: TimeZone
    , Tz::Offset: std::fmt::Display
{   format!(
      "{}{}.txt",
      OBJECT_KEY_PREFIX,
      now.format(OBJECT_KEY_TIME_FORMAT)
    )
}

/// Object body for a generation under a profile
pub fn stored_content(
  profile: crate::Profile
, generation: &Generation
) -> String
{   match profile
    {   crate::Profile::Basic => generation.text.clone()
      , crate::Profile::Adaptive => format!(
          "Model used: {}\n\n{}",
          generation.model_id, generation.text
        )
    }
}

// ===== Outbound =====

/// HTTP-trigger response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse
{   #[serde(rename = "statusCode")]
    pub status_code: u16
  , pub body: String
  , #[serde(default)]
    pub headers: HashMap<String, String>
}

/// Body of a 200 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessBody
{   pub message: String
  , pub execution_time: String
  , pub memory_allocated: String
  , #[serde(skip_serializing_if = "Option::is_none", default)]
    pub complexity_score: Option<f64>
  , pub generated: bool
}

/// Body of a 400 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody
{   pub error: String
}

impl ApiResponse
{   fn json(status_code: u16, body: String) -> Self
    {   let mut headers = HashMap::new();
        headers.insert(
          "Content-Type".to_string(),
          "application/json".to_string()
        );
        ApiResponse
        {   status_code
          , body
          , headers
        }
    }

    pub fn ok(body: &SuccessBody) -> Self
    {   let encoded = serde_json::to_string(body)
          .unwrap_or_else(|e| {
            error!("Failed to encode response body: {}", e);
            "{}".to_string()
          });
        Self::json(200, encoded)
    }

    pub fn bad_request(err: &crate::error::Error) -> Self
    {   let body = ErrorBody { error: err.to_string() };
        let encoded = serde_json::to_string(&body)
          .unwrap_or_else(|_| "{}".to_string());
        Self::json(400, encoded)
    }
}
