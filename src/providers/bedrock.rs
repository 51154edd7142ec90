use serde::{Deserialize, Serialize};
use log::{debug, trace, error, info};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;

const TITAN_MODEL_PREFIX: &str = "amazon.titan";
const JSON_CONTENT_TYPE: &str = "application/json";

// ===== Payload Types =====

/// Prompt-style request body (`prompt` / `max_gen_len`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequestBody
{   pub prompt: String
  , pub max_gen_len: u32
  , pub temperature: f32
  , pub top_p: f32
}

/// Titan text request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanRequestBody
{   pub input_text: String
  , pub text_generation_config: TitanGenerationConfig
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanGenerationConfig
{   pub max_token_count: u32
  , pub temperature: f32
  , pub top_p: f32
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResult
{   pub output_text: String
  , #[serde(default)]
    pub completion_reason: Option<String>
}

/// Either response family; unknown fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponseBody
{   #[serde(default)]
    pub generation: Option<String>
  , #[serde(default)]
    pub results: Vec<TitanResult>
}

/// Request body layout a model expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat
{   Prompt
  , Titan
}

impl PayloadFormat
{   pub fn for_model(model_id: &str) -> Self
    {   if model_id.starts_with(TITAN_MODEL_PREFIX)
        {   PayloadFormat::Titan
        } else
        {   PayloadFormat::Prompt
        }
    }
}

/// JSON body for a generation request
pub fn encode_request(
  request: &crate::request::GenerationRequest
) -> Result<Vec<u8>, crate::error::Error>
{   let params = request.params;
    let encoded = match PayloadFormat::for_model(&request.model_id)
    {   PayloadFormat::Prompt => serde_json::to_vec(&PromptRequestBody
        {   prompt: request.prompt.clone()
          , max_gen_len: params.max_gen_len
          , temperature: params.temperature
          , top_p: params.top_p
        })
      , PayloadFormat::Titan => serde_json::to_vec(&TitanRequestBody
        {   input_text: request.prompt.clone()
          , text_generation_config: TitanGenerationConfig
            {   max_token_count: params.max_gen_len
              , temperature: params.temperature
              , top_p: params.top_p
            }
        })
    };
    encoded.map_err(|e| {
      error!("Failed to encode model request: {}", e);
      crate::error::Error::ParseError(e.to_string())
    })
}

/// Generated text from a model response body
pub fn decode_response(bytes: &[u8])
  -> Result<String, crate::error::Error>
{   let body: ModelResponseBody
      = serde_json::from_slice(bytes).map_err(|e| {
        error!("Parse error: {}", e);
        crate::error::Error::ParseError(e.to_string())
      })?;

    if let Some(generation) = body.generation
    {   return Ok(generation);
    }

    body.results.into_iter().next()
      .map(|r| {
        trace!("Completion reason: {:?}", r.completion_reason);
        r.output_text
      })
      .ok_or_else(|| {
        error!("No generated text in response");
        crate::error::Error::MissingGeneration
      })
}

// ===== Client =====

/// Bedrock runtime generator.
/// Timeout and retry behaviour come from the client's SDK config.
#[derive(Debug, Clone)]
pub struct BedrockGenerator
{   client: Client
}

impl BedrockGenerator
{   pub fn new(client: Client) -> Self
    {   debug!("Creating BedrockGenerator");
        BedrockGenerator { client }
    }

    pub fn from_conf(conf: &aws_config::SdkConfig) -> Self
    {   Self::new(Client::new(conf))
    }
}

impl super::TextGenerator for BedrockGenerator
{   async fn generate(
      &self
    , request: &crate::request::GenerationRequest
    ) -> Result<String, crate::error::Error>
    {   debug!("Invoking model: {}", request.model_id);
        let body = encode_request(request)?;

        let output = self.client
          .invoke_model()
          .model_id(&request.model_id)
          .content_type(JSON_CONTENT_TYPE)
          .accept(JSON_CONTENT_TYPE)
          .body(Blob::new(body))
          .send()
          .await
          .map_err(|e| {
            let err = super::classify_sdk_error(&e);
            error!("invoke_model failed ({}): {}", err.kind(), err);
            err
          })?;

        let bytes: &[u8] = output.body().as_ref();
        trace!("Model response: {}", String::from_utf8_lossy(bytes));

        let text = decode_response(bytes)?;
        info!("Blog generated using model: {}", request.model_id);
        Ok(text)
    }
}
