use std::time::Instant;
use chrono::Local;
use log::{debug, error, info, warn};

use crate::providers::{BlobStore, TextGenerator};
use crate::request::{ApiResponse, Generation, GenerationRequest, SuccessBody};

/// Per-invocation facts supplied by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext
{   pub request_id: String
  , pub memory_limit_mb: i32
}

impl InvocationContext
{   pub fn new(request_id: impl Into<String>, memory_limit_mb: i32) -> Self
    {   InvocationContext
        {   request_id: request_id.into()
          , memory_limit_mb
        }
    }
}

/// Blog generation handler, built once per process and reused
/// for every invocation
pub struct BlogHandler<G, S>
{   config: crate::config::HandlerConfig
  , generator: G
  , store: S
}

impl<G, S> BlogHandler<G, S>
where G: TextGenerator
    , S: BlobStore
{   pub fn new(
      config: crate::config::HandlerConfig
    , generator: G
    , store: S
    ) -> Self
    {   debug!("Creating BlogHandler for {:?}", config.profile);
        BlogHandler
        {   config
          , generator
          , store
        }
    }

    pub fn config(&self) -> &crate::config::HandlerConfig
    {   &self.config
    }

    /// Run one invocation: parse, generate, store, respond.
    /// Only a bad request short-circuits; everything after parsing
    /// ends in a 200.
    pub async fn handle(
      &self
    , event: &serde_json::Value
    , ctx: &InvocationContext
    ) -> ApiResponse
    {   let started = Instant::now();
        let rid = &ctx.request_id;

        let topic = match crate::request::parse_topic(event)
        {   Ok(topic) => topic
          , Err(e) => {
              error!("[{}] Rejecting request ({}): {}", rid, e.kind(), e);
              return ApiResponse::bad_request(&e);
            }
        };

        let (model_id, complexity_score) = match self.config.profile
        {   crate::Profile::Basic => (crate::EXPRESS_MODEL_ID, None)
          , crate::Profile::Adaptive => {
              let choice = crate::complexity::select_model(&topic);
              (choice.model_id, Some(choice.score))
            }
        };

        let generation = self.generate_blog(&topic, model_id, ctx).await;

        if generation.is_empty()
        {   match self.config.profile
            {   crate::Profile::Basic => {
                  info!("[{}] No blog generated", rid);
                }
              , crate::Profile::Adaptive => {
                  warn!(
                    "[{}] No blog generated. Model attempted: {}",
                    rid, generation.model_id
                  );
                }
            }
        } else
        {   let key = crate::request::object_key(&Local::now());
            self.save_blog(&key, &generation, ctx).await;
        }

        let execution_time = started.elapsed().as_secs_f64();
        info!("[{}] Execution time: {:.2} seconds", rid, execution_time);
        info!("[{}] Model used: {}", rid, generation.model_id);
        if let Some(score) = complexity_score
        {   info!("[{}] Complexity score: {}", rid, score);
        }
        info!("[{}] Memory allocated: {}MB", rid, ctx.memory_limit_mb);

        ApiResponse::ok(&SuccessBody
        {   message: self.message(&generation)
          , execution_time: format!("{:.2} seconds", execution_time)
          , memory_allocated: format!("{}MB", ctx.memory_limit_mb)
          , complexity_score
          , generated: !generation.is_empty()
        })
    }

    /// Ask the model for a blog. Any failure becomes an empty
    /// generation; it never reaches the caller as an error.
    pub async fn generate_blog(
      &self
    , topic: &str
    , model_id: &str
    , ctx: &InvocationContext
    ) -> Generation
    {   let request = GenerationRequest::for_topic(
          topic,
          model_id,
          self.config.decoding
        );

        match self.generator.generate(&request).await
        {   Ok(text) => Generation
            {   text
              , model_id: model_id.to_string()
            }
          , Err(e) => {
              error!(
                "[{}] Error in generating the blog ({}): {}",
                ctx.request_id, e.kind(), e
              );
              Generation::failed(model_id)
            }
        }
    }

    /// Write a generation to the configured bucket. Failures are
    /// logged and dropped.
    pub async fn save_blog(
      &self
    , key: &str
    , generation: &Generation
    , ctx: &InvocationContext
    )
    {   let content = crate::request::stored_content(
          self.config.profile,
          generation
        );

        if let Err(e) = self.store
          .put_text(&self.config.bucket, key, content)
          .await
        {   error!(
              "[{}] Error in saving the blog in s3 ({}): {}",
              ctx.request_id, e.kind(), e
            );
        }
    }

    fn message(&self, generation: &Generation) -> String
    {   match (self.config.profile, generation.is_empty())
        {   (crate::Profile::Basic, false) => {
              "Blog generated and saved in s3".to_string()
            }
          , (crate::Profile::Basic, true) => {
              "No blog generated".to_string()
            }
          , (crate::Profile::Adaptive, false) => format!(
              "Blog generated using {} and saved in s3.",
              generation.model_id
            )
          , (crate::Profile::Adaptive, true) => format!(
              "No blog generated. Model attempted: {}",
              generation.model_id
            )
        }
    }
}
