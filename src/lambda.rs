//! Lambda runtime bootstrap shared by both function binaries

use lambda_runtime::{service_fn, LambdaEvent};
use log::info;

use crate::handler::{BlogHandler, InvocationContext};
use crate::providers::{BedrockGenerator, S3Store};
use crate::request::ApiResponse;

/// Build the handler for `profile` and serve invocations until the
/// runtime shuts the process down
pub async fn run(profile: crate::Profile)
  -> Result<(), lambda_runtime::Error>
{   crate::logger::init_logger();

    let config = crate::config::HandlerConfig::from_env(profile)?;
    let sdk_config = config.load_sdk_config().await;
    let handler = BlogHandler::new(
      config,
      BedrockGenerator::from_conf(&sdk_config),
      S3Store::from_conf(&sdk_config)
    );
    let handler = &handler;
    info!(
      "Starting {:?} blog handler (region {}, bucket {})",
      handler.config().profile,
      handler.config().region,
      handler.config().bucket
    );

    lambda_runtime::run(service_fn(
      move |event: LambdaEvent<serde_json::Value>| async move {
        let (payload, context) = event.into_parts();
        let ctx = InvocationContext::new(
          context.request_id,
          context.env_config.memory
        );
        Ok::<ApiResponse, lambda_runtime::Error>(
          handler.handle(&payload, &ctx).await
        )
      }
    ))
    .await
}
