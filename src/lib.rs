pub mod error;
pub mod config;
pub mod logger;
pub mod providers;
pub mod request;
pub mod complexity;
pub mod handler;
pub mod lambda;
use serde::{Deserialize, Serialize};

/*

bedrock-blog: serverless blog writer. An HTTP-triggered Lambda hands
us a topic, we ask a Bedrock text model for a short blog post and
drop the result in S3.

bedrock-blog/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Profiles, model ids, re-exports
│   ├── error.rs        # Error kinds
│   ├── config.rs       # Handler + SDK client configuration
│   ├── logger.rs       # env_logger setup
│   ├── request.rs      # Event, generation and response types
│   ├── complexity.rs   # Topic complexity score, model selection
│   ├── handler.rs      # parse -> generate -> store -> respond
│   ├── lambda.rs       # Runtime bootstrap
│   ├── providers/      # Bedrock generator, S3 store
│   └── bin/            # blog-basic, blog-adaptive
└── tests/

*/

/// Larger Titan model, used for complex topics and by the basic profile
pub const EXPRESS_MODEL_ID: &str = "amazon.titan-text-express-v1";
/// Smaller Titan model for simple topics
pub const LITE_MODEL_ID: &str = "amazon.titan-text-lite-v1";

/// Which of the two function variants a process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Profile
{   /// Always the express model; stores the bare text
    Basic
  , /// Picks a model by topic complexity; stores text with a
    /// `Model used:` header and reports the score
    Adaptive
}

pub use config::{DecodingParams, HandlerConfig};
pub use error::Error;
pub use handler::{BlogHandler, InvocationContext};
pub use providers::{BlobStore, TextGenerator};
pub use request::ApiResponse;
