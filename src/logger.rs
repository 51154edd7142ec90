//! Process-wide log backend

use env_logger::{Builder, Env};

/// Install the env_logger backend. Call once from `main`.
/// `RUST_LOG` overrides the default `info` filter; timestamps are
/// left to CloudWatch.
pub fn init_logger()
{   let mut builder = Builder::from_env(
      Env::default().default_filter_or("info")
    );
    builder.format_timestamp(None);
    builder.format_target(true);
    // A second init (tests, repeated calls) keeps the first logger.
    let _ = builder.try_init();
}
