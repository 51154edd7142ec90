//! Configuration for the blog handler and its AWS clients

use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::debug;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_BUCKET: &str = "awsbedrock1nete";
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const ENV_REGION: &str = "BLOG_REGION";
pub const ENV_BUCKET: &str = "BLOG_BUCKET";
pub const ENV_READ_TIMEOUT_SECS: &str = "BLOG_READ_TIMEOUT_SECS";
pub const ENV_MAX_ATTEMPTS: &str = "BLOG_MAX_ATTEMPTS";

/// Decoding parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodingParams
{   /// Cap on generated tokens
    pub max_gen_len: u32
  , /// Sampling temperature
    pub temperature: f32
  , /// Nucleus-sampling threshold
    pub top_p: f32
}

impl DecodingParams
{   pub fn for_profile(profile: crate::Profile) -> Self
    {   DecodingParams
        {   max_gen_len: 512
          , temperature: 0.5
          , top_p: match profile
            {   crate::Profile::Basic => 1.0
              , crate::Profile::Adaptive => 0.9
            }
        }
    }
}

/// Handler configuration, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerConfig
{   /// Which function variant this process runs
    pub profile: crate::Profile
  , /// AWS region for the model and store clients
    pub region: String
  , /// Bucket receiving generated blogs
    pub bucket: String
  , /// Read timeout for SDK calls in seconds
    pub read_timeout_secs: u64
  , /// Max attempts, including the first, for SDK calls
    pub max_attempts: u32
  , /// Decoding parameters
    pub decoding: DecodingParams
}

impl HandlerConfig
{   /// Defaults for a profile
    pub fn for_profile(profile: crate::Profile) -> Self
    {   HandlerConfig
        {   profile
          , region: DEFAULT_REGION.to_string()
          , bucket: DEFAULT_BUCKET.to_string()
          , read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS
          , max_attempts: DEFAULT_MAX_ATTEMPTS
          , decoding: DecodingParams::for_profile(profile)
        }
    }

    /// Defaults for a profile with overrides from the process environment
    pub fn from_env(profile: crate::Profile)
      -> Result<Self, crate::error::Error>
    {   Self::from_lookup(profile, |key| std::env::var(key).ok())
    }

    /// Defaults for a profile with overrides from `lookup`
    pub fn from_lookup<F>(
      profile: crate::Profile
    , lookup: F
    ) -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let mut config = Self::for_profile(profile);

        if let Some(region) = lookup(ENV_REGION)
        {   debug!("Region override: {}", region);
            config.region = region;
        }
        if let Some(bucket) = lookup(ENV_BUCKET)
        {   debug!("Bucket override: {}", bucket);
            config.bucket = bucket;
        }
        if let Some(raw) = lookup(ENV_READ_TIMEOUT_SECS)
        {   config.read_timeout_secs = raw.trim().parse()
              .map_err(|_| format!(
                "{} must be a whole number of seconds, got {:?}",
                ENV_READ_TIMEOUT_SECS, raw
              ))?;
        }
        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS)
        {   config.max_attempts = raw.trim().parse()
              .map_err(|_| format!(
                "{} must be a whole number, got {:?}",
                ENV_MAX_ATTEMPTS, raw
              ))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the SDK clients cannot work with
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.region.trim().is_empty()
        {   return Err("region must not be empty".into());
        }
        if self.bucket.trim().is_empty()
        {   return Err("bucket must not be empty".into());
        }
        if self.read_timeout_secs == 0
        {   return Err("read timeout must be positive".into());
        }
        if self.max_attempts == 0
        {   return Err("max attempts must be at least 1".into());
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration
    {   Duration::from_secs(self.read_timeout_secs)
    }

    /// Retry policy handed to the SDK; no retry logic lives above it
    pub fn retry_config(&self) -> RetryConfig
    {   RetryConfig::standard().with_max_attempts(self.max_attempts)
    }

    pub fn timeout_config(&self) -> TimeoutConfig
    {   TimeoutConfig::builder()
          .read_timeout(self.read_timeout())
          .build()
    }

    /// Shared SDK configuration for the model and store clients
    pub async fn load_sdk_config(&self) -> SdkConfig
    {   debug!(
          "Loading SDK config: region={} read_timeout={}s attempts={}",
          self.region, self.read_timeout_secs, self.max_attempts
        );
        aws_config::defaults(BehaviorVersion::latest())
          .region(Region::new(self.region.clone()))
          .retry_config(self.retry_config())
          .timeout_config(self.timeout_config())
          .load()
          .await
    }
}
