#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use log::{Level, LevelFilter, Log, Metadata, Record};
use bedrock_blog::error::Error;
use bedrock_blog::request::GenerationRequest;
use bedrock_blog::{BlobStore, TextGenerator};

/// Generator that answers every request with the same result
/// and records what it was asked
#[derive(Clone)]
pub struct StubGenerator
{   pub reply: Result<String, Error>
  , pub calls: Arc<Mutex<Vec<GenerationRequest>>>
}

impl StubGenerator
{   pub fn replying(text: &str) -> Self
    {   StubGenerator
        {   reply: Ok(text.to_string())
          , calls: Arc::new(Mutex::new(vec![]))
        }
    }

    pub fn failing(err: Error) -> Self
    {   StubGenerator
        {   reply: Err(err)
          , calls: Arc::new(Mutex::new(vec![]))
        }
    }

    pub fn calls(&self) -> Vec<GenerationRequest>
    {   self.calls.lock().unwrap().clone()
    }
}

impl TextGenerator for StubGenerator
{   async fn generate(
      &self
    , request: &GenerationRequest
    ) -> Result<String, Error>
    {   self.calls.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

/// One recorded put: (bucket, key, content)
pub type Put = (String, String, String);

#[derive(Clone)]
pub struct StubStore
{   pub fail_with: Option<Error>
  , pub puts: Arc<Mutex<Vec<Put>>>
}

impl StubStore
{   pub fn working() -> Self
    {   StubStore
        {   fail_with: None
          , puts: Arc::new(Mutex::new(vec![]))
        }
    }

    pub fn failing(err: Error) -> Self
    {   StubStore
        {   fail_with: Some(err)
          , puts: Arc::new(Mutex::new(vec![]))
        }
    }

    pub fn puts(&self) -> Vec<Put>
    {   self.puts.lock().unwrap().clone()
    }
}

impl BlobStore for StubStore
{   async fn put_text(
      &self
    , bucket: &str
    , key: &str
    , content: String
    ) -> Result<(), Error>
    {   self.puts.lock().unwrap().push((
          bucket.to_string(),
          key.to_string(),
          content
        ));
        match &self.fail_with
        {   Some(err) => Err(err.clone())
          , None => Ok(())
        }
    }
}

/// HTTP-trigger event wrapping `body`
pub fn event_with_body(body: &str) -> serde_json::Value
{   serde_json::json!({ "body": body })
}

pub fn topic_event(topic: &str) -> serde_json::Value
{   let body = serde_json::json!({ "blog_topic": topic }).to_string();
    event_with_body(&body)
}

// ===== Log capture =====

/// Records every log line of the test binary as (level, message)
struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();
static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

impl Log for CaptureLogger
{   fn enabled(&self, _metadata: &Metadata) -> bool
    {   true
    }

    fn log(&self, record: &Record)
    {   RECORDS.lock()
          .unwrap_or_else(|e| e.into_inner())
          .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Install the capturing logger; safe to call from every test
pub fn capture_logs()
{   INSTALL.call_once(|| {
      let _ = log::set_logger(&LOGGER);
      log::set_max_level(LevelFilter::Trace);
    });
}

/// Whether a record at `level` containing `needle` was logged.
/// Tests run in parallel, so needles should include a request id.
pub fn logged(level: Level, needle: &str) -> bool
{   RECORDS.lock()
      .unwrap_or_else(|e| e.into_inner())
      .iter()
      .any(|(l, msg)| *l == level && msg.contains(needle))
}
