//! Mock Generative Backend Implementation
//!
//! Canned-response backend for development and tests. Completions are served
//! from memory, and the last prompt is kept so tests can assert on what the
//! planner actually asked for.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use wf_core::GenerativeBackend;

/// Mock generative backend
#[derive(Debug)]
pub struct MockGenerativeBackend {
    response: Result<String, String>,
    call_count: AtomicU64,
    last_prompt: Mutex<Option<String>>,
}

impl MockGenerativeBackend {
    /// Create a backend that answers every prompt with the given text
    pub fn returning(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            call_count: AtomicU64::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Create a backend that fails every completion
    pub fn failing() -> Self {
        Self {
            response: Err("simulated backend failure".to_string()),
            call_count: AtomicU64::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of completions requested so far
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The most recent prompt submitted, if any
    pub async fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().await.clone()
    }
}

#[async_trait]
impl GenerativeBackend for MockGenerativeBackend {
    async fn complete(&self, prompt: &str) -> Result<String, String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().await = Some(prompt.to_string());
        self.response.clone()
    }

    fn backend_name(&self) -> &str {
        "MockBackend"
    }
}
