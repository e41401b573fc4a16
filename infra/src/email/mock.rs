//! Mock Email Delivery Implementation
//!
//! In-memory delivery channel for development and tests. Codes are written
//! to the log instead of being sent anywhere, and the last delivery is kept
//! so integration tests can complete the login flow.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{info, warn};

use wf_core::DeliveryChannel;
use wf_shared::utils::email::mask_email;

/// Mock email delivery channel
#[derive(Debug, Default)]
pub struct MockEmailDelivery {
    sent_count: AtomicU64,
    simulate_failure: AtomicBool,
    last_sent: Mutex<Option<(String, String)>>,
}

impl MockEmailDelivery {
    /// Create a new mock delivery channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle failure simulation for degraded-mode testing
    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Number of codes delivered so far
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }

    /// Reset the delivery counter
    pub fn reset_counter(&self) {
        self.sent_count.store(0, Ordering::SeqCst);
    }

    /// The most recent `(email, code)` pair delivered, if any
    pub async fn last_sent(&self) -> Option<(String, String)> {
        self.last_sent.lock().await.clone()
    }
}

#[async_trait]
impl DeliveryChannel for MockEmailDelivery {
    async fn send_code(&self, email: &str, code: &str) -> Result<(), String> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                "Mock email delivery simulating failure for {}",
                mask_email(email)
            );
            return Err("simulated delivery failure".to_string());
        }

        info!("Mock email delivery: code {} for {}", code, email);

        self.sent_count.fetch_add(1, Ordering::SeqCst);
        *self.last_sent.lock().await = Some((email.to_string(), code.to_string()));

        Ok(())
    }

    fn channel_name(&self) -> &str {
        "MockEmail"
    }
}
