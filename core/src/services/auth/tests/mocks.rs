//! Mock implementations for testing the authentication service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::otp::DeliveryChannel;

// Mock delivery channel capturing sent codes
pub struct MockDelivery {
    pub sent_codes: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockDelivery {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl DeliveryChannel for MockDelivery {
    async fn send_code(&self, email: &str, code: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("delivery provider error".to_string());
        }
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "mock"
    }
}
