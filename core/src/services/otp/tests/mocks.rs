//! Mock implementations for testing the OTP service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::services::otp::traits::{DeliveryChannel, DiagnosticSink};

// Mock delivery channel for testing
pub struct MockDeliveryChannel {
    pub sent_codes: Arc<Mutex<HashMap<String, String>>>,
    should_fail: AtomicBool,
}

impl MockDeliveryChannel {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            should_fail: AtomicBool::new(should_fail),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl DeliveryChannel for MockDeliveryChannel {
    async fn send_code(&self, email: &str, code: &str) -> Result<(), String> {
        if self.should_fail.load(Ordering::SeqCst) {
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

// Diagnostic sink recording revealed codes for assertions
#[derive(Default)]
pub struct RecordingDiagnostics {
    pub revealed: Mutex<Vec<(String, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_revealed_code(&self) -> Option<String> {
        self.revealed
            .lock()
            .unwrap()
            .last()
            .map(|(_, code)| code.clone())
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn reveal_code(&self, email: &str, code: &str) {
        self.revealed
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
    }
}
