//! Delivery channel health tracking

use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared health flag for the code delivery channel
///
/// The flag starts operational and flips on observed delivery results:
/// a failed send marks the channel degraded, a later successful send
/// restores it. While degraded, code verification falls back to a
/// relaxed mode so users are not locked out by a provider outage.
#[derive(Debug, Clone)]
pub struct DeliveryHealth {
    operational: Arc<RwLock<bool>>,
}

impl Default for DeliveryHealth {
    fn default() -> Self {
        Self {
            operational: Arc::new(RwLock::new(true)),
        }
    }
}

impl DeliveryHealth {
    /// Create a new health flag in the operational state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the delivery channel is currently considered operational
    pub async fn is_operational(&self) -> bool {
        *self.operational.read().await
    }

    /// Record a successful delivery, restoring the channel if degraded
    pub async fn record_success(&self, channel: &str) {
        let mut operational = self.operational.write().await;
        if !*operational {
            tracing::info!(
                channel = channel,
                event = "delivery_recovered",
                "Delivery channel recovered, resuming strict verification"
            );
        }
        *operational = true;
    }

    /// Record a failed delivery, marking the channel degraded
    pub async fn record_failure(&self, channel: &str) {
        let mut operational = self.operational.write().await;
        if *operational {
            tracing::warn!(
                channel = channel,
                event = "delivery_degraded",
                "Delivery channel failed, switching to relaxed verification"
            );
        }
        *operational = false;
    }
}
