//! In-memory storage for issued one-time codes

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::otp::OtpEntry;

/// In-memory store of pending one-time codes, keyed by email address
///
/// A single entry is kept per address: issuing a new code replaces any
/// previous one, so only the most recently requested code can verify.
/// The store is process-local and cleared on restart, matching the
/// short lifetime of the codes themselves.
#[derive(Debug, Clone, Default)]
pub struct OtpStore {
    entries: Arc<RwLock<HashMap<String, OtpEntry>>>,
}

impl OtpStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous code for the same address
    pub async fn insert(&self, entry: OtpEntry) {
        let mut entries = self.entries.write().await;
        entries.insert(entry.email.clone(), entry);
    }

    /// Look up the pending entry for an address
    pub async fn get(&self, email: &str) -> Option<OtpEntry> {
        let entries = self.entries.read().await;
        entries.get(email).cloned()
    }

    /// Remove and return the pending entry for an address
    pub async fn remove(&self, email: &str) -> Option<OtpEntry> {
        let mut entries = self.entries.write().await;
        entries.remove(email)
    }

    /// Whether a pending entry exists for an address
    pub async fn contains(&self, email: &str) -> bool {
        let entries = self.entries.read().await;
        entries.contains_key(email)
    }

    /// Number of pending entries
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
