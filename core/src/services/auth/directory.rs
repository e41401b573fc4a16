//! In-memory directory of known users

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::user::UserRecord;

/// In-memory user directory keyed by normalized email address
///
/// There is no registration step: a record is created the first time an
/// address completes verification. The directory is process-local and
/// cleared on restart.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the record for an address, creating it on first sight
    pub async fn get_or_create(&self, email: &str) -> UserRecord {
        let mut users = self.users.write().await;
        users
            .entry(email.to_string())
            .or_insert_with(|| UserRecord::new(email.to_string()))
            .clone()
    }

    /// Look up an existing record without creating one
    pub async fn find(&self, email: &str) -> Option<UserRecord> {
        let users = self.users.read().await;
        users.get(email).cloned()
    }

    /// Number of known users
    pub async fn len(&self) -> usize {
        let users = self.users.read().await;
        users.len()
    }

    /// Whether the directory holds no records
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
