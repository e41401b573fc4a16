//! User record created on first successful login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A known user, keyed by email address
///
/// Records exist only for identities that have completed OTP verification
/// at least once; there is no separate registration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalized email address
    pub email: String,

    /// Timestamp of the first successful verification
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a new user record for a freshly verified email address
    pub fn new(email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            created_at: Utc::now(),
        }
    }
}
