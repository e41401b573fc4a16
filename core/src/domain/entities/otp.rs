//! One-time password entry for email-based authentication.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the one-time password
pub const CODE_LENGTH: usize = 6;

/// Lifetime of a one-time password (10 minutes)
pub const CODE_TTL_SECONDS: i64 = 600;

/// A single live one-time password bound to an email identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Normalized email address this code was issued for
    pub email: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Creates a new entry with a random 6-digit code and the default lifetime
    ///
    /// # Arguments
    ///
    /// * `email` - The normalized email address to bind the code to
    pub fn new(email: String) -> Self {
        Self::with_ttl(email, CODE_TTL_SECONDS)
    }

    /// Creates a new entry with a custom lifetime in seconds
    ///
    /// A non-positive `ttl_seconds` produces an already-expired entry,
    /// which is useful in tests.
    pub fn with_ttl(email: String, ttl_seconds: i64) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();

        Self {
            email,
            code,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Generates a random 6-digit code
    ///
    /// Each digit is drawn independently and uniformly from 0-9, so leading
    /// zeros are possible and the result is always exactly 6 characters.
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the provided code matches this entry
    ///
    /// Plain string equality; format checks happen before the lookup.
    pub fn matches(&self, input_code: &str) -> bool {
        self.code == input_code
    }
}
