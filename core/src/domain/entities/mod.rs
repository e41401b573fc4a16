//! Domain entities representing core business objects.

pub mod otp;
pub mod token;
pub mod trip;
pub mod user;

// Re-export commonly used types
pub use otp::{OtpEntry, CODE_LENGTH, CODE_TTL_SECONDS};
pub use token::{Claims, SESSION_TOKEN_EXPIRY_MINUTES};
pub use trip::{Activity, DayPlan, Itinerary, ItineraryMeta, TimeOfDay, TripRequest};
pub use user::UserRecord;
