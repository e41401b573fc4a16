pub mod auth;
pub mod cors;

pub use auth::{AuthContext, OptionalAuth};
pub use cors::create_cors;
