//! HTTP protocol layer module
//!
//! Protocol-level checks and plain responses, decoupled from the JSON endpoints.

pub mod response;

// Re-export commonly used items
pub use response::{build_health_response, check_body_size};
