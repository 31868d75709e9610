//! Shared types for the Crew workspace
//!
//! Wire-level data models, the standard API response envelope, and small
//! utility helpers used by both the gateway client and the application core.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::*;
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
