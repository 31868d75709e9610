//! Crew Client - HTTP client for the management API
//!
//! Provides network-based calls for the employee, department, and
//! activity collections.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::response::ApiResponse;
