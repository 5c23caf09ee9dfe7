//! Core utilities for the FPL last-man-standing helper
//!
//! - `files`: small file system helpers shared by history and snapshot storage
//! - `http`: HTTP client construction

pub mod files;
pub mod http;

// Re-export commonly used items for convenience
pub use files::{append_string, create_file, try_read_to_string};
pub use http::build_client;
