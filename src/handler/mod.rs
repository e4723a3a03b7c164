//! Request handler module
//!
//! One responsibility: produce exactly one response per incoming request by
//! mapping its URL path onto the base directory.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
