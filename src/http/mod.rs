//! HTTP protocol layer module
//!
//! Response building decoupled from request dispatch.

pub mod response;

// Re-export commonly used items
pub use response::{build_404_response, build_audio_response, ResponseBody};
