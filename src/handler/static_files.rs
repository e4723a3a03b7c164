//! Static file serving module
//!
//! Path resolution against the base directory, the existence/type check,
//! and the hand-off to the streamed response builder.

use crate::http::{self, ResponseBody};
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Resolve a request path against the base directory.
///
/// The leading slash is stripped and the remainder joined as given: no
/// normalization, no `..` rejection, no percent-decoding.
pub fn resolve_path(root: &Path, request_path: &str) -> PathBuf {
    root.join(request_path.trim_start_matches('/'))
}

/// Serve the file at the resolved path.
///
/// Missing entries, directories, and any filesystem error encountered
/// before the response head is committed all collapse into the same 404
/// shape. A regular file streams back as `audio/ogg`.
pub async fn serve_file(path: &Path) -> Response<ResponseBody> {
    let metadata = match fs::metadata(path).await {
        Ok(m) => m,
        Err(_) => return http::build_404_response(),
    };

    if !metadata.is_file() {
        return http::build_404_response();
    }

    match fs::File::open(path).await {
        Ok(file) => http::build_audio_response(file, metadata.len()),
        Err(_) => http::build_404_response(),
    }
}
