//! Request dispatch module
//!
//! Entry point for HTTP request processing. Every method is served
//! identically; the URL path is the only input that matters.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::ResponseBody;
use crate::logger;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<ResponseBody>, Infallible> {
    let method = req.method().clone();
    let version = req.version();
    let path = req.uri().path().to_string();

    let file_path = static_files::resolve_path(&state.root, &path);
    let response = static_files::serve_file(&file_path).await;

    if state.config.logging.access_log {
        logger::log_access(
            &peer_addr,
            &method,
            &path,
            version,
            response.status().as_u16(),
            body_bytes_sent(&response),
        );
    }

    Ok(response)
}

/// Body size for the access line: exact for in-memory bodies, the declared
/// Content-Length for streamed ones.
fn body_bytes_sent(response: &Response<ResponseBody>) -> u64 {
    use hyper::body::Body as _;

    response
        .body()
        .size_hint()
        .exact()
        .or_else(|| {
            response
                .headers()
                .get("Content-Length")?
                .to_str()
                .ok()?
                .parse()
                .ok()
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http;
    use tokio::fs::File;

    #[test]
    fn test_body_bytes_sent_for_404() {
        let resp = http::build_404_response();
        assert_eq!(body_bytes_sent(&resp), 13);
    }

    #[tokio::test]
    async fn test_body_bytes_sent_for_stream() {
        let path = std::env::temp_dir().join(format!(
            "audios-server-router-{}.ogg",
            std::process::id()
        ));
        std::fs::write(&path, b"0123456789").unwrap();

        let file = File::open(&path).await.unwrap();
        let resp = http::build_audio_response(file, 10);
        assert_eq!(body_bytes_sent(&resp), 10);

        std::fs::remove_file(&path).unwrap();
    }
}
