//! HTTP response building module
//!
//! Builders for the two response shapes the server produces: a plain-text
//! 404 and a streamed 200 whose body is read from disk as it is sent.

use futures_util::TryStreamExt;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use hyper::Response;
use std::io;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Body type shared by fixed and streamed responses
pub type ResponseBody = BoxBody<Bytes, io::Error>;

/// Build a body from in-memory bytes
fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed()
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<ResponseBody> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(full("404 Not Found"))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(full("404 Not Found"))
        })
}

/// Build 200 response streaming the opened file as `audio/ogg`
///
/// The body is delivered incrementally; a read error after the head has
/// been sent terminates the connection with the stream in whatever partial
/// state the transport produced.
pub fn build_audio_response(file: File, content_length: u64) -> Response<ResponseBody> {
    let stream = ReaderStream::new(file);
    let body = StreamBody::new(stream.map_ok(Frame::data)).boxed();

    Response::builder()
        .status(200)
        .header("Content-Type", "audio/ogg")
        .header("Content-Length", content_length)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(full(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_file(name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "audios-server-response-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_404_shape() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"404 Not Found");
    }

    #[tokio::test]
    async fn test_audio_response_streams_file_bytes() {
        let content = b"\x4f\x67\x67\x53\x00\x02\x00\x00\x00\x00";
        let path = fixture_file("stream", content);

        let file = File::open(&path).await.unwrap();
        let resp = build_audio_response(file, content.len() as u64);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "audio/ogg");
        assert_eq!(resp.headers()["Content-Length"], "10");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], content);

        std::fs::remove_file(&path).unwrap();
    }
}
