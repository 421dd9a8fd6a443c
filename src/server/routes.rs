//! The fixed set of route handlers.

use std::sync::Arc;

use log::debug;

use crate::parser::HttpRequest;
use crate::server::{Error, FileStore, HttpResponse, StatusCode};

const ECHO_MARKER: &str = "echo/";
const FILES_MARKER: &str = "files/";

/// Everything in `path` after the first occurrence of `marker`.
pub(crate) fn tail_after<'a>(path: &'a str, marker: &str) -> Option<&'a str> {
    path.find(marker).map(|index| &path[index + marker.len()..])
}

/// The file name addressed by a `/files/<name>` path.
pub(crate) fn file_name(path: &str) -> Result<&str, Error> {
    tail_after(path, FILES_MARKER).ok_or_else(|| Error::NotFound(path.to_string()))
}

fn text_plain(body: impl Into<String>) -> HttpResponse {
    HttpResponse::new(StatusCode::Ok)
        .with_content_type("text/plain")
        .with_body_string(body)
}

/// `/`: empty 200.
pub async fn root<S>(_request: HttpRequest, _store: Arc<S>) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::new(StatusCode::Ok))
}

/// `/echo/<text>`: the path after `echo/` as a plain text body.
pub async fn echo<S>(request: HttpRequest, _store: Arc<S>) -> Result<HttpResponse, Error> {
    let content = tail_after(&request.path, ECHO_MARKER).unwrap_or_default();
    Ok(text_plain(content))
}

/// `/user-agent`: the client's `User-Agent` as a plain text body, empty when
/// the request has none.
pub async fn user_agent<S>(request: HttpRequest, _store: Arc<S>) -> Result<HttpResponse, Error> {
    let agent = request.user_agent().unwrap_or_else(|| {
        debug!("No User-Agent in request for {path}", path = request.path);
        String::new()
    });
    Ok(text_plain(agent))
}

/// `GET /files/<name>`: the file contents as an octet stream.
pub async fn read_file<S: FileStore>(request: HttpRequest, store: Arc<S>) -> Result<HttpResponse, Error> {
    let name = file_name(&request.path)?;
    let contents = store.read(name).await?;
    Ok(HttpResponse::new(StatusCode::Ok)
        .with_content_type("application/octet-stream")
        .with_body_bytes(contents))
}

/// `POST /files/<name>`: store the request body under `name`, replacing any
/// previous contents.
pub async fn write_file<S: FileStore>(request: HttpRequest, store: Arc<S>) -> Result<HttpResponse, Error> {
    let name = file_name(&request.path)?;
    store.write(name, &request.body).await?;
    debug!("Stored {len} bytes as {name}", len = request.body.len());
    Ok(HttpResponse::new(StatusCode::Created))
}
