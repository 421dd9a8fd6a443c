//! A minimal HTTP/1.1 server with a fixed set of routes.
//!
//! Each connection carries exactly one request: the server reads it with a
//! single bounded read, decodes it, picks a route, writes the response and
//! closes the connection.
//!
//! # Routes
//!
//! - `GET /` answers `200 OK` with no body
//! - `GET /echo/<text>` answers `<text>` as `text/plain`
//! - `GET /user-agent` answers the client's `User-Agent` as `text/plain`
//! - `GET /files/<name>` answers the file from the served directory, or `404`
//! - `POST /files/<name>` stores the request body as that file and answers `201`
//!
//! Everything else, and every failure while serving files, answers `404`.
//!
//! # Examples
//!
//! ## Decoding a request
//!
//! ```
//! use fileserve_rs::{parse_request, Method};
//!
//! let request = parse_request(b"GET /echo/hi HTTP/1.1\r\nFoo: a\r\nFoo: b\r\n\r\n").unwrap();
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.path, "/echo/hi");
//! // Repeated headers are concatenated
//! assert_eq!(request.header("Foo"), Some("ab"));
//! ```
//!
//! ## Dispatching without a socket
//!
//! ```
//! use fileserve_rs::{parse_request, Router, ServedDirectory, StatusCode};
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let router = Router::with_default_routes(ServedDirectory::new("."));
//! let request = parse_request(b"GET /echo/hello HTTP/1.1\r\n\r\n").unwrap();
//! let response = router.dispatch(request).await;
//! assert_eq!(response.status, StatusCode::Ok);
//! assert_eq!(
//!     response.to_bytes(),
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello"
//! );
//! # }
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use fileserve_rs::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), fileserve_rs::ServerError> {
//! let server = HttpServer::new(ServerConfig::with_directory("/tmp/files"));
//! server.start().await
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, Method, parse_request};
pub use server::{
    Error as ServerError, FileStore, HttpResponse, HttpServer, Router, ServedDirectory,
    ServerConfig, StatusCode, StoreError,
};
