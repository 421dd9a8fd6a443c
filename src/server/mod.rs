//! HTTP server implementation for fileserve-rs.
//!
//! This module holds the route dispatcher, the response builder, the served
//! directory and the connection service that ties them to a TCP listener.

mod response;
mod config;
mod error;
mod store;
mod handler;
mod routes;
mod router;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::{ServerConfig, DEFAULT_PORT, DEFAULT_READ_BUFFER_SIZE};
pub use error::Error;
pub use store::{FileStore, ServedDirectory, StoreError};
pub use handler::{HandlerFn, HandlerFuture, Route, RouteMatch};
pub use router::Router;
pub use http_server::HttpServer;
