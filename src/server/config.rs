//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 4221;

/// Default size of the single read performed per connection.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 8192;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Root of the directory served by the `/files` routes.
    pub directory: PathBuf,
    /// The read buffer size. Requests longer than this are truncated.
    pub read_buffer_size: usize,
}

impl ServerConfig {
    /// Default configuration serving the given directory.
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            directory: PathBuf::from("."),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}
