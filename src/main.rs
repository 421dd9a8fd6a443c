//! Command-line entry point for the fileserve HTTP server.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use fileserve_rs::{HttpServer, ServerConfig};

/// Minimal HTTP/1.1 server with echo, user-agent and file routes.
#[derive(Debug, Parser)]
#[command(name = "fileserve", version, about)]
struct Cli {
    /// Directory served by the /files routes
    #[arg(long, default_value = ".", env = "FILESERVE_DIRECTORY")]
    directory: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:4221", env = "FILESERVE_ADDR")]
    addr: SocketAddr,

    /// Size of the single read done per connection, in bytes (at least 1)
    #[arg(long, default_value = "8192", env = "FILESERVE_READ_BUFFER_SIZE")]
    read_buffer_size: NonZeroUsize,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            addr: cli.addr,
            directory: cli.directory,
            read_buffer_size: cli.read_buffer_size.get(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = HttpServer::new(Cli::parse().into());
    match server.start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server failed: {e}");
            ExitCode::FAILURE
        }
    }
}
