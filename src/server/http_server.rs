//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio::signal;
use log::{debug, info, warn, error};

use crate::parser::parse_request;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::router::Router;
use crate::server::store::{FileStore, ServedDirectory};

/// An HTTP server.
///
/// Owns its configuration and route table for its whole run. Every accepted
/// connection is served by its own task: one read, one response, then close.
pub struct HttpServer<S = ServedDirectory> {
    /// The server configuration.
    pub config: ServerConfig,
    /// The router shared by all connection tasks.
    pub router: Arc<Router<S>>,
}

impl HttpServer<ServedDirectory> {
    /// Create a new HTTP server serving files from `config.directory`.
    pub fn new(config: ServerConfig) -> Self {
        let store = ServedDirectory::new(config.directory.clone());
        Self::with_store(config, store)
    }
}

impl<S: FileStore> HttpServer<S> {
    /// Create a new HTTP server with the standard routes over `store`.
    pub fn with_store(config: ServerConfig, store: S) -> Self {
        Self {
            config,
            router: Arc::new(Router::with_default_routes(store)),
        }
    }

    /// Log the registered endpoints.
    fn display_server_info(&self) {
        info!("Serving files from {dir}", dir = self.config.directory.display());
        info!("Registered endpoints:");
        for route in self.router.routes() {
            info!("  {route}");
        }
    }

    /// Bind the TCP listener.
    pub async fn bind(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        })
    }

    /// Spawn the task serving a new connection.
    fn handle_new_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        router: Arc<Router<S>>,
        read_buffer_size: usize,
        tasks: &mut JoinSet<()>,
    ) {
        debug!("Accepted connection from {addr}");

        tasks.spawn(async move {
            if let Err(e) = Self::handle_connection(&mut socket, &router, read_buffer_size).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Log a finished connection task. A panic stays inside its task.
    fn reap_connection(result: Result<(), tokio::task::JoinError>) {
        if let Err(e) = result {
            error!("Connection task failed: {e}");
        }
    }

    /// Handle an accept error.
    async fn handle_accept_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");

        // Wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                Self::reap_connection(res);
            }
        }).await;

        info!("Server shutdown complete");
    }

    /// Bind to the configured address and serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.display_server_info();
        let listener = self.bind().await?;
        self.run(listener).await
    }

    /// Serve connections from an already bound listener until Ctrl+C.
    pub async fn run(&self, listener: TcpListener) -> Result<(), Error> {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        let ctrl_c = Self::setup_ctrl_c_handler(shutdown_tx);

        self.serve(listener, shutdown_rx).await;

        ctrl_c.abort();
        Ok(())
    }

    /// Accept loop. Stops only when a shutdown message arrives; a closed
    /// channel leaves the server running.
    pub(crate) async fn serve(&self, listener: TcpListener, mut shutdown_rx: mpsc::Receiver<()>) {
        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                Some(()) = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                Some(res) = tasks.join_next(), if !tasks.is_empty() => {
                    Self::reap_connection(res);
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                self.router.clone(),
                                self.config.read_buffer_size,
                                &mut tasks,
                            );
                        },
                        Err(e) => Self::handle_accept_error(e).await,
                    }
                }
            }
        }

        Self::perform_shutdown(&mut tasks).await;
    }

    /// Handle a single connection: one read, one response, then close.
    ///
    /// A read that fills the buffer is decoded as is; the rest of the request
    /// is never read.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: &Router<S>,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                warn!("Rejecting request: {e}");
                let response = HttpResponse::new(StatusCode::BadRequest);
                socket.write_all(&response.to_bytes()).await?;
                socket.shutdown().await?;
                return Ok(());
            }
        };
        debug!("Received request: {line}", line = request.start_line());

        let response = router.dispatch(request).await;
        debug!("Responding {status}", status = response.status.as_u16());

        socket.write_all(&response.to_bytes()).await?;
        socket.shutdown().await?;

        Ok(())
    }
}
