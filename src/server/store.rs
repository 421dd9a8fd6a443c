//! The served directory behind the `/files` routes.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tokio::fs;

/// Errors reported by a [`FileStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No file exists under this name.
    #[error("File {0} not found")]
    NotFound(String),

    /// The name does not address a file inside the store.
    #[error("Invalid file name: {0:?}")]
    InvalidName(String),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A byte store addressed by file name.
///
/// Reads and writes to the same name are not synchronized with each other.
pub trait FileStore: Send + Sync + 'static {
    /// Read the full contents of `name`.
    fn read(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, StoreError>> + Send;

    /// Replace the contents of `name`, creating it if needed.
    fn write(&self, name: &str, contents: &[u8]) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// A [`FileStore`] backed by a directory on the local file system.
#[derive(Debug, Clone)]
pub struct ServedDirectory {
    root: PathBuf,
}

impl ServedDirectory {
    /// Serve files from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory files are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` to a path below the root.
    ///
    /// Only plain components are accepted, so a name can never point outside
    /// the root.
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(name);
        let mut components = relative.components().peekable();
        if components.peek().is_none() || !components.all(|c| matches!(c, Component::Normal(_))) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl FileStore for ServedDirectory {
    async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;
        match fs::read(&path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(name.to_string())),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn write(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;
        fs::write(&path, contents).await?;
        Ok(())
    }
}
