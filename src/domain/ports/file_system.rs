//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the render orchestrator write outputs without depending on the
//! concrete implementation (local disk, in-memory for tests).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Attach the path an I/O error happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

impl From<FsError> for crate::error::NjkError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::Io(io) => crate::error::NjkError::Io(io),
            other => crate::error::NjkError::Io(std::io::Error::other(other.to_string())),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
pub trait FileSystem {
    /// Read file content as raw bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to file, replacing any previous content
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Create directory and parents; an existing directory is not an error
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}
