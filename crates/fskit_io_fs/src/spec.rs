//! Shared error taxonomy for all filesystem operations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Discriminated failure value returned by every operation in this crate.
///
/// Expected filesystem conditions (missing source, existing destination,
/// denied access) are reported through this type; no operation panics for
/// them. Invalid UTF-8 never surfaces here: decoding substitutes offending
/// sequences instead of failing (see [`crate::read`]).
#[derive(Debug)]
pub enum FsOpError {
    /// Malformed input path (missing base name, wrong entry kind).
    InvalidArgument {
        /// Offending path.
        path: PathBuf,
        /// User-facing error text.
        message: String,
    },
    /// Composed destination already exists; no copy I/O was performed.
    AlreadyExists(PathBuf),
    /// Input path does not exist.
    NotFound(PathBuf),
    /// Operation rejected by filesystem permissions.
    PermissionDenied(PathBuf),
    /// Any other read/write/copy failure.
    Io {
        /// Path the failing operation was touching.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl FsOpError {
    /// Classify an `io::Error` raised while touching `path`.
    pub(crate) fn from_io(path: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        }
    }

    pub(crate) fn invalid_argument(path: &Path, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FsOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { path, message } => {
                write!(f, "{message}: {}", path.display())
            }
            Self::AlreadyExists(path) => {
                write!(f, "Destination exists: {}", path.display())
            }
            Self::NotFound(path) => write!(f, "No such path: {}", path.display()),
            Self::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            Self::Io { path, message } => {
                write!(f, "IO failure on {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for FsOpError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
