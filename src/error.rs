//! Errors reported by the fallible parts of this crate. The search tree
//! itself never fails.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong outside of the tree.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested file doesn't exist.
    #[error("No such file or directory: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but couldn't be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// A quaternion coefficient was NaN.
    #[error("Coefficients cannot be NaN")]
    InvalidCoefficient,
}

/// `Result` with this crate's [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
