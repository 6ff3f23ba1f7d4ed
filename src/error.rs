//! Error types and Result alias for dripcat

use std::fmt;
use std::path::PathBuf;

/// Result type alias for dripcat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dripcat
#[derive(Debug)]
pub enum Error {
    // === Configuration errors ===
    /// Chunk size must be at least one byte
    InvalidBufferSize {
        value: usize,
    },

    /// Inter-chunk wait must be a non-negative number of milliseconds
    InvalidWait {
        value: f64,
    },

    // === I/O setup errors ===
    /// Failed to open an input file
    InputOpenFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to open the status trace file
    StatusOpenFailed {
        path: PathBuf,
        reason: String,
    },

    // === Terminal errors ===
    /// A terminal attribute operation failed
    TermAttrsFailed {
        op: String,
        reason: String,
    },

    /// Failed to install the interrupt handler
    SignalSetupFailed {
        reason: String,
    },

    /// The run was interrupted by SIGINT
    Interrupted,

    // === I/O errors (kept for `?` compatibility) ===
    /// I/O errors
    Io(std::io::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Configuration errors
            Error::InvalidBufferSize { value } => {
                write!(f, "Buffer size must be a positive number of bytes (got {})", value)
            }
            Error::InvalidWait { value } => {
                write!(f, "Wait must be a non-negative number of milliseconds (got {})", value)
            }

            // I/O setup errors
            Error::InputOpenFailed { path, reason } => {
                write!(f, "Failed to open input '{}': {}", path.display(), reason)
            }
            Error::StatusOpenFailed { path, reason } => {
                write!(f, "Failed to open status file '{}': {}", path.display(), reason)
            }

            // Terminal errors
            Error::TermAttrsFailed { op, reason } => {
                write!(f, "Terminal attribute operation '{}' failed: {}", op, reason)
            }
            Error::SignalSetupFailed { reason } => {
                write!(f, "Failed to install interrupt handler: {}", reason)
            }
            Error::Interrupted => {
                write!(f, "Interrupted")
            }

            // I/O errors
            Error::Io(err) => write!(f, "I/O error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
