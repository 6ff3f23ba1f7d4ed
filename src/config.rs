//! Run configuration
//!
//! Resolves the raw command-line options into the immutable settings a
//! run streams under. The chunk-size default depends on whether pacing
//! was requested, and the status trace is coupled to pacing: with a
//! zero delay the trace destination is dropped entirely.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Chunk size when streaming flat out.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Chunk size when pacing, so each byte lands on its own delay.
pub const PACED_CHUNK_SIZE: usize = 1;

/// One input source, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The `-` marker: read the standard input stream (never closed).
    Stdin,
    /// A file path, opened for binary reading and closed after exhaustion.
    Path(PathBuf),
}

impl Input {
    /// Map a command-line operand to an input source.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }
}

/// Immutable settings for one streaming run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input sources, streamed in order with no separators.
    pub inputs: Vec<Input>,
    /// Maximum bytes per read.
    pub chunk_size: usize,
    /// Pause between chunks; zero means no pacing.
    pub delay: Duration,
    /// Emit a terminal reset sequence before any content.
    pub reset: bool,
    /// Destination for the per-chunk byte trace, if pacing is on.
    pub status_path: Option<PathBuf>,
}

impl RunConfig {
    /// Resolve overrides into effective settings.
    ///
    /// Without a wait the chunk size defaults to [`DEFAULT_CHUNK_SIZE`]
    /// and no pacing occurs. With a wait the chunk size defaults to
    /// [`PACED_CHUNK_SIZE`] and the delay is the wait divided by 1000,
    /// converted to a `Duration` exactly once. A zero effective delay
    /// forces the status destination off regardless of the flag.
    pub fn resolve(
        inputs: Vec<Input>,
        buffer_size: Option<usize>,
        wait_ms: Option<f64>,
        reset: bool,
        status_path: Option<PathBuf>,
    ) -> Result<Self> {
        let (chunk_size, delay) = match wait_ms {
            None => (buffer_size.unwrap_or(DEFAULT_CHUNK_SIZE), Duration::ZERO),
            Some(ms) => {
                if !ms.is_finite() || ms < 0.0 {
                    return Err(Error::InvalidWait { value: ms });
                }
                let delay = Duration::from_secs_f64(ms / 1000.0);
                (buffer_size.unwrap_or(PACED_CHUNK_SIZE), delay)
            }
        };

        if chunk_size == 0 {
            return Err(Error::InvalidBufferSize { value: chunk_size });
        }

        let status_path = if delay.is_zero() {
            if status_path.is_some() {
                debug!("Status trace ignored: pacing is off");
            }
            None
        } else {
            status_path
        };

        Ok(Self {
            inputs,
            chunk_size,
            delay,
            reset,
            status_path,
        })
    }

    /// Whether chunks are paced (and therefore traced).
    pub fn paced(&self) -> bool {
        !self.delay.is_zero()
    }
}
