//! Status trace sink
//!
//! Mirrors each transmitted chunk to an optional side file as one line
//! of space-joined byte mnemonics, flushed per chunk so the trace stays
//! readable in real time even if the run is killed partway through.
//!
//! The disabled variant shares the `write`/`close` surface with the
//! real one, so the streaming engine never branches on whether tracing
//! is active.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::labels::label;

/// Per-chunk byte trace destination.
#[derive(Debug)]
pub enum StatusSink {
    /// No destination was supplied; every call is a no-op.
    Disabled,
    /// An open destination file. The slot is emptied by `close` so
    /// closing is idempotent.
    File(Option<File>),
}

impl StatusSink {
    /// Open a sink for the given destination, or a disabled sink when
    /// no destination was supplied.
    ///
    /// The destination is truncated if it already exists. An open
    /// failure propagates before any streaming begins.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(StatusSink::Disabled),
            Some(path) => {
                let file = File::create(path).map_err(|e| Error::StatusOpenFailed {
                    path: PathBuf::from(path),
                    reason: e.to_string(),
                })?;
                debug!("Status trace opened: {}", path.display());
                Ok(StatusSink::File(Some(file)))
            }
        }
    }

    /// Append one trace line for a transmitted chunk and flush it.
    ///
    /// Empty chunks produce no line.
    pub fn write(&mut self, chunk: &[u8]) -> Result<()> {
        let file = match self {
            StatusSink::Disabled => return Ok(()),
            StatusSink::File(None) => return Ok(()),
            StatusSink::File(Some(file)) => file,
        };
        if chunk.is_empty() {
            return Ok(());
        }

        let mut line = String::with_capacity(chunk.len() * 4);
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(label(*byte));
        }
        line.push('\n');

        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Release the destination handle. Safe to call any number of times.
    pub fn close(&mut self) {
        if let StatusSink::File(slot) = self {
            if slot.take().is_some() {
                debug!("Status trace closed");
            }
        }
    }
}

impl Drop for StatusSink {
    // Backstop for abnormal unwinds; the engine closes explicitly.
    fn drop(&mut self) {
        self.close();
    }
}
