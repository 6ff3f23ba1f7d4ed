//! Scoped raw-mode handling for the output device
//!
//! The engine must own the output line discipline for the duration of a
//! run: output post-processing is switched off so LF bytes reach the
//! terminal untranslated, and the original attributes come back on every
//! exit path. `RawModeGuard` carries that obligation in its destructor.

use std::os::fd::{BorrowedFd, OwnedFd};

use nix::errno::Errno;
use nix::sys::termios::{self, OutputFlags, SetArg, Termios};

use crate::error::{Error, Result};

/// Holds the output device in raw (no post-processing) mode until dropped.
///
/// The guard duplicates the output descriptor so the caller's writer
/// stays usable while the guard is alive. When the descriptor is not a
/// terminal (a pipe or a regular file), the guard is inert: no attribute
/// calls are made in either direction.
pub struct RawModeGuard {
    fd: OwnedFd,
    saved: Option<Termios>,
}

impl RawModeGuard {
    /// Snapshot the device's attributes, clear the output post-processing
    /// flag, and apply the change once pending output has drained.
    pub fn acquire(fd: BorrowedFd<'_>) -> Result<Self> {
        let fd = fd.try_clone_to_owned().map_err(|e| Error::TermAttrsFailed {
            op: "dup".to_string(),
            reason: e.to_string(),
        })?;

        let saved = match termios::tcgetattr(&fd) {
            Ok(attrs) => attrs,
            // Not a terminal: nothing to reconfigure, nothing to restore.
            Err(Errno::ENOTTY) | Err(Errno::ENODEV) => {
                debug!("Output is not a terminal; leaving line discipline untouched");
                return Ok(Self { fd, saved: None });
            }
            Err(e) => {
                return Err(Error::TermAttrsFailed {
                    op: "tcgetattr".to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let mut raw = saved.clone();
        raw.output_flags.remove(OutputFlags::OPOST);
        termios::tcsetattr(&fd, SetArg::TCSADRAIN, &raw).map_err(|e| Error::TermAttrsFailed {
            op: "tcsetattr".to_string(),
            reason: e.to_string(),
        })?;

        debug!("Output post-processing disabled");
        Ok(Self {
            fd,
            saved: Some(saved),
        })
    }

    /// Whether the guard actually changed the device's attributes.
    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            // Nothing useful can propagate from a destructor.
            if let Err(e) = termios::tcsetattr(&self.fd, SetArg::TCSADRAIN, &saved) {
                warn!("Failed to restore terminal attributes: {}", e);
            } else {
                debug!("Terminal attributes restored");
            }
        }
    }
}
