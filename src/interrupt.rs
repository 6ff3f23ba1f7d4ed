//! SIGINT handling
//!
//! Ctrl-C must not leave the terminal with post-processing disabled, so
//! instead of letting the default handler kill the process mid-write,
//! a flag handler is installed and the engine polls it between chunks.
//! The run then unwinds through the ordinary cleanup path: status sink
//! closed, terminal attributes restored.

use std::sync::atomic::{AtomicBool, Ordering};

use nix::libc::c_int;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

use crate::error::{Error, Result};

static TRIGGERED: AtomicBool = AtomicBool::new(false);

// Single atomic store; async-signal-safe.
extern "C" fn on_sigint(_signal: c_int) {
    TRIGGERED.store(true, Ordering::SeqCst);
}

/// Install the SIGINT flag handler and clear any stale trigger.
///
/// Called once per run; reinstalling an identical handler is harmless.
pub fn arm() -> Result<()> {
    TRIGGERED.store(false, Ordering::SeqCst);
    let action = SigAction::new(
        SigHandler::Handler(on_sigint),
        SaFlags::empty(),
        SigSet::empty(),
    );
    unsafe { sigaction(Signal::SIGINT, &action) }.map_err(|e| Error::SignalSetupFailed {
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Whether SIGINT has been received since the last `arm`.
pub fn triggered() -> bool {
    TRIGGERED.load(Ordering::SeqCst)
}
