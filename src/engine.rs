//! Raw streaming engine
//!
//! Owns the output device for the duration of a run: acquires raw mode,
//! pushes each input to the output in fixed-size chunks, hands paced
//! chunks to the status sink, and puts the device back the way it was
//! on every exit path, including errors and Ctrl-C.

use std::fs::File;
use std::io::{self, Read, Write};
use std::os::fd::AsFd;
use std::thread;

use crate::config::{Input, RunConfig};
use crate::error::{Error, Result};
use crate::interrupt;
use crate::status::StatusSink;
use crate::term::RawModeGuard;

/// ESC 'c': full terminal reset, emitted before any file content when
/// the reset flag is set.
pub const TERMINAL_RESET: &[u8] = &[0x1B, b'c'];

/// Stream every configured input to `output`.
///
/// Teardown ordering is fixed: the status sink closes first, then the
/// raw-mode guard restores the device attributes. Both happen whether
/// the run finished, failed, or was interrupted.
pub fn run<W: Write + AsFd>(config: &RunConfig, output: &mut W) -> Result<()> {
    interrupt::arm()?;
    let mut sink = StatusSink::open(config.status_path.as_deref())?;
    let guard = RawModeGuard::acquire(output.as_fd())?;

    let result = stream_inputs(config, output, &mut sink);

    sink.close();
    drop(guard);
    result
}

fn stream_inputs<W: Write>(config: &RunConfig, output: &mut W, sink: &mut StatusSink) -> Result<()> {
    if config.reset {
        output.write_all(TERMINAL_RESET)?;
    }

    for input in &config.inputs {
        match input {
            Input::Stdin => {
                debug!("Streaming standard input");
                // Stdin stays open; only real files get a close cycle.
                pump(&mut io::stdin().lock(), output, config, sink)?;
            }
            Input::Path(path) => {
                debug!("Streaming file: {}", path.display());
                let mut file = File::open(path).map_err(|e| Error::InputOpenFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                pump(&mut file, output, config, sink)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Move one input to the output chunk by chunk until exhausted.
///
/// Paced runs write the chunk, trace it, flush, then sleep, so the
/// trace line for a chunk is on disk before its delay is observed.
fn pump<R: Read, W: Write>(
    reader: &mut R,
    output: &mut W,
    config: &RunConfig,
    sink: &mut StatusSink,
) -> Result<()> {
    let mut buf = vec![0u8; config.chunk_size];
    loop {
        if interrupt::triggered() {
            info!("Interrupted; unwinding through cleanup");
            return Err(Error::Interrupted);
        }

        let n = match reader.read(&mut buf) {
            Ok(n) => n,
            // EINTR: the flag check above decides whether to abort.
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Io(e)),
        };
        if n == 0 {
            break;
        }

        output.write_all(&buf[..n])?;

        if config.paced() {
            sink.write(&buf[..n])?;
            output.flush()?;
            thread::sleep(config.delay);
        }
    }
    Ok(())
}
