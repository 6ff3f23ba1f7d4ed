//! dripcat - paced raw-byte streaming for terminal emulator testing
//!
//! This library provides the core functionality for dripcat, a utility
//! that replays file bytes to a terminal at a controlled rate, e.g. to
//! simulate live typing or a slow serial link from a capture.
//!
//! ## Features
//!
//! - **Verbatim streaming:** Input bytes reach the output untouched, in
//!   file order, with no separators
//! - **Raw output mode:** The terminal's output post-processing is
//!   disabled for the run so LF is not expanded to CRLF
//! - **Pacing:** Optional fixed delay between chunks, down to one byte
//!   per chunk
//! - **Status tracing:** Optional side file receiving one line of byte
//!   mnemonics per transmitted chunk
//! - **Guaranteed restore:** Terminal attributes come back on success,
//!   error, and Ctrl-C alike
//!
//! ## Module Organization
//!
//! - [`config`] - Run configuration and option resolution policy
//! - [`engine`] - The raw streaming loop
//! - [`labels`] - Byte value to display mnemonic table
//! - [`status`] - Per-chunk trace sink
//! - [`term`] - Scoped raw-mode guard for the output device
//! - [`interrupt`] - SIGINT flag handling
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```no_run
//! use dripcat::{engine, Input, RunConfig};
//!
//! # fn main() -> dripcat::Result<()> {
//! // Replay a capture byte by byte, 20ms apart
//! let config = RunConfig::resolve(
//!     vec![Input::from_arg("capture.bin")],
//!     None,
//!     Some(20.0),
//!     false,
//!     None,
//! )?;
//! let stdout = std::io::stdout();
//! engine::run(&config, &mut stdout.lock())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Safety and Reliability
//!
//! - **No panics:** All fallible operations return `Result`
//! - **Single-threaded:** Strictly sequential synchronous I/O; the only
//!   suspension point is the deliberate pacing delay
//! - **Resource safety:** The raw-mode guard restores the device in its
//!   destructor, and the status sink close is idempotent

#[macro_use]
extern crate tracing;

pub mod config;
pub mod engine;
pub mod error;
pub mod interrupt;
pub mod labels;
pub mod status;
pub mod term;

// Re-exports for core functionality
pub use config::{Input, RunConfig};
pub use error::{Error, Result};
pub use status::StatusSink;
pub use term::RawModeGuard;

// Version information
/// The current version of dripcat from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
