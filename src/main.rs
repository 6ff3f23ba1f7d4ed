//! dripcat - stream file bytes to the terminal at a controlled pace
//!
//! Thin command-line wrapper around the streaming engine: parses the
//! option surface, resolves the run configuration, and maps engine
//! errors to exit codes.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use dripcat::config::{Input, RunConfig};
use dripcat::engine;
use dripcat::error::{Error, Result};

/// Parsed command-line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Chunk size override in bytes
    buffer_size: Option<usize>,
    /// Emit a terminal reset sequence before streaming
    reset: bool,
    /// Status trace destination
    status: Option<PathBuf>,
    /// Inter-chunk wait in milliseconds
    wait_ms: Option<f64>,
    /// Input files; `-` denotes standard input
    inputs: Vec<Input>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut app_args = AppArgs::default();
        let mut options_done = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                _ if options_done => {
                    app_args.inputs.push(Input::from_arg(&args[i]));
                }
                "--" => {
                    options_done = true;
                }
                "-b" | "--buffer-size" => {
                    if i + 1 < args.len() {
                        let value = args[i + 1].parse::<usize>().map_err(|_| {
                            format!("Invalid buffer size: {}", args[i + 1])
                        })?;
                        app_args.buffer_size = Some(value);
                        i += 1;
                    } else {
                        return Err("Missing buffer size value".into());
                    }
                }
                "-r" | "--reset" => {
                    app_args.reset = true;
                }
                "-s" | "--status" => {
                    if i + 1 < args.len() {
                        app_args.status = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing status file path".into());
                    }
                }
                "-w" | "--wait" => {
                    if i + 1 < args.len() {
                        let value = args[i + 1].parse::<f64>().map_err(|_| {
                            format!("Invalid wait value: {}", args[i + 1])
                        })?;
                        app_args.wait_ms = Some(value);
                        i += 1;
                    } else {
                        return Err("Missing wait value".into());
                    }
                }
                "-h" | "--help" => {
                    print_usage();
                    process::exit(0);
                }
                "-v" | "--version" => {
                    println!("dripcat v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                // A lone dash is an operand, not an option
                arg if arg.starts_with('-') && arg != "-" => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                arg => {
                    app_args.inputs.push(Input::from_arg(arg));
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print usage information
fn print_usage() {
    println!("dripcat - stream file bytes to the terminal at a controlled pace");
    println!();
    println!("USAGE:");
    println!("    dripcat [-b BYTES] [-r] [-s FILE] [-w MSEC] FILE...");
    println!();
    println!("ARGS:");
    println!("    FILE...                    Input files to stream; '-' reads standard input");
    println!();
    println!("OPTIONS:");
    println!("    -b, --buffer-size <BYTES>  Bytes per chunk (default: 4096, or 1 with --wait)");
    println!("    -r, --reset                Emit a terminal reset sequence before streaming");
    println!("    -s, --status <FILE>        Write a per-chunk byte trace to FILE (needs --wait)");
    println!("    -w, --wait <MSEC>          Pause between chunks, in milliseconds");
    println!("    -h, --help                 Print this help message");
    println!("    -v, --version              Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG                   Set logging level (error, warn, info, debug, trace)");
}

fn main() {
    // Diagnostics go to stderr; stdout carries the raw byte stream.
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args = AppArgs::parse().unwrap_or_else(|e| {
        error!("Failed to parse arguments: {}", e);
        print_usage();
        process::exit(1);
    });

    if args.inputs.is_empty() {
        print_usage();
        process::exit(1);
    }

    let config = RunConfig::resolve(
        args.inputs,
        args.buffer_size,
        args.wait_ms,
        args.reset,
        args.status,
    )
    .unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match engine::run(&config, &mut output) {
        Ok(()) => {}
        Err(Error::Interrupted) => {
            // Conventional exit status for SIGINT
            process::exit(130);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
