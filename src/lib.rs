//! Slugen library crate
//!
//! This crate provides the core functionality for the `slugen` CLI. It is
//! organized into two small modules: `slug` (title to slug transformation)
//! and `error` (the error type). The binary `src/main.rs` calls
//! `slugen_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `run_with()` — the same flow against explicit arguments and output.
//! - `slug::slugify()` / `slug::generate_slug()` — the transformation itself.

pub mod error;
pub mod slug;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use log::debug;

use crate::error::SlugError;
use crate::slug::generate_slug;

/// Top-level CLI types and runner. Keep `main.rs` thin.
///
/// The CLI has no flags: help and version are disabled, and every
/// invocation argument is a value (see [`title_argv`]).
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Title to turn into a slug (quote it if it contains spaces).
    /// Only the first value is used.
    #[arg(value_name = "TITLE", num_args = 0..)]
    args: Vec<OsString>,
}

/// Build the argv handed to clap: the program name, an end-of-options
/// marker, then the user's arguments untouched.
///
/// With the marker in place titles such as `--help`, `-V` or a lone `--`
/// land in [`Cli::args`] verbatim.
fn title_argv<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter();
    let program = argv.next().unwrap_or_else(|| OsString::from("slugen"));
    let mut out = vec![program, OsString::from("--")];
    out.extend(argv);
    out
}

/// Decode raw arguments, replacing invalid UTF-8 with `U+FFFD`.
fn decode_args(raw: &[OsString]) -> Vec<String> {
    raw.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Write the slug for `args` to `out`, followed by a newline.
///
/// Nothing is written when `args` is empty.
///
/// # Errors
/// [`SlugError::MissingArgument`] for an empty `args`, [`SlugError::Io`] when
/// `out` rejects the write.
pub fn run_with<W: Write>(args: &[String], out: &mut W) -> Result<(), SlugError> {
    let slug = generate_slug(args)?;
    writeln!(out, "{}", slug)?;
    out.flush()?;
    Ok(())
}

/// Run the Slugen CLI.
///
/// Parses the invocation arguments and prints the slug of the first one.
/// Errors are printed to stderr and the process exits with code 1.
///
/// Example:
///
/// ```no_run
/// slugen_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(title_argv(std::env::args_os()));
    let args = decode_args(&cli.args);
    debug!("parsed {} argument(s)", args.len());

    let stdout = io::stdout();
    if let Err(e) = run_with(&args, &mut stdout.lock()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
