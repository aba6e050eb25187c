//! primes2 library crate
//!
//! This crate provides the core functionality for the `primes2` CLI. It is
//! organized into small modules: `sieve` (the Sieve of Eratosthenes), `cli`
//! (argument parsing, help text and output formatting), and `error` (typed
//! argument errors). The binary `src/main.rs` calls `primes2_lib::run()` to
//! execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//! - `run_with()`: the same flow against any argument list and writer.
//! - `sieve::compute_primes()`: the primes strictly below a bound.

pub mod cli;
pub mod error;
pub mod sieve;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use env_logger::Env;
use log::info;

use crate::cli::{Cli, format_primes, parse_bound, write_help};
use crate::sieve::compute_primes;

/// Run the primes2 CLI.
///
/// Logging goes to stderr at `warn` unless `RUST_LOG` says otherwise. The
/// result or the help text goes to stdout. Both paths exit with status 0;
/// only a failure to write stdout exits non-zero.
///
/// ```no_run
/// primes2_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_with(std::env::args_os(), &mut out) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parse `args` (including the program name), compute, and write to `out`.
///
/// Missing or malformed input writes the help text instead of a result.
/// Flags such as `--help` are not integers either, so they take the same path.
pub fn run_with<I, T, W>(args: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    // clap would swallow a bare `--` as the end of options
    if args.get(1).is_some_and(|a| a == "--") {
        info!("showing help: `--` is not an integer");
        return write_help(out);
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            info!("showing help: {:?}", e.kind());
            return write_help(out);
        }
    };

    match parse_bound(cli.n.as_deref()) {
        Ok(n) => {
            let primes = compute_primes(n);
            writeln!(out, "{}", format_primes(&primes))
        }
        Err(e) => {
            info!("showing help: {}", e);
            write_help(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(args: &[&str]) -> String {
        let mut buf = Vec::new();
        run_with(args.iter().copied(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_with_prints_primes() {
        assert_eq!(capture(&["primes2", "10"]), "[2, 3, 5, 7]\n");
    }

    #[test]
    fn test_run_with_empty_result() {
        assert_eq!(capture(&["primes2", "2"]), "[]\n");
        assert_eq!(capture(&["primes2", "0"]), "[]\n");
    }

    #[test]
    fn test_run_with_help_paths() {
        assert_eq!(capture(&["primes2"]), cli::HELP_TEXT);
        assert_eq!(capture(&["primes2", "abc"]), cli::HELP_TEXT);
        assert_eq!(capture(&["primes2", "-5"]), cli::HELP_TEXT);
        assert_eq!(capture(&["primes2", "--bogus"]), cli::HELP_TEXT);
    }

    #[test]
    fn test_run_with_flags_take_help_path() {
        for flag in ["--help", "-h", "--version", "-V"] {
            assert_eq!(capture(&["primes2", flag]), cli::HELP_TEXT, "flag {}", flag);
        }
    }

    #[test]
    fn test_run_with_bare_double_dash() {
        assert_eq!(capture(&["primes2", "--", "10"]), cli::HELP_TEXT);
        assert_eq!(capture(&["primes2", "--"]), cli::HELP_TEXT);
    }

    #[test]
    fn test_run_with_digit_separators() {
        assert_eq!(capture(&["primes2", "1_0"]), "[2, 3, 5, 7]\n");
        assert_eq!(capture(&["primes2", "1__0"]), cli::HELP_TEXT);
    }
}
