//! Command-line surface for primes2.
//!
//! The CLI takes a single positional bound `N`. Anything that does not read
//! as a non-negative integer is treated as a request for help rather than a
//! failure, so the help path exits with status 0.

use std::io::{self, Write};

use clap::Parser;

use crate::error::ArgError;

pub const HELP_TEXT: &str = "Syntax:\n     primes2 <N>\n";

#[derive(Parser, Debug)]
#[command(name = "primes2", author, about, long_about = None)]
#[command(
    allow_negative_numbers = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Exclusive upper bound; primes strictly below N are printed
    #[arg(value_name = "N")]
    pub n: Option<String>,

    /// Extra positionals are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

/// Read the bound from the raw positional argument.
///
/// Surrounding whitespace is ignored, a leading `+` is accepted, and single
/// `_` separators between digits are dropped (`1_000`). Negative values are
/// rejected like any other malformed input.
pub fn parse_bound(arg: Option<&str>) -> Result<usize, ArgError> {
    let raw = arg.ok_or(ArgError::Missing)?;
    let trimmed = raw.trim();
    strip_digit_separators(trimmed)
        .as_deref()
        .unwrap_or(trimmed)
        .parse::<usize>()
        .map_err(|source| ArgError::NotAnInteger {
            input: raw.to_string(),
            source,
        })
}

/// Remove `_` separators, or `None` if any `_` is not flanked by digits.
///
/// Misplaced separators are left in place so the integer parse rejects them.
fn strip_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return None;
    }
    let bytes = s.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    well_placed.then(|| s.replace('_', ""))
}

/// Write the two-line syntax reminder.
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(HELP_TEXT.as_bytes())
}

/// Render primes as `[2, 3, 5, 7]`, or `[]` when there are none.
pub fn format_primes(primes: &[usize]) -> String {
    format!("{:?}", primes)
}
