use std::num::ParseIntError;

use thiserror::Error;

/// Why the command-line bound could not be read.
///
/// Both variants send the CLI down the help path.
#[derive(Debug, Error)]
pub enum ArgError {
    #[error("missing argument N")]
    Missing,

    #[error("not a non-negative integer: {input:?}")]
    NotAnInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
