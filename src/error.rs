//! Error type for the parse/convert entry points.

use thiserror::Error;

/// Input rejected before any parsing takes place.
///
/// Only two shapes are refused: no lines at all, and a single empty line
/// (what reading a zero-length file line by line can produce). Everything
/// else, however odd, parses to some document.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("nil input")]
    Nil,

    #[error("empty input")]
    Empty,
}

pub type Result<T> = std::result::Result<T, InvalidInput>;

/// Reject the two input shapes that carry no source at all.
pub fn check_input<S: AsRef<str>>(lines: &[S]) -> Result<()> {
    match lines {
        [] => Err(InvalidInput::Nil),
        [only] if only.as_ref().is_empty() => Err(InvalidInput::Empty),
        _ => Ok(()),
    }
}
