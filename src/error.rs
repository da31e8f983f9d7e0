use thiserror::Error;

use crate::types::Side;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal input errors. None of these are recovered from: they propagate to
/// the binary boundary, which reports them and exits nonzero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid sexagesimal value: {0:?}")]
    BadSexagesimal(String),

    #[error("coordinate samples must be strictly monotonic")]
    NonMonotonic,

    #[error("need at least two coordinate samples, got {0}")]
    TooFewSamples(usize),

    #[error("pixel and coordinate arrays differ in length ({pixels} vs {coords})")]
    LengthMismatch { pixels: usize, coords: usize },

    #[error("coordinate table has no rows for the {0} edge")]
    MissingEdge(Side),

    #[error("unknown edge name in coordinate table: {0:?}")]
    BadSide(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = Error::BadSexagesimal("1:x:3".to_string());
        assert!(e.to_string().contains("1:x:3"));

        let e = Error::MissingEdge(Side::Left);
        assert!(e.to_string().contains("left"));

        let e = Error::LengthMismatch {
            pixels: 3,
            coords: 5,
        };
        assert!(e.to_string().contains('3') && e.to_string().contains('5'));
    }
}
