use thiserror::Error;

/// Reasons a rearrange or removal call is rejected.
///
/// Every variant is detected before the first element moves, so the sequence is
/// untouched whenever one of these is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RearrangeError {
    #[error("target index {target} is out of range (expected at most {max})")]
    TargetOutOfRange { target: usize, max: usize },
    #[error("source index {index} is out of range for a sequence of length {len}")]
    SourceOutOfRange { index: usize, len: usize },
    /// `index` is the source position selected more than once.
    #[error("source position {index} is selected more than once")]
    DuplicateSelection { index: usize },
    /// `item` is the position of the missing value within the requested items.
    #[error("requested item #{item} is not present in the sequence")]
    NotFound { item: usize },
}
