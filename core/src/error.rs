//! Errors reported by the sequence algebra.
//!
//! Every precondition violation surfaces as a `SeqError` from the pass that
//! evaluated the operation. Nothing is truncated or wrapped silently.

use alloc::string::String;
use thiserror::Error;

/// Failure of a sequence operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// Element access with `index >= len`.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Split with `index > len`.
    #[error("cannot split a sequence of length {len} at index {index}")]
    SplitOutOfRange { index: usize, len: usize },

    /// Subsequence with `start > end` or `end > len`.
    #[error("invalid range [{start}, {end}) for a sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// An argument that must be a sequence was a bare descriptor.
    #[error("expected a sequence, found `{found}`")]
    NotASequence { found: String },

    /// The operation needs at least one element.
    #[error("the sequence is empty")]
    Empty,

    /// The result would exceed `AlgebraOptions::max_len`.
    #[error("sequence of length {len} exceeds the limit of {max}")]
    LengthLimit { len: usize, max: usize },
}

pub type Result<T> = core::result::Result<T, SeqError>;
