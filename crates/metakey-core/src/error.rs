//! Codec error types

use thiserror::Error;

/// Errors reported by the checked encoding path.
///
/// Plain [`encode`](crate::codec::encode) never fails; these only surface
/// through [`encode_checked`](crate::codec::encode_checked).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Code has more symbols than a packed key holds
    #[error("phonetic code has {len} symbols, a packed key holds at most {capacity}")]
    Overflow { len: usize, capacity: usize },

    /// Character outside the symbol alphabet
    #[error("character {ch:?} at index {index} is not a phonetic symbol")]
    Unmapped { ch: char, index: usize },
}

/// Result type for checked codec operations
pub type CodecResult<T> = Result<T, CodecError>;
