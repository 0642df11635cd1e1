//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Token `order` values are not contiguous
    #[error("bad token ordering: expected order {expected}, found {found} (\"{text}\")")]
    NonContiguousTokens {
        /// The order value that should have come next
        expected: usize,
        /// The order value actually found
        found: usize,
        /// Text of the offending token
        text: String,
    },

    /// A candidate span extends past the end of the token stream
    #[error("candidate [{start}, {end}) exceeds token count {token_count}")]
    CandidateOutOfRange {
        /// First position of the span
        start: usize,
        /// One past the last position of the span
        end: usize,
        /// Number of tokens being resolved
        token_count: usize,
    },

    /// A candidate with zero length was supplied
    #[error("empty candidate at position {0}")]
    EmptyCandidate(usize),

    /// No candidate covers a token position
    #[error("token position {0} is not covered by any candidate")]
    UncoveredPosition(usize),

    /// Term status code outside the known set
    #[error("invalid term status code {0}")]
    InvalidStatus(u8),

    /// Term text is empty after normalization
    #[error("term text is empty")]
    EmptyTerm,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
