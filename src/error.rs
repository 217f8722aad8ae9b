//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when building a card from raw ordinals.
///
/// This is the only validation failure in the crate. Dealing from an empty
/// deck is not an error; it returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank ordinal out of range (valid ordinals are `0..13`).
    #[error("invalid rank ordinal {0}")]
    InvalidRank(u8),
    /// Suit ordinal out of range (valid ordinals are `0..4`).
    #[error("invalid suit ordinal {0}")]
    InvalidSuit(u8),
}
