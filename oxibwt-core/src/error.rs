//! Error types for OxiBWT operations.
//!
//! Every failure reported by this workspace is an invalid-argument error:
//! the transforms are pure and deterministic, so a failed call can only be
//! fixed by supplying different input.

use thiserror::Error;

/// The main error type for OxiBWT operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OxiBwtError {
    /// Suffix array position outside `[0, len)`.
    #[error("Index out of range: {index} (length {len})")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of entries available.
        len: usize,
    },

    /// The `first` row of a transform record does not fit the column.
    #[error("Invalid primary index: {first} for a column of length {len}")]
    InvalidPrimaryIndex {
        /// The rejected primary index.
        first: usize,
        /// Length of the transformed column.
        len: usize,
    },

    /// Move-to-front rank that does not address a symbol of the alphabet.
    #[error("Rank {rank} at position {position} exceeds alphabet size {alphabet_size}")]
    RankOutOfRange {
        /// The rejected rank.
        rank: usize,
        /// Size of the alphabet in use.
        alphabet_size: usize,
        /// Position of the rank in the input.
        position: usize,
    },

    /// Input symbol missing from a restricted move-to-front alphabet.
    #[error("Symbol {symbol:#04x} at position {position} is not in the alphabet")]
    SymbolNotInAlphabet {
        /// The rejected symbol.
        symbol: u8,
        /// Position of the symbol in the input.
        position: usize,
    },

    /// Alphabet that is empty or lists a symbol twice.
    #[error("Invalid alphabet: {message}")]
    InvalidAlphabet {
        /// Description of the problem.
        message: String,
    },

    /// Encoded block longer than the configured block size.
    #[error("Block too large: {len} bytes exceeds block size {max}")]
    BlockTooLarge {
        /// Length of the offending block.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Result type alias for OxiBWT operations.
pub type Result<T> = std::result::Result<T, OxiBwtError>;

impl OxiBwtError {
    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid primary index error.
    pub fn invalid_primary_index(first: usize, len: usize) -> Self {
        Self::InvalidPrimaryIndex { first, len }
    }

    /// Create a rank out of range error.
    pub fn rank_out_of_range(rank: usize, alphabet_size: usize, position: usize) -> Self {
        Self::RankOutOfRange {
            rank,
            alphabet_size,
            position,
        }
    }

    /// Create a symbol not in alphabet error.
    pub fn symbol_not_in_alphabet(symbol: u8, position: usize) -> Self {
        Self::SymbolNotInAlphabet { symbol, position }
    }

    /// Create an invalid alphabet error.
    pub fn invalid_alphabet(message: impl Into<String>) -> Self {
        Self::InvalidAlphabet {
            message: message.into(),
        }
    }

    /// Create a block too large error.
    pub fn block_too_large(len: usize, max: usize) -> Self {
        Self::BlockTooLarge { len, max }
    }
}
