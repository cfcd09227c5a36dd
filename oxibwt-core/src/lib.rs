//! # OxiBWT Core
//!
//! Core components shared by the OxiBWT transforms:
//!
//! - [`error`]: Error types
//! - [`traits`]: The [`BlockCodec`] trait implemented by every transform
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Pipeline                                                │
//! │     fixed-size blocks, BWT then MTF per block           │
//! ├─────────────────────────────────────────────────────────┤
//! │ Transforms                                              │
//! │     CircularSuffixArray, Burrows-Wheeler, Move-to-Front │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     OxiBwtError, BlockCodec                             │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::{OxiBwtError, Result};
pub use traits::BlockCodec;

/// Number of distinct symbol values (extended byte alphabet).
pub const ALPHABET_SIZE: usize = 256;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ALPHABET_SIZE;
    pub use crate::error::{OxiBwtError, Result};
    pub use crate::traits::BlockCodec;
}
