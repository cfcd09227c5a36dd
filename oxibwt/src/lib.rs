//! Burrows-Wheeler and Move-to-Front transforms for OxiBWT.
//!
//! This crate provides the block-sorting stage that sits in front of an
//! entropy coder:
//! 1. Circular suffix sorting - ordering all rotations of a block
//! 2. Burrows-Wheeler Transform (BWT) - last column of the sorted rotations
//! 3. Move-to-Front Transform (MTF) - turns clustered bytes into small ranks
//!
//! ## Example
//!
//! ```rust
//! use oxibwt::{bwt, mtf};
//!
//! let block = bwt::transform(b"ABRACADABRA!");
//! assert_eq!(block.first, 3);
//! assert_eq!(block.column, b"ARD!RCAAAABB");
//!
//! let ranks = mtf::encode(&block.column);
//! let column = mtf::decode(&ranks);
//! assert_eq!(bwt::inverse_transform(&column, block.first).unwrap(), b"ABRACADABRA!");
//! ```
//!
//! ## Block pipeline
//!
//! ```rust
//! use oxibwt::{BlockSize, Pipeline};
//!
//! let pipeline = Pipeline::new(BlockSize::new(1));
//! let blocks = pipeline.encode(b"mississippi").unwrap();
//! assert_eq!(pipeline.decode(&blocks).unwrap(), b"mississippi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
pub mod config;
/// Move-to-Front Transform implementation.
pub mod mtf;
pub mod pipeline;
pub mod suffix;

pub use bwt::{Bwt, BwtBlock};
pub use config::{BlockSize, SortConfig, SortStrategy};
pub use mtf::MoveToFront;
pub use oxibwt_core::{BlockCodec, OxiBwtError, Result};
pub use pipeline::{EncodedBlock, Pipeline};
pub use suffix::CircularSuffixArray;
