//! Burrows-Wheeler Transform.
//!
//! The forward transform sorts all rotations of a block and keeps the last
//! column of the sorted matrix together with the row holding the unrotated
//! text. The inverse needs no suffix array: a stable counting sort of the
//! last column yields the first column, and the order in which equal bytes
//! are placed links every row to its cyclic successor.

use crate::config::SortConfig;
use crate::suffix::CircularSuffixArray;
use oxibwt_core::ALPHABET_SIZE;
use oxibwt_core::error::{OxiBwtError, Result};
use oxibwt_core::traits::BlockCodec;

/// Output of the forward transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BwtBlock {
    /// Row of the sorted rotation matrix that holds the original text.
    pub first: usize,
    /// Last character of every sorted rotation.
    pub column: Vec<u8>,
}

impl BwtBlock {
    /// Length of the transformed block.
    pub fn len(&self) -> usize {
        self.column.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.column.is_empty()
    }

    /// Reconstruct the original text.
    pub fn inverse(&self) -> Result<Vec<u8>> {
        inverse_transform(&self.column, self.first)
    }
}

/// Perform the Burrows-Wheeler Transform with the default sort.
pub fn transform(data: &[u8]) -> BwtBlock {
    transform_with(data, &SortConfig::default())
}

/// Perform the Burrows-Wheeler Transform with an explicit sort configuration.
///
/// An empty input gives `first = 0` and an empty column.
pub fn transform_with(data: &[u8], config: &SortConfig) -> BwtBlock {
    if data.is_empty() {
        return BwtBlock::default();
    }

    let n = data.len();
    let suffixes = CircularSuffixArray::with_config(data, config);

    let mut first = 0;
    let mut column = Vec::with_capacity(n);
    for (row, &offset) in suffixes.as_slice().iter().enumerate() {
        if offset == 0 {
            first = row;
            column.push(data[n - 1]);
        } else {
            column.push(data[offset - 1]);
        }
    }

    log::debug!("BWT forward: {} bytes, primary row {}", n, first);

    BwtBlock { first, column }
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// Fails with [`OxiBwtError::InvalidPrimaryIndex`] when `first` is not a row
/// of `column` (for an empty column only `first = 0` is accepted).
pub fn inverse_transform(column: &[u8], first: usize) -> Result<Vec<u8>> {
    let n = column.len();
    if first >= n.max(1) {
        return Err(OxiBwtError::invalid_primary_index(first, n));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // count[c] becomes the first slot of byte c in the sorted column
    let mut count = [0usize; ALPHABET_SIZE + 1];
    for &byte in column {
        count[byte as usize + 1] += 1;
    }
    for r in 0..ALPHABET_SIZE {
        count[r + 1] += count[r];
    }

    let mut sorted_first = vec![0u8; n];
    let mut next = vec![0usize; n];
    for (i, &byte) in column.iter().enumerate() {
        let slot = &mut count[byte as usize];
        sorted_first[*slot] = byte;
        next[*slot] = i;
        *slot += 1;
    }

    let mut result = Vec::with_capacity(n);
    let mut row = first;
    for _ in 0..n {
        result.push(sorted_first[row]);
        row = next[row];
    }

    log::debug!("BWT inverse: {} bytes from primary row {}", n, first);

    Ok(result)
}

/// Burrows-Wheeler Transform as a [`BlockCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bwt {
    config: SortConfig,
}

impl Bwt {
    /// Create a transform using the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform using the given sort configuration.
    pub fn with_config(config: SortConfig) -> Self {
        Self { config }
    }

    /// The sort configuration in use.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }
}

impl BlockCodec for Bwt {
    type Encoded = BwtBlock;

    fn encode(&self, input: &[u8]) -> Result<BwtBlock> {
        Ok(transform_with(input, &self.config))
    }

    fn decode(&self, encoded: &BwtBlock) -> Result<Vec<u8>> {
        encoded.inverse()
    }
}
