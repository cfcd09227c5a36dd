//! Block pipeline: Burrows-Wheeler followed by Move-to-Front.
//!
//! Input is cut into blocks of at most [`BlockSize::bytes`] bytes. Each block
//! is transformed on its own, so blocks can be processed in any order or in
//! parallel (with the `parallel` feature). A single block is always sorted
//! on one thread.

use crate::config::{BlockSize, SortConfig};
use crate::{bwt, mtf};
use oxibwt_core::error::{OxiBwtError, Result};
use oxibwt_core::traits::BlockCodec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One transformed block: the BWT primary row and the MTF ranks of the
/// BWT column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedBlock {
    /// Row of the sorted rotation matrix that holds the original block.
    pub first: u32,
    /// Move-to-front ranks of the last column.
    pub ranks: Vec<u8>,
}

impl EncodedBlock {
    /// Length of the original block.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// BWT + MTF over fixed-size blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    block_size: BlockSize,
    sort: SortConfig,
}

impl Pipeline {
    /// Create a pipeline with the given block size and the default sort.
    pub fn new(block_size: BlockSize) -> Self {
        Self {
            block_size,
            sort: SortConfig::default(),
        }
    }

    /// Use a different suffix sort configuration.
    pub fn with_sort_config(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }

    /// The configured block size.
    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    /// The configured sort.
    pub fn sort_config(&self) -> &SortConfig {
        &self.sort
    }

    fn check_len(&self, len: usize) -> Result<()> {
        let max = self.block_size.bytes();
        if len > max {
            return Err(OxiBwtError::block_too_large(len, max));
        }
        Ok(())
    }

    /// Transform a single block.
    pub fn encode_block(&self, block: &[u8]) -> Result<EncodedBlock> {
        self.check_len(block.len())?;

        let transformed = bwt::transform_with(block, &self.sort);
        let ranks = mtf::encode(&transformed.column);

        Ok(EncodedBlock {
            // Blocks never exceed 900k bytes.
            first: transformed.first as u32,
            ranks,
        })
    }

    /// Reverse [`Pipeline::encode_block`].
    pub fn decode_block(&self, block: &EncodedBlock) -> Result<Vec<u8>> {
        self.check_len(block.len())?;

        let column = mtf::decode(&block.ranks);
        bwt::inverse_transform(&column, block.first as usize)
    }

    /// Split `data` into blocks and transform each of them.
    ///
    /// Empty input yields no blocks.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<EncodedBlock>> {
        let blocks = data
            .chunks(self.block_size.bytes())
            .map(|chunk| self.encode_block(chunk))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "pipeline encode: {} bytes in {} blocks (level {})",
            data.len(),
            blocks.len(),
            self.block_size.level()
        );

        Ok(blocks)
    }

    /// Decode blocks produced by [`Pipeline::encode`] and concatenate them.
    pub fn decode(&self, blocks: &[EncodedBlock]) -> Result<Vec<u8>> {
        let total = blocks.iter().map(EncodedBlock::len).sum();
        let mut output = Vec::with_capacity(total);

        for block in blocks {
            output.extend_from_slice(&self.decode_block(block)?);
        }

        log::debug!("pipeline decode: {} blocks to {} bytes", blocks.len(), total);

        Ok(output)
    }

    /// Like [`Pipeline::encode`], transforming blocks on the rayon pool.
    ///
    /// Produces exactly the same blocks as the sequential version.
    #[cfg(feature = "parallel")]
    pub fn encode_parallel(&self, data: &[u8]) -> Result<Vec<EncodedBlock>> {
        let blocks = data
            .par_chunks(self.block_size.bytes())
            .map(|chunk| self.encode_block(chunk))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "pipeline encode (parallel): {} bytes in {} blocks",
            data.len(),
            blocks.len()
        );

        Ok(blocks)
    }

    /// Like [`Pipeline::decode`], decoding blocks on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn decode_parallel(&self, blocks: &[EncodedBlock]) -> Result<Vec<u8>> {
        let decoded = blocks
            .par_iter()
            .map(|block| self.decode_block(block))
            .collect::<Result<Vec<_>>>()?;

        Ok(decoded.concat())
    }
}

impl BlockCodec for Pipeline {
    type Encoded = Vec<EncodedBlock>;

    fn encode(&self, input: &[u8]) -> Result<Vec<EncodedBlock>> {
        Pipeline::encode(self, input)
    }

    fn decode(&self, encoded: &Vec<EncodedBlock>) -> Result<Vec<u8>> {
        Pipeline::decode(self, encoded)
    }
}
