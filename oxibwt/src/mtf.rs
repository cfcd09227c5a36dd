//! Move-to-Front Transform.
//!
//! MTF replaces each byte with its position in a recency list and then moves
//! that byte to the front of the list. After a BWT, runs of equal bytes turn
//! into runs of zeros, which entropy coders compress well.
//!
//! The list is a fixed-size array owned by a single call; it is rebuilt in
//! ascending order (or from the configured alphabet) every time.

use oxibwt_core::ALPHABET_SIZE;
use oxibwt_core::error::{OxiBwtError, Result};
use oxibwt_core::traits::BlockCodec;

/// Recency-ordered symbol list.
#[derive(Debug, Clone)]
struct SymbolList {
    symbols: [u8; ALPHABET_SIZE],
    size: usize,
}

impl SymbolList {
    fn ascending() -> Self {
        Self {
            symbols: std::array::from_fn(|i| i as u8),
            size: ALPHABET_SIZE,
        }
    }

    fn rank_of(&self, symbol: u8) -> Option<usize> {
        self.symbols[..self.size].iter().position(|&s| s == symbol)
    }

    fn symbol_at(&self, rank: usize) -> Option<u8> {
        self.symbols[..self.size].get(rank).copied()
    }

    /// Move the symbol at `rank` to the front; positions `0..rank` shift back.
    #[inline]
    fn promote(&mut self, rank: usize) {
        if rank > 0 {
            let symbol = self.symbols[rank];
            self.symbols.copy_within(..rank, 1);
            self.symbols[0] = symbol;
        }
    }
}

/// Perform the Move-to-Front transform over the full byte alphabet.
///
/// Output length equals input length.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut list = SymbolList::ascending();
    let mut result = Vec::with_capacity(data.len());

    for &byte in data {
        // Every byte value is in the full list.
        let mut rank = 0;
        while list.symbols[rank] != byte {
            rank += 1;
        }
        result.push(rank as u8);
        list.promote(rank);
    }

    result
}

/// Perform the inverse Move-to-Front transform over the full byte alphabet.
pub fn decode(ranks: &[u8]) -> Vec<u8> {
    let mut list = SymbolList::ascending();
    let mut result = Vec::with_capacity(ranks.len());

    for &rank in ranks {
        let rank = rank as usize;
        result.push(list.symbols[rank]);
        list.promote(rank);
    }

    result
}

/// Sorted list of the distinct bytes that occur in `data`.
pub fn used_symbols(data: &[u8]) -> Vec<u8> {
    let mut used = [false; ALPHABET_SIZE];
    for &byte in data {
        used[byte as usize] = true;
    }
    (0..=u8::MAX).filter(|&b| used[b as usize]).collect()
}

/// Move-to-Front codec with a configurable initial alphabet.
///
/// The default alphabet is all 256 byte values in ascending order. A
/// restricted alphabet gives smaller ranks when only a few symbols occur,
/// and makes the codec reject symbols and ranks outside of it.
#[derive(Debug, Clone)]
pub struct MoveToFront {
    initial: SymbolList,
}

impl MoveToFront {
    /// Codec over the full ascending byte alphabet.
    pub fn new() -> Self {
        Self {
            initial: SymbolList::ascending(),
        }
    }

    /// Codec whose list starts as `alphabet`, in the given order.
    ///
    /// Fails if the alphabet is empty or lists a symbol twice.
    pub fn with_alphabet(alphabet: &[u8]) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(OxiBwtError::invalid_alphabet("alphabet is empty"));
        }

        let mut seen = [false; ALPHABET_SIZE];
        let mut symbols = [0u8; ALPHABET_SIZE];
        for (i, &symbol) in alphabet.iter().enumerate() {
            if seen[symbol as usize] {
                return Err(OxiBwtError::invalid_alphabet(format!(
                    "duplicate symbol {:#04x}",
                    symbol
                )));
            }
            seen[symbol as usize] = true;
            symbols[i] = symbol;
        }

        Ok(Self {
            initial: SymbolList {
                symbols,
                size: alphabet.len(),
            },
        })
    }

    /// The initial symbol order.
    pub fn alphabet(&self) -> &[u8] {
        &self.initial.symbols[..self.initial.size]
    }

    /// Number of symbols in the alphabet.
    pub fn alphabet_size(&self) -> usize {
        self.initial.size
    }

    /// Encode `data` into ranks.
    ///
    /// Fails with [`OxiBwtError::SymbolNotInAlphabet`] on the first byte
    /// missing from the alphabet.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut list = self.initial.clone();
        let mut result = Vec::with_capacity(data.len());

        for (position, &byte) in data.iter().enumerate() {
            let rank = list
                .rank_of(byte)
                .ok_or_else(|| OxiBwtError::symbol_not_in_alphabet(byte, position))?;
            result.push(rank as u8);
            list.promote(rank);
        }

        Ok(result)
    }

    /// Decode ranks back into symbols.
    ///
    /// Fails with [`OxiBwtError::RankOutOfRange`] on the first rank that is
    /// not below the alphabet size.
    pub fn decode(&self, ranks: &[u8]) -> Result<Vec<u8>> {
        let mut list = self.initial.clone();
        let mut result = Vec::with_capacity(ranks.len());

        for (position, &rank) in ranks.iter().enumerate() {
            let rank = rank as usize;
            let symbol = list.symbol_at(rank).ok_or_else(|| {
                OxiBwtError::rank_out_of_range(rank, list.size, position)
            })?;
            result.push(symbol);
            list.promote(rank);
        }

        Ok(result)
    }
}

impl Default for MoveToFront {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCodec for MoveToFront {
    type Encoded = Vec<u8>;

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        MoveToFront::encode(self, input)
    }

    fn decode(&self, encoded: &Vec<u8>) -> Result<Vec<u8>> {
        MoveToFront::decode(self, encoded)
    }
}
