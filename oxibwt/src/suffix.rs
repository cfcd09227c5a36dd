//! Circular suffix array.
//!
//! Sorts the N cyclic rotations of a block without ever copying them: every
//! character access goes through [`char_at`], which indexes the original
//! text modulo N. The only owned buffer is the offset permutation.

use crate::config::{SortConfig, SortStrategy};
use oxibwt_core::ALPHABET_SIZE;
use oxibwt_core::error::{OxiBwtError, Result};
use std::cmp::Ordering;

/// Sorted order of the circular suffixes of a text.
///
/// Position `k` holds the starting offset of the k-th smallest rotation.
/// Rotations that are identical through all N characters (periodic texts)
/// keep a deterministic but otherwise unspecified relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    indices: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the rotations of `text` with the default configuration.
    pub fn new(text: &[u8]) -> Self {
        Self::with_config(text, &SortConfig::default())
    }

    /// Sort the rotations of `text` with an explicit configuration.
    pub fn with_config(text: &[u8], config: &SortConfig) -> Self {
        let mut indices: Vec<usize> = (0..text.len()).collect();

        if text.len() > 1 {
            match config.strategy {
                SortStrategy::ThreeWayQuick => {
                    quick_sort(text, &mut indices, config.insertion_cutoff);
                }
                SortStrategy::LsdRadix => lsd_sort(text, &mut indices),
            }
        }

        log::trace!(
            "sorted {} circular suffixes with {:?}",
            indices.len(),
            config.strategy
        );

        Self { indices }
    }

    /// Number of rotations (the text length N).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the text was empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Starting offset of the `i`-th smallest rotation.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.indices
            .get(i)
            .copied()
            .ok_or_else(|| OxiBwtError::index_out_of_range(i, self.indices.len()))
    }

    /// The whole permutation.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Consume the array and return the permutation.
    pub fn into_inner(self) -> Vec<usize> {
        self.indices
    }
}

/// `d`-th character of the rotation starting at `offset`.
///
/// Callers keep `offset < N` and `d < N`, so one subtraction wraps.
#[inline]
fn char_at(text: &[u8], offset: usize, d: usize) -> u8 {
    let pos = offset + d;
    if pos >= text.len() {
        text[pos - text.len()]
    } else {
        text[pos]
    }
}

/// Compare two rotations from character `depth` onwards.
fn compare_rotations(text: &[u8], a: usize, b: usize, depth: usize) -> Ordering {
    for d in depth..text.len() {
        match char_at(text, a, d).cmp(&char_at(text, b, d)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// 3-way radix quicksort over an explicit stack of `(lo, hi, depth)` ranges.
///
/// `hi` is exclusive. Every rotation in a range agrees on its first `depth`
/// characters.
fn quick_sort(text: &[u8], indices: &mut [usize], cutoff: usize) {
    let n = text.len();
    let mut stack: Vec<(usize, usize, usize)> = vec![(0, n, 0)];

    while let Some((lo, hi, d)) = stack.pop() {
        if hi - lo < cutoff {
            insertion_sort(text, &mut indices[lo..hi], d);
            continue;
        }

        let pivot = char_at(text, indices[lo], d);
        let mut lt = lo;
        let mut gt = hi;
        let mut i = lo + 1;

        // [lo, lt) < pivot, [lt, i) == pivot, [gt, hi) > pivot
        while i < gt {
            match char_at(text, indices[i], d).cmp(&pivot) {
                Ordering::Less => {
                    indices.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    indices.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }

        if hi - gt > 1 {
            stack.push((gt, hi, d));
        }
        // At depth N the equal block holds identical rotations.
        if gt - lt > 1 && d + 1 < n {
            stack.push((lt, gt, d + 1));
        }
        if lt - lo > 1 {
            stack.push((lo, lt, d));
        }
    }
}

/// Stable insertion sort of a small range whose rotations share `depth`
/// leading characters.
fn insertion_sort(text: &[u8], indices: &mut [usize], depth: usize) {
    for i in 1..indices.len() {
        let mut j = i;
        while j > 0 && compare_rotations(text, indices[j], indices[j - 1], depth) == Ordering::Less {
            indices.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// LSD radix sort: stable counting sort on rotation position N-1 down to 0.
fn lsd_sort(text: &[u8], indices: &mut Vec<usize>) {
    let n = text.len();

    // Column d of the rotation matrix is a permutation of the text, so one
    // cumulative table serves every pass.
    let mut count = [0usize; ALPHABET_SIZE + 1];
    for &byte in text {
        count[byte as usize + 1] += 1;
    }
    for r in 0..ALPHABET_SIZE {
        count[r + 1] += count[r];
    }

    let mut aux = vec![0usize; n];
    for d in (0..n).rev() {
        let mut slots = count;
        for &offset in indices.iter() {
            let c = char_at(text, offset, d) as usize;
            aux[slots[c]] = offset;
            slots[c] += 1;
        }
        std::mem::swap(indices, &mut aux);
    }
}
