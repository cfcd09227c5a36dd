//! Configuration for suffix sorting and block splitting.

/// Algorithm used to order the circular suffixes of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// 3-way radix quicksort refined character by character.
    ///
    /// Average O(N log N) comparisons, O(N²) on long runs of one byte.
    #[default]
    ThreeWayQuick,
    /// LSD radix sort: one counting-sort pass per rotation position.
    ///
    /// Always Θ(N²); identical rotations come out in ascending offset order.
    LsdRadix,
}

/// Suffix sorting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Sorting algorithm.
    pub strategy: SortStrategy,
    /// Partitions with fewer entries than this are finished by insertion
    /// sort (quicksort strategy only). Zero disables the cutoff.
    pub insertion_cutoff: usize,
}

impl SortConfig {
    /// Insertion sort threshold used by [`SortConfig::default`].
    pub const DEFAULT_CUTOFF: usize = 15;

    /// Create a configuration for the given strategy with the default cutoff.
    pub fn new(strategy: SortStrategy) -> Self {
        Self {
            strategy,
            insertion_cutoff: Self::DEFAULT_CUTOFF,
        }
    }

    /// Plain 3-way quicksort with no insertion sort cutoff.
    pub const QUICK: Self = Self {
        strategy: SortStrategy::ThreeWayQuick,
        insertion_cutoff: 0,
    };

    /// LSD radix sort.
    pub const LSD: Self = Self {
        strategy: SortStrategy::LsdRadix,
        insertion_cutoff: 0,
    };

    /// Set the insertion sort cutoff.
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.insertion_cutoff = cutoff;
        self
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortStrategy::ThreeWayQuick)
    }
}

/// Block size level (1-9, where 9 = 900k bytes per block).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSize(u8);

impl BlockSize {
    /// Bytes per level step.
    pub const UNIT: usize = 100_000;

    /// Smallest blocks.
    pub const MIN: Self = Self(1);
    /// Largest blocks.
    pub const MAX: Self = Self(9);

    /// Create a new block size level (clamped to 1-9).
    pub fn new(level: u8) -> Self {
        Self(level.clamp(1, 9))
    }

    /// Get the level value.
    pub fn level(&self) -> u8 {
        self.0
    }

    /// Get the block size in bytes.
    pub fn bytes(&self) -> usize {
        self.0 as usize * Self::UNIT
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u8> for BlockSize {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}
