//! Sorting through a bitrie: pick a bit width, insert every value, read them back in order.

use std::marker::PhantomData;

use num_traits::Unsigned;

use crate::error::SortError;
use crate::keys::{required_bit_width, BitKey};
use crate::tree::{Bitrie, TrieStats};

/// How many bits each value is inserted with.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum BitWidth {
    /// The bit length of the largest input, at least 1.
    #[default]
    Auto,
    /// Exactly this many bits. Values needing more are rejected.
    Fixed(u32),
}

/// A configured bitrie sort over keys of type `K`.
///
/// ```rust
/// use bitrie::{BitWidth, SortError, Sorter};
///
/// let sorter = Sorter::<u16>::new().bit_width(BitWidth::Fixed(4));
/// assert_eq!(sorter.try_sort(&[9, 2, 15]), Ok(vec![2, 9, 15]));
/// assert_eq!(
///     sorter.try_sort(&[9, 16]),
///     Err(SortError::ValueTooWide { index: 1, bit_width: 4 })
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sorter<K: BitKey> {
    bit_width: BitWidth,
    _phantom: PhantomData<K>,
}

impl<K: BitKey> Default for Sorter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BitKey> Sorter<K> {
    pub fn new() -> Self {
        Self {
            bit_width: BitWidth::Auto,
            _phantom: PhantomData,
        }
    }

    pub fn bit_width(mut self, bit_width: BitWidth) -> Self {
        self.bit_width = bit_width;
        self
    }

    /// Sort `values` into a new vector, leaving the input untouched.
    ///
    /// Fails on the first negative value, or on a value wider than a fixed bit width.
    pub fn try_sort(&self, values: &[K]) -> Result<Vec<K>, SortError> {
        Ok(self.sort_with_stats(values)?.0)
    }

    /// Like [`Sorter::try_sort`], also returning the statistics of the trie that was built.
    /// Empty input builds no trie and reports `None`.
    pub fn sort_with_stats(&self, values: &[K]) -> Result<(Vec<K>, Option<TrieStats>), SortError> {
        let Some(trie) = self.build(values)? else {
            return Ok((Vec::new(), None));
        };
        Ok((traverse(&trie), Some(trie.stats())))
    }

    fn build(&self, values: &[K]) -> Result<Option<Bitrie<K>>, SortError> {
        if values.is_empty() {
            return Ok(None);
        }

        let bit_width = match self.bit_width {
            BitWidth::Auto => {
                let mut max_value = K::zero();
                for (index, &v) in values.iter().enumerate() {
                    if v.is_negative() {
                        return Err(SortError::NegativeValue { index });
                    }
                    max_value = max_value.max(v);
                }
                required_bit_width(max_value)
            }
            BitWidth::Fixed(bit_width) => {
                if bit_width == 0 || bit_width > K::BITS {
                    return Err(SortError::InvalidBitWidth {
                        requested: bit_width,
                        max: K::BITS,
                    });
                }
                for (index, &v) in values.iter().enumerate() {
                    if v.is_negative() {
                        return Err(SortError::NegativeValue { index });
                    }
                    if !v.fits(bit_width) {
                        return Err(SortError::ValueTooWide { index, bit_width });
                    }
                }
                bit_width
            }
        };

        Ok(Some(build_trie(values, bit_width)))
    }
}

/// Insert every value into a fresh trie. Values must already be known to fit `bit_width`.
fn build_trie<K: BitKey>(values: &[K], bit_width: u32) -> Bitrie<K> {
    #[cfg(feature = "tracing")]
    let start = std::time::Instant::now();

    let mut trie = Bitrie::new_unchecked(bit_width);
    for &v in values {
        trie.insert(v);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        values = values.len(),
        bit_width,
        nodes = trie.num_nodes(),
        elapsed = ?start.elapsed(),
        "built bitrie"
    );

    trie
}

/// Read the trie back in ascending order.
fn traverse<K: BitKey>(trie: &Bitrie<K>) -> Vec<K> {
    #[cfg(feature = "tracing")]
    let start = std::time::Instant::now();

    let sorted = trie.to_sorted_vec();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        values = sorted.len(),
        elapsed = ?start.elapsed(),
        "traversed bitrie"
    );

    sorted
}

/// Sort unsigned integers with a bitrie, returning a new vector.
///
/// ```rust
/// assert_eq!(
///     bitrie::sort(&[10u32, 1, 100, 1, 0, 50, 100]),
///     vec![0, 1, 1, 10, 50, 100, 100]
/// );
/// ```
pub fn sort<K: BitKey + Unsigned>(values: &[K]) -> Vec<K> {
    let Some(&max_value) = values.iter().max() else {
        return Vec::new();
    };
    traverse(&build_trie(values, required_bit_width(max_value)))
}

/// Sort integers of any primitive type, failing with [`SortError::NegativeValue`] at the first
/// negative input.
///
/// ```rust
/// use bitrie::SortError;
///
/// assert_eq!(bitrie::try_sort(&[3i64, 0, 2]), Ok(vec![0, 2, 3]));
/// assert_eq!(
///     bitrie::try_sort(&[3i64, -1, -2]),
///     Err(SortError::NegativeValue { index: 1 })
/// );
/// ```
pub fn try_sort<K: BitKey>(values: &[K]) -> Result<Vec<K>, SortError> {
    Sorter::new().try_sort(values)
}
