//! The bitrie: a binary trie whose root-to-node paths spell out the bits of integer keys, most
//! significant bit first.

use std::marker::PhantomData;

use crate::error::SortError;
use crate::iter::Iter;
use crate::keys::BitKey;
use crate::node::Node;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TrieStats {
    pub bit_width: u32,
    pub num_nodes: usize,
    /// Nodes with both children present.
    pub num_branches: usize,
    /// Terminal nodes, i.e. distinct values.
    pub num_leaves: usize,
    /// Inserted values, counting duplicates.
    pub num_values: usize,
}

/// A binary trie of fixed-width integer keys, counting how many times each key was inserted.
///
/// Every key is stored using exactly `bit_width` bits, so all terminal nodes sit at depth
/// `bit_width`. Nodes (including the root) are created lazily on insertion.
///
/// ```rust
/// use bitrie::Bitrie;
///
/// let mut trie = Bitrie::<u32>::with_bit_width(4).unwrap();
/// trie.insert(9);
/// trie.insert(3);
/// trie.insert(9);
///
/// assert_eq!(trie.count(9), 2);
/// assert_eq!(trie.to_sorted_vec(), vec![3, 9, 9]);
/// ```
pub struct Bitrie<K: BitKey> {
    root: Option<Box<Node>>,
    bit_width: u32,
    len: usize,
    num_nodes: usize,
    _phantom: PhantomData<K>,
}

impl<K: BitKey> Bitrie<K> {
    /// Create an empty trie storing keys with `bit_width` bits.
    ///
    /// Fails with [`SortError::InvalidBitWidth`] unless `1 <= bit_width <= K::BITS`.
    pub fn with_bit_width(bit_width: u32) -> Result<Self, SortError> {
        if bit_width == 0 || bit_width > K::BITS {
            return Err(SortError::InvalidBitWidth {
                requested: bit_width,
                max: K::BITS,
            });
        }
        Ok(Self::new_unchecked(bit_width))
    }

    pub(crate) fn new_unchecked(bit_width: u32) -> Self {
        debug_assert!(bit_width >= 1 && bit_width <= K::BITS);
        Self {
            root: None,
            bit_width,
            len: 0,
            num_nodes: 0,
            _phantom: PhantomData,
        }
    }

    #[inline]
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Number of inserted values, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nodes allocated so far, root included.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Insert `value`, walking its bits from position `bit_width - 1` down to 0 and creating
    /// missing nodes along the way.
    ///
    /// The caller guarantees the value is non-negative and fits in `bit_width` bits; use
    /// [`Bitrie::try_insert`] when that isn't known.
    pub fn insert(&mut self, value: K) {
        debug_assert!(value.fits(self.bit_width));

        let mut num_nodes = self.num_nodes;
        let mut cur: &mut Node = self.root.get_or_insert_with(|| {
            num_nodes += 1;
            Box::new(Node::new())
        });
        for pos in (0..self.bit_width).rev() {
            cur = cur.child_or_insert(value.bit_at(pos), &mut num_nodes);
        }
        cur.count += 1;

        self.num_nodes = num_nodes;
        self.len += 1;
    }

    /// Insert `value` after checking it is non-negative and fits the trie's bit width. Errors
    /// report the value's position in insertion order.
    pub fn try_insert(&mut self, value: K) -> Result<(), SortError> {
        if value.is_negative() {
            return Err(SortError::NegativeValue { index: self.len });
        }
        if !value.fits(self.bit_width) {
            return Err(SortError::ValueTooWide {
                index: self.len,
                bit_width: self.bit_width,
            });
        }
        self.insert(value);
        Ok(())
    }

    /// How many times `value` was inserted.
    pub fn count(&self, value: K) -> usize {
        if !value.fits(self.bit_width) {
            return 0;
        }
        let mut cur = match self.root.as_deref() {
            Some(root) => root,
            None => return 0,
        };
        for pos in (0..self.bit_width).rev() {
            cur = match cur.seek_child(value.bit_at(pos)) {
                Some(child) => child,
                None => return 0,
            };
        }
        cur.count
    }

    /// Distinct values in ascending order, with their multiplicities.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.bit_width)
    }

    /// All inserted values in non-decreasing order, duplicates repeated.
    pub fn to_sorted_vec(&self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.len);
        for (value, count) in self.iter() {
            sorted.extend(std::iter::repeat(value).take(count));
        }
        sorted
    }

    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            bit_width: self.bit_width,
            num_nodes: self.num_nodes,
            num_values: self.len,
            ..Default::default()
        };

        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            match node.num_children() {
                0 => stats.num_leaves += 1,
                2 => stats.num_branches += 1,
                _ => {}
            }
            stack.extend(node.children.iter().filter_map(|c| c.as_deref()));
        }
        stats
    }
}
