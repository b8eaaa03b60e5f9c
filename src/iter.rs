use crate::keys::BitKey;
use crate::node::Node;

type StackEntry<'a, K> = (&'a Node, K);

/// In-order iterator over a bitrie, yielding each distinct value with its multiplicity in
/// ascending order.
///
/// Walks the trie without recursion. Each stack entry pairs a node with the value formed by the
/// bits on the path from the root to it. The stack never grows past `bit_width + 1` entries.
pub struct Iter<'a, K: BitKey> {
    stack: Vec<StackEntry<'a, K>>,
    // Next subtree to descend into, or None when the stack top is the next node to visit.
    current: Option<StackEntry<'a, K>>,
}

impl<'a, K: BitKey> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node>, bit_width: u32) -> Self {
        Self {
            stack: Vec::with_capacity(bit_width as usize + 1),
            current: root.map(|node| (node, K::zero())),
        }
    }
}

impl<'a, K: BitKey> Iterator for Iter<'a, K> {
    type Item = (K, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Run down the zero edges, stacking every node on the way.
            while let Some((node, prefix)) = self.current.take() {
                self.stack.push((node, prefix));
                self.current = node
                    .seek_child(0)
                    .map(|child| (child, prefix.push_bit(0)));
            }

            let (node, prefix) = self.stack.pop()?;
            self.current = node
                .seek_child(1)
                .map(|child| (child, prefix.push_bit(1)));

            if node.count > 0 {
                return Some((prefix, node.count));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::iter::Iter;
    use crate::tree::Bitrie;

    #[test]
    fn test_empty() {
        let mut iter: Iter<u32> = Iter::new(None, 8);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_distinct_with_counts() {
        let mut trie = Bitrie::<u16>::with_bit_width(7).unwrap();
        for v in [10, 1, 100, 1, 0, 50, 100] {
            trie.insert(v);
        }
        let entries: Vec<_> = trie.iter().collect();
        assert_eq!(entries, vec![(0, 1), (1, 2), (10, 1), (50, 1), (100, 2)]);
    }

    #[test]
    fn test_stack_bounded_by_bit_width() {
        let mut trie = Bitrie::<u64>::with_bit_width(20).unwrap();
        for v in (0..(1 << 20)).step_by(997) {
            trie.insert(v);
        }
        let mut iter = trie.iter();
        let mut max_depth = 0;
        while iter.next().is_some() {
            max_depth = max_depth.max(iter.stack.len());
        }
        assert!(max_depth <= 21, "stack depth {}", max_depth);
    }
}
