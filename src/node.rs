/// A bitrie node. Children are indexed by bit value and owned exclusively by their parent.
pub(crate) struct Node {
    pub(crate) children: [Option<Box<Node>>; 2],
    /// Number of inserted values whose bit path ends here. Only terminal nodes are non-zero.
    pub(crate) count: usize,
}

impl Node {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            children: [None, None],
            count: 0,
        }
    }

    #[inline]
    pub(crate) fn seek_child(&self, bit: usize) -> Option<&Node> {
        self.children[bit].as_deref()
    }

    /// Returns the child for `bit`, creating it if absent. `num_created` is bumped for every
    /// new node.
    #[inline]
    pub(crate) fn child_or_insert(&mut self, bit: usize, num_created: &mut usize) -> &mut Node {
        self.children[bit].get_or_insert_with(|| {
            *num_created += 1;
            Box::new(Node::new())
        })
    }

    pub(crate) fn num_children(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }
}
