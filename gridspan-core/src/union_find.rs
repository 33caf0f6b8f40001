//! Union-find (disjoint set union) used by Kruskal's algorithm and by
//! spanning-tree validation.
//!
//! Each node starts in its own component. `find` compresses every visited
//! node onto the root iteratively, and `union` attaches the lower-rank root
//! beneath the higher-rank one. A fresh structure is built per computation.

use crate::graph::NodeId;

/// Disjoint-set forest with path compression and union by rank.
///
/// Node ids must lie in `[0, node_count)`; the [`crate::Graph`] invariants
/// guarantee this for every edge the engines feed in.
///
/// # Examples
/// ```
/// use gridspan_core::DisjointSet;
///
/// let mut set = DisjointSet::new(3);
/// assert!(set.union(0, 1));
/// assert!(!set.union(1, 0));
/// assert!(set.same(0, 1));
/// assert_eq!(set.components(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<NodeId>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `node_count` singleton components, each with rank zero.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    /// Returns the canonical root of `node`'s component.
    ///
    /// Every node visited on the way to the root is reattached directly to it.
    pub fn find(&mut self, mut node: NodeId) -> NodeId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `true` when two distinct components were merged and `false`
    /// when both nodes already shared a component. On equal ranks the root of
    /// `left` becomes the parent and its rank grows by one.
    pub fn union(&mut self, left: NodeId, right: NodeId) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when both nodes belong to the same component.
    pub fn same(&mut self, left: NodeId, right: NodeId) -> bool {
        self.find(left) == self.find(right)
    }

    /// Returns the number of live components.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the number of nodes tracked by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the forest tracks no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }
}
