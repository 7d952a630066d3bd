//! Union-Find (Disjoint Set Union) over node ids
//!
//! - Path compression: O(α(n)) find operations
//! - Union by rank: balanced trees
//!
//! Tracks which constraint graph nodes have been collapsed into a shared
//! representative.
//!
//! # References
//! - Tarjan, R. E. "Efficiency of a Good But Not Linear Set Union Algorithm" (1975)

use crate::features::points_to::domain::NodeId;

#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    /// Parent pointers (self-loop = root)
    parent: Vec<u32>,

    /// Rank (tree height upper bound) for union by rank
    rank: Vec<u8>,

    /// Number of disjoint sets
    set_count: usize,
}

impl UnionFind {
    /// Create a Union-Find with n singleton elements (0..n-1)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    /// Ensure element exists in the structure
    pub fn make_set(&mut self, x: NodeId) {
        let old_len = self.parent.len();
        let new_len = x.index() + 1;
        if new_len > old_len {
            self.parent.extend(old_len as u32..new_len as u32);
            self.rank.resize(new_len, 0);
            self.set_count += new_len - old_len;
        }
    }

    /// Find the representative of `x`, compressing the path behind it
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let idx = x.index();
        if idx >= self.parent.len() {
            self.make_set(x);
            return x;
        }

        let mut root = x.index() as u32;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = idx as u32;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        NodeId::new(root)
    }

    /// Find without path compression (for read-only queries)
    pub fn find_readonly(&self, x: NodeId) -> NodeId {
        let mut current = x.index() as u32;
        if current as usize >= self.parent.len() {
            return x;
        }
        while self.parent[current as usize] != current {
            current = self.parent[current as usize];
        }
        NodeId::new(current)
    }

    /// Union two sets by rank
    ///
    /// Returns `(root, absorbed)`: the surviving representative and the
    /// former root now pointing to it, or `None` if already joined.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> Option<(NodeId, NodeId)> {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return None;
        }

        let rx = root_x.index();
        let ry = root_y.index();
        let (root, absorbed) = if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = root_y.index() as u32;
            (root_y, root_x)
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = root_x.index() as u32;
            (root_x, root_y)
        } else {
            self.parent[ry] = root_x.index() as u32;
            self.rank[rx] += 1;
            (root_x, root_y)
        };

        self.set_count -= 1;
        Some((root, absorbed))
    }

    #[inline]
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets
    #[inline]
    pub fn count(&self) -> usize {
        self.set_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
