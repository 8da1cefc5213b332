//! Union-find (disjoint set union) used to turn edge sets into node groups.
//!
//! Both the positive-component split and the final cluster extraction merge
//! endpoints of a filtered edge set and then read the groups back in
//! ascending node order, so every caller observes the same deterministic
//! grouping.

use crate::graph::NodeId;

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
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

    pub(crate) fn union(&mut self, left: usize, right: usize) -> usize {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return left;
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
        left
    }

    /// Groups every node by its root.
    ///
    /// Groups are sorted ascending and ordered by their smallest member.
    pub(crate) fn into_groups(mut self) -> Vec<Vec<NodeId>> {
        let node_count = self.parent.len();
        let mut slot_of_root = vec![usize::MAX; node_count];
        let mut groups: Vec<Vec<NodeId>> = Vec::new();
        for node in 0..node_count {
            let root = self.find(node);
            let slot = slot_of_root[root];
            if slot == usize::MAX {
                slot_of_root[root] = groups.len();
                groups.push(vec![node]);
            } else {
                groups[slot].push(node);
            }
        }
        groups
    }
}
