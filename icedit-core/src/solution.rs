//! Result types for cluster-editing runs.
//!
//! A solution is a partition of the node set into clusters together with the
//! total editing cost that produced it. Construction validates the partition
//! and brings it into a canonical order so equal partitions compare equal.

use thiserror::Error;

use crate::graph::{EdgeWeight, NodeId};

/// Error returned when a set of clusters does not partition the node range.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolutionError {
    /// A cluster names a node outside `[0, node_count)`.
    #[error("cluster member {node} is outside the node range of {node_count}")]
    NodeOutOfRange {
        /// The offending node id.
        node: NodeId,
        /// Number of nodes the partition must cover.
        node_count: usize,
    },
    /// A node belongs to more than one cluster or appears twice in one.
    #[error("node {node} is assigned more than once")]
    DuplicateNode {
        /// The repeated node id.
        node: NodeId,
    },
    /// A node does not belong to any cluster.
    #[error("node {node} is not assigned to any cluster")]
    MissingNode {
        /// The smallest unassigned node id.
        node: NodeId,
    },
    /// A cluster has no members.
    #[error("cluster {index} is empty")]
    EmptyCluster {
        /// Position of the empty cluster in the supplied list.
        index: usize,
    },
    /// The total cost is negative or not finite.
    #[error("total editing cost must be finite and non-negative")]
    InvalidCost,
}

/// Represents the output of a cluster-editing run.
///
/// Clusters are sorted ascending and ordered by their smallest member, so
/// [`ClusterId`] `i` always names the `i`-th cluster in that order.
///
/// # Examples
/// ```
/// use icedit_core::{ClusterEditingSolution, ClusterId};
///
/// let solution = ClusterEditingSolution::from_clusters(1.5, vec![vec![3, 1], vec![0, 2]], 4)?;
/// assert_eq!(solution.cluster_count(), 2);
/// assert_eq!(solution.cluster(0), Some(&[0, 2][..]));
/// assert_eq!(solution.cluster_of(3), Some(ClusterId::new(1)));
/// assert_eq!(solution.total_cost(), 1.5);
/// # Ok::<(), icedit_core::SolutionError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterEditingSolution {
    clusters: Vec<Vec<NodeId>>,
    assignments: Vec<ClusterId>,
    total_cost: EdgeWeight,
}

impl ClusterEditingSolution {
    /// Builds a solution from explicit clusters.
    ///
    /// Member order inside a cluster and the order of clusters are
    /// irrelevant; both are canonicalized. An empty cluster list is accepted
    /// when `node_count == 0`.
    ///
    /// # Errors
    /// Returns [`SolutionError::InvalidCost`] for a negative or non-finite
    /// cost, [`SolutionError::EmptyCluster`] for a cluster without members,
    /// [`SolutionError::NodeOutOfRange`] for a member outside the node range,
    /// [`SolutionError::DuplicateNode`] when a node is listed twice and
    /// [`SolutionError::MissingNode`] when a node is not listed at all.
    pub fn from_clusters(
        total_cost: EdgeWeight,
        mut clusters: Vec<Vec<NodeId>>,
        node_count: usize,
    ) -> Result<Self, SolutionError> {
        if !total_cost.is_finite() || total_cost < 0.0 {
            return Err(SolutionError::InvalidCost);
        }

        let mut seen = vec![false; node_count];
        for (index, cluster) in clusters.iter_mut().enumerate() {
            if cluster.is_empty() {
                return Err(SolutionError::EmptyCluster { index });
            }
            for &node in cluster.iter() {
                let slot = seen
                    .get_mut(node)
                    .ok_or(SolutionError::NodeOutOfRange { node, node_count })?;
                if *slot {
                    return Err(SolutionError::DuplicateNode { node });
                }
                *slot = true;
            }
            cluster.sort_unstable();
        }
        if let Some(node) = seen.iter().position(|assigned| !assigned) {
            return Err(SolutionError::MissingNode { node });
        }

        clusters.sort_unstable_by_key(|cluster| cluster[0]);
        let mut assignments = vec![ClusterId::new(0); node_count];
        for (id, cluster) in clusters.iter().enumerate() {
            for &node in cluster {
                assignments[node] = ClusterId::new(id as u64);
            }
        }

        Ok(Self {
            clusters,
            assignments,
            total_cost,
        })
    }

    /// Returns the number of clusters.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.clusters.len() }

    /// Returns the members of the `index`-th cluster, sorted ascending.
    #[must_use]
    pub fn cluster(&self, index: usize) -> Option<&[NodeId]> {
        self.clusters.get(index).map(Vec::as_slice)
    }

    /// Returns every cluster in canonical order.
    #[must_use]
    #[rustfmt::skip]
    pub fn clusters(&self) -> &[Vec<NodeId>] { &self.clusters }

    /// Returns the total editing cost.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> EdgeWeight { self.total_cost }

    /// Returns the cluster of every node, indexed by node id.
    #[must_use]
    #[rustfmt::skip]
    pub fn assignments(&self) -> &[ClusterId] { &self.assignments }

    /// Returns the number of nodes covered by the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.assignments.len() }

    /// Returns the cluster containing `node`.
    #[must_use]
    pub fn cluster_of(&self, node: NodeId) -> Option<ClusterId> {
        self.assignments.get(node).copied()
    }
}

/// Identifier assigned to a cluster.
///
/// # Examples
/// ```
/// use icedit_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn get(self) -> u64 { self.0 }
}
