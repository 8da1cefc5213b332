//! Edge source abstractions feeding the cluster editor.

use crate::graph::{EdgeWeight, NodeId};

/// One weighted observation of an unordered node pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    /// First endpoint.
    pub left: NodeId,
    /// Second endpoint.
    pub right: NodeId,
    /// Similarity weight; positive attracts, negative repels.
    pub weight: EdgeWeight,
}

impl WeightedEdge {
    /// Creates an observation of the pair `(left, right)`.
    #[must_use]
    pub const fn new(left: NodeId, right: NodeId, weight: EdgeWeight) -> Self {
        Self {
            left,
            right,
            weight,
        }
    }
}

/// Abstraction over anything that can describe a weighted similarity graph.
///
/// Sources only enumerate observations; validation and bundling of repeated
/// pairs happen when the [`crate::ClusterEditor`] builds its graph.
///
/// # Examples
/// ```
/// use icedit_core::{EdgeSource, WeightedEdge};
///
/// struct Ring(usize);
///
/// impl EdgeSource for Ring {
///     fn name(&self) -> &str { "ring" }
///     fn node_count(&self) -> usize { self.0 }
///     fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
///         (0..self.0).map(|node| WeightedEdge::new(node, (node + 1) % self.0, 1.0))
///     }
/// }
///
/// let ring = Ring(4);
/// assert_eq!(ring.edges().count(), 4);
/// assert!(!ring.is_empty());
/// ```
pub trait EdgeSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the number of nodes; edges must reference `[0, node_count)`.
    fn node_count(&self) -> usize;

    /// Enumerates every weighted observation.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Returns whether the source describes no nodes at all.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// In-memory [`EdgeSource`] backed by a vector of observations.
///
/// # Examples
/// ```
/// use icedit_core::{EdgeList, EdgeSource};
///
/// let mut list = EdgeList::new("toy", 3);
/// list.push(0, 1, 2.0);
/// list.push(1, 2, -1.0);
/// assert_eq!(list.name(), "toy");
/// assert_eq!(list.edges().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    name: String,
    node_count: usize,
    edges: Vec<WeightedEdge>,
}

impl EdgeList {
    /// Creates an empty list over `node_count` nodes.
    #[must_use]
    pub fn new(name: impl Into<String>, node_count: usize) -> Self {
        Self {
            name: name.into(),
            node_count,
            edges: Vec::new(),
        }
    }

    /// Creates a list from `(left, right, weight)` triples.
    #[must_use]
    pub fn from_triples(
        name: impl Into<String>,
        node_count: usize,
        triples: impl IntoIterator<Item = (NodeId, NodeId, EdgeWeight)>,
    ) -> Self {
        let mut list = Self::new(name, node_count);
        list.extend(triples);
        list
    }

    /// Appends one observation. Validation is deferred to graph construction.
    pub fn push(&mut self, left: NodeId, right: NodeId, weight: EdgeWeight) {
        self.edges.push(WeightedEdge::new(left, right, weight));
    }

    /// Returns the number of stored observations.
    #[must_use]
    #[rustfmt::skip]
    pub fn observation_count(&self) -> usize { self.edges.len() }
}

impl Extend<(NodeId, NodeId, EdgeWeight)> for EdgeList {
    fn extend<I: IntoIterator<Item = (NodeId, NodeId, EdgeWeight)>>(&mut self, iter: I) {
        self.edges.extend(
            iter.into_iter()
                .map(|(left, right, weight)| WeightedEdge::new(left, right, weight)),
        );
    }
}

impl EdgeSource for EdgeList {
    fn name(&self) -> &str {
        &self.name
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_list_preserves_observation_order() {
        let list = EdgeList::from_triples("pairs", 4, [(3, 1, 1.0), (0, 2, -0.5), (1, 3, 2.0)]);

        let observed: Vec<WeightedEdge> = list.edges().collect();
        assert_eq!(
            observed,
            vec![
                WeightedEdge::new(3, 1, 1.0),
                WeightedEdge::new(0, 2, -0.5),
                WeightedEdge::new(1, 3, 2.0),
            ]
        );
        assert_eq!(list.observation_count(), 3);
        assert_eq!(list.node_count(), 4);
    }

    #[test]
    fn default_list_is_empty() {
        let list = EdgeList::default();
        assert!(list.is_empty());
        assert_eq!(list.edges().count(), 0);
    }
}
