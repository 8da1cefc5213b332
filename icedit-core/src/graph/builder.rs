//! Incremental, validating graph construction.

use std::collections::{HashMap, hash_map::Entry};

use crate::error::GraphError;

use super::{Edge, EdgeWeight, NodeId, StaticGraph, normalize};

/// Controls how repeated observations of the same pair are treated.
///
/// # Examples
/// ```
/// use icedit_core::{EdgeBundling, GraphBuilder};
///
/// let mut builder = GraphBuilder::new(2).with_bundling(EdgeBundling::Mean);
/// builder.add_edge(0, 1, 2.0)?;
/// builder.add_edge(1, 0, 4.0)?;
/// assert_eq!(builder.freeze().weight(0, 1), Some(3.0));
/// # Ok::<(), icedit_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeBundling {
    /// Every pair may be registered once; repeats are rejected.
    #[default]
    Reject,
    /// Repeated observations are summed into one weight.
    Sum,
    /// Repeated observations are averaged into one weight.
    Mean,
}

#[derive(Clone, Copy, Debug)]
struct Observation {
    total: EdgeWeight,
    count: usize,
}

/// Mutable graph under construction.
///
/// Nodes are the dense range `[0, node_count)`. Edges are undirected and
/// normalized so that `left < right`; registering `(v, u)` after `(u, v)`
/// addresses the same pair.
///
/// # Examples
/// ```
/// use icedit_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1, 1.5)?;
/// builder.add_edge(2, 1, -0.5)?;
/// let graph = builder.freeze();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(1, 2), Some(-0.5));
/// assert_eq!(graph.weight(0, 2), None);
/// # Ok::<(), icedit_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    node_count: usize,
    bundling: EdgeBundling,
    pairs: HashMap<(NodeId, NodeId), Observation>,
}

impl GraphBuilder {
    /// Creates an empty builder over `node_count` nodes that rejects repeated
    /// pairs.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            bundling: EdgeBundling::default(),
            pairs: HashMap::new(),
        }
    }

    /// Selects how repeated observations are combined.
    #[must_use]
    pub fn with_bundling(mut self, bundling: EdgeBundling) -> Self {
        self.bundling = bundling;
        self
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the configured bundling mode.
    #[must_use]
    #[rustfmt::skip]
    pub fn bundling(&self) -> EdgeBundling { self.bundling }

    /// Returns the number of distinct pairs registered so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.pairs.len() }

    /// Registers one weighted observation of the pair `(left, right)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when an endpoint is outside the
    /// node range, [`GraphError::SelfLoop`] when both endpoints coincide,
    /// [`GraphError::NonFiniteWeight`] for NaN or infinite weights or when a
    /// bundled sum overflows, and
    /// [`GraphError::DuplicateEdge`] when the pair was already registered and
    /// bundling is [`EdgeBundling::Reject`]. A rejected observation leaves the
    /// builder unchanged.
    pub fn add_edge(
        &mut self,
        left: NodeId,
        right: NodeId,
        weight: EdgeWeight,
    ) -> Result<(), GraphError> {
        for node in [left, right] {
            if node >= self.node_count {
                return Err(GraphError::InvalidNode {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        if left == right {
            return Err(GraphError::SelfLoop { node: left });
        }

        let (left, right) = normalize(left, right);
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { left, right });
        }

        match self.pairs.entry((left, right)) {
            Entry::Vacant(slot) => {
                slot.insert(Observation {
                    total: weight,
                    count: 1,
                });
            }
            Entry::Occupied(mut slot) => {
                if self.bundling == EdgeBundling::Reject {
                    return Err(GraphError::DuplicateEdge { left, right });
                }
                let observation = slot.get_mut();
                let total = observation.total + weight;
                if !total.is_finite() {
                    return Err(GraphError::NonFiniteWeight { left, right });
                }
                observation.total = total;
                observation.count = observation.count.saturating_add(1);
            }
        }
        Ok(())
    }

    /// Produces the immutable graph consumed by the heuristic.
    ///
    /// Edges are numbered in normalized pair order regardless of insertion
    /// order, so equal inputs always freeze into equal graphs.
    #[must_use]
    pub fn freeze(&self) -> StaticGraph {
        let mut edges: Vec<Edge> = self
            .pairs
            .iter()
            .map(|(&(left, right), observation)| {
                Edge::new(left, right, self.bundled_weight(*observation))
            })
            .collect();
        edges.sort_unstable_by_key(|edge| (edge.left(), edge.right()));
        StaticGraph::from_sorted_edges(self.node_count, edges)
    }

    fn bundled_weight(&self, observation: Observation) -> EdgeWeight {
        match self.bundling {
            EdgeBundling::Reject | EdgeBundling::Sum => observation.total,
            EdgeBundling::Mean => observation.total / observation.count as EdgeWeight,
        }
    }
}
