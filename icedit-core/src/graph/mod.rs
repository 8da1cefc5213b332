//! Weighted graph representation consumed by the induced-cost heuristic.
//!
//! Graphs are assembled incrementally with [`GraphBuilder`], which validates
//! every observation and optionally bundles repeated pairs, and then frozen
//! into an immutable [`StaticGraph`] with compressed adjacency lists.
//!
//! Only recorded pairs are edges. A pair without a recorded weight never
//! ends up inside one cluster.

mod builder;
mod static_graph;

pub use self::{
    builder::{EdgeBundling, GraphBuilder},
    static_graph::{Neighbor, StaticGraph, TriplePartner, TriplePartners},
};

/// Dense node identifier in `[0, node_count)`.
pub type NodeId = usize;

/// Similarity weight of a node pair.
///
/// Positive weights pull the endpoints into one cluster, negative weights push
/// them apart, and the magnitude is the cost of acting against the sign.
pub type EdgeWeight = f64;

/// Dense identifier of an edge inside one [`StaticGraph`].
///
/// Edges are numbered in normalized pair order, so comparing two ids compares
/// their `(left, right)` pairs lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    #[rustfmt::skip]
    pub(crate) const fn new(index: usize) -> Self { Self(index) }

    /// Returns the position of the edge in [`StaticGraph::edges`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

/// A weighted edge in canonical undirected form (`left < right`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    left: NodeId,
    right: NodeId,
    weight: EdgeWeight,
}

impl Edge {
    pub(crate) const fn new(left: NodeId, right: NodeId, weight: EdgeWeight) -> Self {
        Self {
            left,
            right,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> NodeId { self.left }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> NodeId { self.right }

    /// Returns the (possibly bundled) edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> EdgeWeight { self.weight }
}

pub(crate) const fn normalize(left: NodeId, right: NodeId) -> (NodeId, NodeId) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}
