//! Immutable, read-optimized graph with compressed adjacency.

use std::{cmp::Ordering, collections::HashMap};

use crate::{error::GraphError, union_find::DisjointSet};

use super::{Edge, EdgeId, EdgeWeight, NodeId, normalize};

/// Adjacency entry: the neighbouring node and the edge leading to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    node: NodeId,
    edge: EdgeId,
}

impl Neighbor {
    /// Returns the neighbouring node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node(&self) -> NodeId { self.node }

    /// Returns the edge connecting to [`Self::node`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> EdgeId { self.edge }
}

/// Frozen weighted graph.
///
/// Neighbour lists are sorted by node id, which lets [`Self::triple_partners`]
/// merge two lists in linear time.
#[derive(Clone, Debug)]
pub struct StaticGraph {
    node_count: usize,
    edges: Vec<Edge>,
    offsets: Vec<usize>,
    adjacency: Vec<Neighbor>,
    index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl StaticGraph {
    /// Builds the compressed representation from unique, normalized edges
    /// sorted by `(left, right)`.
    pub(crate) fn from_sorted_edges(node_count: usize, edges: Vec<Edge>) -> Self {
        let mut offsets = vec![0usize; node_count.saturating_add(1)];
        for edge in &edges {
            offsets[edge.left() + 1] += 1;
            offsets[edge.right() + 1] += 1;
        }
        for node in 0..node_count {
            offsets[node + 1] += offsets[node];
        }

        let placeholder = Neighbor {
            node: 0,
            edge: EdgeId::new(0),
        };
        let mut adjacency = vec![placeholder; offsets[node_count]];
        let mut cursor = offsets.clone();
        let mut index = HashMap::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            let id = EdgeId::new(position);
            adjacency[cursor[edge.left()]] = Neighbor {
                node: edge.right(),
                edge: id,
            };
            cursor[edge.left()] += 1;
            adjacency[cursor[edge.right()]] = Neighbor {
                node: edge.left(),
                edge: id,
            };
            cursor[edge.right()] += 1;
            index.insert((edge.left(), edge.right()), id);
        }
        for node in 0..node_count {
            adjacency[offsets[node]..offsets[node + 1]].sort_unstable_by_key(|entry| entry.node);
        }

        Self {
            node_count,
            edges,
            offsets,
            adjacency,
            index,
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of recorded edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns every edge in normalized pair order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge with the given id, if it belongs to this graph.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Returns the neighbours of `node` sorted by node id.
    ///
    /// Nodes outside the graph have no neighbours.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        let (Some(&start), Some(&end)) = (self.offsets.get(node), self.offsets.get(node + 1))
        else {
            return &[];
        };
        self.adjacency.get(start..end).unwrap_or(&[])
    }

    /// Returns the number of recorded edges incident to `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Returns the id of the edge between `left` and `right`, in either order.
    #[must_use]
    pub fn edge_id(&self, left: NodeId, right: NodeId) -> Option<EdgeId> {
        self.index.get(&normalize(left, right)).copied()
    }

    /// Returns the recorded weight between `left` and `right`, in either order.
    #[must_use]
    pub fn weight(&self, left: NodeId, right: NodeId) -> Option<EdgeWeight> {
        self.edge_id(left, right)
            .and_then(|id| self.edge(id))
            .map(Edge::weight)
    }

    /// Computes the connected components induced by strictly positive edges.
    ///
    /// Every node appears in exactly one component; components are sorted
    /// ascending and ordered by their smallest node.
    #[must_use]
    pub fn positive_components(&self) -> Vec<Vec<NodeId>> {
        let mut components = DisjointSet::new(self.node_count);
        for edge in self.edges.iter().filter(|edge| edge.weight() > 0.0) {
            components.union(edge.left(), edge.right());
        }
        components.into_groups()
    }

    /// Extracts the subgraph induced by `nodes`.
    ///
    /// Local node `i` of the result corresponds to `nodes[i]`, so callers can
    /// map results back by indexing the same slice.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] when a node is outside this graph
    /// and [`GraphError::DuplicateNode`] when a node is listed twice.
    pub fn induced_subgraph(&self, nodes: &[NodeId]) -> Result<Self, GraphError> {
        let mut local_of: HashMap<NodeId, usize> = HashMap::with_capacity(nodes.len());
        for (local, &node) in nodes.iter().enumerate() {
            if node >= self.node_count {
                return Err(GraphError::InvalidNode {
                    node,
                    node_count: self.node_count,
                });
            }
            if local_of.insert(node, local).is_some() {
                return Err(GraphError::DuplicateNode { node });
            }
        }

        let mut edges = Vec::new();
        for (local, &node) in nodes.iter().enumerate() {
            for neighbor in self.neighbors(node) {
                let Some(&other) = local_of.get(&neighbor.node) else {
                    continue;
                };
                if local < other {
                    let weight = self.edges[neighbor.edge.index()].weight();
                    edges.push(Edge::new(local, other, weight));
                }
            }
        }
        edges.sort_unstable_by_key(|edge| (edge.left(), edge.right()));
        Ok(Self::from_sorted_edges(nodes.len(), edges))
    }

    /// Walks every third node adjacent to `left` or `right`.
    ///
    /// Each yielded [`TriplePartner`] carries the edges from the third node to
    /// both endpoints, `None` marking an unrecorded pair. The endpoints
    /// themselves are never yielded.
    #[must_use]
    pub fn triple_partners(&self, left: NodeId, right: NodeId) -> TriplePartners<'_> {
        TriplePartners {
            left,
            right,
            left_neighbors: self.neighbors(left),
            right_neighbors: self.neighbors(right),
        }
    }
}

/// Third node of a triple together with its edges to both endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriplePartner {
    /// The third node.
    pub node: NodeId,
    /// Edge between the left endpoint and [`Self::node`].
    pub via_left: Option<EdgeId>,
    /// Edge between the right endpoint and [`Self::node`].
    pub via_right: Option<EdgeId>,
}

impl TriplePartner {
    const fn only_left(neighbor: &Neighbor) -> Self {
        Self {
            node: neighbor.node,
            via_left: Some(neighbor.edge),
            via_right: None,
        }
    }

    const fn only_right(neighbor: &Neighbor) -> Self {
        Self {
            node: neighbor.node,
            via_left: None,
            via_right: Some(neighbor.edge),
        }
    }
}

/// Iterator returned by [`StaticGraph::triple_partners`].
#[derive(Clone, Debug)]
pub struct TriplePartners<'a> {
    left: NodeId,
    right: NodeId,
    left_neighbors: &'a [Neighbor],
    right_neighbors: &'a [Neighbor],
}

impl Iterator for TriplePartners<'_> {
    type Item = TriplePartner;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let partner = match (
                self.left_neighbors.split_first(),
                self.right_neighbors.split_first(),
            ) {
                (None, None) => return None,
                (Some((l, l_rest)), None) => {
                    self.left_neighbors = l_rest;
                    TriplePartner::only_left(l)
                }
                (None, Some((r, r_rest))) => {
                    self.right_neighbors = r_rest;
                    TriplePartner::only_right(r)
                }
                (Some((l, l_rest)), Some((r, r_rest))) => match l.node.cmp(&r.node) {
                    Ordering::Less => {
                        self.left_neighbors = l_rest;
                        TriplePartner::only_left(l)
                    }
                    Ordering::Greater => {
                        self.right_neighbors = r_rest;
                        TriplePartner::only_right(r)
                    }
                    Ordering::Equal => {
                        self.left_neighbors = l_rest;
                        self.right_neighbors = r_rest;
                        TriplePartner {
                            node: l.node,
                            via_left: Some(l.edge),
                            via_right: Some(r.edge),
                        }
                    }
                },
            };
            if partner.node != self.left && partner.node != self.right {
                return Some(partner);
            }
        }
    }
}
