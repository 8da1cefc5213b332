//! Cluster-editing orchestration.
//!
//! Provides the [`ClusterEditor`] entry point, which turns an
//! [`EdgeSource`] into a frozen graph, optionally splits it into positive
//! components and dispatches each non-trivial component to its own
//! induced-cost heuristic run.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    error::{ClusterEditingError, HeuristicError},
    graph::{EdgeBundling, EdgeWeight, GraphBuilder, NodeId, StaticGraph},
    heuristic::InducedCostHeuristic,
    solution::ClusterEditingSolution,
    source::EdgeSource,
};

/// Components up to this size are already clusters: a single node, or two
/// nodes joined by an attracting edge.
const TRIVIAL_COMPONENT: usize = 2;

/// Entry point for running cluster editing.
///
/// # Examples
/// ```
/// use icedit_core::{ClusterEditorBuilder, EdgeList};
///
/// let source = EdgeList::from_triples(
///     "two-groups",
///     5,
///     [(0, 1, 3.0), (1, 2, 2.0), (0, 2, 1.0), (3, 4, 2.0), (2, 3, -1.0)],
/// );
/// let solution = ClusterEditorBuilder::new().build().run(&source)?;
/// assert_eq!(solution.clusters(), &[vec![0, 1, 2], vec![3, 4]]);
/// assert_eq!(solution.total_cost(), 0.0);
/// # Ok::<(), icedit_core::ClusterEditingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClusterEditor {
    bundling: EdgeBundling,
    component_splitting: bool,
}

impl ClusterEditor {
    pub(crate) fn new(bundling: EdgeBundling, component_splitting: bool) -> Self {
        Self {
            bundling,
            component_splitting,
        }
    }

    /// Returns how repeated observations are treated when building graphs.
    #[must_use]
    #[rustfmt::skip]
    pub fn bundling(&self) -> EdgeBundling { self.bundling }

    /// Returns whether positive components are solved independently.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_splitting(&self) -> bool { self.component_splitting }

    /// Builds a graph from `source` and solves it.
    ///
    /// # Errors
    /// Returns [`ClusterEditingError::Graph`] when the source supplies an
    /// edge the graph builder rejects, and any error of
    /// [`Self::solve_graph`].
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            edge_source = %source.name(),
            nodes = source.node_count(),
            bundling = ?self.bundling,
            component_splitting = self.component_splitting,
        ),
    )]
    pub fn run<S: EdgeSource>(&self, source: &S) -> Result<ClusterEditingSolution> {
        if source.is_empty() {
            warn!(
                edge_source = source.name(),
                "edge source has no nodes, returning an empty solution"
            );
        }
        let graph = self.build_graph(source)?;
        self.solve_graph(&graph)
    }

    fn build_graph<S: EdgeSource>(&self, source: &S) -> Result<StaticGraph> {
        let mut builder = GraphBuilder::new(source.node_count()).with_bundling(self.bundling);
        for edge in source.edges() {
            builder
                .add_edge(edge.left, edge.right, edge.weight)
                .map_err(|error| {
                    warn!(edge_source = source.name(), %error, "edge rejected");
                    ClusterEditingError::Graph {
                        source_name: Arc::from(source.name()),
                        error,
                    }
                })?;
        }
        Ok(builder.freeze())
    }

    /// Solves an already frozen graph.
    ///
    /// # Errors
    /// Returns [`ClusterEditingError::Heuristic`] when a heuristic run
    /// violates one of its invariants and
    /// [`ClusterEditingError::Component`] when a component cannot be
    /// extracted.
    #[instrument(
        name = "core.solve_graph",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn solve_graph(&self, graph: &StaticGraph) -> Result<ClusterEditingSolution> {
        let solution = if self.component_splitting {
            self.solve_components(graph)?
        } else {
            InducedCostHeuristic::new(graph).solve()?
        };
        info!(
            clusters = solution.cluster_count(),
            total_cost = solution.total_cost(),
            "cluster editing completed"
        );
        Ok(solution)
    }

    fn solve_components(&self, graph: &StaticGraph) -> Result<ClusterEditingSolution> {
        let components = graph.positive_components();
        debug!(components = components.len(), "split graph into positive components");

        let mut clusters: Vec<Vec<NodeId>> = Vec::with_capacity(components.len());
        let mut total_cost: EdgeWeight = 0.0;
        for component in components {
            if component.len() <= TRIVIAL_COMPONENT {
                clusters.push(component);
                continue;
            }

            let subgraph = graph
                .induced_subgraph(&component)
                .map_err(|error| ClusterEditingError::Component { error })?;
            let local = InducedCostHeuristic::new(&subgraph).solve()?;
            debug!(
                nodes = component.len(),
                edges = subgraph.edge_count(),
                clusters = local.cluster_count(),
                cost = local.total_cost(),
                "solved component"
            );
            total_cost += local.total_cost();
            clusters.extend(
                local
                    .clusters()
                    .iter()
                    .map(|cluster| cluster.iter().map(|&node| component[node]).collect()),
            );
        }

        ClusterEditingSolution::from_clusters(total_cost, clusters, graph.node_count())
            .map_err(|error| HeuristicError::from(error).into())
    }
}
