//! Shared test utilities for `icedit-core`.

use icedit_test_support::proptest_profile::ProptestRunProfile;
use proptest::{prelude::*, test_runner::Config as ProptestConfig};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{
    graph::{EdgeWeight, GraphBuilder, NodeId, StaticGraph},
    solution::ClusterId,
};

const DEFAULT_MAX_NODES: usize = 18;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `ICEDIT_PBT_CASES` and
/// `ICEDIT_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestRunProfile::load(default_cases, DEFAULT_MAX_NODES).config()
}

fn max_nodes() -> usize {
    ProptestRunProfile::load(1, DEFAULT_MAX_NODES).max_nodes()
}

/// Builds a graph from `(left, right, weight)` triples that must be valid.
pub(crate) fn graph_from(node_count: usize, edges: &[(NodeId, NodeId, EdgeWeight)]) -> StaticGraph {
    let mut builder = GraphBuilder::new(node_count);
    for &(left, right, weight) in edges {
        builder
            .add_edge(left, right, weight)
            .expect("test edges must be valid");
    }
    builder.freeze()
}

/// Weight layouts used by the generated fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Arbitrary)]
pub(crate) enum GraphShape {
    /// Disjoint cliques: attracting inside, repelling or unrecorded across.
    #[weight(2)]
    PlantedCliques,
    /// Planted cliques with a share of pairs whose sign is flipped.
    #[weight(3)]
    NoisyCliques,
    /// Few recorded pairs with random signs.
    #[weight(2)]
    Sparse,
    /// Every pair recorded with a random sign.
    #[weight(1)]
    Dense,
    /// Noisy cliques with fractional weights, so cost updates round.
    #[weight(2)]
    Fractional,
}

#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    pub(crate) shape: GraphShape,
    pub(crate) graph: StaticGraph,
    /// Ground-truth clusters for the planted shapes, canonically ordered.
    pub(crate) planted: Vec<Vec<NodeId>>,
}

pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>())
        .prop_map(|(shape, seed)| generate_fixture(shape, &mut SmallRng::seed_from_u64(seed)))
}

/// Generates a fixture with weights in `[-5, 5]`.
///
/// Every shape but [`GraphShape::Fractional`] uses integral weights, which
/// keep incremental cost updates exact; fractional fixtures rely on the
/// tolerance of [`costs_agree`].
pub(crate) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let node_count = rng.gen_range(0..=max_nodes());
    let cluster_count = rng.gen_range(1..=node_count.max(1).div_ceil(3));
    let labels: Vec<usize> = (0..node_count)
        .map(|_| rng.gen_range(0..cluster_count))
        .collect();

    let mut builder = GraphBuilder::new(node_count);
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            let together = labels[left] == labels[right];
            let magnitude = EdgeWeight::from(rng.gen_range(1_u8..=5));
            let weight = match shape {
                GraphShape::PlantedCliques if together => magnitude,
                GraphShape::PlantedCliques if rng.gen_bool(0.5) => continue,
                GraphShape::PlantedCliques => -magnitude,
                GraphShape::NoisyCliques => {
                    let sign = if together { 1.0 } else { -1.0 };
                    if rng.gen_bool(0.15) { -sign * magnitude } else { sign * magnitude }
                }
                GraphShape::Fractional => {
                    let sign = if together { 1.0 } else { -1.0 };
                    let magnitude = rng.gen_range(0.05..5.0);
                    if rng.gen_bool(0.15) { -sign * magnitude } else { sign * magnitude }
                }
                GraphShape::Sparse if rng.gen_bool(0.7) => continue,
                GraphShape::Sparse | GraphShape::Dense => EdgeWeight::from(rng.gen_range(-5_i8..=5)),
            };
            builder
                .add_edge(left, right, weight)
                .expect("generated pairs are unique and in range");
        }
    }

    let mut planted: Vec<Vec<NodeId>> = vec![Vec::new(); cluster_count];
    for (node, &label) in labels.iter().enumerate() {
        planted[label].push(node);
    }
    planted.retain(|cluster| !cluster.is_empty());
    planted.sort_unstable_by_key(|cluster| cluster[0]);

    GraphFixture {
        shape,
        graph: builder.freeze(),
        planted,
    }
}

/// Editing cost implied by a partition, computed directly from the weights.
pub(crate) fn partition_cost(graph: &StaticGraph, assignments: &[ClusterId]) -> EdgeWeight {
    graph
        .edges()
        .iter()
        .map(|edge| {
            let together = assignments[edge.left()] == assignments[edge.right()];
            match (together, edge.weight()) {
                (true, weight) if weight < 0.0 => -weight,
                (false, weight) if weight > 0.0 => weight,
                _ => 0.0,
            }
        })
        .sum()
}

/// Compares two costs, treating infinities as equal only to themselves.
pub(crate) fn costs_agree(left: EdgeWeight, right: EdgeWeight) -> bool {
    if left.is_infinite() || right.is_infinite() {
        return left == right;
    }
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}
