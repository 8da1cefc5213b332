//! Planted-partition edge generator.

use crate::source::SyntheticError;
use icedit_core::{EdgeSource, WeightedEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Configuration for a planted-partition similarity graph.
#[derive(Clone, Debug)]
pub struct PlantedPartitionConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Number of hidden clusters; each receives at least one node.
    pub cluster_count: usize,
    /// Probability that a pair is recorded at all.
    pub density: f64,
    /// Probability that a recorded pair's sign contradicts the partition.
    pub noise: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A seeded [`EdgeSource`] over a planted partition.
///
/// Attracting weights fall in `[1, 5)` and repelling weights in `[-5, -1)`.
#[derive(Clone, Debug)]
pub struct PlantedPartitionSource {
    node_count: usize,
    cluster_count: usize,
    labels: Vec<usize>,
    edges: Vec<WeightedEdge>,
}

impl PlantedPartitionSource {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid.
    pub fn generate(config: &PlantedPartitionConfig) -> Result<Self, SyntheticError> {
        validate_config(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);

        // The first `cluster_count` nodes seed one cluster each.
        let labels: Vec<usize> = (0..config.node_count)
            .map(|node| {
                if node < config.cluster_count {
                    node
                } else {
                    rng.gen_range(0..config.cluster_count)
                }
            })
            .collect();

        let mut edges = Vec::new();
        for (left, &left_label) in labels.iter().enumerate() {
            for (right, &right_label) in labels.iter().enumerate().skip(left + 1) {
                if !rng.gen_bool(config.density) {
                    continue;
                }
                let attracts = (left_label == right_label) != rng.gen_bool(config.noise);
                let weight = if attracts {
                    rng.gen_range(1.0..5.0)
                } else {
                    rng.gen_range(-5.0..-1.0)
                };
                edges.push(WeightedEdge::new(left, right, weight));
            }
        }

        Ok(Self {
            node_count: config.node_count,
            cluster_count: config.cluster_count,
            labels,
            edges,
        })
    }

    /// Returns the number of planted clusters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns the planted cluster label of every node.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}

impl EdgeSource for PlantedPartitionSource {
    fn name(&self) -> &str {
        "planted-partition"
    }

    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.edges.iter().copied()
    }
}

fn validate_config(config: &PlantedPartitionConfig) -> Result<(), SyntheticError> {
    if config.node_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if config.cluster_count > config.node_count {
        return Err(SyntheticError::ClusterCountExceedsNodeCount {
            cluster_count: config.cluster_count,
            node_count: config.node_count,
        });
    }
    validate_probability(config.density, "density")?;
    validate_probability(config.noise, "noise")
}

fn validate_probability(value: f64, parameter: &'static str) -> Result<(), SyntheticError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SyntheticError::InvalidProbability { parameter })
    }
}
