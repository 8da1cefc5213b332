//! Benchmark parameter types.

use std::fmt;

/// Parameters for a planted-partition benchmark run.
#[derive(Clone, Debug)]
pub struct HeuristicBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of planted clusters.
    pub cluster_count: usize,
    /// Whether positive components are solved independently.
    pub component_splitting: bool,
}

impl fmt::Display for HeuristicBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.component_splitting {
            "split"
        } else {
            "whole"
        };
        write!(f, "n={},k={},{mode}", self.node_count, self.cluster_count)
    }
}
