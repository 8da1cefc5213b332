//! Error types for synthetic benchmark data generation.

/// Errors that may occur while preparing benchmark edge sources.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested cluster count was zero.
    #[error("cluster count must be greater than zero")]
    ZeroClusters,
    /// The configured cluster count exceeded the available nodes.
    #[error("cluster count ({cluster_count}) must not exceed node count ({node_count})")]
    ClusterCountExceedsNodeCount {
        /// Number of clusters requested.
        cluster_count: usize,
        /// Number of nodes requested.
        node_count: usize,
    },
    /// A probability parameter was outside `[0, 1]` or not finite.
    #[error("invalid probability parameter `{parameter}`")]
    InvalidProbability {
        /// Name of the invalid parameter.
        parameter: &'static str,
    },
}
