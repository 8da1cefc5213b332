//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator and editor failures with `?`
//! instead of calling `.expect()`.

use crate::source::SyntheticError;
use icedit_core::{ClusterEditingError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic edge generation failed.
    #[error("synthetic source generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building a graph from generated edges failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The warm-up editor run failed.
    #[error("cluster editing failed: {0}")]
    ClusterEditing(#[from] ClusterEditingError),
}
