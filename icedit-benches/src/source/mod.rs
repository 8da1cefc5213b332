//! Synthetic benchmark edge sources.
//!
//! Generates seeded planted-partition similarity graphs: nodes are assigned
//! to hidden clusters, a share of pairs is recorded, and each recorded pair
//! attracts when both nodes share a cluster unless noise flips its sign.

mod errors;
mod planted;

pub use errors::SyntheticError;
pub use planted::{PlantedPartitionConfig, PlantedPartitionSource};
