//! Benchmark support crate for icedit.
//!
//! Provides seeded planted-partition edge sources and parameter types used
//! by the Criterion benchmarks of graph construction and the induced-cost
//! heuristic.

pub mod error;
pub mod params;
pub mod source;
