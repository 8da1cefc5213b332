//! Induced-cost heuristic for weighted cluster editing.
//!
//! Turns a graph of signed pairwise similarities into a disjoint union of
//! cliques by greedily committing the most decisive pair first. Start with
//! [`ClusterEditorBuilder`] for the full pipeline, or drive
//! [`InducedCostHeuristic`] directly on a frozen [`StaticGraph`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod editor;
mod error;
mod graph;
mod heuristic;
mod solution;
mod source;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::ClusterEditorBuilder,
    editor::ClusterEditor,
    error::{
        ClusterEditingError, ClusterEditingErrorCode, GraphError, GraphErrorCode, HeuristicError,
        HeuristicErrorCode, Result,
    },
    graph::{
        Edge, EdgeBundling, EdgeId, EdgeWeight, GraphBuilder, Neighbor, NodeId, StaticGraph,
        TriplePartner, TriplePartners,
    },
    heuristic::{EdgeState, InducedCostHeuristic},
    solution::{ClusterEditingSolution, ClusterId, SolutionError},
    source::{EdgeList, EdgeSource, WeightedEdge},
};
