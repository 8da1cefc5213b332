//! Error types for the cluster-editing core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{graph::NodeId, heuristic::EdgeState, solution::SolutionError};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while registering edges with a
/// [`crate::GraphBuilder`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a node outside `[0, node_count)`.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNode {
        /// The offending node id.
        node: NodeId,
        /// Number of nodes the builder was created for.
        node_count: usize,
    },
    /// Both endpoints of an edge were the same node.
    #[error("self-loop on node {node} is not allowed")]
    SelfLoop {
        /// The node referenced twice.
        node: NodeId,
    },
    /// The same pair was registered twice while bundling was disabled.
    #[error("edge ({left}, {right}) was registered more than once")]
    DuplicateEdge {
        /// Smaller endpoint of the repeated pair.
        left: NodeId,
        /// Larger endpoint of the repeated pair.
        right: NodeId,
    },
    /// A node subset listed the same node more than once.
    #[error("node {node} appears more than once in the requested subset")]
    DuplicateNode {
        /// The repeated node id.
        node: NodeId,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// Smaller endpoint of the pair.
        left: NodeId,
        /// Larger endpoint of the pair.
        right: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a node outside the node range.
        InvalidNode => InvalidNode { .. } => "GRAPH_INVALID_NODE",
        /// Both endpoints of an edge were the same node.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The same pair was registered twice while bundling was disabled.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// A node subset listed the same node more than once.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// An internal invariant of the induced-cost heuristic was violated.
///
/// These errors indicate a defect in cost propagation rather than bad input;
/// a run that reports one never yields a solution.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeuristicError {
    /// An edge was asked to enter a state it cannot reach from its current one.
    #[error("edge ({left}, {right}) cannot move from {current:?} to {requested:?}")]
    ConflictingTransition {
        /// Smaller endpoint of the edge.
        left: NodeId,
        /// Larger endpoint of the edge.
        right: NodeId,
        /// State the edge is currently in.
        current: EdgeState,
        /// State that was requested.
        requested: EdgeState,
    },
    /// Propagation forced an edge to be both forbidden and permanent.
    #[error("edge ({left}, {right}) is forced both forbidden and permanent")]
    ConflictingForcedCosts {
        /// Smaller endpoint of the edge.
        left: NodeId,
        /// Larger endpoint of the edge.
        right: NodeId,
    },
    /// The edge heap ran dry while undecided edges remained.
    #[error("edge heap is exhausted but {remaining} edge(s) are still undecided")]
    HeapExhausted {
        /// Number of edges still in the `Unknown` state.
        remaining: usize,
    },
    /// The final clustering did not partition the node set.
    #[error("heuristic produced an invalid partition: {error}")]
    InvalidSolution {
        #[from]
        /// Underlying partition check failure.
        error: SolutionError,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeuristicError`] variants.
    enum HeuristicErrorCode for HeuristicError {
        /// An edge was asked to leave a terminal state.
        ConflictingTransition => ConflictingTransition { .. } => "HEURISTIC_CONFLICTING_TRANSITION",
        /// Propagation forced an edge both ways.
        ConflictingForcedCosts => ConflictingForcedCosts { .. } => "HEURISTIC_CONFLICTING_FORCED_COSTS",
        /// The edge heap ran dry while undecided edges remained.
        HeapExhausted => HeapExhausted { .. } => "HEURISTIC_HEAP_EXHAUSTED",
        /// The final clustering did not partition the node set.
        InvalidSolution => InvalidSolution { .. } => "HEURISTIC_INVALID_SOLUTION",
    }
}

/// Error type produced when running a [`crate::ClusterEditor`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ClusterEditingError {
    /// The [`crate::EdgeSource`] supplied an edge the graph builder rejected.
    #[error("edge source `{source_name}` is invalid: {error}")]
    Graph {
        /// Identifier for the edge source that produced the invalid edge.
        source_name: Arc<str>,
        #[source]
        /// Underlying construction error.
        error: GraphError,
    },
    /// A positive component could not be extracted from the frozen graph.
    #[error("failed to extract positive component: {error}")]
    Component {
        #[source]
        /// Underlying extraction error.
        error: GraphError,
    },
    /// The heuristic aborted on an internal invariant violation.
    #[error("induced-cost heuristic failed: {error}")]
    Heuristic {
        #[source]
        /// Underlying invariant violation.
        error: HeuristicError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ClusterEditingError`] variants.
    enum ClusterEditingErrorCode for ClusterEditingError {
        /// The edge source supplied an invalid edge.
        InvalidGraph => Graph { .. } => "CLUSTER_EDITING_INVALID_GRAPH",
        /// A positive component could not be extracted.
        ComponentExtraction => Component { .. } => "CLUSTER_EDITING_COMPONENT_EXTRACTION",
        /// The heuristic aborted on an internal invariant violation.
        HeuristicFailure => Heuristic { .. } => "CLUSTER_EDITING_HEURISTIC_FAILURE",
    }
}

impl ClusterEditingError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated while
    /// building the graph or extracting a component.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error, .. } | Self::Component { error } => Some(error.code()),
            Self::Heuristic { .. } => None,
        }
    }
}

impl From<HeuristicError> for ClusterEditingError {
    fn from(error: HeuristicError) -> Self {
        Self::Heuristic { error }
    }
}

impl ClusterEditingError {
    /// Retrieve the inner [`HeuristicErrorCode`] when a heuristic run failed.
    pub const fn heuristic_code(&self) -> Option<HeuristicErrorCode> {
        match self {
            Self::Heuristic { error } => Some(error.code()),
            Self::Graph { .. } | Self::Component { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ClusterEditingError>;
