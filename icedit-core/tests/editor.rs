//! Tests for the `ClusterEditor` orchestration API.

mod common;

use common::Similarities;
use icedit_core::{
    ClusterEditingError, ClusterEditingErrorCode, ClusterEditorBuilder, EdgeBundling, EdgeList,
    GraphBuilder, GraphError, GraphErrorCode,
};
use icedit_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

/// Two groups joined by one weakly attracting pair; 0-4, 1-3 and 2-4 are
/// unrecorded.
#[fixture]
fn two_groups() -> Similarities {
    Similarities::new(
        "two-groups",
        vec![
            vec![None, Some(3.0), Some(2.0), Some(-1.0), None],
            vec![Some(3.0), None, Some(1.0), None, Some(-2.0)],
            vec![Some(2.0), Some(1.0), None, Some(0.5), None],
            vec![Some(-1.0), None, Some(0.5), None, Some(2.0)],
            vec![None, Some(-2.0), None, Some(2.0), None],
        ],
    )
}

/// Two attracting triangles, an attracting pair and an isolated node.
#[fixture]
fn islands() -> EdgeList {
    EdgeList::from_triples(
        "islands",
        9,
        [
            (0, 1, 1.0),
            (1, 2, 2.0),
            (0, 2, 1.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (3, 5, 3.0),
            (6, 7, 0.5),
            (2, 3, -1.0),
        ],
    )
}

#[rstest]
fn builder_defaults() {
    let builder = ClusterEditorBuilder::new();
    assert_eq!(builder.bundling(), EdgeBundling::Reject);
    assert!(!builder.bundle_edges());
    assert!(builder.component_splitting());

    let editor = builder.build();
    assert_eq!(editor.bundling(), EdgeBundling::Reject);
    assert!(editor.component_splitting());
}

#[rstest]
#[case::split(true)]
#[case::whole(false)]
fn cuts_the_weak_bridge(#[case] splitting: bool, two_groups: Similarities) {
    let editor = ClusterEditorBuilder::new()
        .with_component_splitting(splitting)
        .build();
    let solution = editor.run(&two_groups).expect("run must succeed");
    assert_eq!(solution.clusters(), &[vec![0, 1, 2], vec![3, 4]]);
    assert_eq!(solution.total_cost(), 0.5);
}

#[rstest]
#[case::split(true)]
#[case::whole(false)]
fn separates_islands(#[case] splitting: bool, islands: EdgeList) {
    let editor = ClusterEditorBuilder::new()
        .with_component_splitting(splitting)
        .build();
    let solution = editor.run(&islands).expect("run must succeed");
    assert_eq!(
        solution.clusters(),
        &[vec![0, 1, 2], vec![3, 4, 5], vec![6, 7], vec![8]]
    );
    assert_eq!(solution.total_cost(), 0.0);
    let ids: Vec<u64> = solution.assignments().iter().map(|id| id.get()).collect();
    assert_eq!(ids, vec![0, 0, 0, 1, 1, 1, 2, 2, 3]);
}

#[rstest]
fn repeated_runs_are_identical(two_groups: Similarities) {
    let editor = ClusterEditorBuilder::new().build();
    let first = editor.run(&two_groups).expect("run must succeed");
    let second = editor.run(&two_groups).expect("run must succeed");
    assert_eq!(first, second);
}

#[rstest]
fn solve_graph_accepts_frozen_graphs() {
    let mut builder = GraphBuilder::new(4);
    builder.add_edge(0, 1, 2.0).expect("edge is valid");
    builder.add_edge(2, 3, -1.0).expect("edge is valid");
    let graph = builder.freeze();

    let solution = ClusterEditorBuilder::new()
        .build()
        .solve_graph(&graph)
        .expect("solve must succeed");
    assert_eq!(solution.clusters(), &[vec![0, 1], vec![2], vec![3]]);
}

#[rstest]
fn repeated_pairs_fail_without_bundling() {
    let source = EdgeList::from_triples("repeats", 2, [(0, 1, 1.0), (1, 0, 2.0)]);
    let err = ClusterEditorBuilder::new()
        .build()
        .run(&source)
        .expect_err("repeated pairs must be rejected");

    assert_eq!(err.code(), ClusterEditingErrorCode::InvalidGraph);
    assert_eq!(err.graph_code(), Some(GraphErrorCode::DuplicateEdge));
    assert!(matches!(
        err,
        ClusterEditingError::Graph { ref source_name, error: GraphError::DuplicateEdge { left: 0, right: 1 } }
            if &**source_name == "repeats"
    ));
}

#[rstest]
#[case::sum(EdgeBundling::Sum)]
#[case::mean(EdgeBundling::Mean)]
fn repeated_pairs_are_bundled(#[case] bundling: EdgeBundling) {
    // Alone, the repelling observation would keep the pair apart.
    let source = EdgeList::from_triples("repeats", 2, [(0, 1, -1.0), (1, 0, 4.0)]);
    let solution = ClusterEditorBuilder::new()
        .with_bundling(bundling)
        .build()
        .run(&source)
        .expect("bundled pairs are accepted");
    assert_eq!(solution.clusters(), &[vec![0, 1]]);
    assert_eq!(solution.total_cost(), 0.0);
}

#[rstest]
fn invalid_edges_name_their_source() {
    let source = EdgeList::from_triples("broken", 2, [(0, 2, 1.0)]);
    let err = ClusterEditorBuilder::new()
        .build()
        .run(&source)
        .expect_err("out-of-range edges must be rejected");
    assert_eq!(err.graph_code(), Some(GraphErrorCode::InvalidNode));
    assert_eq!(err.heuristic_code(), None);
    assert!(err.to_string().contains("broken"));
}

#[rstest]
fn run_records_core_tracing(islands: EdgeList) {
    let editor = ClusterEditorBuilder::new().build();
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let solution = tracing::subscriber::with_default(subscriber, || editor.run(&islands))
        .expect("run must succeed");
    assert_eq!(solution.cluster_count(), 4);

    let run_span = layer.span("core.run").expect("core.run span must exist");
    assert_eq!(run_span.field("edge_source"), Some("islands"));
    assert_eq!(run_span.field("nodes"), Some("9"));
    assert_eq!(run_span.field("bundling"), Some("Reject"));
    assert_eq!(run_span.field("component_splitting"), Some("true"));

    let solve_span = layer
        .span("core.solve_graph")
        .expect("core.solve_graph span must exist");
    assert_eq!(solve_span.field("edges"), Some("8"));

    // Only the two triangles need a heuristic run.
    assert_eq!(layer.span_count("heuristic.solve"), 2);
    assert!(layer.has_event(Level::DEBUG, "split graph into positive components"));
    assert!(layer.has_event(Level::INFO, "cluster editing completed"));
}

#[rstest]
fn whole_graph_runs_one_heuristic(islands: EdgeList) {
    let editor = ClusterEditorBuilder::new()
        .with_component_splitting(false)
        .build();
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || editor.run(&islands))
        .expect("run must succeed");

    assert_eq!(layer.span_count("heuristic.solve"), 1);
    let span = layer
        .span("heuristic.solve")
        .expect("heuristic.solve span must exist");
    assert_eq!(span.field("nodes"), Some("9"));
}

#[rstest]
fn run_logs_empty_source_warning() {
    let editor = ClusterEditorBuilder::new().build();
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let solution = tracing::subscriber::with_default(subscriber, || {
        editor.run(&EdgeList::new("empty", 0))
    })
    .expect("empty sources yield an empty solution");
    assert_eq!(solution.cluster_count(), 0);
    assert_eq!(solution.total_cost(), 0.0);

    assert!(layer.has_event(
        Level::WARN,
        "edge source has no nodes, returning an empty solution"
    ));
}
