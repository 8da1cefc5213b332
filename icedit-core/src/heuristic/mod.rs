//! Greedy induced-cost heuristic for weighted cluster editing.
//!
//! Every undecided edge carries two induced costs: `icf`, the cost the
//! graph is forced to pay if the edge is forbidden, and `icp`, the cost if it
//! is made permanent. The heuristic repeatedly commits the edge whose costs
//! disagree the most, propagates the decision into every triple through that
//! edge and then commits whatever the propagation has made inevitable. When
//! no undecided edge remains, the permanent edges describe the clusters.

mod heap;
mod state;
mod triple;

use std::collections::VecDeque;

use tracing::{debug, error, instrument, trace};

use crate::{
    error::HeuristicError,
    graph::{Edge, EdgeId, EdgeWeight, StaticGraph},
    solution::ClusterEditingSolution,
    union_find::DisjointSet,
};

use self::{
    heap::EdgeHeap,
    triple::{
        FORBIDDEN_WEIGHT, PERMANENT_WEIGHT, effective_weight, flip_cost, icf_contribution,
        icp_contribution, own_icf, own_icp,
    },
};

pub use self::state::EdgeState;

/// One committed decision, reported by [`InducedCostHeuristic::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Step {
    pub(crate) edge: EdgeId,
    pub(crate) decision: EdgeState,
    pub(crate) forced: bool,
    pub(crate) cost: EdgeWeight,
}

/// Single-use solver state for one frozen graph.
///
/// The graph is borrowed immutably; the heap, edge states and forced
/// work-list are owned by the run and discarded by [`Self::solve`].
///
/// # Examples
/// ```
/// use icedit_core::{GraphBuilder, InducedCostHeuristic};
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1, 2.0)?;
/// builder.add_edge(1, 2, 2.0)?;
/// builder.add_edge(0, 2, -1.0)?;
/// let graph = builder.freeze();
///
/// let solution = InducedCostHeuristic::new(&graph).solve()?;
/// assert_eq!(solution.cluster_count(), 1);
/// assert_eq!(solution.total_cost(), 1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct InducedCostHeuristic<'g> {
    graph: &'g StaticGraph,
    states: Vec<EdgeState>,
    heap: EdgeHeap,
    total_cost: EdgeWeight,
    forced: VecDeque<EdgeId>,
    enqueued: Vec<bool>,
    undecided: usize,
}

impl<'g> InducedCostHeuristic<'g> {
    /// Computes the initial induced costs of every edge in `graph`.
    ///
    /// Runs in `O(Σ (deg(u) + deg(v)))` over all edges `uv`.
    #[must_use]
    pub fn new(graph: &'g StaticGraph) -> Self {
        let edge_count = graph.edge_count();
        let mut icf = Vec::with_capacity(edge_count);
        let mut icp = Vec::with_capacity(edge_count);
        for edge in graph.edges() {
            let (forbid, merge) = initial_costs(graph, edge);
            icf.push(forbid);
            icp.push(merge);
        }

        let mut heap = EdgeHeap::new(edge_count);
        heap.init(icf, icp);
        Self {
            graph,
            states: vec![EdgeState::Unknown; edge_count],
            heap,
            total_cost: 0.0,
            forced: VecDeque::new(),
            enqueued: vec![false; edge_count],
            undecided: edge_count,
        }
    }

    /// Returns the editing cost committed so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> EdgeWeight { self.total_cost }

    /// Returns the current state of `edge`, or `None` for a foreign id.
    #[must_use]
    pub fn state(&self, edge: EdgeId) -> Option<EdgeState> {
        self.states.get(edge.index()).copied()
    }

    /// Runs the heuristic to completion.
    ///
    /// # Errors
    /// Returns a [`HeuristicError`] when cost propagation breaks one of its
    /// invariants. No partial solution is produced in that case.
    #[instrument(
        name = "heuristic.solve",
        err,
        skip(self),
        fields(nodes = self.graph.node_count(), edges = self.graph.edge_count()),
    )]
    pub fn solve(mut self) -> Result<ClusterEditingSolution, HeuristicError> {
        let mut decisions = 0usize;
        let mut forced = 0usize;
        while let Some(steps) = self.step()? {
            for step in &steps {
                let record = self.graph.edges()[step.edge.index()];
                trace!(
                    left = record.left(),
                    right = record.right(),
                    decision = ?step.decision,
                    forced = step.forced,
                    cost = step.cost,
                    "edge committed"
                );
            }
            decisions += steps.len();
            forced += steps.iter().filter(|step| step.forced).count();
        }
        debug!(decisions, forced, cost = self.total_cost, "all edges decided");
        self.finish()
    }

    /// Commits the most decisive edge and every decision it forces.
    ///
    /// Returns `None` once the heap is empty.
    pub(crate) fn step(&mut self) -> Result<Option<Vec<Step>>, HeuristicError> {
        let Some(edge) = self.heap.pop_most_decisive() else {
            return Ok(None);
        };
        let decision = if self.heap.icf(edge) <= self.heap.icp(edge) {
            EdgeState::Forbidden
        } else {
            EdgeState::Permanent
        };

        let mut steps = vec![self.commit(edge, decision, false)?];
        self.drain_forced(&mut steps)?;
        Ok(Some(steps))
    }

    fn commit(
        &mut self,
        edge: EdgeId,
        requested: EdgeState,
        forced: bool,
    ) -> Result<Step, HeuristicError> {
        let index = edge.index();
        let record = self.graph.edges()[index];
        let current = self.states[index];
        let Some(next) = current.transition(requested) else {
            error!(
                left = record.left(),
                right = record.right(),
                ?current,
                ?requested,
                "edge state transition rejected"
            );
            return Err(HeuristicError::ConflictingTransition {
                left: record.left(),
                right: record.right(),
                current,
                requested,
            });
        };

        self.heap.remove(edge);
        self.states[index] = next;
        self.undecided -= 1;
        let cost = flip_cost(record.weight(), next);
        self.total_cost += cost;

        match next {
            EdgeState::Forbidden => self.update_triple_forbidden(&record),
            EdgeState::Permanent => self.update_triple_permanent(&record),
            EdgeState::Unknown => {}
        }

        record_decision(forced);
        Ok(Step {
            edge,
            decision: next,
            forced,
            cost,
        })
    }

    fn update_triple_forbidden(&mut self, edge: &Edge) {
        self.update_triples(edge, FORBIDDEN_WEIGHT);
    }

    fn update_triple_permanent(&mut self, edge: &Edge) {
        self.update_triples(edge, PERMANENT_WEIGHT);
    }

    /// Moves every triple through `edge` from its raw weight to `after`.
    fn update_triples(&mut self, edge: &Edge, after: EdgeWeight) {
        let graph = self.graph;
        let before = edge.weight();
        for partner in graph.triple_partners(edge.left(), edge.right()) {
            if let Some(left_edge) = partner.via_left {
                let other = self.effective(partner.via_right);
                self.shift_costs(left_edge, other, before, after);
            }
            if let Some(right_edge) = partner.via_right {
                let other = self.effective(partner.via_left);
                self.shift_costs(right_edge, other, before, after);
            }
        }
    }

    /// Re-evaluates the triple part of `edge` whose third side moved from
    /// `before` to `after` while its second side has weight `other`.
    fn shift_costs(
        &mut self,
        edge: EdgeId,
        other: EdgeWeight,
        before: EdgeWeight,
        after: EdgeWeight,
    ) {
        if self.states[edge.index()].is_terminal() {
            return;
        }
        let icf_delta = icf_contribution(after, other) - icf_contribution(before, other);
        if icf_delta != 0.0 {
            self.heap.add_icf(edge, icf_delta);
        }
        let icp_delta = icp_contribution(after, other) - icp_contribution(before, other);
        if icp_delta != 0.0 {
            self.heap.add_icp(edge, icp_delta);
        }

        let forced = self.heap.icf(edge).is_infinite() || self.heap.icp(edge).is_infinite();
        if forced && !self.enqueued[edge.index()] {
            self.enqueued[edge.index()] = true;
            self.forced.push_back(edge);
        }
    }

    fn effective(&self, edge: Option<EdgeId>) -> EdgeWeight {
        edge.map_or(FORBIDDEN_WEIGHT, |id| {
            effective_weight(self.states[id.index()], self.graph.edges()[id.index()].weight())
        })
    }

    /// Commits every queued edge whose outcome propagation has fixed.
    fn drain_forced(&mut self, steps: &mut Vec<Step>) -> Result<(), HeuristicError> {
        while let Some(edge) = self.forced.pop_front() {
            if self.states[edge.index()].is_terminal() {
                continue;
            }
            let Some(decision) = self.forced_decision(edge)? else {
                continue;
            };
            steps.push(self.commit(edge, decision, true)?);
        }
        Ok(())
    }

    fn forced_decision(&self, edge: EdgeId) -> Result<Option<EdgeState>, HeuristicError> {
        match (
            self.heap.icf(edge).is_infinite(),
            self.heap.icp(edge).is_infinite(),
        ) {
            (true, true) => {
                let record = self.graph.edges()[edge.index()];
                error!(
                    left = record.left(),
                    right = record.right(),
                    "edge is forced both forbidden and permanent"
                );
                Err(HeuristicError::ConflictingForcedCosts {
                    left: record.left(),
                    right: record.right(),
                })
            }
            (true, false) => Ok(Some(EdgeState::Permanent)),
            (false, true) => Ok(Some(EdgeState::Forbidden)),
            (false, false) => Ok(None),
        }
    }

    fn finish(self) -> Result<ClusterEditingSolution, HeuristicError> {
        if self.undecided > 0 {
            error!(
                remaining = self.undecided,
                "edge heap exhausted with undecided edges"
            );
            return Err(HeuristicError::HeapExhausted {
                remaining: self.undecided,
            });
        }

        let mut clusters = DisjointSet::new(self.graph.node_count());
        for (edge, state) in self.graph.edges().iter().zip(&self.states) {
            if *state == EdgeState::Permanent {
                clusters.union(edge.left(), edge.right());
            }
        }
        let solution = ClusterEditingSolution::from_clusters(
            self.total_cost,
            clusters.into_groups(),
            self.graph.node_count(),
        )?;
        record_total_cost(solution.total_cost());
        Ok(solution)
    }
}

/// Induced costs of `edge` while every pair is still undecided.
pub(crate) fn initial_costs(graph: &StaticGraph, edge: &Edge) -> (EdgeWeight, EdgeWeight) {
    let weight_of = |id: Option<EdgeId>| {
        id.and_then(|id| graph.edge(id))
            .map_or(FORBIDDEN_WEIGHT, Edge::weight)
    };
    let mut icf = own_icf(edge.weight());
    let mut icp = own_icp(edge.weight());
    for partner in graph.triple_partners(edge.left(), edge.right()) {
        let left = weight_of(partner.via_left);
        let right = weight_of(partner.via_right);
        icf += icf_contribution(left, right);
        icp += icp_contribution(left, right);
    }
    (icf, icp)
}

#[cfg(feature = "metrics")]
fn record_decision(forced: bool) {
    metrics::counter!("icedit_decisions_total").increment(1);
    if forced {
        metrics::counter!("icedit_forced_decisions_total").increment(1);
    }
}

#[cfg(not(feature = "metrics"))]
fn record_decision(_forced: bool) {}

#[cfg(feature = "metrics")]
fn record_total_cost(cost: EdgeWeight) {
    metrics::histogram!("icedit_total_cost").record(cost);
}

#[cfg(not(feature = "metrics"))]
fn record_total_cost(_cost: EdgeWeight) {}
