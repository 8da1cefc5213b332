//! Max-priority queue of undecided edges keyed by decisiveness.
//!
//! Induced costs live in dense arrays indexed by [`EdgeId`]; the queue only
//! holds each queued edge's current rank, so a cost change re-ranks its edge
//! in `O(log m)` through [`PriorityQueue::change_priority`].
//!
//! Ordering is deterministic: the larger `|icf - icp|` wins, and ties go to
//! the smaller edge id, i.e. the smaller normalized pair.

use std::cmp::{Ordering, Reverse};

use priority_queue::PriorityQueue;

use crate::graph::{EdgeId, EdgeWeight};

/// `|icf - icp|` under [`f64::total_cmp`] so it can serve as a queue priority.
#[derive(Clone, Copy, Debug)]
struct Decisiveness(EdgeWeight);

impl PartialEq for Decisiveness {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decisiveness {}

impl PartialOrd for Decisiveness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decisiveness {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Queue priority; the edge id makes every rank unique.
type Rank = (Decisiveness, Reverse<EdgeId>);

#[derive(Clone, Debug)]
pub(crate) struct EdgeHeap {
    icf: Vec<EdgeWeight>,
    icp: Vec<EdgeWeight>,
    queue: PriorityQueue<EdgeId, Rank>,
}

impl EdgeHeap {
    /// Creates an empty heap for `edge_count` edges with zero induced costs.
    pub(crate) fn new(edge_count: usize) -> Self {
        Self {
            icf: vec![0.0; edge_count],
            icp: vec![0.0; edge_count],
            queue: PriorityQueue::with_capacity(edge_count),
        }
    }

    /// Loads initial costs and enqueues every edge.
    pub(crate) fn init(&mut self, icf: Vec<EdgeWeight>, icp: Vec<EdgeWeight>) {
        debug_assert_eq!(icf.len(), icp.len(), "icf and icp must cover the same edges");
        self.icf = icf;
        self.icp = icp;
        let queue: PriorityQueue<EdgeId, Rank> = (0..self.icf.len())
            .map(EdgeId::new)
            .map(|edge| (edge, self.rank(edge)))
            .collect();
        self.queue = queue;
    }

    #[cfg(test)]
    #[rustfmt::skip]
    pub(crate) fn len(&self) -> usize { self.queue.len() }

    #[cfg(test)]
    #[rustfmt::skip]
    pub(crate) fn is_empty(&self) -> bool { self.queue.is_empty() }

    pub(crate) fn contains(&self, edge: EdgeId) -> bool {
        self.queue.get_priority(&edge).is_some()
    }

    pub(crate) fn icf(&self, edge: EdgeId) -> EdgeWeight {
        self.icf[edge.index()]
    }

    pub(crate) fn icp(&self, edge: EdgeId) -> EdgeWeight {
        self.icp[edge.index()]
    }

    /// Returns how strongly the induced costs favour one decision.
    pub(crate) fn decisiveness(&self, edge: EdgeId) -> EdgeWeight {
        (self.icf(edge) - self.icp(edge)).abs()
    }

    pub(crate) fn peek(&self) -> Option<EdgeId> {
        self.queue.peek().map(|(&edge, _)| edge)
    }

    pub(crate) fn pop_most_decisive(&mut self) -> Option<EdgeId> {
        self.queue.pop().map(|(edge, _)| edge)
    }

    /// Drops `edge` from the heap; returns `false` when it was not queued.
    pub(crate) fn remove(&mut self, edge: EdgeId) -> bool {
        self.queue.remove(&edge).is_some()
    }

    pub(crate) fn add_icf(&mut self, edge: EdgeId, delta: EdgeWeight) {
        self.icf[edge.index()] += delta;
        self.rerank(edge);
    }

    pub(crate) fn add_icp(&mut self, edge: EdgeId, delta: EdgeWeight) {
        self.icp[edge.index()] += delta;
        self.rerank(edge);
    }

    fn rank(&self, edge: EdgeId) -> Rank {
        (Decisiveness(self.decisiveness(edge)), Reverse(edge))
    }

    /// Re-ranks a queued edge; dequeued edges stay out.
    fn rerank(&mut self, edge: EdgeId) {
        let rank = self.rank(edge);
        self.queue.change_priority(&edge, rank);
    }
}
