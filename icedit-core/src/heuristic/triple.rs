//! Induced-cost contributions of a single triple.
//!
//! For an edge `uv` and a third node `w`, the pair weights `s(uw)` and
//! `s(vw)` decide what forbidding or merging `uv` costs through `w`:
//!
//! - forbidding `uv` while both `uw` and `vw` attract means one of them must
//!   be cut, costing the cheaper of the two;
//! - merging `uv` while exactly one of `uw`, `vw` attracts means the
//!   attracting one must be cut or the repelling one inserted, again at the
//!   cheaper price.
//!
//! Decided pairs take part with an infinite weight (`+∞` permanent, `-∞`
//! forbidden), as do pairs without a recorded weight (`-∞`). An infinite
//! contribution therefore marks a decision that is already implied.

use crate::graph::EdgeWeight;

use super::EdgeState;

/// Weight seen by the triple arithmetic for a forbidden or unrecorded pair.
pub(crate) const FORBIDDEN_WEIGHT: EdgeWeight = EdgeWeight::NEG_INFINITY;

/// Weight seen by the triple arithmetic for a permanent pair.
pub(crate) const PERMANENT_WEIGHT: EdgeWeight = EdgeWeight::INFINITY;

pub(crate) const fn effective_weight(state: EdgeState, weight: EdgeWeight) -> EdgeWeight {
    match state {
        EdgeState::Unknown => weight,
        EdgeState::Forbidden => FORBIDDEN_WEIGHT,
        EdgeState::Permanent => PERMANENT_WEIGHT,
    }
}

/// Cost of forbidding an edge, charged by the edge itself.
pub(crate) fn own_icf(weight: EdgeWeight) -> EdgeWeight {
    weight.max(0.0)
}

/// Cost of making an edge permanent, charged by the edge itself.
pub(crate) fn own_icp(weight: EdgeWeight) -> EdgeWeight {
    (-weight).max(0.0)
}

pub(crate) fn icf_contribution(uw: EdgeWeight, vw: EdgeWeight) -> EdgeWeight {
    if uw > 0.0 && vw > 0.0 {
        uw.min(vw)
    } else {
        0.0
    }
}

pub(crate) fn icp_contribution(uw: EdgeWeight, vw: EdgeWeight) -> EdgeWeight {
    if (uw > 0.0 && vw < 0.0) || (uw < 0.0 && vw > 0.0) {
        uw.abs().min(vw.abs())
    } else {
        0.0
    }
}

/// Cost paid when an edge of `weight` is committed to `state`.
pub(crate) fn flip_cost(weight: EdgeWeight, state: EdgeState) -> EdgeWeight {
    match state {
        EdgeState::Forbidden => own_icf(weight),
        EdgeState::Permanent => own_icp(weight),
        EdgeState::Unknown => 0.0,
    }
}
