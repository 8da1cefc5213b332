//! Per-edge decision state.

/// Decision state of an edge during a heuristic run.
///
/// `Unknown` is the only non-terminal state. Once an edge is forbidden or
/// permanent it stays that way for the rest of the run.
///
/// # Examples
/// ```
/// use icedit_core::EdgeState;
///
/// assert_eq!(EdgeState::Unknown.transition(EdgeState::Permanent), Some(EdgeState::Permanent));
/// assert_eq!(EdgeState::Permanent.transition(EdgeState::Forbidden), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// Not decided yet.
    #[default]
    Unknown,
    /// Committed absent: the endpoints end up in different clusters.
    Forbidden,
    /// Committed present: the endpoints end up in the same cluster.
    Permanent,
}

impl EdgeState {
    /// Returns `true` for [`Self::Forbidden`] and [`Self::Permanent`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Checks the move from `self` to `requested`.
    ///
    /// Only `Unknown` may move, and only into a terminal state. Every other
    /// request, including re-entering the current terminal state, yields
    /// `None`.
    #[must_use]
    pub const fn transition(self, requested: Self) -> Option<Self> {
        match (self, requested) {
            (Self::Unknown, Self::Forbidden | Self::Permanent) => Some(requested),
            _ => None,
        }
    }
}
