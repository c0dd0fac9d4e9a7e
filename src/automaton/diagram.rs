//! Static transition-graph metadata
//!
//! The machine's structure is fixed: three states, four edges. The UI's
//! diagram pane draws from these tables instead of hard-coding labels, so
//! the picture on screen and the simulator in [`super::machine`] can only
//! drift apart in one place.

use super::state::State;

/// One labeled edge of the transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: State,
    pub to: State,
    pub label: &'static str,
}

impl Edge {
    /// True for edges that loop back to their own state.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// The three states, in left-to-right display order.
pub const STATES: [State; 3] = [State::Start, State::Match, State::Accept];

/// The four transitions: push loop, separator hand-off, pop loop, and the
/// final move on the bottom sentinel.
pub const EDGES: [Edge; 4] = [
    Edge {
        from: State::Start,
        to: State::Start,
        label: "a/b, push",
    },
    Edge {
        from: State::Start,
        to: State::Match,
        label: "c",
    },
    Edge {
        from: State::Match,
        to: State::Match,
        label: "a/b, pop",
    },
    Edge {
        from: State::Match,
        to: State::Accept,
        label: "z",
    },
];

/// The edge leaving `from` for `to`, if the graph has one.
pub fn edge_between(from: State, to: State) -> Option<&'static Edge> {
    EDGES.iter().find(|e| e.from == from && e.to == to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_shape_is_fixed() {
        assert_eq!(STATES.len(), 3);
        assert_eq!(EDGES.len(), 4);
        assert_eq!(EDGES.iter().filter(|e| e.is_loop()).count(), 2);
        assert!(edge_between(State::Start, State::Match).is_some());
        assert!(edge_between(State::Match, State::Accept).is_some());
        assert!(edge_between(State::Accept, State::Start).is_none());
    }
}
