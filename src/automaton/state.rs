//! Control states of the automaton
//!
//! The machine has exactly three states:
//! - [`State::Start`] (`q0`): reading the first half, pushing symbols
//! - [`State::Match`] (`q1`): reading the second half, popping symbols
//! - [`State::Accept`]: terminal, reached only from `q1` on the sentinel
//!
//! Rejection is not a state. A run that cannot continue simply stops with a
//! negative verdict, leaving the machine in whichever state it reached.

use std::fmt;

/// A control state of the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    Match,
    Accept,
}

impl State {
    /// Conventional short label, used in traces and the transition diagram.
    pub fn label(self) -> &'static str {
        match self {
            State::Start => "q0",
            State::Match => "q1",
            State::Accept => "accept",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
