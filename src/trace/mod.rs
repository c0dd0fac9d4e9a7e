//! Execution traces
//!
//! Every run of the machine produces a [`RunResult`]: the verdict plus the
//! full list of [`TraceEntry`] records, one per transition attempt. An entry
//! is captured at the *start* of each attempt, before the machine inspects
//! the input, so the trace shows the exact configuration each decision was
//! made from. Rejected runs keep whatever trace accumulated before the dead
//! end; the trace is diagnostic output, not an error.
//!
//! Entries carry owned stack copies. Nothing in a finished trace aliases the
//! machine that produced it.

use crate::automaton::state::State;
use crate::automaton::symbol::StackSymbol;
use std::fmt;

/// One recorded machine configuration: state, input cursor, stack contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub state: State,
    /// Index of the next input character to be examined.
    pub cursor: usize,
    /// Stack contents at capture time, bottom first.
    pub stack: Vec<StackSymbol>,
}

impl TraceEntry {
    pub fn new(state: State, cursor: usize, stack: Vec<StackSymbol>) -> Self {
        TraceEntry {
            state,
            cursor,
            stack,
        }
    }
}

impl fmt::Display for TraceEntry {
    /// Render as e.g. `State: q0, Pos: 2, Stack: [z, a, b]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State: {}, Pos: {}, Stack: [", self.state, self.cursor)?;
        for (i, symbol) in self.stack.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "]")
    }
}

/// The outcome of one run: verdict plus the recorded trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub accepted: bool,
    pub trace: Vec<TraceEntry>,
}

impl RunResult {
    /// A rejection carrying no trace at all.
    ///
    /// Produced by the substring scanner when the input fails validation or
    /// when no factor accepts; a direct simulation always records at least
    /// one entry.
    pub fn rejected() -> Self {
        RunResult {
            accepted: false,
            trace: Vec::new(),
        }
    }

    /// Human-readable verdict label.
    pub fn verdict(&self) -> &'static str {
        if self.accepted {
            "Accepted"
        } else {
            "Rejected"
        }
    }
}
