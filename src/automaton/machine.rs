//! The deterministic pushdown machine
//!
//! Recognizes strings of the form `w c reverse(w)` where `w` is any (possibly
//! empty) string over `{a, b}`. The run is a single iterative loop over two
//! phases:
//! - [`State::Start`]: push each `a`/`b` onto the stack; on `c`, hand off
//! - [`State::Match`]: pop one symbol per input character, requiring equality
//!
//! Acceptance is checked exactly once, on arrival at a `Match` configuration
//! with the input exhausted: the verdict is positive iff only the bottom
//! sentinel remains. Checking before any comparison is what lets the one-
//! character input `c` (empty `w`) accept.
//!
//! A [`TraceEntry`] is recorded at the start of every transition attempt,
//! including the one that fails, so a rejected run still shows where it died.
//! Each call builds a fresh machine and returns an owned [`RunResult`]; there
//! is no shared state between runs.

use super::stack::Stack;
use super::state::State;
use super::symbol::{self, StackSymbol};
use crate::trace::{RunResult, TraceEntry};

/// Run the machine on the whole input and report the verdict with its trace.
pub fn simulate(input: &str) -> RunResult {
    let chars: Vec<char> = input.chars().collect();
    run(&chars)
}

/// Run the machine on a pre-collected character slice.
///
/// The substring scanner calls this directly so that trace cursors come out
/// relative to the slice, matching what a standalone run of that factor
/// would record.
pub(crate) fn run(input: &[char]) -> RunResult {
    Machine::new(input).run()
}

/// Outcome of a single transition attempt.
enum Step {
    Pending,
    Accept,
    Reject,
}

struct Machine<'a> {
    input: &'a [char],
    state: State,
    cursor: usize,
    stack: Stack,
    trace: Vec<TraceEntry>,
}

impl<'a> Machine<'a> {
    fn new(input: &'a [char]) -> Self {
        Machine {
            input,
            state: State::Start,
            cursor: 0,
            stack: Stack::new(),
            trace: Vec::new(),
        }
    }

    fn run(mut self) -> RunResult {
        loop {
            self.record();
            let step = match self.state {
                State::Start => self.step_start(),
                State::Match => self.step_match(),
                State::Accept => Step::Accept,
            };
            match step {
                Step::Pending => {}
                Step::Accept => {
                    return RunResult {
                        accepted: true,
                        trace: self.trace,
                    }
                }
                Step::Reject => {
                    return RunResult {
                        accepted: false,
                        trace: self.trace,
                    }
                }
            }
        }
    }

    /// Capture the configuration this transition attempt starts from.
    fn record(&mut self) {
        self.trace
            .push(TraceEntry::new(self.state, self.cursor, self.stack.snapshot()));
    }

    /// Push phase: stack `a`/`b`, switch to the pop phase on the separator.
    fn step_start(&mut self) -> Step {
        let Some(&ch) = self.input.get(self.cursor) else {
            // Input ran out before the separator appeared.
            return Step::Reject;
        };
        if ch == symbol::SEPARATOR {
            self.state = State::Match;
            self.cursor += 1;
            return Step::Pending;
        }
        match StackSymbol::from_input(ch) {
            Some(sym) => {
                self.stack.push(sym);
                self.cursor += 1;
                Step::Pending
            }
            None => Step::Reject,
        }
    }

    /// Pop phase: each input character must equal the current stack top.
    fn step_match(&mut self) -> Step {
        if self.cursor == self.input.len() {
            // The single acceptance check: input exhausted, stack drained.
            return if self.stack.is_at_bottom() {
                Step::Accept
            } else {
                Step::Reject
            };
        }
        let ch = self.input[self.cursor];
        let Some(sym) = StackSymbol::from_input(ch) else {
            // A second separator or a foreign character; nothing pops these.
            return Step::Reject;
        };
        if self.stack.top() != sym {
            return Step::Reject;
        }
        self.stack.pop();
        self.cursor += 1;
        Step::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_alone_accepts_with_two_entries() {
        let result = simulate("c");
        assert!(result.accepted, "empty w must accept");
        assert_eq!(result.trace.len(), 2);
        assert_eq!(result.trace[0].state, State::Start);
        assert_eq!(result.trace[0].cursor, 0);
        assert_eq!(result.trace[0].stack, vec![StackSymbol::Bottom]);
        assert_eq!(result.trace[1].state, State::Match);
        assert_eq!(result.trace[1].cursor, 1);
        assert_eq!(result.trace[1].stack, vec![StackSymbol::Bottom]);
    }

    #[test]
    fn test_empty_input_rejects_but_still_traces() {
        let result = simulate("");
        assert!(!result.accepted);
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.trace[0].state, State::Start);
    }

    #[test]
    fn test_foreign_character_rejects_with_partial_trace() {
        let result = simulate("axc");
        assert!(!result.accepted);
        // One entry for the push of 'a', one for the attempt that saw 'x'.
        assert_eq!(result.trace.len(), 2);
        assert_eq!(result.trace[1].cursor, 1);
        assert_eq!(
            result.trace[1].stack,
            vec![StackSymbol::Bottom, StackSymbol::A]
        );
    }

    #[test]
    fn test_second_half_longer_than_first_rejects() {
        // After popping the lone 'a' the stack is at bottom but input remains.
        let result = simulate("acaa");
        assert!(!result.accepted);
        let last = result.trace.last().expect("trace must not be empty");
        assert_eq!(last.state, State::Match);
        assert_eq!(last.cursor, 3);
        assert!(last.stack == vec![StackSymbol::Bottom]);
    }

    #[test]
    fn test_second_separator_rejects_in_match_phase() {
        let result = simulate("acca");
        assert!(!result.accepted);
        let last = result.trace.last().expect("trace must not be empty");
        assert_eq!(last.state, State::Match);
        assert_eq!(last.cursor, 2);
    }

    #[test]
    fn test_trace_snapshots_grow_and_shrink_with_the_run() {
        let result = simulate("abcba");
        assert!(result.accepted);
        let depths: Vec<usize> = result.trace.iter().map(|e| e.stack.len()).collect();
        assert_eq!(depths, vec![1, 2, 3, 3, 2, 1]);
    }
}
