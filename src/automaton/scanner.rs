//! Substring scanner
//!
//! Answers whether any non-empty factor of the input is accepted by the
//! machine. Factors are tried in lexicographic `(start, end)` order: all
//! factors starting at 0 from shortest to longest, then all starting at 1,
//! and so on. The first accepting run wins and its trace is returned as-is,
//! with cursors relative to the factor.
//!
//! Before any simulation the whole input is validated against the alphabet:
//! a single foreign character anywhere rejects immediately, even when some
//! clean factor would have accepted. An overall rejection, from validation
//! or from exhausting every factor, carries an empty trace.
//!
//! Enumeration is brute force: O(n²) factors at O(n) each, which is fine at
//! the input lengths a person types into a terminal.

use super::machine;
use super::symbol;
use crate::trace::RunResult;

/// Scan the input for an accepted factor.
pub fn scan(input: &str) -> RunResult {
    let chars: Vec<char> = input.chars().collect();
    if chars.iter().any(|&ch| !symbol::in_alphabet(ch)) {
        return RunResult::rejected();
    }
    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            let result = machine::run(&chars[start..end]);
            if result.accepted {
                return result;
            }
        }
    }
    RunResult::rejected()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::machine::simulate;

    #[test]
    fn test_earlier_start_beats_shorter_factor() {
        // "aca" accepts as a whole at (0, 3); the lone "c" at (1, 2) also
        // accepts but is never reached.
        let result = scan("aca");
        assert!(result.accepted);
        assert_eq!(result.trace, simulate("aca").trace);
        assert_eq!(result.trace.len(), 4);
    }

    #[test]
    fn test_shortest_factor_wins_within_a_start() {
        // Nothing starting at 0 accepts, so the scan settles on "c" at (1, 2).
        let result = scan("acca");
        assert!(result.accepted);
        assert_eq!(result.trace, simulate("c").trace);
    }

    #[test]
    fn test_foreign_character_anywhere_rejects_without_trace() {
        let result = scan("xaabcbaaxx");
        assert!(!result.accepted);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_no_accepting_factor_rejects_without_trace() {
        let result = scan("abab");
        assert!(!result.accepted);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_empty_input_rejects_without_trace() {
        let result = scan("");
        assert!(!result.accepted);
        assert!(result.trace.is_empty());
    }
}
