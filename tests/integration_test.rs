// Integration tests for the palindrome machine and the substring scanner

use palintty::automaton::state::State;
use palintty::automaton::symbol::StackSymbol;
use palintty::automaton::{scan, simulate};

/// Build `w c reverse(w)`, the canonical accepted shape.
fn mirrored(w: &str) -> String {
    let reversed: String = w.chars().rev().collect();
    format!("{}c{}", w, reversed)
}

// === EXACT SIMULATION ===

#[test]
fn test_mirrored_strings_accept() {
    for w in ["", "a", "b", "ab", "ba", "aab", "abb", "abab", "babba"] {
        let input = mirrored(w);
        let result = simulate(&input);
        assert!(result.accepted, "expected '{}' to accept", input);
    }
}

#[test]
fn test_separator_alone_accepts() {
    let result = simulate("c");
    assert!(result.accepted, "empty w must accept");
    assert_eq!(result.trace.len(), 2);
    assert_eq!(result.trace[0].state, State::Start);
    assert_eq!(result.trace[1].state, State::Match);
    for entry in &result.trace {
        assert_eq!(entry.stack, vec![StackSymbol::Bottom]);
    }
}

#[test]
fn test_empty_input_rejects() {
    let result = simulate("");
    assert!(!result.accepted);
    assert_eq!(result.trace.len(), 1, "the failed first attempt is recorded");
}

#[test]
fn test_missing_separator_rejects() {
    for input in ["a", "aa", "abba", "bbbb"] {
        let result = simulate(input);
        assert!(!result.accepted, "expected '{}' to reject", input);
    }
}

#[test]
fn test_same_length_mismatch_rejects() {
    // Second half has the right length but is not the reverse of the first.
    for input in ["abcab", "aacbb", "bacba"] {
        let result = simulate(input);
        assert!(!result.accepted, "expected '{}' to reject", input);
    }
}

#[test]
fn test_leftover_stack_rejects() {
    let result = simulate("aabcb");
    assert!(!result.accepted, "underfull second half must reject");
    let last = result.trace.last().expect("trace must not be empty");
    assert_eq!(last.state, State::Match);
    assert!(last.stack.len() > 1, "symbols remain above the sentinel");
}

#[test]
fn test_foreign_characters_reject_uniformly() {
    // Not an error; the machine just has no transition and stops.
    for input in ["axc", "ab1ba", "aβc", " c", "c "] {
        let result = simulate(input);
        assert!(!result.accepted, "expected '{}' to reject", input);
        assert!(
            !result.trace.is_empty(),
            "a direct run always records at least one entry"
        );
    }
}

// === TRACE SHAPE ===

#[test]
fn test_trace_length_is_twice_w_plus_one() {
    for w in ["", "a", "ab", "bab", "abba"] {
        let input = mirrored(w);
        let result = simulate(&input);
        assert!(result.accepted);
        assert_eq!(
            result.trace.len(),
            2 * (w.chars().count() + 1),
            "unexpected trace length for '{}'",
            input
        );
    }
}

#[test]
fn test_trace_records_pre_transition_configurations() {
    let result = simulate("abcba");
    assert!(result.accepted);

    let expected: Vec<(State, usize, Vec<StackSymbol>)> = vec![
        (State::Start, 0, vec![StackSymbol::Bottom]),
        (State::Start, 1, vec![StackSymbol::Bottom, StackSymbol::A]),
        (
            State::Start,
            2,
            vec![StackSymbol::Bottom, StackSymbol::A, StackSymbol::B],
        ),
        (
            State::Match,
            3,
            vec![StackSymbol::Bottom, StackSymbol::A, StackSymbol::B],
        ),
        (State::Match, 4, vec![StackSymbol::Bottom, StackSymbol::A]),
        (State::Match, 5, vec![StackSymbol::Bottom]),
    ];

    assert_eq!(result.trace.len(), expected.len());
    for (entry, (state, cursor, stack)) in result.trace.iter().zip(expected) {
        assert_eq!(entry.state, state);
        assert_eq!(entry.cursor, cursor);
        assert_eq!(entry.stack, stack);
    }
}

#[test]
fn test_trace_display_lines() {
    let result = simulate("abcba");
    assert_eq!(result.trace[0].to_string(), "State: q0, Pos: 0, Stack: [z]");
    assert_eq!(
        result.trace[2].to_string(),
        "State: q0, Pos: 2, Stack: [z, a, b]"
    );
    assert_eq!(result.trace[5].to_string(), "State: q1, Pos: 5, Stack: [z]");
}

#[test]
fn test_repeated_runs_are_identical() {
    for input in ["abcba", "abba", "xaabcbaaxx", ""] {
        assert_eq!(simulate(input), simulate(input), "simulate('{}')", input);
        assert_eq!(scan(input), scan(input), "scan('{}')", input);
    }
}

// === SUBSTRING SCANNING ===

#[test]
fn test_scan_finds_embedded_factor() {
    // The first accepting factor in (start, end) order is "aabcbaa" at (2, 9).
    let result = scan("abaabcbaaa");
    assert!(result.accepted);
    assert_eq!(result.trace, simulate("aabcbaa").trace);
    assert_eq!(result.trace[0].cursor, 0, "cursors are factor-relative");
}

#[test]
fn test_scan_accepts_whatever_simulate_accepts() {
    for w in ["", "a", "ab", "bba"] {
        let input = mirrored(w);
        assert!(simulate(&input).accepted);
        assert!(
            scan(&input).accepted,
            "scan must accept '{}' since the whole string is a factor",
            input
        );
    }
}

#[test]
fn test_scan_rejects_foreign_characters_despite_clean_factor() {
    // "aabcbaa" is in there, but validation runs over the whole input first.
    let result = scan("xaabcbaaxx");
    assert!(!result.accepted);
    assert!(result.trace.is_empty());
}

#[test]
fn test_scan_without_any_factor_rejects() {
    for input in ["", "abab", "aaaa", "ab"] {
        let result = scan(input);
        assert!(!result.accepted, "expected scan('{}') to reject", input);
        assert!(result.trace.is_empty());
    }
}
