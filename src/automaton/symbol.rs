//! Input alphabet and stack symbols
//!
//! The machine works over a three-character input alphabet:
//! - `a` and `b`: the mirrored symbols, which also live on the stack
//! - `c`: the separator marking the middle of the string (never stacked)
//!
//! The stack additionally holds [`StackSymbol::Bottom`], the sentinel seeded
//! at construction and rendered as `z`.

use std::fmt;

/// The separator character marking the middle of a candidate string.
pub const SEPARATOR: char = 'c';

/// A symbol that can appear on the machine's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackSymbol {
    A,
    B,
    /// Bottom-of-stack sentinel, present from construction and never popped.
    Bottom,
}

impl StackSymbol {
    /// Map a pushable input character to its stack symbol.
    ///
    /// Returns `None` for the separator and for anything outside the alphabet,
    /// so callers treat both with the same rejection path.
    pub fn from_input(ch: char) -> Option<StackSymbol> {
        match ch {
            'a' => Some(StackSymbol::A),
            'b' => Some(StackSymbol::B),
            _ => None,
        }
    }

    /// The character used when rendering this symbol.
    pub fn as_char(self) -> char {
        match self {
            StackSymbol::A => 'a',
            StackSymbol::B => 'b',
            StackSymbol::Bottom => 'z',
        }
    }
}

impl fmt::Display for StackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Check whether a character belongs to the input alphabet at all.
///
/// Used by the substring scanner's whole-input validation pass.
pub fn in_alphabet(ch: char) -> bool {
    ch == SEPARATOR || StackSymbol::from_input(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_maps_mirrored_symbols_only() {
        assert_eq!(StackSymbol::from_input('a'), Some(StackSymbol::A));
        assert_eq!(StackSymbol::from_input('b'), Some(StackSymbol::B));
        assert_eq!(StackSymbol::from_input('c'), None);
        assert_eq!(StackSymbol::from_input('z'), None);
        assert_eq!(StackSymbol::from_input('x'), None);
    }

    #[test]
    fn test_alphabet_membership() {
        assert!(in_alphabet('a'));
        assert!(in_alphabet('b'));
        assert!(in_alphabet('c'));
        assert!(!in_alphabet('d'));
        assert!(!in_alphabet(' '));
        assert!(!in_alphabet('ä'));
    }

    #[test]
    fn test_display_matches_render_char() {
        assert_eq!(StackSymbol::A.to_string(), "a");
        assert_eq!(StackSymbol::B.to_string(), "b");
        assert_eq!(StackSymbol::Bottom.to_string(), "z");
    }
}
