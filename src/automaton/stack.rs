//! The pushdown stack
//!
//! A thin wrapper around `Vec<StackSymbol>` that enforces the machine's one
//! structural invariant: the bottom sentinel is seeded at construction and
//! never leaves. Every operation here is total; misuse like popping past the
//! sentinel is reported through return values, not panics.

use super::symbol::StackSymbol;

/// The machine's stack, never empty: index 0 is always [`StackSymbol::Bottom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    symbols: Vec<StackSymbol>,
}

impl Stack {
    /// Create a stack holding only the bottom sentinel.
    pub fn new() -> Self {
        Stack {
            symbols: vec![StackSymbol::Bottom],
        }
    }

    /// Push a symbol on top.
    pub fn push(&mut self, symbol: StackSymbol) {
        self.symbols.push(symbol);
    }

    /// Pop the top symbol.
    ///
    /// The sentinel stays put: popping when only the sentinel remains returns
    /// `None` and leaves the stack unchanged.
    pub fn pop(&mut self) -> Option<StackSymbol> {
        if self.symbols.len() > 1 {
            self.symbols.pop()
        } else {
            None
        }
    }

    /// The top symbol. Always defined, since the sentinel never leaves.
    pub fn top(&self) -> StackSymbol {
        self.symbols.last().copied().unwrap_or(StackSymbol::Bottom)
    }

    /// True when nothing but the sentinel remains.
    pub fn is_at_bottom(&self) -> bool {
        self.symbols.len() == 1
    }

    /// All symbols, bottom first (for display).
    pub fn symbols(&self) -> &[StackSymbol] {
        &self.symbols
    }

    /// An owned copy of the current contents, bottom first.
    ///
    /// Trace entries store these copies; later pushes and pops on the live
    /// stack leave recorded history untouched.
    pub fn snapshot(&self) -> Vec<StackSymbol> {
        self.symbols.clone()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_holds_only_the_sentinel() {
        let stack = Stack::new();
        assert!(stack.is_at_bottom());
        assert_eq!(stack.top(), StackSymbol::Bottom);
        assert_eq!(stack.symbols(), &[StackSymbol::Bottom]);
    }

    #[test]
    fn test_push_and_pop_are_lifo() {
        let mut stack = Stack::new();
        stack.push(StackSymbol::A);
        stack.push(StackSymbol::B);
        assert_eq!(stack.top(), StackSymbol::B);
        assert_eq!(stack.pop(), Some(StackSymbol::B));
        assert_eq!(stack.pop(), Some(StackSymbol::A));
        assert!(stack.is_at_bottom());
    }

    #[test]
    fn test_pop_refuses_to_remove_the_sentinel() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), StackSymbol::Bottom);

        stack.push(StackSymbol::A);
        assert_eq!(stack.pop(), Some(StackSymbol::A));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_at_bottom());
    }

    #[test]
    fn test_snapshot_is_independent_of_later_mutation() {
        let mut stack = Stack::new();
        stack.push(StackSymbol::A);
        let snapshot = stack.snapshot();

        stack.push(StackSymbol::B);
        stack.pop();
        stack.pop();

        assert_eq!(snapshot, vec![StackSymbol::Bottom, StackSymbol::A]);
    }
}
