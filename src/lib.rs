//! # Introduction
//!
//! palintty runs a deterministic pushdown automaton that recognizes strings of
//! the form `w c reverse(w)` over the alphabet `{a, b}`, capturing the state,
//! input cursor, and full stack contents before every transition attempt. The
//! recorded trace is then navigated step by step through a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Machine (or Scanner) → RunResult → TUI
//! ```
//!
//! 1. [`automaton`] — the machine itself: stack, states, transition loop, and
//!    the substring scanner layered on top via [`automaton::scan`].
//! 2. [`trace`] — owned [`trace::TraceEntry`] records and the
//!    [`trace::RunResult`] verdict they accumulate into.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Recognized language
//!
//! `w` is any (possibly empty) string over `{a, b}`, so the shortest accepted
//! input is `c` alone. Characters outside `{a, b, c}` are never an error,
//! they simply make the machine reject. The scanner additionally rejects any
//! input containing a foreign character before trying substrings.

pub mod automaton;
pub mod trace;
pub mod ui;
