//! Pushdown-automaton core
//!
//! This module provides the machine and everything it is built from:
//! - [`machine`]: The simulator, run via [`simulate`]
//! - [`scanner`]: Substring search over the machine, run via [`scan`]
//! - [`stack`]: The sentinel-bottomed pushdown stack
//! - [`state`]: The three control states
//! - [`symbol`]: Input alphabet and stack symbols
//! - [`diagram`]: Static transition-graph tables for rendering
//!
//! # Execution Model
//!
//! Both entry points are plain functions from input text to an owned
//! [`crate::trace::RunResult`]. A machine exists only for the duration of
//! one call; there is no instance to construct, reuse, or reset.

pub mod diagram;
pub mod machine;
pub mod scanner;
pub mod stack;
pub mod state;
pub mod symbol;

pub use machine::simulate;
pub use scanner::scan;
