//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`input`]: The candidate string with per-character coloring, mode, verdict
//! - [`trace`]: Recorded configurations, one line per transition attempt
//! - [`stack`]: The selected step's stack snapshot, drawn as a boxed column
//! - [`diagram`]: The fixed transition graph with the current state highlighted
//! - [`status`]: Status bar with keybindings and step position
//!
//! Each pane is a stateless `render_*` function taking exactly the data it
//! draws; scrollable panes additionally borrow their offset so they can
//! clamp it against the area they were actually given.

pub mod diagram;
pub mod input;
pub mod stack;
pub mod status;
pub mod trace;

// Re-export render functions for convenience
pub use diagram::render_diagram_pane;
pub use input::render_input_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
pub use trace::render_trace_pane;
