//! Main TUI application state and logic

use crate::automaton;
use crate::trace::{RunResult, TraceEntry};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which recognizer runs when a check is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// The whole input must have the form `w c reverse(w)`.
    Exact,
    /// Some non-empty substring must have that form.
    Substring,
}

impl CheckMode {
    pub fn toggled(self) -> Self {
        match self {
            CheckMode::Exact => CheckMode::Substring,
            CheckMode::Substring => CheckMode::Exact,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckMode::Exact => "exact match",
            CheckMode::Substring => "substring search",
        }
    }
}

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Trace,
    Stack,
    Diagram,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: input -> trace -> stack -> diagram)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Diagram,
            FocusedPane::Diagram => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Diagram,
            FocusedPane::Trace => FocusedPane::Input,
            FocusedPane::Stack => FocusedPane::Trace,
            FocusedPane::Diagram => FocusedPane::Stack,
        }
    }
}

/// The main application state
pub struct App {
    /// The candidate string being checked
    pub input: String,

    /// Cursor position within the input while editing, in characters
    pub edit_cursor: usize,

    /// Whether keystrokes currently edit the input
    pub editing: bool,

    /// Which recognizer to run
    pub mode: CheckMode,

    /// Result of the last check, if any
    pub result: Option<RunResult>,

    /// Index of the selected trace entry
    pub step: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub trace_scroll: usize,
    pub stack_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app; with an initial input the check runs immediately,
    /// without one the app starts in edit mode.
    pub fn new(initial_input: Option<String>, mode: CheckMode) -> Self {
        let editing = initial_input.is_none();
        let mut app = App {
            input: initial_input.unwrap_or_default(),
            edit_cursor: 0,
            editing,
            mode,
            result: None,
            step: 0,
            focused_pane: FocusedPane::Input,
            trace_scroll: 0,
            stack_scroll: 0,
            should_quit: false,
            status_message: String::from("Type a string, then press Enter"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        if !app.editing {
            app.run_check();
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_secs(1) {
                    if self.step + 1 < self.trace_len() {
                        self.step += 1;
                        self.follow_selected_step();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: 4 panes plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Input | Automaton | Stack
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        let Self {
            input,
            edit_cursor,
            editing,
            mode,
            result,
            step,
            focused_pane,
            trace_scroll,
            stack_scroll,
            status_message,
            is_playing,
            ..
        } = self;

        let trace: &[TraceEntry] = result.as_ref().map_or(&[], |r| r.trace.as_slice());
        let accepted = result.as_ref().map(|r| r.accepted);
        let entry = trace.get(*step);
        let active = entry.map(|e| e.state);
        let accept_reached = accepted == Some(true) && *step + 1 == trace.len();

        super::panes::render_input_pane(
            frame,
            left_rows[0],
            input,
            *edit_cursor,
            *editing,
            *mode,
            result.as_ref(),
            *focused_pane == FocusedPane::Input,
        );

        super::panes::render_diagram_pane(
            frame,
            left_rows[1],
            active,
            accept_reached,
            *focused_pane == FocusedPane::Diagram,
        );

        super::panes::render_stack_pane(
            frame,
            left_rows[2],
            entry,
            *focused_pane == FocusedPane::Stack,
            stack_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            columns[1],
            trace,
            *step,
            result.is_some(),
            *focused_pane == FocusedPane::Trace,
            trace_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            status_message,
            *step,
            trace.len(),
            accepted,
            *is_playing,
            *editing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing {
            self.handle_edit_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    /// Keys while the input line is being edited
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.editing = false;
                self.run_check();
            }
            KeyCode::Esc | KeyCode::Tab => {
                self.editing = false;
                self.status_message = "Stopped editing".to_string();
            }
            KeyCode::Left => {
                self.edit_cursor = self.edit_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                let len = self.input.chars().count();
                self.edit_cursor = (self.edit_cursor + 1).min(len);
            }
            KeyCode::Backspace => {
                if self.edit_cursor > 0 {
                    self.edit_cursor -= 1;
                    let at = self.edit_byte_index();
                    self.input.remove(at);
                    self.invalidate_result();
                }
            }
            KeyCode::Char(ch) => {
                let at = self.edit_byte_index();
                self.input.insert(at, ch);
                self.edit_cursor += 1;
                self.invalidate_result();
            }
            _ => {}
        }
    }

    /// Keys while browsing a finished check
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('i') | KeyCode::Char('e') => {
                self.is_playing = false;
                self.editing = true;
                self.edit_cursor = self.input.chars().count();
                self.status_message = "Editing input".to_string();
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.mode = self.mode.toggled();
                if self.result.is_some() {
                    self.run_check();
                }
                self.status_message = format!("Mode: {}", self.mode.label());
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                let total = self.trace_len();
                if total > 0 {
                    let target = (self.step + n).min(total - 1);
                    let stepped = target - self.step;
                    self.step = target;
                    self.follow_selected_step();
                    self.status_message = format!("Stepped forward {} step(s)", stepped);
                } else {
                    self.status_message = "No trace to step through".to_string();
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_sub(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_sub(1);
                }
                _ => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_add(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll = self.stack_scroll.saturating_add(1);
                }
                _ => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the final step
                self.is_playing = false;
                let total = self.trace_len();
                if total > 0 {
                    self.step = total - 1;
                    self.follow_selected_step();
                    self.status_message = "Jumped to end".to_string();
                } else {
                    self.status_message = "No trace to step through".to_string();
                }
            }
            KeyCode::Backspace => {
                // Jump back to the first step
                self.is_playing = false;
                self.step = 0;
                self.follow_selected_step();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Run the configured check on the current input
    fn run_check(&mut self) {
        let result = match self.mode {
            CheckMode::Exact => automaton::simulate(&self.input),
            CheckMode::Substring => automaton::scan(&self.input),
        };
        self.step = 0;
        self.trace_scroll = 0;
        self.stack_scroll = 0;
        self.is_playing = false;
        self.status_message = if result.accepted {
            format!("Accepted in {} steps", result.trace.len())
        } else if result.trace.is_empty() {
            "Rejected, nothing matched".to_string()
        } else {
            format!("Rejected at step {}", result.trace.len())
        };
        self.result = Some(result);
    }

    /// Drop a result that no longer matches the input being typed
    fn invalidate_result(&mut self) {
        self.result = None;
        self.step = 0;
        self.trace_scroll = 0;
        self.stack_scroll = 0;
    }

    /// Number of entries in the current trace, zero without a result
    fn trace_len(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.trace.len())
    }

    /// Byte offset of the edit cursor into the input string
    fn edit_byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.edit_cursor)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Keep the selected step near the top of the trace pane
    fn follow_selected_step(&mut self) {
        self.trace_scroll = self.step.saturating_sub(3);
    }

    /// Step forward through the trace
    fn step_forward(&mut self) {
        let total = self.trace_len();
        if total == 0 {
            self.status_message = "No trace to step through".to_string();
        } else if self.step + 1 < total {
            self.step += 1;
            self.follow_selected_step();
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Already at the final step".to_string();
        }
    }

    /// Step backward through the trace
    fn step_backward(&mut self) {
        let total = self.trace_len();
        if total == 0 {
            self.status_message = "No trace to step through".to_string();
        } else if self.step > 0 {
            self.step -= 1;
            self.follow_selected_step();
            self.status_message = "Stepped backward".to_string();
        } else {
            self.status_message = "Already at the first step".to_string();
        }
    }
}
