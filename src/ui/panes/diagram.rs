//! Transition diagram pane rendering
//!
//! Draws the fixed three-state graph from [`crate::automaton::diagram`] and
//! highlights the state the selected trace step was in. When an accepting
//! run is viewed at its final step, the accept node lights up as well, since
//! that is the move the machine makes right after the last recorded entry.

use crate::automaton::diagram::{self, Edge, EDGES, STATES};
use crate::automaton::state::State;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Width of a state's box: `│ label │` plus corners.
fn box_width(state: State) -> usize {
    state.label().chars().count() + 4
}

/// Width of the arrow segment drawn for `edge`: `──label──▶`.
fn arrow_width(edge: &Edge) -> usize {
    edge.label.chars().count() + 5
}

/// Column offset of each state's box, plus the total diagram width.
fn layout_columns() -> (FxHashMap<State, usize>, usize) {
    let mut columns = FxHashMap::default();
    let mut col = 0;
    for (i, &state) in STATES.iter().enumerate() {
        columns.insert(state, col);
        col += box_width(state);
        if let Some(&next) = STATES.get(i + 1) {
            if let Some(edge) = diagram::edge_between(state, next) {
                col += arrow_width(edge);
            }
        }
    }
    (columns, col)
}

fn pad_to(spans: &mut Vec<Span<'static>>, col: &mut usize, target: usize) {
    if target > *col {
        spans.push(Span::raw(" ".repeat(target - *col)));
        *col = target;
    }
}

/// Render the transition diagram pane.
pub fn render_diagram_pane(
    frame: &mut Frame,
    area: Rect,
    active: Option<State>,
    accept_reached: bool,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Automaton ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let highlight = |state: State| -> Option<Style> {
        if accept_reached && state == State::Accept {
            Some(
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            )
        } else if active == Some(state) {
            Some(
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            None
        }
    };
    let edge_style = Style::default().fg(DEFAULT_THEME.comment);
    let label_style = Style::default().fg(DEFAULT_THEME.secondary);

    let (columns, total_width) = layout_columns();

    // Fall back to one edge per line when the pane is too narrow for boxes.
    if (area.width as usize) < total_width + 4 {
        let lines: Vec<Line> = EDGES
            .iter()
            .map(|edge| {
                let from_style =
                    highlight(edge.from).unwrap_or_else(|| Style::default().fg(DEFAULT_THEME.fg));
                let to_style =
                    highlight(edge.to).unwrap_or_else(|| Style::default().fg(DEFAULT_THEME.fg));
                Line::from(vec![
                    Span::styled(format!("{:<6}", edge.from.label()), from_style),
                    Span::styled("──▶ ", edge_style),
                    Span::styled(format!("{:<8}", edge.to.label()), to_style),
                    Span::styled(edge.label, label_style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let mut loop_spans: Vec<Span> = Vec::new();
    let mut top_spans: Vec<Span> = Vec::new();
    let mut mid_spans: Vec<Span> = Vec::new();
    let mut bottom_spans: Vec<Span> = Vec::new();
    let (mut loop_col, mut top_col, mut mid_col, mut bottom_col) = (0, 0, 0, 0);

    for (i, &state) in STATES.iter().enumerate() {
        let col = columns[&state];
        let width = box_width(state);
        let node_style = highlight(state).unwrap_or_else(|| Style::default().fg(DEFAULT_THEME.fg));
        let box_style = highlight(state).unwrap_or(edge_style);
        let bar = "─".repeat(width - 2);

        if let Some(edge) = diagram::edge_between(state, state) {
            pad_to(&mut loop_spans, &mut loop_col, col);
            let text = format!("↺ {}", edge.label);
            loop_col += text.chars().count();
            loop_spans.push(Span::styled(text, label_style));
        }

        pad_to(&mut top_spans, &mut top_col, col);
        top_spans.push(Span::styled(format!("┌{}┐", bar), box_style));
        top_col += width;

        pad_to(&mut mid_spans, &mut mid_col, col);
        mid_spans.push(Span::styled("│ ", box_style));
        mid_spans.push(Span::styled(state.label(), node_style));
        mid_spans.push(Span::styled(" │", box_style));
        mid_col += width;

        pad_to(&mut bottom_spans, &mut bottom_col, col);
        bottom_spans.push(Span::styled(format!("└{}┘", bar), box_style));
        bottom_col += width;

        if let Some(&next) = STATES.get(i + 1) {
            if let Some(edge) = diagram::edge_between(state, next) {
                mid_spans.push(Span::styled("──", edge_style));
                mid_spans.push(Span::styled(edge.label, label_style));
                mid_spans.push(Span::styled("──▶", edge_style));
                mid_col += arrow_width(edge);
            }
        }
    }

    let lines = vec![
        Line::from(loop_spans),
        Line::from(top_spans),
        Line::from(mid_spans),
        Line::from(bottom_spans),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
