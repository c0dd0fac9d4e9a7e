//! Input pane rendering: the candidate string, check mode, and verdict

use crate::trace::RunResult;
use crate::ui::app::CheckMode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the input pane.
///
/// The string is colored by character class so a rejection is visible at a
/// glance: mirrored symbols in the normal foreground, the separator in
/// orange, anything foreign in red. While editing, the cursor position is
/// shown reversed.
#[allow(clippy::too_many_arguments)]
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    edit_cursor: usize,
    editing: bool,
    mode: CheckMode,
    result: Option<&RunResult>,
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
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let mut input_spans: Vec<Span> = Vec::new();
    for (i, ch) in input.chars().enumerate() {
        let mut style = match ch {
            'a' | 'b' => Style::default().fg(DEFAULT_THEME.fg),
            'c' => Style::default().fg(DEFAULT_THEME.secondary),
            _ => Style::default().fg(DEFAULT_THEME.error),
        };
        if editing && i == edit_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        input_spans.push(Span::styled(ch.to_string(), style));
    }
    if editing && edit_cursor >= input.chars().count() {
        // Cursor past the last character: show it as a reversed cell.
        input_spans.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }
    if input.is_empty() && !editing {
        input_spans.push(Span::styled(
            "(press i to enter a string)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let mode_line = Line::from(vec![
        Span::styled("Mode: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(mode.label(), Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled("  (m toggles)", Style::default().fg(DEFAULT_THEME.comment)),
    ]);

    let verdict_line = match result {
        Some(r) if r.accepted => Line::from(vec![
            Span::styled(
                r.verdict(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} steps)", r.trace.len()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Some(r) => {
            let detail = if r.trace.is_empty() {
                "  (no accepting factor)".to_string()
            } else {
                format!("  (stuck at step {})", r.trace.len())
            };
            Line::from(vec![
                Span::styled(
                    r.verdict(),
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(detail, Style::default().fg(DEFAULT_THEME.comment)),
            ])
        }
        None => Line::from(Span::styled(
            "(press Enter to check)",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };

    let lines = vec![
        Line::from(input_spans),
        Line::from(""),
        mode_line,
        verdict_line,
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
