//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `total_steps` is zero until a check has produced a trace.
#[allow(clippy::too_many_arguments)]
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    accepted: Option<bool>,
    is_playing: bool,
    editing: bool,
) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(45),
            ratatui::layout::Constraint::Percentage(55),
        ])
        .split(area);

    // Left side: Step info and status
    let (step_text, step_bg) = if total_steps > 0 {
        let bg = match accepted {
            Some(true) => DEFAULT_THEME.success,
            Some(false) => DEFAULT_THEME.error,
            None => DEFAULT_THEME.primary,
        };
        (format!(" Step {}/{} ", current_step + 1, total_steps), bg)
    } else if accepted.is_some() {
        // A check ran but recorded nothing (scanner rejection).
        (" no trace ".to_string(), DEFAULT_THEME.error)
    } else {
        (" idle ".to_string(), DEFAULT_THEME.comment)
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(step_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = if editing {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" check ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" done ", desc_style),
        ]
    } else {
        vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⎵ ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↵ / ⌫ ", key_style),
            Span::styled(" end/start ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" i ", key_style),
            Span::styled(" edit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" m ", key_style),
            Span::styled(" mode ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    // Show status indicators based on position and state
    let is_at_start = total_steps > 0 && current_step == 0;
    let is_at_end = total_steps > 0 && current_step + 1 >= total_steps;

    if editing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ✎ EDITING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
