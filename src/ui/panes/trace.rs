//! Execution trace pane rendering

use crate::trace::TraceEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the trace pane: one line per recorded configuration.
///
/// The step currently selected in the app is marked and highlighted; the
/// stack pane shows that step's snapshot.
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &[TraceEntry],
    current: usize,
    has_result: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if trace.is_empty() {
        let placeholder = if has_result {
            "(no trace recorded)"
        } else {
            "(no run yet)"
        };
        let paragraph = Paragraph::new(placeholder)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = trace
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let line = if i == current {
                Line::from(vec![
                    Span::styled(
                        "▶ ",
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .bg(DEFAULT_THEME.current_line_bg),
                    ),
                    Span::styled(
                        entry.to_string(),
                        Style::default()
                            .fg(DEFAULT_THEME.fg)
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(entry.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
