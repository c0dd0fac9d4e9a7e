//! Stack pane rendering: the snapshot belonging to the selected trace step

use crate::automaton::symbol::StackSymbol;
use crate::trace::TraceEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the stack pane as a boxed column, top of stack first.
///
/// This draws the snapshot stored in the selected trace entry, not any live
/// machine state; stepping backwards shows exactly what the stack held then.
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    entry: Option<&TraceEntry>,
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
        .title(" Stack ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(entry) = entry else {
        let paragraph = Paragraph::new("(no run yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let edge_style = Style::default().fg(DEFAULT_THEME.comment);

    let mut all_items: Vec<ListItem> = Vec::new();
    all_items.push(ListItem::new(Span::styled("┌─────┐", edge_style)));
    let count = entry.stack.len();
    for (i, symbol) in entry.stack.iter().rev().enumerate() {
        let symbol_style = match symbol {
            StackSymbol::Bottom => Style::default()
                .fg(DEFAULT_THEME.sentinel)
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        };
        let mut spans = vec![
            Span::styled("│  ", edge_style),
            Span::styled(symbol.to_string(), symbol_style),
            Span::styled("  │", edge_style),
        ];
        if i == 0 {
            spans.push(Span::styled(
                " ◀ top",
                Style::default().fg(DEFAULT_THEME.secondary),
            ));
        }
        all_items.push(ListItem::new(Line::from(spans)));
        if i + 1 < count {
            all_items.push(ListItem::new(Span::styled("├─────┤", edge_style)));
        }
    }
    all_items.push(ListItem::new(Span::styled("└─────┘", edge_style)));

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
