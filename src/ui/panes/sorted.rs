//! Sorted output pane

use crate::heap::Person;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the sorted result list (descending by weight)
pub fn render_sorted_pane(
    frame: &mut Frame,
    area: Rect,
    sorted: &[Person],
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
        .title(format!(" Sorted Result (Descending) - {} people ", sorted.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if sorted.is_empty() {
        let paragraph = Paragraph::new("(run heap sort with 's')")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = sorted
        .iter()
        .enumerate()
        .map(|(rank, person)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", rank + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:>3} kg", person.weight),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(
                    format!("  ID {}", person.person_id),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

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

    frame.render_widget(List::new(visible_items).block(block), area);
}
