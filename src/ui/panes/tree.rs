//! Heap tree pane
//!
//! Draws the array-encoded heap level by level. Each level splits the pane
//! width into `2^level` equal slots and a node's label is centred in its slot,
//! so children sit under their parent. A connector row (`/` and `\`) is drawn
//! between levels.

use crate::playback::DisplayState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the tree pane
pub struct TreeRenderData<'a> {
    pub display: &'a DisplayState,
    pub selected: Option<usize>,
}

/// Column of the centre of each node, grouped by level
pub(crate) fn layout_levels(len: usize, width: usize) -> Vec<Vec<(usize, usize)>> {
    let mut levels = Vec::new();
    let mut start = 0;
    let mut count = 1;

    while start < len {
        let slot = (width / count).max(1);
        let row: Vec<(usize, usize)> = (start..len.min(start + count))
            .enumerate()
            .map(|(k, index)| (index, k * slot + slot / 2))
            .collect();
        levels.push(row);
        start += count;
        count *= 2;
    }

    levels
}

fn node_style(display: &DisplayState, index: usize, selected: Option<usize>) -> Style {
    let base = if display.is_extracting(index) {
        Style::default().bg(DEFAULT_THEME.extract).fg(Color::Black)
    } else if display.is_swapping(index) {
        Style::default().bg(DEFAULT_THEME.swap).fg(Color::Black)
    } else if display.is_comparing(index) {
        Style::default().bg(DEFAULT_THEME.compare).fg(Color::Black)
    } else if display.is_highlighted(index) {
        Style::default().bg(DEFAULT_THEME.highlight).fg(Color::Black)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    if selected == Some(index) {
        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base
    }
}

fn label_line(data: &TreeRenderData, row: &[(usize, usize)]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut col = 0;

    for &(index, center) in row {
        let label = format!("{}", data.display.heap[index].weight);
        let start = center.saturating_sub(label.len() / 2).max(col);
        if start > col {
            spans.push(Span::raw(" ".repeat(start - col)));
        }
        col = start + label.len();
        spans.push(Span::styled(
            label,
            node_style(data.display, index, data.selected),
        ));
        // Keep neighbouring labels apart
        spans.push(Span::raw(" "));
        col += 1;
    }

    Line::from(spans)
}

fn connector_line(parents: &[(usize, usize)], children: &[(usize, usize)]) -> Line<'static> {
    let width = children.last().map_or(0, |&(_, c)| c + 1);
    let mut chars = vec![' '; width];

    for &(child, child_center) in children {
        let Some(&(_, parent_center)) = parents.iter().find(|(p, _)| *p == (child - 1) / 2) else {
            continue;
        };
        let col = (child_center + parent_center) / 2;
        if col < chars.len() {
            chars[col] = if child % 2 == 1 { '/' } else { '\\' };
        }
    }

    Line::from(Span::styled(
        chars.into_iter().collect::<String>(),
        Style::default().fg(DEFAULT_THEME.comment),
    ))
}

/// Render the heap tree pane
pub fn render_tree_pane(frame: &mut Frame, area: Rect, data: TreeRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Binary Heap Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if data.display.heap.is_empty() {
        let paragraph = Paragraph::new("(heap is empty, press 'a' to add a person)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let content_width = area.width.saturating_sub(2) as usize; // borders
    let levels = layout_levels(data.display.heap.len(), content_width);

    let mut lines = Vec::new();
    for (depth, row) in levels.iter().enumerate() {
        if depth > 0 {
            lines.push(connector_line(&levels[depth - 1], row));
        }
        lines.push(label_line(&data, row));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
