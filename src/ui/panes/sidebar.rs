//! Sidebar panes: stats, add-person input, playback and node details

use crate::heap::NodeDetails;
use crate::playback::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<14}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Heap size, max weight and sorted count
pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    heap_size: usize,
    max_weight: Option<u32>,
    sorted_count: usize,
) {
    let lines = vec![
        field("Heap Size", heap_size.to_string()),
        field(
            "Max Weight",
            max_weight.map_or_else(|| "-".to_string(), |w| format!("{} kg", w)),
        ),
        field("Sorted Count", sorted_count.to_string()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(pane_block(" Stats ", false)),
        area,
    );
}

/// Data needed to render the add-person pane
pub struct InputRenderData<'a> {
    pub buffer: &'a str,
    pub is_editing: bool,
    pub next_id: u32,
    pub error: Option<&'a str>,
    pub disabled: bool,
}

/// Weight input line with its validation message
pub fn render_input_pane(frame: &mut Frame, area: Rect, data: InputRenderData) {
    let prompt_style = if data.disabled {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let input = if data.is_editing {
        Line::from(vec![
            Span::styled("Weight (kg): ", prompt_style),
            Span::styled(
                format!("{}_", data.buffer),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else if data.disabled {
        Line::from(Span::styled("(disabled while sorting)", prompt_style))
    } else {
        Line::from(Span::styled(
            format!("press 'a' to add person (ID: {})", data.next_id),
            prompt_style,
        ))
    };

    let mut lines = vec![input];
    if let Some(error) = data.error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(pane_block(" Add Person ", data.is_editing)),
        area,
    );
}

/// Step position, speed and transport state
pub fn render_playback_pane(frame: &mut Frame, area: Rect, state: &PlaybackState) {
    let step = match state.cursor {
        Some(c) => format!("{}/{}", c + 1, state.total_steps),
        None => "-".to_string(),
    };

    let (label, color) = if state.is_playing {
        (" ▶ PLAYING ", DEFAULT_THEME.secondary)
    } else if state.is_paused {
        (" ⏸ PAUSED ", DEFAULT_THEME.primary)
    } else if state.is_finished {
        (" ✔ COMPLETE ", DEFAULT_THEME.success)
    } else {
        (" IDLE ", DEFAULT_THEME.comment)
    };

    let lines = vec![
        field("Step", step),
        field("Speed", format!("{:.2}x", state.speed)),
        Line::from(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(pane_block(" Playback ", false)),
        area,
    );
}

/// Details of the selected node
pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    details: Option<&NodeDetails>,
    is_focused: bool,
) {
    let block = pane_block(" Node Details ", is_focused);

    let Some(d) = details else {
        let paragraph = Paragraph::new("(select a node with ↑/↓)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let person_or_dash = |p: Option<crate::heap::Person>| {
        p.map_or_else(|| "-".to_string(), |p| p.to_string())
    };

    let role = if d.is_root {
        "root"
    } else if d.is_leaf {
        "leaf"
    } else {
        "internal"
    };

    let lines = vec![
        field("Person", d.person.to_string()),
        field("Index", d.index.to_string()),
        field("Level", d.level.to_string()),
        field("Role", role.to_string()),
        field("Parent", person_or_dash(d.parent)),
        field("Left", person_or_dash(d.left)),
        field("Right", person_or_dash(d.right)),
        field("Descendants", d.descendants.to_string()),
        Line::from(vec![
            Span::styled(
                format!("{:<14}", "Heap Property"),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            if d.heap_property_valid {
                Span::styled("valid", Style::default().fg(DEFAULT_THEME.success))
            } else {
                Span::styled("violated", Style::default().fg(DEFAULT_THEME.error))
            },
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
