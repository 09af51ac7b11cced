//! Execution output pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::events::{EventKind, ExecutionEvent};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn event_style(kind: EventKind) -> Style {
    match kind {
        EventKind::Output => Style::default().fg(DEFAULT_THEME.fg),
        EventKind::Error => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        EventKind::System => Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::ITALIC),
    }
}

/// Render the events of the last run
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    events: &[ExecutionEvent],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Output ", is_focused);

    if events.is_empty() {
        let paragraph = Paragraph::new("(press r to run)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let height = visible_height(area);
    clamp_scroll(scroll_offset, events.len(), height);

    let items: Vec<ListItem> = events
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|e| ListItem::new(e.text.as_str()).style(event_style(e.kind)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
