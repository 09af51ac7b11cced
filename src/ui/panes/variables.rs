//! Variables pane rendering
//!
//! Shows the bindings left behind by the last run in declaration order, with
//! the runtime type of each value. Constants are tagged so they stand out from
//! reassignable variables.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::memory::value::Value;
use crate::memory::variables::VariableTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn value_style(value: &Value) -> Style {
    match value {
        Value::Integer(_) | Value::Real(_) => Style::default().fg(DEFAULT_THEME.number),
        Value::String(_) | Value::Char(_) => Style::default().fg(DEFAULT_THEME.string),
        Value::Boolean(_) => Style::default().fg(DEFAULT_THEME.keyword),
    }
}

/// Quote textual values so an empty string is still visible
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Char(c) => format!("'{}'", c),
        other => other.to_string(),
    }
}

/// Render the variables pane
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    variables: &VariableTable,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Variables ", is_focused);

    if variables.is_empty() {
        let paragraph = Paragraph::new("(no bindings)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area);
    clamp_scroll(scroll_offset, variables.len(), height);

    let items: Vec<ListItem> = variables
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|(name, binding)| {
            let mut spans = vec![
                Span::styled(
                    name.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" : {}", binding.value.data_type().name()),
                    Style::default().fg(DEFAULT_THEME.type_name),
                ),
                Span::raw(" = "),
                Span::styled(display_value(&binding.value), value_style(&binding.value)),
            ];
            if binding.is_constant {
                spans.push(Span::styled(
                    "  CONSTANT",
                    Style::default().fg(DEFAULT_THEME.constant),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
