//! Diagnostics pane rendering

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use crate::validator::{Severity, ValidationResult};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the validator's findings, ordered by line with errors first
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    validation: &ValidationResult,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(
        " Diagnostics ({} errors, {} warnings) ",
        validation.errors.len(),
        validation.warnings.len()
    );
    let block = pane_block(&title, is_focused);

    if !validation.has_diagnostics() {
        let paragraph = Paragraph::new("No problems found")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let diagnostics = validation.diagnostics();
    let height = visible_height(area);
    clamp_scroll(scroll_offset, diagnostics.len(), height);

    let items: Vec<ListItem> = diagnostics
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|d| {
            let (marker, color) = match d.severity {
                Severity::Error => ("●", DEFAULT_THEME.error),
                Severity::Warning => ("▲", DEFAULT_THEME.warning),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(color)),
                Span::styled(
                    format!("{:4} ", d.line_number),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{} ", d.code.as_str()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(d.message.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
