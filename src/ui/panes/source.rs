//! Source code pane rendering with syntax highlighting
//!
//! This module renders the buffer being edited with keyword highlighting,
//! diagnostic markers and the line the last run stopped on.
//!
//! # Features
//!
//! - Highlighting for keywords, data type names, strings, numbers, operators
//!   and `//` comments
//! - A gutter marker per line: `●` for errors, `▲` for warnings
//! - Current line highlighting (red when the run faulted on it)
//! - Line numbering
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer over the shared
//! keyword set rather than the evaluator's statement matcher.

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::lexicon::{is_keyword, is_word_char};
use crate::memory::value::DataType;
use crate::ui::theme::DEFAULT_THEME;
use crate::validator::{Severity, ValidationResult};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the source pane
pub struct SourceRenderData<'a> {
    pub source: &'a str,
    /// 1-based line to highlight, 0 for none
    pub current_line: usize,
    /// Whether the highlighted line is where a run faulted
    pub is_error: bool,
    pub validation: &'a ValidationResult,
}

/// Simple syntax highlighting for one pseudocode line
pub(crate) fn highlight_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        // Comment runs to end of line
        if c == '/' && line[start..].starts_with("//") {
            spans.push(Span::styled(
                &line[start..],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        if c == '"' || c == '\'' {
            let mut end = line.len();
            for (i, next) in chars.by_ref() {
                if next == c {
                    end = i + next.len_utf8();
                    break;
                }
            }
            spans.push(Span::styled(
                &line[start..end],
                Style::default().fg(DEFAULT_THEME.string),
            ));
            continue;
        }

        if is_word_char(c) {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_char(next) && next != '.' {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            let word = &line[start..end];
            spans.push(Span::styled(word, word_style(word)));
            continue;
        }

        let end = start + c.len_utf8();
        let style = match c {
            '←' | '+' | '-' | '*' | '/' | '=' | '<' | '>' | '&' => {
                Style::default().fg(DEFAULT_THEME.operator)
            }
            '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(&line[start..end], style));
    }

    Line::from(spans)
}

fn word_style(word: &str) -> Style {
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return Style::default().fg(DEFAULT_THEME.number);
    }
    if DataType::from_name(word).is_some() {
        return Style::default().fg(DEFAULT_THEME.type_name);
    }
    if is_keyword(word) {
        return Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD);
    }
    Style::default().fg(DEFAULT_THEME.fg)
}

fn gutter_marker(severity: Option<Severity>) -> Span<'static> {
    match severity {
        Some(Severity::Error) => Span::styled("●", Style::default().fg(DEFAULT_THEME.error)),
        Some(Severity::Warning) => Span::styled("▲", Style::default().fg(DEFAULT_THEME.warning)),
        None => Span::raw(" "),
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = data.source.split('\n').collect();
    let height = visible_height(area);
    clamp_scroll(scroll_offset, lines.len(), height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == data.current_line;

            let (num_style, content_base_style) = if is_current && data.is_error {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Style::default().bg(DEFAULT_THEME.current_line_bg),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.comment), Style::default())
            };

            let mut content_line = highlight_line(line);
            if is_current && data.is_error {
                for span in &mut content_line.spans {
                    span.style = content_base_style;
                }
            } else if is_current {
                for span in &mut content_line.spans {
                    span.style = span.style.patch(content_base_style);
                }
            }

            let mut final_spans = vec![
                gutter_marker(data.validation.worst_on_line(line_num)),
                Span::styled(format!("{:4} ", line_num), num_style),
            ];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
