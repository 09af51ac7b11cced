//! Main TUI application state and logic

use super::panes::{self, RunState, SourceRenderData, StatusRenderData};
use crate::config::ExecutionLimits;
use crate::events::ExecutionEvent;
use crate::formatter;
use crate::interpreter::Interpreter;
use crate::validator::{self, ValidationResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Lines kept above the highlighted line when jumping to it
const SCROLL_CONTEXT: usize = 3;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
    Diagnostics,
    Variables,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> diagnostics -> variables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Variables,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Diagnostics => FocusedPane::Output,
            FocusedPane::Variables => FocusedPane::Diagnostics,
        }
    }
}

/// The main application state
pub struct App {
    /// Reused across runs; each run starts from a clean state
    pub interpreter: Interpreter,

    /// The buffer being edited
    pub source_code: String,

    /// File the buffer was loaded from, if any
    pub path: Option<PathBuf>,

    /// Validation of the current buffer
    pub validation: ValidationResult,

    /// Events of the last run
    pub events: Vec<ExecutionEvent>,

    pub run_state: RunState,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub output_scroll: usize,
    pub diagnostics_scroll: usize,
    pub variables_scroll: usize,

    /// Whether the buffer differs from the file on disk
    pub is_modified: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app over `source_code`, validating it straight away
    pub fn new(source_code: String, path: Option<PathBuf>, limits: ExecutionLimits) -> Self {
        let validation = validator::validate(&source_code);
        App {
            interpreter: Interpreter::with_limits(limits),
            source_code,
            path,
            validation,
            events: Vec::new(),
            run_state: RunState::NotRun,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            diagnostics_scroll: 0,
            variables_scroll: 0,
            is_modified: false,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Diagnostics (top) | Variables (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let current_line = match self.run_state {
            RunState::NotRun => 0,
            _ => self.interpreter.current_line(),
        };

        panes::render_source_pane(
            frame,
            left_rows[0],
            SourceRenderData {
                source: &self.source_code,
                current_line,
                is_error: self.run_state == RunState::Faulted,
                validation: &self.validation,
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            &self.events,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_diagnostics_pane(
            frame,
            right_rows[0],
            &self.validation,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        panes::render_variables_pane(
            frame,
            right_rows[1],
            self.interpreter.variables(),
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                steps: self.interpreter.steps(),
                current_line,
                run_state: self.run_state,
                is_valid: self.validation.is_valid,
                is_modified: self.is_modified,
            },
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.run_program(),
            KeyCode::Char('f') => self.format_buffer(),
            KeyCode::Char('v') => self.revalidate(),
            KeyCode::Char('w') => self.write_buffer(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
            FocusedPane::Diagnostics => &mut self.diagnostics_scroll,
            FocusedPane::Variables => &mut self.variables_scroll,
        }
    }

    /// Execute the buffer and show where it stopped
    fn run_program(&mut self) {
        let response = self.interpreter.run(&self.source_code);
        tracing::debug!(success = response.success, steps = self.interpreter.steps(), "tui run");

        self.run_state = if response.success {
            RunState::Finished
        } else {
            RunState::Faulted
        };
        self.status_message = match response.error() {
            Some(error) => error.text.clone(),
            None if response.success => {
                format!("Finished in {:.2}ms", response.execution_time_ms)
            }
            None => response
                .events
                .last()
                .map(|e| e.text.clone())
                .unwrap_or_default(),
        };

        self.events = response.events;
        self.output_scroll = usize::MAX;
        self.variables_scroll = 0;
        self.source_scroll = self
            .interpreter
            .current_line()
            .saturating_sub(1 + SCROLL_CONTEXT);
    }

    /// Replace the buffer with its formatted form
    fn format_buffer(&mut self) {
        let formatted = formatter::format(&self.source_code);
        if formatted == self.source_code {
            self.status_message = "Already formatted".to_string();
            return;
        }

        self.source_code = formatted;
        self.is_modified = true;
        self.validation = validator::validate(&self.source_code);
        self.status_message = "Formatted buffer".to_string();
    }

    fn revalidate(&mut self) {
        self.validation = validator::validate(&self.source_code);
        self.diagnostics_scroll = 0;
        self.status_message = format!(
            "{} errors, {} warnings",
            self.validation.errors.len(),
            self.validation.warnings.len()
        );
    }

    /// Save the buffer back to the file it came from
    fn write_buffer(&mut self) {
        let Some(path) = &self.path else {
            self.status_message = "No file to write to".to_string();
            return;
        };

        match fs::write(path, &self.source_code) {
            Ok(()) => {
                self.is_modified = false;
                self.status_message = format!("Wrote {}", path.display());
            }
            Err(e) => {
                self.status_message = format!("Cannot write {}: {}", path.display(), e);
            }
        }
    }
}
