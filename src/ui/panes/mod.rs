//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`source`]: Buffer display with keyword highlighting, diagnostic markers
//!   and the line the last run stopped on
//! - [`diagnostics`]: Validator errors and warnings, ordered by line
//! - [`output`]: Events emitted by the last run
//! - [`variables`]: Bindings left behind by the last run
//! - [`status`]: Status bar with keybindings and run state
//! - `utils`: Shared block and scroll helpers
//!
//! Each pane module exports a primary `render_*` function. Panes are
//! stateless apart from the scroll offset the caller owns.

mod utils;

pub mod diagnostics;
pub mod output;
pub mod source;
pub mod status;
pub mod variables;

pub use diagnostics::render_diagnostics_pane;
pub use output::render_output_pane;
pub use source::{render_source_pane, SourceRenderData};
pub use status::{render_status_bar, RunState, StatusRenderData};
pub use variables::render_variables_pane;
