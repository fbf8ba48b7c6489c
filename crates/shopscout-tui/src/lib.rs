// Terminal UI implementation using ratatui

pub mod app;
pub mod help_ui;
pub mod runner;
pub mod ui;

pub use app::{Action, App, InputMode};
pub use runner::run_tui;
