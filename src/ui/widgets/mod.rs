//! Reusable UI widgets for scaffold-tui.

pub mod help;
pub mod menu;
pub mod output_panel;
pub mod text_input;
