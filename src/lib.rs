//! scaffold-tui: Terminal UI for React + TypeScript project scaffolding
//!
//! This crate provides a terminal-based user interface for scaffolding
//! component files inside an existing front-end project and driving npm
//! install/dev-server workflows.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use app::App;
pub use config::ProjectConfig;
pub use error::{AppError, Result};
