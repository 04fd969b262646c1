//! Infrastructure services for scaffold-tui.
//!
//! This module contains:
//! - ScaffoldService: Component scaffolding and project layout
//! - CommandRunner: Package manager invocation with captured output

pub mod command;
mod scaffold;

pub use command::{probe_version, CommandHandle, CommandRunner};
pub use scaffold::ScaffoldService;
