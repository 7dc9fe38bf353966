//! CLI commands

pub mod categories;
pub mod render;
