//! postlist: search, filter and pagination for static blog post indexes
//!
//! A site generator writes its posts' metadata as JSON. This crate loads that
//! index once, keeps the reader's search text, category and page in a
//! `ViewState` that round-trips through the page's query string, and renders
//! a view model of the visible posts and the pagination strip.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod list;

pub use config::ListConfig;
pub use content::PostRecord;
pub use error::{ListError, Result};
pub use list::{ListController, ListView, Location, MemoryLocation, ViewState};
