//! Content module - post records and the loaders that read them

pub mod loader;
mod post;

pub use loader::{extract_embedded, load_posts, parse_posts};
pub use post::{parse_date, PostRecord};
