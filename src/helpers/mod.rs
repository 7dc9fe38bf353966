//! Helper functions for painting the list
//!
//! URL generation, date formatting and the HTML painter for a rendered
//! `ListView`.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
