//! Post list: search, category filter and pagination
//!
//! `ListController` is the entry point. The submodules hold the pieces it is
//! built from, each usable on its own.

mod controller;
pub mod debounce;
pub mod filter;
pub mod paginate;
pub mod state;
mod view;

pub use controller::{ListController, Location, MemoryLocation};
pub use debounce::Debouncer;
pub use filter::{facets, filter, Facet};
pub use state::ViewState;
pub use view::{summary, Chip, ChipKind, ControlKind, ListView, PageControl, PostEntry};
