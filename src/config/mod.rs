//! Configuration module

mod list;

pub use list::ListConfig;
