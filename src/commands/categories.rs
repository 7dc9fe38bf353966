//! List the categories and tags of a post index

use anyhow::Result;
use std::path::Path;

use crate::config::ListConfig;
use crate::list::{ListController, MemoryLocation};

/// Print every category and tag with its post count
pub fn run(config: &ListConfig, data: &Path) -> Result<()> {
    println!("{}", listing(config, data));
    Ok(())
}

/// Same as `run`, returning the output; unreadable data lists nothing
pub fn listing(config: &ListConfig, data: &Path) -> String {
    let mut controller = ListController::new(config.clone(), MemoryLocation::default());
    controller.load_path(data);
    let facets = controller.categories();

    let mut out = format!("Categories ({}):", facets.len());
    for facet in facets {
        out.push_str(&format!("\n  {} ({})", facet.name, facet.count));
    }
    out
}
