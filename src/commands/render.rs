//! Render the post list for a query string

use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

use crate::config::ListConfig;
use crate::helpers::render_list_html;
use crate::list::{ControlKind, ListController, ListView, Location, MemoryLocation};

/// Output format of the `render` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

/// Load posts, apply the query string and print the resulting view
pub fn run(config: ListConfig, data: &Path, location: &str, format: OutputFormat) -> Result<()> {
    println!("{}", render(config, data, location, format)?);
    Ok(())
}

/// Same as `run`, returning the output instead of printing it
pub fn render(
    config: ListConfig,
    data: &Path,
    location: &str,
    format: OutputFormat,
) -> Result<String> {
    let mut controller = ListController::new(config, MemoryLocation::new(location));
    controller.load_path(data);
    controller.init_from_location();

    tracing::info!(
        "Rendered {} of {} posts (page {}/{})",
        controller.view().entries.len(),
        controller.posts().len(),
        controller.view().page,
        controller.view().total_pages
    );

    let output = match format {
        OutputFormat::Text => text(controller.view(), &controller.location().search()),
        OutputFormat::Html => render_list_html(controller.view()),
        OutputFormat::Json => serde_json::to_string_pretty(controller.view())?,
    };

    Ok(output)
}

fn text(view: &ListView, search: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", view.summary));
    if !search.is_empty() {
        out.push_str(&format!("Location: ?{}\n", search));
    }

    for entry in &view.entries {
        if entry.date.is_empty() {
            out.push_str(&format!("  {} [{}]\n", entry.title, entry.url));
        } else {
            out.push_str(&format!("  {} - {} [{}]\n", entry.date, entry.title, entry.url));
        }
    }

    let strip: Vec<String> = view
        .controls
        .iter()
        .map(|c| match c.kind {
            ControlKind::Prev | ControlKind::Next if c.disabled => format!("({})", c.label),
            ControlKind::Page if c.active => format!("[{}]", c.label),
            _ => c.label.clone(),
        })
        .collect();
    if !strip.is_empty() {
        out.push_str(&format!("  {}\n", strip.join(" ")));
    }

    out.trim_end().to_string()
}
