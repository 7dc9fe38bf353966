//! Post data loader - parses the post index from JSON, files or HTML pages

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::PostRecord;
use crate::error::{ListError, Result};

/// Accepted top-level shapes of the post index
#[derive(Deserialize)]
#[serde(untagged)]
enum PostIndex {
    List(Vec<PostRecord>),
    Wrapped { posts: Vec<PostRecord> },
}

/// Parse a post index from JSON text.
///
/// Accepts a bare array or an object with a `posts` array. Blank input is an
/// empty index.
pub fn parse_posts(json: &str) -> Result<Vec<PostRecord>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let posts = match serde_json::from_str::<PostIndex>(json) {
        Ok(PostIndex::List(posts)) | Ok(PostIndex::Wrapped { posts }) => posts,
        // Re-parse as a plain list to surface a useful error message
        Err(_) => serde_json::from_str::<Vec<PostRecord>>(json)?,
    };

    Ok(posts)
}

/// Read and parse a post index file.
///
/// HTML pages are searched for the `<script>` block whose id is `script_id`.
pub fn load_posts<P: AsRef<Path>>(path: P, script_id: &str) -> Result<Vec<PostRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_html = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("html") | Some("htm")
    );
    if is_html {
        let json = extract_embedded(&content, script_id)?;
        return parse_posts(json);
    }

    parse_posts(&content)
}

/// Find the body of `<script ... id="{id}" ...>...</script>` in an HTML page
pub fn extract_embedded<'a>(html: &'a str, id: &str) -> Result<&'a str> {
    let pattern = format!(
        r#"(?is)<script\b[^>]*\bid\s*=\s*["']{}["'][^>]*>(.*?)</script\s*>"#,
        regex::escape(id)
    );
    let re = Regex::new(&pattern).map_err(|_| ListError::MissingEmbeddedData(id.to_string()))?;

    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ListError::MissingEmbeddedData(id.to_string()))
}
