//! URL helper functions

use crate::config::ListConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/tags/rust/") // -> "/blog/tags/rust/"
/// ```
pub fn url_for(config: &ListConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Archive page of a tag
pub fn tag_url(config: &ListConfig, tag: &str) -> String {
    url_for(config, &format!("{}/{}/", config.tag_dir, slug::slugify(tag)))
}

/// Archive page of a category
pub fn category_url(config: &ListConfig, category: &str) -> String {
    url_for(
        config,
        &format!("{}/{}/", config.category_dir, slug::slugify(category)),
    )
}

/// Link target for a query string; `"?"` alone clears every parameter
pub fn query_href(query: &str) -> String {
    format!("?{}", query)
}

pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
