//! Search and category predicates

use std::collections::BTreeMap;

use serde::Serialize;

use crate::content::PostRecord;
use crate::helpers::strip_html;

/// Posts matching both the search text and the category, in input order.
///
/// The search is a case-insensitive substring match against the title,
/// excerpt, categories and tags. The category must equal one of the post's
/// categories or tags, ignoring case. Empty values match everything.
pub fn filter<'a>(posts: &'a [PostRecord], query: &str, category: &str) -> Vec<&'a PostRecord> {
    filter_indices(posts, query, category)
        .into_iter()
        .map(|i| &posts[i])
        .collect()
}

/// Positions of the posts `filter` would return
pub fn filter_indices(posts: &[PostRecord], query: &str, category: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    let category = category.trim();

    posts
        .iter()
        .enumerate()
        .filter(|(_, post)| matches_query(post, &needle) && matches_category(post, category))
        .map(|(i, _)| i)
        .collect()
}

/// `needle` must already be lowercased. The excerpt is matched as displayed,
/// without its markup.
fn matches_query(post: &PostRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    post.title.to_lowercase().contains(needle)
        || strip_html(&post.excerpt).to_lowercase().contains(needle)
        || post.labels().any(|label| label.to_lowercase().contains(needle))
}

pub fn matches_category(post: &PostRecord, category: &str) -> bool {
    category.is_empty() || post.labels().any(|label| same_label(label, category))
}

/// Case-insensitive label equality
pub fn same_label(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// One entry of the category dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    /// Label as first spelled in the data
    pub name: String,
    /// Number of posts carrying the label as a category or tag
    pub count: usize,
}

/// Distinct categories and tags with post counts, sorted by name.
///
/// Labels differing only in case are merged under the first spelling seen. A
/// post carrying the same label twice is counted once.
pub fn facets(posts: &[PostRecord]) -> Vec<Facet> {
    let mut by_key: BTreeMap<String, Facet> = BTreeMap::new();

    for post in posts {
        let mut seen: Vec<String> = Vec::new();
        for label in post.labels() {
            let key = label.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            by_key
                .entry(key.clone())
                .or_insert_with(|| Facet {
                    name: label.to_string(),
                    count: 0,
                })
                .count += 1;
            seen.push(key);
        }
    }

    by_key.into_values().collect()
}
