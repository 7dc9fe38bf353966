//! View model produced by each render
//!
//! A UI layer paints these structures; `helpers::render_list_html` is the
//! painter used for static output.

use serde::Serialize;

/// Everything needed to paint the list for the current state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListView {
    /// Posts on the current page
    pub entries: Vec<PostEntry>,
    /// Results line, e.g. "12 posts found"
    pub summary: String,
    /// Number of posts matching the filters
    pub total: usize,
    /// Effective (clamped) page
    pub page: usize,
    pub total_pages: usize,
    /// Pagination strip, empty when nothing matched
    pub controls: Vec<PageControl>,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn prev(&self) -> Option<&PageControl> {
        self.controls.iter().find(|c| c.kind == ControlKind::Prev)
    }

    pub fn next(&self) -> Option<&PageControl> {
        self.controls.iter().find(|c| c.kind == ControlKind::Next)
    }

    /// Numbered page buttons, in order
    pub fn numbers(&self) -> impl Iterator<Item = &PageControl> {
        self.controls.iter().filter(|c| c.kind == ControlKind::Page)
    }
}

/// One visible post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostEntry {
    pub title: String,
    pub url: String,
    /// Display date, empty when the post has none
    pub date: String,
    /// Machine-readable date for `<time datetime>`
    pub datetime: Option<String>,
    pub excerpt: Option<String>,
    pub chips: Vec<Chip>,
}

/// Badge for one category or tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chip {
    pub label: String,
    pub kind: ChipKind,
    /// Query string that filters the list by this label
    pub filter_href: String,
    /// The site's archive page for this label
    pub page_url: String,
    /// Whether this label is the selected category
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
    Category,
    Tag,
}

/// One button of the pagination strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageControl {
    pub kind: ControlKind,
    /// Page this control leads to
    pub page: usize,
    pub label: String,
    pub disabled: bool,
    /// Set on the button of the current page
    pub active: bool,
    /// Query string for the target page
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Prev,
    Page,
    Next,
}

/// Results line for `count` matches
pub fn summary(count: usize) -> String {
    match count {
        1 => "1 post found".to_string(),
        n => format!("{} posts found", n),
    }
}
