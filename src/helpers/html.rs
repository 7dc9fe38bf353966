//! HTML painting of a rendered list

use crate::list::{Chip, ChipKind, ControlKind, ListView, PageControl, PostEntry};

/// Paint the whole list: results line, entries and pagination strip
pub fn render_list_html(view: &ListView) -> String {
    let mut html = r#"<div class="post-list">"#.to_string();

    html.push_str(&format!(
        r#"<p class="post-list-summary">{}</p>"#,
        html_escape(&view.summary)
    ));

    if view.entries.is_empty() {
        html.push_str(r#"<ul class="post-list-items post-list-empty"></ul>"#);
    } else {
        html.push_str(r#"<ul class="post-list-items">"#);
        for entry in &view.entries {
            html.push_str(&post_entry(entry));
        }
        html.push_str("</ul>");
    }

    html.push_str(&paginator(&view.controls));
    html.push_str("</div>");
    html
}

/// Paint one post entry
pub fn post_entry(entry: &PostEntry) -> String {
    let mut html = r#"<li class="post-list-item">"#.to_string();

    html.push_str(&format!(
        r#"<a class="post-list-link" href="{}">{}</a>"#,
        html_escape(&entry.url),
        html_escape(&entry.title)
    ));

    if let Some(datetime) = &entry.datetime {
        html.push_str(&format!(
            r#"<time class="post-list-date" datetime="{}">{}</time>"#,
            datetime,
            html_escape(&entry.date)
        ));
    }

    if let Some(excerpt) = &entry.excerpt {
        html.push_str(&format!(
            r#"<p class="post-list-excerpt">{}</p>"#,
            html_escape(excerpt)
        ));
    }

    if !entry.chips.is_empty() {
        html.push_str(r#"<span class="post-list-chips">"#);
        for c in &entry.chips {
            html.push_str(&chip(c));
        }
        html.push_str("</span>");
    }

    html.push_str("</li>");
    html
}

fn chip(chip: &Chip) -> String {
    let kind = match chip.kind {
        ChipKind::Category => "category",
        ChipKind::Tag => "tag",
    };
    let active = if chip.active { " active" } else { "" };
    format!(
        r#"<a class="chip chip-{}{}" href="{}" data-label="{}">{}</a>"#,
        kind,
        active,
        html_escape(&chip.filter_href),
        html_escape(&chip.label),
        html_escape(&chip.label)
    )
}

/// Paint the pagination strip; empty input paints nothing
pub fn paginator(controls: &[PageControl]) -> String {
    if controls.is_empty() {
        return String::new();
    }

    let mut html = r#"<nav class="pagination">"#.to_string();

    for control in controls {
        let class = match control.kind {
            ControlKind::Prev => "pagination-prev",
            ControlKind::Next => "pagination-next",
            ControlKind::Page => "pagination-number",
        };

        if control.active {
            html.push_str(&format!(
                r#"<span class="{} current" aria-current="page">{}</span>"#,
                class,
                html_escape(&control.label)
            ));
        } else if control.disabled {
            html.push_str(&format!(
                r#"<span class="{} disabled" aria-disabled="true">{}</span>"#,
                class,
                html_escape(&control.label)
            ));
        } else {
            html.push_str(&format!(
                r#"<a class="{}" href="{}" data-page="{}">{}</a>"#,
                class,
                html_escape(&control.href),
                control.page,
                html_escape(&control.label)
            ));
        }
    }

    html.push_str("</nav>");
    html
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}
