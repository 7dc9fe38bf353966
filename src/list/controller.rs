//! List controller
//!
//! Owns the loaded posts and the view state. Every transition recomputes the
//! filtered set, clamps the page, renders a fresh `ListView` and rewrites the
//! location's query string, all before returning. There is no pending state
//! between a mutation and its render.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ListConfig;
use crate::content::{self, PostRecord};
use crate::helpers::{
    category_url, date_xml, format_date, query_href, strip_html, tag_url, url_for,
};

use super::debounce::Debouncer;
use super::filter::{self, Facet};
use super::paginate::{clamp_page, page_range, page_window, total_pages};
use super::state::{normalize_category, ViewState};
use super::view::{summary, Chip, ChipKind, ControlKind, ListView, PageControl, PostEntry};

const PREV_LABEL: &str = "Prev";
const NEXT_LABEL: &str = "Next";

/// Where the list reads and writes its query string.
///
/// In a browser this is `location.search` plus `history.replaceState`.
pub trait Location {
    /// Current query string, with or without the leading `?`
    fn search(&self) -> String;

    /// Replace the query string without navigating
    fn replace_search(&mut self, search: &str);
}

/// In-memory location for tests and static rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    search: String,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(search: impl Into<String>) -> Self {
        let search: String = search.into();
        Self {
            search: search.trim_start_matches('?').to_string(),
            replacements: 0,
        }
    }

    /// How many times the query string was rewritten
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Location for MemoryLocation {
    fn search(&self) -> String {
        self.search.clone()
    }

    fn replace_search(&mut self, search: &str) {
        self.search = search.trim_start_matches('?').to_string();
        self.replacements += 1;
    }
}

/// Search, filter and pagination over a fixed set of posts
pub struct ListController<L: Location = MemoryLocation> {
    config: ListConfig,
    posts: Arc<[PostRecord]>,
    state: ViewState,
    /// Indices into `posts` matching the current state
    filtered: Vec<usize>,
    total_pages: usize,
    search_input: Debouncer<String>,
    location: L,
    view: ListView,
    renders: u64,
}

impl<L: Location> ListController<L> {
    /// Create a controller with no posts, rendered once in its default state
    pub fn new(config: ListConfig, location: L) -> Self {
        let config = config.normalize();
        let state = ViewState::new(&config);
        let search_input = Debouncer::new(Duration::from_millis(config.debounce_ms));

        let mut controller = Self {
            config,
            posts: Arc::from(Vec::new()),
            state,
            filtered: Vec::new(),
            total_pages: 1,
            search_input,
            location,
            view: ListView::default(),
            renders: 0,
        };
        controller.refresh();
        controller
    }

    /// Store the post set and re-render.
    ///
    /// The location is left alone so a following `init_from_location` still
    /// sees the original query string.
    pub fn load(&mut self, posts: Vec<PostRecord>) {
        tracing::debug!("Loaded {} posts", posts.len());
        self.posts = Arc::from(posts);
        self.refresh();
    }

    /// Parse and load a JSON post index; bad data loads as an empty set
    pub fn load_json(&mut self, json: &str) {
        match content::parse_posts(json) {
            Ok(posts) => self.load(posts),
            Err(e) => {
                tracing::warn!("Failed to parse post data, showing no posts: {}", e);
                self.load(Vec::new());
            }
        }
    }

    /// Read and load a post index file; a missing or bad file loads as an
    /// empty set
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        match content::load_posts(path, &self.config.data_script_id) {
            Ok(posts) => self.load(posts),
            Err(e) => {
                tracing::warn!("Failed to load posts from {:?}, showing no posts: {}", path, e);
                self.load(Vec::new());
            }
        }
    }

    /// Adopt the state encoded in the location's query string.
    ///
    /// Call after loading: a category that no loaded post carries is
    /// dropped, and the page is clamped against the loaded data.
    pub fn init_from_location(&mut self) {
        let search = self.location.search();
        let mut state = ViewState::from_query(&search, &self.config);

        if !state.category.is_empty() && !self.has_label(&state.category) {
            tracing::debug!(
                "Unknown category {:?} in location, showing all posts",
                state.category
            );
            state.category.clear();
        }

        self.search_input.cancel();
        self.state = state;
        self.commit();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search_input.cancel();
        self.state.query = text.into();
        self.state.page = 1;
        self.commit();
    }

    /// Select a category or tag; empty or `"all"` removes the filter
    pub fn set_category(&mut self, value: &str) {
        self.state.category = normalize_category(value);
        self.state.page = 1;
        self.commit();
    }

    /// Change the page size, keeping the page where it still exists.
    ///
    /// Sizes outside the configured options are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if !self.config.is_page_size(size) {
            tracing::debug!(
                "Ignoring page size {}, options are {:?}",
                size,
                self.config.page_sizes
            );
            return;
        }
        self.state.page_size = size;
        self.commit();
    }

    /// Go to a page; out-of-range pages are clamped
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page;
        self.commit();
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.state.page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.state.page + 1);
    }

    /// Reset search, category and page; the page size is kept
    pub fn clear(&mut self) {
        self.search_input.cancel();
        self.state.query.clear();
        self.state.category.clear();
        self.state.page = 1;
        self.commit();
    }

    /// Record a keystroke in the search box; applied by `poll` once input
    /// has been quiet for the debounce period
    pub fn input_query(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input.schedule(text.into(), now);
    }

    /// Apply debounced search input whose quiet period has passed.
    ///
    /// Returns whether a transition happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.search_input.poll(now) {
            Some(query) => {
                self.set_query(query);
                true
            }
            None => false,
        }
    }

    /// Apply pending search input immediately (e.g. on Enter)
    pub fn flush(&mut self) -> bool {
        match self.search_input.flush() {
            Some(query) => {
                self.set_query(query);
                true
            }
            None => false,
        }
    }

    /// When pending search input will be applied, if any
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_input.deadline()
    }

    /// Build the view for the current state
    pub fn render(&self) -> ListView {
        let count = self.filtered.len();
        let range = page_range(self.state.page, self.state.page_size, count);

        let entries = self.filtered[range]
            .iter()
            .map(|&i| self.entry(&self.posts[i]))
            .collect();

        ListView {
            entries,
            summary: summary(count),
            total: count,
            page: self.state.page,
            total_pages: self.total_pages,
            controls: self.controls(count),
        }
    }

    /// The view produced by the last transition
    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    /// Shared handle to the loaded posts
    pub fn shared_posts(&self) -> Arc<[PostRecord]> {
        Arc::clone(&self.posts)
    }

    /// Posts matching the current search and category, across all pages
    pub fn filtered(&self) -> Vec<&PostRecord> {
        self.filtered.iter().map(|&i| &self.posts[i]).collect()
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of renders so far, including the initial one
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Options for the category dropdown
    pub fn categories(&self) -> Vec<Facet> {
        filter::facets(&self.posts)
    }

    fn has_label(&self, label: &str) -> bool {
        self.posts
            .iter()
            .any(|post| post.labels().any(|l| filter::same_label(l, label)))
    }

    fn recompute(&mut self) {
        self.filtered =
            filter::filter_indices(&self.posts, &self.state.query, &self.state.category);
        self.total_pages = total_pages(self.filtered.len(), self.state.page_size);
        self.state.page = clamp_page(self.state.page, self.total_pages);
    }

    fn refresh(&mut self) {
        self.recompute();
        self.view = self.render();
        self.renders += 1;
        tracing::debug!(
            "Rendered page {}/{} ({} of {} posts match)",
            self.state.page,
            self.total_pages,
            self.filtered.len(),
            self.posts.len()
        );
    }

    fn commit(&mut self) {
        self.refresh();
        let search = self
            .state
            .merge_into(&self.location.search(), self.config.per_page);
        self.location.replace_search(&search);
    }

    fn href(&self, state: &ViewState) -> String {
        query_href(&state.to_query(self.config.per_page))
    }

    fn entry(&self, post: &PostRecord) -> PostEntry {
        let excerpt = strip_html(&post.excerpt).trim().to_string();

        let chips = post
            .categories
            .iter()
            .map(|c| (c, ChipKind::Category))
            .chain(post.tags.iter().map(|t| (t, ChipKind::Tag)))
            .map(|(label, kind)| self.chip(label, kind))
            .collect();

        let url = if post.url.is_empty() {
            String::new()
        } else {
            url_for(&self.config, &post.url)
        };

        PostEntry {
            title: post.title.clone(),
            url,
            date: post
                .date
                .map(|d| format_date(&d, &self.config.date_format))
                .unwrap_or_default(),
            datetime: post.date.as_ref().map(date_xml),
            excerpt: (!excerpt.is_empty()).then_some(excerpt),
            chips,
        }
    }

    fn chip(&self, label: &str, kind: ChipKind) -> Chip {
        let target = ViewState {
            category: label.to_string(),
            page: 1,
            ..self.state.clone()
        };
        let page_url = match kind {
            ChipKind::Category => category_url(&self.config, label),
            ChipKind::Tag => tag_url(&self.config, label),
        };

        Chip {
            label: label.to_string(),
            kind,
            filter_href: self.href(&target),
            page_url,
            active: filter::same_label(label, &self.state.category),
        }
    }

    fn controls(&self, count: usize) -> Vec<PageControl> {
        if count == 0 {
            return Vec::new();
        }

        let current = self.state.page;
        let last = self.total_pages;
        let mut controls = Vec::new();

        controls.push(self.control(
            ControlKind::Prev,
            current.saturating_sub(1).max(1),
            PREV_LABEL,
            current == 1,
            false,
        ));

        for page in page_window(current, last, self.config.pagination_window) {
            controls.push(self.control(
                ControlKind::Page,
                page,
                &page.to_string(),
                false,
                page == current,
            ));
        }

        controls.push(self.control(
            ControlKind::Next,
            (current + 1).min(last),
            NEXT_LABEL,
            current == last,
            false,
        ));

        controls
    }

    fn control(
        &self,
        kind: ControlKind,
        page: usize,
        label: &str,
        disabled: bool,
        active: bool,
    ) -> PageControl {
        let target = ViewState {
            page,
            ..self.state.clone()
        };
        PageControl {
            kind,
            page,
            label: label.to_string(),
            disabled,
            active,
            href: self.href(&target),
        }
    }
}

impl Default for ListController<MemoryLocation> {
    fn default() -> Self {
        Self::new(ListConfig::default(), MemoryLocation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_date;

    fn numbered(n: usize) -> Vec<PostRecord> {
        (1..=n)
            .map(|i| PostRecord::new(format!("Post {}", i), format!("/posts/{}/", i)))
            .collect()
    }

    fn titles(view: &ListView) -> Vec<String> {
        view.entries.iter().map(|e| e.title.clone()).collect()
    }

    fn numbers(view: &ListView) -> Vec<usize> {
        view.numbers().map(|c| c.page).collect()
    }

    fn loaded(posts: Vec<PostRecord>) -> ListController {
        let mut controller = ListController::default();
        controller.load(posts);
        controller
    }

    #[test]
    fn test_first_page_of_25() {
        let controller = loaded(numbered(25));
        let view = controller.view();

        let expected: Vec<String> = (1..=10).map(|i| format!("Post {}", i)).collect();
        assert_eq!(titles(view), expected);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.summary, "25 posts found");
        assert!(view.prev().unwrap().disabled);
        assert!(!view.next().unwrap().disabled);
        assert_eq!(view.next().unwrap().href, "?p=2");
        assert_eq!(numbers(view), vec![1, 2, 3]);
        assert!(view.numbers().next().unwrap().active);
    }

    #[test]
    fn test_last_page() {
        let mut controller = loaded(numbered(25));
        controller.set_page(3);
        let view = controller.view();

        assert_eq!(titles(view), vec!["Post 21", "Post 22", "Post 23", "Post 24", "Post 25"]);
        assert!(!view.prev().unwrap().disabled);
        assert_eq!(view.prev().unwrap().page, 2);
        assert!(view.next().unwrap().disabled);
    }

    #[test]
    fn test_total_pages_formula() {
        for page_size in [10, 20, 50] {
            for n in [0, 1, 9, 10, 11, 49, 50, 51, 137] {
                let mut controller = loaded(numbered(n));
                controller.set_page_size(page_size);
                let expected = n.div_ceil(page_size).max(1);
                assert_eq!(controller.total_pages(), expected, "n={} size={}", n, page_size);
            }
        }
    }

    #[test]
    fn test_page_clamps() {
        let mut controller = loaded(numbered(25));
        controller.set_page(99);
        assert_eq!(controller.state().page, 3);
        assert_eq!(controller.view().page, 3);

        controller.set_page(0);
        assert_eq!(controller.state().page, 1);

        controller.prev_page();
        assert_eq!(controller.state().page, 1);
        controller.next_page();
        controller.next_page();
        controller.next_page();
        assert_eq!(controller.state().page, 3);
    }

    #[test]
    fn test_query_resets_page() {
        let mut posts = numbered(25);
        posts[4].title = "Vector clocks".to_string();
        posts[16].title = "Building a VECTOR database".to_string();
        posts[23].title = "Vectorized loops".to_string();

        let mut controller = loaded(posts);
        controller.set_page(3);
        assert_eq!(controller.state().page, 3);

        controller.set_query("vector");
        assert_eq!(controller.state().page, 1);
        assert_eq!(
            titles(controller.view()),
            vec!["Vector clocks", "Building a VECTOR database", "Vectorized loops"]
        );
        assert_eq!(controller.view().summary, "3 posts found");
    }

    #[test]
    fn test_category_matches_categories_or_tags() {
        let posts = vec![
            PostRecord::new("A", "/a/").with_categories(["Concurrency"]),
            PostRecord::new("B", "/b/").with_tags(["rust", "concurrency"]),
            PostRecord::new("C", "/c/").with_tags(["concurrency101"]),
            PostRecord::new("D", "/d/").with_categories(["Networking"]),
        ];
        let mut controller = loaded(posts);
        controller.set_category("concurrency");

        assert_eq!(titles(controller.view()), vec!["A", "B"]);
        assert_eq!(controller.view().summary, "2 posts found");
        let chip = &controller.view().entries[0].chips[0];
        assert!(chip.active);
        assert_eq!(chip.page_url, "/categories/concurrency/");
    }

    #[test]
    fn test_category_resets_page() {
        let posts: Vec<PostRecord> = numbered(30)
            .into_iter()
            .map(|p| p.with_tags(["rust"]))
            .collect();
        let mut controller = loaded(posts);
        controller.set_page(2);
        controller.set_category("Rust");
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.view().total, 30);

        controller.set_page(3);
        controller.set_category("all");
        assert_eq!(controller.state().category, "");
        assert_eq!(controller.state().page, 1);
    }

    #[test]
    fn test_set_page_keeps_filters() {
        let mut controller = loaded(numbered(25));
        controller.set_query("post");
        controller.set_page(2);
        assert_eq!(controller.state().query, "post");
        assert_eq!(controller.state().page, 2);
    }

    #[test]
    fn test_malformed_data_renders_empty() {
        for input in ["", "not json", "{\"posts\": 3}", "[{\"title\": []}]"] {
            let mut controller = loaded(numbered(3));
            controller.load_json(input);
            let view = controller.view();
            assert!(controller.posts().is_empty());
            assert!(view.is_empty());
            assert_eq!(view.summary, "0 posts found");
            assert!(view.controls.is_empty());
            assert_eq!(view.total_pages, 1);
        }
    }

    #[test]
    fn test_load_missing_file_renders_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = loaded(numbered(3));
        controller.load_path(dir.path().join("nope.json"));
        assert_eq!(controller.view().summary, "0 posts found");
    }

    #[test]
    fn test_no_matches_empty_strip() {
        let mut controller = loaded(numbered(5));
        controller.set_query("nothing like this");
        assert_eq!(controller.view().summary, "0 posts found");
        assert!(controller.view().controls.is_empty());
        assert_eq!(controller.state().page, 1);
    }

    #[test]
    fn test_single_page_keeps_prev_next() {
        let controller = loaded(numbered(4));
        let view = controller.view();
        assert_eq!(view.controls.len(), 3);
        assert!(view.prev().unwrap().disabled);
        assert!(view.next().unwrap().disabled);
    }

    #[test]
    fn test_window_follows_current_page() {
        let mut controller = loaded(numbered(100));
        assert_eq!(numbers(controller.view()), vec![1, 2, 3, 4, 5]);
        controller.set_page(6);
        assert_eq!(numbers(controller.view()), vec![4, 5, 6, 7, 8]);
        controller.set_page(10);
        assert_eq!(numbers(controller.view()), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_size_change() {
        let mut controller = loaded(numbered(25));
        controller.set_page(3);
        controller.set_page_size(20);
        assert_eq!(controller.state().page, 2);
        assert_eq!(controller.total_pages(), 2);
        assert_eq!(controller.location().search(), "p=2&n=20");

        let renders = controller.renders();
        controller.set_page_size(13);
        assert_eq!(controller.state().page_size, 20);
        assert_eq!(controller.renders(), renders);
    }

    #[test]
    fn test_init_from_location() {
        let location = MemoryLocation::new("?q=post&c=nope&p=99&n=20");
        let mut controller = ListController::new(ListConfig::default(), location);
        controller.load(numbered(25));
        controller.init_from_location();

        let state = controller.state();
        assert_eq!(state.query, "post");
        assert_eq!(state.category, "");
        assert_eq!(state.page_size, 20);
        assert_eq!(state.page, 2);
        assert_eq!(controller.location().search(), "q=post&p=2&n=20");
    }

    #[test]
    fn test_init_with_invalid_values() {
        let location = MemoryLocation::new("p=two&n=7");
        let mut controller = ListController::new(ListConfig::default(), location);
        controller.load(numbered(25));
        controller.init_from_location();

        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.state().page_size, 10);
        assert_eq!(controller.location().search(), "");
    }

    #[test]
    fn test_init_keeps_known_category() {
        let posts = vec![PostRecord::new("A", "/a/").with_tags(["Rust"])];
        let location = MemoryLocation::new("c=rust");
        let mut controller = ListController::new(ListConfig::default(), location);
        controller.load(posts);
        controller.init_from_location();
        assert_eq!(controller.state().category, "rust");
        assert_eq!(controller.view().total, 1);
    }

    #[test]
    fn test_location_round_trip() {
        let mut controller = loaded(numbered(60));
        controller.set_query("post 1");
        controller.set_page_size(20);
        controller.set_page(2);

        let search = controller.location().search();
        let decoded = ViewState::from_query(&search, controller.config());
        assert_eq!(&decoded, controller.state());
    }

    #[test]
    fn test_location_keeps_foreign_params() {
        let mut controller =
            ListController::new(ListConfig::default(), MemoryLocation::new("lang=en"));
        controller.load(numbered(25));
        controller.set_query("post");
        assert_eq!(controller.location().search(), "lang=en&q=post");
        controller.clear();
        assert_eq!(controller.location().search(), "lang=en");
    }

    #[test]
    fn test_every_transition_renders_and_writes() {
        let mut controller = loaded(numbered(25));
        let renders = controller.renders();
        let writes = controller.location().replacements();

        controller.set_query("post");
        controller.set_category("");
        controller.set_page(2);
        controller.set_page_size(20);
        controller.clear();

        assert_eq!(controller.renders(), renders + 5);
        assert_eq!(controller.location().replacements(), writes + 5);
        assert_eq!(controller.render(), *controller.view());
    }

    #[test]
    fn test_clear() {
        let mut controller = loaded(numbered(60));
        controller.set_page_size(20);
        controller.set_query("post");
        controller.set_page(3);
        controller.clear();

        let state = controller.state();
        assert_eq!(state.query, "");
        assert_eq!(state.category, "");
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 20);
    }

    #[test]
    fn test_debounced_search() {
        let mut posts = numbered(25);
        posts[0].title = "Vector search".to_string();
        let mut controller = loaded(posts);
        controller.set_page(2);

        let start = Instant::now();
        let renders = controller.renders();
        controller.input_query("v", start);
        controller.input_query("vec", start + Duration::from_millis(40));
        controller.input_query("vector", start + Duration::from_millis(80));

        assert!(!controller.poll(start + Duration::from_millis(120)));
        assert_eq!(controller.state().query, "");
        assert_eq!(controller.renders(), renders);

        assert!(controller.poll(start + Duration::from_millis(180)));
        assert_eq!(controller.state().query, "vector");
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.renders(), renders + 1);
        assert!(!controller.poll(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_huge_debounce_period_does_not_panic() {
        let config = ListConfig {
            debounce_ms: u64::MAX,
            ..Default::default()
        };
        let mut controller = ListController::new(config, MemoryLocation::default());
        controller.load(numbered(5));
        let start = Instant::now();

        controller.input_query("post 2", start);
        assert!(!controller.poll(start + Duration::from_secs(60)));
        assert!(controller.flush());
        assert_eq!(controller.view().total, 1);
    }

    #[test]
    fn test_direct_query_cancels_pending_input() {
        let mut controller = loaded(numbered(5));
        let start = Instant::now();
        controller.input_query("stale", start);
        assert!(controller.search_deadline().is_some());

        controller.set_query("fresh");
        assert!(controller.search_deadline().is_none());
        assert!(!controller.poll(start + Duration::from_secs(1)));
        assert_eq!(controller.state().query, "fresh");

        controller.input_query("post 3", start);
        assert!(controller.flush());
        assert_eq!(controller.view().total, 1);
    }

    #[test]
    fn test_entry_rendering() {
        let post = PostRecord::new("Hello", "/2024/01/15/hello/")
            .with_date(parse_date("2024-01-15T09:00:00").unwrap())
            .with_categories(["Notes"])
            .with_tags(["Rust Lang"])
            .with_excerpt("<p>First <em>post</em></p>");
        let mut controller = loaded(vec![post]);
        controller.set_query("hello");

        let entry = &controller.view().entries[0];
        assert_eq!(entry.url, "/2024/01/15/hello/");
        assert_eq!(entry.date, "Jan 15, 2024");
        assert_eq!(entry.datetime.as_deref(), Some("2024-01-15T09:00:00"));
        assert_eq!(entry.excerpt.as_deref(), Some("First post"));
        assert_eq!(entry.chips.len(), 2);
        assert_eq!(entry.chips[0].kind, ChipKind::Category);
        assert_eq!(entry.chips[1].filter_href, "?q=hello&c=Rust+Lang");
        assert_eq!(entry.chips[1].page_url, "/tags/rust-lang/");
        assert!(!entry.chips[1].active);
    }

    #[test]
    fn test_search_matches_displayed_excerpt_only() {
        let post = PostRecord::new("Ownership", "/o/")
            .with_excerpt(r#"<p class="lead">Borrowing <strong>rules</strong></p>"#);
        let mut controller = loaded(vec![post]);

        controller.set_query("strong");
        assert_eq!(controller.view().total, 0);
        assert_eq!(controller.view().summary, "0 posts found");

        controller.set_query("rules");
        assert_eq!(controller.view().total, 1);
        assert_eq!(
            controller.view().entries[0].excerpt.as_deref(),
            Some("Borrowing rules")
        );
    }

    #[test]
    fn test_entry_without_date_or_excerpt() {
        let controller = loaded(vec![PostRecord::new("Bare", "")]);
        let entry = &controller.view().entries[0];
        assert_eq!(entry.date, "");
        assert!(entry.datetime.is_none());
        assert!(entry.excerpt.is_none());
        assert!(entry.chips.is_empty());
    }

    #[test]
    fn test_categories() {
        let posts = vec![
            PostRecord::new("A", "/a/").with_categories(["Systems"]).with_tags(["rust"]),
            PostRecord::new("B", "/b/").with_tags(["Rust"]),
        ];
        let controller = loaded(posts);
        let facets = controller.categories();
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].name, "rust");
        assert_eq!(facets[0].count, 2);
        assert_eq!(facets[1].name, "Systems");
    }

    #[test]
    fn test_posts_shared_read_only() {
        let controller = loaded(numbered(3));
        let shared = controller.shared_posts();
        assert_eq!(shared.len(), 3);
        assert!(Arc::ptr_eq(&shared, &controller.shared_posts()));
    }
}
