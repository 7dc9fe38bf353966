//! View state and its query-string form
//!
//! The list owns four query parameters: `q` (search text), `c` (category),
//! `p` (page) and `n` (page size). Each is omitted while it holds its
//! default, so an untouched list has a clean URL.

use url::form_urlencoded;

use crate::config::ListConfig;

pub const QUERY_PARAM: &str = "q";
pub const CATEGORY_PARAM: &str = "c";
pub const PAGE_PARAM: &str = "p";
pub const PAGE_SIZE_PARAM: &str = "n";

const OWNED_PARAMS: [&str; 4] = [QUERY_PARAM, CATEGORY_PARAM, PAGE_PARAM, PAGE_SIZE_PARAM];

/// Search, filter and pagination parameters driving what is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Free-text search
    pub query: String,
    /// Selected category or tag, empty for all
    pub category: String,
    /// Posts per page, one of the configured sizes
    pub page_size: usize,
    /// Current page, 1-based
    pub page: usize,
}

impl ViewState {
    /// Default state for a configuration
    pub fn new(config: &ListConfig) -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            page_size: config.per_page,
            page: 1,
        }
    }

    /// Decode state from a query string, with or without the leading `?`.
    ///
    /// Never fails: missing or invalid values fall back to defaults. A page
    /// that does not parse as a positive integer becomes 1; a page size that
    /// is not one of the configured sizes becomes the smallest one. Upper
    /// page bounds depend on the data and are clamped by the controller.
    pub fn from_query(search: &str, config: &ListConfig) -> Self {
        let params = parse_query(search);
        let get = |key: &str| first_value(&params, key);

        let query = get(QUERY_PARAM).unwrap_or_default().to_string();
        let category = normalize_category(get(CATEGORY_PARAM).unwrap_or_default());

        let page = get(PAGE_PARAM)
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);

        let page_size = match get(PAGE_SIZE_PARAM) {
            None => config.per_page,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if config.is_page_size(n) => n,
                _ => {
                    tracing::debug!("Invalid page size {:?}, using smallest option", raw);
                    config.smallest_page_size()
                }
            },
        };

        Self {
            query,
            category,
            page_size,
            page,
        }
    }

    /// Encoded parameters for this state, defaults omitted
    pub fn to_params(&self, default_page_size: usize) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.query.is_empty() {
            params.push((QUERY_PARAM, self.query.clone()));
        }
        if !self.category.is_empty() {
            params.push((CATEGORY_PARAM, self.category.clone()));
        }
        if self.page != 1 {
            params.push((PAGE_PARAM, self.page.to_string()));
        }
        if self.page_size != default_page_size {
            params.push((PAGE_SIZE_PARAM, self.page_size.to_string()));
        }
        params
    }

    /// Encode as a query string (no leading `?`, empty for the default state)
    pub fn to_query(&self, default_page_size: usize) -> String {
        encode_query(
            self.to_params(default_page_size)
                .iter()
                .map(|(k, v)| (*k, v.as_str())),
        )
    }

    /// Rewrite `search`, replacing the list's parameters with this state and
    /// keeping every other parameter in place
    pub fn merge_into(&self, search: &str, default_page_size: usize) -> String {
        let foreign = parse_query(search)
            .into_iter()
            .filter(|(k, _)| !OWNED_PARAMS.contains(&k.as_str()));
        let own = self.to_params(default_page_size);

        let mut pairs: Vec<(String, String)> = foreign.collect();
        pairs.extend(own.into_iter().map(|(k, v)| (k.to_string(), v)));

        encode_query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// `"all"` in any case means no category filter
pub fn normalize_category(value: &str) -> String {
    let value = value.trim();
    if value.eq_ignore_ascii_case("all") {
        String::new()
    } else {
        value.to_string()
    }
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Split a query string into decoded key/value pairs, in order.
///
/// `+` and `%20` both decode to a space; malformed escapes are kept as
/// written.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Join key/value pairs into a query string
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
