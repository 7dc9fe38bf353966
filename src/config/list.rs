//! List configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ListError, Result};

const DEFAULT_PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Settings for the post list widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    // Pagination
    pub page_sizes: Vec<usize>,
    pub per_page: usize,
    pub pagination_window: usize,

    // Search
    pub debounce_ms: u64,

    // Display
    pub date_format: String,

    // URL
    pub root: String,
    pub tag_dir: String,
    pub category_dir: String,

    // Data
    pub data_script_id: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            per_page: 10,
            pagination_window: 5,

            debounce_ms: 100,

            date_format: "MMM DD, YYYY".to_string(),

            root: "/".to_string(),
            tag_dir: "tags".to_string(),
            category_dir: "categories".to_string(),

            data_script_id: "posts-data".to_string(),
        }
    }
}

impl ListConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ListConfig = serde_yaml::from_str(&content)?;
        Ok(config.normalize())
    }

    /// Repair values the list cannot work with.
    ///
    /// Page sizes are sorted, deduplicated and stripped of zeros; `per_page`
    /// must be one of them.
    pub fn normalize(mut self) -> Self {
        self.page_sizes.retain(|&n| n > 0);
        self.page_sizes.sort_unstable();
        self.page_sizes.dedup();
        if self.page_sizes.is_empty() {
            tracing::warn!("No usable page sizes configured, using defaults");
            self.page_sizes = DEFAULT_PAGE_SIZES.to_vec();
        }

        if !self.page_sizes.contains(&self.per_page) {
            tracing::warn!(
                "per_page {} is not one of {:?}, using {}",
                self.per_page,
                self.page_sizes,
                self.page_sizes[0]
            );
            self.per_page = self.page_sizes[0];
        }

        if self.pagination_window == 0 {
            self.pagination_window = 1;
        }

        self
    }

    /// Smallest enumerated page size
    pub fn smallest_page_size(&self) -> usize {
        self.page_sizes.first().copied().unwrap_or(DEFAULT_PAGE_SIZES[0])
    }

    /// Whether `size` is one of the enumerated page sizes
    pub fn is_page_size(&self, size: usize) -> bool {
        self.page_sizes.contains(&size)
    }
}
