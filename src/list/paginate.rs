//! Page arithmetic

use std::ops::{Range, RangeInclusive};

/// Number of pages for `count` items, never less than one
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Clamp a requested page into `[1, total]`
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Index range of the items shown on `page`
pub fn page_range(page: usize, page_size: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(count);
    let end = (start + page_size).min(count);
    start..end
}

/// Page numbers to show as buttons.
///
/// Up to `size` pages centred on `current`, shifted to stay inside
/// `[1, total]` near either edge.
pub fn page_window(current: usize, total: usize, size: usize) -> RangeInclusive<usize> {
    let total = total.max(1);
    let size = size.clamp(1, total);
    let current = clamp_page(current, total);

    let start = current.saturating_sub(size / 2).max(1).min(total - size + 1);
    start..=start + size - 1
}
