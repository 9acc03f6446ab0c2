//! Filtering and pagination for the public portfolio listing.

use serde::Serialize;

use crate::tag::normalize_tag_name;

/// Default number of projects per portfolio page.
pub const DEFAULT_PAGE_SIZE: i64 = 9;

/// Maximum number of projects per portfolio page.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Default page size for admin list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum page size for admin list endpoints.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Normalized portfolio filter. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioFilter {
    pub category: Option<String>,
    pub technology: Option<String>,
    pub starred_only: bool,
}

impl PortfolioFilter {
    /// Build a filter from raw query values.
    ///
    /// Blank values and the literal `all` (any casing) mean no filter.
    pub fn new(category: Option<&str>, technology: Option<&str>, starred_only: bool) -> Self {
        Self {
            category: normalize_filter_value(category),
            technology: normalize_filter_value(technology),
            starred_only,
        }
    }
}

fn normalize_filter_value(value: Option<&str>) -> Option<String> {
    value
        .map(normalize_tag_name)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub page_size: i64,
}

impl Page {
    /// Clamp raw query values: page ≥ 1, page size in `1..=MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: clamp_limit(page_size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
}

impl PageInfo {
    pub fn new(page: Page, total: i64) -> Self {
        let total = total.max(0);
        let total_pages = if total == 0 {
            0
        } else {
            (total + page.page_size - 1) / page.page_size
        };
        Self {
            page: page.page,
            page_size: page.page_size,
            total,
            total_pages,
            has_next: page.page < total_pages,
        }
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
