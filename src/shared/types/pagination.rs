use serde::{Deserialize, Serialize};

/// Largest limit or offset the SQL layer can bind (a signed 64-bit integer).
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// Pagination query parameters, as received from the caller.
///
/// Values are signed so that out-of-range input (`page: 0`, `limit: -5`) can be
/// accepted and normalized instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub page: i64,
    pub limit: i64,
    pub order_by: Option<String>,
}

impl Params {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            order_by: None,
        }
    }

    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by = Some(expr.into());
        self
    }

    /// Page number with anything below 1 mapped to 1.
    pub fn normalized_page(&self) -> u64 {
        if self.page < 1 {
            1
        } else {
            self.page as u64
        }
    }

    /// Limit with non-positive values replaced by `default_limit` and the
    /// result capped at `max_limit` and at [`MAX_BOUND`].
    pub fn normalized_limit(&self, default_limit: u64, max_limit: Option<u64>) -> u64 {
        let limit = if self.limit <= 0 {
            default_limit.max(1)
        } else {
            self.limit as u64
        };
        let limit = match max_limit {
            Some(max) => limit.min(max.max(1)),
            None => limit,
        };
        limit.min(MAX_BOUND)
    }

    /// The order expression, if it contains anything besides whitespace.
    pub fn order_expr(&self) -> Option<&str> {
        self.order_by
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub page: u64,
    pub limit: u64,
    pub total_records: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Metadata {
    /// A zero `limit` is treated as 1.
    pub fn new(page: u64, limit: u64, total_records: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total_records.div_ceil(limit);
        Self {
            page,
            limit,
            total_records,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Rows skipped before this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    pub fn next_page(&self) -> Option<u64> {
        self.has_next.then(|| self.page + 1)
    }

    pub fn prev_page(&self) -> Option<u64> {
        self.has_prev.then(|| self.page - 1)
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub metadata: Metadata,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, metadata: Metadata) -> Self {
        Self { items, metadata }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_parts(self) -> (Vec<T>, Metadata) {
        (self.items, self.metadata)
    }

    /// Convert every item, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}
