//! Configuration module

use serde::Deserialize;

/// Pager configuration
///
/// Deserializable so applications can embed it in their own config files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Limit used when the request carries none (or a non-positive one)
    pub default_limit: u64,
    /// Upper bound applied to every requested limit
    pub max_limit: Option<u64>,
    /// Order expression used when the request carries none
    pub default_order_by: Option<String>,
}

impl PagerConfig {
    pub fn new(default_limit: u64) -> Self {
        Self {
            default_limit,
            ..Self::default()
        }
    }

    pub fn with_max_limit(mut self, max_limit: u64) -> Self {
        self.max_limit = Some(max_limit);
        self
    }

    pub fn with_default_order_by(mut self, expr: impl Into<String>) -> Self {
        self.default_order_by = Some(expr.into());
        self
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: None,
            default_order_by: None,
        }
    }
}
