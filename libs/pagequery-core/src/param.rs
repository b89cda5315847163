use serde::{Deserialize, Serialize};

/// Page size applied when the caller sends a non-positive `size`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Sort expression applied when the caller sends none.
pub const DEFAULT_SORT: &str = "_id,desc";

/// Decoded list-endpoint parameters.
///
/// The decoding collaborator deserializes straight into this type; absent
/// fields take their defaults via `#[serde(default)]`, which is the
/// default-merge step. Numeric fields are clamped in place by
/// [`build_query`](crate::query::build_query), so a single instance must not
/// be shared across concurrent query constructions.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListParams {
    /// Zero-based page index.
    pub page: i64,
    /// When false the query is unconstrained: no filter, limit, offset or sort.
    pub paged: bool,
    /// Free-text term matched case-insensitively as a substring against each
    /// searchable field.
    pub q: String,
    /// Page size.
    pub size: i64,
    /// Raw sort expression: `field,dir` clauses separated by `;`.
    pub sort: String,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 0,
            paged: true,
            q: String::new(),
            size: DEFAULT_PAGE_SIZE,
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl ListParams {
    /// Rewrite out-of-range numeric fields so downstream arithmetic only sees
    /// valid ranges: a non-positive `size` becomes [`DEFAULT_PAGE_SIZE`], a
    /// negative `page` becomes zero. Never fails.
    pub fn clamp(&mut self) {
        if self.size <= 0 {
            tracing::debug!(size = self.size, "clamping non-positive page size");
            self.size = DEFAULT_PAGE_SIZE;
        }
        if self.page < 0 {
            tracing::debug!(page = self.page, "clamping negative page index");
            self.page = 0;
        }
    }

    /// Row offset of this page. Meaningful once [`clamp`](Self::clamp) has run.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}
