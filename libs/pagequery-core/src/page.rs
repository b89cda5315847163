use serde::{Deserialize, Serialize};

use crate::param::ListParams;

/// Pagination metadata for one query response.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl PageSummary {
    /// Derive the summary from the effective parameters and the total row
    /// count reported by the execution collaborator.
    ///
    /// Expects `params` to be clamped already (the query builder does this);
    /// this operation does not clamp. `total_pages` is at least one, even
    /// for an empty result set.
    #[must_use]
    pub fn compute(params: &ListParams, total_count: i64) -> Self {
        let total_pages = if total_count < params.size {
            1
        } else {
            (total_count as f64 / params.size as f64).ceil() as i64
        };

        Self {
            page: params.page,
            page_size: params.size,
            total_count,
            total_pages,
        }
    }
}

/// A page of items together with its summary.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub summary: PageSummary,
}

impl<T> Page<T> {
    /// Create a new page with items and summary
    pub fn new(items: Vec<T>, summary: PageSummary) -> Self {
        Self { items, summary }
    }

    /// Create an empty page for the given parameters
    pub fn empty(params: &ListParams) -> Self {
        Self {
            items: Vec::new(),
            summary: PageSummary::compute(params, 0),
        }
    }

    /// Map items while preserving the summary (Domain->DTO mapping convenience)
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(&mut f).collect(),
            summary: self.summary,
        }
    }
}
