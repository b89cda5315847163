//! Translation of untyped list-endpoint query parameters (page index, page
//! size, free-text search term, sort expression, paging toggle) into a
//! driver-agnostic query specification, plus pagination metadata for the
//! response.
//!
//! The pipeline is designed to never fail: out-of-range numbers are clamped,
//! an unparsable sort expression falls back to `_id` descending, and an
//! empty searchable-field list simply yields an empty filter. Transport
//! decoding, query execution and response serialization are the caller's
//! collaborators; this crate only builds the specification and the page
//! summary.
//!
//! ```
//! use pagequery_core::{build_query, ListParams, PageSummary};
//!
//! let mut params = ListParams {
//!     q: "bob".into(),
//!     ..ListParams::default()
//! };
//! let spec = build_query(&mut params, &["name", "email"]);
//! assert_eq!(spec.filter.len(), 2);
//! assert_eq!(spec.options.limit, Some(20));
//!
//! // once the execution collaborator reports the total row count:
//! let summary = PageSummary::compute(&params, 41);
//! assert_eq!(summary.total_pages, 3);
//! ```

pub mod page;
pub mod param;
pub mod query;
pub mod render;
pub mod sort;

pub use page::{Page, PageSummary};
pub use param::{ListParams, DEFAULT_PAGE_SIZE, DEFAULT_SORT};
pub use query::{build_query, FilterCondition, QueryOptions, QuerySpec};
pub use render::{DocumentRenderer, QueryRenderer};
pub use sort::{
    parse_sort, parse_sort_strict, SortDir, SortKey, SortParseError, DEFAULT_SORT_FIELD,
};
