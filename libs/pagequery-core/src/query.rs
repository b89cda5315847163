use serde::Serialize;

use crate::param::ListParams;
use crate::sort::{parse_sort, SortKey};

/// One case-insensitive substring constraint against a single field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterCondition {
    pub field: String,
    pub pattern: String,
}

impl FilterCondition {
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// In-memory evaluation of the constraint against a field value.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        value
            .to_lowercase()
            .contains(&self.pattern.to_lowercase())
    }
}

/// Limit, offset and ordering attached to a query. All three are absent for
/// an unpaged query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort: Vec<SortKey>,
}

/// Driver-agnostic query specification: the filter set plus query options.
/// A [`QueryRenderer`](crate::render::QueryRenderer) turns it into one
/// store's native shapes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuerySpec {
    pub filter: Vec<FilterCondition>,
    pub options: QueryOptions,
}

impl QuerySpec {
    /// Spec with no filter and no constraints.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::default()
    }
}

/// Build the query specification for one request.
///
/// `params` is clamped in place first, so the same instance can be handed to
/// [`PageSummary::compute`](crate::page::PageSummary::compute) afterwards.
/// When `paged` is false the result is unconstrained regardless of the other
/// fields. Otherwise the filter holds one condition per searchable field
/// (none when `q` is empty) and the options carry `limit = size`,
/// `offset = page * size` and the parsed sort keys.
pub fn build_query(params: &mut ListParams, searchable_fields: &[&str]) -> QuerySpec {
    params.clamp();

    if !params.paged {
        return QuerySpec::unconstrained();
    }

    let filter: Vec<FilterCondition> = if params.q.is_empty() {
        Vec::new()
    } else {
        searchable_fields
            .iter()
            .map(|field| FilterCondition::new(*field, params.q.clone()))
            .collect()
    };

    let options = QueryOptions {
        limit: Some(params.size),
        offset: Some(params.offset()),
        sort: parse_sort(&params.sort),
    };

    tracing::debug!(
        conditions = filter.len(),
        limit = params.size,
        offset = params.offset(),
        "built query spec"
    );

    QuerySpec { filter, options }
}
