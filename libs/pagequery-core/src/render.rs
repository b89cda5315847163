//! QuerySpec → driver-vocabulary rendering. The core only models conditions
//! and options; each target store gets its own renderer.

use serde_json::{json, Map, Value};

use crate::query::{FilterCondition, QueryOptions, QuerySpec};

/// Renders the driver-agnostic spec into one store's native filter and
/// options shapes.
pub trait QueryRenderer {
    type Filter;
    type Options;

    fn render_filter(&self, filter: &[FilterCondition]) -> Self::Filter;
    fn render_options(&self, options: &QueryOptions) -> Self::Options;

    fn render(&self, spec: &QuerySpec) -> (Self::Filter, Self::Options) {
        (
            self.render_filter(&spec.filter),
            self.render_options(&spec.options),
        )
    }
}

/// Renderer for document stores speaking the `$regex`/`$options` filter
/// vocabulary with `limit`/`skip`/`sort` options. An unpaged spec renders as
/// two empty documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRenderer;

impl QueryRenderer for DocumentRenderer {
    type Filter = Value;
    type Options = Value;

    fn render_filter(&self, filter: &[FilterCondition]) -> Value {
        let mut doc = Map::new();
        for cond in filter {
            doc.insert(
                cond.field.clone(),
                json!({ "$regex": cond.pattern, "$options": "i" }),
            );
        }
        Value::Object(doc)
    }

    fn render_options(&self, options: &QueryOptions) -> Value {
        let mut doc = Map::new();
        if let Some(limit) = options.limit {
            doc.insert("limit".into(), limit.into());
        }
        if let Some(offset) = options.offset {
            doc.insert("skip".into(), offset.into());
        }
        if !options.sort.is_empty() {
            // sort document keys keep clause order (serde_json preserve_order)
            let mut sort_doc = Map::new();
            for key in &options.sort {
                sort_doc.insert(key.field.clone(), key.dir.sign().into());
            }
            doc.insert("sort".into(), Value::Object(sort_doc));
        }
        Value::Object(doc)
    }
}
