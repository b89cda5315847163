//! End-to-end exercise of the translation pipeline: decoded parameters in,
//! rendered query documents and a page summary out.

use pagequery_core::{
    build_query, DocumentRenderer, ListParams, Page, PageSummary, QueryRenderer,
};

#[derive(Clone)]
struct User {
    name: String,
    email: String,
}

#[test]
fn search_request_round_trip() {
    // what the decoding collaborator would produce from
    // `?q=ali&page=1&size=2&sort=name,asc`
    let mut params: ListParams =
        serde_json::from_str(r#"{"q":"ali","page":1,"size":2,"sort":"name,asc"}"#).unwrap();

    let spec = build_query(&mut params, &["name", "email"]);
    let (filter, options) = DocumentRenderer.render(&spec);

    assert_eq!(
        filter,
        serde_json::json!({
            "name": { "$regex": "ali", "$options": "i" },
            "email": { "$regex": "ali", "$options": "i" },
        })
    );
    assert_eq!(
        options,
        serde_json::json!({ "limit": 2, "skip": 2, "sort": { "name": 1 } })
    );

    // the execution collaborator runs the query and reports 3 matching rows
    let rows = vec![
        User {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        },
        User {
            name: "Salim".into(),
            email: "ali@example.com".into(),
        },
    ];
    assert!(rows
        .iter()
        .all(|u| spec.filter.iter().any(|c| match c.field.as_str() {
            "name" => c.matches(&u.name),
            "email" => c.matches(&u.email),
            _ => false,
        })));

    let summary = PageSummary::compute(&params, 3);
    assert_eq!(summary.page, 1);
    assert_eq!(summary.page_size, 2);
    assert_eq!(summary.total_count, 3);
    assert_eq!(summary.total_pages, 2);

    let page = Page::new(rows, summary).map_items(|u| u.name);
    assert_eq!(page.items, vec!["Alice".to_string(), "Salim".to_string()]);
    assert_eq!(page.summary.total_pages, 2);
}

#[test]
fn unpaged_request_bypasses_everything() {
    let mut params: ListParams =
        serde_json::from_str(r#"{"paged":false,"q":"ali","sort":"name,asc"}"#).unwrap();

    let spec = build_query(&mut params, &["name", "email"]);
    let (filter, options) = DocumentRenderer.render(&spec);

    assert_eq!(filter, serde_json::json!({}));
    assert_eq!(options, serde_json::json!({}));
}

#[test]
fn malformed_numbers_still_produce_a_usable_query() {
    let mut params: ListParams =
        serde_json::from_str(r#"{"page":-2,"size":-10,"q":"bob"}"#).unwrap();

    let spec = build_query(&mut params, &["name"]);
    assert_eq!(spec.options.limit, Some(20));
    assert_eq!(spec.options.offset, Some(0));

    let summary = PageSummary::compute(&params, 41);
    assert_eq!(summary.page, 0);
    assert_eq!(summary.page_size, 20);
    assert_eq!(summary.total_pages, 3);
}

#[test]
fn empty_page_carries_a_single_total_page() {
    let mut params = ListParams::default();
    let _ = build_query(&mut params, &["name"]);

    let page: Page<String> = Page::empty(&params);
    assert!(page.items.is_empty());
    assert_eq!(page.summary.total_count, 0);
    assert_eq!(page.summary.total_pages, 1);
}
