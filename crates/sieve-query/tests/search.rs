//! End-to-end behavior of `SearchRequest::get_items`.

use sieve_query::{
    Number, SearchOptions, SearchPage, SearchRequest, SortDirection, Term, Timestamp, Value,
};

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: usize,
    name: String,
    balance: i64,
    active: bool,
    opened: i64,
}

fn accessor<'a>(account: &'a Account, field: &str) -> Value<'a> {
    match field {
        "id" => Value::Number(Number::from(account.id)),
        "name" => Value::String(&account.name),
        "balance" => Value::Number(Number::I64(account.balance)),
        "active" => Value::Bool(account.active),
        "opened" => Value::Date(Timestamp(account.opened)),
        _ => Value::None,
    }
}

/// 100 accounts; the first 50 are named `xxxxX-<n>`, the rest `other-<n>`.
fn accounts() -> Vec<Account> {
    (0..100)
        .map(|i| Account {
            id: i,
            name: if i < 50 {
                format!("xxxxX-{:03}", i)
            } else {
                format!("other-{:03}", i)
            },
            balance: (i as i64 % 7) * 10,
            active: i % 2 == 0,
            opened: 1_000 * i as i64,
        })
        .collect()
}

fn ids(page: &SearchPage<'_, Account>) -> Vec<usize> {
    page.items.iter().map(|a| a.id).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn no_search_columns_means_no_filtering() {
    let data = accounts();
    for exact in [true, false] {
        for term in [Term::from("zzz"), Term::from(vec!["a", "b"]), Term::from(5i64)] {
            let mut request = SearchRequest::default()
                .with_term(term)
                .with_exact_match(exact);
            let page = request.get_items(&data, accessor, &SearchOptions::new());
            assert_eq!(page.total, data.len());
        }
    }

    let mut empty_columns = SearchRequest::default()
        .with_term("zzz")
        .with_search_columns(Vec::<String>::new());
    let page = empty_columns.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(page.total, 100);
}

#[test]
fn substring_versus_exact() {
    let data = accounts();

    let mut substring = SearchRequest::default()
        .with_term("xxxxX")
        .with_search_columns(["name"])
        .with_exact_match(false);
    let page = substring.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(page.total, 50);
    assert!(page.items.iter().all(|a| a.name.starts_with("xxxxX-")));

    let mut lowercase = substring.clone().with_term("XXXXx-01");
    let page = lowercase.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(page.total, 10);

    let mut exact = substring.clone().with_term("xxxxX").with_exact_match(true);
    let page = exact.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(page.total, 0);

    let mut exact_hit = substring.with_term("xxxxX-007").with_exact_match(true);
    let page = exact_hit.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(ids(&page), vec![7]);
}

#[test]
fn kinds_never_cross() {
    let data = accounts();

    let mut string_on_number = SearchRequest::default()
        .with_term("10")
        .with_search_columns(["balance"]);
    let page = string_on_number.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(page.total, 0);

    let mut number_on_string = SearchRequest::default()
        .with_term(10i64)
        .with_search_columns(["name"]);
    let page = number_on_string.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(page.total, 0);

    for exact in [true, false] {
        let mut number = SearchRequest::default()
            .with_term(10i64)
            .with_search_columns(["balance"])
            .with_exact_match(exact);
        let page = number.get_items(&data, accessor, &SearchOptions::new());
        assert!(page.total > 0);
        assert!(page.items.iter().all(|a| a.balance == 10));
    }
}

#[test]
fn multi_column_multi_term() {
    let data = accounts();
    let mut request = SearchRequest::default()
        .with_term(Term::from(vec![
            sieve_query::TermValue::from("other-099"),
            sieve_query::TermValue::from(3usize),
            sieve_query::TermValue::from(Timestamp(5_000)),
        ]))
        .with_search_columns(["name", "id", "opened"])
        .with_exact_match(true);

    let page = request.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(ids(&page), vec![3, 5, 99]);
}

#[test]
fn bool_columns_match_bool_terms() {
    let data = accounts();
    let mut request = SearchRequest::default()
        .with_term(false)
        .with_search_columns(["active"]);
    let page = request.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(page.total, 50);
    assert!(page.items.iter().all(|a| !a.active));
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn page_mode_ignores_offset_and_limit() {
    let data = accounts();
    let mut request = SearchRequest::default()
        .with_offset(77)
        .with_limit(3)
        .with_page_index(1)
        .with_page_size(10);
    assert_eq!(request.calculated_offset(), 10);
    assert_eq!(request.calculated_page_size(), 10);

    let page = request.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(ids(&page), (10..20).collect::<Vec<_>>());
    assert_eq!(request.limit, 3);
}

#[test]
fn fallback_limit_is_persisted() {
    let data = accounts();
    let mut request = SearchRequest::default();

    let page = request.get_items(&data, accessor, &SearchOptions::new().with_fallback_limit(30));
    assert_eq!(page.len(), 30);
    assert_eq!(page.total, 100);
    assert_eq!(request.limit, 30);
}

#[test]
fn explicit_limit_beats_fallback() {
    let data = accounts();
    let mut request = SearchRequest::default().with_limit(5);
    let page = request.get_items(&data, accessor, &SearchOptions::new().with_fallback_limit(30));
    assert_eq!(page.len(), 5);
    assert_eq!(request.limit, 5);
}

#[test]
fn zero_everything_is_unbounded() {
    let data = accounts();
    let mut request = SearchRequest::default().with_offset(90);
    let page = request.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(ids(&page), (90..100).collect::<Vec<_>>());
    assert_eq!(page.total, 100);
    assert_eq!(request.limit, 0);
}

#[test]
fn prefixed_names_with_offset() {
    let data = accounts();
    let mut request = SearchRequest::default()
        .with_term("xxxxX")
        .with_search_columns(["name"])
        .with_exact_match(false)
        .with_sort("name", SortDirection::Asc)
        .with_offset(2);

    let page = request.get_items(&data, accessor, &SearchOptions::new().with_fallback_limit(0));
    assert_eq!(page.total, 50);
    assert_eq!(page.len(), 48);
    assert_eq!(page.items[0].name, "xxxxX-002");
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn default_sort_fills_only_when_empty() {
    let data = accounts();

    let mut unsorted = SearchRequest::default().with_limit(3);
    let options = SearchOptions::new().with_default_sort("opened", false);
    let page = unsorted.get_items(&data, accessor, &options);
    assert_eq!(ids(&page), vec![99, 98, 97]);
    assert_eq!(unsorted.sort_column.as_deref(), Some("opened"));
    assert!(unsorted.is_descending());

    let mut sorted = SearchRequest::default()
        .with_sort("id", SortDirection::Asc)
        .with_limit(3);
    let page = sorted.get_items(&data, accessor, &options);
    assert_eq!(ids(&page), vec![0, 1, 2]);
    assert_eq!(sorted.sort_column.as_deref(), Some("id"));
    assert!(sorted.is_ascending());
}

#[test]
fn numeric_sort_is_stable() {
    let data = accounts();
    let mut request = SearchRequest::default()
        .with_sort("balance", SortDirection::Desc)
        .with_limit(4);
    let page = request.get_items(&data, accessor, &SearchOptions::new());
    // balance 60 belongs to ids 6, 13, 20, 27, ... in input order
    assert_eq!(ids(&page), vec![6, 13, 20, 27]);
}

#[test]
fn unsorted_preserves_filtered_order() {
    let data = accounts();
    let mut request = SearchRequest::default()
        .with_term("-04")
        .with_search_columns(["name"]);
    let page = request.get_items(&data, accessor, &SearchOptions::new());
    assert_eq!(ids(&page), (40..50).collect::<Vec<_>>());
}

// ============================================================================
// Determinism and echo
// ============================================================================

#[test]
fn repeated_calls_are_identical() {
    let data = accounts();
    let options = SearchOptions::new()
        .with_fallback_limit(7)
        .with_default_sort("balance", true);
    let mut request = SearchRequest::default()
        .with_term("x")
        .with_search_columns(["name"])
        .with_offset(3);

    let first = request.get_items(&data, accessor, &options);
    let first = (ids(&first), first.total);
    let echoed = request.clone();
    let second = request.get_items(&data, accessor, &options);

    assert_eq!(first, (ids(&second), second.total));
    assert_eq!(request, echoed);
}

#[test]
fn executed_request_echoes_over_json() {
    let data = accounts();
    let mut request = SearchRequest::from_json(
        r#"{"term": "other", "searchColumns": ["name"], "pageIndex": 2, "pageSize": 20}"#,
    )
    .unwrap();
    let page = request.get_items(
        &data,
        accessor,
        &SearchOptions::new().with_default_sort("id", false),
    );
    assert_eq!(page.total, 50);
    assert_eq!(page.len(), 10);
    assert_eq!(page.items[0].id, 59);

    let echoed = SearchRequest::from_json(&request.to_json().unwrap()).unwrap();
    assert_eq!(echoed.sort_column.as_deref(), Some("id"));
    assert!(echoed.is_descending());
    assert_eq!(echoed.page_index, 2);
}

#[test]
fn capped_request_from_untrusted_input() {
    let data = accounts();
    let options = SearchOptions::new().with_max_limit(25);
    let mut request = SearchRequest::from_json(r#"{"limit": 100000}"#).unwrap();
    options.cap(&mut request);

    let page = request.get_items(&data, accessor, &options);
    assert_eq!(page.len(), 25);
}
