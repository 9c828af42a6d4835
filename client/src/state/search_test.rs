use super::*;

#[test]
fn missing_param_is_inactive() {
    let query = SearchQuery::from_param(None);
    assert!(!query.is_active());
    assert_eq!(query.term(), "");
}

#[test]
fn whitespace_param_is_inactive() {
    let query = SearchQuery::from_param(Some("   "));
    assert!(!query.is_active());
    assert_eq!(query, SearchQuery::default());
}

#[test]
fn param_is_trimmed() {
    let query = SearchQuery::from_param(Some("  snake "));
    assert!(query.is_active());
    assert_eq!(query.term(), "snake");
}

#[test]
fn inactive_query_lists_whole_catalog() {
    let query = SearchQuery::default();
    assert_eq!(query.results().len(), catalog::all().len());
}

#[test]
fn active_query_filters_catalog() {
    let query = SearchQuery::from_param(Some("snake"));
    let ids: Vec<_> = query.results().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec!["slither-io"]);
}
