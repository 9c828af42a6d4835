use super::*;

#[test]
fn grid_heading_without_search_is_featured() {
    assert_eq!(grid_heading(&SearchQuery::default()), "Featured Games");
}

#[test]
fn grid_heading_with_search_quotes_term() {
    let search = SearchQuery::from_param(Some(" snake "));
    assert_eq!(grid_heading(&search), "Results for \"snake\"");
}

#[test]
fn featured_href_points_at_player_route() {
    assert_eq!(featured_href(), "/game/paper-io-2");
    assert!(catalog::find(catalog::FEATURED_GAME_ID).is_some());
}
