use super::*;

#[test]
fn find_game_by_slug() {
    assert_eq!(find_game("tower-wars").title, "Tower Wars");
}

#[test]
fn unknown_slug_falls_back_to_featured() {
    assert_eq!(find_game("no-such-game"), FEATURED);
    assert_eq!(find_game(""), FEATURED);
}

#[test]
fn urls_join_onto_game_host() {
    assert_eq!(TOWER_WARS.url("http://localhost:5174"), "http://localhost:5174/game.html");
    assert_eq!(TOWER_WARS.thumbnail_url("http://localhost:5174/"), "http://localhost:5174/thumbnail.html");
}

#[test]
fn route_uses_slug() {
    assert_eq!(TOWER_WARS.route(), "/game/tower-wars");
}

#[test]
fn catalog_slugs_are_unique() {
    let mut slugs: Vec<_> = CATALOG.iter().map(|g| g.slug).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), CATALOG.len());
}
