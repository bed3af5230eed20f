//! Catalog of games the portal can launch.
//!
//! Games are separate documents served by the game client host and embedded
//! in an iframe; the portal only knows their slugs and entry paths.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Entry document, relative to the game host.
    pub path: &'static str,
    pub thumbnail: &'static str,
}

pub const TOWER_WARS: GameEntry = GameEntry {
    slug: "tower-wars",
    title: "Tower Wars",
    description: "Strategy meets chaos in this multiplayer tower defense game.",
    path: "game.html",
    thumbnail: "thumbnail.html",
};

pub const CATALOG: &[GameEntry] = &[TOWER_WARS];

/// Game shown on the lobby's hero slot.
pub const FEATURED: GameEntry = TOWER_WARS;

impl GameEntry {
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        join_url(base, self.path)
    }

    #[must_use]
    pub fn thumbnail_url(&self, base: &str) -> String {
        join_url(base, self.thumbnail)
    }

    /// Portal route that launches this game.
    #[must_use]
    pub fn route(&self) -> String {
        format!("/game/{}", self.slug)
    }
}

/// Look up `slug`; unknown slugs fall back to the featured game.
#[must_use]
pub fn find_game(slug: &str) -> GameEntry {
    CATALOG
        .iter()
        .copied()
        .find(|game| game.slug == slug)
        .unwrap_or(FEATURED)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
