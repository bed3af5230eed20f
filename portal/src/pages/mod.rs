//! Routed pages.

pub mod callback;
pub mod game;
pub mod lobby;
