//! Runtime configuration shared by the server and the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads these values from its environment and embeds them as JSON
//! in the HTML shell. The hydrated client reads that element back before it
//! builds the session manager, so no extra request is needed at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_KEYCLOAK_URL: &str = "http://localhost:8080";
pub const DEFAULT_KEYCLOAK_REALM: &str = "link-wars";
pub const DEFAULT_KEYCLOAK_CLIENT_ID: &str = "link-wars-portal";
pub const DEFAULT_GAME_BASE_URL: &str = "http://localhost:5174";

/// DOM id of the `<script type="application/json">` element carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "portal-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub keycloak_url: String,
    pub realm: String,
    pub client_id: String,
    pub game_base_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            keycloak_url: DEFAULT_KEYCLOAK_URL.to_owned(),
            realm: DEFAULT_KEYCLOAK_REALM.to_owned(),
            client_id: DEFAULT_KEYCLOAK_CLIENT_ID.to_owned(),
            game_base_url: DEFAULT_GAME_BASE_URL.to_owned(),
        }
    }
}

impl PortalConfig {
    /// JSON for embedding inside a `<script>` element.
    ///
    /// `<` is escaped so a value can never close the element early.
    #[must_use]
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c")
    }

    /// Parse embedded JSON, falling back to defaults on malformed input.
    #[must_use]
    pub fn from_embedded_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            leptos::logging::warn!("portal config unreadable, using defaults: {e}");
            Self::default()
        })
    }

    /// Config embedded in the current document.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        raw.map_or_else(Self::default, |raw| Self::from_embedded_json(&raw))
    }
}
