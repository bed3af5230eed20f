use super::*;
use crate::config::ServerConfig;

fn state() -> AppState {
    let config = ServerConfig::from_lookup(|key| match key {
        "KEYCLOAK_REALM" => Some("arcade".to_owned()),
        _ => None,
    })
    .unwrap();
    AppState::new(config)
}

#[tokio::test]
async fn portal_config_returns_configured_values() {
    let Json(config) = portal_config(State(state())).await;
    assert_eq!(config.realm, "arcade");
    assert_eq!(config.client_id, "link-wars-portal");
}

#[tokio::test]
async fn portal_config_serializes_snake_case_fields() {
    let Json(config) = portal_config(State(state())).await;
    let json = serde_json::to_value(config).unwrap();
    assert_eq!(json["keycloak_url"], "http://localhost:8080");
    assert_eq!(json["game_base_url"], "http://localhost:5174");
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
