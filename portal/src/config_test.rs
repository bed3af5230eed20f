use super::*;

#[test]
fn default_points_at_local_services() {
    let config = PortalConfig::default();
    assert_eq!(config.keycloak_url, "http://localhost:8080");
    assert_eq!(config.realm, "link-wars");
    assert_eq!(config.client_id, "link-wars-portal");
    assert_eq!(config.game_base_url, "http://localhost:5174");
}

#[test]
fn embedded_json_reads_back() {
    let config = PortalConfig {
        keycloak_url: "https://id.example.com".to_owned(),
        realm: "arcade".to_owned(),
        client_id: "portal".to_owned(),
        game_base_url: "https://games.example.com".to_owned(),
    };
    assert_eq!(PortalConfig::from_embedded_json(&config.to_embedded_json()), config);
}

#[test]
fn embedded_json_escapes_script_close() {
    let config = PortalConfig { realm: "</script><b>".to_owned(), ..PortalConfig::default() };
    let json = config.to_embedded_json();
    assert!(!json.contains("</script>"));
    assert_eq!(PortalConfig::from_embedded_json(&json).realm, "</script><b>");
}

#[test]
fn malformed_embedded_json_falls_back_to_defaults() {
    assert_eq!(PortalConfig::from_embedded_json("{not json"), PortalConfig::default());
}
