use super::*;

fn claims(json: serde_json::Value) -> TokenClaims {
    serde_json::from_value(json).unwrap()
}

fn alice() -> Identity {
    Identity {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: None,
        last_name: None,
        roles: BTreeSet::new(),
    }
}

// =============================================================
// Identity::from_claims
// =============================================================

#[test]
fn from_claims_copies_preferred_username_exactly() {
    let identity = Identity::from_claims(&claims(serde_json::json!({
        "sub": "7c1e",
        "preferred_username": "Tower.Builder_42",
        "email": "tb@example.com",
    })))
    .unwrap();
    assert_eq!(identity.username, "Tower.Builder_42");
    assert_eq!(identity.id, "7c1e");
    assert_eq!(identity.email, "tb@example.com");
}

#[test]
fn from_claims_keeps_surrounding_whitespace_in_username() {
    let identity = Identity::from_claims(&claims(serde_json::json!({
        "sub": "7c1e",
        "preferred_username": " alice ",
    })))
    .unwrap();
    assert_eq!(identity.username, " alice ");
    assert_eq!(identity.id, "7c1e");
}

#[test]
fn from_claims_reads_names_and_realm_roles() {
    let identity = Identity::from_claims(&claims(serde_json::json!({
        "sub": "7c1e",
        "preferred_username": "alice",
        "email": "alice@example.com",
        "given_name": "Alice",
        "family_name": "Liddell",
        "realm_access": { "roles": ["player", "admin"] },
    })))
    .unwrap();
    assert_eq!(identity.first_name.as_deref(), Some("Alice"));
    assert_eq!(identity.last_name.as_deref(), Some("Liddell"));
    assert!(identity.has_role("admin"));
    assert!(identity.has_role("player"));
    assert!(!identity.has_role("moderator"));
}

#[test]
fn from_claims_without_realm_access_has_no_roles() {
    let identity = Identity::from_claims(&claims(serde_json::json!({
        "sub": "7c1e",
        "preferred_username": "alice",
    })))
    .unwrap();
    assert!(identity.roles.is_empty());
    assert_eq!(identity.email, "");
}

#[test]
fn from_claims_rejects_missing_username() {
    let err = Identity::from_claims(&claims(serde_json::json!({ "sub": "7c1e" }))).unwrap_err();
    assert_eq!(err, ClaimsError::Missing("preferred_username"));
}

#[test]
fn from_claims_rejects_blank_subject() {
    let err = Identity::from_claims(&claims(serde_json::json!({
        "sub": "  ",
        "preferred_username": "alice",
    })))
    .unwrap_err();
    assert_eq!(err, ClaimsError::Missing("sub"));
}

#[test]
fn display_name_prefers_full_name() {
    let mut identity = alice();
    assert_eq!(identity.display_name(), "alice");
    identity.first_name = Some("Alice".to_owned());
    assert_eq!(identity.display_name(), "alice");
    identity.last_name = Some("Liddell".to_owned());
    assert_eq!(identity.display_name(), "Alice Liddell");
}

// =============================================================
// Session accessors
// =============================================================

#[test]
fn session_default_is_loading() {
    let session = Session::default();
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn user_present_only_when_authenticated() {
    let cases = [
        Session::Loading,
        Session::Unauthenticated,
        Session::Authenticated { identity: alice(), token: "t".to_owned() },
    ];
    for session in cases {
        assert_eq!(session.user().is_some(), session.is_authenticated(), "{session:?}");
        assert_eq!(session.access_token().is_some(), session.is_authenticated(), "{session:?}");
    }
}
