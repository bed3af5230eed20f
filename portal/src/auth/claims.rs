//! Access-token claims as exposed by the identity provider.

use serde::{Deserialize, Serialize};

/// Subset of the OIDC / Keycloak access-token claims the portal reads.
///
/// Every field is optional at the wire level; [`crate::state::session::Identity::from_claims`]
/// decides which ones are required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub realm_access: Option<RealmAccess>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

impl TokenClaims {
    /// Realm-level roles, empty when the token carries no `realm_access`.
    pub fn realm_roles(&self) -> impl Iterator<Item = &str> {
        self.realm_access
            .iter()
            .flat_map(|access| access.roles.iter().map(String::as_str))
    }
}

/// Claims could not be turned into an identity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("token claim `{0}` is missing")]
    Missing(&'static str),
}
