//! Signed-in session model.
//!
//! DESIGN
//! ======
//! `Session` is a tagged enum rather than a struct of flags so the pairing of
//! identity and token with the authenticated state cannot drift apart. The
//! flat accessors give components the `loading` / `authenticated` / `user` /
//! `token` view they render from.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::auth::claims::{ClaimsError, TokenClaims};

/// Read-only projection of the identity provider's token claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: BTreeSet<String>,
}

impl Identity {
    /// Derive an identity from parsed token claims.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimsError`] when the subject or username claim is missing
    /// or blank.
    pub fn from_claims(claims: &TokenClaims) -> Result<Self, ClaimsError> {
        let id = required(claims.sub.as_deref(), "sub")?;
        let username = required(claims.preferred_username.as_deref(), "preferred_username")?;

        Ok(Self {
            id,
            username,
            email: claims.email.clone().unwrap_or_default(),
            first_name: claims.given_name.clone(),
            last_name: claims.family_name.clone(),
            roles: claims.realm_roles().map(str::to_owned).collect(),
        })
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// "First Last" when both names are known, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => format!("{first} {last}"),
            _ => self.username.clone(),
        }
    }
}

fn required(value: Option<&str>, claim: &'static str) -> Result<String, ClaimsError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_owned()),
        _ => Err(ClaimsError::Missing(claim)),
    }
}

/// Authentication session shared across the portal.
///
/// Starts in `Loading` and resolves once the identity provider finishes its
/// silent session check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Loading,
    Authenticated {
        identity: Identity,
        token: String,
    },
    Unauthenticated,
}

impl Session {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Current identity; present exactly when the session is authenticated.
    #[must_use]
    pub fn user(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated { identity, .. } => Some(identity),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Loading | Self::Unauthenticated => None,
        }
    }
}
