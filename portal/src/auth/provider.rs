//! Identity provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser identity client is a mutable host object with a callback-style
//! expiry notification. Everything above this module talks to it through
//! [`IdentityProvider`] so the session manager can run against a scripted fake
//! in tests and against a detached stand-in during server render.

use async_trait::async_trait;
use serde::Serialize;

use super::claims::TokenClaims;

/// Minimum remaining token validity requested on every refresh.
pub const MIN_TOKEN_VALIDITY_SECS: u32 = 30;

/// Errors reported by identity provider calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("identity provider init failed: {0}")]
    Init(String),

    #[error("token refresh failed: {0}")]
    Refresh(String),

    #[error("identity provider unavailable")]
    Unavailable,
}

/// Options passed to the provider's `init`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    pub on_load: &'static str,
    pub pkce_method: &'static str,
    pub check_login_iframe: bool,
}

impl InitOptions {
    /// Silent session check with S256 PKCE and no forced redirect.
    #[must_use]
    pub fn check_sso() -> Self {
        Self { on_load: "check-sso", pkce_method: "S256", check_login_iframe: false }
    }
}

/// Options for the full-page redirect actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectOptions {
    pub redirect_uri: String,
}

impl RedirectOptions {
    #[must_use]
    pub fn to(uri: &str) -> Self {
        Self { redirect_uri: uri.to_owned() }
    }
}

/// Narrow interface over the external OIDC client.
///
/// Futures are not `Send`: the browser client lives on the single UI thread.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Initialize the client; resolves to whether a session already exists.
    async fn init(&self, options: &InitOptions) -> Result<bool, ProviderError>;

    /// Redirect to the provider's login page.
    fn login(&self, options: &RedirectOptions);

    /// Redirect to the provider's logout endpoint.
    fn logout(&self, options: &RedirectOptions);

    /// Redirect to the provider's registration page.
    fn register(&self, options: &RedirectOptions);

    /// Refresh the token if it expires within `min_validity_secs`; resolves to
    /// whether a new token was issued.
    async fn update_token(&self, min_validity_secs: u32) -> Result<bool, ProviderError>;

    /// Adapter-side role check. The session manager answers role queries from
    /// the identity's own role set instead, so this stays available to
    /// callers that hold the provider directly.
    fn has_realm_role(&self, role: &str) -> bool;

    /// Install the callback fired when the held token expires. Replaces any
    /// previously installed callback.
    fn on_token_expired(&self, callback: Box<dyn Fn()>);

    /// Raw access token currently held by the client.
    fn token(&self) -> Option<String>;

    /// Parsed claims of the current access token.
    fn token_claims(&self) -> Option<TokenClaims>;
}

/// Provider used where no browser identity client exists (server render).
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedProvider;

#[async_trait(?Send)]
impl IdentityProvider for DetachedProvider {
    async fn init(&self, _options: &InitOptions) -> Result<bool, ProviderError> {
        Err(ProviderError::Unavailable)
    }

    fn login(&self, _options: &RedirectOptions) {}

    fn logout(&self, _options: &RedirectOptions) {}

    fn register(&self, _options: &RedirectOptions) {}

    async fn update_token(&self, _min_validity_secs: u32) -> Result<bool, ProviderError> {
        Err(ProviderError::Unavailable)
    }

    fn has_realm_role(&self, _role: &str) -> bool {
        false
    }

    fn on_token_expired(&self, _callback: Box<dyn Fn()>) {}

    fn token(&self) -> Option<String> {
        None
    }

    fn token_claims(&self) -> Option<TokenClaims> {
        None
    }
}
