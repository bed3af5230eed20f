//! Browser identity provider backed by the `keycloak-js` adapter.
//!
//! The adapter script is served by the portal host at `/vendor/keycloak.js`
//! and exposes a global `Keycloak` constructor. Option objects cross the JS
//! boundary as JSON so the Rust option types stay plain serde structs.

use async_trait::async_trait;
use js_sys::{JSON, Promise};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::claims::TokenClaims;
use super::provider::{IdentityProvider, InitOptions, ProviderError, RedirectOptions};
use crate::config::PortalConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Keycloak)]
    type KeycloakJs;

    #[wasm_bindgen(constructor, js_class = "Keycloak")]
    fn new(config: &JsValue) -> KeycloakJs;

    #[wasm_bindgen(method, catch)]
    fn init(this: &KeycloakJs, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn login(this: &KeycloakJs, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn logout(this: &KeycloakJs, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn register(this: &KeycloakJs, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = updateToken)]
    fn update_token(this: &KeycloakJs, min_validity: u32) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, js_name = hasRealmRole)]
    fn has_realm_role(this: &KeycloakJs, role: &str) -> bool;

    #[wasm_bindgen(method, getter)]
    fn token(this: &KeycloakJs) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = tokenParsed)]
    fn token_parsed(this: &KeycloakJs) -> JsValue;

    #[wasm_bindgen(method, setter, js_name = onTokenExpired)]
    fn set_on_token_expired(this: &KeycloakJs, callback: &js_sys::Function);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdapterConfig<'a> {
    url: &'a str,
    realm: &'a str,
    client_id: &'a str,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    JSON::parse(&raw).map_err(|e| describe(&e))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| JSON::stringify(value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown error".to_owned())
}

async fn settle(promise: Result<Promise, JsValue>) -> Result<JsValue, String> {
    let promise = promise.map_err(|e| describe(&e))?;
    JsFuture::from(promise).await.map_err(|e| describe(&e))
}

type RedirectCall = fn(&KeycloakJs, &JsValue) -> Result<Promise, JsValue>;

/// `keycloak-js` instance configured from [`PortalConfig`].
pub struct KeycloakProvider {
    client: KeycloakJs,
}

impl KeycloakProvider {
    /// # Errors
    ///
    /// Returns [`ProviderError::Init`] when the adapter config cannot be
    /// converted for the JS side.
    pub fn new(config: &PortalConfig) -> Result<Self, ProviderError> {
        let adapter = AdapterConfig {
            url: &config.keycloak_url,
            realm: &config.realm,
            client_id: &config.client_id,
        };
        let js_config = to_js(&adapter).map_err(ProviderError::Init)?;
        Ok(Self { client: KeycloakJs::new(&js_config) })
    }

    /// Fire a redirect action; its promise only settles if the redirect fails.
    fn redirect(&self, action: &'static str, call: RedirectCall, options: &RedirectOptions) {
        let promise = match to_js(options) {
            Ok(js_options) => call(&self.client, &js_options),
            Err(e) => {
                leptos::logging::error!("keycloak {action}: bad options: {e}");
                return;
            }
        };
        leptos::task::spawn_local(async move {
            if let Err(e) = settle(promise).await {
                leptos::logging::error!("keycloak {action} failed: {e}");
            }
        });
    }
}

#[async_trait(?Send)]
impl IdentityProvider for KeycloakProvider {
    async fn init(&self, options: &InitOptions) -> Result<bool, ProviderError> {
        let js_options = to_js(options).map_err(ProviderError::Init)?;
        let value = settle(self.client.init(&js_options)).await.map_err(ProviderError::Init)?;
        Ok(value.as_bool().unwrap_or(false))
    }

    fn login(&self, options: &RedirectOptions) {
        self.redirect("login", KeycloakJs::login, options);
    }

    fn logout(&self, options: &RedirectOptions) {
        self.redirect("logout", KeycloakJs::logout, options);
    }

    fn register(&self, options: &RedirectOptions) {
        self.redirect("register", KeycloakJs::register, options);
    }

    async fn update_token(&self, min_validity_secs: u32) -> Result<bool, ProviderError> {
        let value = settle(self.client.update_token(min_validity_secs))
            .await
            .map_err(ProviderError::Refresh)?;
        Ok(value.as_bool().unwrap_or(false))
    }

    fn has_realm_role(&self, role: &str) -> bool {
        self.client.has_realm_role(role)
    }

    fn on_token_expired(&self, callback: Box<dyn Fn()>) {
        let closure = Closure::wrap(callback);
        self.client.set_on_token_expired(closure.as_ref().unchecked_ref());
        // The adapter owns the hook for the lifetime of the page.
        closure.forget();
    }

    fn token(&self) -> Option<String> {
        self.client.token()
    }

    fn token_claims(&self) -> Option<TokenClaims> {
        let parsed = self.client.token_parsed();
        if parsed.is_undefined() || parsed.is_null() {
            return None;
        }
        let raw = JSON::stringify(&parsed).ok()?.as_string()?;
        match serde_json::from_str(&raw) {
            Ok(claims) => Some(claims),
            Err(e) => {
                leptos::logging::warn!("keycloak tokenParsed unreadable: {e}");
                None
            }
        }
    }
}
