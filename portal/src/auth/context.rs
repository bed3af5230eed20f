//! Leptos context wiring for the session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! `<AuthProvider>` owns the one `SessionManager` of the app and mirrors each
//! session change into a reactive signal. Components reach both through
//! [`use_session`], which refuses to hand out a default when the provider is
//! missing: that is a wiring bug and should surface during development.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use super::manager::{SessionManager, Spawner};
use super::provider::DetachedProvider;
use super::redirect::RedirectUrls;
use crate::config::PortalConfig;
use crate::state::session::Session;

/// Handle provided to components under `<AuthProvider>`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    manager: StoredValue<SessionManager, LocalStorage>,
}

impl SessionContext {
    /// Mirror `manager` into a new signal owned by the current reactive owner.
    pub fn attach(manager: SessionManager) -> Self {
        let session = RwSignal::new(manager.session());
        manager.subscribe(move |next| {
            let _ = session.try_set(next.clone());
        });
        Self { session, manager: StoredValue::new_local(manager) }
    }

    /// Reactive view of the session.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    pub fn manager(&self) -> SessionManager {
        self.manager.get_value()
    }

    pub fn login(&self, return_path: Option<&str>) {
        self.manager.with_value(|m| m.login(return_path));
    }

    pub fn logout(&self) {
        self.manager.with_value(SessionManager::logout);
    }

    pub fn register(&self) {
        self.manager.with_value(SessionManager::register);
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.manager.with_value(|m| m.has_role(role))
    }

    /// Fresh access token for an API call; `None` when not signed in.
    pub async fn get_token(&self) -> Option<String> {
        self.manager().get_token().await
    }
}

/// Session context of the enclosing `<AuthProvider>`.
///
/// # Panics
///
/// Panics when called outside `<AuthProvider>`.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within an <AuthProvider>")
}

fn ui_spawner() -> Spawner {
    Rc::new(|fut: LocalBoxFuture<'static, ()>| leptos::task::spawn_local(fut))
}

#[cfg(feature = "hydrate")]
fn build_manager(config: &PortalConfig) -> SessionManager {
    use super::keycloak::KeycloakProvider;
    use super::provider::IdentityProvider;
    use super::redirect::BrowserSessionStore;

    let provider: Rc<dyn IdentityProvider> = match KeycloakProvider::new(config) {
        Ok(provider) => Rc::new(provider),
        Err(e) => {
            leptos::logging::error!("keycloak adapter unavailable: {e}");
            Rc::new(DetachedProvider)
        }
    };
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    SessionManager::new(provider, Rc::new(BrowserSessionStore), RedirectUrls::for_origin(&origin), ui_spawner())
}

/// Server render: no identity client exists, so the session stays `Loading`
/// until the browser takes over.
#[cfg(not(feature = "hydrate"))]
fn build_manager(_config: &PortalConfig) -> SessionManager {
    SessionManager::new(
        Rc::new(DetachedProvider),
        Rc::new(super::redirect::MemoryStore::default()),
        RedirectUrls::for_origin(""),
        ui_spawner(),
    )
}

/// Provides [`SessionContext`] to `children` and starts the silent session
/// check once in the browser.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let manager = build_manager(&config);
    provide_context(SessionContext::attach(manager.clone()));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move { manager.initialize().await });
    #[cfg(not(feature = "hydrate"))]
    drop(manager);

    children()
}
