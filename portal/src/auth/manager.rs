//! Session manager: the single owner of the portal's authentication state.
//!
//! DESIGN
//! ======
//! The manager is a cheap `Clone` handle over `Rc` state. All calls happen on
//! the single UI thread, so interior mutability replaces locking. Readers get
//! `Session` snapshots through [`SessionManager::session`] or a subscribed
//! listener and never mutate it.
//!
//! LIFECYCLE
//! =========
//! `Loading -> Authenticated | Unauthenticated` once `initialize` resolves.
//! `Authenticated` re-enters itself on token refresh and drops to
//! `Unauthenticated` when a refresh fails or the user logs out. Nothing goes
//! back to `Loading`.
//!
//! Refreshes triggered by the expiry hook and by `get_token` are not
//! deduplicated; the provider serializes its own token state.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;

use super::provider::{IdentityProvider, InitOptions, MIN_TOKEN_VALIDITY_SECS, RedirectOptions};
use super::redirect::{PendingRedirect, RedirectStore, RedirectUrls};
use crate::state::session::{Identity, Session};

/// Path every post-auth navigation falls back to.
pub const ROOT_PATH: &str = "/";

/// Runs a detached future on the UI thread.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

type Listener = Rc<dyn Fn(&Session)>;

struct Inner {
    provider: Rc<dyn IdentityProvider>,
    pending: PendingRedirect,
    urls: RedirectUrls,
    spawner: Spawner,
    session: RefCell<Session>,
    listeners: RefCell<Vec<Listener>>,
    initialized: Cell<bool>,
}

/// Tracks the signed-in session and exposes login/logout/register actions.
#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<Inner>,
}

impl SessionManager {
    pub fn new(
        provider: Rc<dyn IdentityProvider>,
        store: Rc<dyn RedirectStore>,
        urls: RedirectUrls,
        spawner: Spawner,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                provider,
                pending: PendingRedirect::new(store),
                urls,
                spawner,
                session: RefCell::new(Session::Loading),
                listeners: RefCell::new(Vec::new()),
                initialized: Cell::new(false),
            }),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.inner.session.borrow().user().cloned()
    }

    /// Register a listener called after every session change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Run the provider's silent session check and resolve the session.
    ///
    /// Runs at most once per manager. Provider failures are logged and leave
    /// the visitor signed out.
    pub async fn initialize(&self) {
        if self.inner.initialized.replace(true) {
            leptos::logging::warn!("session manager already initialized");
            return;
        }

        let next = match self.inner.provider.init(&InitOptions::check_sso()).await {
            Ok(true) => match self.read_authenticated_session() {
                Some(session) => {
                    self.arm_expiry_refresh();
                    session
                }
                None => Session::Unauthenticated,
            },
            Ok(false) => Session::Unauthenticated,
            Err(e) => {
                leptos::logging::error!("identity provider initialization failed: {e}");
                Session::Unauthenticated
            }
        };
        self.set_session(next);
    }

    /// Save `return_path` as the pending redirect (if given) and hand off to
    /// the provider's login page.
    pub fn login(&self, return_path: Option<&str>) {
        if let Some(path) = return_path {
            self.inner.pending.save(path);
        }
        self.inner.provider.login(&RedirectOptions::to(&self.inner.urls.callback));
    }

    pub fn register(&self) {
        self.inner.provider.register(&RedirectOptions::to(&self.inner.urls.callback));
    }

    /// Drop the local session and pending redirect, then hand off to the
    /// provider's logout endpoint.
    pub fn logout(&self) {
        self.inner.pending.clear();
        self.set_session(Session::Unauthenticated);
        self.inner.provider.logout(&RedirectOptions::to(&self.inner.urls.root));
    }

    /// `false` when signed out.
    pub fn has_role(&self, role: &str) -> bool {
        self.inner
            .session
            .borrow()
            .user()
            .is_some_and(|identity| identity.has_role(role))
    }

    /// Refresh if the token is close to expiry, then return it.
    ///
    /// `None` means "not authenticated for this request"; callers should not
    /// retry.
    pub async fn get_token(&self) -> Option<String> {
        match self.inner.provider.update_token(MIN_TOKEN_VALIDITY_SECS).await {
            Ok(true) => self.apply_refreshed_token(),
            Ok(false) => {}
            Err(e) => {
                leptos::logging::warn!("token refresh on demand failed: {e}");
                return None;
            }
        }
        self.inner.session.borrow().access_token().map(str::to_owned)
    }

    /// Resolve where the login callback page should navigate.
    ///
    /// `None` while the session is still loading. Otherwise consumes the
    /// pending redirect (read-once) and returns it when signed in, or the root.
    pub fn complete_callback(&self) -> Option<String> {
        let authenticated = {
            let session = self.inner.session.borrow();
            if session.is_loading() {
                return None;
            }
            session.is_authenticated()
        };

        let pending = self.inner.pending.take();
        let destination = match pending {
            Some(path) if authenticated => path,
            _ => ROOT_PATH.to_owned(),
        };
        Some(destination)
    }

    fn read_authenticated_session(&self) -> Option<Session> {
        let provider = &self.inner.provider;
        let Some(token) = provider.token() else {
            leptos::logging::warn!("identity provider reported a session without a token");
            return None;
        };
        let Some(claims) = provider.token_claims() else {
            leptos::logging::warn!("identity provider reported a session without token claims");
            return None;
        };
        match Identity::from_claims(&claims) {
            Ok(identity) => Some(Session::Authenticated { identity, token }),
            Err(e) => {
                leptos::logging::warn!("ignoring session with unusable claims: {e}");
                None
            }
        }
    }

    fn arm_expiry_refresh(&self) {
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        self.inner.provider.on_token_expired(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let manager = SessionManager { inner };
            let spawn = manager.inner.spawner.clone();
            spawn(Box::pin(async move { manager.refresh_expired_token().await }));
        }));
    }

    async fn refresh_expired_token(&self) {
        match self.inner.provider.update_token(MIN_TOKEN_VALIDITY_SECS).await {
            Ok(true) => self.apply_refreshed_token(),
            Ok(false) => {}
            Err(e) => {
                leptos::logging::warn!("token refresh failed, ending session: {e}");
                self.set_session(Session::Unauthenticated);
            }
        }
    }

    /// Store the provider's new token in place. Identity is re-derived when the
    /// new claims parse and kept otherwise.
    fn apply_refreshed_token(&self) {
        let Some(previous) = self.current_user() else {
            return;
        };
        let Some(token) = self.inner.provider.token() else {
            leptos::logging::warn!("refresh succeeded without a token, ending session");
            self.set_session(Session::Unauthenticated);
            return;
        };
        let identity = self
            .inner
            .provider
            .token_claims()
            .and_then(|claims| Identity::from_claims(&claims).ok())
            .unwrap_or(previous);
        self.set_session(Session::Authenticated { identity, token });
    }

    fn set_session(&self, next: Session) {
        *self.inner.session.borrow_mut() = next.clone();
        let listeners = self.inner.listeners.borrow().clone();
        for listener in &listeners {
            listener(&next);
        }
    }
}
