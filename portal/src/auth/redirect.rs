//! Pending post-login redirect and the redirect targets handed to the provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login is a full-page round trip through the identity provider, so the path
//! a visitor was trying to reach has to survive a navigation. It is kept as a
//! single key in a caller-supplied store (`sessionStorage` in the browser).
//!
//! READ-ONCE CONTRACT
//! ==================
//! [`PendingRedirect::take`] returns the saved path and removes it. A second
//! `take` in the same session yields `None`, so a reload of `/callback` lands
//! on the application root instead of replaying the old destination.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key for the pending redirect.
pub const PENDING_REDIRECT_KEY: &str = "redirectAfterLogin";

/// Minimal string key-value persistence surface.
pub trait RedirectStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used in tests and during server render.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl RedirectStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.sessionStorage`; survives reloads within the tab.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl RedirectStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("sessionStorage write failed for {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("sessionStorage remove failed for {key}");
            }
        }
    }
}

/// The path to restore after a successful login.
#[derive(Clone)]
pub struct PendingRedirect {
    store: Rc<dyn RedirectStore>,
}

impl PendingRedirect {
    pub fn new(store: Rc<dyn RedirectStore>) -> Self {
        Self { store }
    }

    /// Record `path`, overwriting any earlier value.
    pub fn save(&self, path: &str) {
        self.store.set(PENDING_REDIRECT_KEY, path);
    }

    /// Read and clear the saved path.
    pub fn take(&self) -> Option<String> {
        let path = self.store.get(PENDING_REDIRECT_KEY);
        self.store.remove(PENDING_REDIRECT_KEY);
        path.filter(|p| !p.is_empty())
    }

    pub fn clear(&self) {
        self.store.remove(PENDING_REDIRECT_KEY);
    }
}

/// Absolute URLs the provider redirects back to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUrls {
    pub callback: String,
    pub root: String,
}

impl RedirectUrls {
    /// `{origin}/callback` for login/register and `{origin}` for logout.
    #[must_use]
    pub fn for_origin(origin: &str) -> Self {
        let root = origin.trim_end_matches('/').to_owned();
        Self { callback: format!("{root}/callback"), root }
    }
}
