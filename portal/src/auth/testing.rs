//! Scripted identity provider and harness for session tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::LocalPool;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use super::claims::TokenClaims;
use super::manager::{SessionManager, Spawner};
use super::provider::{IdentityProvider, InitOptions, ProviderError, RedirectOptions};
use super::redirect::{MemoryStore, RedirectUrls};

pub(crate) const ORIGIN: &str = "http://localhost:3000";

pub(crate) fn claims_for(username: &str) -> TokenClaims {
    serde_json::from_value(serde_json::json!({
        "sub": format!("id-{username}"),
        "preferred_username": username,
        "email": format!("{username}@example.com"),
        "realm_access": { "roles": ["player"] },
    }))
    .unwrap()
}

pub(crate) struct FakeProvider {
    pub init_result: RefCell<Result<bool, ProviderError>>,
    pub refresh_results: RefCell<VecDeque<Result<bool, ProviderError>>>,
    pub token: RefCell<Option<String>>,
    pub claims: RefCell<Option<TokenClaims>>,
    pub init_options: RefCell<Vec<InitOptions>>,
    pub logins: RefCell<Vec<RedirectOptions>>,
    pub logouts: RefCell<Vec<RedirectOptions>>,
    pub registers: RefCell<Vec<RedirectOptions>>,
    pub refresh_calls: Cell<usize>,
    pub refresh_min_validity: Cell<Option<u32>>,
    pub expiry_hooks_installed: Cell<usize>,
    expiry: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakeProvider {
    fn with_init(result: Result<bool, ProviderError>) -> Self {
        Self {
            init_result: RefCell::new(result),
            refresh_results: RefCell::new(VecDeque::new()),
            token: RefCell::new(None),
            claims: RefCell::new(None),
            init_options: RefCell::new(Vec::new()),
            logins: RefCell::new(Vec::new()),
            logouts: RefCell::new(Vec::new()),
            registers: RefCell::new(Vec::new()),
            refresh_calls: Cell::new(0),
            refresh_min_validity: Cell::new(None),
            expiry_hooks_installed: Cell::new(0),
            expiry: RefCell::new(None),
        }
    }

    pub fn signed_in(username: &str, token: &str) -> Self {
        let provider = Self::with_init(Ok(true));
        *provider.token.borrow_mut() = Some(token.to_owned());
        *provider.claims.borrow_mut() = Some(claims_for(username));
        provider
    }

    pub fn signed_out() -> Self {
        Self::with_init(Ok(false))
    }

    pub fn unreachable() -> Self {
        Self::with_init(Err(ProviderError::Init("connection refused".to_owned())))
    }

    pub fn push_refresh(&self, result: Result<bool, ProviderError>) {
        self.refresh_results.borrow_mut().push_back(result);
    }

    /// Simulate the provider's token-expiry notification.
    pub fn expire_token(&self) {
        if let Some(hook) = self.expiry.borrow().as_ref() {
            hook();
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn init(&self, options: &InitOptions) -> Result<bool, ProviderError> {
        self.init_options.borrow_mut().push(options.clone());
        self.init_result.borrow().clone()
    }

    fn login(&self, options: &RedirectOptions) {
        self.logins.borrow_mut().push(options.clone());
    }

    fn logout(&self, options: &RedirectOptions) {
        self.logouts.borrow_mut().push(options.clone());
    }

    fn register(&self, options: &RedirectOptions) {
        self.registers.borrow_mut().push(options.clone());
    }

    async fn update_token(&self, min_validity_secs: u32) -> Result<bool, ProviderError> {
        self.refresh_calls.set(self.refresh_calls.get() + 1);
        self.refresh_min_validity.set(Some(min_validity_secs));
        self.refresh_results.borrow_mut().pop_front().unwrap_or(Ok(false))
    }

    fn has_realm_role(&self, role: &str) -> bool {
        self.claims
            .borrow()
            .as_ref()
            .is_some_and(|claims| claims.realm_roles().any(|r| r == role))
    }

    fn on_token_expired(&self, callback: Box<dyn Fn()>) {
        self.expiry_hooks_installed.set(self.expiry_hooks_installed.get() + 1);
        *self.expiry.borrow_mut() = Some(callback);
    }

    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn token_claims(&self) -> Option<TokenClaims> {
        self.claims.borrow().clone()
    }
}

/// Manager wired to a fake provider, an in-memory store, and a local executor.
pub(crate) struct Harness {
    pub pool: LocalPool,
    pub provider: Rc<FakeProvider>,
    pub store: Rc<MemoryStore>,
    pub manager: SessionManager,
}

impl Harness {
    pub fn new(provider: FakeProvider) -> Self {
        let pool = LocalPool::new();
        let local = pool.spawner();
        let spawner: Spawner = Rc::new(move |fut: LocalBoxFuture<'static, ()>| {
            local.spawn_local(fut).unwrap();
        });
        let provider = Rc::new(provider);
        let store = Rc::new(MemoryStore::default());
        let manager = SessionManager::new(
            provider.clone(),
            store.clone(),
            RedirectUrls::for_origin(ORIGIN),
            spawner,
        );
        Self { pool, provider, store, manager }
    }

    /// Build and run `initialize` to completion.
    pub fn initialized(provider: FakeProvider) -> Self {
        let mut harness = Self::new(provider);
        harness.pool.run_until(harness.manager.initialize());
        harness
    }

    /// Fire the expiry hook and drain the spawned refresh.
    pub fn expire_token(&mut self) {
        self.provider.expire_token();
        self.pool.run_until_stalled();
    }
}
