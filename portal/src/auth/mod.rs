//! Authentication: identity provider seam, session manager, and the Leptos
//! pieces (context provider and route guard) built on top of it.
//!
//! DESIGN
//! ======
//! `manager` holds all session semantics and has no Leptos dependency beyond
//! logging, so it runs under plain unit tests. `context` and `guard` are thin
//! view-layer adapters over it.

pub mod claims;
pub mod context;
pub mod guard;
#[cfg(feature = "hydrate")]
pub mod keycloak;
pub mod manager;
pub mod provider;
pub mod redirect;

#[cfg(test)]
pub(crate) mod testing;
