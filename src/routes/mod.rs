//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the small JSON API, the Leptos SSR portal, the
//! compiled WASM bundle under `/pkg`, and the Keycloak browser adapter under
//! `/vendor`.

pub mod api;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/config", get(api::portal_config))
        .route("/healthz", get(api::healthz))
        .with_state(state)
}

/// Full application router: API + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portal::app::App);
    let portal_config = state.portal().clone();

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let portal_config = portal_config.clone();
                move || provide_context(portal_config.clone())
            },
            {
                let opts = leptos_options.clone();
                move || portal::app::shell(opts.clone(), portal_config.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let vendor_dir = state.config.vendor_dir.clone();

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/vendor", ServeDir::new(vendor_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
