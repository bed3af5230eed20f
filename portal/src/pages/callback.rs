//! Landing page the identity provider redirects back to after login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::context::use_session;

/// Waits for the session to resolve, then replaces itself in history with
/// the pending redirect (or the root).
#[component]
pub fn CallbackPage() -> impl IntoView {
    let auth = use_session();
    let session = auth.session();
    let navigate = use_navigate();
    let done = StoredValue::new(false);

    Effect::new(move || {
        // Track the session so the effect re-runs once it resolves.
        if session.get().is_loading() || done.get_value() {
            return;
        }
        if let Some(destination) = auth.manager().complete_callback() {
            done.set_value(true);
            navigate(&destination, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="callback-page">
            <p>"Completing login..."</p>
        </div>
    }
}
