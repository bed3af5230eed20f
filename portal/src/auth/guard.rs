//! Route guard for pages that require a signed-in user.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::context::{SessionContext, use_session};
use super::manager::ROOT_PATH;
use crate::components::login_modal::LoginModal;
use crate::state::session::Session;

/// What a guarded route shows for a given session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: neutral placeholder, no navigation.
    Waiting,
    /// Signed out: login modal.
    LoginRequired,
    /// Signed in: guarded content as-is.
    Granted,
}

impl GuardOutcome {
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        match session {
            Session::Loading => Self::Waiting,
            Session::Unauthenticated => Self::LoginRequired,
            Session::Authenticated { .. } => Self::Granted,
        }
    }
}

/// "Login" in the guard's modal: remember `path` and start the login redirect.
pub fn login_from(auth: SessionContext, path: &str) {
    auth.login(Some(path));
}

/// "Close" in the guard's modal: abandon the guarded route.
pub fn close_to_root(navigate: &impl Fn(&str, NavigateOptions)) {
    navigate(ROOT_PATH, NavigateOptions::default());
}

/// Renders `children` only for signed-in users.
///
/// Signed-out visitors get the login modal. "Login" remembers the current
/// path for the callback page; "Close" abandons the route for the root.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_session();
    let session = auth.session();
    let location = use_location();
    let navigate = use_navigate();

    let on_login = Callback::new(move |()| login_from(auth, &location.pathname.get_untracked()));
    let on_close = Callback::new(move |()| close_to_root(&navigate));

    move || match GuardOutcome::for_session(&session.get()) {
        GuardOutcome::Waiting => view! {
            <div class="auth-guard__loading">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardOutcome::LoginRequired => view! { <LoginModal on_login=on_login on_close=on_close/> }.into_any(),
        GuardOutcome::Granted => children().into_any(),
    }
}
