//! Header widget showing the signed-in user or login/sign-up actions.

use leptos::prelude::*;

use crate::auth::context::use_session;
use crate::state::session::Session;

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_session();
    let session = auth.session();

    move || match session.get() {
        Session::Loading => view! { <div class="user-menu__loading">"..."</div> }.into_any(),
        Session::Unauthenticated => view! {
            <div class="user-menu">
                <button type="button" class="user-menu__login" on:click=move |_| auth.login(None)>
                    "Login"
                </button>
                <button type="button" class="user-menu__register" on:click=move |_| auth.register()>
                    "Sign up"
                </button>
            </div>
        }
        .into_any(),
        Session::Authenticated { identity, .. } => view! {
            <div class="user-menu">
                <span class="user-menu__username" title=identity.email.clone()>{identity.display_name()}</span>
                <button type="button" class="user-menu__logout" on:click=move |_| auth.logout()>
                    "Logout"
                </button>
            </div>
        }
        .into_any(),
    }
}
