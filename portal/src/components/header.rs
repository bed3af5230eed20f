//! Portal header: menu toggle, logo, desktop nav, and the user menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::user_menu::UserMenu;
use crate::auth::manager::ROOT_PATH;

/// Top bar shared by the lobby and game pages.
///
/// Inside a game the logo and the "Exit Game" entry both return to the lobby.
#[component]
pub fn Header(on_menu_toggle: Callback<()>, #[prop(optional)] in_game: bool) -> impl IntoView {
    let navigate = use_navigate();
    let exit_game = move |_| navigate(ROOT_PATH, NavigateOptions::default());

    view! {
        <header class="main-header">
            <button type="button" class="main-header__hamburger mobile-only" on:click=move |_| on_menu_toggle.run(())>
                "☰"
            </button>

            <button type="button" class="main-header__logo" on:click=exit_game.clone()>
                "LINK WARS"
            </button>

            <nav class="main-header__nav desktop-only">
                <Show
                    when=move || in_game
                    fallback=|| view! { <a href="#" class="main-header__nav-item">"Play"</a> }
                >
                    <button type="button" class="main-header__nav-item" on:click=exit_game.clone()>
                        "Exit Game"
                    </button>
                </Show>
                <a href="#" class="main-header__nav-item">"Leaderboard"</a>
                <a href="#" class="main-header__nav-item">"About"</a>
            </nav>

            <UserMenu/>
        </header>
    }
}
