//! Slide-in menu used on narrow screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::manager::ROOT_PATH;

#[component]
pub fn MenuOverlay(open: RwSignal<bool>, #[prop(optional)] in_game: bool) -> impl IntoView {
    let navigate = use_navigate();
    let close = move |_| open.set(false);
    let exit_game = move |_| {
        open.set(false);
        navigate(ROOT_PATH, NavigateOptions::default());
    };

    view! {
        <div class="menu-overlay" class:menu-overlay--open=move || open.get()>
            <div class="menu-overlay__content">
                <button type="button" class="menu-overlay__close" on:click=close>"×"</button>
                <nav class="menu-overlay__nav">
                    <Show when=move || in_game>
                        <button type="button" class="menu-overlay__link" on:click=exit_game.clone()>
                            "Exit Game"
                        </button>
                    </Show>
                    <button type="button" class="menu-overlay__link" on:click=close>"Leaderboard"</button>
                    <button type="button" class="menu-overlay__link" on:click=close>"About"</button>
                </nav>
            </div>
        </div>
    }
}
