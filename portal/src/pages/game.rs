//! Game page: the selected game embedded full-width behind the auth guard.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::auth::guard::AuthGuard;
use crate::components::header::Header;
use crate::components::menu_overlay::MenuOverlay;
use crate::config::PortalConfig;
use crate::games::find_game;

#[component]
pub fn GamePage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let params = use_params_map();
    let game = Memo::new(move |_| find_game(&params.read().get("slug").unwrap_or_default()));
    let menu_open = RwSignal::new(false);
    let toggle_menu = Callback::new(move |()| menu_open.update(|open| *open = !*open));
    let game_base_url = config.game_base_url;

    view! {
        <div class="game-page-layout">
            <MenuOverlay open=menu_open in_game=true/>
            <Header on_menu_toggle=toggle_menu in_game=true/>

            <AuthGuard>
                <div class="game-page-content">
                    <iframe
                        src={
                            let base = game_base_url.clone();
                            move || game.get().url(&base)
                        }
                        title=move || game.get().title
                        class="game-page-iframe"
                        allow="autoplay; fullscreen; microphone; camera; midi; encrypted-media"
                    ></iframe>
                </div>
            </AuthGuard>

            <div class="game-page-banner">
                <div class="ad-banner-placeholder">"Banner Ad"</div>
            </div>
        </div>
    }
}
