//! Lobby page: featured game with a "Play now" launcher.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::menu_overlay::MenuOverlay;
use crate::config::PortalConfig;
use crate::games::FEATURED;

#[component]
pub fn LobbyPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let menu_open = RwSignal::new(false);
    let navigate = use_navigate();

    let game = FEATURED;
    let thumbnail = game.thumbnail_url(&config.game_base_url);
    let start_game = move |_| navigate(&game.route(), NavigateOptions::default());
    let toggle_menu = Callback::new(move |()| menu_open.update(|open| *open = !*open));

    view! {
        <div class="app-layout">
            <MenuOverlay open=menu_open/>
            <Header on_menu_toggle=toggle_menu/>

            <div class="content">
                <div class="banner-section">
                    <div class="ad-banner-placeholder">"Banner Ad"</div>
                </div>

                <main class="game-wrapper">
                    <div class="iframe-container">
                        <iframe
                            src=thumbnail
                            title=format!("{} - Thumbnail", game.title)
                            class="game-thumbnail"
                            allow="autoplay; fullscreen; microphone; camera; midi; encrypted-media"
                        ></iframe>
                        <div class="game-overlay">
                            <button type="button" class="play-now-btn" on:click=start_game>
                                "Play now ▶"
                            </button>
                        </div>
                    </div>
                    <div class="game-info">
                        <h1>{game.title}</h1>
                        <p>{game.description}</p>
                    </div>
                </main>
            </div>
        </div>
    }
}
