//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::context::AuthProvider;
use crate::config::{CONFIG_ELEMENT_ID, PortalConfig};
use crate::pages::{callback::CallbackPage, game::GamePage, lobby::LobbyPage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds `config` for the hydrated client and loads the Keycloak adapter.
pub fn shell(options: LeptosOptions, config: PortalConfig) -> impl IntoView {
    let embedded = config.to_embedded_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=embedded></script>
                <script src="/vendor/keycloak.js"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Portal config: embedded in the document in the browser, provided by the
/// host during server render.
fn current_config() -> PortalConfig {
    #[cfg(feature = "hydrate")]
    {
        PortalConfig::from_document()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<PortalConfig>().unwrap_or_default()
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(current_config());

    view! {
        <Stylesheet id="leptos" href="/pkg/link-wars.css"/>
        <Title text="Link Wars"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LobbyPage/>
                    <Route path=StaticSegment("callback") view=CallbackPage/>
                    <Route path=(StaticSegment("game"), ParamSegment("slug")) view=GamePage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
