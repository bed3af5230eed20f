//! Modal asking a signed-out visitor to log in before entering a game.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;

/// The actions the modal offers, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Login,
    Close,
}

impl ModalAction {
    pub const ALL: [Self; 2] = [Self::Login, Self::Close];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Close => "Close",
        }
    }
}

/// Login-required dialog. Backdrop click and Escape count as "Close".
#[component]
pub fn LoginModal(on_login: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let actions = ModalAction::ALL
        .into_iter()
        .map(|action| {
            let (class, handler) = match action {
                ModalAction::Login => ("btn btn--primary login-modal__login", on_login),
                ModalAction::Close => ("btn login-modal__close", on_close),
            };
            view! {
                <button type="button" class=class on:click=move |_| handler.run(())>
                    {action.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" data-testid="modal-backdrop" on:click=on_backdrop>
            <div
                class="dialog login-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="login-modal-title"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 id="login-modal-title">"Login Required"</h2>
                <p class="login-modal__message">"You need to be logged in to access this game."</p>
                <div class="dialog__actions">{actions}</div>
            </div>
        </div>
    }
}
