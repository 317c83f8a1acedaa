//! First-visit overlay, shown once per browser session.

use leptos::prelude::*;

use crate::state::session;
use crate::storage::SessionStore;

#[component]
pub fn Onboarding() -> impl IntoView {
    let visible = RwSignal::new(!session::onboarding_seen(&SessionStore));

    let dismiss = move |_| {
        session::mark_onboarding_seen(&SessionStore);
        visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>"Welcome to CalcDeck"</h2>
                    <p>
                        "Pick a calculator from the home page. Every result is kept in \
                         the history panel, and any entry can be reopened with its \
                         original inputs."
                    </p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=dismiss>
                            "Start calculating"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
