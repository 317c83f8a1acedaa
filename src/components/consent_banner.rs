//! Cookie-consent banner, shown until the durable flag is set.

use leptos::prelude::*;

use crate::nav::Navigator;
use crate::state::session;
use crate::storage::LocalStore;

#[component]
pub fn ConsentBanner() -> impl IntoView {
    let visible = RwSignal::new(!session::consent_accepted(&LocalStore));
    let nav = expect_context::<Navigator>();

    view! {
        <Show when=move || visible.get()>
            <div class="consent-banner">
                <span>
                    "CalcDeck stores history and preferences in your browser. "
                    <a
                        class="consent-banner__link"
                        href="/privacy"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            nav.navigate("/privacy");
                        }
                    >
                        "Privacy policy"
                    </a>
                </span>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        session::accept_consent(&LocalStore);
                        visible.set(false);
                    }
                >
                    "Got it"
                </button>
            </div>
        </Show>
    }
}
