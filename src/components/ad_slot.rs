//! Ad placeholder slot.
//!
//! The real ad integration is an external collaborator; the shell only
//! decides whether a slot exists at all. Pro users and embed sessions get
//! none (embed suppression happens in `App`, which simply never renders
//! this component).

use leptos::prelude::*;

use crate::state::session;
use crate::storage::LocalStore;

#[component]
pub fn AdSlot() -> impl IntoView {
    let pro = session::is_pro_user(&LocalStore);

    view! {
        <Show when=move || !pro>
            <div class="ad-slot">
                <span class="ad-slot__label">"Advertisement"</span>
            </div>
        </Show>
    }
}
