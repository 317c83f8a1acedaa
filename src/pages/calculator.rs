//! Calculator host page.
//!
//! Consumes the one-shot restore mailbox on mount and hands the snapshot to
//! the calculator as its *initial* form state. The component tree is rebuilt
//! on every view transition, so switching calculators (or restoring a second
//! record into the same one) always starts from a clean slate.

use leptos::prelude::*;

use crate::registry;
use crate::state::session::SessionState;

#[component]
pub fn CalculatorPage(name: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let restored = session.try_update(|s| s.take_restored(&name)).flatten();
    let blurb = registry::CALCULATORS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.blurb)
        .unwrap_or_default();
    let body = registry::render(&name, restored);

    view! {
        <section class="calc-page">
            <h1 class="calc-page__title">{name.clone()}</h1>
            <p class="calc-page__blurb">{blurb}</p>
            {body}
        </section>
    }
}
