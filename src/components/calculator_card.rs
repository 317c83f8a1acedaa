//! Reusable card component for calculator entries on the home page.

use leptos::prelude::*;

use crate::nav::Navigator;
use crate::registry;

/// A clickable card that opens one calculator.
#[component]
pub fn CalculatorCard(name: &'static str, blurb: &'static str) -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let path = registry::path_for(name);
    let href = path.clone();

    view! {
        <a
            class="calc-card"
            href=href
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                nav.navigate(&path);
            }
        >
            <span class="calc-card__name">{name}</span>
            <span class="calc-card__blurb">{blurb}</span>
        </a>
    }
}
