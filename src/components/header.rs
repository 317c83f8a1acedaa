//! Top navigation bar: brand, section links, history toggle.

use leptos::prelude::*;

use crate::nav::Navigator;
use crate::state::history::AppHistoryLog;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let nav = expect_context::<Navigator>();
    let ui = expect_context::<RwSignal<UiState>>();
    let history = expect_context::<RwSignal<AppHistoryLog>>();

    let link = move |path: &'static str, label: &'static str| {
        view! {
            <a
                class="header__link"
                href=path
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    nav.navigate(path);
                }
            >
                {label}
            </a>
        }
    };

    let history_count = move || history.get().len();

    view! {
        <header class="header">
            <a
                class="header__brand"
                href="/"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    nav.navigate("/");
                }
            >
                "CalcDeck"
            </a>
            <nav class="header__nav">
                {link("/", "Calculators")}
                {link("/saved-dates", "Saved Dates")}
                {link("/blog", "Blog")}
                {link("/about", "About")}
            </nav>
            <button
                class="header__history-toggle"
                title="Calculation history"
                on:click=move |_| ui.update(UiState::toggle_history)
            >
                "History"
                <Show when=move || { history_count() > 0 }>
                    <span class="header__badge">{history_count}</span>
                </Show>
            </button>
        </header>
    }
}
