//! Saved-dates page: add/remove named dates used by the age calculator.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::state::saved_dates::{AppSavedDates, DateKind};

#[component]
pub fn SavedDatesPage() -> impl IntoView {
    let dates = expect_context::<RwSignal<AppSavedDates>>();

    let name = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let kind = RwSignal::new("Birthday".to_owned());
    let error = RwSignal::new(None::<&'static str>);

    let on_add = move |_| {
        error.set(None);
        let entry_name = name.get();
        if entry_name.trim().is_empty() {
            error.set(Some("Give the date a name."));
            return;
        }
        let Ok(parsed) = NaiveDate::parse_from_str(date.get().trim(), "%Y-%m-%d") else {
            error.set(Some("Enter a date as YYYY-MM-DD."));
            return;
        };
        let entry_kind = if kind.get() == "Anniversary" {
            DateKind::Anniversary
        } else {
            DateKind::Birthday
        };
        dates.update(|d| d.add(entry_name.trim(), parsed, entry_kind));
        name.set(String::new());
        date.set(String::new());
    };

    let rows = move || {
        dates
            .get()
            .entries()
            .iter()
            .map(|entry| {
                let id = entry.id.clone();
                view! {
                    <li class="saved-dates__row">
                        <span class="saved-dates__name">{entry.name.clone()}</span>
                        <span class="saved-dates__date">{entry.date.to_string()}</span>
                        <span class="saved-dates__kind">{entry.kind.label()}</span>
                        <button
                            class="btn"
                            title="Remove"
                            on:click=move |_| dates.update(|d| d.remove(&id))
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="saved-dates">
            <h1>"Saved dates"</h1>
            <p class="saved-dates__hint">
                "Birthdays and anniversaries saved here can be picked directly in the age calculator."
            </p>

            <div class="saved-dates__form">
                <input
                    class="calc-form__input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="calc-form__input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <select
                    class="calc-form__input"
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    <option value="Birthday">"Birthday"</option>
                    <option value="Anniversary">"Anniversary"</option>
                </select>
                <button class="btn btn--primary" on:click=on_add>"Add"</button>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="calc-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !dates.get().is_empty()
                fallback=|| view! { <p class="saved-dates__empty">"Nothing saved yet."</p> }
            >
                <ul class="saved-dates__list">{rows}</ul>
            </Show>
        </div>
    }
}
