#[cfg(test)]
#[path = "age_test.rs"]
mod age_test;

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::calculators::{initial, snapshot};
use crate::state::history::{AppHistoryLog, InputSnapshot};
use crate::state::saved_dates::AppSavedDates;

pub const NAME: &str = "Age Calculator";

/// Elapsed calendar age, broken into whole years, months, and days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeParts {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Age at `today` for someone born on `birth`; `None` if `birth` is in the
/// future.
///
/// Counts whole months first, then the days past the last month anniversary.
/// `Months` addition clamps the day of month, so 31-day anchors and leap
/// Februaries come out right.
#[must_use]
pub fn age_parts(birth: NaiveDate, today: NaiveDate) -> Option<AgeParts> {
    if birth > today {
        return None;
    }
    let mut whole_months = (today.year() - birth.year()) * 12
        + i32::try_from(today.month()).ok()?
        - i32::try_from(birth.month()).ok()?;
    if today.day() < birth.day() {
        whole_months -= 1;
    }
    let anniversary = birth.checked_add_months(chrono::Months::new(u32::try_from(whole_months).ok()?))?;
    let days = i32::try_from((today - anniversary).num_days()).ok()?;
    Some(AgeParts { years: whole_months / 12, months: whole_months % 12, days })
}

/// Birth-date form; can pre-fill from the saved-date registry.
#[component]
pub fn AgeCalculator(restored: Option<InputSnapshot>) -> impl IntoView {
    let birth = RwSignal::new(initial(restored.as_ref(), "birth", ""));
    let result = RwSignal::new(None::<AgeParts>);
    let error = RwSignal::new(None::<&'static str>);
    let history = expect_context::<RwSignal<AppHistoryLog>>();
    let dates = expect_context::<RwSignal<AppSavedDates>>();

    let on_pick_saved = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let picked = dates.get().entries().iter().find(|e| e.id == id).map(|e| e.date);
        if let Some(date) = picked {
            birth.set(date.format("%Y-%m-%d").to_string());
        }
    };

    let on_calculate = move |_| {
        error.set(None);
        result.set(None);
        let raw = birth.get();
        let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
            error.set(Some("Enter a date as YYYY-MM-DD."));
            return;
        };
        let today = chrono::Local::now().date_naive();
        match age_parts(date, today) {
            Some(parts) => {
                result.set(Some(parts));
                let summary = format!(
                    "Age {}y {}m {}d for birth date {date}",
                    parts.years, parts.months, parts.days
                );
                history.update(|h| h.add(NAME, &summary, snapshot(&[("birth", &raw)])));
            }
            None => error.set(Some("Birth date is in the future.")),
        }
    };

    view! {
        <div class="calc-form">
            <label class="calc-form__field">
                "Birth date"
                <input
                    class="calc-form__input"
                    type="date"
                    prop:value=move || birth.get()
                    on:input=move |ev| birth.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !dates.get().is_empty()>
                <label class="calc-form__field">
                    "Or pick a saved date"
                    <select class="calc-form__input" on:change=on_pick_saved>
                        <option value="">"Choose..."</option>
                        {move || {
                            dates
                                .get()
                                .entries()
                                .iter()
                                .map(|e| {
                                    let id = e.id.clone();
                                    let text = format!("{} ({})", e.name, e.date);
                                    view! { <option value=id>{text}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
            </Show>
            <button class="btn btn--primary" on:click=on_calculate>"Calculate"</button>
            <Show when=move || error.get().is_some()>
                <p class="calc-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|parts| {
                        view! {
                            <div class="calc-result">
                                <p class="calc-result__line">
                                    <strong>"Age: "</strong>
                                    {format!("{} years, {} months, {} days", parts.years, parts.months, parts.days)}
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
