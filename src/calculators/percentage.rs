#[cfg(test)]
#[path = "percentage_test.rs"]
mod percentage_test;

use leptos::prelude::*;

use crate::calculators::{initial, parse_number, snapshot};
use crate::state::history::{AppHistoryLog, InputSnapshot};

pub const NAME: &str = "Percentage Calculator";

/// `pct` percent of `base`.
#[must_use]
pub fn percent_of(pct: f64, base: f64) -> f64 {
    base * pct / 100.0
}

/// What percentage `part` is of `whole`; `None` when `whole` is zero.
#[must_use]
pub fn percent_share(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    Some(part / whole * 100.0)
}

/// Two-field percentage form: X% of Y, and X as a share of Y.
#[component]
pub fn PercentageCalculator(restored: Option<InputSnapshot>) -> impl IntoView {
    let x = RwSignal::new(initial(restored.as_ref(), "x", ""));
    let y = RwSignal::new(initial(restored.as_ref(), "y", ""));
    let result = RwSignal::new(None::<(f64, Option<f64>)>);
    let error = RwSignal::new(None::<&'static str>);
    let history = expect_context::<RwSignal<AppHistoryLog>>();

    let on_calculate = move |_| {
        error.set(None);
        result.set(None);
        let parsed = (parse_number(&x.get()), parse_number(&y.get()));
        let (Some(a), Some(b)) = parsed else {
            error.set(Some("Enter a valid number in both fields."));
            return;
        };
        let of = percent_of(a, b);
        let share = percent_share(a, b);
        result.set(Some((of, share)));
        let (xr, yr) = (x.get(), y.get());
        let summary = format!("{a}% of {b} = {of}");
        history.update(|h| h.add(NAME, &summary, snapshot(&[("x", &xr), ("y", &yr)])));
    };

    view! {
        <div class="calc-form">
            <label class="calc-form__field">
                "X"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || x.get()
                    on:input=move |ev| x.set(event_target_value(&ev))
                />
            </label>
            <label class="calc-form__field">
                "Y"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || y.get()
                    on:input=move |ev| y.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=on_calculate>"Calculate"</button>
            <Show when=move || error.get().is_some()>
                <p class="calc-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|(of, share)| {
                        view! {
                            <div class="calc-result">
                                <p class="calc-result__line">
                                    <strong>"X% of Y: "</strong>
                                    {format!("{of:.4}")}
                                </p>
                                <p class="calc-result__line">
                                    "X as a share of Y: "
                                    {share.map_or_else(
                                        || "undefined (Y is zero)".to_owned(),
                                        |s| format!("{s:.2}%"),
                                    )}
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
