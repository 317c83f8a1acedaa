#[cfg(test)]
#[path = "sip_test.rs"]
mod sip_test;

use leptos::prelude::*;

use crate::calculators::{initial, parse_number, snapshot};
use crate::state::history::{AppHistoryLog, InputSnapshot};

pub const NAME: &str = "SIP Calculator";

/// Future value of a monthly systematic investment plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SipOutcome {
    pub invested: f64,
    pub future_value: f64,
    pub gain: f64,
}

/// Annuity-due future value: `A * ((1+i)^n - 1) / i * (1+i)` with a monthly
/// rate `i`; contributions land at the start of each month.
#[must_use]
pub fn future_value(monthly: f64, annual_rate_pct: f64, months: f64) -> Option<SipOutcome> {
    if monthly <= 0.0 || annual_rate_pct < 0.0 || months < 1.0 {
        return None;
    }
    let n = months.round();
    let i = annual_rate_pct / 12.0 / 100.0;
    let invested = monthly * n;
    let future_value = if i == 0.0 {
        invested
    } else {
        monthly * (((1.0 + i).powf(n) - 1.0) / i) * (1.0 + i)
    };
    Some(SipOutcome { invested, future_value, gain: future_value - invested })
}

/// Monthly-investment form: contribution, expected annual return, duration.
#[component]
pub fn SipCalculator(restored: Option<InputSnapshot>) -> impl IntoView {
    let monthly = RwSignal::new(initial(restored.as_ref(), "monthly", ""));
    let rate = RwSignal::new(initial(restored.as_ref(), "rate", ""));
    let months = RwSignal::new(initial(restored.as_ref(), "months", ""));
    let result = RwSignal::new(None::<SipOutcome>);
    let error = RwSignal::new(None::<&'static str>);
    let history = expect_context::<RwSignal<AppHistoryLog>>();

    let on_calculate = move |_| {
        error.set(None);
        result.set(None);
        let parsed = (
            parse_number(&monthly.get()),
            parse_number(&rate.get()),
            parse_number(&months.get()),
        );
        let (Some(contribution), Some(annual_rate), Some(tenure)) = parsed else {
            error.set(Some("Enter a valid number in every field."));
            return;
        };
        match future_value(contribution, annual_rate, tenure) {
            Some(outcome) => {
                result.set(Some(outcome));
                let (m, r, n) = (monthly.get(), rate.get(), months.get());
                let summary = format!(
                    "SIP {contribution}/mo for {tenure} months at {annual_rate}% grows to {:.2}",
                    outcome.future_value
                );
                history.update(|h| {
                    h.add(NAME, &summary, snapshot(&[("monthly", &m), ("rate", &r), ("months", &n)]));
                });
            }
            None => error.set(Some("Contribution must be positive and duration at least one month.")),
        }
    };

    view! {
        <div class="calc-form">
            <label class="calc-form__field">
                "Monthly contribution"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || monthly.get()
                    on:input=move |ev| monthly.set(event_target_value(&ev))
                />
            </label>
            <label class="calc-form__field">
                "Expected annual return (%)"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || rate.get()
                    on:input=move |ev| rate.set(event_target_value(&ev))
                />
            </label>
            <label class="calc-form__field">
                "Duration (months)"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || months.get()
                    on:input=move |ev| months.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=on_calculate>"Calculate"</button>
            <Show when=move || error.get().is_some()>
                <p class="calc-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|o| {
                        view! {
                            <div class="calc-result">
                                <p class="calc-result__line">
                                    <strong>"Future value: "</strong>
                                    {format!("{:.2}", o.future_value)}
                                </p>
                                <p class="calc-result__line">
                                    "Invested: " {format!("{:.2}", o.invested)}
                                </p>
                                <p class="calc-result__line">
                                    "Estimated gain: " {format!("{:.2}", o.gain)}
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
