#[cfg(test)]
#[path = "emi_test.rs"]
mod emi_test;

use leptos::prelude::*;

use crate::calculators::{initial, parse_number, snapshot};
use crate::state::history::{AppHistoryLog, InputSnapshot};

pub const NAME: &str = "EMI Calculator";

/// Amortized monthly payment breakdown for a fixed-rate loan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmiBreakdown {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Standard EMI formula: `P * r * (1+r)^n / ((1+r)^n - 1)` with a monthly
/// rate `r`. A zero rate degenerates to straight division.
#[must_use]
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, months: f64) -> Option<EmiBreakdown> {
    if principal <= 0.0 || annual_rate_pct < 0.0 || months < 1.0 {
        return None;
    }
    let n = months.round();
    let r = annual_rate_pct / 12.0 / 100.0;
    let emi = if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };
    let total_payment = emi * n;
    Some(EmiBreakdown { emi, total_payment, total_interest: total_payment - principal })
}

/// Loan EMI form: amount, annual rate, tenure in months.
#[component]
pub fn EmiCalculator(restored: Option<InputSnapshot>) -> impl IntoView {
    let amount = RwSignal::new(initial(restored.as_ref(), "amount", ""));
    let rate = RwSignal::new(initial(restored.as_ref(), "rate", ""));
    let months = RwSignal::new(initial(restored.as_ref(), "months", ""));
    let result = RwSignal::new(None::<EmiBreakdown>);
    let error = RwSignal::new(None::<&'static str>);
    let history = expect_context::<RwSignal<AppHistoryLog>>();

    let on_calculate = move |_| {
        error.set(None);
        result.set(None);
        let parsed = (
            parse_number(&amount.get()),
            parse_number(&rate.get()),
            parse_number(&months.get()),
        );
        let (Some(principal), Some(annual_rate), Some(tenure)) = parsed else {
            error.set(Some("Enter a valid number in every field."));
            return;
        };
        match monthly_payment(principal, annual_rate, tenure) {
            Some(breakdown) => {
                result.set(Some(breakdown));
                let (a, r, m) = (amount.get(), rate.get(), months.get());
                let summary = format!(
                    "EMI {:.2}/mo on {principal} over {tenure} months at {annual_rate}%",
                    breakdown.emi
                );
                history.update(|h| {
                    h.add(NAME, &summary, snapshot(&[("amount", &a), ("rate", &r), ("months", &m)]));
                });
            }
            None => error.set(Some("Amount must be positive and tenure at least one month.")),
        }
    };

    view! {
        <div class="calc-form">
            <label class="calc-form__field">
                "Loan amount"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </label>
            <label class="calc-form__field">
                "Annual interest rate (%)"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || rate.get()
                    on:input=move |ev| rate.set(event_target_value(&ev))
                />
            </label>
            <label class="calc-form__field">
                "Tenure (months)"
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
                    .map(|b| {
                        view! {
                            <div class="calc-result">
                                <p class="calc-result__line">
                                    <strong>"Monthly EMI: "</strong>
                                    {format!("{:.2}", b.emi)}
                                </p>
                                <p class="calc-result__line">
                                    "Total payment: " {format!("{:.2}", b.total_payment)}
                                </p>
                                <p class="calc-result__line">
                                    "Total interest: " {format!("{:.2}", b.total_interest)}
                                </p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
