#[cfg(test)]
#[path = "discount_test.rs"]
mod discount_test;

use leptos::prelude::*;

use crate::calculators::{initial, parse_number, snapshot};
use crate::state::history::{AppHistoryLog, InputSnapshot};

pub const NAME: &str = "Discount Calculator";

/// Final price and amount saved after a percentage discount.
#[must_use]
pub fn discounted(price: f64, discount_pct: f64) -> Option<(f64, f64)> {
    if price < 0.0 || !(0.0..=100.0).contains(&discount_pct) {
        return None;
    }
    let saved = price * discount_pct / 100.0;
    Some((price - saved, saved))
}

/// Price and discount-percent form.
#[component]
pub fn DiscountCalculator(restored: Option<InputSnapshot>) -> impl IntoView {
    let price = RwSignal::new(initial(restored.as_ref(), "price", ""));
    let discount = RwSignal::new(initial(restored.as_ref(), "discount", ""));
    let result = RwSignal::new(None::<(f64, f64)>);
    let error = RwSignal::new(None::<&'static str>);
    let history = expect_context::<RwSignal<AppHistoryLog>>();

    let on_calculate = move |_| {
        error.set(None);
        result.set(None);
        let parsed = (parse_number(&price.get()), parse_number(&discount.get()));
        let (Some(p), Some(d)) = parsed else {
            error.set(Some("Enter a valid number in both fields."));
            return;
        };
        match discounted(p, d) {
            Some((final_price, saved)) => {
                result.set(Some((final_price, saved)));
                let (pr, dr) = (price.get(), discount.get());
                let summary = format!("{d}% off {p}: pay {final_price:.2}, save {saved:.2}");
                history.update(|h| {
                    h.add(NAME, &summary, snapshot(&[("price", &pr), ("discount", &dr)]));
                });
            }
            None => error.set(Some("Price must be non-negative and discount between 0 and 100.")),
        }
    };

    view! {
        <div class="calc-form">
            <label class="calc-form__field">
                "Original price"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
            </label>
            <label class="calc-form__field">
                "Discount (%)"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || discount.get()
                    on:input=move |ev| discount.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=on_calculate>"Calculate"</button>
            <Show when=move || error.get().is_some()>
                <p class="calc-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|(final_price, saved)| {
                        view! {
                            <div class="calc-result">
                                <p class="calc-result__line">
                                    <strong>"You pay: "</strong>
                                    {format!("{final_price:.2}")}
                                </p>
                                <p class="calc-result__line">"You save: " {format!("{saved:.2}")}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
