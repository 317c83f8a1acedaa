#[cfg(test)]
#[path = "bmi_test.rs"]
mod bmi_test;

use leptos::prelude::*;

use crate::calculators::{initial, parse_number, snapshot};
use crate::state::history::{AppHistoryLog, InputSnapshot};

pub const NAME: &str = "BMI Calculator";

/// WHO adult BMI bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Body mass index from weight in kilograms and height in centimeters.
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<(f64, BmiBand)> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let meters = height_cm / 100.0;
    let bmi = weight_kg / (meters * meters);
    let band = if bmi < 18.5 {
        BmiBand::Underweight
    } else if bmi < 25.0 {
        BmiBand::Normal
    } else if bmi < 30.0 {
        BmiBand::Overweight
    } else {
        BmiBand::Obese
    };
    Some((bmi, band))
}

/// Weight/height form producing a BMI and its WHO band.
#[component]
pub fn BmiCalculator(restored: Option<InputSnapshot>) -> impl IntoView {
    let weight = RwSignal::new(initial(restored.as_ref(), "weight", ""));
    let height = RwSignal::new(initial(restored.as_ref(), "height", ""));
    let result = RwSignal::new(None::<(f64, BmiBand)>);
    let error = RwSignal::new(None::<&'static str>);
    let history = expect_context::<RwSignal<AppHistoryLog>>();

    let on_calculate = move |_| {
        error.set(None);
        result.set(None);
        let parsed = (parse_number(&weight.get()), parse_number(&height.get()));
        let (Some(kg), Some(cm)) = parsed else {
            error.set(Some("Enter a valid number in every field."));
            return;
        };
        match body_mass_index(kg, cm) {
            Some((bmi, band)) => {
                result.set(Some((bmi, band)));
                let (w, h) = (weight.get(), height.get());
                let summary = format!("BMI {bmi:.1} ({}) at {kg} kg, {cm} cm", band.label());
                history.update(|hist| {
                    hist.add(NAME, &summary, snapshot(&[("weight", &w), ("height", &h)]));
                });
            }
            None => error.set(Some("Weight and height must both be positive.")),
        }
    };

    view! {
        <div class="calc-form">
            <label class="calc-form__field">
                "Weight (kg)"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || weight.get()
                    on:input=move |ev| weight.set(event_target_value(&ev))
                />
            </label>
            <label class="calc-form__field">
                "Height (cm)"
                <input
                    class="calc-form__input"
                    type="number"
                    prop:value=move || height.get()
                    on:input=move |ev| height.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=on_calculate>"Calculate"</button>
            <Show when=move || error.get().is_some()>
                <p class="calc-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                result
                    .get()
                    .map(|(bmi, band)| {
                        view! {
                            <div class="calc-result">
                                <p class="calc-result__line">
                                    <strong>"BMI: "</strong>
                                    {format!("{bmi:.1}")}
                                </p>
                                <p class="calc-result__line">"Category: " {band.label()}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
