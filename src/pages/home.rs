//! Home page: calculator cards grouped by category.

use leptos::prelude::*;

use crate::components::calculator_card::CalculatorCard;
use crate::registry::{CALCULATORS, CATEGORIES};

#[component]
pub fn HomePage() -> impl IntoView {
    let sections = CATEGORIES
        .iter()
        .map(|category| {
            let cards = CALCULATORS
                .iter()
                .filter(|c| c.category == *category)
                .map(|c| view! { <CalculatorCard name=c.name blurb=c.blurb/> })
                .collect::<Vec<_>>();
            view! {
                <section class="home-page__category">
                    <h2 class="home-page__category-title">{category.label()}</h2>
                    <div class="home-page__cards">{cards}</div>
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"All calculators"</h1>
            {sections}
        </div>
    }
}
