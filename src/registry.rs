//! Static calculator registry: the single name -> renderer lookup table the
//! router resolves slugs against.
//!
//! Every name referenced by the history or saved-date features must appear
//! here, or restoration for it silently no-ops.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use leptos::prelude::*;

use crate::calculators::{age, bmi, discount, emi, percentage, sip};
use crate::slug::slugify;
use crate::state::history::InputSnapshot;

/// Card grouping on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Finance,
    Health,
    Math,
    Everyday,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Health => "Health",
            Self::Math => "Math",
            Self::Everyday => "Everyday",
        }
    }
}

/// Registry metadata for one calculator.
#[derive(Clone, Copy, Debug)]
pub struct CalculatorInfo {
    pub name: &'static str,
    pub category: Category,
    pub blurb: &'static str,
}

/// Every calculator the app ships, in display order.
pub const CALCULATORS: &[CalculatorInfo] = &[
    CalculatorInfo {
        name: emi::NAME,
        category: Category::Finance,
        blurb: "Monthly payment, total interest, and total cost of a loan.",
    },
    CalculatorInfo {
        name: sip::NAME,
        category: Category::Finance,
        blurb: "Future value of a monthly investment plan.",
    },
    CalculatorInfo {
        name: bmi::NAME,
        category: Category::Health,
        blurb: "Body mass index and WHO weight category.",
    },
    CalculatorInfo {
        name: percentage::NAME,
        category: Category::Math,
        blurb: "X% of Y, and X as a share of Y.",
    },
    CalculatorInfo {
        name: age::NAME,
        category: Category::Everyday,
        blurb: "Exact age in years, months, and days.",
    },
    CalculatorInfo {
        name: discount::NAME,
        category: Category::Everyday,
        blurb: "Sale price and savings after a percentage discount.",
    },
];

/// Categories in home-page order.
pub const CATEGORIES: &[Category] =
    &[Category::Finance, Category::Health, Category::Math, Category::Everyday];

/// Exact-name membership test (used by restoration and embed mode).
#[must_use]
pub fn is_known(name: &str) -> bool {
    CALCULATORS.iter().any(|c| c.name == name)
}

/// Look a slug up against the slugified form of every known name.
#[must_use]
pub fn find_by_slug(slug: &str) -> Option<&'static CalculatorInfo> {
    CALCULATORS.iter().find(|c| slugify(c.name) == slug)
}

/// Canonical path for a calculator name.
#[must_use]
pub fn path_for(name: &str) -> String {
    format!("/calc/{}", slugify(name))
}

/// Resolve a calculator name to its renderer.
///
/// The router only produces known names, but an unknown one still renders a
/// harmless placeholder rather than erroring.
#[must_use]
pub fn render(name: &str, restored: Option<InputSnapshot>) -> AnyView {
    match name {
        emi::NAME => view! { <emi::EmiCalculator restored=restored/> }.into_any(),
        sip::NAME => view! { <sip::SipCalculator restored=restored/> }.into_any(),
        bmi::NAME => view! { <bmi::BmiCalculator restored=restored/> }.into_any(),
        percentage::NAME => view! { <percentage::PercentageCalculator restored=restored/> }.into_any(),
        age::NAME => view! { <age::AgeCalculator restored=restored/> }.into_any(),
        discount::NAME => view! { <discount::DiscountCalculator restored=restored/> }.into_any(),
        _ => view! { <p class="calc-page__missing">"This calculator is unavailable."</p> }.into_any(),
    }
}
