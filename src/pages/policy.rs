//! Static policy pages (privacy, terms, about, disclaimer).

use leptos::prelude::*;

use crate::content;
use crate::router::PolicyKey;

#[component]
pub fn PolicyPage(policy: PolicyKey) -> impl IntoView {
    let (title, body) = content::policy_text(policy);
    let paragraphs = body
        .iter()
        .map(|p| view! { <p class="policy-page__paragraph">{*p}</p> })
        .collect::<Vec<_>>();

    view! {
        <article class="policy-page">
            <h1>{title}</h1>
            {paragraphs}
        </article>
    }
}
