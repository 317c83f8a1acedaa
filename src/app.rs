//! Root application component: startup reconciliation, context providers,
//! and view dispatch.
//!
//! The router signal is the single source of view truth; this component
//! renders exactly one page for the current [`View`] and re-renders whole
//! pages on every transition, so no state leaks between views.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::browser;
use crate::components::ad_slot::AdSlot;
use crate::components::consent_banner::ConsentBanner;
use crate::components::header::Header;
use crate::components::history_panel::HistoryPanel;
use crate::components::onboarding::Onboarding;
use crate::nav::Navigator;
use crate::pages::blog::{BlogListPage, BlogPostPage};
use crate::pages::calculator::CalculatorPage;
use crate::pages::home::HomePage;
use crate::pages::policy::PolicyPage;
use crate::pages::saved_dates::SavedDatesPage;
use crate::router::{self, View};
use crate::state::history::HistoryLog;
use crate::state::saved_dates::SavedDates;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::storage::LocalStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Startup reconciliation runs exactly once, before any signal exists:
    // embed query parameter, then legacy hash normalization, then the path.
    let (initial, op) =
        router::startup(&browser::current_path(), &browser::current_query(), &browser::current_hash());
    browser::apply(&op);
    let embed = initial.embed;
    log::info!("starting at {} (embed: {embed})", initial.path);

    let router = RwSignal::new(initial);
    let session = RwSignal::new(SessionState::default());
    let history = RwSignal::new(HistoryLog::load(LocalStore));
    let dates = RwSignal::new(SavedDates::load(LocalStore));
    let ui = RwSignal::new(UiState::default());
    let nav = Navigator { router, session };

    provide_context(router);
    provide_context(session);
    provide_context(history);
    provide_context(dates);
    provide_context(ui);
    provide_context(nav);

    // Embed sessions never consult the router again, so the listener is
    // simply not installed. Pops only re-resolve; they can never push.
    if !embed {
        browser::on_popstate(move |path| nav.handle_pop(&path));
    }

    // Scroll policy: calculators always open at the top; every other page
    // gets the offset remembered when the user last left Home. Runs after
    // each transition renders.
    Effect::new(move || {
        let is_calculator = router.with(|r| matches!(r.view, View::Calculator { .. }));
        if is_calculator {
            browser::scroll_to(0.0);
        } else {
            let offset = session.with_untracked(|s| s.home_scroll);
            browser::scroll_to(offset);
        }
    });

    let main_class = if embed { "app__main app__main--embed" } else { "app__main" };

    let page = move || match router.get().view {
        View::Home => view! { <HomePage/> }.into_any(),
        View::Calculator { name } => view! { <CalculatorPage name=name/> }.into_any(),
        View::SavedDates => view! { <SavedDatesPage/> }.into_any(),
        View::Policy { key } => view! { <PolicyPage policy=key/> }.into_any(),
        View::BlogList => view! { <BlogListPage/> }.into_any(),
        View::BlogPost { slug } => view! { <BlogPostPage slug=slug/> }.into_any(),
    };

    view! {
        <Title text="CalcDeck"/>

        <Show when=move || !embed>
            <Header/>
        </Show>

        <main class=main_class>
            {page}
        </main>

        <Show when=move || !embed>
            <AdSlot/>
            <Show when=move || ui.get().history_open>
                <HistoryPanel/>
            </Show>
            <Onboarding/>
            <ConsentBanner/>
        </Show>
    }
}
