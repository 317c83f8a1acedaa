//! Sliding panel listing past calculations grouped by day.
//!
//! Clicking a record reopens its calculator pre-filled with the recorded
//! inputs; clear-all is guarded by an inline confirm dialog. The log itself
//! performs no confirmation — that is this panel's job.

use leptos::prelude::*;

use crate::nav::Navigator;
use crate::state::history::AppHistoryLog;
use crate::state::ui::UiState;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let history = expect_context::<RwSignal<AppHistoryLog>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let nav = expect_context::<Navigator>();

    let groups = move || {
        history
            .get()
            .grouped_by_day()
            .into_iter()
            .map(|group| {
                let label = group.label();
                let records = group
                    .records
                    .into_iter()
                    .map(|record| {
                        let delete_id = record.id.clone();
                        let restore = record.clone();
                        view! {
                            <div class="history-panel__record">
                                <button
                                    class="history-panel__restore"
                                    title="Reopen with these inputs"
                                    on:click=move |_| {
                                        nav.restore_from_history(&restore);
                                        ui.update(UiState::close_history);
                                    }
                                >
                                    <span class="history-panel__calc">
                                        {record.calculator_name.clone()}
                                    </span>
                                    <span class="history-panel__summary">
                                        {record.summary.clone()}
                                    </span>
                                </button>
                                <button
                                    class="history-panel__delete"
                                    title="Delete this entry"
                                    on:click=move |_| history.update(|h| h.remove(&delete_id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <section class="history-panel__day">
                        <h3 class="history-panel__day-label">{label}</h3>
                        {records}
                    </section>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="history-panel">
            <div class="history-panel__header">
                <h2>"History"</h2>
                <button
                    class="btn"
                    on:click=move |_| ui.update(UiState::close_history)
                >
                    "Close"
                </button>
            </div>

            <Show when=move || history.get().is_empty()>
                <p class="history-panel__empty">"No calculations yet."</p>
            </Show>

            <div class="history-panel__groups">{groups}</div>

            <Show when=move || !history.get().is_empty()>
                <button
                    class="btn btn--danger"
                    on:click=move |_| ui.update(|u| u.confirm_clear = true)
                >
                    "Clear all"
                </button>
            </Show>

            <Show when=move || ui.get().confirm_clear>
                <div class="dialog-backdrop" on:click=move |_| ui.update(|u| u.confirm_clear = false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Clear history?"</h2>
                        <p>"This removes every recorded calculation and cannot be undone."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| ui.update(|u| u.confirm_clear = false)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| {
                                    history.update(AppHistoryLog::clear);
                                    ui.update(|u| u.confirm_clear = false);
                                }
                            >
                                "Clear"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </aside>
    }
}
