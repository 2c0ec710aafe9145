//! Registration list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches every registration once on mount, shows a summary table, and keeps
//! a hidden full-field table as the source for the Excel export.

use leptos::prelude::*;

use crate::components::registration_tables::{ExportTable, SummaryTable};
use crate::net::config::ApiConfig;
use crate::state::list::{EMPTY_LIST_MESSAGE, ListState};

#[component]
pub fn RegistrationListPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let list = RwSignal::new(ListState::default());
    let export_ref = NodeRef::<leptos::html::Table>::new();

    #[cfg(feature = "hydrate")]
    {
        list.update(ListState::begin_load);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_registrations(&api).await;
            list.update(|s| s.finish_load(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    let on_export = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(table) = export_ref.get_untracked() else {
                log::error!("export table not mounted");
                return;
            };
            if let Err(e) = crate::util::export::download_table(&table) {
                log::error!("excel export failed: {e}");
            }
        }
    };

    view! {
        <div class="page page--list">
            <div class="stats">
                <div class="stat-card">
                    <h3>"Total Registrations"</h3>
                    <p class="stat-card__value">{move || list.with(ListState::total)}</p>
                </div>
            </div>

            <div class="list-header">
                <h2>"Registered Participants"</h2>
                <button class="button button--export" on:click=on_export>"Export to Excel"</button>
            </div>

            <div class="table-card">
                <SummaryTable list=list/>
                <Show when=move || list.with(|s| s.loading)>
                    <div class="table-card__loading">
                        <span class="spinner" aria-label="Loading"></span>
                    </div>
                </Show>
                <Show when=move || list.with(ListState::is_empty_result)>
                    <div class="table-card__empty">{EMPTY_LIST_MESSAGE}</div>
                </Show>
            </div>

            <ExportTable list=list table_ref=export_ref/>
        </div>
    }
}
