//! Visible summary table and the hidden full-field export table.
//!
//! DESIGN
//! ======
//! Both tables render from the same `ListState`; the export table is never
//! shown and exists only so the spreadsheet export can copy its markup.

use leptos::prelude::*;

use crate::state::list::ListState;
use crate::util::export::EXPORT_HEADERS;

const SUMMARY_HEADERS: [&str; 6] = ["Name", "Team", "Nationality", "Car Details", "Engine", "Contact"];

#[component]
pub fn SummaryTable(list: RwSignal<ListState>) -> impl IntoView {
    view! {
        <table class="registrations">
            <thead>
                <tr>
                    {SUMMARY_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    list.with(ListState::summary_rows)
                        .into_iter()
                        .map(|row| {
                            let class = row.class_name();
                            view! {
                                <tr class=class>
                                    <td>{row.name}</td>
                                    <td>{row.team}</td>
                                    <td>{row.nationality}</td>
                                    <td>{row.car}</td>
                                    <td>{row.engine}</td>
                                    <td>{row.contact}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn ExportTable(list: RwSignal<ListState>, table_ref: NodeRef<leptos::html::Table>) -> impl IntoView {
    view! {
        <div class="hidden" aria-hidden="true">
            <table node_ref=table_ref>
                <thead>
                    <tr>
                        {EXPORT_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.with(ListState::export_rows)
                            .into_iter()
                            .map(|cells| {
                                view! {
                                    <tr>
                                        {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
