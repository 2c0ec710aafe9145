//! Full-screen busy indicator shown while a request is in flight.

use leptos::prelude::*;

#[component]
pub fn BusyOverlay(#[prop(into)] visible: Signal<bool>, message: &'static str) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="busy-overlay" role="alertdialog" aria-busy="true">
                <div class="busy-overlay__card">
                    <span class="spinner" aria-hidden="true"></span>
                    <p>{message}</p>
                </div>
            </div>
        </Show>
    }
}
