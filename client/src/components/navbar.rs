//! Top navigation bar.

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">"DAR Time Trials"</a>
                <div class="navbar__links">
                    <a href="/" class="navbar__link">"Registration"</a>
                </div>
            </div>
        </nav>
    }
}
