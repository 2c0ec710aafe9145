//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toaster::Toaster;
use crate::net::config::{API_BASE_META_NAME, ApiConfig};
use crate::pages::{registration_form::RegistrationFormPage, registration_list::RegistrationListPage};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URL provided by the server is written into a `<meta>`
/// tag so the hydrated client resolves the same `ApiConfig`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api = use_context::<ApiConfig>().unwrap_or_default();
    let api_base = api.base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the backend config and toast queue, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(api);
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/dar-time-trials.css"/>
        <Title text="DAR Time Trials"/>

        <Router>
            <div class="app">
                <Navbar/>
                <Toaster/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RegistrationFormPage/>
                    <Route path=(StaticSegment("app"), StaticSegment("registrations")) view=RegistrationListPage/>
                </Routes>
            </div>
        </Router>
    }
}
