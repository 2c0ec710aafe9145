//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The registration pages are server-rendered by Leptos and hydrated in the
//! browser. The backend base URL from `ServerConfig` is injected into every
//! render through context. The compiled bundle is served from `/pkg`, other
//! static assets from the site root.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Routes that do not go through Leptos.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application: health check + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(dar_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = config.api.clone();
                move || provide_context(api.clone())
            },
            {
                let opts = leptos_options.clone();
                move || dar_ui::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
