//! Backend location injected into the views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server provides an `ApiConfig` through Leptos context during SSR and
//! mirrors it into a `<meta>` tag so the hydrated client can recover the same
//! value without a second configuration channel.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Hosted DAR registration backend.
pub const DEFAULT_API_BASE_URL: &str = "https://dar-race-express-server-k3852yzqg.vercel.app";

/// `name` of the `<meta>` tag carrying the base URL into the browser.
pub const API_BASE_META_NAME: &str = "dar-api-base-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` target for a new registration.
    pub fn register_url(&self) -> String {
        format!("{}/api/register", self.base_url)
    }

    /// `GET` target for the full registration list.
    pub fn registrations_url(&self) -> String {
        format!("{}/api/registrations", self.base_url)
    }

    /// Read the base URL the server rendered into the page head.
    ///
    /// An empty value keeps same-origin paths. Falls back to the default when
    /// the tag is missing, and always on the server.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            if let Some(base) = content {
                return Self::new(base);
            }
        }
        Self::default()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
