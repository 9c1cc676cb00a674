//! Core `inertia` crate for bridging server handlers to page components.
//!
//! This crate implements the server half of the Inertia page-object protocol:
//! handlers assemble props and hand them to [`Inertia::render`], which answers
//! either a bare JSON page object (for client-side visits carrying the
//! `X-Inertia` header) or a full HTML document embedding the page object
//! (for first loads and full reloads).

pub mod errors;
pub mod page;

pub use errors::InertiaError;
pub use page::Page;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::convert::Infallible;

/// Marker header the client bridge sends on every protocol visit.
pub const INERTIA_HEADER: &str = "x-inertia";
/// Asset version the client was booted with.
pub const VERSION_HEADER: &str = "x-inertia-version";
/// Target of the forced full reload issued on a version conflict.
pub const LOCATION_HEADER: &str = "x-inertia-location";

/// Server-side bridge settings, shared across requests.
#[derive(Debug, Clone)]
pub struct InertiaConfig {
    /// Document title used by the HTML shell.
    pub title: String,
    /// Current asset version; `None` disables stale-version reloads.
    pub version: Option<String>,
}

impl InertiaConfig {
    pub fn new(title: impl Into<String>, version: Option<String>) -> Self {
        Self {
            title: title.into(),
            version,
        }
    }
}

/// Per-request protocol state, pulled out of the incoming headers.
///
/// Extracting this never fails: a request without protocol headers is simply
/// a plain browser visit and renders the HTML shell.
#[derive(Debug, Clone)]
pub struct Inertia {
    is_inertia: bool,
    is_get: bool,
    requested_version: Option<String>,
    url: String,
}

impl<S> FromRequestParts<S> for Inertia
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_inertia = parts
            .headers
            .get(INERTIA_HEADER)
            .map(|value| value == "true")
            .unwrap_or(false);
        let requested_version = parts
            .headers
            .get(VERSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let url = parts
            .uri
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());
        Ok(Self {
            is_inertia,
            is_get: parts.method == Method::GET,
            requested_version,
            url,
        })
    }
}

impl Inertia {
    /// Answer this request with the given component and props.
    ///
    /// Protocol visits get the page object as JSON; everything else gets the
    /// HTML shell with the page object embedded in the mount node. A protocol
    /// GET carrying a stale asset version is told to do a full reload instead.
    pub fn render<P: Serialize>(
        &self,
        config: &InertiaConfig,
        component: &str,
        props: P,
    ) -> Response {
        match self.try_render(config, component, props) {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }

    fn try_render<P: Serialize>(
        &self,
        config: &InertiaConfig,
        component: &str,
        props: P,
    ) -> Result<Response, InertiaError> {
        if self.is_inertia && self.is_get && self.version_is_stale(config) {
            let location = HeaderValue::from_str(&self.url)
                .map_err(|_| InertiaError::BadLocation(self.url.clone()))?;
            let mut response = StatusCode::CONFLICT.into_response();
            response.headers_mut().insert(LOCATION_HEADER, location);
            return Ok(response);
        }

        let page = Page::new(component, props, &self.url, config.version.clone())?;
        if self.is_inertia {
            let mut response = Json(&page).into_response();
            response
                .headers_mut()
                .insert(INERTIA_HEADER, HeaderValue::from_static("true"));
            response
                .headers_mut()
                .insert(header::VARY, HeaderValue::from_static("X-Inertia"));
            Ok(response)
        } else {
            Ok(Html(html_shell(config, &page)?).into_response())
        }
    }

    fn version_is_stale(&self, config: &InertiaConfig) -> bool {
        match (&config.version, &self.requested_version) {
            (Some(current), Some(requested)) => current != requested,
            _ => false,
        }
    }
}

/// Minimal document wrapping the mount node. The client bridge reads the page
/// object back out of the `data-page` attribute, so the JSON must survive
/// attribute quoting.
fn html_shell(config: &InertiaConfig, page: &Page) -> Result<String, InertiaError> {
    let data = serde_json::to_string(page)?;
    Ok(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"app\" data-page=\"{}\"></div>\n\
         </body>\n\
         </html>\n",
        escape_attribute(&config.title),
        escape_attribute(&data)
    ))
}

fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
