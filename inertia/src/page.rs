//! The page object exchanged with the client-side bridge.
//!
//! A `Page` tells the client which component to mount, the props to mount it
//! with, the URL the response belongs to, and the asset version the server
//! was built against.

use serde::Serialize;

use crate::errors::InertiaError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub component: String,
    pub props: serde_json::Value,
    pub url: String,
    pub version: Option<String>,
}

impl Page {
    /// Build a page object, serializing the props up front so a bad props
    /// type surfaces as an error instead of a half-written response.
    pub fn new<P: Serialize>(
        component: &str,
        props: P,
        url: &str,
        version: Option<String>,
    ) -> Result<Self, InertiaError> {
        Ok(Self {
            component: component.to_string(),
            props: serde_json::to_value(props)?,
            url: url.to_string(),
            version,
        })
    }
}
