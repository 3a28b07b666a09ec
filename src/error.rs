//! Site Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    /// Embedded registry JSON did not parse
    #[error("content registry `{registry}` is malformed: {source}")]
    Content {
        registry: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Window, document or body missing
    #[error("{0} unavailable")]
    Dom(&'static str),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
