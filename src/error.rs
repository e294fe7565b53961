//! Startup and DOM errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("invalid field config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid field config: {0}")]
    ConfigValue(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PageError::Js(format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PageError> for wasm_bindgen::JsValue {
    fn from(err: PageError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
