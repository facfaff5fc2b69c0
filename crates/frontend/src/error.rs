use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fatal conditions that stop the page from mounting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error("app root '{selector}' not found")]
    MissingRootElement { selector: String },

    #[error("no document available")]
    NoDocument,
}

impl From<StartupError> for JsValue {
    fn from(err: StartupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_message() {
        let err = StartupError::MissingRootElement {
            selector: "#app".to_string(),
        };
        assert_eq!(err.to_string(), "app root '#app' not found");
    }
}
