use wasm_bindgen::JsValue;

/// Failures while attaching gesture routing to a page.
#[derive(Debug, thiserror::Error)]
pub enum WebPlatformError {
    #[error("no global window is available")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("no element matches selector `{0}`")]
    MissingElement(String),
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("failed to register `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
}

impl From<WebPlatformError> for JsValue {
    fn from(err: WebPlatformError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        let err = WebPlatformError::MissingElement(".modal-content".into());
        assert_eq!(err.to_string(), "no element matches selector `.modal-content`");

        let err = WebPlatformError::Listener {
            event: "touchmove",
            message: "TypeError".into(),
        };
        assert!(err.to_string().contains("`touchmove`"));
    }
}
