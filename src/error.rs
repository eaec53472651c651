// Failures that end a loader sequence early; each one degrades to a hidden
// overlay with no animation

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum LoadError {
    /// A host object the sequence needs (window, canvas, 2-D context) is missing.
    Unavailable(&'static str),
    /// The fetch was rejected or its body could not be read.
    Network(String),
    /// The point-set resource answered with a non-success status.
    Status(u16),
    /// The body is not a list of `[x, y]` pairs.
    Parse(serde_json::Error),
}

impl LoadError {
    pub fn network(err: JsValue) -> LoadError {
        LoadError::Network(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Unavailable(what) => write!(f, "{} is not available", what),
            LoadError::Network(msg) => write!(f, "Failed to load points: {}", msg),
            LoadError::Status(status) => {
                write!(f, "Failed to load points: server answered {}", status)
            }
            LoadError::Parse(e) => write!(f, "Malformed point set: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

impl From<LoadError> for JsValue {
    fn from(e: LoadError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_code() {
        assert_eq!(
            LoadError::Status(404).to_string(),
            "Failed to load points: server answered 404"
        );
    }

    #[test]
    fn missing_listener_is_not_reported_as_a_load_failure() {
        let message = LoadError::Unavailable("mousemove listener").to_string();
        assert_eq!(message, "mousemove listener is not available");
        assert!(!message.contains("load points"));
    }

    #[test]
    fn parse_error_exposes_source() {
        use std::error::Error;
        let err: LoadError = serde_json::from_str::<Vec<f64>>("{").unwrap_err().into();
        assert!(err.source().is_some());
    }
}
