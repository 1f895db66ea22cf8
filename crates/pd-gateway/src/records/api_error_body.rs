use serde::Deserialize;
use serde_json::Value;

/// Error payload returned by the identity service or the record store.
///
/// The two services disagree on field names, so every known spelling is
/// accepted and the first one present wins.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    error_code: Option<Value>,
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<Value>,
}

impl ApiErrorBody {
    /// Parse a response body, tolerating non-JSON payloads
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    pub fn code(&self) -> Option<String> {
        [self.error_code.as_ref(), self.code.as_ref()]
            .into_iter()
            .flatten()
            .find_map(value_to_string)
    }

    pub fn message(&self) -> Option<String> {
        self.msg
            .clone()
            .or_else(|| self.message.clone())
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.as_ref().and_then(value_to_string))
            .filter(|message| !message.trim().is_empty())
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
