use {
    serde::{Deserialize, Serialize},
    std::fmt::{self, Display, Formatter},
};

/// A notification as posted by a client. Any JSON value is accepted, the
/// receiver does not enforce a schema.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Notification(pub serde_json::Value);

impl Notification {
    /// Name of the JSON type of the payload, for log fields.
    pub fn kind(&self) -> &'static str {
        match &self.0 {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

/// Compact JSON text.
impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
