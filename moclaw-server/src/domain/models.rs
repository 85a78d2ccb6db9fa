use serde::Serialize;
use serde_json::Value;

/// What one request to the tracking link reveals about its caller.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Visit {
    pub ip: String,
    /// Provider document, passed through as-is.
    pub location: Value,
    pub device: Option<String>,
}
