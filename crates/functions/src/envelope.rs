use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

const CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");
const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "Content-Type");
const ALLOW_METHODS: (&str, &str) = ("Access-Control-Allow-Methods", "GET, POST, OPTIONS");

/// Response returned to the function platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// Pretty-printed JSON, identical to the HTTP server's body.
    pub body: String,
}

impl FunctionResponse {
    /// 200 with the full CORS header set, or a 500 carrying
    /// `failure_message` if the body cannot be rendered.
    pub fn ok<T: Serialize>(value: &T, failure_message: &str) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(body) => Self {
                status_code: 200,
                headers: headers(&[CONTENT_TYPE, ALLOW_ORIGIN, ALLOW_HEADERS, ALLOW_METHODS]),
                body,
            },
            Err(e) => {
                tracing::error!(error = %e, "response serialization failed");
                Self::error(500, failure_message)
            },
        }
    }

    /// Error envelope: content type and origin only.
    ///
    /// The body is rendered through `Value`'s alternate `Display`, which
    /// cannot fail and matches `to_string_pretty` byte for byte.
    pub fn error(status_code: u16, message: &str) -> Self {
        let body = format!("{:#}", json!({ "error": message }));
        Self { status_code, headers: headers(&[CONTENT_TYPE, ALLOW_ORIGIN]), body }
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(name, value)| ((*name).to_owned(), (*value).to_owned())).collect()
}
