// Типы сообщений протокола

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const BASE64_ENCODE: &str = "base64_encode";
pub const BASE64_DECODE: &str = "base64_decode";

/// Входящий запрос
///
/// Only a JSON object (or a bare `null`) is accepted. Missing or `null`
/// fields read as empty strings; extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Request {
    pub action: String,
    /// Raw text for encode, base64 text for decode
    pub data: String,
}

impl Request {
    pub fn new(action: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            data: data.into(),
        }
    }

    pub fn action(&self) -> Action {
        Action::from(self.action.as_str())
    }
}

impl<'de> Deserialize<'de> for Request {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(RequestVisitor)
    }
}

struct RequestVisitor;

impl<'de> Visitor<'de> for RequestVisitor {
    type Value = Request;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a request object")
    }

    fn visit_none<E: de::Error>(self) -> Result<Request, E> {
        Ok(Request::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Request, E> {
        Ok(Request::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Request, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    // Sequences fall through to the default visit_seq, which rejects them
    fn visit_map<A>(self, mut map: A) -> Result<Request, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = Request::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "action" => request.action = map.next_value::<Option<String>>()?.unwrap_or_default(),
                "data" => request.data = map.next_value::<Option<String>>()?.unwrap_or_default(),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(request)
    }
}

/// Closed set of operations, plus whatever the caller sent that we don't know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Base64Encode,
    Base64Decode,
    Unknown(String),
}

impl From<&str> for Action {
    fn from(action: &str) -> Self {
        match action {
            BASE64_ENCODE => Action::Base64Encode,
            BASE64_DECODE => Action::Base64Decode,
            other => Action::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Base64Encode => f.write_str(BASE64_ENCODE),
            Action::Base64Decode => f.write_str(BASE64_DECODE),
            Action::Unknown(action) => f.write_str(action),
        }
    }
}

/// Ответ sidecar
///
/// Exactly one of `result` / `error` is set. The unset one is left out of
/// the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn success(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: Some(result.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

impl<E: std::error::Error> From<Result<String, E>> for Response {
    fn from(outcome: Result<String, E>) -> Self {
        match outcome {
            Ok(result) => Response::success(result),
            Err(err) => Response::failure(err.to_string()),
        }
    }
}
