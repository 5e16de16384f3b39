//! Tolerant two-phase decoding of gateway replies.
//!
//! The backend's reply schema has drifted across deployments: keys appear
//! and disappear, numeric codes arrive as numbers or strings, booleans as
//! `true`/`false` or `0`/`1`. Decoding therefore runs in two phases:
//! first the raw body is parsed into a generic JSON value, then that value
//! is projected onto the operation's typed shape. Unknown keys are
//! dropped, absent optional keys default, and scalar encodings are
//! reconciled by the helpers below rather than by per-call logic.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{IntouchPayError, IntouchPayResult};
use crate::transport::RawResponse;

/// Decodes one exchange into the operation's typed response.
///
/// Non-2xx statuses never reach phase one; they surface as
/// [`IntouchPayError::Gateway`] carrying the decoded body when the
/// gateway sent JSON alongside the failure status. A 2xx body that fails
/// either phase becomes [`IntouchPayError::Decode`] with the raw body
/// preserved for diagnostics.
pub fn decode<T: DeserializeOwned>(raw: &RawResponse) -> IntouchPayResult<T> {
    if !raw.is_success() {
        return Err(IntouchPayError::Gateway {
            status: raw.status,
            reason: raw
                .reason
                .clone()
                .unwrap_or_else(|| "unknown".to_owned()),
            body: serde_json::from_slice::<Value>(&raw.body).ok(),
        });
    }

    let generic: Value =
        serde_json::from_slice(&raw.body).map_err(|e| decode_error(raw, e.to_string()))?;
    serde_json::from_value(generic).map_err(|e| decode_error(raw, e.to_string()))
}

fn decode_error(raw: &RawResponse, detail: String) -> IntouchPayError {
    IntouchPayError::Decode {
        status: raw.status,
        body: String::from_utf8_lossy(&raw.body).into_owned(),
        detail,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Reads `success` however the backend spelled it: a JSON bool, a 0/1
/// number, or a `"true"`/`"0"` string. `null` and an absent key both read
/// as `false`.
pub(crate) fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    match Option::<RawFlag>::deserialize(de)? {
        None => Ok(false),
        Some(RawFlag::Bool(b)) => Ok(b),
        Some(RawFlag::Int(n)) => Ok(n != 0),
        Some(RawFlag::Float(x)) => Ok(x != 0.0),
        Some(RawFlag::Text(s)) => match s.trim() {
            "1" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "false" | "False" | "FALSE" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "unrecognised boolean encoding {other:?}"
            ))),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl RawText {
    fn into_text(self) -> String {
        match self {
            RawText::Text(s) => s,
            RawText::Int(n) => n.to_string(),
            RawText::Float(x) => x.to_string(),
            RawText::Bool(b) => b.to_string(),
        }
    }
}

/// Reads a string-ish field that some backend versions emit as a bare
/// number. Everything normalises to its string rendering.
pub(crate) fn text_opt<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawText>::deserialize(de)?.map(RawText::into_text))
}
