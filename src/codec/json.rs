//! Default JSON codec.
//!
//! Error bodies follow the SCIM 2.0 error message shape:
//!
//! ```json
//! {
//!   "schemas": ["urn:ietf:params:scim:api:messages:2.0:Error"],
//!   "status": "404",
//!   "detail": "Resource not found: User with ID 2819c223"
//! }
//! ```

use super::{Decoder, Encoder};
use crate::constants::{ERROR_SCHEMA, JSON_FORMAT};
use crate::error::{ScimError, ScimResult};
use serde_json::{Value, json};

/// JSON encoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    /// Create an encoder producing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create an encoder producing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Encoder for JsonEncoder {
    fn format(&self) -> &str {
        JSON_FORMAT
    }

    fn encode(&self, resource: &Value) -> ScimResult<String> {
        let body = if self.pretty {
            serde_json::to_string_pretty(resource)?
        } else {
            serde_json::to_string(resource)?
        };
        Ok(body)
    }

    fn encode_exception(&self, error: &ScimError) -> String {
        let mut body = json!({
            "schemas": [ERROR_SCHEMA],
            "status": error.code().to_string(),
            "detail": error.description(),
        });
        if let Some(scim_type) = error.scim_type() {
            body["scimType"] = Value::String(scim_type.to_string());
        }

        if self.pretty {
            format!("{:#}", body)
        } else {
            body.to_string()
        }
    }
}

/// JSON decoder backed by `serde_json`.
///
/// Only JSON objects are accepted as resource representations.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    fn format(&self) -> &str {
        JSON_FORMAT
    }

    fn decode(&self, body: &str) -> ScimResult<Value> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(ScimError::bad_request(
                "Resource representation must be a JSON object",
            ));
        }
        Ok(value)
    }
}
