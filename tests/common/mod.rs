//! Common test utilities for protocol layer testing.
//!
//! Provides stand-in codecs for a second wire format, a small in-memory User
//! endpoint that drives the protocol layer the way a real resource handler does,
//! and logging setup.

use scim_protocol::{
    Decoder, Encoder, ResponseCode, ScimError, ScimProtocol, ScimResponse, ScimResult,
    encode_resource,
};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};


/// Install `env_logger` once for the whole test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Minimal XML encoder for flat resources.
///
/// `tag` lets tests tell two instances apart after registration.
#[derive(Debug, Clone)]
pub struct XmlEncoder {
    pub tag: &'static str,
}

impl XmlEncoder {
    pub fn new() -> Self {
        Self { tag: "xml" }
    }

    pub fn tagged(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl Encoder for XmlEncoder {
    fn format(&self) -> &str {
        "xml"
    }

    fn encode(&self, resource: &Value) -> ScimResult<String> {
        let object = resource
            .as_object()
            .ok_or_else(|| ScimError::internal("XML encoder only handles objects"))?;

        let mut body = format!("<Resource encoder=\"{}\">", self.tag);
        for (name, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            body.push_str(&format!("<{name}>{text}</{name}>"));
        }
        body.push_str("</Resource>");
        Ok(body)
    }

    fn encode_exception(&self, error: &ScimError) -> String {
        format!(
            "<Error><status>{}</status><detail>{}</detail></Error>",
            error.code(),
            error.description()
        )
    }
}

/// Decoder that ignores the body and returns a preset resource.
#[derive(Debug, Clone)]
pub struct FixedDecoder {
    pub format: &'static str,
    pub resource: Value,
}

impl FixedDecoder {
    pub fn new(format: &'static str, resource: Value) -> Self {
        Self { format, resource }
    }
}

impl Decoder for FixedDecoder {
    fn format(&self) -> &str {
        self.format
    }

    fn decode(&self, _body: &str) -> ScimResult<Value> {
        Ok(self.resource.clone())
    }
}

/// In-memory User endpoint built on the protocol layer.
///
/// Every operation resolves its codecs first and turns any failure into a
/// response through [`ScimProtocol::error_response`].
pub struct UserEndpoint {
    protocol: Arc<ScimProtocol>,
    users: Mutex<HashMap<String, Value>>,
    next_id: Mutex<u64>,
}

impl UserEndpoint {
    pub fn new(protocol: Arc<ScimProtocol>) -> Self {
        Self {
            protocol,
            users: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn create(&self, body: &str, input_format: &str, output_format: &str) -> ScimResponse {
        self.try_create(body, input_format, output_format)
            .unwrap_or_else(|e| self.protocol.error_response(output_format, &e))
    }

    pub fn get(&self, id: &str, format: &str) -> ScimResponse {
        self.try_get(id, format)
            .unwrap_or_else(|e| self.protocol.error_response(format, &e))
    }

    fn try_create(
        &self,
        body: &str,
        input_format: &str,
        output_format: &str,
    ) -> ScimResult<ScimResponse> {
        let (decoder, encoder) = self.protocol.resolve_codecs(input_format, output_format)?;
        let mut user: Map<String, Value> = match decoder.decode(body)? {
            Value::Object(map) => map,
            _ => return Err(ScimError::bad_request("User must be an object")),
        };

        let user_name = user
            .get("userName")
            .and_then(Value::as_str)
            .ok_or_else(|| ScimError::bad_request("userName is required"))?
            .to_string();

        let mut users = self.users.lock().map_err(|_| ScimError::internal("poisoned"))?;
        if users.values().any(|u| u["userName"] == user_name.as_str()) {
            return Err(ScimError::duplicate_resource("User", user_name));
        }

        let id = {
            let mut next_id = self.next_id.lock().map_err(|_| ScimError::internal("poisoned"))?;
            let id = format!("user-{}", *next_id);
            *next_id += 1;
            id
        };
        user.insert("id".to_string(), json!(id));
        let user = Value::Object(user);
        users.insert(id.clone(), user.clone());

        let location = self.protocol.resource_location("User", &id);
        encode_resource(
            encoder.as_ref(),
            ResponseCode::CREATED,
            &user,
            location.as_deref(),
        )
    }

    fn try_get(&self, id: &str, format: &str) -> ScimResult<ScimResponse> {
        let encoder = self.protocol.codecs().get_encoder(format)?;
        let users = self.users.lock().map_err(|_| ScimError::internal("poisoned"))?;
        let user = users
            .get(id)
            .ok_or_else(|| ScimError::resource_not_found("User", id))?;
        encode_resource(encoder.as_ref(), ResponseCode::OK, user, None)
    }
}
