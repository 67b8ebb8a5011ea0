//! Protocol response value types.
//!
//! [`ScimResponse`] is the uniform return shape for both the success and the
//! failure path of a resource endpoint. It is immutable once constructed; the
//! transport layer reads the code, body and headers and writes them out.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Protocol response code.
///
/// The numeric space mirrors HTTP status codes, but the protocol defines its own
/// meaning for each. Displays as its decimal number, e.g. `"404"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseCode(u16);

impl ResponseCode {
    pub const OK: ResponseCode = ResponseCode(200);
    pub const CREATED: ResponseCode = ResponseCode(201);
    pub const NO_CONTENT: ResponseCode = ResponseCode(204);
    pub const BAD_REQUEST: ResponseCode = ResponseCode(400);
    pub const UNAUTHORIZED: ResponseCode = ResponseCode(401);
    pub const FORBIDDEN: ResponseCode = ResponseCode(403);
    pub const NOT_FOUND: ResponseCode = ResponseCode(404);
    pub const FORMAT_NOT_SUPPORTED: ResponseCode = ResponseCode(406);
    pub const CONFLICT: ResponseCode = ResponseCode(409);
    pub const PRECONDITION_FAILED: ResponseCode = ResponseCode(412);
    pub const INTERNAL_SERVER_ERROR: ResponseCode = ResponseCode(500);

    /// Wrap a raw response code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw numeric value.
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Whether the code reports a failure (4xx or 5xx).
    pub const fn is_error(&self) -> bool {
        self.0 >= 400
    }

    /// Canonical description for the code.
    pub fn description(&self) -> &'static str {
        match self.0 {
            200 => "The request was successful.",
            201 => "The resource was created successfully.",
            204 => "The request was successful and there is no content to return.",
            400 => "Request is unparseable, syntactically incorrect, or violates schema.",
            401 => "Authorization failure.",
            403 => "Server does not support requested operation.",
            404 => "Specified resource does not exist.",
            406 => "Requested format is not supported.",
            409 => "The resource conflicts with an existing resource.",
            412 => "Failed to update as resource changed on the server since last retrieved.",
            500 => "An internal error occurred on the server.",
            _ => "Unknown response code.",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ResponseCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Complete protocol response: status code, serialized body and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScimResponse {
    code: ResponseCode,
    body: String,
    headers: HashMap<String, String>,
}

impl ScimResponse {
    /// Create a response from its parts.
    pub fn new(code: ResponseCode, body: impl Into<String>, headers: HashMap<String, String>) -> Self {
        Self {
            code,
            body: body.into(),
            headers,
        }
    }

    /// Protocol response code.
    pub fn code(&self) -> ResponseCode {
        self.code
    }

    /// Serialized body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// All response headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Look up a single header by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Decompose into `(code, body, headers)` for the transport layer.
    pub fn into_parts(self) -> (ResponseCode, String, HashMap<String, String>) {
        (self.code, self.body, self.headers)
    }
}
