//! Pluggable wire-format codecs.
//!
//! A codec is the pair of capabilities a server needs to speak one format: an
//! [`Encoder`] that serializes resources and protocol errors, and a [`Decoder`]
//! that parses request bodies. Resource representations are format-neutral
//! `serde_json::Value` trees, so endpoints never depend on the format in use.
//!
//! # Module Organization
//!
//! * [`json`] - Default JSON codec seeded by the registry
//! * [`registry`] - Format to codec resolution with one registration per format

pub mod json;
pub mod registry;

pub use json::{JsonDecoder, JsonEncoder};
pub use registry::CodecRegistry;

use crate::error::{ScimError, ScimResult};
use serde_json::Value;

/// Serializes resource representations and protocol errors into one format.
///
/// Implementations are shared across request threads and must not rely on
/// per-request state.
pub trait Encoder: Send + Sync {
    /// Format identifier this encoder produces, e.g. `"json"`.
    fn format(&self) -> &str;

    /// Serialize a resource representation into a response body.
    fn encode(&self, resource: &Value) -> ScimResult<String>;

    /// Serialize a protocol error into a response body.
    ///
    /// This is used on the failure path and therefore cannot fail itself.
    fn encode_exception(&self, error: &ScimError) -> String;
}

/// Parses request bodies of one format into resource representations.
pub trait Decoder: Send + Sync {
    /// Format identifier this decoder accepts, e.g. `"json"`.
    fn format(&self) -> &str;

    /// Parse a request body.
    fn decode(&self, body: &str) -> ScimResult<Value>;
}
