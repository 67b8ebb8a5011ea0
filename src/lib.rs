//! Pluggable serialization and endpoint registration for SCIM servers.
//!
//! Lets a SCIM provisioning server speak several wire formats without each
//! resource endpoint knowing which one is in use, and turns protocol errors
//! raised anywhere in request processing into well-formed responses.
//!
//! # Core Components
//!
//! - [`CodecRegistry`] - Resolves a format identifier to its encoder and decoder
//! - [`EndpointUrlRegistry`] - Resolves a resource type to its endpoint URL
//! - [`encode_exception`] - Turns a [`ScimError`] into a [`ScimResponse`]
//! - [`ScimProtocol`] - Owns both registries for one server
//!
//! # Quick Start
//!
//! ```rust
//! use scim_protocol::{ScimError, ScimProtocolBuilder, ResponseCode, encode_resource};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let protocol = Arc::new(
//!     ScimProtocolBuilder::new()
//!         .with_base_url("https://scim.example.com")
//!         .build()?,
//! );
//!
//! // Inside a request handler
//! let (decoder, encoder) = protocol.resolve_codecs("json", "json")?;
//! let user = decoder.decode(r#"{"id": "2819c223", "userName": "bjensen"}"#)?;
//! let location = protocol.resource_location("User", "2819c223");
//! let response = encode_resource(encoder.as_ref(), ResponseCode::CREATED, &user, location.as_deref())?;
//! assert_eq!(response.header("Location"), Some("https://scim.example.com/v2/Users/2819c223"));
//!
//! // On failure
//! let response = protocol.error_response("json", &ScimError::resource_not_found("User", "42"));
//! assert_eq!(response.code(), ResponseCode::NOT_FOUND);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod constants;
pub mod endpoint_urls;
pub mod error;
pub mod protocol;
pub mod response;
pub mod translator;

// Re-export commonly used types for convenience
pub use codec::{CodecRegistry, Decoder, Encoder, JsonDecoder, JsonEncoder};
pub use endpoint_urls::EndpointUrlRegistry;
pub use error::{BuildError, BuildResult, CodecKind, ScimError, ScimResult};
pub use protocol::{EndpointConfig, ScimProtocol, ScimProtocolBuilder};
pub use response::{ResponseCode, ScimResponse};
pub use translator::{encode_exception, encode_resource};
