//! Core ScimProtocol structure.
//!
//! Endpoints call [`ScimProtocol::resolve_codecs`] at the start of a request and
//! [`ScimProtocol::error_response`] on any failure path.

use super::builder::EndpointConfig;
use crate::codec::{CodecRegistry, Decoder, Encoder};
use crate::endpoint_urls::EndpointUrlRegistry;
use crate::error::{BuildResult, ScimError, ScimResult};
use crate::response::ScimResponse;
use crate::translator::encode_exception;
use log::debug;
use std::sync::Arc;

/// Registries and configuration shared by the resource endpoints of one server.
///
/// # Examples
///
/// ```rust
/// use scim_protocol::{ScimError, ScimProtocol};
/// use std::sync::Arc;
///
/// let protocol = Arc::new(ScimProtocol::new());
///
/// // A request asked for a format nobody registered
/// let error = match protocol.resolve_codecs("json", "yaml") {
///     Ok(_) => unreachable!(),
///     Err(error) => error,
/// };
///
/// // The error is still reported, in JSON
/// let response = protocol.error_response("yaml", &error);
/// assert_eq!(response.code().as_u16(), 406);
/// assert_eq!(response.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Debug, Default)]
pub struct ScimProtocol {
    pub(super) codecs: CodecRegistry,
    pub(super) endpoint_urls: EndpointUrlRegistry,
    pub(super) config: EndpointConfig,
}

impl ScimProtocol {
    /// Create a protocol context with empty registries and default configuration.
    ///
    /// The endpoint URL registry stays unset until URLs are registered; use
    /// [`with_config`](Self::with_config) or the builder to register them from
    /// configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a protocol context and register the endpoint URLs of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidConfiguration`](crate::error::BuildError) if
    /// the configuration does not validate.
    pub fn with_config(config: EndpointConfig) -> BuildResult<Self> {
        config.validate()?;

        let endpoint_urls = EndpointUrlRegistry::new();
        endpoint_urls.register_resource_endpoint_urls(config.endpoint_urls());

        Ok(Self {
            codecs: CodecRegistry::new(),
            endpoint_urls,
            config,
        })
    }

    /// Codec registry of this server.
    pub fn codecs(&self) -> &CodecRegistry {
        &self.codecs
    }

    /// Endpoint URL registry of this server.
    pub fn endpoint_urls(&self) -> &EndpointUrlRegistry {
        &self.endpoint_urls
    }

    /// Configuration the endpoint URLs were derived from.
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Resolve the decoder for the request body and the encoder for the response.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::FormatNotSupported`] naming whichever format has no
    /// codec, checking the input format first.
    pub fn resolve_codecs(
        &self,
        input_format: &str,
        output_format: &str,
    ) -> ScimResult<(Arc<dyn Decoder>, Arc<dyn Encoder>)> {
        let decoder = self.codecs.get_decoder(input_format)?;
        let encoder = self.codecs.get_encoder(output_format)?;
        Ok((decoder, encoder))
    }

    /// Encoder to report a response in, falling back to the default JSON encoder
    /// when `format` is not supported.
    pub fn response_encoder(&self, format: &str) -> Arc<dyn Encoder> {
        match self.codecs.get_encoder(format) {
            Ok(encoder) => encoder,
            Err(_) => {
                debug!("Reporting in default format instead of '{}'", format);
                self.codecs.default_encoder()
            }
        }
    }

    /// Build the error response for `error` in the requested `format`.
    ///
    /// Never fails: an unsupported `format` is answered with the default JSON
    /// encoder.
    pub fn error_response(&self, format: &str, error: &ScimError) -> ScimResponse {
        let encoder = self.response_encoder(format);
        encode_exception(encoder.as_ref(), error)
    }

    /// Absolute URL of a resource, when an endpoint URL is registered for its type.
    pub fn resource_location(&self, resource_type: &str, id: &str) -> Option<String> {
        self.endpoint_urls.resource_location(resource_type, id)
    }
}
