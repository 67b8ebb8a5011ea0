//! Builder pattern for configuring ScimProtocol instances.
//!
//! This module provides the endpoint configuration used to derive resource
//! endpoint URLs, and a fluent builder that collects configuration, URL
//! overrides and codecs before creating the final [`ScimProtocol`].

use super::core::ScimProtocol;
use crate::codec::{CodecRegistry, Decoder, Encoder};
use crate::constants::{GROUP_RESOURCE, USER_RESOURCE};
use crate::endpoint_urls::EndpointUrlRegistry;
use crate::error::{BuildError, BuildResult, ScimError};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for resource endpoint URLs.
///
/// Endpoint URLs are derived as `{base_url}/{scim_version}/{path}` for every
/// entry of `resource_paths`. Can be loaded from JSON:
///
/// ```rust
/// use scim_protocol::EndpointConfig;
///
/// let config: EndpointConfig = serde_json::from_str(
///     r#"{"baseUrl": "https://scim.example.com", "resourcePaths": {"User": "Users"}}"#,
/// ).unwrap();
/// assert_eq!(config.scim_version, "v2");
/// assert_eq!(config.endpoint_urls()["User"], "https://scim.example.com/v2/Users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointConfig {
    /// Base URL of the server without any SCIM path.
    /// Examples: "https://scim.example.com", "http://localhost:8080"
    pub base_url: String,

    /// SCIM protocol version segment. Defaults to "v2".
    pub scim_version: String,

    /// Resource type name to endpoint path, e.g. "User" -> "Users".
    pub resource_paths: HashMap<String, String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        let mut resource_paths = HashMap::new();
        resource_paths.insert(USER_RESOURCE.to_string(), "Users".to_string());
        resource_paths.insert(GROUP_RESOURCE.to_string(), "Groups".to_string());

        Self {
            base_url: "https://localhost".to_string(),
            scim_version: "v2".to_string(),
            resource_paths,
        }
    }
}

impl EndpointConfig {
    /// Endpoint URL of every configured resource type.
    pub fn endpoint_urls(&self) -> HashMap<String, String> {
        let base_url = self.base_url.trim_end_matches('/');
        self.resource_paths
            .iter()
            .map(|(resource_type, path)| {
                (
                    resource_type.clone(),
                    format!(
                        "{}/{}/{}",
                        base_url,
                        self.scim_version,
                        path.trim_matches('/')
                    ),
                )
            })
            .collect()
    }

    /// Validate the configuration.
    ///
    /// Ensures the base URL and other configuration parameters are valid.
    pub fn validate(&self) -> BuildResult<()> {
        if self.base_url.is_empty() {
            return Err(BuildError::invalid_configuration("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(BuildError::invalid_configuration(
                "Base URL must start with http:// or https://",
            ));
        }

        if self.scim_version.is_empty() {
            return Err(BuildError::invalid_configuration(
                "SCIM version cannot be empty",
            ));
        }

        if let Some((resource_type, _)) = self
            .resource_paths
            .iter()
            .find(|(_, path)| path.trim_matches('/').is_empty())
        {
            return Err(BuildError::invalid_configuration(format!(
                "Endpoint path for resource type '{}' cannot be empty",
                resource_type
            )));
        }

        Ok(())
    }
}

/// Builder for configuring and creating [`ScimProtocol`] instances.
///
/// Codecs are registered as they are added; the first conflicting registration
/// is reported by [`build`](Self::build).
///
/// # Examples
///
/// ```rust
/// use scim_protocol::ScimProtocolBuilder;
/// use scim_protocol::codec::JsonEncoder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let protocol = ScimProtocolBuilder::new()
///     .with_base_url("https://scim.company.com")
///     .with_resource_path("Role", "Roles")
///     .with_encoder("json", JsonEncoder::pretty())
///     .build()?;
///
/// assert_eq!(
///     protocol.resource_location("Role", "admin").as_deref(),
///     Some("https://scim.company.com/v2/Roles/admin")
/// );
/// # Ok(())
/// # }
/// ```
pub struct ScimProtocolBuilder {
    config: EndpointConfig,
    endpoint_overrides: HashMap<String, String>,
    codecs: CodecRegistry,
    registration_error: Option<ScimError>,
}

impl ScimProtocolBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::from_config(EndpointConfig::default())
    }

    /// Create a builder starting from an existing configuration.
    pub fn from_config(config: EndpointConfig) -> Self {
        Self {
            config,
            endpoint_overrides: HashMap::new(),
            codecs: CodecRegistry::new(),
            registration_error: None,
        }
    }

    /// Set the base URL of the server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the SCIM protocol version segment. Defaults to "v2".
    pub fn with_scim_version(mut self, version: impl Into<String>) -> Self {
        self.config.scim_version = version.into();
        self
    }

    /// Expose `resource_type` under `path` below the versioned base URL.
    pub fn with_resource_path(
        mut self,
        resource_type: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.config
            .resource_paths
            .insert(resource_type.into(), path.into());
        self
    }

    /// Use an absolute endpoint URL for `resource_type`, bypassing the
    /// configured base URL.
    pub fn with_endpoint_url(
        mut self,
        resource_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.endpoint_overrides
            .insert(resource_type.into(), url.into());
        self
    }

    /// Register an encoder for `format`.
    pub fn with_encoder<E>(mut self, format: impl Into<String>, encoder: E) -> Self
    where
        E: Encoder + 'static,
    {
        if let Err(e) = self.codecs.register_encoder(format, encoder) {
            self.registration_error.get_or_insert(e);
        }
        self
    }

    /// Register a decoder for `format`.
    pub fn with_decoder<D>(mut self, format: impl Into<String>, decoder: D) -> Self
    where
        D: Decoder + 'static,
    {
        if let Err(e) = self.codecs.register_decoder(format, decoder) {
            self.registration_error.get_or_insert(e);
        }
        self
    }

    /// Build the configured protocol context.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidConfiguration`] if the configuration does not
    /// validate, or [`BuildError::Registration`] if a codec was added twice for
    /// the same format.
    pub fn build(self) -> BuildResult<ScimProtocol> {
        if let Some(error) = self.registration_error {
            return Err(BuildError::Registration(error));
        }
        self.config.validate()?;

        let mut urls = self.config.endpoint_urls();
        urls.extend(self.endpoint_overrides);

        let endpoint_urls = EndpointUrlRegistry::new();
        endpoint_urls.register_resource_endpoint_urls(urls);

        info!(
            "Built SCIM protocol context for {} with encoders {:?}",
            self.config.base_url,
            self.codecs.encoder_formats()
        );

        Ok(ScimProtocol {
            codecs: self.codecs,
            endpoint_urls,
            config: self.config,
        })
    }
}

impl Default for ScimProtocolBuilder {
    fn default() -> Self {
        Self::new()
    }
}
