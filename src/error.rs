//! Error types for SCIM protocol operations.
//!
//! [`ScimError`] is the closed set of protocol errors that can surface from codec
//! resolution, resource decoding and endpoint logic. Every variant carries the
//! protocol response code and description that end up in the error response, so
//! callers handle failures with exhaustive matching rather than by type inspection.

use crate::response::ResponseCode;
use std::borrow::Cow;
use std::fmt;

/// Which half of a codec a registration refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// Serializes resources and errors into a wire format
    Encoder,
    /// Parses request bodies from a wire format
    Decoder,
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecKind::Encoder => write!(f, "Encoder"),
            CodecKind::Decoder => write!(f, "Decoder"),
        }
    }
}

/// Main error type for SCIM protocol operations.
///
/// Each variant maps to a protocol response code (see [`ScimError::code`]) and a
/// human-readable description (see [`ScimError::description`]).
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// No codec is registered for the requested format
    #[error("Requested format is not supported: {format}")]
    FormatNotSupported { format: String },

    /// A codec is already registered for the format
    #[error("{kind} for the format '{format}' is already registered")]
    RegistrationConflict { kind: CodecKind, format: String },

    /// Request is unparseable, syntactically incorrect or violates the schema
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Request body is not valid JSON
    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Authorization failure
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Resource not found errors
    #[error("Resource not found: {resource_type} with ID {id}")]
    ResourceNotFound { resource_type: String, id: String },

    /// A resource with the same identifier already exists
    #[error("Resource already exists: {resource_type} with ID {id}")]
    DuplicateResource { resource_type: String, id: String },

    /// Internal server errors
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ScimError {
    /// Protocol response code reported to the client for this error.
    pub fn code(&self) -> ResponseCode {
        match self {
            ScimError::FormatNotSupported { .. } => ResponseCode::FORMAT_NOT_SUPPORTED,
            ScimError::RegistrationConflict { .. } => ResponseCode::INTERNAL_SERVER_ERROR,
            ScimError::BadRequest { .. } | ScimError::Json(_) => ResponseCode::BAD_REQUEST,
            ScimError::Unauthorized { .. } => ResponseCode::UNAUTHORIZED,
            ScimError::ResourceNotFound { .. } => ResponseCode::NOT_FOUND,
            ScimError::DuplicateResource { .. } => ResponseCode::CONFLICT,
            ScimError::Internal { .. } => ResponseCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable description reported to the client.
    pub fn description(&self) -> Cow<'_, str> {
        match self {
            ScimError::BadRequest { message }
            | ScimError::Unauthorized { message }
            | ScimError::Internal { message } => Cow::Borrowed(message.as_str()),
            _ => Cow::Owned(self.to_string()),
        }
    }

    /// SCIM `scimType` keyword qualifying a 400/409 error, if one applies.
    pub fn scim_type(&self) -> Option<&'static str> {
        match self {
            ScimError::Json(_) => Some("invalidSyntax"),
            ScimError::BadRequest { .. } => Some("invalidValue"),
            ScimError::DuplicateResource { .. } => Some("uniqueness"),
            _ => None,
        }
    }

    /// Create a format not supported error
    pub fn format_not_supported(format: impl Into<String>) -> Self {
        Self::FormatNotSupported {
            format: format.into(),
        }
    }

    /// Create a registration conflict error
    pub fn registration_conflict(kind: CodecKind, format: impl Into<String>) -> Self {
        Self::RegistrationConflict {
            kind,
            format: format.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a resource not found error
    pub fn resource_not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a duplicate resource error
    pub fn duplicate_resource(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateResource {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Errors that can occur while building a [`ScimProtocol`](crate::ScimProtocol).
///
/// These are configuration mistakes and are expected to abort startup.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A configured codec clashed with an earlier registration
    #[error("Codec registration failed: {0}")]
    Registration(#[source] ScimError),
}

impl BuildError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type BuildResult<T> = Result<T, BuildError>;
