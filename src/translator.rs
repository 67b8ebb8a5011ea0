//! Translation of protocol results into [`ScimResponse`]s.
//!
//! Endpoints resolve an [`Encoder`] for the requested format first and then build
//! every response through these functions, so the body format and the
//! `Content-Type` header always agree.

use crate::codec::Encoder;
use crate::constants::{CONTENT_TYPE_HEADER, LOCATION_HEADER, identify_content_type};
use crate::error::{ScimError, ScimResult};
use crate::response::{ResponseCode, ScimResponse};
use serde_json::Value;
use std::collections::HashMap;

/// Build the error response for `exception` using `encoder`.
///
/// The response carries the error's code, the encoder's rendering of the error as
/// body, and a single `Content-Type` header derived from the encoder's format.
/// Never fails; resolve a valid encoder first (the default JSON encoder when the
/// requested format is the problem).
pub fn encode_exception(encoder: &dyn Encoder, exception: &ScimError) -> ScimResponse {
    let mut headers = HashMap::new();
    headers.insert(
        CONTENT_TYPE_HEADER.to_string(),
        identify_content_type(encoder.format()).into_owned(),
    );

    ScimResponse::new(exception.code(), encoder.encode_exception(exception), headers)
}

/// Build a success response carrying `resource`.
///
/// Adds a `Location` header when `location` is given, as for created resources.
///
/// # Errors
///
/// Propagates the encoder's failure to serialize `resource`.
pub fn encode_resource(
    encoder: &dyn Encoder,
    code: ResponseCode,
    resource: &Value,
    location: Option<&str>,
) -> ScimResult<ScimResponse> {
    let body = encoder.encode(resource)?;

    let mut headers = HashMap::new();
    headers.insert(
        CONTENT_TYPE_HEADER.to_string(),
        identify_content_type(encoder.format()).into_owned(),
    );
    if let Some(location) = location {
        headers.insert(LOCATION_HEADER.to_string(), location.to_string());
    }

    Ok(ScimResponse::new(code, body, headers))
}
