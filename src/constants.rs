//! Shared protocol constants and the format to media type lookup.

use std::borrow::Cow;

/// Canonical identifier of the JSON wire format.
pub const JSON_FORMAT: &str = "json";
/// Canonical identifier of the XML wire format.
pub const XML_FORMAT: &str = "xml";

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_XML: &str = "application/xml";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const LOCATION_HEADER: &str = "Location";

/// Resource type name of the core User resource.
pub const USER_RESOURCE: &str = "User";
/// Resource type name of the core Group resource.
pub const GROUP_RESOURCE: &str = "Group";

/// Schema URN carried by every error message body.
pub const ERROR_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:Error";

/// Map a format identifier to the value of the `Content-Type` header.
///
/// Known formats map to their registered media type. A format that is already
/// a media type (contains `/`) is returned unchanged, and any other identifier
/// `f` maps to `application/f`.
pub fn identify_content_type(format: &str) -> Cow<'_, str> {
    match format {
        JSON_FORMAT => Cow::Borrowed(APPLICATION_JSON),
        XML_FORMAT => Cow::Borrowed(APPLICATION_XML),
        media_type if media_type.contains('/') => Cow::Borrowed(media_type),
        other => Cow::Owned(format!("application/{}", other)),
    }
}
