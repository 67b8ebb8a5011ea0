//! Resource type to endpoint URL resolution.
//!
//! Resource handlers use this registry to build absolute URLs (for `Location`
//! headers and `meta.location`) without hardcoding the deployment topology. The
//! mapping is set in bulk, usually once at startup, and read by every request.
//!
//! An unset registry is a legitimate state: lookups return `None` and callers
//! decide how to proceed without a URL.

use arc_swap::ArcSwapOption;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of externally reachable base URLs keyed by resource type name.
///
/// Reads are lock-free. [`register_resource_endpoint_urls`] swaps in a complete
/// new mapping atomically, so readers see either the old or the new mapping and
/// never a partially applied one.
///
/// [`register_resource_endpoint_urls`]: Self::register_resource_endpoint_urls
///
/// # Examples
///
/// ```rust
/// use scim_protocol::EndpointUrlRegistry;
///
/// let registry = EndpointUrlRegistry::new();
/// assert_eq!(registry.get_resource_endpoint_url("User"), None);
///
/// registry.register_resource_endpoint_urls([("User", "https://host/Users")]);
/// assert_eq!(
///     registry.resource_location("User", "2819c223").as_deref(),
///     Some("https://host/Users/2819c223")
/// );
/// ```
#[derive(Debug, Default)]
pub struct EndpointUrlRegistry {
    urls: ArcSwapOption<HashMap<String, String>>,
}

impl EndpointUrlRegistry {
    /// Create an unset registry.
    pub fn new() -> Self {
        Self {
            urls: ArcSwapOption::empty(),
        }
    }

    /// Replace the whole mapping with `urls`.
    ///
    /// Entries from a previous registration are dropped, not merged.
    pub fn register_resource_endpoint_urls<I, K, V>(&self, urls: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let urls: HashMap<String, String> = urls
            .into_iter()
            .map(|(resource_type, url)| (resource_type.into(), url.into()))
            .collect();

        info!("Registered endpoint URLs for {} resource types", urls.len());
        self.urls.store(Some(Arc::new(urls)));
    }

    /// Base URL registered for `resource_type`.
    ///
    /// Returns `None` when nothing has been registered yet or the mapping has no
    /// entry for `resource_type`.
    pub fn get_resource_endpoint_url(&self, resource_type: &str) -> Option<String> {
        let urls = self.urls.load_full()?;
        let url = urls.get(resource_type).cloned();
        if url.is_none() {
            debug!("No endpoint URL registered for resource type '{}'", resource_type);
        }
        url
    }

    /// Absolute URL of a single resource, `{base}/{id}`.
    pub fn resource_location(&self, resource_type: &str, id: &str) -> Option<String> {
        self.get_resource_endpoint_url(resource_type)
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), id))
    }

    /// Whether a non-empty mapping has been registered.
    pub fn is_configured(&self) -> bool {
        self.urls
            .load_full()
            .map(|urls| !urls.is_empty())
            .unwrap_or(false)
    }

    /// Resource types present in the current mapping, sorted.
    pub fn resource_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .urls
            .load_full()
            .map(|urls| urls.keys().cloned().collect())
            .unwrap_or_default();
        types.sort();
        types
    }
}
