//! Format to codec resolution.
//!
//! The registry keeps one encoder map and one decoder map keyed by format
//! identifier. Lookups never conflict and seed the default JSON codec on demand,
//! while registration is strict: each format can be registered at most once and a
//! second attempt is reported rather than silently overwriting the first.
//!
//! # Concurrency
//!
//! Both maps are [`DashMap`]s, so lookups from many request threads only take
//! shard read locks. Registration goes through the entry API, which makes the
//! presence check and the insert a single atomic step. The default seed is an
//! insert-if-absent on the JSON key with the same guarantee: concurrent first
//! lookups all observe the same seeded instance.

use super::json::{JsonDecoder, JsonEncoder};
use super::{Decoder, Encoder};
use crate::constants::JSON_FORMAT;
use crate::error::{CodecKind, ScimError, ScimResult};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

/// Registry of encoders and decoders keyed by format identifier.
///
/// # Examples
///
/// ```rust
/// use scim_protocol::codec::{CodecRegistry, JsonEncoder};
///
/// let registry = CodecRegistry::new();
///
/// // JSON is always available, even without registration
/// let encoder = registry.get_encoder("json").unwrap();
/// assert_eq!(encoder.format(), "json");
///
/// // Unknown formats are reported
/// assert!(registry.get_encoder("xml").is_err());
///
/// // The seeded JSON encoder occupies its slot
/// assert!(registry.register_encoder("json", JsonEncoder::pretty()).is_err());
/// ```
pub struct CodecRegistry {
    encoders: DashMap<String, Arc<dyn Encoder>>,
    decoders: DashMap<String, Arc<dyn Decoder>>,
}

impl CodecRegistry {
    /// Create an empty registry.
    ///
    /// The default JSON codec is seeded on the first lookup, so a JSON encoder or
    /// decoder registered before any lookup replaces the default.
    pub fn new() -> Self {
        Self {
            encoders: DashMap::new(),
            decoders: DashMap::new(),
        }
    }

    /// Resolve the encoder for `format`.
    ///
    /// Seeds the default JSON encoder under [`JSON_FORMAT`] if that slot is still
    /// empty, then looks up `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::FormatNotSupported`] if no encoder is registered for
    /// `format`.
    pub fn get_encoder(&self, format: &str) -> ScimResult<Arc<dyn Encoder>> {
        let default = self.default_encoder();
        if format == JSON_FORMAT {
            return Ok(default);
        }

        match self.encoders.get(format) {
            Some(entry) => Ok(Arc::clone(entry.value())),
            None => {
                debug!("No encoder registered for format '{}'", format);
                Err(ScimError::format_not_supported(format))
            }
        }
    }

    /// Resolve the decoder for `format`.
    ///
    /// Seeds the default JSON decoder under [`JSON_FORMAT`] if that slot is still
    /// empty, then looks up `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::FormatNotSupported`] if no decoder is registered for
    /// `format`.
    pub fn get_decoder(&self, format: &str) -> ScimResult<Arc<dyn Decoder>> {
        let default = self.default_decoder();
        if format == JSON_FORMAT {
            return Ok(default);
        }

        match self.decoders.get(format) {
            Some(entry) => Ok(Arc::clone(entry.value())),
            None => {
                debug!("No decoder registered for format '{}'", format);
                Err(ScimError::format_not_supported(format))
            }
        }
    }

    /// Register `encoder` for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::RegistrationConflict`] if an encoder is already
    /// registered for `format`. The existing encoder stays in effect.
    pub fn register_encoder<E>(&self, format: impl Into<String>, encoder: E) -> ScimResult<()>
    where
        E: Encoder + 'static,
    {
        let format = format.into();
        if encoder.format() != format {
            warn!(
                "Encoder reporting format '{}' registered under '{}'",
                encoder.format(),
                format
            );
        }

        match self.encoders.entry(format) {
            Entry::Occupied(existing) => {
                warn!("Encoder for format '{}' is already registered", existing.key());
                Err(ScimError::registration_conflict(
                    CodecKind::Encoder,
                    existing.key().as_str(),
                ))
            }
            Entry::Vacant(slot) => {
                info!("Registered encoder for format '{}'", slot.key());
                slot.insert(Arc::new(encoder));
                Ok(())
            }
        }
    }

    /// Register `decoder` for `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::RegistrationConflict`] if a decoder is already
    /// registered for `format`. The existing decoder stays in effect.
    pub fn register_decoder<D>(&self, format: impl Into<String>, decoder: D) -> ScimResult<()>
    where
        D: Decoder + 'static,
    {
        let format = format.into();
        if decoder.format() != format {
            warn!(
                "Decoder reporting format '{}' registered under '{}'",
                decoder.format(),
                format
            );
        }

        match self.decoders.entry(format) {
            Entry::Occupied(existing) => {
                warn!("Decoder for format '{}' is already registered", existing.key());
                Err(ScimError::registration_conflict(
                    CodecKind::Decoder,
                    existing.key().as_str(),
                ))
            }
            Entry::Vacant(slot) => {
                info!("Registered decoder for format '{}'", slot.key());
                slot.insert(Arc::new(decoder));
                Ok(())
            }
        }
    }

    /// Encoder registered under [`JSON_FORMAT`], seeding [`JsonEncoder`] if
    /// nothing is registered there yet.
    pub fn default_encoder(&self) -> Arc<dyn Encoder> {
        if let Some(entry) = self.encoders.get(JSON_FORMAT) {
            return Arc::clone(entry.value());
        }

        let entry = self
            .encoders
            .entry(JSON_FORMAT.to_string())
            .or_insert_with(|| {
                debug!("Seeding default JSON encoder");
                Arc::new(JsonEncoder::new())
            });
        Arc::clone(entry.value())
    }

    /// Decoder registered under [`JSON_FORMAT`], seeding [`JsonDecoder`] if
    /// nothing is registered there yet.
    pub fn default_decoder(&self) -> Arc<dyn Decoder> {
        if let Some(entry) = self.decoders.get(JSON_FORMAT) {
            return Arc::clone(entry.value());
        }

        let entry = self
            .decoders
            .entry(JSON_FORMAT.to_string())
            .or_insert_with(|| {
                debug!("Seeding default JSON decoder");
                Arc::new(JsonDecoder::new())
            });
        Arc::clone(entry.value())
    }

    /// Formats with a registered encoder, sorted.
    pub fn encoder_formats(&self) -> Vec<String> {
        let mut formats: Vec<String> = self.encoders.iter().map(|e| e.key().clone()).collect();
        formats.sort();
        formats
    }

    /// Formats with a registered decoder, sorted.
    pub fn decoder_formats(&self) -> Vec<String> {
        let mut formats: Vec<String> = self.decoders.iter().map(|e| e.key().clone()).collect();
        formats.sort();
        formats
    }

    /// Whether both an encoder and a decoder are available for `format`.
    pub fn supports_format(&self, format: &str) -> bool {
        self.get_encoder(format).is_ok() && self.get_decoder(format).is_ok()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("encoders", &self.encoder_formats())
            .field("decoders", &self.decoder_formats())
            .finish()
    }
}
