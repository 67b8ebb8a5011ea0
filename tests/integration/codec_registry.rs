//! Codec registry behavior as seen by a server wiring up its formats.

use crate::common::{FixedDecoder, XmlEncoder, init_logging};
use proptest::prelude::*;
use scim_protocol::codec::CodecRegistry;
use scim_protocol::constants::{JSON_FORMAT, XML_FORMAT};
use scim_protocol::{CodecKind, JsonDecoder, JsonEncoder, ScimError};
use serde_json::json;

#[test]
fn test_json_resolves_on_fresh_registry() {
    init_logging();
    let registry = CodecRegistry::new();

    let encoder = registry.get_encoder(JSON_FORMAT).unwrap();
    let decoder = registry.get_decoder(JSON_FORMAT).unwrap();

    assert_eq!(encoder.format(), JSON_FORMAT);
    assert_eq!(decoder.format(), JSON_FORMAT);
}

#[test]
fn test_registered_xml_codec_round_trip_through_registry() {
    init_logging();
    let registry = CodecRegistry::new();
    registry.register_encoder(XML_FORMAT, XmlEncoder::new()).unwrap();
    registry
        .register_decoder(
            XML_FORMAT,
            FixedDecoder::new(XML_FORMAT, json!({"userName": "bjensen"})),
        )
        .unwrap();

    let resource = registry.get_decoder(XML_FORMAT).unwrap().decode("<User/>").unwrap();
    let body = registry.get_encoder(XML_FORMAT).unwrap().encode(&resource).unwrap();

    assert_eq!(body, "<Resource encoder=\"xml\"><userName>bjensen</userName></Resource>");
    assert_eq!(
        registry.encoder_formats(),
        vec![JSON_FORMAT.to_string(), XML_FORMAT.to_string()]
    );
}

#[test]
fn test_second_registration_conflicts_and_first_stays() {
    init_logging();
    let registry = CodecRegistry::new();
    registry
        .register_encoder(XML_FORMAT, XmlEncoder::tagged("first"))
        .unwrap();

    let error = registry
        .register_encoder(XML_FORMAT, XmlEncoder::tagged("second"))
        .unwrap_err();
    assert!(matches!(
        error,
        ScimError::RegistrationConflict {
            kind: CodecKind::Encoder,
            ref format,
        } if format == XML_FORMAT
    ));

    let body = registry
        .get_encoder(XML_FORMAT)
        .unwrap()
        .encode(&json!({"id": "1"}))
        .unwrap();
    assert!(body.contains("encoder=\"first\""));
}

#[test]
fn test_json_double_registration_conflicts() {
    init_logging();
    let registry = CodecRegistry::new();
    registry.register_decoder(JSON_FORMAT, JsonDecoder::new()).unwrap();

    let error = registry
        .register_decoder(JSON_FORMAT, JsonDecoder::new())
        .unwrap_err();
    assert!(matches!(
        error,
        ScimError::RegistrationConflict {
            kind: CodecKind::Decoder,
            ..
        }
    ));
}

#[test]
fn test_default_seed_then_json_registration_conflicts() {
    init_logging();
    let registry = CodecRegistry::new();
    let seeded = registry.get_encoder(JSON_FORMAT).unwrap();

    assert!(registry.register_encoder(JSON_FORMAT, JsonEncoder::pretty()).is_err());

    let resolved = registry.get_encoder(JSON_FORMAT).unwrap();
    assert!(std::sync::Arc::ptr_eq(&seeded, &resolved));
}

#[test]
fn test_registering_other_format_keeps_json_resolvable() {
    init_logging();
    let registry = CodecRegistry::new();
    registry.register_encoder(XML_FORMAT, XmlEncoder::new()).unwrap();

    assert!(registry.get_encoder(JSON_FORMAT).is_ok());
    assert!(registry.get_encoder(XML_FORMAT).is_ok());
}

proptest! {
    #[test]
    fn prop_unregistered_formats_are_not_supported(format in "[a-zA-Z0-9+/._-]{1,24}") {
        prop_assume!(format != JSON_FORMAT);
        let registry = CodecRegistry::new();

        match registry.get_encoder(&format) {
            Err(ScimError::FormatNotSupported { format: missing }) => prop_assert_eq!(missing, format.clone()),
            _ => prop_assert!(false, "encoder lookup for '{}' should fail", format),
        }
        match registry.get_decoder(&format) {
            Err(ScimError::FormatNotSupported { format: missing }) => prop_assert_eq!(missing, format.clone()),
            _ => prop_assert!(false, "decoder lookup for '{}' should fail", format),
        }
    }

    #[test]
    fn prop_any_format_registers_exactly_once(format in "[a-z]{1,12}") {
        let registry = CodecRegistry::new();

        prop_assert!(registry.register_encoder(format.clone(), XmlEncoder::new()).is_ok());
        prop_assert!(registry.register_encoder(format.clone(), XmlEncoder::new()).is_err());
        prop_assert!(registry.get_encoder(&format).is_ok());
    }
}
