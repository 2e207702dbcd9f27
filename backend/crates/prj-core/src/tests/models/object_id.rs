use crate::{CoreError, ObjectId};

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{TimeZone, Utc};

#[test]
fn test_generated_id_is_valid_hex() {
    let id = ObjectId::new();
    let hex = id.to_hex();

    assert_eq!(hex.len(), 24);
    assert!(ObjectId::is_valid(&hex));
    assert_eq!(hex, hex.to_lowercase());
}

#[test]
fn test_generated_ids_are_unique() {
    let ids: HashSet<ObjectId> = (0..1000).map(|_| ObjectId::new()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_id_embeds_creation_timestamp() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let id = ObjectId::with_timestamp(at);

    assert_eq!(id.timestamp(), Some(at));
    assert!(id.to_hex().starts_with("65920080"));
}

#[test]
fn test_is_valid_rejects_wrong_length_and_non_hex() {
    assert!(ObjectId::is_valid("507f1f77bcf86cd799439011"));
    assert!(ObjectId::is_valid("507F1F77BCF86CD799439011"));

    assert!(!ObjectId::is_valid(""));
    assert!(!ObjectId::is_valid("not-an-id"));
    assert!(!ObjectId::is_valid("507f1f77bcf86cd79943901"));
    assert!(!ObjectId::is_valid("507f1f77bcf86cd7994390111"));
    assert!(!ObjectId::is_valid("507f1f77bcf86cd79943901g"));
}

#[test]
fn test_parse_normalizes_to_lowercase() {
    let id = ObjectId::from_str("507F1F77BCF86CD799439011").unwrap();
    assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
}

#[test]
fn test_parse_invalid_returns_invalid_id_with_value() {
    let err = ObjectId::parse_str("abc").unwrap_err();

    match err {
        CoreError::InvalidId { value, .. } => assert_eq!(value, "abc"),
        other => panic!("Expected InvalidId, got {other:?}"),
    }
}

#[test]
fn test_serde_uses_hex_string() {
    let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();

    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"507f1f77bcf86cd799439011\"");

    let back: ObjectId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);

    assert!(serde_json::from_str::<ObjectId>("\"nope\"").is_err());
}

#[test]
fn test_display_matches_hex_encoding_of_parsed_bytes() {
    let id = ObjectId::parse_str("00010203040506070809aAbB").unwrap();

    assert_eq!(id.to_string(), "00010203040506070809aabb");
    assert_eq!(id.to_hex(), id.to_string());
    assert_eq!(
        id.timestamp(),
        chrono::DateTime::from_timestamp(0x0001_0203, 0)
    );
}

#[test]
fn test_parse_rejects_non_ascii_of_valid_byte_length() {
    // 24 bytes, but not 24 hex characters
    let value = "éééééééééé0abc";
    assert_eq!(value.len(), 24);

    assert!(ObjectId::parse_str(value).is_err());
}
