use crate::{ColorTag, CoreError};

use std::str::FromStr;

#[test]
fn test_color_tag_default_is_blue() {
    assert_eq!(ColorTag::default(), ColorTag::Blue);
}

#[test]
fn test_color_tag_has_eight_values() {
    assert_eq!(ColorTag::ALL.len(), 8);
}

#[test]
fn test_color_tag_from_stored_value() {
    assert_eq!(ColorTag::from_str("bg-pink-500").unwrap(), ColorTag::Pink);
    assert_eq!(ColorTag::from_str("bg-gray-500").unwrap(), ColorTag::Gray);
}

#[test]
fn test_color_tag_from_label_is_case_insensitive() {
    assert_eq!(ColorTag::from_str("Indigo").unwrap(), ColorTag::Indigo);
    assert_eq!(ColorTag::from_str(" yellow ").unwrap(), ColorTag::Yellow);
}

#[test]
fn test_color_tag_from_unknown_value_fails() {
    let result = ColorTag::from_str("bg-orange-500");

    assert!(matches!(
        result,
        Err(CoreError::InvalidColorTag { ref value, .. }) if value == "bg-orange-500"
    ));
}

#[test]
fn test_color_tag_round_trips_through_every_value() {
    for tag in ColorTag::ALL {
        assert_eq!(ColorTag::from_str(tag.as_str()).unwrap(), tag);
        assert_eq!(tag.to_string(), tag.as_str());
    }
}

#[test]
fn test_color_tag_serializes_as_stored_value() {
    let json = serde_json::to_string(&ColorTag::Purple).unwrap();
    assert_eq!(json, "\"bg-purple-500\"");

    let parsed: ColorTag = serde_json::from_str("\"bg-green-500\"").unwrap();
    assert_eq!(parsed, ColorTag::Green);
}
