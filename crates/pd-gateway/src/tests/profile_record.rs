use crate::records::profile_record::ProfileRecord;
use crate::tests::USER_ID;

use pd_core::ColorTag;

use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

fn record(value: serde_json::Value) -> ProfileRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn given_capitalized_columns_when_normalized_then_profile_uses_them() {
    let profile = record(json!({
        "id": 7,
        "Name": "GitHub",
        "Link": "https://github.com/ada",
        "color": "bg-green-500",
        "user_id": USER_ID,
        "created_at": "2025-03-01T10:00:00+00:00"
    }))
    .into_profile()
    .unwrap();

    assert_that!(profile.id, eq(7));
    assert_that!(profile.name, eq("GitHub"));
    assert_that!(profile.url, eq("https://github.com/ada"));
    assert_that!(profile.color, eq(ColorTag::Green));
    assert_that!(profile.owner_id, some(eq(Uuid::parse_str(USER_ID).unwrap())));
}

#[test]
fn given_lowercase_columns_when_normalized_then_profile_uses_them() {
    let profile = record(json!({
        "id": 3,
        "name": "Portfolio",
        "url": "https://ada.dev",
        "created_at": "2025-03-01T10:00:00Z"
    }))
    .into_profile()
    .unwrap();

    assert_that!(profile.name, eq("Portfolio"));
    assert_that!(profile.url, eq("https://ada.dev"));
    assert_that!(profile.color, eq(ColorTag::Blue));
    assert_that!(profile.owner_id, none());
}

#[test]
fn given_both_spellings_when_normalized_then_capitalized_columns_win() {
    let profile = record(json!({
        "id": 1,
        "Name": "New",
        "name": "Old",
        "Link": "https://new.example.com",
        "url": "https://old.example.com",
        "created_at": "2025-03-01T10:00:00Z"
    }))
    .into_profile()
    .unwrap();

    assert_that!(profile.name, eq("New"));
    assert_that!(profile.url, eq("https://new.example.com"));
}

#[test]
fn given_unknown_color_when_normalized_then_default_tag_is_used() {
    let profile = record(json!({
        "id": 2,
        "Name": "Blog",
        "Link": "https://blog.example.com",
        "color": "bg-teal-900",
        "created_at": "2025-03-01T10:00:00Z"
    }))
    .into_profile()
    .unwrap();

    assert_that!(profile.color, eq(ColorTag::default()));
}

#[test]
fn given_row_without_link_when_normalized_then_record_error() {
    let result = record(json!({
        "id": 9,
        "Name": "Broken",
        "created_at": "2025-03-01T10:00:00Z"
    }))
    .into_profile();

    let err = result.unwrap_err();
    assert!(!err.is_remote());
    assert!(err.to_string().contains("profile 9"));
}
