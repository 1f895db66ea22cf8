use crate::GatewayConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

fn valid() -> GatewayConfig {
    GatewayConfig {
        api_key: String::from("anon-key"),
        ..GatewayConfig::default()
    }
}

#[test]
fn given_defaults_with_api_key_when_validated_then_ok() {
    assert_that!(valid().validate(), ok(anything()));
}

#[test]
fn given_blank_api_key_when_validated_then_error() {
    let config = GatewayConfig {
        api_key: String::from("   "),
        ..valid()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("api_key")
    );
}

#[test]
fn given_unparseable_url_when_validated_then_error() {
    let config = GatewayConfig {
        url: String::from("not a url"),
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_non_http_url_when_validated_then_error() {
    let config = GatewayConfig {
        url: String::from("ftp://project.example.co"),
        ..valid()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().to_string(), contains_substring("ftp"));
}

#[test]
fn given_zero_timeout_when_validated_then_error() {
    let config = GatewayConfig {
        timeout_secs: 0,
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_timeout_above_max_when_validated_then_error() {
    let config = GatewayConfig {
        timeout_secs: crate::MAX_TIMEOUT_SECS + 1,
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_empty_table_when_validated_then_error() {
    let config = GatewayConfig {
        profiles_table: String::new(),
        ..valid()
    };

    assert_that!(config.validate(), err(anything()));
}
