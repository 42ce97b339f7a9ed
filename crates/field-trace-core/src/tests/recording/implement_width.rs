use crate::{CoreError, ImplementWidth};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Settings {
    width: ImplementWidth,
}

/// WHAT: Positive finite widths are accepted as-is
/// WHY: The width is used unchanged to buffer corridors
#[test]
fn given_positive_width_when_validating_then_meters_preserved() {
    let width = ImplementWidth::new(2.75).unwrap();

    assert_eq!(width.meters(), 2.75);
    assert_eq!(f64::from(width), 2.75);
}

/// WHAT: Zero, negative and non-finite widths are rejected
/// WHY: Only a positive swath covers ground
#[test]
fn given_non_positive_width_when_validating_then_invalid_configuration() {
    for meters in [0.0, -0.5, f64::NAN, f64::NEG_INFINITY] {
        assert!(matches!(
            ImplementWidth::new(meters),
            Err(CoreError::InvalidConfiguration { .. })
        ));
    }
}

/// WHAT: Deserializing enforces the same validation
/// WHY: Widths read from files must not bypass the check
#[test]
fn given_negative_width_in_toml_when_deserializing_then_error() {
    // Given: A settings document with a negative width
    let document = "width = -1.0";

    // When: Deserializing
    let result: Result<Settings, _> = toml::from_str(document);

    // Then: Rejected; a valid width is accepted
    assert!(result.is_err());
    let valid: Settings = toml::from_str("width = 6.0").unwrap();
    assert_eq!(valid.width.meters(), 6.0);
}
