use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RetargetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RetargetError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        RetargetError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RetargetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert_to_serde_variant() {
    let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = RetargetError::from(bad);
    assert!(matches!(err, RetargetError::Serde(_)));
}
