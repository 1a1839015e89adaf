use super::*;

fn approx(a: Edges, b: Edges) -> bool {
    [a.top - b.top, a.right - b.right, a.bottom - b.bottom, a.left - b.left]
        .iter()
        .all(|d| d.abs() < 1e-9)
}

#[test]
fn default_rule_is_ratio_with_pixel_floor() {
    let cfg = SafeAreaConfig::default();
    let insets = cfg.insets_for("story", Size::new(1080.0, 1920.0));
    assert!((insets.left - 43.2).abs() < 1e-9);
    assert!((insets.top - 76.8).abs() < 1e-9);

    // Small targets fall back to the floor.
    let insets = cfg.insets_for("banner", Size::new(300.0, 250.0));
    assert_eq!(insets, Edges::uniform(DEFAULT_INSET_FLOOR));
}

#[test]
fn per_target_overrides_apply_by_id() {
    let cfg = SafeAreaConfig::from_json_str(
        r#"{
            "targets": {
                "reel": {
                    "ratio": {"top": 0.1, "right": 0.04, "bottom": 0.2, "left": 0.04},
                    "floor": {"top": 0, "right": 0, "bottom": 0, "left": 0}
                }
            }
        }"#,
    )
    .unwrap();
    let reel = cfg.insets_for("reel", Size::new(1000.0, 2000.0));
    assert!(approx(
        reel,
        Edges {
            top: 200.0,
            right: 40.0,
            bottom: 400.0,
            left: 40.0,
        }
    ));

    let other = cfg.insets_for("post", Size::new(1000.0, 1000.0));
    assert!(approx(other, Edges::uniform(40.0)));
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = SafeAreaConfig::from_json_str(r#"{"default": {"floor": {"top": 64}}}"#).unwrap();
    assert_eq!(cfg.default.ratio, Edges::uniform(DEFAULT_INSET_RATIO));
    assert_eq!(cfg.default.floor.top, 64.0);
    assert_eq!(cfg.default.floor.left, 0.0);
}

#[test]
fn out_of_range_values_are_config_errors() {
    let err = SafeAreaConfig::from_json_str(r#"{"default": {"ratio": {"left": 0.5}}}"#)
        .unwrap_err();
    assert!(matches!(err, RetargetError::Config(_)));
    assert!(err.to_string().contains("default"));

    let mut cfg = SafeAreaConfig::default();
    cfg.targets.insert(
        "tv".to_string(),
        SafeAreaSpec {
            floor: Edges {
                top: -1.0,
                ..Edges::default()
            },
            ..SafeAreaSpec::default()
        },
    );
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("'tv'"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SafeAreaConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, RetargetError::Serde(_)));
}
