// File: crates/chart-viewport/tests/config.rs
// Purpose: Building a computator from JSON config, including defaults and validation failures.

use chart_viewport::{ChartComputator, ComputatorConfig, ComputatorKind, ConfigError, Insets, RectI32, Viewport};

const PREVIEW_JSON: &str = r#"{
    "kind": "preview",
    "max_zoom": 10.0,
    "chart_width": 800,
    "chart_height": 600,
    "padding": { "left": 10, "top": 10, "right": 10, "bottom": 10 },
    "max_viewport": { "left": 0.0, "top": 100.0, "right": 100.0, "bottom": 0.0 }
}"#;

#[test]
fn builds_preview_computator_from_json() {
    let cfg = ComputatorConfig::from_json_str(PREVIEW_JSON).expect("valid config");
    assert_eq!(cfg.kind, ComputatorKind::Preview);
    assert_eq!(cfg.padding, Insets::uniform(10));

    let c = ChartComputator::from_config(&cfg).expect("computator");
    assert_eq!(c.kind(), ComputatorKind::Preview);
    assert_eq!(c.max_content_rect(), RectI32::from_ltrb(10, 10, 790, 590));
    assert_eq!(c.maximum_viewport(), Viewport::new(0.0, 100.0, 100.0, 0.0));
    assert_eq!(c.current_viewport(), c.maximum_viewport());
    assert_eq!(c.minimum_viewport_width(), 10.0);
}

#[test]
fn explicit_current_viewport_is_constrained() {
    let cfg = ComputatorConfig {
        max_viewport: Some(Viewport::new(0.0, 100.0, 100.0, 0.0)),
        current_viewport: Some(Viewport::new(-20.0, 50.0, 30.0, 10.0)),
        ..ComputatorConfig::default()
    };
    let c = ChartComputator::from_config(&cfg).expect("computator");
    assert_eq!(c.kind(), ComputatorKind::Standard);
    assert_eq!(c.current_viewport(), Viewport::new(0.0, 50.0, 30.0, 10.0));
}

#[test]
fn sub_unit_zoom_is_accepted_and_floored() {
    let cfg = ComputatorConfig::from_json_str(r#"{ "max_zoom": 0.25 }"#).expect("valid config");
    let c = ChartComputator::from_config(&cfg).expect("computator");
    assert_eq!(c.max_zoom(), 1.0);
}

#[test]
fn invalid_config_is_rejected_before_building() {
    let cfg = ComputatorConfig { max_zoom: f32::NAN, ..ComputatorConfig::default() };
    let err = ChartComputator::from_config(&cfg).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMaxZoom(_)));
    assert!(err.to_string().contains("max zoom"));
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = ComputatorConfig::from_json_str(PREVIEW_JSON).expect("valid config");
    let text = cfg.to_json_pretty().expect("serialize");
    assert!(text.contains("\"preview\""));
    let back = ComputatorConfig::from_json_str(&text).expect("reparse");
    assert_eq!(back, cfg);
}
