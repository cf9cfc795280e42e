use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = GraphConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.image_size, 512);
    assert_eq!(cfg.half_extent(), 4.0);
    assert!((cfg.antialias_size() - 1.5 / 512.0).abs() < 1e-15);
}

#[test]
fn scale_dir_is_normalized_and_perp_is_orthogonal() {
    let cfg = GraphConfig::default();
    let d = cfg.scale_dir_unit();
    let p = cfg.scale_dir_perp();
    assert!((d.hypot() - 1.0).abs() < 1e-12);
    assert!(d.dot(p).abs() < 1e-12);
    assert!((p.hypot() - 1.0).abs() < 1e-12);
}

#[test]
fn validate_rejects_degenerate_values() {
    let cases = [
        GraphConfig {
            image_size: 0,
            ..GraphConfig::default()
        },
        GraphConfig {
            graph_scale: 0.0,
            ..GraphConfig::default()
        },
        GraphConfig {
            graph_scale: -1.0,
            ..GraphConfig::default()
        },
        GraphConfig {
            major_tick: 0.0,
            ..GraphConfig::default()
        },
        GraphConfig {
            minor_tick: f64::NAN,
            ..GraphConfig::default()
        },
        GraphConfig {
            scale_dir: Vec2::ZERO,
            ..GraphConfig::default()
        },
        GraphConfig {
            scale_dir: Vec2::new(f64::INFINITY, 0.0),
            ..GraphConfig::default()
        },
        GraphConfig {
            scale_amount: f64::NAN,
            ..GraphConfig::default()
        },
        GraphConfig {
            image_size: MAX_IMAGE_SIZE + 1,
            ..GraphConfig::default()
        },
        GraphConfig {
            image_size: u32::MAX,
            ..GraphConfig::default()
        },
        GraphConfig {
            minor_tick: 1e-5,
            ..GraphConfig::default()
        },
        GraphConfig {
            graph_scale: 1e-9,
            ..GraphConfig::default()
        },
        GraphConfig {
            point_count: 0,
            ..GraphConfig::default()
        },
    ];
    for cfg in cases {
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, GraphError::Validation(_)), "{cfg:?}");
    }
}

#[test]
fn tick_step_cap_is_inclusive() {
    // half extent 4 over 4096 steps
    let cfg = GraphConfig {
        minor_tick: 4.0 / MAX_TICK_STEPS,
        ..GraphConfig::default()
    };
    cfg.validate().unwrap();
    let cfg = GraphConfig {
        minor_tick: 4.0 / (MAX_TICK_STEPS + 1.0),
        ..GraphConfig::default()
    };
    assert!(cfg.validate().unwrap_err().to_string().contains("minor_tick"));
}

#[test]
fn zero_scale_amount_is_allowed() {
    let cfg = GraphConfig {
        scale_amount: 0.0,
        ..GraphConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn point_count_only_matters_for_circles() {
    let cfg = GraphConfig {
        shape: ShapeKind::Box,
        point_count: 0,
        ..GraphConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn partial_json_overrides_defaults() {
    let cfg = GraphConfig::from_json_str(r#"{ "image_size": 64, "shape": "star" }"#).unwrap();
    assert_eq!(cfg.image_size, 64);
    assert_eq!(cfg.shape, ShapeKind::Star);
    assert_eq!(cfg.scale_amount, 4.0);
    assert_eq!(cfg.graph_scale, 0.125);
}

#[test]
fn json_text_survives_serialization() {
    let cfg = GraphConfig {
        scale_amount: -2.0,
        ..GraphConfig::default()
    };
    let text = cfg.to_json_string().unwrap();
    assert_eq!(GraphConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = GraphConfig::from_json_str(r#"{ "imag_size": 64 }"#).unwrap_err();
    assert!(matches!(err, GraphError::Serde(_)));
}
