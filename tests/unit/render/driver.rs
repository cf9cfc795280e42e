use super::*;
use crate::shape::ShapeKind;

fn small_config() -> GraphConfig {
    GraphConfig {
        image_size: 48,
        ..GraphConfig::default()
    }
}

#[test]
fn buffer_is_zeroed_and_sized() {
    let buf = PixelBuffer::new(5, 3).unwrap();
    assert_eq!(buf.data.len(), 5 * 3 * 3);
    assert!(buf.data.iter().all(|&b| b == 0));
    assert_eq!(buf.row_stride(), 15);
}

#[test]
fn oversized_buffer_is_an_error_not_a_panic() {
    match PixelBuffer::new(u32::MAX, u32::MAX) {
        Err(GraphError::Validation(msg)) => assert!(msg.contains("too large")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn huge_image_size_fails_validation_before_allocating() {
    let cfg = GraphConfig {
        image_size: u32::MAX,
        ..GraphConfig::default()
    };
    let err = render_image(&cfg, &RenderThreading::default()).unwrap_err();
    assert!(err.to_string().contains("image_size"));
}

#[test]
fn zero_scale_amount_renders() {
    let cfg = GraphConfig {
        scale_amount: 0.0,
        ..small_config()
    };
    let buf = render_image(&cfg, &RenderThreading::default()).unwrap();
    assert_eq!(buf.pixel(0, 0), [255, 255, 255]);
}

#[test]
fn render_matches_per_pixel_scene_evaluation() {
    let cfg = small_config();
    let buf = render_image(&cfg, &RenderThreading::default()).unwrap();
    let scale = ObliqueScale::from_config(&cfg).unwrap();
    let points = PointSets::build(&cfg).unwrap();
    let scene = Scene::new(&cfg, &scale, &points);
    for (x, y) in [(0, 0), (24, 24), (30, 10), (47, 47)] {
        assert_eq!(
            buf.pixel(x, y),
            scene.pixel_color(pixel_center_uv(x, y, cfg.image_size))
        );
    }
}

#[test]
fn parallel_render_is_byte_identical() {
    let cfg = GraphConfig {
        shape: ShapeKind::Star,
        ..small_config()
    };
    let seq = render_image(&cfg, &RenderThreading::default()).unwrap();
    let par = render_image(
        &cfg,
        &RenderThreading {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn invalid_config_fails_before_rendering() {
    let cfg = GraphConfig {
        graph_scale: 0.0,
        ..small_config()
    };
    let err = render_image(&cfg, &RenderThreading::default()).unwrap_err();
    assert!(matches!(err, GraphError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected() {
    let err = render_image(
        &small_config(),
        &RenderThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}
