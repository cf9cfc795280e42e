use super::*;

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < EPS
}

fn default_scale() -> ObliqueScale {
    ObliqueScale::from_config(&GraphConfig::default()).unwrap()
}

#[test]
fn scale_axis_is_scaled() {
    let t = default_scale();
    let dir = t.dir().to_point();
    assert!(close(t.apply(dir), (t.dir() * 4.0).to_point()));
}

#[test]
fn perpendicular_axis_is_invariant() {
    let t = default_scale();
    let perp = t.perp().to_point();
    assert!(close(t.apply(perp), perp));
}

#[test]
fn apply_is_linear() {
    let t = default_scale();
    let p = Point::new(0.3, -1.7);
    let q = Point::new(-2.0, 0.45);
    for (a, b) in [(1.0, 1.0), (2.5, -0.5), (0.0, 3.0)] {
        let combined = (p.to_vec2() * a + q.to_vec2() * b).to_point();
        let lhs = t.apply(combined);
        let rhs = (t.apply(p).to_vec2() * a + t.apply(q).to_vec2() * b).to_point();
        assert!(close(lhs, rhs));
    }
    assert_eq!(t.apply(Point::ORIGIN), Point::ORIGIN);
}

#[test]
fn direction_is_normalized_on_construction() {
    let t = ObliqueScale::new(Vec2::new(0.0, 10.0), 2.0).unwrap();
    assert!(close(t.dir().to_point(), Point::new(0.0, 1.0)));
    assert!(close(t.perp().to_point(), Point::new(-1.0, 0.0)));
    assert!(close(t.apply(Point::new(3.0, 5.0)), Point::new(3.0, 10.0)));
}

#[test]
fn zero_direction_is_rejected() {
    assert!(ObliqueScale::new(Vec2::ZERO, 4.0).is_err());
    assert!(ObliqueScale::new(Vec2::new(f64::NAN, 1.0), 4.0).is_err());
}

#[test]
fn affine_matches_apply() {
    let t = default_scale();
    let m = t.to_affine();
    for p in [
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-0.7, 2.2),
    ] {
        assert!(close(m * p, t.apply(p)));
    }
}
