use super::*;
use nalgebra::vector;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn origin_is_hit_for_every_positive_radius() {
    for r in 1..=100 {
        assert!(is_hit(0.0, 0.0, r), "r={r}");
        let parts = Region::with_radius(r).classify(vector![0.0, 0.0]);
        assert!(parts.sector && parts.rectangle && parts.triangle);
    }
}

#[test]
fn rectangle_corner_is_closed() {
    for r in 1..=5 {
        let half = f64::from(r) / 2.0;
        assert!(is_hit(half, 0.0, r));
        assert!(is_hit(half, -f64::from(r), r));
        assert!(!is_hit(half + 0.0001, 0.0, r));
        assert!(!is_hit(half, -f64::from(r) - 0.0001, r));
    }
}

#[test]
fn half_radius_is_not_floor_division() {
    // r = 3 → width 1.5; integer division would give 1.
    assert!(is_hit(1.5, -1.0, 3));
    assert!(is_hit(1.25, -0.5, 3));
}

#[test]
fn sector_axis_endpoints() {
    for r in 1..=5 {
        let rf = f64::from(r);
        assert!(is_hit(-rf, 0.0, r));
        assert!(is_hit(0.0, rf, r));
        assert!(!is_hit(-rf - 1e-9, 0.0, r));
        assert!(!is_hit(0.0, rf + 1e-9, r));
    }
}

#[test]
fn sector_excludes_first_quadrant() {
    assert!(!is_hit(0.1, 0.1, 5));
    assert!(!is_hit(1e-12, 1e-12, 5));
}

#[test]
fn triangle_hypotenuse_and_outside() {
    // Hypotenuse from (0,-r) to (-r/2,0); r=2 → x = -(y+2)/2.
    assert!(is_hit(-0.5, -1.0, 2));
    assert!(is_hit(-1.0, 0.0, 2));
    assert!(!is_hit(-0.5001, -1.0, 2));
    // Third quadrant beyond the triangle but inside the sector's radius.
    assert!(!is_hit(-1.0, -1.0, 2));
    let parts = Region::with_radius(2).classify(vector![-0.5, -1.0]);
    assert_eq!(
        parts,
        Regions {
            sector: false,
            rectangle: false,
            triangle: true
        }
    );
}

#[test]
fn fourth_quadrant_corner_outside() {
    assert!(!is_hit(1.0, 1.0, 2));
    assert!(!is_hit(0.5, 0.5, 5));
}

#[test]
fn degenerate_radii_do_not_panic() {
    // r = 0 collapses everything onto the origin.
    assert!(is_hit(0.0, 0.0, 0));
    assert!(!is_hit(0.1, 0.0, 0));
    assert!(!is_hit(0.0, -0.1, 0));
    // Negative radius: rectangle and triangle are empty; sector uses r².
    assert!(is_hit(-1.0, 1.0, -2));
    assert!(!is_hit(0.5, -0.5, -2));
    assert!(!is_hit(-0.1, -0.1, -2));
    // Extremes are still total.
    let _ = is_hit(f64::MAX, f64::MIN, i32::MAX);
    let _ = is_hit(0.0, 0.0, i32::MIN);
}

#[test]
fn nan_coordinates_never_hit() {
    assert!(!is_hit(f64::NAN, 0.0, 3));
    assert!(!is_hit(0.0, f64::NAN, 3));
}

#[test]
fn classify_agrees_with_contains_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let r = rng.gen_range(1..=5);
        let p = vector![rng.gen_range(-5.0..3.0), rng.gen_range(-3.0..5.0)];
        let region = Region::with_radius(r);
        assert_eq!(region.classify(p).any(), region.contains(p));
        assert_eq!(region.contains(p), is_hit(p.x, p.y, r));
    }
}
