#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn rect(x: f64, y: f64, width: f64, height: f64) -> FieldRect {
    FieldRect { x, y, width, height }
}

// --- Point / Size ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn size_scaled_multiplies_both_dimensions() {
    let s = Size::new(800.0, 600.0).scaled(1.5);
    assert_eq!(s, Size::new(1200.0, 900.0));
}

#[test]
fn size_validity() {
    assert!(Size::new(1.0, 1.0).is_valid());
    assert!(!Size::new(0.0, 1.0).is_valid());
    assert!(!Size::new(1.0, -3.0).is_valid());
    assert!(!Size::new(f64::NAN, 1.0).is_valid());
    assert!(!Size::new(1.0, f64::INFINITY).is_valid());
}

// --- to_percent / to_pixels ---

#[test]
fn to_percent_basic() {
    assert!(approx_eq(to_percent(200.0, 800.0), 25.0));
    assert!(approx_eq(to_percent(600.0, 600.0), 100.0));
}

#[test]
fn to_percent_degenerate_dimension_is_zero() {
    assert_eq!(to_percent(50.0, 0.0), 0.0);
    assert_eq!(to_percent(50.0, -10.0), 0.0);
}

#[test]
fn to_pixels_basic() {
    assert!(approx_eq(to_pixels(25.0, 800.0), 200.0));
    assert!(approx_eq(to_pixels(0.0, 800.0), 0.0));
}

#[test]
fn to_percent_inverts_to_pixels() {
    for pct in [0.0, 1.5, 33.3, 50.0, 99.9, 100.0] {
        for dim in [10.0, 612.0, 1754.5] {
            assert!(approx_eq(to_percent(to_pixels(pct, dim), dim), pct));
        }
    }
}

#[test]
fn point_conversions_roundtrip() {
    let page = Size::new(640.0, 480.0);
    let p = Point::new(12.5, 80.0);
    let back = point_to_percent(percent_to_point(p, page), page);
    assert!(approx_eq(back.x, 12.5));
    assert!(approx_eq(back.y, 80.0));
}

// --- clamps ---

#[test]
fn clamp_position_bounds() {
    assert_eq!(clamp_position(-4.0), 0.0);
    assert_eq!(clamp_position(42.0), 42.0);
    assert_eq!(clamp_position(140.0), 100.0);
}

#[test]
fn clamp_size_has_floor_but_no_ceiling() {
    assert_eq!(clamp_size(2.0), 5.0);
    assert_eq!(clamp_size(-1.0), 5.0);
    assert_eq!(clamp_size(5.0), 5.0);
    assert_eq!(clamp_size(180.0), 180.0);
}

// --- FieldRect / PixelRect ---

#[test]
fn field_rect_to_pixels() {
    let r = rect(50.0, 50.0, 35.0, 12.0).to_pixels(Size::new(800.0, 600.0));
    assert!(approx_eq(r.x, 400.0));
    assert!(approx_eq(r.y, 300.0));
    assert!(approx_eq(r.width, 280.0));
    assert!(approx_eq(r.height, 72.0));
    assert!(approx_eq(r.right(), 680.0));
    assert!(approx_eq(r.bottom(), 372.0));
}

#[test]
fn pixel_rect_contains_is_inclusive() {
    let r = PixelRect { x: 10.0, y: 10.0, width: 20.0, height: 20.0 };
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(30.0, 30.0)));
    assert!(r.contains(Point::new(20.0, 15.0)));
    assert!(!r.contains(Point::new(9.9, 15.0)));
    assert!(!r.contains(Point::new(20.0, 30.1)));
}

// --- drag ---

#[test]
fn drag_offset_is_pointer_minus_corner() {
    let page = Size::new(800.0, 600.0);
    let off = drag_offset(Point::new(450.0, 330.0), &rect(50.0, 50.0, 35.0, 12.0), page);
    assert!(approx_eq(off.x, 6.25));
    assert!(approx_eq(off.y, 5.0));
}

#[test]
fn drag_offset_survives_scale_change() {
    let field = rect(50.0, 50.0, 35.0, 12.0);
    let before = Size::new(800.0, 600.0).scaled(0.9);
    let after = Size::new(800.0, 600.0).scaled(1.1);
    let grab = Point::new(500.0 * 0.9, 340.0 * 0.9);
    let off = drag_offset(grab, &field, before);
    // Same page point under the cursor at the new scale.
    let pos = drag_position(Point::new(500.0 * 1.1, 340.0 * 1.1), off, after);
    assert!(approx_eq(pos.x, 50.0));
    assert!(approx_eq(pos.y, 50.0));
}

#[test]
fn drag_position_without_movement_is_stable() {
    let page = Size::new(800.0, 600.0);
    let field = rect(37.0, 21.0, 20.0, 10.0);
    let grab = Point::new(350.0, 140.0);
    let off = drag_offset(grab, &field, page);
    let pos = drag_position(grab, off, page);
    assert!(approx_eq(pos.x, 37.0));
    assert!(approx_eq(pos.y, 21.0));
}

#[test]
fn drag_position_moves_by_percent_of_delta() {
    let page = Size::new(800.0, 600.0);
    let field = rect(50.0, 50.0, 35.0, 12.0);
    let grab = Point::new(500.0, 330.0);
    let off = drag_offset(grab, &field, page);
    let pos = drag_position(Point::new(grab.x + 80.0, grab.y - 30.0), off, page);
    assert!(approx_eq(pos.x, 60.0));
    assert!(approx_eq(pos.y, 45.0));
}

#[test]
fn drag_position_clamps_to_page() {
    let page = Size::new(800.0, 600.0);
    let off = Point::new(0.0, 0.0);
    let pos = drag_position(Point::new(-300.0, 9000.0), off, page);
    assert_eq!(pos.x, 0.0);
    assert_eq!(pos.y, 100.0);
}

#[test]
fn drag_is_scale_independent() {
    let field = rect(20.0, 30.0, 10.0, 10.0);
    for scale in [0.5, 1.0, 2.7] {
        let page = Size::new(800.0, 600.0).scaled(scale);
        let grab = Point::new(170.0 * scale, 185.0 * scale);
        let off = drag_offset(grab, &field, page);
        let pos = drag_position(Point::new(grab.x + 80.0 * scale, grab.y + 60.0 * scale), off, page);
        assert!(approx_eq(pos.x, 30.0));
        assert!(approx_eq(pos.y, 40.0));
    }
}

// --- resize ---

#[test]
fn resize_measures_from_field_corner() {
    let page = Size::new(800.0, 600.0);
    let field = rect(25.0, 50.0, 10.0, 10.0);
    let size = resize_size(Point::new(400.0, 420.0), &field, page);
    assert!(approx_eq(size.width, 25.0));
    assert!(approx_eq(size.height, 20.0));
}

#[test]
fn resize_applies_floor() {
    let page = Size::new(800.0, 600.0);
    let field = rect(50.0, 50.0, 15.0, 15.0);
    let size = resize_size(Point::new(416.0, 100.0), &field, page);
    assert_eq!(size.width, 5.0);
    assert_eq!(size.height, 5.0);
}

#[test]
fn resize_is_not_capped_at_page_edge() {
    let page = Size::new(800.0, 600.0);
    let field = rect(80.0, 80.0, 10.0, 10.0);
    let size = resize_size(Point::new(1600.0, 1200.0), &field, page);
    assert!(approx_eq(size.width, 120.0));
    assert!(approx_eq(size.height, 120.0));
}
