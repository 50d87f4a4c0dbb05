use super::*;
use crate::field::FieldType;

const PAGE: Size = Size { width: 800.0, height: 600.0 };

fn field_at(x: f64, y: f64, width: f64, height: f64) -> TemplateField {
    let mut f = TemplateField::new(FieldType::StudentName, "Arial");
    f.x = x;
    f.y = y;
    f.width = width;
    f.height = height;
    f
}

#[test]
fn hit_part_equality() {
    assert_eq!(HitPart::Body, HitPart::Body);
    assert_ne!(HitPart::Body, HitPart::ResizeHandle);
}

#[test]
fn miss_on_empty_page() {
    assert!(hit_test(Point::new(10.0, 10.0), &[], PAGE, 12.0).is_none());
}

#[test]
fn miss_outside_all_fields() {
    // field spans (400..680, 300..372)
    let fields = vec![field_at(50.0, 50.0, 35.0, 12.0)];
    assert!(hit_test(Point::new(100.0, 100.0), &fields, PAGE, 12.0).is_none());
}

#[test]
fn body_hit_inside_field() {
    let fields = vec![field_at(50.0, 50.0, 35.0, 12.0)];
    let hit = hit_test(Point::new(500.0, 330.0), &fields, PAGE, 12.0).unwrap();
    assert_eq!(hit.field_id, fields[0].id);
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn handle_hit_at_bottom_right() {
    let fields = vec![field_at(50.0, 50.0, 35.0, 12.0)];
    let hit = hit_test(Point::new(678.0, 370.0), &fields, PAGE, 12.0).unwrap();
    assert_eq!(hit.part, HitPart::ResizeHandle);
}

#[test]
fn handle_hit_just_outside_corner() {
    let fields = vec![field_at(50.0, 50.0, 35.0, 12.0)];
    let hit = hit_test(Point::new(684.0, 376.0), &fields, PAGE, 12.0).unwrap();
    assert_eq!(hit.part, HitPart::ResizeHandle);
}

#[test]
fn topmost_field_wins() {
    let below = field_at(10.0, 10.0, 50.0, 50.0);
    let above = field_at(20.0, 20.0, 10.0, 10.0);
    let fields = vec![below.clone(), above.clone()];
    let hit = hit_test(Point::new(200.0, 150.0), &fields, PAGE, 12.0).unwrap();
    assert_eq!(hit.field_id, above.id);
    let hit = hit_test(Point::new(100.0, 100.0), &fields, PAGE, 12.0).unwrap();
    assert_eq!(hit.field_id, below.id);
}

#[test]
fn hit_scales_with_page() {
    let fields = vec![field_at(50.0, 50.0, 35.0, 12.0)];
    let page = Size::new(1600.0, 1200.0);
    assert!(hit_test(Point::new(500.0, 330.0), &fields, page, 12.0).is_none());
    assert!(hit_test(Point::new(1000.0, 660.0), &fields, page, 12.0).is_some());
}
