#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// FieldType
// =============================================================

#[test]
fn field_type_serde_names() {
    let cases = [
        (FieldType::StudentName, "\"studentName\""),
        (FieldType::CourseName, "\"courseName\""),
        (FieldType::CompletionDate, "\"completionDate\""),
        (FieldType::CertificateId, "\"certificateId\""),
        (FieldType::Signature, "\"signature\""),
        (FieldType::QrCode, "\"qrCode\""),
        (FieldType::IssuerName, "\"issuerName\""),
        (FieldType::IssuerTitle, "\"issuerTitle\""),
        (FieldType::Image, "\"image\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
    }
}

#[test]
fn field_type_rejects_unknown_name() {
    assert!(serde_json::from_str::<FieldType>("\"barcode\"").is_err());
}

#[test]
fn graphic_types_default_to_square() {
    for kind in [FieldType::Image, FieldType::QrCode, FieldType::Signature] {
        let (w, h) = kind.default_size();
        assert_eq!(w, h);
        assert!(w < 35.0);
    }
}

#[test]
fn text_types_default_to_wide_strip() {
    for kind in FieldType::ALL.into_iter().filter(|k| k.is_text()) {
        assert_eq!(kind.default_size(), (35.0, 12.0));
    }
}

#[test]
fn labels_are_distinct() {
    let mut labels: Vec<&str> = FieldType::ALL.iter().map(|k| k.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), FieldType::ALL.len());
}

// =============================================================
// TemplateField
// =============================================================

#[test]
fn new_field_has_defaults() {
    let f = TemplateField::new(FieldType::StudentName, "Georgia");
    assert_eq!(f.x, 50.0);
    assert_eq!(f.y, 50.0);
    assert_eq!(f.width, 35.0);
    assert_eq!(f.height, 12.0);
    assert_eq!(f.font_size, 16.0);
    assert_eq!(f.font_family, "Georgia");
    assert_eq!(f.font_weight, "normal");
    assert_eq!(f.font_color, "#000000");
    assert_eq!(f.alignment, Alignment::Center);
    assert!(f.image_url.is_none());
}

#[test]
fn new_fields_get_distinct_ids() {
    let a = TemplateField::new(FieldType::QrCode, DEFAULT_FONT_FAMILY);
    let b = TemplateField::new(FieldType::QrCode, DEFAULT_FONT_FAMILY);
    assert_ne!(a.id, b.id);
}

#[test]
fn serializes_as_flat_camel_case_record() {
    let f = TemplateField::new(FieldType::CertificateId, "Arial");
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v["type"], "certificateId");
    assert_eq!(v["fontSize"], 16.0);
    assert_eq!(v["fontFamily"], "Arial");
    assert_eq!(v["fontWeight"], "normal");
    assert_eq!(v["fontColor"], "#000000");
    assert_eq!(v["alignment"], "center");
    assert!(v.get("imageUrl").is_none());
    assert_eq!(v["id"], f.id.to_string());
}

#[test]
fn deserialize_fills_missing_presentation_defaults() {
    let id = Uuid::new_v4();
    let v = json!({ "id": id, "type": "courseName", "x": 10, "y": 20, "width": 30, "height": 8 });
    let f: TemplateField = serde_json::from_value(v).unwrap();
    assert_eq!(f.id, id);
    assert_eq!(f.field_type, FieldType::CourseName);
    assert_eq!(f.font_size, 16.0);
    assert_eq!(f.font_family, DEFAULT_FONT_FAMILY);
    assert_eq!(f.alignment, Alignment::Center);
}

#[test]
fn image_url_survives_roundtrip() {
    let mut f = TemplateField::new(FieldType::Image, "Arial");
    f.image_url = Some("https://cdn.example.com/logo.png".into());
    let back: TemplateField = serde_json::from_str(&serde_json::to_string(&f).unwrap()).unwrap();
    assert_eq!(back, f);
}

#[test]
fn normalize_clamps_geometry() {
    let mut f = TemplateField::new(FieldType::StudentName, "Arial");
    f.x = -5.0;
    f.y = 130.0;
    f.width = 1.0;
    f.height = -2.0;
    f.font_size = 0.0;
    f.normalize();
    assert_eq!(f.x, 0.0);
    assert_eq!(f.y, 100.0);
    assert_eq!(f.width, 5.0);
    assert_eq!(f.height, 5.0);
    assert_eq!(f.font_size, 1.0);
}

#[test]
fn normalize_replaces_non_finite_values() {
    let mut f = TemplateField::new(FieldType::QrCode, "Arial");
    f.x = f64::NAN;
    f.width = f64::INFINITY;
    f.normalize();
    assert_eq!(f.x, 50.0);
    assert_eq!(f.width, 15.0);
}

// =============================================================
// FieldPatch
// =============================================================

#[test]
fn apply_merges_only_present_members() {
    let mut f = TemplateField::new(FieldType::IssuerName, "Arial");
    f.apply(&FieldPatch { font_color: Some("#336699".into()), ..Default::default() });
    assert_eq!(f.font_color, "#336699");
    assert_eq!(f.x, 50.0);
    assert_eq!(f.font_family, "Arial");
}

#[test]
fn apply_clamps_numeric_input() {
    let mut f = TemplateField::new(FieldType::StudentName, "Arial");
    f.apply(&FieldPatch {
        x: Some(-10.0),
        y: Some(250.0),
        width: Some(-3.0),
        height: Some(4.0),
        font_size: Some(-8.0),
        ..Default::default()
    });
    assert_eq!(f.x, 0.0);
    assert_eq!(f.y, 100.0);
    assert_eq!(f.width, 5.0);
    assert_eq!(f.height, 5.0);
    assert_eq!(f.font_size, 1.0);
}

#[test]
fn apply_skips_non_finite_numbers() {
    let mut f = TemplateField::new(FieldType::StudentName, "Arial");
    f.apply(&FieldPatch { x: Some(f64::NAN), y: Some(20.0), ..Default::default() });
    assert_eq!(f.x, 50.0);
    assert_eq!(f.y, 20.0);
}

#[test]
fn apply_sets_and_clears_image() {
    let mut f = TemplateField::new(FieldType::Image, "Arial");
    f.apply(&FieldPatch::image(Some("https://a.example/x.png".into())));
    assert_eq!(f.image_url.as_deref(), Some("https://a.example/x.png"));
    f.apply(&FieldPatch::default());
    assert!(f.image_url.is_some());
    f.apply(&FieldPatch::image(None));
    assert!(f.image_url.is_none());
}

#[test]
fn patch_constructors() {
    assert_eq!(FieldPatch::position(1.0, 2.0).x, Some(1.0));
    assert_eq!(FieldPatch::position(1.0, 2.0).width, None);
    assert_eq!(FieldPatch::size(6.0, 7.0).height, Some(7.0));
}

// =============================================================
// parse_template
// =============================================================

#[test]
fn parse_bare_array() {
    let json = json!([
        { "id": Uuid::new_v4(), "type": "studentName", "x": 50, "y": 40, "width": 35, "height": 12 },
        { "id": Uuid::new_v4(), "type": "qrCode", "x": 80, "y": 80, "width": 10, "height": 10 },
    ])
    .to_string();
    let fields = parse_template(&json).unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].field_type, FieldType::QrCode);
}

#[test]
fn parse_wrapped_object() {
    let json = json!({ "fields": [
        { "id": Uuid::new_v4(), "type": "signature", "x": 10, "y": 70, "width": 20, "height": 10 },
    ] })
    .to_string();
    let fields = parse_template(&json).unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field_type, FieldType::Signature);
}

#[test]
fn parse_rejects_garbage() {
    let err = parse_template("{ not json").unwrap_err();
    assert_eq!(err.error_code(), "E_TEMPLATE");
}

#[test]
fn template_json_roundtrip() {
    let fields = vec![
        TemplateField::new(FieldType::StudentName, "Arial"),
        TemplateField::new(FieldType::Image, "Arial"),
    ];
    let json = to_template_json(&fields).unwrap();
    assert_eq!(parse_template(&json).unwrap(), fields);
}
