//! Template field model: field types, presentation attributes, and sparse edits.
//!
//! A `TemplateField` is the unit of layout and also the flat record handed to
//! the persistence collaborator on save. Positions and sizes are page
//! percentages; presentation attributes are carried on every field so the
//! record shape is uniform, and take their defaults when absent on the wire.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::consts::MIN_FONT_SIZE;
use crate::error::LayoutError;
use crate::geometry::{FieldRect, clamp_position, clamp_size};

/// Unique identifier for a template field. Generated once, never reused.
pub type FieldId = Uuid;

pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_WEIGHT: &str = "normal";
pub const DEFAULT_FONT_COLOR: &str = "#000000";

/// What a field displays. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    StudentName,
    CourseName,
    CompletionDate,
    CertificateId,
    Signature,
    QrCode,
    IssuerName,
    IssuerTitle,
    Image,
}

impl FieldType {
    pub const ALL: [FieldType; 9] = [
        Self::StudentName,
        Self::CourseName,
        Self::CompletionDate,
        Self::CertificateId,
        Self::Signature,
        Self::QrCode,
        Self::IssuerName,
        Self::IssuerTitle,
        Self::Image,
    ];

    /// Whether the text-presentation attributes apply in the strict sense.
    #[must_use]
    pub fn is_text(self) -> bool {
        !matches!(self, Self::QrCode | Self::Signature | Self::Image)
    }

    /// Default `(width, height)` in page percent for a newly added field.
    ///
    /// Graphic fields start as a small square; text fields as a wide strip.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Image | Self::QrCode | Self::Signature => (15.0, 15.0),
            _ => (35.0, 12.0),
        }
    }

    /// Human-readable name for property panels and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::StudentName => "Student Name",
            Self::CourseName => "Course Name",
            Self::CompletionDate => "Completion Date",
            Self::CertificateId => "Certificate ID",
            Self::Signature => "Signature",
            Self::QrCode => "QR Code",
            Self::IssuerName => "Issuer Name",
            Self::IssuerTitle => "Issuer Title",
            Self::Image => "Image",
        }
    }
}

/// Horizontal text alignment within a field's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_owned()
}

fn default_font_weight() -> String {
    DEFAULT_FONT_WEIGHT.to_owned()
}

fn default_font_color() -> String {
    DEFAULT_FONT_COLOR.to_owned()
}

/// A positioned, typed placeholder on the template page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateField {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Left edge, percent of page width.
    pub x: f64,
    /// Top edge, percent of page height.
    pub y: f64,
    /// Percent of page width. Floor of 5, no ceiling.
    pub width: f64,
    /// Percent of page height. Floor of 5, no ceiling.
    pub height: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl TemplateField {
    /// A new field with a fresh id and type-dependent default geometry.
    #[must_use]
    pub fn new(field_type: FieldType, font_family: &str) -> Self {
        let (width, height) = field_type.default_size();
        Self {
            id: Uuid::new_v4(),
            field_type,
            x: 50.0,
            y: 50.0,
            width,
            height,
            font_size: DEFAULT_FONT_SIZE,
            font_family: font_family.to_owned(),
            font_weight: DEFAULT_FONT_WEIGHT.to_owned(),
            font_color: DEFAULT_FONT_COLOR.to_owned(),
            alignment: Alignment::default(),
            image_url: None,
        }
    }

    /// The field's bounding box in page percent.
    #[must_use]
    pub fn rect(&self) -> FieldRect {
        FieldRect { x: self.x, y: self.y, width: self.width, height: self.height }
    }

    /// Bring position and size back inside the model invariants.
    ///
    /// Non-finite numbers fall back to the defaults for a fresh field.
    pub fn normalize(&mut self) {
        let (default_w, default_h) = self.field_type.default_size();
        self.x = clamp_position(finite_or(self.x, 50.0));
        self.y = clamp_position(finite_or(self.y, 50.0));
        self.width = clamp_size(finite_or(self.width, default_w));
        self.height = clamp_size(finite_or(self.height, default_h));
        self.font_size = finite_or(self.font_size, DEFAULT_FONT_SIZE).max(MIN_FONT_SIZE);
    }

    /// Merge a sparse edit into this field, clamping numbers into range.
    ///
    /// Non-finite numbers are skipped with a warning; the previous value stays.
    pub fn apply(&mut self, patch: &FieldPatch) {
        if let Some(x) = accept_number(self.id, "x", patch.x) {
            self.x = clamp_position(x);
        }
        if let Some(y) = accept_number(self.id, "y", patch.y) {
            self.y = clamp_position(y);
        }
        if let Some(w) = accept_number(self.id, "width", patch.width) {
            self.width = clamp_size(w);
        }
        if let Some(h) = accept_number(self.id, "height", patch.height) {
            self.height = clamp_size(h);
        }
        if let Some(size) = accept_number(self.id, "font_size", patch.font_size) {
            self.font_size = size.max(MIN_FONT_SIZE);
        }
        if let Some(ref family) = patch.font_family {
            self.font_family.clone_from(family);
        }
        if let Some(ref weight) = patch.font_weight {
            self.font_weight.clone_from(weight);
        }
        if let Some(ref color) = patch.font_color {
            self.font_color.clone_from(color);
        }
        if let Some(alignment) = patch.alignment {
            self.alignment = alignment;
        }
        if let Some(ref url) = patch.image_url {
            self.image_url.clone_from(url);
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn accept_number(id: FieldId, name: &str, value: Option<f64>) -> Option<f64> {
    let v = value?;
    if v.is_finite() {
        Some(v)
    } else {
        warn!(%id, property = name, "ignoring non-finite value in field edit");
        None
    }
}

/// Sparse update for a template field. Only present members are applied.
///
/// `id` and `field_type` cannot be patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub font_color: Option<String>,
    pub alignment: Option<Alignment>,
    /// `Some(None)` clears the image; `None` leaves it alone.
    pub image_url: Option<Option<String>>,
}

impl FieldPatch {
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    #[must_use]
    pub fn size(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height), ..Default::default() }
    }

    #[must_use]
    pub fn image(url: Option<String>) -> Self {
        Self { image_url: Some(url), ..Default::default() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TemplateDocument {
    Fields(Vec<TemplateField>),
    Wrapped { fields: Vec<TemplateField> },
}

/// Parse a saved template: either a bare field array or `{ "fields": [...] }`.
///
/// # Errors
///
/// Returns `LayoutError::Template` when the JSON does not match either shape.
pub fn parse_template(json: &str) -> Result<Vec<TemplateField>, LayoutError> {
    let doc: TemplateDocument = serde_json::from_str(json).map_err(LayoutError::Template)?;
    Ok(match doc {
        TemplateDocument::Fields(fields) | TemplateDocument::Wrapped { fields } => fields,
    })
}

/// Serialize a field snapshot as the persisted JSON array.
///
/// # Errors
///
/// Returns `LayoutError::Template` if serialization fails.
pub fn to_template_json(fields: &[TemplateField]) -> Result<String, LayoutError> {
    serde_json::to_string_pretty(fields).map_err(LayoutError::Template)
}
