//! Preview: lays template fields out with sample data for a certificate mock-up.
//!
//! The preview reads the same percentage records as the editor and projects
//! them through [`FieldRect::to_pixels`](crate::geometry::FieldRect::to_pixels),
//! so a field sits in the same relative place at any preview scale. Output is
//! a plain list of positioned elements plus an SVG serialization of it.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use crate::consts::SIGNATURE_FONT_SCALE;
use crate::error::LayoutError;
use crate::field::{Alignment, FieldId, FieldType, TemplateField};
use crate::geometry::{PixelRect, Size};

/// Gap between the signature text box bottom and its baseline rule, in preview pixels.
const SIGNATURE_RULE_INSET_PX: f64 = 2.0;
/// Stroke used for placeholder outlines.
const PLACEHOLDER_STROKE: &str = "#9ca3af";

// =============================================================
// Data
// =============================================================

/// Values substituted into text-bearing fields.
///
/// Missing members in a JSON data file fall back to [`PreviewData::sample`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewData {
    pub student_name: String,
    pub course_name: String,
    pub completion_date: String,
    pub certificate_id: String,
    pub issuer_name: String,
    pub issuer_title: String,
    pub signature_name: String,
}

impl Default for PreviewData {
    fn default() -> Self {
        Self::sample()
    }
}

impl PreviewData {
    /// Representative values, dated today.
    #[must_use]
    pub fn sample() -> Self {
        Self::sample_on(OffsetDateTime::now_utc())
    }

    /// Representative values with the completion date taken from `date`.
    #[must_use]
    pub fn sample_on(date: OffsetDateTime) -> Self {
        Self {
            student_name: "Jane Doe".into(),
            course_name: "Introduction to Data Analysis".into(),
            completion_date: long_date(date),
            certificate_id: "CERT-2024-000123".into(),
            issuer_name: "Dr. Alex Morgan".into(),
            issuer_title: "Program Director".into(),
            signature_name: "Alex Morgan".into(),
        }
    }

    /// Sample text for a text-bearing field type.
    #[must_use]
    pub fn text_for(&self, field_type: FieldType) -> Option<&str> {
        match field_type {
            FieldType::StudentName => Some(self.student_name.as_str()),
            FieldType::CourseName => Some(self.course_name.as_str()),
            FieldType::CompletionDate => Some(self.completion_date.as_str()),
            FieldType::CertificateId => Some(self.certificate_id.as_str()),
            FieldType::IssuerName => Some(self.issuer_name.as_str()),
            FieldType::IssuerTitle => Some(self.issuer_title.as_str()),
            FieldType::Signature => Some(self.signature_name.as_str()),
            FieldType::QrCode | FieldType::Image => None,
        }
    }
}

/// `October 16, 2026`.
#[must_use]
pub fn long_date(date: OffsetDateTime) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

// =============================================================
// Layout
// =============================================================

/// A laid-out certificate at a given preview scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<PreviewElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewElement {
    pub field_id: FieldId,
    pub rect: PixelRect,
    pub content: PreviewContent,
}

/// Text styling resolved to preview pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub font_family: String,
    pub font_weight: String,
    pub color: String,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewContent {
    Text { text: String, style: TextStyle },
    /// Sample name at an enlarged size with a baseline rule under it.
    Signature { text: String, style: TextStyle },
    QrPlaceholder,
    Image { url: String },
    ImagePlaceholder,
}

/// Lay out `fields` on a page of intrinsic size `page`, drawn at `scale`.
///
/// # Errors
///
/// Returns `LayoutError::InvalidPageSize` if the scaled page has no area.
pub fn render_preview(
    fields: &[TemplateField],
    page: Size,
    scale: f64,
    data: &PreviewData,
) -> Result<Preview, LayoutError> {
    let page_px = page.scaled(scale);
    if !page_px.is_valid() {
        return Err(LayoutError::InvalidPageSize { width: page_px.width, height: page_px.height });
    }

    let elements: Vec<PreviewElement> = fields
        .iter()
        .map(|field| PreviewElement {
            field_id: field.id,
            rect: field.rect().to_pixels(page_px),
            content: content_for(field, scale, data),
        })
        .collect();

    debug!(fields = elements.len(), scale, width = page_px.width, height = page_px.height, "preview laid out");
    Ok(Preview { width: page_px.width, height: page_px.height, elements })
}

fn content_for(field: &TemplateField, scale: f64, data: &PreviewData) -> PreviewContent {
    let field_type = field.field_type;
    if field_type.is_text() {
        return PreviewContent::Text {
            text: data.text_for(field_type).map(str::to_owned).unwrap_or_default(),
            style: text_style(field, field.font_size * scale),
        };
    }
    match field_type {
        FieldType::Signature => PreviewContent::Signature {
            text: data.signature_name.clone(),
            style: text_style(field, field.font_size * SIGNATURE_FONT_SCALE * scale),
        },
        FieldType::Image => match field.image_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => PreviewContent::Image { url: url.to_owned() },
            _ => PreviewContent::ImagePlaceholder,
        },
        _ => PreviewContent::QrPlaceholder,
    }
}

fn text_style(field: &TemplateField, font_size_px: f64) -> TextStyle {
    TextStyle {
        font_size_px,
        font_family: field.font_family.clone(),
        font_weight: field.font_weight.clone(),
        color: field.font_color.clone(),
        alignment: field.alignment,
    }
}

// =============================================================
// SVG
// =============================================================

impl Preview {
    /// Serialize to a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = num(self.width),
            h = num(self.height),
        );
        out.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
            num(self.width),
            num(self.height)
        ));
        for element in &self.elements {
            element.write_svg(&mut out);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl PreviewElement {
    fn write_svg(&self, out: &mut String) {
        let r = &self.rect;
        match &self.content {
            PreviewContent::Text { text, style } => write_text(out, r, text, style),
            PreviewContent::Signature { text, style } => {
                write_text(out, r, text, style);
                let y = r.bottom() - SIGNATURE_RULE_INSET_PX;
                out.push_str(&format!(
                    "  <line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                    num(r.x),
                    num(r.right()),
                    escape(&style.color),
                    y = num(y),
                ));
            }
            PreviewContent::QrPlaceholder => write_qr_placeholder(out, r),
            PreviewContent::Image { url } => {
                out.push_str(&format!(
                    "  <image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\" preserveAspectRatio=\"xMidYMid meet\"/>\n",
                    num(r.x),
                    num(r.y),
                    num(r.width),
                    num(r.height),
                    escape(url)
                ));
            }
            PreviewContent::ImagePlaceholder => {
                out.push_str(&format!(
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{PLACEHOLDER_STROKE}\" stroke-dasharray=\"4 2\"/>\n",
                    num(r.x),
                    num(r.y),
                    num(r.width),
                    num(r.height)
                ));
                // Mountain-and-sun glyph.
                let cx = r.x + r.width * 0.5;
                let cy = r.y + r.height * 0.5;
                let s = r.width.min(r.height) * 0.25;
                out.push_str(&format!(
                    "  <polyline points=\"{},{} {},{} {},{} {},{} {},{}\" fill=\"none\" stroke=\"{PLACEHOLDER_STROKE}\"/>\n",
                    num(cx - s),
                    num(cy + s * 0.5),
                    num(cx - s * 0.3),
                    num(cy - s * 0.3),
                    num(cx + s * 0.1),
                    num(cy + s * 0.2),
                    num(cx + s * 0.5),
                    num(cy - s * 0.1),
                    num(cx + s),
                    num(cy + s * 0.5)
                ));
                out.push_str(&format!(
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{PLACEHOLDER_STROKE}\"/>\n",
                    num(cx + s * 0.5),
                    num(cy - s * 0.6),
                    num(s * 0.2)
                ));
            }
        }
    }
}

fn write_text(out: &mut String, r: &PixelRect, text: &str, style: &TextStyle) {
    let (x, anchor) = match style.alignment {
        Alignment::Left => (r.x, "start"),
        Alignment::Center => (r.x + r.width * 0.5, "middle"),
        Alignment::Right => (r.right(), "end"),
    };
    out.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\">{}</text>\n",
        num(x),
        num(r.y + r.height * 0.5),
        escape(&style.font_family),
        num(style.font_size_px),
        escape(&style.font_weight),
        escape(&style.color),
        escape(text)
    ));
}

/// Outline with the three finder squares; not a scannable code.
fn write_qr_placeholder(out: &mut String, r: &PixelRect) {
    let side = r.width.min(r.height);
    let x0 = r.x + (r.width - side) * 0.5;
    let y0 = r.y + (r.height - side) * 0.5;
    let finder = side * 0.28;
    out.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{s}\" height=\"{s}\" fill=\"#ffffff\" stroke=\"#000000\"/>\n",
        num(x0),
        num(y0),
        s = num(side),
    ));
    for (fx, fy) in [(x0, y0), (x0 + side - finder, y0), (x0, y0 + side - finder)] {
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{f}\" height=\"{f}\" fill=\"#000000\"/>\n",
            num(fx),
            num(fy),
            f = num(finder),
        ));
    }
}

/// Two decimals, trailing zeros dropped.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
