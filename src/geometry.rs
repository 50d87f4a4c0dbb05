//! Geometry transform between page-local pixels and page-relative percentages.
//!
//! Every persisted field coordinate is a percentage of the page's width or
//! height. Pointer positions arrive in pixels relative to the rendered page
//! element, whose size is the intrinsic page size times the current display
//! scale. The functions here are the only place that converts between the
//! two, so the editor and the preview agree on layout at any scale.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{MIN_FIELD_SIZE, PERCENT_MAX};

/// A point in page-local pixels or in page percentages, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Multiply both dimensions by `scale`.
    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        Self { width: self.width * scale, height: self.height * scale }
    }

    /// Both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A field's bounding box in page percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FieldRect {
    /// Project onto a rendered page of `page_px` pixels.
    #[must_use]
    pub fn to_pixels(&self, page_px: Size) -> PixelRect {
        PixelRect {
            x: to_pixels(self.x, page_px.width),
            y: to_pixels(self.y, page_px.height),
            width: to_pixels(self.width, page_px.width),
            height: to_pixels(self.height, page_px.height),
        }
    }
}

/// A rectangle in page-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Convert a pixel offset along one axis to a percentage of `dimension`.
///
/// A degenerate (zero or negative) page dimension maps everything to `0.0`.
#[must_use]
pub fn to_percent(pixel_offset: f64, dimension: f64) -> f64 {
    if dimension <= 0.0 {
        return 0.0;
    }
    PERCENT_MAX * pixel_offset / dimension
}

/// Convert a percentage of `dimension` back to a pixel offset.
#[must_use]
pub fn to_pixels(percent: f64, dimension: f64) -> f64 {
    percent * dimension / PERCENT_MAX
}

/// Convert a page-local pixel point to page percentages (unclamped).
#[must_use]
pub fn point_to_percent(p: Point, page_px: Size) -> Point {
    Point::new(to_percent(p.x, page_px.width), to_percent(p.y, page_px.height))
}

/// Convert a percentage point to page-local pixels.
#[must_use]
pub fn percent_to_point(p: Point, page_px: Size) -> Point {
    Point::new(to_pixels(p.x, page_px.width), to_pixels(p.y, page_px.height))
}

/// Clamp a position coordinate into `[0, 100]`.
#[must_use]
pub fn clamp_position(value: f64) -> f64 {
    value.clamp(0.0, PERCENT_MAX)
}

/// Apply the size floor. There is no ceiling.
#[must_use]
pub fn clamp_size(value: f64) -> f64 {
    value.max(MIN_FIELD_SIZE)
}

/// Pointer-to-corner offset captured when a drag begins, in page percent.
///
/// Independent of scale: a zoom change mid-drag keeps the grabbed page point
/// under the cursor.
#[must_use]
pub fn drag_offset(pointer: Point, field: &FieldRect, page_px: Size) -> Point {
    let grab = point_to_percent(pointer, page_px);
    Point::new(grab.x - field.x, grab.y - field.y)
}

/// New top-left position (percent, clamped) for a drag at `pointer`.
///
/// `offset` comes from [`drag_offset`]; `page_px` is the current rendered size.
#[must_use]
pub fn drag_position(pointer: Point, offset: Point, page_px: Size) -> Point {
    let pct = point_to_percent(pointer, page_px);
    Point::new(clamp_position(pct.x - offset.x), clamp_position(pct.y - offset.y))
}

/// New size (percent, floored) for a resize handle dragged to `pointer`.
///
/// Measured from the field's rendered top-left but normalised by the page,
/// since sizes are persisted as percent of the page.
#[must_use]
pub fn resize_size(pointer: Point, field: &FieldRect, page_px: Size) -> Size {
    let rect = field.to_pixels(page_px);
    Size::new(
        clamp_size(to_percent(pointer.x - rect.x, page_px.width)),
        clamp_size(to_percent(pointer.y - rect.y, page_px.height)),
    )
}
