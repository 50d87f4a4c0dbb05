#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::field::{FieldId, TemplateField};
use crate::geometry::{Point, Size};

/// Which part of a field was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    /// The square handle at the field's bottom-right corner.
    ResizeHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub field_id: FieldId,
    pub part: HitPart,
}

/// Find the topmost field under `point` (page-local pixels).
///
/// Fields later in `fields` paint on top and are tested first. The resize
/// handle is a `handle_px` square centred on the bottom-right corner and wins
/// over the body, so it stays grabbable when it overhangs the field.
#[must_use]
pub fn hit_test(point: Point, fields: &[TemplateField], page_px: Size, handle_px: f64) -> Option<Hit> {
    let half = handle_px * 0.5;
    fields.iter().rev().find_map(|field| {
        let rect = field.rect().to_pixels(page_px);
        let on_handle = (point.x - rect.right()).abs() <= half && (point.y - rect.bottom()).abs() <= half;
        if on_handle {
            Some(Hit { field_id: field.id, part: HitPart::ResizeHandle })
        } else if rect.contains(point) {
            Some(Hit { field_id: field.id, part: HitPart::Body })
        } else {
            None
        }
    })
}
