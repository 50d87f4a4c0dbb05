//! In-memory field store: ordered fields plus at most one selection.
//!
//! The store is the single owner of field records while a template is being
//! edited. Order is insertion order and doubles as paint order (later fields
//! sit on top). Every mutation replaces one field's record in a single step,
//! and the selection is kept pointing at an existing field or at nothing.
//!
//! Operations addressed to an unknown id are no-ops that log a warning:
//! pointer events can legitimately arrive after a field was deleted.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::field::{DEFAULT_FONT_FAMILY, FieldId, FieldPatch, FieldType, TemplateField};

/// Ordered collection of template fields with single selection.
#[derive(Debug, Clone)]
pub struct FieldStore {
    fields: Vec<TemplateField>,
    selected: Option<FieldId>,
    font_family: String,
}

impl FieldStore {
    /// Create an empty store using the default font family for new fields.
    #[must_use]
    pub fn new() -> Self {
        Self::with_font_family(DEFAULT_FONT_FAMILY)
    }

    /// Create an empty store whose new fields use `font_family`.
    #[must_use]
    pub fn with_font_family(font_family: &str) -> Self {
        Self { fields: Vec::new(), selected: None, font_family: font_family.to_owned() }
    }

    /// Add a field with type-dependent defaults and select it.
    pub fn add(&mut self, field_type: FieldType) -> FieldId {
        let field = TemplateField::new(field_type, &self.font_family);
        let id = field.id;
        debug!(%id, kind = field_type.label(), "field added");
        self.fields.push(field);
        self.selected = Some(id);
        id
    }

    /// Merge `patch` into the field with `id`, returning the updated record.
    pub fn update(&mut self, id: &FieldId, patch: &FieldPatch) -> Option<&TemplateField> {
        let Some(field) = self.fields.iter_mut().find(|f| f.id == *id) else {
            warn!(%id, "update for unknown field ignored");
            return None;
        };
        let mut next = field.clone();
        next.apply(patch);
        *field = next;
        Some(&*field)
    }

    /// Delete a field. Clears the selection if it pointed at the removed field.
    pub fn remove(&mut self, id: &FieldId) -> Option<TemplateField> {
        let Some(index) = self.index_of(id) else {
            warn!(%id, "remove for unknown field ignored");
            return None;
        };
        let removed = self.fields.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        debug!(%id, remaining = self.fields.len(), "field removed");
        Some(removed)
    }

    /// Select `id`, or fall back to the first field (or none) if it is gone.
    pub fn select(&mut self, id: &FieldId) {
        if self.contains(id) {
            self.selected = Some(*id);
        } else {
            warn!(%id, "select for unknown field; falling back to first field");
            self.selected = self.fields.first().map(|f| f.id);
        }
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace every field with a loaded template and select the first one.
    ///
    /// Incoming fields are clamped to the model invariants and any field
    /// whose id repeats an earlier one is dropped.
    pub fn replace_all(&mut self, fields: Vec<TemplateField>) {
        let mut seen = HashSet::with_capacity(fields.len());
        self.fields = fields
            .into_iter()
            .filter_map(|mut field| {
                if !seen.insert(field.id) {
                    warn!(id = %field.id, "duplicate field id in template dropped");
                    return None;
                }
                field.normalize();
                Some(field)
            })
            .collect();
        self.selected = self.fields.first().map(|f| f.id);
        debug!(count = self.fields.len(), "fields replaced");
    }

    /// Look up a field by id.
    #[must_use]
    pub fn get(&self, id: &FieldId) -> Option<&TemplateField> {
        self.fields.iter().find(|f| f.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &FieldId) -> bool {
        self.index_of(id).is_some()
    }

    /// All fields in paint order.
    #[must_use]
    pub fn fields(&self) -> &[TemplateField] {
        &self.fields
    }

    /// An owned copy of every field, for the persistence collaborator.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TemplateField> {
        self.fields.clone()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<FieldId> {
        self.selected
    }

    /// The selected field, derived on demand.
    #[must_use]
    pub fn selected_field(&self) -> Option<&TemplateField> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn index_of(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == *id)
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}
