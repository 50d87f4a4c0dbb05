//! The editor session: field store, zoom, page lifecycle, and pointer gestures.
//!
//! `EditorEngine` is what a host view drives. The host forwards page
//! lifecycle events from the document rendering surface, pointer events in
//! page-local pixels (pointer-up observed globally), animation frames, and
//! explicit operator actions. Every call returns the [`Action`]s the host
//! should carry out: repaint, change the cursor, request a frame, schedule
//! the render retry. The engine does no I/O; saving is `get_fields()` handed
//! to the persistence collaborator unchanged.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, warn};

use crate::coalesce::MoveCoalescer;
use crate::config::EditorConfig;
use crate::field::{FieldId, FieldPatch, FieldType, TemplateField};
use crate::geometry::{PixelRect, Point, Size};
use crate::hit::hit_test;
use crate::input::{
    Cursor, Effect, InputState, InteractionMode, PointerEvent, Transition, TransitionContext, transition,
};
use crate::page::{PageStatus, PageTracker, RetryDecision};
use crate::store::FieldStore;
use crate::zoom::ZoomController;

/// Instructions returned to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FieldCreated(TemplateField),
    FieldUpdated(TemplateField),
    FieldDeleted { id: FieldId },
    SelectionChanged(Option<FieldId>),
    SetCursor(Cursor),
    ZoomChanged(f64),
    /// Call [`EditorEngine::on_frame`] on the next animation frame.
    FrameRequested,
    /// Call [`EditorEngine::on_render_retry_due`] after `delay_ms`.
    ScheduleRenderRetry { delay_ms: u64 },
    /// Ask the rendering surface to render the page again.
    ReloadPage,
    RenderStatusChanged(PageStatus),
    RenderNeeded,
}

pub struct EditorEngine {
    store: FieldStore,
    zoom: ZoomController,
    input: InputState,
    page: PageTracker,
    moves: MoveCoalescer,
    handle_size_px: f64,
    pending_seed: bool,
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditorEngine {
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            store: FieldStore::with_font_family(&config.default_font_family),
            zoom: ZoomController::new(config.viewport),
            input: InputState::Idle,
            page: PageTracker::new(config.render_retry_delay_ms),
            moves: MoveCoalescer::new(),
            handle_size_px: config.handle_size_px,
            pending_seed: false,
        }
    }

    // --- Load / save ---

    /// Load a saved template, or seed one default field for a new one.
    ///
    /// An empty list seeds a `studentName` field once the page has loaded
    /// (immediately if it already has).
    pub fn initialize(&mut self, fields: Vec<TemplateField>) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        if fields.is_empty() {
            self.store.replace_all(Vec::new());
            if self.page.status().is_ready() {
                self.pending_seed = false;
                actions.extend(self.seed_default_field());
            } else {
                self.pending_seed = true;
                actions.push(Action::SelectionChanged(None));
            }
        } else {
            self.pending_seed = false;
            self.store.replace_all(fields);
            actions.push(Action::SelectionChanged(self.store.selected_id()));
        }
        with_render(actions)
    }

    /// Snapshot for the persistence collaborator.
    #[must_use]
    pub fn get_fields(&self) -> Vec<TemplateField> {
        self.store.snapshot()
    }

    // --- Page lifecycle ---

    /// The rendering surface measured the page at its intrinsic size.
    pub fn on_page_size_known(&mut self, width: f64, height: f64) -> Vec<Action> {
        let size = Size::new(width, height);
        if !size.is_valid() {
            warn!(width, height, "rendering surface reported an unusable page size");
            return self.on_render_error(&format!("invalid page size {width} x {height}"));
        }
        self.page.on_loaded(size);
        let mut actions = vec![Action::RenderStatusChanged(self.page.status().clone())];
        if self.zoom.on_page_size_known(size) {
            actions.push(Action::ZoomChanged(self.zoom.scale()));
        }
        if self.pending_seed {
            self.pending_seed = false;
            if self.store.is_empty() {
                actions.extend(self.seed_default_field());
            }
        }
        with_render(actions)
    }

    /// The rendering surface failed to decode or draw the page.
    pub fn on_render_error(&mut self, message: &str) -> Vec<Action> {
        let decision = self.page.on_error(message);
        let mut actions = vec![Action::RenderStatusChanged(self.page.status().clone())];
        if let RetryDecision::Schedule { delay_ms } = decision {
            actions.push(Action::ScheduleRenderRetry { delay_ms });
        }
        actions
    }

    /// The delay from [`Action::ScheduleRenderRetry`] has elapsed.
    pub fn on_render_retry_due(&mut self) -> Vec<Action> {
        if self.page.on_retry_due() {
            vec![Action::RenderStatusChanged(self.page.status().clone()), Action::ReloadPage]
        } else {
            Vec::new()
        }
    }

    /// A different source document is about to load. Fields are kept.
    pub fn on_document_changed(&mut self) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        self.page.reset();
        self.zoom.begin_document();
        actions.push(Action::RenderStatusChanged(self.page.status().clone()));
        actions
    }

    // --- Zoom ---

    /// Update the viewport available to the page.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.zoom.set_viewport(Size::new(width, height));
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let scale = self.zoom.zoom_in();
        vec![Action::ZoomChanged(scale), Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let scale = self.zoom.zoom_out();
        vec![Action::ZoomChanged(scale), Action::RenderNeeded]
    }

    pub fn reset_zoom(&mut self) -> Vec<Action> {
        let scale = self.zoom.reset_zoom();
        vec![Action::ZoomChanged(scale), Action::RenderNeeded]
    }

    // --- Field operations ---

    /// Add a field with default geometry and select it.
    pub fn add_field(&mut self, field_type: FieldType) -> Vec<Action> {
        let id = self.store.add(field_type);
        let mut actions = Vec::new();
        if let Some(field) = self.store.get(&id) {
            actions.push(Action::FieldCreated(field.clone()));
        }
        actions.push(Action::SelectionChanged(Some(id)));
        with_render(actions)
    }

    /// Apply a direct property edit. Out-of-range numbers are clamped.
    pub fn update_field(&mut self, id: &FieldId, patch: &FieldPatch) -> Vec<Action> {
        match self.store.update(id, patch) {
            Some(field) => with_render(vec![Action::FieldUpdated(field.clone())]),
            None => Vec::new(),
        }
    }

    /// Attach the asset the operator picked from the library.
    pub fn set_field_image(&mut self, id: &FieldId, url: &str) -> Vec<Action> {
        self.update_field(id, &FieldPatch::image(Some(url.to_owned())))
    }

    /// Delete a field, ending any gesture on it.
    pub fn remove_field(&mut self, id: &FieldId) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.input.active_field().as_ref() == Some(id) {
            actions.extend(self.cancel_gesture());
        }
        let was_selected = self.store.selected_id().as_ref() == Some(id);
        if self.store.remove(id).is_none() {
            return actions;
        }
        actions.push(Action::FieldDeleted { id: *id });
        if was_selected {
            actions.push(Action::SelectionChanged(None));
        }
        with_render(actions)
    }

    /// Select a field; an unknown id falls back to the first field or none.
    pub fn select_field(&mut self, id: &FieldId) -> Vec<Action> {
        let before = self.store.selected_id();
        self.store.select(id);
        self.selection_actions(before)
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        let before = self.store.selected_id();
        self.store.clear_selection();
        self.selection_actions(before)
    }

    // --- Pointer input ---

    /// Primary button pressed at `point` (page-local pixels).
    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Action> {
        let hit = self
            .zoom
            .page_px()
            .and_then(|page_px| hit_test(point, self.store.fields(), page_px, self.handle_size_px));
        with_render(self.dispatch(PointerEvent::Down { point, hit }))
    }

    /// Pointer moved. Applied on the next [`on_frame`](Self::on_frame).
    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        if self.input.mode() == InteractionMode::Idle {
            return Vec::new();
        }
        if self.moves.push(point) {
            vec![Action::FrameRequested]
        } else {
            Vec::new()
        }
    }

    /// Animation frame: apply the latest pending move, if any.
    pub fn on_frame(&mut self) -> Vec<Action> {
        match self.moves.take() {
            Some(point) => with_render(self.dispatch(PointerEvent::Move { point })),
            None => Vec::new(),
        }
    }

    /// Pointer released anywhere. Applies the last pending move first.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let mut actions = self.on_frame();
        actions.extend(self.dispatch(PointerEvent::Up));
        if self.moves.superseded() > 0 {
            debug!(superseded = self.moves.superseded(), "pointer moves coalesced so far");
        }
        with_render(actions)
    }

    /// Pointer cancelled by the platform. Pending movement is dropped.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.moves.discard();
        self.dispatch(PointerEvent::Cancel)
    }

    // --- Queries ---

    #[must_use]
    pub fn fields(&self) -> &[TemplateField] {
        self.store.fields()
    }

    #[must_use]
    pub fn field(&self, id: &FieldId) -> Option<&TemplateField> {
        self.store.get(id)
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<FieldId> {
        self.store.selected_id()
    }

    #[must_use]
    pub fn selected_field(&self) -> Option<&TemplateField> {
        self.store.selected_field()
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.input.mode()
    }

    #[must_use]
    pub fn active_field(&self) -> Option<FieldId> {
        self.input.active_field()
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    /// Rendered page size at the current scale, once known.
    #[must_use]
    pub fn page_px(&self) -> Option<Size> {
        self.zoom.page_px()
    }

    #[must_use]
    pub fn page_status(&self) -> &PageStatus {
        self.page.status()
    }

    /// Where the view should draw a field's rectangle.
    #[must_use]
    pub fn field_pixel_rect(&self, id: &FieldId) -> Option<PixelRect> {
        let page_px = self.zoom.page_px()?;
        self.store.get(id).map(|f| f.rect().to_pixels(page_px))
    }

    // --- Internals ---

    fn dispatch(&mut self, event: PointerEvent) -> Vec<Action> {
        let target = match event {
            PointerEvent::Down { hit: Some(hit), .. } => Some(hit.field_id),
            _ => self.input.active_field(),
        };
        let field = target.and_then(|id| self.store.get(&id)).map(TemplateField::rect);
        if let (Some(id), None) = (target, field) {
            warn!(%id, ?event, "pointer event for a field that no longer exists");
        }
        let ctx = TransitionContext { page_px: self.zoom.page_px(), field };

        let prev_mode = self.input.mode();
        let Transition { next, effects } = transition(self.input, event, ctx);
        self.input = next;

        let mut actions = Vec::new();
        for effect in effects {
            self.apply_effect(effect, &mut actions);
        }
        if next.mode() != prev_mode {
            debug!(from = ?prev_mode, to = ?next.mode(), "interaction mode changed");
            actions.push(Action::SetCursor(next.mode().cursor()));
        }
        actions
    }

    fn apply_effect(&mut self, effect: Effect, actions: &mut Vec<Action>) {
        match effect {
            Effect::Select(id) => {
                if self.store.selected_id() != Some(id) {
                    self.store.select(&id);
                    actions.push(Action::SelectionChanged(self.store.selected_id()));
                }
            }
            Effect::Move { id, x, y } => {
                if let Some(field) = self.store.update(&id, &FieldPatch::position(x, y)) {
                    actions.push(Action::FieldUpdated(field.clone()));
                }
            }
            Effect::Resize { id, width, height } => {
                if let Some(field) = self.store.update(&id, &FieldPatch::size(width, height)) {
                    actions.push(Action::FieldUpdated(field.clone()));
                }
            }
        }
    }

    fn cancel_gesture(&mut self) -> Vec<Action> {
        if self.input.mode() == InteractionMode::Idle {
            return Vec::new();
        }
        self.on_pointer_cancel()
    }

    fn seed_default_field(&mut self) -> Vec<Action> {
        debug!("seeding default field for empty template");
        let id = self.store.add(FieldType::StudentName);
        let mut actions = Vec::new();
        if let Some(field) = self.store.get(&id) {
            actions.push(Action::FieldCreated(field.clone()));
        }
        actions.push(Action::SelectionChanged(Some(id)));
        actions
    }

    fn selection_actions(&self, before: Option<FieldId>) -> Vec<Action> {
        let after = self.store.selected_id();
        if after == before {
            Vec::new()
        } else {
            with_render(vec![Action::SelectionChanged(after)])
        }
    }
}

/// Append a single `RenderNeeded` when anything visible changed.
fn with_render(mut actions: Vec<Action>) -> Vec<Action> {
    if !actions.is_empty() && !actions.contains(&Action::RenderNeeded) {
        actions.push(Action::RenderNeeded);
    }
    actions
}
