//! Interaction state machine: idle, dragging, and resizing.
//!
//! `transition` is a pure function of the current state, one pointer event,
//! and a read-only view of the page and the field involved. It returns the
//! next state plus the store effects to apply; it never touches the store
//! itself. The engine owns the state value, performs the lookups that fill
//! in [`TransitionContext`], and applies the effects.
//!
//! ```text
//!            down on body                  down on handle
//!   Idle ─────────────────▶ Dragging   Idle ──────────────▶ Resizing
//!    ▲                        │  ▲ move                       │  ▲ move
//!    └──── up / cancel ───────┘  └──┘          up / cancel ───┘  └──┘
//! ```

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::field::FieldId;
use crate::geometry::{FieldRect, Point, Size, drag_offset, drag_position, resize_size};
use crate::hit::{Hit, HitPart};

/// Published interaction mode, for view layers that style cursors and borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

impl InteractionMode {
    #[must_use]
    pub fn cursor(self) -> Cursor {
        match self {
            Self::Idle => Cursor::Default,
            Self::Dragging => Cursor::Grabbing,
            Self::Resizing => Cursor::ResizeNwse,
        }
    }
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grabbing,
    ResizeNwse,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grabbing => "grabbing",
            Self::ResizeNwse => "nwse-resize",
        }
    }
}

/// Active gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Moving a field. `offset` is pointer minus field corner at drag start, in page percent.
    Dragging { id: FieldId, offset: Point },
    /// Resizing a field from its bottom-right handle.
    Resizing { id: FieldId },
}

impl InputState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Dragging { .. } => InteractionMode::Dragging,
            Self::Resizing { .. } => InteractionMode::Resizing,
        }
    }

    /// The field being dragged or resized.
    #[must_use]
    pub fn active_field(&self) -> Option<FieldId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id } => Some(*id),
        }
    }
}

/// Pointer input, in page-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed. `hit` is what lies under the pointer.
    Down { point: Point, hit: Option<Hit> },
    Move { point: Point },
    /// Released anywhere, including outside the editor.
    Up,
    Cancel,
}

/// A store mutation requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Select(FieldId),
    Move { id: FieldId, x: f64, y: f64 },
    Resize { id: FieldId, width: f64, height: f64 },
}

/// Read-only facts a transition needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionContext {
    /// Rendered page size; `None` until the page has loaded.
    pub page_px: Option<Size>,
    /// Geometry of the field the event addresses (hit target or active field),
    /// or `None` if that field no longer exists.
    pub field: Option<FieldRect>,
}

/// Result of a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: InputState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: InputState) -> Self {
        Self { next, effects: Vec::new() }
    }

    fn with(next: InputState, effect: Effect) -> Self {
        Self { next, effects: vec![effect] }
    }
}

/// Compute the next state and store effects for one pointer event.
#[must_use]
pub fn transition(state: InputState, event: PointerEvent, ctx: TransitionContext) -> Transition {
    match (state, event) {
        (_, PointerEvent::Up | PointerEvent::Cancel) => Transition::to(InputState::Idle),

        (InputState::Idle, PointerEvent::Down { point, hit: Some(hit) }) => {
            let (Some(page_px), Some(field)) = (ctx.page_px, ctx.field) else {
                return Transition::to(InputState::Idle);
            };
            let next = match hit.part {
                HitPart::Body => InputState::Dragging { id: hit.field_id, offset: drag_offset(point, &field, page_px) },
                HitPart::ResizeHandle => InputState::Resizing { id: hit.field_id },
            };
            Transition::with(next, Effect::Select(hit.field_id))
        }

        (InputState::Dragging { id, offset }, PointerEvent::Move { point }) => {
            let (Some(page_px), Some(_)) = (ctx.page_px, ctx.field) else {
                return Transition::to(InputState::Idle);
            };
            let pos = drag_position(point, offset, page_px);
            Transition::with(state, Effect::Move { id, x: pos.x, y: pos.y })
        }

        (InputState::Resizing { id }, PointerEvent::Move { point }) => {
            let (Some(page_px), Some(field)) = (ctx.page_px, ctx.field) else {
                return Transition::to(InputState::Idle);
            };
            let size = resize_size(point, &field, page_px);
            Transition::with(state, Effect::Resize { id, width: size.width, height: size.height })
        }

        // Empty-page press, idle hover, or a second press mid-gesture.
        (_, PointerEvent::Down { .. } | PointerEvent::Move { .. }) => Transition::to(state),
    }
}
