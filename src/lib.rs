//! Layout engine for certificate templates.
//!
//! Operators place typed fields (student name, date, signature, QR code,
//! image, ...) on a fixed-size document page by dragging and resizing
//! rectangles. Every position and size is stored as a percentage of the page,
//! so the same records lay out identically at any zoom level and in the
//! preview. The host view owns the document rendering surface, the asset
//! library, and persistence; it forwards events to [`engine::EditorEngine`]
//! and carries out the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor session and the [`engine::Action`]s it emits |
//! | [`field`] | Field types, the persisted record, sparse edits, template JSON |
//! | [`store`] | Ordered field collection with single selection |
//! | [`geometry`] | Percent/pixel conversion, clamping, drag and resize math |
//! | [`zoom`] | Fit-to-viewport scale and stepped zoom |
//! | [`input`] | Pointer events and the idle/dragging/resizing state machine |
//! | [`hit`] | Hit-testing fields and resize handles |
//! | [`coalesce`] | One applied pointer move per animation frame |
//! | [`page`] | Page render status and the single retry |
//! | [`preview`] | Sample-data layout and SVG output |
//! | [`config`] | Environment configuration |
//! | [`error`] | Errors for the fallible boundaries |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod coalesce;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod field;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod page;
pub mod preview;
pub mod store;
pub mod zoom;
