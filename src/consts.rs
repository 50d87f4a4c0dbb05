//! Shared numeric constants for the layout engine.

// ── Page geometry ───────────────────────────────────────────────

/// Upper bound of a page-relative percentage coordinate.
pub const PERCENT_MAX: f64 = 100.0;

/// Smallest width or height a field may have, in percent of the page.
pub const MIN_FIELD_SIZE: f64 = 5.0;

/// Smallest font size accepted from a numeric edit, in points.
pub const MIN_FONT_SIZE: f64 = 1.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Step applied by a single zoom-in / zoom-out.
pub const ZOOM_STEP: f64 = 0.2;

/// Lowest scale reachable through zoom-out.
pub const ZOOM_MIN: f64 = 0.5;

/// Highest scale reachable through zoom-in.
pub const ZOOM_MAX: f64 = 5.0;

/// Fraction of the viewport the fitted page may occupy.
pub const FIT_MARGIN: f64 = 0.9;

/// Fit never magnifies past this scale.
pub const FIT_MAX_SCALE: f64 = 1.0;

// ── Interaction ─────────────────────────────────────────────────

/// Default side of the resize-handle square, in screen pixels.
pub const HANDLE_SIZE_PX: f64 = 12.0;

/// Render retries attempted after a page render error.
pub const MAX_RENDER_RETRIES: u32 = 1;

/// Default delay before the render retry fires.
pub const RENDER_RETRY_DELAY_MS: u64 = 1500;

// ── Preview ─────────────────────────────────────────────────────

/// Signature text is set this much larger than the configured font size.
pub const SIGNATURE_FONT_SCALE: f64 = 1.5;
