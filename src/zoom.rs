//! Display scale: stepped zoom and the one-time fit-to-viewport computation.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use tracing::{debug, info};

use crate::consts::{FIT_MARGIN, FIT_MAX_SCALE, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use crate::geometry::Size;

/// Scale that fits `page` inside `viewport` with a margin, never magnifying.
#[must_use]
pub fn fit_scale(page: Size, viewport: Size) -> f64 {
    if !page.is_valid() || !viewport.is_valid() {
        return FIT_MAX_SCALE;
    }
    let by_width = viewport.width / page.width;
    let by_height = viewport.height / page.height;
    by_width.min(by_height).min(FIT_MAX_SCALE) * FIT_MARGIN
}

/// Owns the display scale for one editor session.
#[derive(Debug, Clone)]
pub struct ZoomController {
    scale: f64,
    viewport: Size,
    page: Option<Size>,
    page_loaded: bool,
}

impl ZoomController {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self { scale: 1.0, viewport, page: None, page_loaded: false }
    }

    /// Current display scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Intrinsic page size, once reported.
    #[must_use]
    pub fn page_size(&self) -> Option<Size> {
        self.page
    }

    /// Rendered page size in pixels at the current scale.
    #[must_use]
    pub fn page_px(&self) -> Option<Size> {
        self.page.map(|p| p.scaled(self.scale))
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Update the viewport used by later fit computations.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Record the page's intrinsic size.
    ///
    /// The fit scale is applied only for the first report of a document
    /// load; later reports (e.g. after a render retry) keep whatever scale
    /// the operator has set since. Returns `true` when the fit was applied.
    pub fn on_page_size_known(&mut self, page: Size) -> bool {
        self.page = Some(page);
        if self.page_loaded {
            debug!(scale = self.scale, "page size re-reported; keeping scale");
            return false;
        }
        self.page_loaded = true;
        self.scale = fit_scale(page, self.viewport);
        info!(scale = self.scale, width = page.width, height = page.height, "fit scale computed");
        true
    }

    /// Start a new document load; the next page-size report fits again.
    pub fn begin_document(&mut self) {
        self.page_loaded = false;
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.scale = (self.scale + ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
        self.scale
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.scale = (self.scale - ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
        self.scale
    }

    /// Back to the fit scale, or `1.0` when the page size is still unknown.
    pub fn reset_zoom(&mut self) -> f64 {
        self.scale = match self.page {
            Some(page) => fit_scale(page, self.viewport),
            None => 1.0,
        };
        self.scale
    }
}
