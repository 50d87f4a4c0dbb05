//! Page render lifecycle as reported by the document rendering surface.
//!
//! The surface is a black box that either reports the page's intrinsic size
//! or a render error. One error per load is retried once after a fixed
//! delay; a second error is surfaced as a persistent failure. Field data is
//! held independently and is never touched here.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use tracing::{info, warn};

use crate::consts::MAX_RENDER_RETRIES;
use crate::geometry::Size;

/// Render status of the template page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    Loading,
    Ready { size: Size },
    Retrying { message: String },
    Failed { message: String },
}

impl PageStatus {
    /// Text for the operator, if this status needs one.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Loading | Self::Ready { .. } => None,
            Self::Retrying { message } => Some(format!("Could not render the template page ({message}). Retrying...")),
            Self::Failed { message } => {
                Some(format!("Could not render the template page ({message}). Reload the document to try again."))
            }
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// What the host must do after a render error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Call back after `delay_ms`.
    Schedule { delay_ms: u64 },
    GiveUp,
}

/// Tracks render status and the retry budget for the current document load.
#[derive(Debug, Clone)]
pub struct PageTracker {
    status: PageStatus,
    retries_used: u32,
    retry_delay_ms: u64,
}

impl PageTracker {
    #[must_use]
    pub fn new(retry_delay_ms: u64) -> Self {
        Self { status: PageStatus::Loading, retries_used: 0, retry_delay_ms }
    }

    #[must_use]
    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    /// Page decoded and measured. Restores the retry budget.
    pub fn on_loaded(&mut self, size: Size) {
        self.status = PageStatus::Ready { size };
        self.retries_used = 0;
    }

    /// Render failed. Decides between one more attempt and giving up.
    pub fn on_error(&mut self, message: &str) -> RetryDecision {
        if self.retries_used < MAX_RENDER_RETRIES {
            self.retries_used += 1;
            warn!(error = message, attempt = self.retries_used, delay_ms = self.retry_delay_ms, "page render failed; retry scheduled");
            self.status = PageStatus::Retrying { message: message.to_owned() };
            RetryDecision::Schedule { delay_ms: self.retry_delay_ms }
        } else {
            warn!(error = message, "page render failed; giving up");
            self.status = PageStatus::Failed { message: message.to_owned() };
            RetryDecision::GiveUp
        }
    }

    /// The scheduled retry delay elapsed. Returns `true` if the page should reload.
    pub fn on_retry_due(&mut self) -> bool {
        if matches!(self.status, PageStatus::Retrying { .. }) {
            info!("retrying page render");
            self.status = PageStatus::Loading;
            true
        } else {
            false
        }
    }

    /// A different document is being loaded.
    pub fn reset(&mut self) {
        self.status = PageStatus::Loading;
        self.retries_used = 0;
    }
}
