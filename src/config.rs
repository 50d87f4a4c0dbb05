//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;
use std::str::FromStr;

use crate::consts::{HANDLE_SIZE_PX, RENDER_RETRY_DELAY_MS};
use crate::error::LayoutError;
use crate::field::DEFAULT_FONT_FAMILY;
use crate::geometry::Size;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1000.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Area available to the page, used by the fit computation.
    pub viewport: Size,
    pub render_retry_delay_ms: u64,
    /// Side of the resize-handle square in screen pixels.
    pub handle_size_px: f64,
    /// Font family given to newly added fields.
    pub default_font_family: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            render_retry_delay_ms: RENDER_RETRY_DELAY_MS,
            handle_size_px: HANDLE_SIZE_PX,
            default_font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// All optional:
    /// - `CERTLAYOUT_VIEWPORT_WIDTH` / `CERTLAYOUT_VIEWPORT_HEIGHT`: default 1000 x 800
    /// - `CERTLAYOUT_RENDER_RETRY_DELAY_MS`: default 1500
    /// - `CERTLAYOUT_HANDLE_SIZE_PX`: default 12
    /// - `CERTLAYOUT_DEFAULT_FONT_FAMILY`: default `Arial`
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Config` for unparsable numbers or non-positive sizes.
    pub fn from_env() -> Result<Self, LayoutError> {
        let defaults = Self::default();
        let viewport = Size::new(
            env_parse("CERTLAYOUT_VIEWPORT_WIDTH", defaults.viewport.width)?,
            env_parse("CERTLAYOUT_VIEWPORT_HEIGHT", defaults.viewport.height)?,
        );
        if !viewport.is_valid() {
            return Err(LayoutError::Config(format!(
                "viewport must be positive, got {} x {}",
                viewport.width, viewport.height
            )));
        }
        let handle_size_px = env_parse("CERTLAYOUT_HANDLE_SIZE_PX", defaults.handle_size_px)?;
        if !(handle_size_px.is_finite() && handle_size_px > 0.0) {
            return Err(LayoutError::Config(format!("CERTLAYOUT_HANDLE_SIZE_PX must be positive, got {handle_size_px}")));
        }
        let render_retry_delay_ms = env_parse("CERTLAYOUT_RENDER_RETRY_DELAY_MS", defaults.render_retry_delay_ms)?;
        let default_font_family = match std::env::var("CERTLAYOUT_DEFAULT_FONT_FAMILY") {
            Ok(v) if !v.trim().is_empty() => v.trim().to_owned(),
            _ => defaults.default_font_family,
        };

        Ok(Self { viewport, render_retry_delay_ms, handle_size_px, default_font_family })
    }

    /// Replace either viewport dimension, e.g. from command-line flags.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Config` if the resulting viewport is not positive.
    pub fn with_viewport(mut self, width: Option<f64>, height: Option<f64>) -> Result<Self, LayoutError> {
        let viewport = Size::new(width.unwrap_or(self.viewport.width), height.unwrap_or(self.viewport.height));
        if !viewport.is_valid() {
            return Err(LayoutError::Config(format!(
                "viewport must be positive, got {} x {}",
                viewport.width, viewport.height
            )));
        }
        self.viewport = viewport;
        Ok(self)
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, LayoutError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| LayoutError::Config(format!("{key}: cannot parse '{raw}'"))),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(_)) => Err(LayoutError::Config(format!("{key}: not valid unicode"))),
    }
}
