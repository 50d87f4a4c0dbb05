//! Errors for the fallible boundaries: template parsing, configuration, and CLI I/O.
//!
//! Interactive engine operations never return these. Pointer events racing a
//! deletion, or a typed negative size, are recovered in place.

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid template JSON: {0}")]
    Template(#[source] serde_json::Error),
    #[error("invalid preview data JSON: {0}")]
    Data(#[source] serde_json::Error),
    #[error("invalid page size: {width} x {height}")]
    InvalidPageSize { width: f64, height: f64 },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Template(_) => "E_TEMPLATE",
            Self::Data(_) => "E_DATA",
            Self::InvalidPageSize { .. } => "E_PAGE_SIZE",
            Self::Config(_) => "E_CONFIG",
            Self::Io(_) => "E_IO",
        }
    }
}
