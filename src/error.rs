use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing or exporting the drawing
#[derive(Debug, Error)]
pub enum PaintError {
    /// Each canvas side must lie in `1..=max_side`
    #[error("Invalid canvas size {width}x{height}: each side must be between 1 and {max_side}")]
    InvalidDimensions {
        width: i64,
        height: i64,
        max_side: u32,
    },

    #[error("Unsupported brush size: {0}")]
    UnsupportedBrushSize(u32),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Failed to export image to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for drawing operations
pub type PaintResult<T> = Result<T, PaintError>;
