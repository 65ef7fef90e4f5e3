//! Level-loading error types.
//!
//! Loaders return these instead of panicking; the calling system logs the
//! error and falls back to the embedded reference level.

use std::fmt;

/// Top-level error enum for level loading.
#[derive(Debug)]
pub enum LevelError {
    /// The level file could not be read from disk.
    Io {
        /// Path that was read.
        path: String,
        source: std::io::Error,
    },

    /// The level file is not valid Tiled JSON.
    Parse(serde_json::Error),

    /// Map or tile dimensions are zero, or too large to address.
    InvalidDimensions {
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    },

    /// A tile layer's data length does not match the map's `width × height`.
    TileLayerSize {
        /// Layer name (for logging).
        layer: String,
        /// Actual number of tiles in the layer.
        got: usize,
        /// `width × height` of the map.
        expected: usize,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io { path, source } => {
                write!(f, "failed to read level file '{}': {}", path, source)
            }
            LevelError::Parse(e) => write!(f, "level file is not valid map JSON: {}", e),
            LevelError::InvalidDimensions {
                width,
                height,
                tile_width,
                tile_height,
            } => write!(
                f,
                "invalid map dimensions: {}×{} tiles of {}×{} px",
                width, height, tile_width, tile_height
            ),
            LevelError::TileLayerSize {
                layer,
                got,
                expected,
            } => write!(
                f,
                "tile layer '{}' has {} tiles, expected {}",
                layer, got, expected
            ),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io { source, .. } => Some(source),
            LevelError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Parse(e)
    }
}

/// Convenience alias: a `Result` using `LevelError` as the error type.
pub type LevelResult<T> = Result<T, LevelError>;
