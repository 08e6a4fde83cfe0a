//! Error types for template rendering, tileset parsing and map generation

use crate::spatial::config::Orientation;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
#[derive(Debug)]
pub enum HerringboneError {
    /// Tile configuration failed validation before any work was done
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Image is smaller than the template layout it is supposed to hold
    ///
    /// When parsing, this usually means a hand-edited template was cropped
    /// or resized after it was generated.
    ImageTooSmall {
        /// Size required by the layout (width, height)
        required: (usize, usize),
        /// Size of the supplied image (width, height)
        actual: (usize, usize),
    },

    /// Embedded template header decoded to an out-of-range configuration
    BadHeader {
        /// Description of the inconsistent field
        reason: String,
    },

    /// No tile in the tileset satisfies a boundary combination
    ///
    /// Signals an incomplete tileset; retrying with other randomness
    /// cannot help because the candidate set itself is empty.
    NoMatchingTile {
        /// Orientation of the tile being placed
        orientation: Orientation,
        /// Output pixel position (x, y) of the tile being placed
        position: (i64, i64),
        /// Constraint values at the time of the failure (-1 = unconstrained)
        constraints: [i8; 6],
    },

    /// Requested map exceeds the configured working grid
    OutputTooLarge {
        /// Requested grid size in modules (x, y), margin included
        requested: (usize, usize),
        /// Largest allowed grid size in modules (x, y), margin included
        maximum: (usize, usize),
    },

    /// Color weighting table does not fit the tileset
    InvalidWeighting {
        /// Boundary slot whose weights are wrong
        slot: usize,
        /// Explanation of the problem
        reason: String,
    },

    /// Pixel buffer dimensions disagree with its backing storage
    BufferMismatch {
        /// Description of the mismatch
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for HerringboneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::ImageTooSmall { required, actual } => {
                write!(
                    f,
                    "Image too small for configuration: need {}x{}, got {}x{}",
                    required.0, required.1, actual.0, actual.1
                )
            }
            Self::BadHeader { reason } => {
                write!(f, "Bad template header: {reason}")
            }
            Self::NoMatchingTile {
                orientation,
                position,
                constraints,
            } => {
                write!(
                    f,
                    "Couldn't find {orientation} tile matching constraints {constraints:?} at ({}, {})",
                    position.0, position.1
                )
            }
            Self::OutputTooLarge { requested, maximum } => {
                write!(
                    f,
                    "Requested map needs a {}x{} module grid, maximum is {}x{}",
                    requested.0, requested.1, maximum.0, maximum.1
                )
            }
            Self::InvalidWeighting { slot, reason } => {
                write!(f, "Invalid weighting for slot {slot}: {reason}")
            }
            Self::BufferMismatch { reason } => {
                write!(f, "Pixel buffer mismatch: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for HerringboneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, HerringboneError>;

impl From<std::io::Error> for HerringboneError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_config(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HerringboneError {
    HerringboneError::InvalidConfig {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a bad header error
pub fn bad_header(reason: &impl ToString) -> HerringboneError {
    HerringboneError::BadHeader {
        reason: reason.to_string(),
    }
}

/// Create a generic command-line usage error
pub fn usage_error(msg: &str) -> HerringboneError {
    HerringboneError::InvalidConfig {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

