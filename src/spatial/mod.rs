//! Spatial data structures shared by the codec and the generator
//!
//! This module contains:
//! - Tile configuration and the boundary slot model
//! - Template layout arithmetic and the tile enumeration
//! - Pixel buffer views
//! - Working color grids for generation

/// Tile configuration, color models and orientations
pub mod config;
/// Generation working grids
pub mod grid;
/// Template size computation and deterministic tile enumeration
pub mod layout;
/// Mutable RGB pixel views
pub mod pixels;

pub use config::{ColorModel, Orientation, TileConfig};
pub use grid::ColorGrid;
pub use pixels::PixelsMut;
