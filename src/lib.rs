//! Herringbone Wang tile engine
//!
//! Lays out combinatorial template images describing every tile a tileset
//! needs, parses filled-in templates back into tile databases, and generates
//! arbitrarily large maps by tiling a herringbone brick pattern with tiles
//! whose boundary colors agree.

#![forbid(unsafe_code)]

/// Map generation: herringbone sweep, tile selection and repetition reduction
pub mod algorithm;
/// Template rendering, header encoding and tileset parsing
pub mod codec;
/// Errors, constants, image files, command line and progress display
pub mod io;
/// Weighted random choices
pub mod math;
/// Tile configuration, template layout, pixel views and working grids
pub mod spatial;

#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod unit_tests;

pub use algorithm::executor::{GeneratorConfig, HerringboneGenerator, Placement, generate_image};
pub use algorithm::weighting::Weighting;
pub use codec::{Tile, Tileset, build_tileset_from_image, make_template, render_template};
pub use io::error::{HerringboneError, Result};
pub use spatial::layout::{TemplateLayout, compute_template_size};
pub use spatial::{ColorModel, Orientation, PixelsMut, TileConfig};
