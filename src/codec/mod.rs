//! Template rendering and tileset parsing
//!
//! The renderer and the parser share the enumeration in
//! [`crate::spatial::layout`], so a template drawn by [`template`] parses
//! back to tiles in exactly the order it was drawn.

/// Binary header stored in the first template row
pub mod header;
/// Blank template rendering
pub mod template;
/// Parsed tile database
pub mod tileset;

pub use header::TemplateHeader;
pub use template::{make_template, render_template};
pub use tileset::{Tile, Tileset, build_tileset_from_image};
