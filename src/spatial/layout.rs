//! Template layout: image size and the deterministic tile enumeration
//!
//! The renderer and the parser both walk the template through
//! [`walk_template`], so the two are locked in sync and no parsing of edge
//! color markup is ever needed.

use crate::io::configuration::{BLOCK_GAP, TILE_PADDING};
use crate::io::error::{HerringboneError, Result};
use crate::spatial::config::{ColorModel, Orientation, TileConfig};
use std::ops::RangeInclusive;

/// Pixel size of a template and the number of tiles it holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateLayout {
    /// Template width in pixels
    pub width: usize,
    /// Template height in pixels
    pub height: usize,
    /// Number of horizontal tiles enumerated
    pub horizontal_count: usize,
    /// Number of vertical tiles enumerated
    pub vertical_count: usize,
}

// Tiles per row and rows per block for both orientations
struct BlockShape {
    horizontal_row_len: usize,
    horizontal_rows: usize,
    vertical_row_len: usize,
    vertical_rows: usize,
}

fn block_shape(config: &TileConfig) -> BlockShape {
    let c = &config.num_color;
    let (vx, vy) = (config.num_vary_x, config.num_vary_y);
    match config.model {
        ColorModel::Corner => BlockShape {
            horizontal_row_len: c[1] * c[2] * c[3] * vx,
            horizontal_rows: c[0] * c[1] * c[2] * vy,
            vertical_row_len: c[0] * c[3] * c[2] * vy,
            vertical_rows: c[1] * c[0] * c[3] * vx,
        },
        ColorModel::Edge => BlockShape {
            horizontal_row_len: c[0] * c[1] * c[2] * vx,
            horizontal_rows: c[3] * c[4] * c[2] * vy,
            vertical_row_len: c[0] * c[5] * c[1] * vy,
            vertical_rows: c[3] * c[4] * c[5] * vx,
        },
    }
}

/// Horizontal pitch of one tile slot in the template
pub const fn tile_pitch_x(orientation: Orientation, short_side_len: usize) -> usize {
    orientation.tile_size(short_side_len).0 + TILE_PADDING
}

/// Vertical pitch of one template row
pub const fn tile_pitch_y(orientation: Orientation, short_side_len: usize) -> usize {
    orientation.tile_size(short_side_len).1 + TILE_PADDING
}

/// Compute the template image size and tile counts for a configuration
///
/// Pure arithmetic; inputs large enough to overflow are a caller error.
pub fn compute_template_size(config: &TileConfig) -> TemplateLayout {
    let len = config.short_side_len;
    let shape = block_shape(config);

    let horizontal_x = shape.horizontal_row_len * tile_pitch_x(Orientation::Horizontal, len);
    let horizontal_y = shape.horizontal_rows * tile_pitch_y(Orientation::Horizontal, len);
    let vertical_x = shape.vertical_row_len * tile_pitch_x(Orientation::Vertical, len);
    let vertical_y = shape.vertical_rows * tile_pitch_y(Orientation::Vertical, len);

    TemplateLayout {
        width: horizontal_x.max(vertical_x),
        height: BLOCK_GAP + horizontal_y + BLOCK_GAP + vertical_y,
        horizontal_count: shape.horizontal_row_len * shape.horizontal_rows,
        vertical_count: shape.vertical_row_len * shape.vertical_rows,
    }
}

/// Receives every tile slot of a template in enumeration order
pub trait TemplateVisitor {
    /// Called for one tile outline whose top-left border pixel is `(x, y)`
    fn visit(&mut self, orientation: Orientation, x: usize, y: usize, colors: [u8; 6]);
}

/// Walk every tile slot of the template for `config`
///
/// Rows are visited top to bottom, horizontal block first. Within a row the
/// loops run over variant, then `f`, `e`, `d`, `c`, `b`, `a` (innermost), so
/// consecutive tiles share as many fixed colors as possible.
///
/// # Errors
///
/// Returns `ImageTooSmall` if `image_width x image_height` cannot hold the
/// layout computed for `config`.
pub fn walk_template<V>(
    config: &TileConfig,
    image_width: usize,
    image_height: usize,
    visitor: &mut V,
) -> Result<()>
where
    V: TemplateVisitor + ?Sized,
{
    let layout = compute_template_size(config);
    if image_width < layout.width || image_height < layout.height {
        return Err(HerringboneError::ImageTooSmall {
            required: (layout.width, layout.height),
            actual: (image_width, image_height),
        });
    }

    let c = &config.num_color;
    let len = config.short_side_len;
    let (vary_x, vary_y) = (config.num_vary_x, config.num_vary_y);
    let h_pitch = tile_pitch_y(Orientation::Horizontal, len);
    let v_pitch = tile_pitch_y(Orientation::Vertical, len);
    let mut row = RowWalker {
        visitor,
        short_side_len: len,
    };

    let mut ypos = BLOCK_GAP;
    match config.model {
        ColorModel::Corner => {
            for k in 0..c[2] {
                for j in 0..c[1] {
                    for i in 0..c[0] {
                        for _ in 0..vary_y {
                            row.walk(
                                Orientation::Horizontal,
                                ypos,
                                [all(c[1]), all(c[2]), all(c[3]), one(i), one(j), one(k)],
                                vary_x,
                            );
                            ypos += h_pitch;
                        }
                    }
                }
            }
            ypos += BLOCK_GAP;
            for k in 0..c[3] {
                for j in 0..c[0] {
                    for i in 0..c[1] {
                        for _ in 0..vary_x {
                            row.walk(
                                Orientation::Vertical,
                                ypos,
                                [all(c[0]), all(c[3]), all(c[2]), one(i), one(j), one(k)],
                                vary_y,
                            );
                            ypos += v_pitch;
                        }
                    }
                }
            }
        }
        ColorModel::Edge => {
            for k in 0..c[3] {
                for j in 0..c[4] {
                    for i in 0..c[2] {
                        for _ in 0..vary_y {
                            row.walk(
                                Orientation::Horizontal,
                                ypos,
                                [all(c[2]), one(k), all(c[1]), one(j), all(c[0]), one(i)],
                                vary_x,
                            );
                            ypos += h_pitch;
                        }
                    }
                }
            }
            ypos += BLOCK_GAP;
            for k in 0..c[3] {
                for j in 0..c[4] {
                    for i in 0..c[5] {
                        for _ in 0..vary_x {
                            row.walk(
                                Orientation::Vertical,
                                ypos,
                                [all(c[0]), one(i), all(c[1]), one(j), all(c[5]), one(k)],
                                vary_y,
                            );
                            ypos += v_pitch;
                        }
                    }
                }
            }
        }
    }
    debug_assert_eq!(ypos, layout.height, "enumeration disagrees with layout");

    Ok(())
}

// Every color of a slot with `count` colors; empty when `count` is zero
fn all(count: usize) -> RangeInclusive<usize> {
    if count == 0 {
        // An inverted range iterates nothing
        1..=0
    } else {
        0..=count - 1
    }
}

const fn one(color: usize) -> RangeInclusive<usize> {
    color..=color
}

struct RowWalker<'v, V: ?Sized> {
    visitor: &'v mut V,
    short_side_len: usize,
}

impl<V> RowWalker<'_, V>
where
    V: TemplateVisitor + ?Sized,
{
    fn walk(
        &mut self,
        orientation: Orientation,
        ypos: usize,
        ranges: [RangeInclusive<usize>; 6],
        variants: usize,
    ) {
        let pitch = tile_pitch_x(orientation, self.short_side_len);
        let [ra, rb, rc, rd, re, rf] = ranges;
        let mut xpos = 0;
        for _ in 0..variants {
            for f in rf.clone() {
                for e in re.clone() {
                    for d in rd.clone() {
                        for c in rc.clone() {
                            for b in rb.clone() {
                                for a in ra.clone() {
                                    let colors = [a, b, c, d, e, f].map(|v| v as u8);
                                    self.visitor.visit(orientation, xpos, ypos, colors);
                                    xpos += pitch;
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
