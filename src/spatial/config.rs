//! Tileset configuration: color model, per-slot color counts and variations
//!
//! There are 4 "types" of corners and 6 types of edges. Each type is a
//! boundary slot with its own number of colors.
//!
//! ```text
//! corner types:                       edge types:
//!
//!                 0---*---1---*---2---*---3     *---2---*---3---*      *---0---*
//!                 |       |               |     |               |      |       |
//!                 *       *               *     1               4      5       1
//!                 |       |               |     |               |      |       |
//! 1---*---2---*---3       0---*---1---*---2     *---0---*---2---*      *       *
//! |               |       |                                            |       |
//! *               *       *                                            4       5
//! |               |       |                                            |       |
//! 0---*---1---*---2---*---3                                            *---3---*
//! ```
//!
//! Every tile stores six color tags `a..f`, laid out as
//!
//! ```text
//! corner tags:                          edge tags:
//!
//!                    a---*---d          *---a---*---b---*      *---a---*
//!                    |       |          |               |      |       |
//!                    *       *          c               d      b       c
//!                    |       |          |               |      |       |
//! a---*---b---*---c  b       e          *---e---*---f---*      *       *
//! |               |  |       |                                 |       |
//! *               *  *       *                                 d       e
//! |               |  |       |                                 |       |
//! d---*---e---*---f  c---*---f                                 *---f---*
//! ```

use crate::io::configuration::{
    MAX_CORNER_COLORS, MAX_EDGE_COLORS, MAX_SHORT_SIDE_LEN, MAX_VARIATIONS,
};
use crate::io::error::{Result, invalid_config};
use bitvec::array::BitArray;
use std::fmt;

/// Which tile boundaries carry the color constraints
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Colors live on the six edge types
    Edge,
    /// Colors live on the four corner types
    Corner,
}

impl ColorModel {
    /// Number of boundary slots used by this model
    pub const fn slot_count(self) -> usize {
        match self {
            Self::Edge => 6,
            Self::Corner => 4,
        }
    }

    /// Largest per-slot color count the template palette can draw
    pub const fn max_colors(self) -> usize {
        match self {
            Self::Edge => MAX_EDGE_COLORS,
            Self::Corner => MAX_CORNER_COLORS,
        }
    }
}

/// Tile orientation within the herringbone pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `2n x n` tile
    Horizontal,
    /// `n x 2n` tile
    Vertical,
}

const EDGE_HORIZONTAL_SLOTS: [usize; 6] = [2, 3, 1, 4, 0, 2];
const EDGE_VERTICAL_SLOTS: [usize; 6] = [0, 5, 1, 4, 5, 3];
const CORNER_HORIZONTAL_SLOTS: [usize; 6] = [1, 2, 3, 0, 1, 2];
const CORNER_VERTICAL_SLOTS: [usize; 6] = [0, 3, 2, 1, 0, 3];

impl Orientation {
    /// Boundary slot of each tag `a..f` for this orientation
    pub const fn slots(self, model: ColorModel) -> &'static [usize; 6] {
        match (model, self) {
            (ColorModel::Edge, Self::Horizontal) => &EDGE_HORIZONTAL_SLOTS,
            (ColorModel::Edge, Self::Vertical) => &EDGE_VERTICAL_SLOTS,
            (ColorModel::Corner, Self::Horizontal) => &CORNER_HORIZONTAL_SLOTS,
            (ColorModel::Corner, Self::Vertical) => &CORNER_VERTICAL_SLOTS,
        }
    }

    /// Tile size in pixels (width, height) for a module size
    pub const fn tile_size(self, short_side_len: usize) -> (usize, usize) {
        match self {
            Self::Horizontal => (short_side_len * 2, short_side_len),
            Self::Vertical => (short_side_len, short_side_len * 2),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Corner sample markup flags for rendered corner templates
///
/// When the flag for `(corner_type, color)` is set, every corner of that type
/// drawn with that color gets a small marker square in the template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CornerMarkup {
    bits: BitArray<[u16; 1]>,
}

impl CornerMarkup {
    /// Markup with no flags set
    pub const EMPTY: Self = Self {
        bits: BitArray::ZERO,
    };

    /// Markup with no flags set
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Set or clear the flag for a corner type and color (both `0..4`)
    pub fn set(&mut self, corner_type: usize, color: usize, enabled: bool) {
        if corner_type < 4 && color < 4 {
            self.bits.set(corner_type * 4 + color, enabled);
        }
    }

    /// Whether a corner type drawn with a color gets a marker
    pub fn is_set(&self, corner_type: usize, color: usize) -> bool {
        corner_type < 4
            && color < 4
            && self.bits.get(corner_type * 4 + color).as_deref() == Some(&true)
    }

    /// Whether no markup is requested at all
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

/// Description of a tileset's constraint space and template layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileConfig {
    /// Edge- or corner-colored constraints
    pub model: ColorModel,
    /// Module size in pixels; tiles are `2n x n` or `n x 2n`
    pub short_side_len: usize,
    /// Colors per boundary slot (only the first four are used for corners)
    pub num_color: [usize; 6],
    /// Extra cosmetic variants along the template's x axis
    pub num_vary_x: usize,
    /// Extra cosmetic variants along the template's y axis
    pub num_vary_y: usize,
    /// Optional corner sample markup, rendering only
    pub corner_markup: CornerMarkup,
}

impl TileConfig {
    /// Edge-colored configuration with one variant per signature
    pub fn edge(short_side_len: usize, num_color: [usize; 6]) -> Self {
        Self {
            model: ColorModel::Edge,
            short_side_len,
            num_color,
            num_vary_x: 1,
            num_vary_y: 1,
            corner_markup: CornerMarkup::new(),
        }
    }

    /// Corner-colored configuration with one variant per signature
    pub fn corner(short_side_len: usize, num_color: [usize; 4]) -> Self {
        Self {
            model: ColorModel::Corner,
            short_side_len,
            num_color: [num_color[0], num_color[1], num_color[2], num_color[3], 0, 0],
            num_vary_x: 1,
            num_vary_y: 1,
            corner_markup: CornerMarkup::new(),
        }
    }

    /// Set the variation counts along both template axes
    #[must_use]
    pub fn with_variations(mut self, num_vary_x: usize, num_vary_y: usize) -> Self {
        self.num_vary_x = num_vary_x;
        self.num_vary_y = num_vary_y;
        self
    }

    /// Whether this is a corner-colored configuration
    pub const fn is_corner(&self) -> bool {
        matches!(self.model, ColorModel::Corner)
    }

    /// Color counts of the slots used by the model
    pub fn active_colors(&self) -> &[usize] {
        self.num_color
            .get(..self.model.slot_count())
            .unwrap_or(&self.num_color)
    }

    /// Check the configuration can be rendered as a template
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the module size does not fit the header
    /// byte, a variation count is zero or exceeds 64, or a slot's color count
    /// is outside the range the template palette can draw.
    pub fn validate(&self) -> Result<()> {
        if self.short_side_len == 0 || self.short_side_len > MAX_SHORT_SIDE_LEN {
            return Err(invalid_config(
                "short_side_len",
                &self.short_side_len,
                &format!("must be in 1..={MAX_SHORT_SIDE_LEN}"),
            ));
        }
        if self.num_vary_x == 0 || self.num_vary_x > MAX_VARIATIONS {
            return Err(invalid_config(
                "num_vary_x",
                &self.num_vary_x,
                &format!("must be in 1..={MAX_VARIATIONS}"),
            ));
        }
        if self.num_vary_y == 0 || self.num_vary_y > MAX_VARIATIONS {
            return Err(invalid_config(
                "num_vary_y",
                &self.num_vary_y,
                &format!("must be in 1..={MAX_VARIATIONS}"),
            ));
        }
        let max_colors = self.model.max_colors();
        for &count in self.active_colors() {
            if count == 0 || count > max_colors {
                return Err(invalid_config(
                    "num_color",
                    &format!("{:?}", self.active_colors()),
                    &format!("each slot needs 1..={max_colors} colors"),
                ));
            }
        }
        Ok(())
    }
}
