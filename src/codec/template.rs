//! Blank template rendering
//!
//! Every tile slot is outlined in black with a pale color swatch in the
//! middle of each boundary segment identifying its color. Artists paint
//! inside the outlines and hand the image back to the parser.

use crate::codec::header::TemplateHeader;
use crate::io::error::Result;
use crate::spatial::config::{ColorModel, CornerMarkup, Orientation, TileConfig};
use crate::spatial::layout::{TemplateVisitor, compute_template_size, walk_template};
use crate::spatial::pixels::PixelsMut;
use image::RgbImage;

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];
const CORNER_SAMPLE: [u8; 3] = [167, 204, 204];

// Swatch colors, eight per slot; the seventh row only serves corner pairs
const PALETTE: [[[u8; 3]; 8]; 7] = [
    [
        [255, 51, 51],
        [143, 143, 29],
        [0, 199, 199],
        [159, 119, 199],
        [0, 149, 199],
        [143, 0, 143],
        [255, 128, 0],
        [64, 255, 0],
    ],
    [
        [235, 255, 30],
        [255, 0, 255],
        [199, 139, 119],
        [29, 143, 57],
        [143, 0, 71],
        [0, 143, 143],
        [0, 99, 199],
        [143, 71, 0],
    ],
    [
        [0, 149, 199],
        [143, 0, 143],
        [255, 128, 0],
        [64, 255, 0],
        [255, 191, 0],
        [51, 255, 153],
        [0, 0, 143],
        [199, 119, 159],
    ],
    [
        [143, 0, 71],
        [0, 143, 143],
        [0, 99, 199],
        [143, 71, 0],
        [255, 190, 153],
        [0, 255, 255],
        [128, 0, 255],
        [255, 51, 102],
    ],
    [
        [255, 191, 0],
        [51, 255, 153],
        [0, 0, 143],
        [199, 119, 159],
        [255, 51, 51],
        [143, 143, 29],
        [0, 199, 199],
        [159, 119, 199],
    ],
    [
        [255, 190, 153],
        [0, 255, 255],
        [128, 0, 255],
        [255, 51, 102],
        [235, 255, 30],
        [255, 0, 255],
        [199, 139, 119],
        [29, 143, 57],
    ],
    [
        [40, 40, 40],
        [90, 90, 90],
        [150, 150, 150],
        [200, 200, 200],
        [255, 90, 90],
        [160, 160, 80],
        [50, 150, 150],
        [200, 50, 200],
    ],
];

// Marker pixel drawn on each corner, by corner type then color
const CORNER_COLORS: [[[u8; 3]; 4]; 4] = [
    [[255, 0, 0], [200, 200, 200], [100, 100, 200], [255, 200, 150]],
    [[0, 0, 255], [255, 255, 0], [100, 200, 100], [150, 255, 200]],
    [[255, 0, 255], [80, 80, 80], [200, 100, 100], [200, 150, 255]],
    [[0, 255, 255], [0, 255, 0], [200, 120, 200], [255, 200, 200]],
];

// Swatch color for an edge between two corner colors
const CORNER_PAIR_TO_EDGE: [[usize; 4]; 4] = [
    [0, 1, 4, 9],
    [2, 3, 5, 10],
    [6, 7, 8, 11],
    [12, 13, 14, 15],
];

/// Swatch color for a boundary segment of `slot` drawn with `color`
///
/// The palette is indexed as one flat table, so corner pair colors above 7
/// continue into the following slot's row. Out-of-range lookups fall back to
/// black.
pub fn swatch_color(slot: usize, color: usize) -> [u8; 3] {
    PALETTE
        .as_flattened()
        .get(slot * 8 + color)
        .copied()
        .unwrap_or(BLACK)
}

/// Edge swatch index for a pair of corner colors
pub fn corner_pair_color(first: u8, second: u8) -> usize {
    CORNER_PAIR_TO_EDGE
        .get(usize::from(first))
        .and_then(|row| row.get(usize::from(second)))
        .copied()
        .unwrap_or(0)
}

/// Marker pixel color for a corner type drawn with a color
pub fn corner_marker_color(corner_type: usize, color: u8) -> [u8; 3] {
    CORNER_COLORS
        .get(corner_type)
        .and_then(|row| row.get(usize::from(color)))
        .copied()
        .unwrap_or(BLACK)
}

fn whiten(color: [u8; 3]) -> [u8; 3] {
    color.map(|c| ((u16::from(c) * 2 + 255) / 3) as u8)
}

// Pixel range of the swatch along a segment of `len` pixels
const fn swatch_span(len: isize) -> (isize, isize) {
    let j = len * 6 / 16;
    let k = len * 10 / 16;
    if k - j >= 2 {
        return (j, k);
    }
    let j = len / 2 - 1;
    let k = j + 2 + (len & 1);
    (j, k)
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

struct TemplateRenderer<'p, 'a> {
    pixels: &'p mut PixelsMut<'a>,
    model: ColorModel,
    len: isize,
    markup: CornerMarkup,
}

impl TemplateRenderer<'_, '_> {
    fn line(&mut self, axis: Axis, x: isize, y: isize, color: usize, slot: usize) {
        let step = |i: isize| match axis {
            Axis::Horizontal => (x + i, y),
            Axis::Vertical => (x, y + i),
        };
        for i in 0..self.len {
            let (px, py) = step(i);
            self.pixels.put(px, py, BLACK);
        }
        let swatch = whiten(swatch_color(slot, color));
        let (start, end) = swatch_span(self.len);
        for i in start..end {
            let (px, py) = step(i);
            self.pixels.put(px, py, swatch);
        }
    }

    // Small square marking a corner sample, clipped to the tile interior
    fn clipped_corner(&mut self, origin: (isize, isize), size: (isize, isize), x: isize, y: isize) {
        for j in -2..=1 {
            for i in -2..=1 {
                if (i == -2 || i == 1) && (j == -2 || j == 1) {
                    continue;
                }
                if x + i < 1 || x + i > size.0 || y + j < 1 || y + j > size.1 {
                    continue;
                }
                self.pixels
                    .put(origin.0 + x + i, origin.1 + y + j, CORNER_SAMPLE);
            }
        }
    }

    fn edge_lines(&mut self, orientation: Orientation, x: isize, y: isize, colors: [usize; 6]) {
        let len = self.len;
        let [a, b, c, d, e, f] = colors;
        match orientation {
            Orientation::Horizontal => {
                self.line(Axis::Horizontal, x + 1, y, a, 2);
                self.line(Axis::Horizontal, x + len + 1, y, b, 3);
                self.line(Axis::Vertical, x, y + 1, c, 1);
                self.line(Axis::Vertical, x + 2 * len + 1, y + 1, d, 4);
                self.line(Axis::Horizontal, x + 1, y + len + 1, e, 0);
                self.line(Axis::Horizontal, x + len + 1, y + len + 1, f, 2);
            }
            Orientation::Vertical => {
                self.line(Axis::Horizontal, x + 1, y, a, 0);
                self.line(Axis::Vertical, x, y + 1, b, 5);
                self.line(Axis::Vertical, x + len + 1, y + 1, c, 1);
                self.line(Axis::Vertical, x, y + len + 1, d, 4);
                self.line(Axis::Vertical, x + len + 1, y + len + 1, e, 5);
                self.line(Axis::Horizontal, x + 1, y + 2 * len + 1, f, 3);
            }
        }
    }

    fn corner_tile(&mut self, orientation: Orientation, x: isize, y: isize, colors: [u8; 6]) {
        let len = self.len;
        let [a, b, c, d, e, f] = colors;
        let pair = corner_pair_color;
        let (edges, size, markers) = match orientation {
            Orientation::Horizontal => (
                [pair(a, b), pair(b, c), pair(a, d), pair(c, f), pair(d, e), pair(e, f)],
                (2 * len, len),
                [
                    (1, a, (1, 1), (x, y)),
                    (2, b, (len + 1, 1), (x + len, y)),
                    (3, c, (2 * len + 1, 1), (x + 2 * len + 1, y)),
                    (0, d, (1, len + 1), (x, y + len + 1)),
                    (1, e, (len + 1, len + 1), (x + len, y + len + 1)),
                    (2, f, (2 * len + 1, len + 1), (x + 2 * len + 1, y + len + 1)),
                ],
            ),
            Orientation::Vertical => (
                [pair(a, d), pair(a, b), pair(d, e), pair(b, c), pair(e, f), pair(c, f)],
                (len, 2 * len),
                [
                    (0, a, (1, 1), (x, y)),
                    (3, b, (1, len + 1), (x, y + len)),
                    (2, c, (1, 2 * len + 1), (x, y + 2 * len + 1)),
                    (1, d, (len + 1, 1), (x + len + 1, y)),
                    (0, e, (len + 1, len + 1), (x + len + 1, y + len)),
                    (3, f, (len + 1, 2 * len + 1), (x + len + 1, y + 2 * len + 1)),
                ],
            ),
        };
        self.edge_lines(orientation, x, y, edges);

        for &(corner_type, color, sample, _) in &markers {
            if self.markup.is_set(corner_type, usize::from(color)) {
                self.clipped_corner((x, y), size, sample.0, sample.1);
            }
        }
        for &(corner_type, color, _, (px, py)) in &markers {
            self.pixels
                .put(px, py, corner_marker_color(corner_type, color));
        }
    }
}

impl TemplateVisitor for TemplateRenderer<'_, '_> {
    fn visit(&mut self, orientation: Orientation, x: usize, y: usize, colors: [u8; 6]) {
        let (x, y) = (x as isize, y as isize);
        match self.model {
            ColorModel::Edge => self.edge_lines(orientation, x, y, colors.map(usize::from)),
            ColorModel::Corner => self.corner_tile(orientation, x, y, colors),
        }
    }
}

/// Draw a blank template for `config` into `pixels`
///
/// The view is filled white, every tile slot is outlined, and the header is
/// written at the end of the first row.
///
/// # Errors
///
/// Returns `InvalidConfig` if the configuration fails validation and
/// `ImageTooSmall` if the view cannot hold the template layout.
pub fn make_template(config: &TileConfig, pixels: &mut PixelsMut<'_>) -> Result<()> {
    config.validate()?;
    pixels.fill(WHITE);

    let mut renderer = TemplateRenderer {
        pixels: &mut *pixels,
        model: config.model,
        len: config.short_side_len as isize,
        markup: config.corner_markup,
    };
    let (width, height) = (renderer.pixels.width(), renderer.pixels.height());
    walk_template(config, width, height, &mut renderer)?;

    TemplateHeader::from_config(config).encode(pixels)?;
    log::debug!(
        "rendered {:?} template {}x{} with module size {}",
        config.model,
        pixels.width(),
        pixels.height(),
        config.short_side_len
    );
    Ok(())
}

/// Allocate and draw a blank template of exactly the layout size
///
/// # Errors
///
/// Returns `InvalidConfig` if the configuration fails validation.
pub fn render_template(config: &TileConfig) -> Result<RgbImage> {
    config.validate()?;
    let layout = compute_template_size(config);
    let mut image = RgbImage::new(layout.width as u32, layout.height as u32);
    make_template(config, &mut PixelsMut::from_rgb_image(&mut image))?;
    Ok(image)
}
