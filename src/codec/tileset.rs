//! Tileset database parsed from a filled-in template

use crate::codec::header::TemplateHeader;
use crate::io::error::{HerringboneError, Result, invalid_config};
use crate::spatial::config::{ColorModel, Orientation, TileConfig};
use crate::spatial::layout::{TemplateVisitor, compute_template_size, walk_template};
use crate::spatial::pixels::PixelsMut;
use image::RgbImage;

/// One authored tile: six color tags and its rectangle in the bitmap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Color tags `a..f`; meaning depends on orientation and color model
    pub colors: [i8; 6],
    /// Left pixel of the tile rectangle in the tileset bitmap
    pub x: usize,
    /// Top pixel of the tile rectangle in the tileset bitmap
    pub y: usize,
}

/// Parsed tile database with its source bitmap
///
/// Owns everything it references; dropping it releases the bitmap and both
/// tile lists.
#[derive(Clone, Debug)]
pub struct Tileset {
    model: ColorModel,
    short_side_len: usize,
    num_color: [usize; 6],
    image: RgbImage,
    horizontal: Vec<Tile>,
    vertical: Vec<Tile>,
}

impl Tileset {
    /// Build a tileset from explicitly specified tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the module size is zero, a tile rectangle
    /// leaves the bitmap, or a color tag is outside its slot's color count.
    pub fn from_parts(
        model: ColorModel,
        short_side_len: usize,
        num_color: [usize; 6],
        image: RgbImage,
        horizontal: Vec<Tile>,
        vertical: Vec<Tile>,
    ) -> Result<Self> {
        if short_side_len == 0 {
            return Err(invalid_config(
                "short_side_len",
                &short_side_len,
                &"must be positive",
            ));
        }
        let tileset = Self {
            model,
            short_side_len,
            num_color,
            image,
            horizontal,
            vertical,
        };
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for tile in tileset.tiles(orientation) {
                tileset.check_tile(orientation, tile)?;
            }
        }
        Ok(tileset)
    }

    fn check_tile(&self, orientation: Orientation, tile: &Tile) -> Result<()> {
        let (w, h) = orientation.tile_size(self.short_side_len);
        if tile.x + w > self.image.width() as usize || tile.y + h > self.image.height() as usize {
            return Err(invalid_config(
                "tile",
                &format!("{orientation} at ({}, {})", tile.x, tile.y),
                &format!(
                    "{w}x{h} rectangle leaves the {}x{} bitmap",
                    self.image.width(),
                    self.image.height()
                ),
            ));
        }
        for (&color, &slot) in tile.colors.iter().zip(orientation.slots(self.model)) {
            let count = self.num_color.get(slot).copied().unwrap_or(0);
            let in_range = usize::try_from(color).is_ok_and(|color| color < count);
            if !in_range {
                return Err(invalid_config(
                    "tile",
                    &format!("{orientation} colors {:?}", tile.colors),
                    &format!("tag {color} is outside slot {slot} with {count} colors"),
                ));
            }
        }
        Ok(())
    }

    /// Edge or corner colored
    pub const fn model(&self) -> ColorModel {
        self.model
    }

    /// Whether this is a corner-colored tileset
    pub const fn is_corner(&self) -> bool {
        matches!(self.model, ColorModel::Corner)
    }

    /// Module size in pixels
    pub const fn short_side_len(&self) -> usize {
        self.short_side_len
    }

    /// Colors per boundary slot
    pub const fn num_color(&self) -> &[usize; 6] {
        &self.num_color
    }

    /// Source bitmap the tiles are copied from
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Horizontal `2n x n` tiles
    pub fn horizontal_tiles(&self) -> &[Tile] {
        &self.horizontal
    }

    /// Vertical `n x 2n` tiles
    pub fn vertical_tiles(&self) -> &[Tile] {
        &self.vertical
    }

    /// Tiles of one orientation
    pub fn tiles(&self, orientation: Orientation) -> &[Tile] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
}

struct TileCollector {
    horizontal: Vec<Tile>,
    vertical: Vec<Tile>,
}

impl TemplateVisitor for TileCollector {
    fn visit(&mut self, orientation: Orientation, x: usize, y: usize, colors: [u8; 6]) {
        let tile = Tile {
            colors: colors.map(|c| c as i8),
            x: x + 1,
            y: y + 1,
        };
        match orientation {
            Orientation::Horizontal => self.horizontal.push(tile),
            Orientation::Vertical => self.vertical.push(tile),
        }
    }
}

/// Parse a filled-in template into a tileset
///
/// The header in the first row determines the configuration; tiles are then
/// enumerated in the same order the template was drawn.
///
/// # Errors
///
/// Returns `ImageTooSmall` if the image cannot carry a header or is smaller
/// than the layout the header describes, and `BadHeader` if the header
/// decodes to an out-of-range configuration.
pub fn build_tileset_from_image(mut image: RgbImage) -> Result<Tileset> {
    let header = TemplateHeader::decode(&PixelsMut::from_rgb_image(&mut image))?;
    let config: TileConfig = header.to_config();
    let layout = compute_template_size(&config);
    let (width, height) = (image.width() as usize, image.height() as usize);

    // Tile counts come from an untrusted header, so reserve only once the
    // image is known to hold them
    if width < layout.width || height < layout.height {
        return Err(HerringboneError::ImageTooSmall {
            required: (layout.width, layout.height),
            actual: (width, height),
        });
    }

    let mut collector = TileCollector {
        horizontal: Vec::with_capacity(layout.horizontal_count),
        vertical: Vec::with_capacity(layout.vertical_count),
    };
    walk_template(&config, width, height, &mut collector)?;

    log::debug!(
        "parsed {:?} tileset: {} horizontal, {} vertical tiles, module size {}",
        config.model,
        collector.horizontal.len(),
        collector.vertical.len(),
        config.short_side_len
    );

    Ok(Tileset {
        model: config.model,
        short_side_len: config.short_side_len,
        num_color: config.num_color,
        image,
        horizontal: collector.horizontal,
        vertical: collector.vertical,
    })
}
