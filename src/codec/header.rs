//! Binary header embedded in the first pixel row of a template
//!
//! Nine bytes are stored backwards from the last byte of row 0, each XORed
//! with `i * 55` so the header reads as noise rather than a solid block.

use crate::io::configuration::{
    CORNER_MARKER, HEADER_LEN, HEADER_SCRAMBLE, MAX_HEADER_COLORS, MAX_VARIATIONS,
};
use crate::io::error::{HerringboneError, Result, bad_header};
use crate::spatial::config::{ColorModel, CornerMarkup, TileConfig};
use crate::spatial::pixels::{CHANNELS, PixelsMut};

/// Tileset parameters recoverable from a template image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateHeader {
    /// Edge or corner colored
    pub model: ColorModel,
    /// Colors per slot; unused slots are zero
    pub num_color: [usize; 6],
    /// Variations along the template x axis
    pub num_vary_x: usize,
    /// Variations along the template y axis
    pub num_vary_y: usize,
    /// Module size in pixels
    pub short_side_len: usize,
}

impl TemplateHeader {
    /// Header describing a tile configuration
    pub const fn from_config(config: &TileConfig) -> Self {
        Self {
            model: config.model,
            num_color: config.num_color,
            num_vary_x: config.num_vary_x,
            num_vary_y: config.num_vary_y,
            short_side_len: config.short_side_len,
        }
    }

    /// Tile configuration for this header, with no corner markup
    pub fn to_config(&self) -> TileConfig {
        TileConfig {
            model: self.model,
            short_side_len: self.short_side_len,
            num_color: self.num_color,
            num_vary_x: self.num_vary_x,
            num_vary_y: self.num_vary_y,
            corner_markup: CornerMarkup::EMPTY,
        }
    }

    /// Number of header bytes carrying data for this model
    pub const fn byte_count(&self) -> usize {
        match self.model {
            ColorModel::Corner => HEADER_LEN - 1,
            ColorModel::Edge => HEADER_LEN,
        }
    }

    /// Plain (unscrambled) header bytes
    ///
    /// Values are truncated to a byte; callers validate the configuration
    /// first.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let c = self.num_color.map(|n| n as u8);
        let vx = self.num_vary_x as u8;
        let vy = self.num_vary_y as u8;
        let len = self.short_side_len as u8;
        match self.model {
            ColorModel::Corner => [c[0], c[1], c[2], c[3], vx, vy, len, CORNER_MARKER, 0],
            ColorModel::Edge => [c[0], c[1], c[2], c[3], c[4], c[5], vx, vy, len],
        }
    }

    /// Parse and validate plain header bytes
    ///
    /// # Errors
    ///
    /// Returns `BadHeader` if the module size is zero, a variation count
    /// exceeds 64, or a used slot declares zero or more than 32 colors.
    pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Result<Self> {
        let [c0, c1, c2, c3, c4, c5, b6, b7, b8] = bytes.map(usize::from);
        let header = if b7 == usize::from(CORNER_MARKER) {
            Self {
                model: ColorModel::Corner,
                num_color: [c0, c1, c2, c3, 0, 0],
                num_vary_x: c4,
                num_vary_y: c5,
                short_side_len: b6,
            }
        } else {
            Self {
                model: ColorModel::Edge,
                num_color: [c0, c1, c2, c3, c4, c5],
                num_vary_x: b6,
                num_vary_y: b7,
                short_side_len: b8,
            }
        };
        header.validate()?;
        Ok(header)
    }

    fn validate(&self) -> Result<()> {
        if self.short_side_len == 0 {
            return Err(bad_header(&"short side length is zero"));
        }
        if self.num_vary_x > MAX_VARIATIONS || self.num_vary_y > MAX_VARIATIONS {
            return Err(bad_header(&format!(
                "variation counts {}x{} exceed {MAX_VARIATIONS}",
                self.num_vary_x, self.num_vary_y
            )));
        }
        let used = self.model.slot_count();
        for (slot, &count) in self.num_color.iter().take(used).enumerate() {
            if count == 0 || count > MAX_HEADER_COLORS {
                return Err(bad_header(&format!(
                    "slot {slot} declares {count} colors, expected 1..={MAX_HEADER_COLORS}"
                )));
            }
        }
        Ok(())
    }

    /// Write the scrambled header at the end of row 0
    ///
    /// # Errors
    ///
    /// Returns `ImageTooSmall` if row 0 holds fewer than nine bytes.
    pub fn encode(&self, pixels: &mut PixelsMut<'_>) -> Result<()> {
        let error = too_small(pixels);
        let row = pixels
            .row_mut(0)
            .filter(|row| row.len() >= HEADER_LEN)
            .ok_or(error)?;
        let end = row.len();
        let used = self.byte_count();
        for (i, byte) in self.to_bytes().iter().enumerate() {
            if let Some(slot) = row.get_mut(end - 1 - i) {
                // Unused trailing bytes keep the pixel value underneath
                if i < used {
                    *slot = *byte;
                }
                *slot ^= scramble(i);
            }
        }
        Ok(())
    }

    /// Read and validate the header from the end of row 0
    ///
    /// # Errors
    ///
    /// Returns `ImageTooSmall` if row 0 holds fewer than nine bytes and
    /// `BadHeader` if the decoded fields are out of range.
    pub fn decode(pixels: &PixelsMut<'_>) -> Result<Self> {
        let row = pixels
            .row(0)
            .filter(|row| row.len() >= HEADER_LEN)
            .ok_or_else(|| too_small(pixels))?;
        let end = row.len();
        let mut bytes = [0u8; HEADER_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = row.get(end - 1 - i).copied().unwrap_or(0) ^ scramble(i);
        }
        Self::from_bytes(&bytes)
    }
}

const fn scramble(index: usize) -> u8 {
    (index as u8).wrapping_mul(HEADER_SCRAMBLE)
}

fn too_small(pixels: &PixelsMut<'_>) -> HerringboneError {
    HerringboneError::ImageTooSmall {
        required: (HEADER_LEN.div_ceil(CHANNELS), 1),
        actual: (pixels.width(), pixels.height()),
    }
}
