//! Mutable RGB pixel views over caller-owned buffers

use crate::io::error::{HerringboneError, Result};
use image::RgbImage;

/// Bytes per RGB pixel
pub const CHANNELS: usize = 3;

/// Row-major RGB buffer view with an explicit row stride in bytes
#[derive(Debug)]
pub struct PixelsMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelsMut<'a> {
    /// Wrap a raw buffer
    ///
    /// # Errors
    ///
    /// Returns `BufferMismatch` if the stride is shorter than a row of
    /// pixels or the buffer cannot hold `height` rows.
    pub fn new(data: &'a mut [u8], width: usize, height: usize, stride: usize) -> Result<Self> {
        let row_bytes = width * CHANNELS;
        if stride < row_bytes {
            return Err(HerringboneError::BufferMismatch {
                reason: format!("stride {stride} is shorter than a row of {width} pixels"),
            });
        }
        let required = if height == 0 {
            0
        } else {
            stride * (height - 1) + row_bytes
        };
        if data.len() < required {
            return Err(HerringboneError::BufferMismatch {
                reason: format!(
                    "buffer holds {} bytes, {width}x{height} with stride {stride} needs {required}",
                    data.len()
                ),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// View an `RgbImage` as a tightly packed buffer
    pub fn from_rgb_image(image: &'a mut RgbImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        Self {
            data: &mut **image,
            width,
            height,
            stride: width * CHANNELS,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bytes
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: [u8; 3]) {
        for y in 0..self.height {
            if let Some(row) = self.row_mut(y) {
                for pixel in row.chunks_exact_mut(CHANNELS) {
                    pixel.copy_from_slice(&color);
                }
            }
        }
    }

    /// Write one pixel; coordinates outside the view are ignored
    pub fn put(&mut self, x: isize, y: isize, color: [u8; 3]) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x >= self.width || y >= self.height {
            return;
        }
        let start = y * self.stride + x * CHANNELS;
        if let Some(pixel) = self.data.get_mut(start..start + CHANNELS) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Read one pixel
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y * self.stride + x * CHANNELS;
        self.data.get(start..start + CHANNELS)?.try_into().ok()
    }

    /// Pixel bytes of one row, without stride padding
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get(start..start + self.width * CHANNELS)
    }

    /// Mutable pixel bytes of one row, without stride padding
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get_mut(start..start + self.width * CHANNELS)
    }

    /// Copy a `width x height` block of `source` into this view at `(x, y)`
    ///
    /// `source` is tightly packed with `source_width` pixels per row and the
    /// block starts at `origin` inside it. Parts of the block falling outside
    /// this view are clipped.
    pub fn blit(
        &mut self,
        source: &[u8],
        source_width: usize,
        origin: (usize, usize),
        size: (usize, usize),
        x: i64,
        y: i64,
    ) {
        let (block_width, block_height) = size;
        let view_width = self.width as i64;
        let view_height = self.height as i64;

        let first_col = (-x).clamp(0, block_width as i64) as usize;
        let last_col = (view_width - x).clamp(0, block_width as i64) as usize;
        if first_col >= last_col {
            return;
        }
        let span = (last_col - first_col) * CHANNELS;
        let dest_x = (x + first_col as i64) as usize;

        for j in 0..block_height {
            let dest_y = y + j as i64;
            if dest_y < 0 || dest_y >= view_height {
                continue;
            }
            let src_start = ((origin.1 + j) * source_width + origin.0 + first_col) * CHANNELS;
            let Some(src_row) = source.get(src_start..src_start + span) else {
                continue;
            };
            let dest_start = dest_y as usize * self.stride + dest_x * CHANNELS;
            if let Some(dest_row) = self.data.get_mut(dest_start..dest_start + span) {
                dest_row.copy_from_slice(src_row);
            }
        }
    }
}
