use crate::{
    algorithm::repetition::{assign_corner_colors, reduce_repetition},
    algorithm::selection::choose_tile,
    algorithm::weighting::Weighting,
    codec::tileset::Tileset,
    io::configuration::{DEFAULT_MAX_MODULES_X, DEFAULT_MAX_MODULES_Y, GRID_MARGIN},
    io::error::{HerringboneError, Result},
    spatial::config::{ColorModel, Orientation},
    spatial::grid::{ColorGrid, Layer},
    spatial::pixels::PixelsMut,
};
use image::RgbImage;
use rand::Rng;

/// Generator limits and switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Largest map size in modules (x, y), excluding the grid margin
    pub max_modules: (usize, usize),
    /// Whether corner tilesets get the repetition reduction pass
    pub reduce_repetition: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_modules: (DEFAULT_MAX_MODULES_X, DEFAULT_MAX_MODULES_Y),
            reduce_repetition: true,
        }
    }
}

/// One tile drawn into the output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Orientation of the placed tile
    pub orientation: Orientation,
    /// Output x of the tile's left edge; may be negative
    pub x: i64,
    /// Output y of the tile's top edge
    pub y: i64,
    /// Index into the tileset's list for this orientation
    pub tile_index: usize,
    /// Color tags of the placed tile
    pub colors: [i8; 6],
}

// Grid cell (layer, row offset, column offset) behind each tag a..f
type CellMap = [(Layer, usize, usize); 6];

const CORNER_HORIZONTAL_CELLS: CellMap = [
    (Layer::Corner, 0, 0),
    (Layer::Corner, 0, 1),
    (Layer::Corner, 0, 2),
    (Layer::Corner, 1, 0),
    (Layer::Corner, 1, 1),
    (Layer::Corner, 1, 2),
];
const CORNER_VERTICAL_CELLS: CellMap = [
    (Layer::Corner, 0, 3),
    (Layer::Corner, 1, 3),
    (Layer::Corner, 2, 3),
    (Layer::Corner, 0, 4),
    (Layer::Corner, 1, 4),
    (Layer::Corner, 2, 4),
];
const EDGE_HORIZONTAL_CELLS: CellMap = [
    (Layer::HorizontalEdge, 0, 0),
    (Layer::HorizontalEdge, 0, 1),
    (Layer::VerticalEdge, 0, 0),
    (Layer::VerticalEdge, 0, 2),
    (Layer::HorizontalEdge, 1, 0),
    (Layer::HorizontalEdge, 1, 1),
];
const EDGE_VERTICAL_CELLS: CellMap = [
    (Layer::HorizontalEdge, 0, 3),
    (Layer::VerticalEdge, 0, 3),
    (Layer::VerticalEdge, 0, 4),
    (Layer::VerticalEdge, 1, 3),
    (Layer::VerticalEdge, 1, 4),
    (Layer::HorizontalEdge, 2, 3),
];

const fn cell_map(model: ColorModel, orientation: Orientation) -> &'static CellMap {
    match (model, orientation) {
        (ColorModel::Corner, Orientation::Horizontal) => &CORNER_HORIZONTAL_CELLS,
        (ColorModel::Corner, Orientation::Vertical) => &CORNER_VERTICAL_CELLS,
        (ColorModel::Edge, Orientation::Horizontal) => &EDGE_HORIZONTAL_CELLS,
        (ColorModel::Edge, Orientation::Vertical) => &EDGE_VERTICAL_CELLS,
    }
}

/// Herringbone map generator with its own working grid and random source
///
/// The grid is sized and cleared at the start of every call, so one
/// generator can produce any number of maps. Separate generators share
/// nothing and may run on separate threads.
pub struct HerringboneGenerator<R> {
    config: GeneratorConfig,
    rng: R,
    grid: ColorGrid,
    placements: Vec<Placement>,
}

impl<R: Rng> HerringboneGenerator<R> {
    /// Create a generator drawing from `rng`
    pub fn new(config: GeneratorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            grid: ColorGrid::default(),
            placements: Vec::new(),
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Tiles drawn by the last successful call, in placement order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Hand back the random source
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Fill `output` with a herringbone map built from `tileset`
    ///
    /// # Errors
    ///
    /// Returns `OutputTooLarge` if the output exceeds the configured module
    /// limits, `InvalidWeighting` if `weighting` does not fit the tileset and
    /// `NoMatchingTile` if the tileset lacks a tile for some combination of
    /// boundary colors. On error the output may be partially written.
    pub fn generate(
        &mut self,
        tileset: &Tileset,
        weighting: Option<&Weighting>,
        output: &mut PixelsMut<'_>,
    ) -> Result<()> {
        self.generate_with_progress(tileset, weighting, output, |_, _| {})
    }

    /// [`Self::generate`] reporting `(rows_done, rows_total)` after each
    /// herringbone row
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`].
    pub fn generate_with_progress<F>(
        &mut self,
        tileset: &Tileset,
        weighting: Option<&Weighting>,
        output: &mut PixelsMut<'_>,
        mut on_row: F,
    ) -> Result<()>
    where
        F: FnMut(usize, usize),
    {
        let len = tileset.short_side_len();
        let (width, height) = (output.width(), output.height());
        let (cols, rows) = self.grid_size(width, height, len)?;
        if let Some(weighting) = weighting {
            weighting.validate(tileset)?;
        }

        self.grid.reset(rows, cols);
        self.placements.clear();

        if tileset.is_corner() {
            let num_color = tileset.num_color();
            assign_corner_colors(&mut self.grid, &mut self.rng, num_color, weighting);
            if self.config.reduce_repetition {
                let recolored =
                    reduce_repetition(&mut self.grid, &mut self.rng, num_color, weighting);
                log::trace!("repetition reduction recolored {recolored} corners");
            }
        }

        let len = len as i64;
        let (width, height) = (width as i64, height as i64);
        // Rows start one module above the output; the last one starts below h - len
        let total_rows = (height + len - 1) / len + 1;
        let mut j = -1i64;
        while j * len < height {
            self.sweep_row(tileset, weighting, output, j, len, width)
                .inspect_err(|err| log::warn!("generation stopped: {err}"))?;
            on_row((j + 2) as usize, total_rows as usize);
            j += 1;
        }

        log::debug!(
            "generated {width}x{height} map with {} tiles",
            self.placements.len()
        );
        Ok(())
    }

    /// Generate a freshly allocated `width x height` map
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`].
    pub fn generate_image(
        &mut self,
        tileset: &Tileset,
        weighting: Option<&Weighting>,
        width: u32,
        height: u32,
    ) -> Result<RgbImage> {
        let mut image = RgbImage::new(width, height);
        self.generate(tileset, weighting, &mut PixelsMut::from_rgb_image(&mut image))?;
        Ok(image)
    }

    // Working grid size in modules (cols, rows), margin included
    fn grid_size(&self, width: usize, height: usize, len: usize) -> Result<(usize, usize)> {
        let requested = (width / len + GRID_MARGIN, height / len + GRID_MARGIN);
        let (max_x, max_y) = self.config.max_modules;
        let maximum = (max_x + GRID_MARGIN, max_y + GRID_MARGIN);
        if requested.0 > maximum.0 || requested.1 > maximum.1 {
            return Err(HerringboneError::OutputTooLarge { requested, maximum });
        }
        Ok(requested)
    }

    // One herringbone row: a horizontal tile then a vertical tile every four modules
    fn sweep_row(
        &mut self,
        tileset: &Tileset,
        weighting: Option<&Weighting>,
        output: &mut PixelsMut<'_>,
        j: i64,
        len: i64,
        width: i64,
    ) -> Result<()> {
        let y = j * len;
        let phase = j & 3;
        let mut i = if phase == 0 { 0 } else { phase - 4 };
        while i * len < width {
            let x = i * len;
            if x + 2 * len >= 0 && y >= 0 {
                self.place(tileset, weighting, output, Orientation::Horizontal, (i, j), (x, y))?;
            }
            let x = x + 3 * len;
            if x < width {
                self.place(tileset, weighting, output, Orientation::Vertical, (i, j), (x, y))?;
            }
            i += 4;
        }
        Ok(())
    }

    fn place(
        &mut self,
        tileset: &Tileset,
        weighting: Option<&Weighting>,
        output: &mut PixelsMut<'_>,
        orientation: Orientation,
        (i, j): (i64, i64),
        (x, y): (i64, i64),
    ) -> Result<()> {
        let cells = cell_map(tileset.model(), orientation);
        let (base_row, base_col) = ((j + 2) as isize, (i + 2) as isize);
        let mut constraints = cells.map(|(layer, dr, dc)| {
            self.grid
                .get(layer, base_row + dr as isize, base_col + dc as isize)
        });

        let tiles = tileset.tiles(orientation);
        let slots = orientation.slots(tileset.model());
        let Some(tile_index) =
            choose_tile(&mut self.rng, tiles, &mut constraints, slots, weighting)
        else {
            return Err(HerringboneError::NoMatchingTile {
                orientation,
                position: (x, y),
                constraints,
            });
        };

        for (&(layer, dr, dc), &color) in cells.iter().zip(&constraints) {
            self.grid
                .set(layer, base_row + dr as isize, base_col + dc as isize, color);
        }

        if let Some(tile) = tiles.get(tile_index) {
            let source = tileset.image();
            output.blit(
                source.as_raw(),
                source.width() as usize,
                (tile.x, tile.y),
                orientation.tile_size(tileset.short_side_len()),
                x,
                y,
            );
            self.placements.push(Placement {
                orientation,
                x,
                y,
                tile_index,
                colors: tile.colors,
            });
        }
        Ok(())
    }
}

/// Fill `output` using a default-configured generator and `rng`
///
/// # Errors
///
/// Same as [`HerringboneGenerator::generate`].
pub fn generate_image<R>(
    tileset: &Tileset,
    weighting: Option<&Weighting>,
    output: &mut PixelsMut<'_>,
    rng: &mut R,
) -> Result<()>
where
    R: Rng + ?Sized,
{
    HerringboneGenerator::new(GeneratorConfig::default(), rng).generate(tileset, weighting, output)
}
