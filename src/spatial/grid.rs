//! Working color grids for one map generation
//!
//! Three layers of signed color tags indexed by module row and column:
//! corner colors for corner tilesets, horizontal-edge and vertical-edge
//! colors for edge tilesets. `-1` marks an unconstrained cell.

use ndarray::Array2;

/// Cell value meaning "no color chosen yet"
pub const UNCONSTRAINED: i8 = -1;

/// Layer of the working grid a constraint cell lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Corner colors
    Corner,
    /// Colors of horizontal edges
    HorizontalEdge,
    /// Colors of vertical edges
    VerticalEdge,
}

/// Scratch grids owned by a generator and reset before every map
#[derive(Debug, Clone)]
pub struct ColorGrid {
    corner: Array2<i8>,
    horizontal: Array2<i8>,
    vertical: Array2<i8>,
}

impl Default for ColorGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ColorGrid {
    /// Create grids of `rows x cols` unconstrained cells
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            corner: Array2::from_elem((rows, cols), UNCONSTRAINED),
            horizontal: Array2::from_elem((rows, cols), UNCONSTRAINED),
            vertical: Array2::from_elem((rows, cols), UNCONSTRAINED),
        }
    }

    /// Resize if needed and clear every cell to unconstrained
    ///
    /// The allocation is kept when the dimensions are unchanged.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        if self.dimensions() == (rows, cols) {
            self.corner.fill(UNCONSTRAINED);
            self.horizontal.fill(UNCONSTRAINED);
            self.vertical.fill(UNCONSTRAINED);
        } else {
            *self = Self::new(rows, cols);
        }
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.corner.dim()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.dimensions().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.dimensions().1
    }

    const fn layer(&self, layer: Layer) -> &Array2<i8> {
        match layer {
            Layer::Corner => &self.corner,
            Layer::HorizontalEdge => &self.horizontal,
            Layer::VerticalEdge => &self.vertical,
        }
    }

    const fn layer_mut(&mut self, layer: Layer) -> &mut Array2<i8> {
        match layer {
            Layer::Corner => &mut self.corner,
            Layer::HorizontalEdge => &mut self.horizontal,
            Layer::VerticalEdge => &mut self.vertical,
        }
    }

    /// Read a cell; cells outside the grid read as unconstrained
    pub fn get(&self, layer: Layer, row: isize, col: isize) -> i8 {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return UNCONSTRAINED;
        };
        self.layer(layer)
            .get([row, col])
            .copied()
            .unwrap_or(UNCONSTRAINED)
    }

    /// Write a cell; writes outside the grid are dropped
    pub fn set(&mut self, layer: Layer, row: isize, col: isize, value: i8) {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return;
        };
        if let Some(cell) = self.layer_mut(layer).get_mut([row, col]) {
            *cell = value;
        }
    }

    /// Whether the corner cell at `(row, col)` equals its lower-right neighbor
    pub fn diagonal_match(&self, row: usize, col: usize) -> bool {
        let corner = &self.corner;
        match (corner.get([row, col]), corner.get([row + 1, col + 1])) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
