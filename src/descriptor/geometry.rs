//! Cell and block grid shapes derived from parameters and image size.
//!
//! Validation happens when [`HogParams`] are checked; geometry methods assume
//! the parameters they were built from are valid.
use super::params::HogParams;

/// Derived grid shapes for one image size.
///
/// Cells tile the image without overlap using floor division; remainder
/// pixels at the right/bottom edge belong to no cell. Blocks slide over the
/// cell grid with stride 1 and must fit entirely, so a cell grid smaller
/// than one block yields zero blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HogGeometry {
    /// Number of cells along x: `⌊W / cell_w⌋`
    pub cells_x: usize,
    /// Number of cells along y: `⌊H / cell_h⌋`
    pub cells_y: usize,
    /// Number of blocks along x: `cells_x − block_w + 1`, zero if negative
    pub blocks_x: usize,
    /// Number of blocks along y: `cells_y − block_h + 1`, zero if negative
    pub blocks_y: usize,
    /// Orientation bins per cell histogram
    pub orientations: usize,
    /// Cell width in pixels
    pub cell_w: usize,
    /// Cell height in pixels
    pub cell_h: usize,
    /// Block width in cells
    pub block_w: usize,
    /// Block height in cells
    pub block_h: usize,
}

impl HogGeometry {
    /// Derive grid shapes for an image of the given size.
    pub fn from_params(params: &HogParams, width: usize, height: usize) -> Self {
        let (cell_w, cell_h) = params.pixels_per_cell;
        let (block_w, block_h) = params.cells_per_block;
        let cells_x = width / cell_w;
        let cells_y = height / cell_h;
        Self {
            cells_x,
            cells_y,
            blocks_x: (cells_x + 1).saturating_sub(block_w),
            blocks_y: (cells_y + 1).saturating_sub(block_h),
            orientations: params.orientations,
            cell_w,
            cell_h,
            block_w,
            block_h,
        }
    }

    /// Length of the cell histogram grid storage in floats.
    pub fn cell_grid_len(&self) -> usize {
        self.cells_y * self.cells_x * self.orientations
    }

    /// Length of one normalized block vector in floats.
    pub fn block_len(&self) -> usize {
        self.block_h * self.block_w * self.orientations
    }

    /// Total descriptor length in floats.
    pub fn descriptor_len(&self) -> usize {
        self.blocks_y * self.blocks_x * self.block_len()
    }
}
