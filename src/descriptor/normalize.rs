//! Overlapping block grouping and normalization.
//!
//! Each block concatenates the histograms of a `block_w × block_h` window of
//! cells in row-major cell order, then rescales the vector per the selected
//! [`BlockNorm`]. Blocks slide with stride 1 cell, so adjacent blocks share
//! all but one row/column of cells.
//!
//! [`NORM_EPS`] keeps all-zero blocks (uniform image regions) well-defined:
//! they normalize to the zero vector, never NaN.
use super::geometry::HogGeometry;
use super::histogram::CellGrid;
use super::params::{BlockNorm, L2_HYS_CLIP, NORM_EPS};

/// Row-major grid of normalized block vectors, bins innermost.
#[derive(Clone, Debug)]
pub struct BlockGrid {
    /// Number of blocks along x
    pub blocks_x: usize,
    /// Number of blocks along y
    pub blocks_y: usize,
    /// Floats per block vector
    pub block_len: usize,
    /// `blocks_y · blocks_x · block_len` values
    pub data: Vec<f32>,
}

impl BlockGrid {
    /// Borrow the normalized vector of block `(bx, by)`.
    #[inline]
    pub fn block(&self, bx: usize, by: usize) -> &[f32] {
        let start = (by * self.blocks_x + bx) * self.block_len;
        &self.data[start..start + self.block_len]
    }
}

/// Group cells into overlapping blocks and normalize each block vector.
///
/// A cell grid smaller than one block in either dimension produces an empty
/// grid, which is a valid result.
pub fn normalized_blocks(cells: &CellGrid, geom: &HogGeometry, norm: BlockNorm) -> BlockGrid {
    let block_len = geom.block_len();
    let mut data = vec![0.0f32; geom.descriptor_len()];

    if !data.is_empty() {
        let row_len = geom.blocks_x * block_len;
        fill_rows(&mut data, row_len, cells, geom, norm);
    }

    BlockGrid {
        blocks_x: geom.blocks_x,
        blocks_y: geom.blocks_y,
        block_len,
        data,
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(data: &mut [f32], row_len: usize, cells: &CellGrid, geom: &HogGeometry, norm: BlockNorm) {
    use rayon::prelude::*;

    data.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(by, row)| fill_block_row(row, by, cells, geom, norm));
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(data: &mut [f32], row_len: usize, cells: &CellGrid, geom: &HogGeometry, norm: BlockNorm) {
    for (by, row) in data.chunks_mut(row_len).enumerate() {
        fill_block_row(row, by, cells, geom, norm);
    }
}

fn fill_block_row(row: &mut [f32], by: usize, cells: &CellGrid, geom: &HogGeometry, norm: BlockNorm) {
    let block_len = geom.block_len();
    for bx in 0..geom.blocks_x {
        let block = &mut row[bx * block_len..(bx + 1) * block_len];
        for iy in 0..geom.block_h {
            for ix in 0..geom.block_w {
                let hist = cells.histogram(bx + ix, by + iy);
                let head = (iy * geom.block_w + ix) * geom.orientations;
                block[head..head + geom.orientations].copy_from_slice(hist);
            }
        }
        apply_norm(block, norm);
    }
}

/// Rescale one block vector in place.
pub fn apply_norm(v: &mut [f32], norm: BlockNorm) {
    match norm {
        BlockNorm::L1 => {
            let scale = l1_norm(v) + NORM_EPS;
            for x in v.iter_mut() {
                *x /= scale;
            }
        }
        BlockNorm::L1Sqrt => {
            let scale = l1_norm(v) + NORM_EPS;
            for x in v.iter_mut() {
                *x = (*x / scale).sqrt();
            }
        }
        BlockNorm::L2 => {
            l2_scale(v);
        }
        BlockNorm::L2Hys => {
            l2_scale(v);
            for x in v.iter_mut() {
                *x = x.clamp(0.0, L2_HYS_CLIP);
            }
            l2_scale(v);
        }
    }
}

#[inline]
fn l1_norm(v: &[f32]) -> f32 {
    // Histogram weights are non-negative, so no abs() is needed.
    v.iter().sum()
}

#[inline]
fn l2_scale(v: &mut [f32]) {
    let sum_sq: f32 = v.iter().map(|x| x * x).sum();
    let scale = (sum_sq + NORM_EPS * NORM_EPS).sqrt();
    for x in v.iter_mut() {
        *x /= scale;
    }
}
