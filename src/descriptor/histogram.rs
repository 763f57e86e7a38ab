//! Per-cell orientation histograms with soft (interpolated) voting.
//!
//! Each pixel votes its gradient magnitude into the two orientation bins
//! whose centers are nearest, split linearly by angular distance. A pixel
//! sitting exactly on a bin center votes its full magnitude into that bin.
//! Bin indices wrap modulo the bin count at the range boundary, so an
//! orientation just below 180° interpolates toward bin 0.
//!
//! Hard binning would introduce discontinuities as orientations cross bin
//! edges and produces materially different descriptors; the interpolated
//! vote conserves total magnitude per cell exactly.
//!
//! Accumulation order is fixed (cells row-major, pixels within a cell
//! row-major) so repeated runs are bit-identical.
use super::geometry::HogGeometry;
use crate::gradient::GradientField;

/// Row-major grid of per-cell orientation histograms, bins innermost.
#[derive(Clone, Debug)]
pub struct CellGrid {
    /// Number of cells along x
    pub cells_x: usize,
    /// Number of cells along y
    pub cells_y: usize,
    /// Bins per histogram
    pub orientations: usize,
    /// `cells_y · cells_x · orientations` bin weights
    pub data: Vec<f32>,
}

impl CellGrid {
    /// Borrow the histogram of cell `(cx, cy)`.
    #[inline]
    pub fn histogram(&self, cx: usize, cy: usize) -> &[f32] {
        let start = (cy * self.cells_x + cx) * self.orientations;
        &self.data[start..start + self.orientations]
    }
}

/// Indices and weights distributing one vote between two wrapped bins.
struct BinSplit {
    bins: [usize; 2],
    weights: [f32; 2],
}

impl BinSplit {
    /// Split an orientation between the two nearest bin centers.
    ///
    /// Bin `k` is centered at `(k + 0.5) · bin_width`; positions below the
    /// first center or above the last wrap around the range boundary.
    #[inline]
    fn from_orientation(ori_deg: f32, bin_width_deg: f32, bins: usize) -> Self {
        let pos = ori_deg / bin_width_deg - 0.5;
        let floor = pos.floor();
        let frac = pos - floor;
        let lo = if floor < 0.0 {
            bins - 1
        } else {
            (floor as usize) % bins
        };
        let hi = (lo + 1) % bins;
        Self {
            bins: [lo, hi],
            weights: [1.0 - frac, frac],
        }
    }
}

/// Accumulate the orientation histogram of every cell.
///
/// Remainder pixels beyond the last full cell in either direction never
/// vote; partial cells do not exist.
pub fn cell_histograms(grad: &GradientField, geom: &HogGeometry, bin_width_deg: f32) -> CellGrid {
    let mut data = vec![0.0f32; geom.cell_grid_len()];
    for cy in 0..geom.cells_y {
        for cx in 0..geom.cells_x {
            let head = (cy * geom.cells_x + cx) * geom.orientations;
            let hist = &mut data[head..head + geom.orientations];
            for y in cy * geom.cell_h..(cy + 1) * geom.cell_h {
                let mag_row = grad.mag.row(y);
                let ori_row = grad.ori_deg.row(y);
                for x in cx * geom.cell_w..(cx + 1) * geom.cell_w {
                    let split =
                        BinSplit::from_orientation(ori_row[x], bin_width_deg, geom.orientations);
                    hist[split.bins[0]] += split.weights[0] * mag_row[x];
                    hist[split.bins[1]] += split.weights[1] * mag_row[x];
                }
            }
        }
    }
    CellGrid {
        cells_x: geom.cells_x,
        cells_y: geom.cells_y,
        orientations: geom.orientations,
        data,
    }
}
