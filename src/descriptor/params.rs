//! Parameter types and validation for the HOG extractor.
//!
//! Defaults follow the common reference configuration: 9 orientation bins,
//! 8×8-pixel cells, 3×3-cell blocks, L1 block normalization, unsigned
//! gradients.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constant added to block norms so all-zero blocks divide to zero vectors
/// instead of NaN.
pub const NORM_EPS: f32 = 1e-5;

/// Ceiling applied to every element between the two L2 passes of
/// [`BlockNorm::L2Hys`].
pub const L2_HYS_CLIP: f32 = 0.2;

/// Block normalization scheme.
///
/// Serialized names match the reference spellings `"L1"`, `"L1-sqrt"`,
/// `"L2"` and `"L2-Hys"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockNorm {
    /// `v / (‖v‖₁ + ε)`
    #[serde(rename = "L1")]
    L1,
    /// Element-wise square root after L1 normalization.
    #[serde(rename = "L1-sqrt")]
    L1Sqrt,
    /// `v / sqrt(‖v‖₂² + ε²)`
    #[serde(rename = "L2")]
    L2,
    /// L2-normalize, clip to [`L2_HYS_CLIP`], L2-normalize again.
    #[serde(rename = "L2-Hys")]
    L2Hys,
}

impl BlockNorm {
    /// Canonical name, matching the serialized spelling.
    pub fn name(&self) -> &'static str {
        match self {
            BlockNorm::L1 => "L1",
            BlockNorm::L1Sqrt => "L1-sqrt",
            BlockNorm::L2 => "L2",
            BlockNorm::L2Hys => "L2-Hys",
        }
    }
}

impl FromStr for BlockNorm {
    type Err = InvalidParams;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L1" => Ok(BlockNorm::L1),
            "L1-sqrt" => Ok(BlockNorm::L1Sqrt),
            "L2" => Ok(BlockNorm::L2),
            "L2-Hys" => Ok(BlockNorm::L2Hys),
            other => Err(InvalidParams::UnknownBlockNorm {
                name: other.to_string(),
            }),
        }
    }
}

/// Extractor parameters.
///
/// `pixels_per_cell` and `cells_per_block` are `(x, y)` pairs. Geometry that
/// does not fit the image (a cell grid smaller than one block) is not a
/// parameter error; it produces an empty descriptor.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HogParams {
    /// Number of orientation bins.
    pub orientations: usize,
    /// Cell size in pixels, `(x, y)`.
    pub pixels_per_cell: (usize, usize),
    /// Block size in cells, `(x, y)`. Blocks overlap with stride 1 cell.
    pub cells_per_block: (usize, usize),
    /// Block normalization scheme.
    pub block_norm: BlockNorm,
    /// Treat opposite gradient directions as distinct (range `[0, 360)`)
    /// instead of identified (range `[0, 180)`).
    pub signed: bool,
    /// Apply power-law compression (element-wise square root) to the input
    /// before gradient computation. Requires non-negative samples.
    pub transform_sqrt: bool,
}

impl Default for HogParams {
    fn default() -> Self {
        Self {
            orientations: 9,
            pixels_per_cell: (8, 8),
            cells_per_block: (3, 3),
            block_norm: BlockNorm::L1,
            signed: false,
            transform_sqrt: false,
        }
    }
}

impl HogParams {
    /// Check all counts and sizes are positive. Fails fast before any
    /// computation.
    pub fn validate(&self) -> Result<(), InvalidParams> {
        if self.orientations == 0 {
            return Err(InvalidParams::NonPositiveOrientations);
        }
        let (cw, ch) = self.pixels_per_cell;
        if cw == 0 || ch == 0 {
            return Err(InvalidParams::NonPositiveCellSize { x: cw, y: ch });
        }
        let (bw, bh) = self.cells_per_block;
        if bw == 0 || bh == 0 {
            return Err(InvalidParams::NonPositiveBlockSize { x: bw, y: bh });
        }
        Ok(())
    }

    /// Full orientation range in degrees: 180 unsigned, 360 signed.
    pub fn orientation_range_deg(&self) -> f32 {
        if self.signed {
            360.0
        } else {
            180.0
        }
    }

    /// Angular width of one histogram bin in degrees.
    pub fn bin_width_deg(&self) -> f32 {
        self.orientation_range_deg() / self.orientations as f32
    }
}

/// Parameter or input violations detected before any computation runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidParams {
    NonPositiveDimension { width: usize, height: usize },
    NonPositiveOrientations,
    NonPositiveCellSize { x: usize, y: usize },
    NonPositiveBlockSize { x: usize, y: usize },
    UnknownBlockNorm { name: String },
}

impl fmt::Display for InvalidParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParams::NonPositiveDimension { width, height } => {
                write!(f, "image dimensions must be positive ({width}×{height})")
            }
            InvalidParams::NonPositiveOrientations => {
                write!(f, "orientation bin count must be positive")
            }
            InvalidParams::NonPositiveCellSize { x, y } => {
                write!(f, "pixels_per_cell must be positive ({x}, {y})")
            }
            InvalidParams::NonPositiveBlockSize { x, y } => {
                write!(f, "cells_per_block must be positive ({x}, {y})")
            }
            InvalidParams::UnknownBlockNorm { name } => {
                write!(f, "unknown block normalization {name:?}")
            }
        }
    }
}

impl std::error::Error for InvalidParams {}
