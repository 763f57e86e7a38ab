//! HOG extractor orchestrating the gradient → histogram → block pipeline.
//!
//! Overview
//! - Computes centered-difference gradients with magnitude and orientation.
//! - Accumulates per-cell orientation histograms with soft voting.
//! - Groups cells into overlapping blocks and normalizes each block vector.
//! - Flattens the blocks in row-major order into the final descriptor.
//! - Optionally renders the cell histograms as a diagnostic image.
//!
//! Modules
//! - [`params`] – configuration types, named constants and validation.
//! - [`geometry`] – cell/block grid shapes derived from an image size.
//! - [`histogram`] – soft-voted per-cell orientation histograms.
//! - [`normalize`] – overlapping block grouping and normalization.
//! - [`assemble`] – flattening into the feature vector.
//!
//! Typical usage:
//! ```
//! use hog_descriptor::{HogExtractor, HogParams};
//! use hog_descriptor::synth::sine_image;
//!
//! let image = sine_image(32, 32).unwrap();
//! let extractor = HogExtractor::new(HogParams::default()).unwrap();
//! let features = extractor.extract(&image).unwrap();
//! assert_eq!(features.descriptor.len(), extractor.descriptor_len(32, 32));
//! ```
pub mod assemble;
pub mod geometry;
pub mod histogram;
pub mod normalize;
pub mod params;

pub use geometry::HogGeometry;
pub use histogram::CellGrid;
pub use normalize::BlockGrid;
pub use params::{BlockNorm, HogParams, InvalidParams, L2_HYS_CLIP, NORM_EPS};

use crate::gradient::centered_gradients;
use crate::image::{ImageF32, ImageU8};
use crate::visualize::render_cell_histograms;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Extraction result: the flat feature vector plus optional diagnostics.
#[derive(Clone, Debug, Default, Serialize)]
pub struct HogFeatures {
    /// Normalized block vectors in block-grid row-major order.
    pub descriptor: Vec<f32>,
    /// Rendering of the cell histograms, when requested.
    #[serde(skip)]
    pub visualization: Option<ImageF32>,
    /// Wall-clock extraction time.
    pub latency_ms: f64,
}

/// HOG feature extractor with validated parameters.
///
/// Validation happens once in [`HogExtractor::new`]; extraction methods
/// assume the stored parameters are valid.
#[derive(Clone, Debug)]
pub struct HogExtractor {
    params: HogParams,
}

impl HogExtractor {
    /// Create an extractor, failing fast on invalid parameters.
    pub fn new(params: HogParams) -> Result<Self, InvalidParams> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The validated parameters.
    pub fn params(&self) -> &HogParams {
        &self.params
    }

    /// Grid shapes for an image of the given size.
    pub fn geometry(&self, width: usize, height: usize) -> HogGeometry {
        HogGeometry::from_params(&self.params, width, height)
    }

    /// Descriptor length for an image of the given size, without extracting.
    pub fn descriptor_len(&self, width: usize, height: usize) -> usize {
        self.geometry(width, height).descriptor_len()
    }

    /// Extract the descriptor from a single-channel float image.
    pub fn extract(&self, image: &ImageF32) -> Result<HogFeatures, InvalidParams> {
        self.extract_impl(image, false)
    }

    /// Extract the descriptor and render the cell histograms.
    pub fn extract_with_visualization(
        &self,
        image: &ImageF32,
    ) -> Result<HogFeatures, InvalidParams> {
        self.extract_impl(image, true)
    }

    /// Extract from borrowed 8-bit grayscale data, converted to [0, 1].
    pub fn extract_u8(&self, gray: ImageU8<'_>) -> Result<HogFeatures, InvalidParams> {
        let image = ImageF32::from_u8(&gray);
        self.extract(&image)
    }

    fn extract_impl(&self, image: &ImageF32, visualize: bool) -> Result<HogFeatures, InvalidParams> {
        if image.w == 0 || image.h == 0 {
            return Err(InvalidParams::NonPositiveDimension {
                width: image.w,
                height: image.h,
            });
        }
        let start = Instant::now();

        let compressed;
        let input = if self.params.transform_sqrt {
            compressed = power_law_compress(image);
            &compressed
        } else {
            image
        };

        let grad = centered_gradients(input, self.params.signed);
        let geom = self.geometry(image.w, image.h);
        debug!(
            "hog: image {}x{} -> cells {}x{}, blocks {}x{}, {} bins",
            image.w, image.h, geom.cells_x, geom.cells_y, geom.blocks_x, geom.blocks_y,
            geom.orientations
        );

        let cells = histogram::cell_histograms(&grad, &geom, self.params.bin_width_deg());
        let visualization = if visualize {
            Some(render_cell_histograms(
                &cells,
                &geom,
                self.params.bin_width_deg(),
                image.w,
                image.h,
            ))
        } else {
            None
        };

        let blocks = normalize::normalized_blocks(&cells, &geom, self.params.block_norm);
        let descriptor = assemble::flatten(blocks);

        let latency_ms = start.elapsed().as_secs_f64() * 1e3;
        debug!(
            "hog: descriptor len {} in {:.3} ms",
            descriptor.len(),
            latency_ms
        );

        Ok(HogFeatures {
            descriptor,
            visualization,
            latency_ms,
        })
    }
}

/// One-shot extraction with the given parameters.
pub fn extract(
    image: &ImageF32,
    params: HogParams,
    visualize: bool,
) -> Result<HogFeatures, InvalidParams> {
    let extractor = HogExtractor::new(params)?;
    if visualize {
        extractor.extract_with_visualization(image)
    } else {
        extractor.extract(image)
    }
}

/// Element-wise square root, compressing the input's dynamic range.
fn power_law_compress(image: &ImageF32) -> ImageF32 {
    let mut out = image.clone();
    for v in out.data.iter_mut() {
        *v = v.sqrt();
    }
    out
}
