#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod descriptor;
pub mod gradient;
pub mod image;
pub mod synth;
pub mod visualize;

// Helper modules – public, but considered unstable internals.
pub mod angle;

// --- High-level re-exports -------------------------------------------------

// Main entry points: extractor + results.
pub use crate::descriptor::{BlockNorm, HogExtractor, HogFeatures, HogParams, InvalidParams};

// Gradient stage output, useful for tooling and tests.
pub use crate::gradient::GradientField;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use hog_descriptor::prelude::*;
///
/// let image = sine_image(32, 32).unwrap();
/// let extractor = HogExtractor::new(HogParams::default()).unwrap();
/// let features = extractor.extract(&image).unwrap();
/// assert!(!features.descriptor.is_empty());
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::synth::sine_image;
    pub use crate::{BlockNorm, HogExtractor, HogFeatures, HogParams};
}
