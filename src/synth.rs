//! Deterministic synthetic test images.
//!
//! The generator is a pure function of the requested dimensions, so test
//! vectors computed on one machine reproduce bit-for-bit on another.
use crate::descriptor::InvalidParams;
use crate::image::ImageF32;

/// Generates a grayscale image where sample `(r, c) = |sin(r·width + c)|`.
///
/// The argument to `sin` is the linear row-major pixel index, increasing
/// left-to-right then top-to-bottom. All samples lie in `[0, 1]`.
pub fn sine_image(width: usize, height: usize) -> Result<ImageF32, InvalidParams> {
    if width == 0 || height == 0 {
        return Err(InvalidParams::NonPositiveDimension { width, height });
    }
    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        let row = img.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            *px = ((y * width + x) as f64).sin().abs() as f32;
        }
    }
    Ok(img)
}
