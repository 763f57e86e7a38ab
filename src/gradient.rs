//! Per-pixel gradients from a centered difference kernel.
//!
//! - Convolves the 1-D kernel `[-1, 0, 1]` horizontally and vertically.
//! - Outputs per-pixel `gx`, `gy`, `mag = hypot(gy, gx)` and the orientation
//!   in degrees, folded into `[0, 180)` (unsigned) or wrapped into
//!   `[0, 360)` (signed).
//! - Border rows/columns where the centered difference does not fit are
//!   exactly zero in the difference fields; their orientation is 0 and their
//!   magnitude is 0.
//!
//! Complexity: O(W·H); memory: four float buffers.
use crate::angle::{fold_unsigned_deg, wrap_signed_deg};
use crate::image::ImageF32;

/// Per-pixel difference fields with derived magnitude and orientation.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Horizontal difference: `img[r, c+1] − img[r, c−1]`
    pub gx: ImageF32,
    /// Vertical difference: `img[r+1, c] − img[r−1, c]`
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel
    pub mag: ImageF32,
    /// Orientation per pixel in degrees, `[0, 180)` or `[0, 360)`
    pub ori_deg: ImageF32,
}

/// Compute centered-difference gradients on a single-channel float image.
///
/// With `signed = false` opposite gradient directions are identified and
/// orientations lie in `[0, 180)`; with `signed = true` they lie in
/// `[0, 360)`.
pub fn centered_gradients(img: &ImageF32, signed: bool) -> GradientField {
    let w = img.w;
    let h = img.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    let mut ori_deg = ImageF32::new(w, h);

    for y in 0..h {
        let row = img.row(y);
        let out = gx.row_mut(y);
        for x in 1..w.saturating_sub(1) {
            out[x] = row[x + 1] - row[x - 1];
        }
    }

    for y in 1..h.saturating_sub(1) {
        let above = img.row(y - 1);
        let below = img.row(y + 1);
        let out = gy.row_mut(y);
        for x in 0..w {
            out[x] = below[x] - above[x];
        }
    }

    for y in 0..h {
        let gx_row = gx.row(y);
        let gy_row = gy.row(y);
        let mag_row = mag.row_mut(y);
        let ori_row = ori_deg.row_mut(y);
        for x in 0..w {
            let dx = gx_row[x];
            let dy = gy_row[x];
            mag_row[x] = dy.hypot(dx);
            let deg = dy.atan2(dx).to_degrees();
            ori_row[x] = if signed {
                wrap_signed_deg(deg)
            } else {
                fold_unsigned_deg(deg)
            };
        }
    }

    GradientField {
        gx,
        gy,
        mag,
        ori_deg,
    }
}
