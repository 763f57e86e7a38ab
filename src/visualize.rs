//! Diagnostic rendering of cell histograms as oriented line segments.
//!
//! Each cell draws one segment per orientation bin through the cell center,
//! at the bin's center angle, with intensity proportional to the bin's
//! weight relative to the strongest bin in that cell. Segments accumulate
//! additively and the canvas is clipped to [`MAX_INTENSITY`], so overlapping
//! segments cannot blow up the brightness.
//!
//! This path is diagnostic only: segment placement and relative intensity
//! ordering are the contract, not exact pixel values.
use crate::descriptor::geometry::HogGeometry;
use crate::descriptor::histogram::CellGrid;
use crate::image::ImageF32;

/// Ceiling applied to the canvas after additive accumulation.
pub const MAX_INTENSITY: f32 = 1.0;

/// Render the cell histogram grid onto a canvas of the original image shape.
///
/// Pixels outside the cell grid (remainder rows/columns) stay zero.
pub fn render_cell_histograms(
    cells: &CellGrid,
    geom: &HogGeometry,
    bin_width_deg: f32,
    width: usize,
    height: usize,
) -> ImageF32 {
    let mut canvas = ImageF32::new(width, height);
    let radius = 0.5 * geom.cell_w.min(geom.cell_h) as f32;

    for cy in 0..geom.cells_y {
        for cx in 0..geom.cells_x {
            let hist = cells.histogram(cx, cy);
            let max = hist.iter().cloned().fold(0.0f32, f32::max);
            if max <= 0.0 {
                continue;
            }
            let center_x = (cx * geom.cell_w) as f32 + 0.5 * geom.cell_w as f32;
            let center_y = (cy * geom.cell_h) as f32 + 0.5 * geom.cell_h as f32;

            for (bin, &weight) in hist.iter().enumerate() {
                if weight <= 0.0 {
                    continue;
                }
                let intensity = weight / max;
                let theta = ((bin as f32 + 0.5) * bin_width_deg).to_radians();
                let dx = radius * theta.cos();
                let dy = radius * theta.sin();
                draw_segment_additive(
                    &mut canvas,
                    (center_x - dx, center_y - dy),
                    (center_x + dx, center_y + dy),
                    intensity,
                );
            }
        }
    }

    canvas
}

/// Add `intensity` to each pixel along the segment, clipping at
/// [`MAX_INTENSITY`]. Consecutive duplicate pixels are written once.
fn draw_segment_additive(canvas: &mut ImageF32, from: (f32, f32), to: (f32, f32), intensity: f32) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil() as usize;
    let mut last: Option<(usize, usize)> = None;
    for i in 0..=steps {
        let t = if steps == 0 {
            0.0
        } else {
            i as f32 / steps as f32
        };
        let x = from.0 + t * (to.0 - from.0);
        let y = from.1 + t * (to.1 - from.1);
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (xi, yi) = (x.round() as usize, y.round() as usize);
        if xi >= canvas.w || yi >= canvas.h || last == Some((xi, yi)) {
            continue;
        }
        last = Some((xi, yi));
        let v = (canvas.get(xi, yi) + intensity).min(MAX_INTENSITY);
        canvas.set(xi, yi, v);
    }
}
