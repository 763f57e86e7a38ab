//! Single-channel image containers used throughout the extractor.
//!
//! - [`ImageF32`]: owned row-major float buffer, the working format of the
//!   pipeline.
//! - [`ImageU8`]: borrowed 8-bit grayscale view over external data.
//! - [`io`]: PNG/JSON helpers for the demo binary and visualization output.
pub mod io;

/// Owned single-channel f32 image in row-major layout (stride == width).
#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer. `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), w * h, "buffer length must equal w * h");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Convert a borrowed 8-bit grayscale view to floats in [0, 1].
    pub fn from_u8(gray: &ImageU8<'_>) -> Self {
        let mut out = Self::new(gray.w, gray.h);
        for y in 0..gray.h {
            let src = gray.row(y);
            let dst = out.row_mut(y);
            for x in 0..src.len() {
                dst[x] = src[x] as f32 / 255.0;
            }
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y` as a slice of width `w`.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Borrow row `y` mutably.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

/// Borrowed 8-bit grayscale view over external row-major data.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Bytes between consecutive rows
    pub stride: usize,
    /// Borrowed pixel data
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    /// Borrow row `y` as a slice of width `w`.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
