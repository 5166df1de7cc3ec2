//! # Decoded pixel grids
//!
//! Every input image is normalized into an [`ImageGrid`] of 8-bit RGBA
//! samples before any output format is applied.

use thiserror::Error;

/// A single RGBA sample, 8 bits per channel
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct PixelSample {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha, 255 is fully opaque
    pub a: u8,
}

impl PixelSample {
    /// Create a new sample
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque sample
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Create a fully opaque gray sample
    pub const fn gray(v: u8) -> Self {
        Self::opaque(v, v, v)
    }
}

impl From<[u8; 4]> for PixelSample {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<PixelSample> for [u8; 4] {
    fn from(px: PixelSample) -> Self {
        [px.r, px.g, px.b, px.a]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Failed to build an image grid
pub enum GridError {
    /// One of the dimensions is zero
    #[error("Image has no pixels ({width}x{height})")]
    Empty {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// The number of samples does not match the dimensions
    #[error("Expected {expected} samples, got {actual}")]
    SizeMismatch {
        /// The size calculated from width and height
        expected: usize,
        /// The actual number of samples (or bytes, for raw buffers)
        actual: usize,
    },
}

/// A rectangular, row-major grid of RGBA samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGrid {
    width: u32,
    height: u32,
    samples: Vec<PixelSample>,
}

impl ImageGrid {
    /// Create a grid from row-major samples
    pub fn new(width: u32, height: u32, samples: Vec<PixelSample>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a grid from a packed RGBA8 buffer, as produced by most decoders
    pub fn from_rgba8(width: u32, height: u32, raw: &[u8]) -> Result<Self, GridError> {
        let expected = width as usize * height as usize * 4;
        if raw.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: raw.len(),
            });
        }
        let samples = raw
            .chunks_exact(4)
            .map(|c| PixelSample::from([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::new(width, height, samples)
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.samples.len()
    }

    /// All samples, top row first
    pub fn samples(&self) -> &[PixelSample] {
        &self.samples
    }

    /// Iterate the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[PixelSample]> {
        self.samples.chunks_exact(self.width as usize)
    }

    /// Get the sample at `(x, y)`
    pub fn get(&self, x: u32, y: u32) -> Option<PixelSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.samples.get(index).copied()
    }
}
