//! # Encoding a grid into a pixel format
use log::debug;

use crate::{format::PixelFormat, grid::ImageGrid};

/// A grid encoded into a flat buffer of some [`PixelFormat`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    format: PixelFormat,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl EncodedImage {
    /// The format of the buffer
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per encoded pixel
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    /// The encoded buffer
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate the encoded pixels
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(self.bytes_per_pixel())
    }
}

/// Encode every pixel of `grid`, top row first, left to right
pub fn encode(grid: &ImageGrid, format: PixelFormat) -> EncodedImage {
    let mut bytes = Vec::with_capacity(grid.pixel_count() * format.bytes_per_pixel());
    for row in grid.rows() {
        for px in row {
            format.pack_into(*px, &mut bytes);
        }
    }
    debug!(
        "Encoded {}x{} pixels as {} ({} bytes)",
        grid.width(),
        grid.height(),
        format,
        bytes.len()
    );
    EncodedImage {
        format,
        width: grid.width(),
        height: grid.height(),
        bytes,
    }
}
