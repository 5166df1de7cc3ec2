#![warn(missing_docs)]
//! # Image buffers for VGLite
//!
//! This crate turns raster images into byte arrays in one of the buffer
//! formats understood by the [VGLite] 2D graphics library, and renders
//! those arrays as C headers that can be compiled straight into firmware.
//!
//! The pipeline is: [`load`](crate::load::load) a file into an [`ImageGrid`],
//! [`encode`] the grid into an [`EncodedImage`] for a [`PixelFormat`], then
//! print a [`HeaderDocument`].
//!
//! [VGLite]: https://www.verisilicon.com/en/IPPortfolio/VivanteVGLite

pub mod encode;
pub mod format;
pub mod grid;
pub mod header;
pub mod ident;
#[cfg(feature = "image")]
pub mod load;
pub mod pack;

pub use encode::{encode, EncodedImage};
pub use format::{FormatError, PixelFormat};
pub use grid::{GridError, ImageGrid, PixelSample};
pub use header::{HeaderDocument, HeaderOptions, Wrap};
pub use ident::Identifier;

/// The `image` crate used for decoding
#[cfg(feature = "image")]
pub use image;
