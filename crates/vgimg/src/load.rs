//! # Loading image files
//!
//! Decoding is done by the `image` crate. Whatever the color type of the
//! source, the result is converted to 8-bit RGBA: gray is copied into all
//! three color channels, palettes are resolved (including `tRNS`
//! transparency for PNG) and a missing alpha channel becomes opaque.
use std::{
    io,
    path::{Path, PathBuf},
};

use image::{DynamicImage, ImageError, ImageReader};
use log::debug;
use thiserror::Error;

use crate::grid::{GridError, ImageGrid};

#[derive(Debug, Error)]
/// Error when loading an image
pub enum LoadError {
    /// The file does not exist or could not be read
    #[error("Failed to read '{}'", path.display())]
    NotFound {
        /// The input path
        path: PathBuf,
        /// The cause
        #[source]
        source: io::Error,
    },
    /// The file is not an image in a supported format
    #[error("Failed to decode '{}'", path.display())]
    Decode {
        /// The input path
        path: PathBuf,
        /// The cause
        #[source]
        source: ImageError,
    },
    /// The image was decoded but has no pixels
    #[error("Invalid image '{}'", path.display())]
    Empty {
        /// The input path
        path: PathBuf,
        /// The cause
        #[source]
        source: GridError,
    },
}

/// Load and decode the image at `path`
///
/// The format is detected from the file contents, falling back to the
/// file extension.
pub fn load(path: &Path) -> Result<ImageGrid, LoadError> {
    let not_found = |source| LoadError::NotFound {
        path: path.to_owned(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(not_found)?
        .with_guessed_format()
        .map_err(not_found)?;
    debug!("Detected {:?} for '{}'", reader.format(), path.display());

    let image = reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_owned(),
        source,
    })?;
    debug!("Decoded {:?} image", image.color());

    grid_from_image(&image).map_err(|source| LoadError::Empty {
        path: path.to_owned(),
        source,
    })
}

/// Normalize a decoded image into a grid
pub fn grid_from_image(image: &DynamicImage) -> Result<ImageGrid, GridError> {
    let rgba = image.to_rgba8();
    ImageGrid::from_rgba8(rgba.width(), rgba.height(), rgba.as_raw())
}
