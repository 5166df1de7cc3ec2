use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, eyre, WrapErr};
use log::{debug, info, warn};
use prettytable::{cell, format, row, Table};
use tempfile::NamedTempFile;
use thiserror::Error;
use vgimg::{
    encode, load::LoadError, HeaderDocument, HeaderOptions, Identifier, PixelFormat,
};

use super::opt::Options;

#[derive(Debug, Error)]
/// A conversion failed
pub enum ConvertError {
    /// The input does not exist or cannot be read
    #[error("Input file '{}' not found", .0.display())]
    NotFound(PathBuf, #[source] io::Error),
    /// The input is not a supported image
    #[error("Input file '{}' is not a supported image", .0.display())]
    Decode(PathBuf, #[source] Box<dyn std::error::Error + Send + Sync>),
    /// The header could not be written
    #[error("Failed to write '{}'", .0.display())]
    Write(PathBuf, #[source] io::Error),
}

impl From<LoadError> for ConvertError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound { path, source } => Self::NotFound(path, source),
            LoadError::Decode { path, source } => Self::Decode(path, Box::new(source)),
            LoadError::Empty { path, source } => Self::Decode(path, Box::new(source)),
        }
    }
}

/// What was written by [`convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The header file
    pub output: PathBuf,
    /// The pixel format
    pub format: PixelFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Size of the pixel array
    pub data_size: usize,
}

/// Convert `input` into a header at `output`
///
/// The header is only written once it is complete, a failed run leaves any
/// existing file at `output` untouched. See [`write_atomic`] for how an
/// existing file is replaced.
pub fn convert(
    input: &Path,
    output: &Path,
    format: PixelFormat,
    options: &HeaderOptions,
) -> Result<Summary, ConvertError> {
    let grid = vgimg::load::load(input)?;
    debug!(
        "Loaded '{}' ({}x{})",
        input.display(),
        grid.width(),
        grid.height()
    );

    if !format.has_alpha() && grid.samples().iter().any(|px| px.a != 0xFF) {
        warn!(
            "'{}' has transparent pixels, {} drops the alpha channel",
            input.display(),
            format
        );
    }

    let encoded = encode(&grid, format);
    let ident = Identifier::from_path(output);
    debug!("Using identifier '{}'", ident);
    let source_name = input
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let text = HeaderDocument::new(&ident, &source_name, &encoded, options).to_string();

    write_atomic(output, text.as_bytes())
        .map_err(|err| ConvertError::Write(output.to_owned(), err))?;

    Ok(Summary {
        output: output.to_owned(),
        format,
        width: encoded.width(),
        height: encoded.height(),
        data_size: encoded.bytes().len(),
    })
}

/// Write through a temporary file in the same directory, then rename
///
/// The rename swaps the directory entry, so an existing file at `path` is
/// replaced by a new inode rather than written in place. Hard links to the
/// old file keep the old contents. The permissions of an existing file are
/// copied to the new one and a read-only file is refused. New files get
/// mode `0644` on unix.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let existing = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(err),
    };
    if existing.as_ref().map_or(false, |perms| perms.readonly()) {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "existing file is read-only",
        ));
    }

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    match existing {
        Some(perms) => file.as_file().set_permissions(perms)?,
        #[cfg(unix)]
        None => {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        #[cfg(not(unix))]
        None => {}
    }
    debug!("Moving '{}' to '{}'", file.path().display(), path.display());
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Print the format table to stdout
pub fn list_formats() {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["name", "bytes/pixel", "vg_lite format", "description"]);
    for f in PixelFormat::ALL {
        table.add_row(row![
            f.name(),
            f.bytes_per_pixel(),
            f.vg_lite_format(),
            f.description()
        ]);
    }
    table.printstd();
}

/// Run the command line tool
pub fn run(opt: &Options) -> eyre::Result<()> {
    if opt.list_formats {
        list_formats();
        return Ok(());
    }
    let input = opt.input.as_deref().ok_or_else(|| eyre!("No input file"))?;

    let output = opt.output_path(input);
    let summary = convert(input, &output, opt.format, &opt.header_options())
        .wrap_err_with(|| format!("Failed to convert '{}'", input.display()))?;

    info!(
        "Converted '{}' to '{}'",
        input.display(),
        summary.output.display()
    );
    info!("  Format: {}", summary.format.description());
    info!("  Dimensions: {}x{}", summary.width, summary.height);
    info!("  Bytes per pixel: {}", summary.format.bytes_per_pixel());
    info!("  Total data size: {} bytes", summary.data_size);
    Ok(())
}
