use std::path::{Path, PathBuf};

use clap::Parser;
use vgimg::{
    header::{DEFAULT_ALIGNMENT, DEFAULT_ENTRIES_PER_LINE},
    HeaderOptions, PixelFormat, Wrap,
};

#[derive(Debug, Parser)]
#[clap(version)]
/// Convert an image into a C header for VGLite-compatible renderers
pub struct Options {
    /// The image to convert (PNG, JPEG, BMP or GIF)
    #[clap(required_unless_present = "list_formats")]
    pub input: Option<PathBuf>,

    /// Pixel format of the output. Valid choices are:
    ///
    /// "rgb565", "bgr565", "argb8888", "rgba8888", "rgb888" and "bgr888"
    #[clap(long, short, default_value_t)]
    pub format: PixelFormat,

    /// Where to store the header (default: the input path with `.h`)
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Alignment of the pixel array in bytes, a power of two
    #[clap(long, default_value_t = DEFAULT_ALIGNMENT, value_parser = parse_alignment)]
    pub align: u32,

    /// Number of array entries per line
    #[clap(long, default_value_t = DEFAULT_ENTRIES_PER_LINE, value_parser = parse_wrap)]
    pub wrap: usize,

    /// Put every image row on its own line instead
    #[clap(long, conflicts_with = "wrap")]
    pub row_wrap: bool,

    /// Print the supported formats and exit
    #[clap(long)]
    pub list_formats: bool,
}

fn parse_alignment(val: &str) -> Result<u32, String> {
    let align: u32 = val.parse().map_err(|e| format!("{}", e))?;
    if !align.is_power_of_two() {
        return Err(format!("{} is not a power of two", align));
    }
    Ok(align)
}

fn parse_wrap(val: &str) -> Result<usize, String> {
    match val.parse::<usize>() {
        Ok(0) => Err("need at least one entry per line".to_owned()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{}", e)),
    }
}

impl Options {
    /// The output path for the given input
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| input.with_extension("h"))
    }

    /// Header layout selected on the command line
    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            alignment: self.align,
            wrap: match self.row_wrap {
                true => Wrap::Rows,
                false => Wrap::Entries(self.wrap),
            },
            generator: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
