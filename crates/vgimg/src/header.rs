//! # C header output
//!
//! The layout of the header is what VGLite applications include, so the
//! macro names and their order are fixed:
//!
//! ```c
//! #define LOGO_IMG_WIDTH             (2)
//! #define LOGO_IMG_HEIGHT            (1)
//! #define LOGO_IMG_BYTES_PER_PIXEL   (2)
//! #define LOGO_IMG_STRIDE            (LOGO_IMG_WIDTH * LOGO_IMG_BYTES_PER_PIXEL)
//! #define LOGO_IMG_FORMAT            (VG_LITE_BGR565)
//! #define LOGO_IMG_PIXEL_DATA        ((unsigned char*) logo_img_map)
//! #define LOGO_IMG_PIXEL_DATA_SIZE   (LOGO_IMG_WIDTH * LOGO_IMG_HEIGHT * LOGO_IMG_BYTES_PER_PIXEL)
//! ```
use std::fmt;

use crate::{encode::EncodedImage, ident::Identifier};

/// Default alignment of the pixel array in bytes
pub const DEFAULT_ALIGNMENT: u32 = 128;

/// Default number of array entries per line
pub const DEFAULT_ENTRIES_PER_LINE: usize = 16;

/// Longest macro suffix, used to line up the values
const MACRO_COLUMN: usize = "_PIXEL_DATA_SIZE".len() + 3;

/// How to break the array literal into lines
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Wrap {
    /// A fixed number of entries per line
    Entries(usize),
    /// One image row (stride bytes) per line
    Rows,
}

impl Default for Wrap {
    fn default() -> Self {
        Wrap::Entries(DEFAULT_ENTRIES_PER_LINE)
    }
}

/// Layout options for the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Alignment of the array, in bytes
    pub alignment: u32,
    /// Line breaking in the array literal
    pub wrap: Wrap,
    /// Tool name and version, for the comment block
    pub generator: String,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            alignment: DEFAULT_ALIGNMENT,
            wrap: Wrap::default(),
            generator: concat!("vgimg ", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// A C header for one encoded image
///
/// Printing this with `Display` produces the complete file contents.
pub struct HeaderDocument<'a> {
    ident: &'a Identifier,
    source_name: &'a str,
    image: &'a EncodedImage,
    options: &'a HeaderOptions,
}

impl<'a> HeaderDocument<'a> {
    /// Create a new document
    ///
    /// `source_name` only appears in the comment block.
    pub fn new(
        ident: &'a Identifier,
        source_name: &'a str,
        image: &'a EncodedImage,
        options: &'a HeaderOptions,
    ) -> Self {
        Self {
            ident,
            source_name,
            image,
            options,
        }
    }

    fn line_len(&self) -> usize {
        let len = match self.options.wrap {
            Wrap::Entries(n) => n,
            Wrap::Rows => self.image.stride(),
        };
        len.max(1)
    }

    fn write_comment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/*")?;
        writeln!(f, " * Auto-generated C header file for image: {}", self.source_name)?;
        writeln!(f, " * Format: {}", self.image.format().description())?;
        writeln!(
            f,
            " * Dimensions: {}x{} pixels",
            self.image.width(),
            self.image.height()
        )?;
        writeln!(f, " * Generated by {}", self.options.generator)?;
        writeln!(f, " */")
    }

    fn write_array(&self, f: &mut fmt::Formatter<'_>, attr: &str) -> fmt::Result {
        writeln!(
            f,
            "const {} uint8_t {}[] =",
            attr,
            self.ident.array_name()
        )?;
        write!(f, "{{")?;
        for (index, line) in self.image.bytes().chunks(self.line_len()).enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "\n    ")?;
            for (i, byte) in line.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "0x{:02X}", byte)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "}};")
    }
}

impl fmt::Display for HeaderDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.ident.macro_prefix();
        let column = guard.len() + MACRO_COLUMN;
        let m = |suffix: &str| format!("{}{}", guard, suffix);
        let attr = m("_ATTRIBUTE");
        let width = m("_WIDTH");
        let height = m("_HEIGHT");
        let bpp = m("_BYTES_PER_PIXEL");

        self.write_comment(f)?;
        writeln!(f)?;
        writeln!(f, "#ifndef {}", guard)?;
        writeln!(f, "#define {}", guard)?;
        writeln!(f)?;
        writeln!(f, "#include <stdint.h>")?;
        writeln!(f)?;
        writeln!(f, "#ifndef {}", attr)?;
        writeln!(
            f,
            "#define {:<column$}__attribute__((aligned({})))",
            attr,
            self.options.alignment,
            column = column
        )?;
        writeln!(f, "#endif /* {} */", attr)?;
        writeln!(f)?;

        let defines = [
            (width.clone(), self.image.width().to_string()),
            (height.clone(), self.image.height().to_string()),
            (bpp.clone(), self.image.bytes_per_pixel().to_string()),
            (m("_STRIDE"), format!("{} * {}", width, bpp)),
            (m("_FORMAT"), self.image.format().vg_lite_format().to_owned()),
            (
                m("_PIXEL_DATA"),
                format!("(unsigned char*) {}", self.ident.array_name()),
            ),
            (
                m("_PIXEL_DATA_SIZE"),
                format!("{} * {} * {}", width, height, bpp),
            ),
        ];
        for (name, value) in &defines {
            writeln!(f, "#define {:<column$}({})", name, value, column = column)?;
        }
        writeln!(f)?;

        self.write_array(f, &attr)?;
        writeln!(f)?;
        writeln!(f, "#endif /* {} */", guard)
    }
}
