//! # Output pixel formats
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{grid::PixelSample, pack};

/// The buffer format to encode an image into
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 16-bit, red in the high bits
    Rgb565,
    /// 16-bit, blue in the high bits
    Bgr565,
    /// 32-bit, alpha first
    Argb8888,
    /// 32-bit, alpha last
    Rgba8888,
    /// 24-bit, no alpha
    Rgb888,
    /// 24-bit, reversed, no alpha
    Bgr888,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported format `{name}`, use one of `rgb565`, `bgr565`, `argb8888`, `rgba8888`, `rgb888` or `bgr888`")]
/// Failed to parse a format name
pub struct FormatError {
    /// The name that was not recognized
    pub name: String,
}

impl Default for PixelFormat {
    fn default() -> Self {
        PixelFormat::Bgr565
    }
}

impl PixelFormat {
    /// Every supported format
    pub const ALL: [PixelFormat; 6] = [
        Self::Rgb565,
        Self::Bgr565,
        Self::Argb8888,
        Self::Rgba8888,
        Self::Rgb888,
        Self::Bgr888,
    ];

    /// Name as used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb565 => "rgb565",
            Self::Bgr565 => "bgr565",
            Self::Argb8888 => "argb8888",
            Self::Rgba8888 => "rgba8888",
            Self::Rgb888 => "rgb888",
            Self::Bgr888 => "bgr888",
        }
    }

    /// Number of bytes per encoded pixel
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb565 | Self::Bgr565 => 2,
            Self::Rgb888 | Self::Bgr888 => 3,
            Self::Argb8888 | Self::Rgba8888 => 4,
        }
    }

    /// Whether the alpha channel is kept
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Argb8888 | Self::Rgba8888)
    }

    /// The matching `vg_lite_buffer_format_t` constant
    pub fn vg_lite_format(self) -> &'static str {
        match self {
            Self::Rgb565 => "VG_LITE_RGB565",
            Self::Bgr565 => "VG_LITE_BGR565",
            Self::Argb8888 => "VG_LITE_ARGB8888",
            Self::Rgba8888 => "VG_LITE_RGBA8888",
            Self::Rgb888 => "VG_LITE_RGB888",
            Self::Bgr888 => "VG_LITE_BGR888",
        }
    }

    /// Human readable description
    pub fn description(self) -> &'static str {
        match self {
            Self::Rgb565 => "RGB565 (16-bit, 5-6-5)",
            Self::Bgr565 => "BGR565 (16-bit, 5-6-5)",
            Self::Argb8888 => "ARGB8888 (32-bit, 8-8-8-8)",
            Self::Rgba8888 => "RGBA8888 (32-bit, 8-8-8-8)",
            Self::Rgb888 => "RGB888 (24-bit, 8-8-8)",
            Self::Bgr888 => "BGR888 (24-bit, 8-8-8)",
        }
    }

    /// Append the encoding of `px` to `out`
    pub fn pack_into(self, px: PixelSample, out: &mut Vec<u8>) {
        match self {
            Self::Rgb565 => out.extend_from_slice(&pack::rgb565(px)),
            Self::Bgr565 => out.extend_from_slice(&pack::bgr565(px)),
            Self::Argb8888 => out.extend_from_slice(&pack::argb8888(px)),
            Self::Rgba8888 => out.extend_from_slice(&pack::rgba8888(px)),
            Self::Rgb888 => out.extend_from_slice(&pack::rgb888(px)),
            Self::Bgr888 => out.extend_from_slice(&pack::bgr888(px)),
        }
    }

    /// Decode one pixel, returns `None` if `bytes` has the wrong length
    pub fn unpack(self, bytes: &[u8]) -> Option<PixelSample> {
        Some(match self {
            Self::Rgb565 => pack::unpack_rgb565(bytes.try_into().ok()?),
            Self::Bgr565 => pack::unpack_bgr565(bytes.try_into().ok()?),
            Self::Argb8888 => pack::unpack_argb8888(bytes.try_into().ok()?),
            Self::Rgba8888 => pack::unpack_rgba8888(bytes.try_into().ok()?),
            Self::Rgb888 => pack::unpack_rgb888(bytes.try_into().ok()?),
            Self::Bgr888 => pack::unpack_bgr888(bytes.try_into().ok()?),
        })
    }
}

impl FromStr for PixelFormat {
    type Err = FormatError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(val))
            .ok_or_else(|| FormatError {
                name: val.to_owned(),
            })
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::PixelFormat;
    use crate::grid::PixelSample;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("rgb565".parse(), Ok(PixelFormat::Rgb565));
        assert_eq!("BGR565".parse(), Ok(PixelFormat::Bgr565));
        assert_eq!("ArGb8888".parse(), Ok(PixelFormat::Argb8888));
        for format in PixelFormat::ALL {
            assert_eq!(format.to_string().parse(), Ok(format));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "cmyk".parse::<PixelFormat>().unwrap_err();
        assert_eq!(err.name, "cmyk");
        assert!(err.to_string().contains("`cmyk`"));
        assert!("rgb 565".parse::<PixelFormat>().is_err());
        assert!("".parse::<PixelFormat>().is_err());
    }

    #[test]
    fn test_default_is_bgr565() {
        assert_eq!(PixelFormat::default(), PixelFormat::Bgr565);
    }

    #[test]
    fn test_table() {
        let table: Vec<_> = PixelFormat::ALL
            .iter()
            .map(|f| (f.bytes_per_pixel(), f.vg_lite_format()))
            .collect();
        assert_eq!(
            table,
            [
                (2, "VG_LITE_RGB565"),
                (2, "VG_LITE_BGR565"),
                (4, "VG_LITE_ARGB8888"),
                (4, "VG_LITE_RGBA8888"),
                (3, "VG_LITE_RGB888"),
                (3, "VG_LITE_BGR888"),
            ]
        );
    }

    #[test]
    fn test_alpha_formats() {
        let with_alpha: Vec<_> = PixelFormat::ALL
            .iter()
            .copied()
            .filter(|f| f.has_alpha())
            .collect();
        assert_eq!(with_alpha, [PixelFormat::Argb8888, PixelFormat::Rgba8888]);

        let translucent = PixelSample::new(1, 2, 3, 0x40);
        for format in PixelFormat::ALL {
            let mut out = Vec::new();
            format.pack_into(translucent, &mut out);
            let alpha = format.unpack(&out).map(|px| px.a);
            let expected = if format.has_alpha() { 0x40 } else { 0xFF };
            assert_eq!(alpha, Some(expected), "{}", format);
        }
    }

    #[test]
    fn test_pack_matches_bytes_per_pixel() {
        let px = PixelSample::new(0xDE, 0xAD, 0xBE, 0xEF);
        for format in PixelFormat::ALL {
            let mut out = Vec::new();
            format.pack_into(px, &mut out);
            assert_eq!(out.len(), format.bytes_per_pixel(), "{}", format);
            assert!(format.unpack(&out).is_some());
            assert!(format.unpack(&out[1..]).is_none());
        }
    }
}
