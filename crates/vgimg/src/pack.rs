//! # Per-pixel packing
//!
//! Each function maps one [`PixelSample`] to the exact bytes a VGLite buffer
//! of that format expects. Multi-byte words are little-endian.
//!
//! The `unpack_*` functions go the other way and return the channel values
//! that survive the packing. Formats without alpha unpack as opaque.

use crate::grid::PixelSample;

fn word_565(hi: u8, mid: u8, lo: u8) -> u16 {
    (u16::from(hi >> 3) << 11) | (u16::from(mid >> 2) << 5) | u16::from(lo >> 3)
}

fn split_565(word: u16) -> (u8, u8, u8) {
    let hi = ((word >> 11) & 0x1F) as u8;
    let mid = ((word >> 5) & 0x3F) as u8;
    let lo = (word & 0x1F) as u8;
    (hi << 3, mid << 2, lo << 3)
}

/// `R5 G6 B5`, red in the high bits
pub fn rgb565(px: PixelSample) -> [u8; 2] {
    word_565(px.r, px.g, px.b).to_le_bytes()
}

/// `B5 G6 R5`, blue in the high bits
pub fn bgr565(px: PixelSample) -> [u8; 2] {
    word_565(px.b, px.g, px.r).to_le_bytes()
}

/// `A R G B`, one byte each
pub fn argb8888(px: PixelSample) -> [u8; 4] {
    [px.a, px.r, px.g, px.b]
}

/// `R G B A`, one byte each
pub fn rgba8888(px: PixelSample) -> [u8; 4] {
    px.into()
}

/// `R G B`, alpha is dropped
pub fn rgb888(px: PixelSample) -> [u8; 3] {
    [px.r, px.g, px.b]
}

/// `B G R`, alpha is dropped
pub fn bgr888(px: PixelSample) -> [u8; 3] {
    [px.b, px.g, px.r]
}

/// Inverse of [`rgb565`]
pub fn unpack_rgb565(bytes: [u8; 2]) -> PixelSample {
    let (r, g, b) = split_565(u16::from_le_bytes(bytes));
    PixelSample::opaque(r, g, b)
}

/// Inverse of [`bgr565`]
pub fn unpack_bgr565(bytes: [u8; 2]) -> PixelSample {
    let (b, g, r) = split_565(u16::from_le_bytes(bytes));
    PixelSample::opaque(r, g, b)
}

/// Inverse of [`argb8888`]
pub fn unpack_argb8888([a, r, g, b]: [u8; 4]) -> PixelSample {
    PixelSample::new(r, g, b, a)
}

/// Inverse of [`rgba8888`]
pub fn unpack_rgba8888([r, g, b, a]: [u8; 4]) -> PixelSample {
    PixelSample::new(r, g, b, a)
}

/// Inverse of [`rgb888`]
pub fn unpack_rgb888([r, g, b]: [u8; 3]) -> PixelSample {
    PixelSample::opaque(r, g, b)
}

/// Inverse of [`bgr888`]
pub fn unpack_bgr888([b, g, r]: [u8; 3]) -> PixelSample {
    PixelSample::opaque(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PixelSample = PixelSample::opaque(0xFF, 0x00, 0x00);
    const GREEN: PixelSample = PixelSample::opaque(0x00, 0xFF, 0x00);
    const BLUE: PixelSample = PixelSample::opaque(0x00, 0x00, 0xFF);

    #[test]
    fn test_rgb565_primaries() {
        // 31 << 11
        assert_eq!(rgb565(RED), [0x00, 0xF8]);
        // 63 << 5
        assert_eq!(rgb565(GREEN), [0xE0, 0x07]);
        assert_eq!(rgb565(BLUE), [0x1F, 0x00]);
        assert_eq!(rgb565(PixelSample::gray(0xFF)), [0xFF, 0xFF]);
    }

    #[test]
    fn test_bgr565_swaps_red_and_blue() {
        assert_eq!(bgr565(RED), [0x1F, 0x00]);
        assert_eq!(bgr565(GREEN), [0xE0, 0x07]);
        assert_eq!(bgr565(BLUE), [0x00, 0xF8]);
    }

    #[test]
    fn test_565_truncates_low_bits() {
        let px = PixelSample::new(0b1010_1111, 0b1100_1011, 0b0001_0111, 0x80);
        let word = u16::from_le_bytes(rgb565(px));
        assert_eq!(word >> 11, 0b10101);
        assert_eq!((word >> 5) & 0x3F, 0b110010);
        assert_eq!(word & 0x1F, 0b00010);

        let back = unpack_rgb565(rgb565(px));
        assert_eq!(back, PixelSample::opaque(0b1010_1000, 0b1100_1000, 0b0001_0000));
        let back = unpack_bgr565(bgr565(px));
        assert_eq!(back, PixelSample::opaque(0b1010_1000, 0b1100_1000, 0b0001_0000));
    }

    #[test]
    fn test_byte_orders() {
        let px = PixelSample::new(0x11, 0x22, 0x33, 0x44);
        assert_eq!(argb8888(px), [0x44, 0x11, 0x22, 0x33]);
        assert_eq!(rgba8888(px), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(rgb888(px), [0x11, 0x22, 0x33]);
        assert_eq!(bgr888(px), [0x33, 0x22, 0x11]);
    }

    #[test]
    fn test_unpack_recovers_channels() {
        let px = PixelSample::new(0x12, 0x9A, 0xFE, 0x07);
        assert_eq!(unpack_argb8888(argb8888(px)), px);
        assert_eq!(unpack_rgba8888(rgba8888(px)), px);
        assert_eq!(unpack_rgb888(rgb888(px)), PixelSample::opaque(0x12, 0x9A, 0xFE));
        assert_eq!(unpack_bgr888(bgr888(px)), PixelSample::opaque(0x12, 0x9A, 0xFE));
    }

    #[test]
    fn test_565_exhaustive_channels() {
        for v in 0..=255u8 {
            let px = PixelSample::new(v, v, v, 0);
            let back = unpack_rgb565(rgb565(px));
            assert_eq!((back.r, back.g, back.b), (v & 0xF8, v & 0xFC, v & 0xF8));
            let back = unpack_bgr565(bgr565(px));
            assert_eq!((back.r, back.g, back.b), (v & 0xF8, v & 0xFC, v & 0xF8));
        }
    }
}
