//! Packed-pixel image types

/// Fully opaque white, used as the placeholder when no model output exists.
pub const OPAQUE_WHITE: u32 = 0xFFFF_FFFF;

/// Alpha channel bits of a fully opaque pixel.
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Image exchanged with the surrounding UI shell.
///
/// Pixels are stored row-major, one `u32` per pixel, packed as ARGB with
/// 8 bits per channel (alpha in bits 24-31, blue in bits 0-7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Packed ARGB pixels, `width * height` entries
    pub pixels: Vec<u32>,
}

impl PackedImage {
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image of the given size with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}

/// Packs four 8-bit channels into one ARGB pixel.
#[inline]
pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Splits an ARGB pixel into `[a, r, g, b]`.
#[inline]
pub fn unpack_argb(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    ]
}

/// Opaque gray pixel with the same intensity in R, G and B.
#[inline]
pub fn pack_gray(intensity: u8) -> u32 {
    let i = u32::from(intensity);
    OPAQUE_ALPHA | (i << 16) | (i << 8) | i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_and_unpack() {
        let pixel = pack_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(pixel, 0x1234_5678);
        assert_eq!(unpack_argb(pixel), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_pack_gray() {
        assert_eq!(pack_gray(0), 0xFF00_0000);
        assert_eq!(pack_gray(128), 0xFF80_8080);
        assert_eq!(pack_gray(255), OPAQUE_WHITE);
    }

    #[test]
    fn test_get_is_row_major() {
        let image = PackedImage::new(3, 2, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(image.get(2, 0), Some(2));
        assert_eq!(image.get(0, 1), Some(3));
        assert_eq!(image.get(3, 0), None);
        assert_eq!(image.get(0, 2), None);
    }
}
