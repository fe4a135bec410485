//! Compiled-in image assets.
//!
//! Assets are 1-bit bitmaps: rows packed MSB-first, padded to a whole byte
//! per row. Set bits are drawn in the widget's recolor (black by default),
//! clear bits stay transparent.

use embedded_graphics::geometry::{Point, Size};

/// 1-bit bitmap with static pixel data.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ImageAsset {
    width: u32,
    height: u32,
    data: &'static [u8],
}

impl ImageAsset {
    const fn new(width: u32, height: u32, data: &'static [u8]) -> Self {
        Self { width, height, data }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the bit at `(x, y)` is set. Out-of-range coordinates are clear.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let stride = self.width.div_ceil(8);
        let byte = self.data[(y * stride + x / 8) as usize];
        (byte >> (7 - x % 8)) & 1 == 1
    }

    /// Set pixels in row-major order, relative to the asset's top-left.
    pub fn on_pixels(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.pixel(x, y))
                .map(move |x| Point::new(x as i32, y as i32))
        })
    }
}

/// Top-down quadcopter silhouette shown next to the auxiliary switches.
pub const IMG_DRONE: ImageAsset = ImageAsset::new(32, 24, &IMG_DRONE_DATA);

#[rustfmt::skip]
const IMG_DRONE_DATA: [u8; 96] = [
    0x02, 0x00, 0x00, 0x40,
    0x1f, 0xc0, 0x03, 0xf8,
    0x3f, 0xe0, 0x07, 0xfc,
    0x3f, 0xe0, 0x07, 0xfc,
    0x3f, 0xe0, 0x07, 0xfc,
    0x7f, 0xf0, 0x0f, 0xfe,
    0x3f, 0xe0, 0x07, 0xfc,
    0x3f, 0xe0, 0x07, 0xfc,
    0x3f, 0xf0, 0x0f, 0xfc,
    0x1f, 0xff, 0xff, 0xf8,
    0x02, 0x07, 0xe0, 0x40,
    0x00, 0x07, 0xe0, 0x00,
    0x00, 0x07, 0xe0, 0x00,
    0x02, 0x07, 0xe0, 0x40,
    0x1f, 0xff, 0xff, 0xf8,
    0x3f, 0xf0, 0x0f, 0xfc,
    0x3f, 0xe0, 0x07, 0xfc,
    0x3f, 0xe0, 0x07, 0xfc,
    0x7f, 0xf0, 0x0f, 0xfe,
    0x3f, 0xe0, 0x07, 0xfc,
    0x3f, 0xe0, 0x07, 0xfc,
    0x3f, 0xe0, 0x07, 0xfc,
    0x1f, 0xc0, 0x03, 0xf8,
    0x02, 0x00, 0x00, 0x40,
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drone_dimensions() {
        assert_eq!(IMG_DRONE.size(), Size::new(32, 24));
        assert_eq!(IMG_DRONE_DATA.len(), (32 / 8) * 24, "one padded row per scanline");
    }

    #[test]
    fn test_known_pixels() {
        // Motor dots in the top row.
        assert!(IMG_DRONE.pixel(6, 0));
        assert!(IMG_DRONE.pixel(25, 0));
        // Body hub in the middle band.
        assert!(IMG_DRONE.pixel(15, 11));
        // Corners stay transparent.
        assert!(!IMG_DRONE.pixel(0, 0));
        assert!(!IMG_DRONE.pixel(31, 23));
    }

    #[test]
    fn test_out_of_range_is_clear() {
        assert!(!IMG_DRONE.pixel(32, 0));
        assert!(!IMG_DRONE.pixel(0, 24));
    }

    #[test]
    fn test_silhouette_is_symmetric() {
        for y in 0..24 {
            for x in 0..32 {
                assert_eq!(
                    IMG_DRONE.pixel(x, y),
                    IMG_DRONE.pixel(31 - x, y),
                    "mirror mismatch at ({x}, {y})"
                );
                assert_eq!(
                    IMG_DRONE.pixel(x, y),
                    IMG_DRONE.pixel(x, 23 - y),
                    "flip mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_on_pixels_matches_bit_count() {
        let set_bits: u32 = IMG_DRONE_DATA.iter().map(|b| b.count_ones()).sum();
        assert_eq!(IMG_DRONE.on_pixels().count(), set_bits as usize);
    }
}
