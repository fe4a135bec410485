//! Color constants for the panel.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to the target display, so colors defined here are
//! written to the framebuffer without conversion. Screen colors arrive as
//! 24-bit `0xRRGGBB` literals from the UI design; [`rgb`] truncates them to
//! Rgb565 at compile time.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Convert a 24-bit `0xRRGGBB` value to Rgb565 by dropping the low bits of
/// each component.
pub const fn rgb(hex: u32) -> Rgb565 {
    Rgb565::new(
        ((hex >> 19) & 0x1f) as u8,
        ((hex >> 10) & 0x3f) as u8,
        ((hex >> 3) & 0x1f) as u8,
    )
}

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Default text and image ink.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Screen and panel backgrounds in the light theme.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Theme Palette (Material palette values)
// =============================================================================

/// Palette blue (#2196F3). Primary theme color: arc indicators, knobs,
/// checked checkbox boxes.
pub const PALETTE_BLUE: Rgb565 = rgb(0x2196f3);

/// Palette red (#F44336). Secondary theme color, reserved for alert accents.
pub const PALETTE_RED: Rgb565 = rgb(0xf44336);

/// Neutral border gray (#E0E0E0) for panel outlines and unchecked boxes.
pub const BORDER_GRAY: Rgb565 = rgb(0xe0e0e0);

/// Neutral track gray (#E6E6E6) for arc backgrounds.
pub const ARC_GRAY: Rgb565 = rgb(0xe6e6e6);

// =============================================================================
// Unit Tests
// =============================================================================
