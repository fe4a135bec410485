//! Display geometry and capacity constants.
//!
//! Capacities are fixed at compile time: the widget topology is generated
//! and never grows at runtime, so every buffer in the tree is sized here and
//! checked with `const` assertions where the consuming module knows its
//! exact needs.

use core::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341-class 320x240 panel).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Widget Tree Capacities
// =============================================================================

/// Widget arena capacity. The generated screen needs 17 nodes; the rest is
/// headroom for widgets added by the embedding application.
pub const MAX_WIDGETS: usize = 24;

/// Style entries per widget, one per (part, state) selector actually set.
/// The densest generated widget touches three selectors.
pub const MAX_STYLE_ENTRIES: usize = 6;

/// Capacity of label and checkbox texts. The longest generated text is
/// "OPTICAL FLOW" (12 bytes); numeric readouts are at most 4.
pub const TEXT_LEN: usize = 16;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time for the demo loop (~50 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(20);
