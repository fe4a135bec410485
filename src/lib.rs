//! Mando RC transmitter panel UI.
//!
//! Retained-mode widget tree and screen setup for the 320x240 RGB565
//! instrument panel of an RC transmitter. The panel shows four stick/channel
//! gauges with numeric readouts, four auxiliary switch checkboxes, and a
//! drone pictogram:
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │               Mando RC        (panel1) │
//! │ ┌────────────────────────────────────┐ │
//! │ │  (arc1)   (arc2)   (arc3)   (arc4) │ │
//! │ │   ind1     ind2     ind3     ind4  │ │
//! │ │                                    │ │
//! │ │  [ ] GPS  RESCUE                   │ │
//! │ │  [ ] OPTICAL FLOW        ▚▚        │ │
//! │ │  [ ] ARMED               ▚▚        │ │
//! │ │  [ ] GPS HOLD                      │ │
//! │ └───────────────────────── (panel2) ─┘ │
//! └────────────────────────────────────────┘
//! ```
//!
//! - [`widgets`]: fixed-capacity widget tree, per-part/per-state styles, and
//!   the renderer onto any `DrawTarget<Color = Rgb565>`
//! - [`theme`]: default light theme (palette, base styles, fonts)
//! - [`screens`]: the generated main screen, the [`Objects`] handle registry,
//!   and tick dispatch by screen index or id
//! - [`assets`]: compiled-in 1-bit image data
//! - [`colors`]: RGB565 constants and 24-bit hex conversion
//! - [`config`]: display geometry and capacity constants
//!
//! The embedding application owns the [`Ui`] returned by [`create_screens`],
//! updates widget values through the registry handles, calls
//! [`tick_screen`]/[`tick_screen_by_id`] once per frame, and redraws when the
//! tree reports a change.
//!
//! # Testing
//!
//! The crate is `no_std`; tests run hosted (`cfg_attr` drops `no_std` under
//! `cfg(test)`) and render into `embedded-graphics-simulator`'s in-memory
//! display for pixel-level assertions.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod assets;
pub mod colors;
pub mod config;
pub mod screens;
pub mod theme;
pub mod widgets;

// Re-export the everyday surface at the crate root
pub use screens::{
    Objects, SCREEN_COUNT, ScreenId, TICK_SCREEN_FUNCS, TickFn, Ui, create_screen_main,
    create_screens, tick_screen, tick_screen_by_id, tick_screen_main,
};
pub use theme::Theme;
pub use widgets::{
    Dim, Part, RADIUS_CIRCLE, Selector, Style, TextAlign, WidgetId, WidgetKind, WidgetState,
    WidgetTree, draw,
};
