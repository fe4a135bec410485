//! Retained widget layer.
//!
//! - [`tree`]: fixed-capacity widget arena addressed by opaque handles
//! - [`style`]: per-part, per-state style properties and selectors
//! - [`draw`]: depth-first renderer onto any `DrawTarget<Color = Rgb565>`
//!
//! The screen builder in [`screens`](crate::screens) only ever talks to
//! [`tree::WidgetTree`]; drawing and style resolution stay behind it.

pub mod draw;
pub mod style;
pub mod tree;

pub use draw::draw;
pub use style::{Part, RADIUS_CIRCLE, Selector, Style, TextAlign, WidgetState};
pub use tree::{Dim, WidgetId, WidgetKind, WidgetTree};
