//! Style selectors and property sets.
//!
//! Every widget carries a small list of [`Style`] entries keyed by a
//! [`Selector`] (part + state). A property left `None` falls through to the
//! next layer when the tree resolves styles for drawing:
//!
//! 1. entry matching the widget's current state,
//! 2. entry for the default state,
//! 3. theme base style for the widget kind.
//!
//! This mirrors how the screen definition addresses widgets: the gauge arcs
//! style their background track, value indicator, and knob independently,
//! and the root screen carries one state-specific background override.

use embedded_graphics::pixelcolor::Rgb565;

/// Radius value that renders a corner fully round (clamped to half the box).
pub const RADIUS_CIRCLE: u32 = 0x7fff;

/// Widget part addressed by a style selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Part {
    /// The widget body: background, border, text.
    Main,
    /// The value-carrying element: arc indicator, checkbox box.
    Indicator,
    /// The grab handle at the end of an arc indicator.
    Knob,
}

/// Widget state a style entry applies to.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum WidgetState {
    #[default]
    Default,
    /// Checkbox is ticked.
    Checked,
    /// Widget is being edited (encoder focus on hardware builds).
    Edited,
}

/// (part, state) pair addressed by the style setters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Selector {
    pub part: Part,
    pub state: WidgetState,
}

impl Selector {
    /// Main part in the default state.
    pub const MAIN: Self = Self {
        part: Part::Main,
        state: WidgetState::Default,
    };

    /// Indicator part in the default state.
    pub const INDICATOR: Self = Self {
        part: Part::Indicator,
        state: WidgetState::Default,
    };

    /// Knob part in the default state.
    pub const KNOB: Self = Self {
        part: Part::Knob,
        state: WidgetState::Default,
    };

    /// Same part, different state.
    pub const fn with_state(self, state: WidgetState) -> Self {
        Self { part: self.part, state }
    }
}

/// Horizontal text alignment inside the widget box.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One optional value per supported style property.
///
/// Opacities are binary on an RGB565 target: zero hides the element, any
/// other value draws it fully opaque.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Style {
    pub bg_color: Option<Rgb565>,
    pub bg_grad_color: Option<Rgb565>,
    pub border_color: Option<Rgb565>,
    pub border_width: Option<u32>,
    pub radius: Option<u32>,
    pub arc_color: Option<Rgb565>,
    pub arc_width: Option<u32>,
    pub arc_opa: Option<u8>,
    pub text_color: Option<Rgb565>,
    pub text_align: Option<TextAlign>,
    pub pad_top: Option<i32>,
    pub pad_bottom: Option<i32>,
    pub pad_left: Option<i32>,
    pub pad_right: Option<i32>,
    pub image_recolor: Option<Rgb565>,
}

impl Style {
    /// Copy every property set in `over` onto `self`, keeping the rest.
    pub fn overlay(&mut self, over: &Style) {
        self.bg_color = over.bg_color.or(self.bg_color);
        self.bg_grad_color = over.bg_grad_color.or(self.bg_grad_color);
        self.border_color = over.border_color.or(self.border_color);
        self.border_width = over.border_width.or(self.border_width);
        self.radius = over.radius.or(self.radius);
        self.arc_color = over.arc_color.or(self.arc_color);
        self.arc_width = over.arc_width.or(self.arc_width);
        self.arc_opa = over.arc_opa.or(self.arc_opa);
        self.text_color = over.text_color.or(self.text_color);
        self.text_align = over.text_align.or(self.text_align);
        self.pad_top = over.pad_top.or(self.pad_top);
        self.pad_bottom = over.pad_bottom.or(self.pad_bottom);
        self.pad_left = over.pad_left.or(self.pad_left);
        self.pad_right = over.pad_right.or(self.pad_right);
        self.image_recolor = over.image_recolor.or(self.image_recolor);
    }
}

/// Style entry stored on a widget node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct StyleEntry {
    pub(crate) selector: Selector,
    pub(crate) style: Style,
}

// =============================================================================
// Unit Tests
// =============================================================================
