//! Default visual theme.
//!
//! Widgets pick up kind-appropriate base styles from the tree's theme, and
//! every style entry set on a widget overlays them. The panel reproduces the
//! stock light theme of the original transmitter firmware: white surfaces,
//! gray hairline borders, blue primary accents with a red secondary.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use profont::PROFONT_10_POINT;

use crate::colors::{ARC_GRAY, BLACK, BORDER_GRAY, PALETTE_BLUE, PALETTE_RED, WHITE};
use crate::widgets::{Part, Style, WidgetKind, WidgetState};

// =============================================================================
// Theme Metrics
// =============================================================================

/// Font for all themed text: the title, numeric readouts, and checkbox
/// captions. Usage: `MonoTextStyle::new(THEME_FONT, color)`.
pub const THEME_FONT: &MonoFont = &PROFONT_10_POINT;

/// Corner radius of plain panels.
pub const PANEL_RADIUS: u32 = 8;
/// Border width of plain panels.
pub const PANEL_BORDER_WIDTH: u32 = 2;
/// Content padding of plain panels, all four sides.
pub const PANEL_PAD: i32 = 10;
/// Width of the arc background track and value indicator.
pub const ARC_TRACK_WIDTH: u32 = 6;
/// Corner radius of the checkbox tick box.
pub const CHECKBOX_RADIUS: u32 = 3;
/// Border width of the checkbox tick box.
pub const CHECKBOX_BORDER_WIDTH: u32 = 2;
/// Gap between the checkbox tick box and its label text.
pub const CHECKBOX_GAP: i32 = 6;

// =============================================================================
// Theme
// =============================================================================

/// Palette-parameterized light theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    pub primary: Rgb565,
    pub secondary: Rgb565,
}

impl Theme {
    /// Light theme with the given accent palette.
    pub const fn light(primary: Rgb565, secondary: Rgb565) -> Self {
        Self { primary, secondary }
    }

    /// Base style for a widget part, before any widget-local entries overlay
    /// it. `root` selects screen styling for the parentless panel.
    pub fn base_style(
        &self,
        kind: WidgetKind,
        part: Part,
        state: WidgetState,
        root: bool,
    ) -> Style {
        match (kind, part) {
            (WidgetKind::Panel, Part::Main) if root => Style {
                bg_color: Some(WHITE),
                text_color: Some(BLACK),
                ..Style::default()
            },
            (WidgetKind::Panel, Part::Main) => Style {
                bg_color: Some(WHITE),
                border_color: Some(BORDER_GRAY),
                border_width: Some(PANEL_BORDER_WIDTH),
                radius: Some(PANEL_RADIUS),
                text_color: Some(BLACK),
                pad_top: Some(PANEL_PAD),
                pad_bottom: Some(PANEL_PAD),
                pad_left: Some(PANEL_PAD),
                pad_right: Some(PANEL_PAD),
                ..Style::default()
            },
            (WidgetKind::Label, Part::Main) => Style {
                text_color: Some(BLACK),
                ..Style::default()
            },
            (WidgetKind::Arc, Part::Main) => Style {
                arc_color: Some(ARC_GRAY),
                arc_width: Some(ARC_TRACK_WIDTH),
                ..Style::default()
            },
            (WidgetKind::Arc, Part::Indicator) => Style {
                arc_color: Some(self.primary),
                arc_width: Some(ARC_TRACK_WIDTH),
                ..Style::default()
            },
            (WidgetKind::Arc, Part::Knob) => Style {
                bg_color: Some(self.primary),
                ..Style::default()
            },
            (WidgetKind::Checkbox, Part::Main) => Style {
                text_color: Some(BLACK),
                ..Style::default()
            },
            (WidgetKind::Checkbox, Part::Indicator) => {
                let accent = state == WidgetState::Checked;
                Style {
                    bg_color: Some(if accent { self.primary } else { WHITE }),
                    border_color: Some(if accent { self.primary } else { BORDER_GRAY }),
                    border_width: Some(CHECKBOX_BORDER_WIDTH),
                    radius: Some(CHECKBOX_RADIUS),
                    ..Style::default()
                }
            }
            _ => Style::default(),
        }
    }
}

impl Default for Theme {
    /// The transmitter palette: blue primary, red secondary.
    fn default() -> Self {
        Self::light(PALETTE_BLUE, PALETTE_RED)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.primary, PALETTE_BLUE);
        assert_eq!(theme.secondary, PALETTE_RED);
    }

    #[test]
    fn test_screen_vs_panel_base() {
        let theme = Theme::default();
        let screen = theme.base_style(WidgetKind::Panel, Part::Main, WidgetState::Default, true);
        let panel = theme.base_style(WidgetKind::Panel, Part::Main, WidgetState::Default, false);

        assert_eq!(screen.bg_color, Some(WHITE));
        assert_eq!(screen.border_width, None, "screens have no border");
        assert_eq!(panel.border_width, Some(PANEL_BORDER_WIDTH));
        assert_eq!(panel.radius, Some(PANEL_RADIUS));
    }

    #[test]
    fn test_arc_parts_use_primary() {
        let theme = Theme::default();
        let track = theme.base_style(WidgetKind::Arc, Part::Main, WidgetState::Default, false);
        let ind = theme.base_style(WidgetKind::Arc, Part::Indicator, WidgetState::Default, false);
        let knob = theme.base_style(WidgetKind::Arc, Part::Knob, WidgetState::Default, false);

        assert_eq!(track.arc_color, Some(ARC_GRAY));
        assert_eq!(ind.arc_color, Some(theme.primary));
        assert_eq!(knob.bg_color, Some(theme.primary));
    }

    #[test]
    fn test_checkbox_indicator_follows_state() {
        let theme = Theme::default();
        let off =
            theme.base_style(WidgetKind::Checkbox, Part::Indicator, WidgetState::Default, false);
        let on =
            theme.base_style(WidgetKind::Checkbox, Part::Indicator, WidgetState::Checked, false);

        assert_eq!(off.bg_color, Some(WHITE));
        assert_eq!(on.bg_color, Some(theme.primary), "checked box fills with the accent");
        assert_eq!(on.border_color, Some(theme.primary));
    }

    #[test]
    fn test_image_has_no_base_style() {
        let theme = Theme::default();
        let style = theme.base_style(WidgetKind::Image, Part::Main, WidgetState::Default, false);
        assert_eq!(style, Style::default());
    }
}
