//! Main screen: the transmitter's one and only instrument panel.
//!
//! Layout, 320x240:
//!
//! ```text
//! +------------------------------------------+
//! |              Mando RC    (header)        |
//! | +--------------------------------------+ |
//! | | (arc1) (arc2) (arc3) (arc4)  gauges  | |
//! | |  ind1   ind2   ind3   ind4  readouts | |
//! | | [ ] GPS  RESCUE                      | |
//! | | [ ] OPTICAL FLOW          drone      | |
//! | | [ ] ARMED                 pictogram  | |
//! | | [ ] GPS HOLD                         | |
//! | +--------------------------------------+ |
//! +------------------------------------------+
//! ```
//!
//! Everything is positioned with literal coordinates; there is no layout
//! pass. The builder records each named widget into [`Objects`] and the
//! creation order below fixes the z-order.

use crate::assets::IMG_DRONE;
use crate::colors::{BLACK, WHITE, rgb};
use crate::config::MAX_WIDGETS;
use crate::screens::Objects;
use crate::widgets::{Dim, RADIUS_CIRCLE, Selector, TextAlign, WidgetState, WidgetTree};

/// Nodes the main screen creates, the anonymous pictogram included.
pub(crate) const MAIN_SCREEN_WIDGET_COUNT: usize = 17;
const _: () = assert!(MAIN_SCREEN_WIDGET_COUNT <= MAX_WIDGETS);

/// Builds the main screen into `tree` and returns the filled registry.
///
/// Calling this twice builds a second, independent subtree with its own
/// registry; nothing guards against that.
pub fn create_screen_main(tree: &mut WidgetTree) -> Objects {
    let main = tree.panel(None);
    tree.set_pos(main, 0, 0);
    tree.set_size(main, Dim::Px(320), Dim::Px(240));
    tree.set_style_bg_color(main, WHITE, Selector::MAIN);
    tree.set_style_arc_color(main, BLACK, Selector::MAIN);
    tree.set_style_bg_color(main, WHITE, Selector::MAIN.with_state(WidgetState::Edited));

    // panel1
    let panel1 = tree.panel(Some(main));
    tree.set_pos(panel1, 0, 4);
    tree.set_size(panel1, Dim::Px(330), Dim::Px(29));
    tree.set_style_bg_color(panel1, rgb(0x9ae9bd), Selector::MAIN);
    tree.set_style_radius(panel1, 0, Selector::MAIN);

    // titulo
    let titulo = tree.label(main);
    tree.set_pos(titulo, 119, 9);
    tree.set_size(titulo, Dim::Content, Dim::Content);
    tree.set_label_text(titulo, "Mando RC  ");

    // panel2
    let panel2 = tree.panel(Some(main));
    tree.set_pos(panel2, 3, 33);
    tree.set_size(panel2, Dim::Px(314), Dim::Px(193));
    tree.set_style_border_color(panel2, rgb(0xfdfdfd), Selector::MAIN);

    // arc1 (throttle, stock 0..100 range)
    let arc1 = tree.arc(main);
    tree.set_pos(arc1, 22, 41);
    tree.set_size(arc1, Dim::Px(63), Dim::Px(66));
    tree.set_arc_value(arc1, 0);
    tree.set_style_arc_width(arc1, 3, Selector::INDICATOR);
    tree.set_style_arc_color(arc1, rgb(0x48f38d), Selector::INDICATOR);
    tree.set_style_arc_width(arc1, 5, Selector::MAIN);
    tree.set_style_arc_color(arc1, rgb(0x84c0f5), Selector::MAIN);
    tree.set_style_bg_grad_color(arc1, rgb(0xe52424), Selector::MAIN);
    tree.set_style_radius(arc1, RADIUS_CIRCLE, Selector::KNOB);
    tree.set_style_bg_color(arc1, rgb(0x3e55c6), Selector::KNOB);

    // arc2
    let arc2 = tree.arc(main);
    tree.set_pos(arc2, 97, 41);
    tree.set_size(arc2, Dim::Px(63), Dim::Px(66));
    tree.set_arc_range(arc2, -30, 30);
    tree.set_arc_value(arc2, 0);
    tree.set_style_arc_width(arc2, 3, Selector::INDICATOR);
    tree.set_style_arc_color(arc2, rgb(0xb762fd), Selector::INDICATOR);
    tree.set_style_image_recolor(arc2, BLACK, Selector::INDICATOR);
    tree.set_style_arc_width(arc2, 5, Selector::MAIN);
    tree.set_style_arc_color(arc2, rgb(0xe0b7dd), Selector::MAIN);
    tree.set_style_bg_color(arc2, rgb(0x9a6ebe), Selector::KNOB);

    // arc3
    let arc3 = tree.arc(main);
    tree.set_pos(arc3, 170, 41);
    tree.set_size(arc3, Dim::Px(63), Dim::Px(66));
    tree.set_arc_range(arc3, -30, 30);
    tree.set_arc_value(arc3, 0);
    tree.set_style_arc_width(arc3, 3, Selector::INDICATOR);
    tree.set_style_arc_color(arc3, rgb(0x6ab9f7), Selector::INDICATOR);
    tree.set_style_arc_width(arc3, 5, Selector::MAIN);
    tree.set_style_text_color(arc3, rgb(0x212121), Selector::MAIN);
    tree.set_style_arc_color(arc3, rgb(0xb0f7f6), Selector::MAIN);
    tree.set_style_bg_color(arc3, rgb(0x2aa9ca), Selector::KNOB);

    // arc4
    let arc4 = tree.arc(main);
    tree.set_pos(arc4, 248, 41);
    tree.set_size(arc4, Dim::Px(63), Dim::Px(66));
    tree.set_arc_range(arc4, -30, 30);
    tree.set_arc_value(arc4, 0);
    tree.set_style_arc_width(arc4, 3, Selector::INDICATOR);
    tree.set_style_arc_opa(arc4, 255, Selector::INDICATOR);
    tree.set_style_arc_color(arc4, rgb(0x21f3a4), Selector::INDICATOR);
    tree.set_style_arc_width(arc4, 5, Selector::MAIN);
    tree.set_style_arc_color(arc4, rgb(0x90dab7), Selector::MAIN);
    tree.set_style_bg_color(arc4, rgb(0x40e56c), Selector::KNOB);

    // ind1
    let ind1 = tree.label(main);
    tree.set_pos(ind1, 39, 66);
    tree.set_size(ind1, Dim::Px(30), Dim::Content);
    tree.set_style_text_align(ind1, TextAlign::Center, Selector::MAIN);
    tree.set_style_pad_top(ind1, 0, Selector::MAIN);
    tree.set_style_pad_bottom(ind1, 0, Selector::MAIN);
    tree.set_style_pad_right(ind1, 0, Selector::MAIN);
    tree.set_style_pad_left(ind1, 0, Selector::MAIN);
    tree.set_label_text(ind1, "0");

    // ind2
    let ind2 = tree.label(main);
    tree.set_pos(ind2, 114, 66);
    tree.set_size(ind2, Dim::Px(30), Dim::Content);
    tree.set_style_text_align(ind2, TextAlign::Center, Selector::MAIN);
    tree.set_label_text(ind2, "0");

    // ind4 is declared and created before ind3
    let ind4 = tree.label(main);
    tree.set_pos(ind4, 265, 66);
    tree.set_size(ind4, Dim::Px(30), Dim::Content);
    tree.set_style_text_align(ind4, TextAlign::Center, Selector::MAIN);
    tree.set_label_text(ind4, "0");

    // ind3
    let ind3 = tree.label(main);
    tree.set_pos(ind3, 186, 66);
    tree.set_size(ind3, Dim::Px(30), Dim::Content);
    tree.set_style_text_align(ind3, TextAlign::Center, Selector::MAIN);
    tree.set_label_text(ind3, "0");

    // AUX1
    let aux1 = tree.checkbox(main);
    tree.set_pos(aux1, 9, 120);
    tree.set_size(aux1, Dim::Content, Dim::Content);
    tree.set_checkbox_text(aux1, "GPS  RESCUE");

    // AUX2
    let aux2 = tree.checkbox(main);
    tree.set_pos(aux2, 9, 146);
    tree.set_size(aux2, Dim::Content, Dim::Content);
    tree.set_checkbox_text(aux2, "OPTICAL FLOW");

    // AUX3
    let aux3 = tree.checkbox(main);
    tree.set_pos(aux3, 9, 175);
    tree.set_size(aux3, Dim::Content, Dim::Content);
    tree.set_checkbox_text(aux3, "ARMED");

    // AUX4
    let aux4 = tree.checkbox(main);
    tree.set_pos(aux4, 9, 203);
    tree.set_size(aux4, Dim::Content, Dim::Content);
    tree.set_checkbox_text(aux4, "GPS HOLD");

    // drone pictogram, intentionally absent from the registry
    let image = tree.image(main);
    tree.set_pos(image, 223, 151);
    tree.set_size(image, Dim::Content, Dim::Content);
    tree.set_image(image, &IMG_DRONE);

    let objects = Objects {
        main,
        panel1,
        titulo,
        panel2,
        arc1,
        arc2,
        arc3,
        arc4,
        ind1,
        ind2,
        ind4,
        ind3,
        aux1,
        aux2,
        aux3,
        aux4,
    };
    tick_screen_main(tree, &objects);
    objects
}

/// Per-frame hook for the main screen.
///
/// Telemetry updates flow in from the embedding loop through the registry
/// handles, so there is nothing to do here yet.
pub fn tick_screen_main(_tree: &mut WidgetTree, _objects: &Objects) {}

// =============================================================================
// Unit Tests
// =============================================================================
