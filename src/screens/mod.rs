//! Screen registry and tick dispatch.
//!
//! One screen is declared, [`main`]. [`create_screens`] initializes the
//! theme, builds every declared screen into a fresh tree, and returns the
//! assembled [`Ui`]. The embedding loop then runs one tick per frame through
//! [`tick_screen`] (zero-based index) or [`tick_screen_by_id`] (1-based
//! [`ScreenId`]) and redraws when the tree reports itself changed.

pub mod main;

pub use main::{create_screen_main, tick_screen_main};

use crate::colors::{PALETTE_BLUE, PALETTE_RED};
use crate::theme::Theme;
use crate::widgets::{WidgetId, WidgetTree};

/// Handle of every named widget, in declaration order.
///
/// Filled exactly once by [`create_screen_main`]; read-only afterwards.
/// `ind4` is declared before `ind3`, matching the creation order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Objects {
    pub main: WidgetId,
    pub panel1: WidgetId,
    pub titulo: WidgetId,
    pub panel2: WidgetId,
    pub arc1: WidgetId,
    pub arc2: WidgetId,
    pub arc3: WidgetId,
    pub arc4: WidgetId,
    pub ind1: WidgetId,
    pub ind2: WidgetId,
    pub ind4: WidgetId,
    pub ind3: WidgetId,
    pub aux1: WidgetId,
    pub aux2: WidgetId,
    pub aux3: WidgetId,
    pub aux4: WidgetId,
}

/// The assembled interface: widget tree plus named handles.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ui {
    pub tree: WidgetTree,
    pub objects: Objects,
}

/// 1-based screen identifiers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScreenId {
    Main = 1,
}

pub const SCREEN_COUNT: usize = 1;

/// Per-frame update hook of one screen.
pub type TickFn = fn(&mut WidgetTree, &Objects);

/// Tick functions by zero-based screen index.
pub const TICK_SCREEN_FUNCS: [TickFn; SCREEN_COUNT] = [tick_screen_main];

/// Runs one screen's tick by zero-based index.
///
/// An out-of-range index is a caller bug; the table lookup panics on it.
pub fn tick_screen(ui: &mut Ui, screen_index: usize) {
    TICK_SCREEN_FUNCS[screen_index](&mut ui.tree, &ui.objects);
}

/// Runs one screen's tick by its 1-based identifier.
pub fn tick_screen_by_id(ui: &mut Ui, screen_id: ScreenId) {
    TICK_SCREEN_FUNCS[screen_id as usize - 1](&mut ui.tree, &ui.objects);
}

/// Initializes the default light theme with the transmitter palette, then
/// builds every declared screen.
pub fn create_screens() -> Ui {
    let theme = Theme::light(PALETTE_BLUE, PALETTE_RED);
    let mut tree = WidgetTree::new(theme);
    let objects = create_screen_main(&mut tree);
    Ui { tree, objects }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_table_shape() {
        assert_eq!(TICK_SCREEN_FUNCS.len(), SCREEN_COUNT);
        assert_eq!(ScreenId::Main as usize, 1, "identifiers are 1-based");
    }

    #[test]
    fn test_create_screens_builds_the_panel() {
        let ui = create_screens();
        assert_eq!(ui.tree.len(), main::MAIN_SCREEN_WIDGET_COUNT);
        assert_eq!(ui.tree.parent(ui.objects.main), None);
    }

    #[test]
    fn test_tick_by_index_and_id_agree_and_do_nothing() {
        let mut by_index = create_screens();
        let mut by_id = by_index.clone();
        let before = by_index.clone();

        tick_screen(&mut by_index, 0);
        tick_screen_by_id(&mut by_id, ScreenId::Main);

        assert_eq!(by_index, by_id, "both dispatch paths must reach the same tick");
        assert_eq!(by_index, before, "the main screen tick leaves every widget untouched");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_out_of_range_index_panics() {
        let mut ui = create_screens();
        tick_screen(&mut ui, SCREEN_COUNT);
    }
}
