//! Fixed-capacity widget tree.
//!
//! All widgets live in one arena owned by [`WidgetTree`]; the rest of the
//! crate addresses them through copyable [`WidgetId`] handles. Creation order
//! doubles as z-order between siblings. There is no removal: the tree is
//! built once at startup and mutated in place by telemetry updates.
//!
//! Capacity limits come from [`crate::config`]. Exceeding them is a
//! programming error (the screen topology is fixed), so the tree panics
//! rather than reporting a recoverable error.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use heapless::{String, Vec};

use crate::assets::ImageAsset;
use crate::config::{MAX_STYLE_ENTRIES, MAX_WIDGETS, TEXT_LEN};
use crate::theme::{CHECKBOX_GAP, THEME_FONT, Theme};
use crate::widgets::style::{Part, Selector, Style, StyleEntry, TextAlign, WidgetState};

type Text = String<TEXT_LEN>;

// =============================================================================
// Handles, Kinds, Dimensions
// =============================================================================

/// Opaque handle to a widget node.
///
/// Only meaningful with the tree that created it. Handles compare and order
/// like their creation order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct WidgetId(usize);

/// Widget kind tag, as reported by [`WidgetTree::kind`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WidgetKind {
    Panel,
    Label,
    Arc,
    Checkbox,
    Image,
}

/// Per-axis size: fixed pixels or intrinsic content size.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Dim {
    Px(u32),
    #[default]
    Content,
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum WidgetData {
    Panel,
    Label { text: Text },
    Arc { value: i32, min: i32, max: i32 },
    Checkbox { text: Text },
    Image { asset: Option<&'static ImageAsset> },
}

#[derive(Clone, PartialEq, Eq, Debug)]
struct Node {
    parent: Option<WidgetId>,
    pos: Point,
    width: Dim,
    height: Dim,
    state: WidgetState,
    styles: Vec<StyleEntry, MAX_STYLE_ENTRIES>,
    data: WidgetData,
}

// =============================================================================
// Widget Tree
// =============================================================================

/// Arena of widget nodes plus the theme their base styles come from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WidgetTree {
    nodes: Vec<Node, MAX_WIDGETS>,
    theme: Theme,
    changed: bool,
}

impl WidgetTree {
    pub fn new(theme: Theme) -> Self {
        Self {
            nodes: Vec::new(),
            theme,
            changed: false,
        }
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// Creates a panel. `None` creates a parentless root (a screen).
    ///
    /// Panics when the arena is full.
    pub fn panel(&mut self, parent: Option<WidgetId>) -> WidgetId {
        self.add(parent, WidgetData::Panel)
    }

    /// Creates an empty label. Panics when the arena is full.
    pub fn label(&mut self, parent: WidgetId) -> WidgetId {
        self.add(Some(parent), WidgetData::Label { text: Text::new() })
    }

    /// Creates an arc with the stock 0..100 range and value 0.
    ///
    /// Panics when the arena is full.
    pub fn arc(&mut self, parent: WidgetId) -> WidgetId {
        self.add(
            Some(parent),
            WidgetData::Arc {
                value: 0,
                min: 0,
                max: 100,
            },
        )
    }

    /// Creates an unchecked checkbox with empty text.
    ///
    /// Panics when the arena is full.
    pub fn checkbox(&mut self, parent: WidgetId) -> WidgetId {
        self.add(Some(parent), WidgetData::Checkbox { text: Text::new() })
    }

    /// Creates an image widget with no source set.
    ///
    /// Panics when the arena is full.
    pub fn image(&mut self, parent: WidgetId) -> WidgetId {
        self.add(Some(parent), WidgetData::Image { asset: None })
    }

    fn add(&mut self, parent: Option<WidgetId>, data: WidgetData) -> WidgetId {
        let id = WidgetId(self.nodes.len());
        let node = Node {
            parent,
            pos: Point::zero(),
            width: Dim::Content,
            height: Dim::Content,
            state: WidgetState::Default,
            styles: Vec::new(),
            data,
        };
        if self.nodes.push(node).is_err() {
            panic!("widget arena full, raise MAX_WIDGETS");
        }
        self.changed = true;
        id
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Position relative to the parent's origin.
    pub fn set_pos(&mut self, id: WidgetId, x: i32, y: i32) {
        self.node_mut(id).pos = Point::new(x, y);
        self.changed = true;
    }

    pub fn set_size(&mut self, id: WidgetId, width: Dim, height: Dim) {
        let node = self.node_mut(id);
        node.width = width;
        node.height = height;
        self.changed = true;
    }

    pub fn pos(&self, id: WidgetId) -> Point {
        self.node(id).pos
    }

    /// Resolved size in pixels; `Content` axes use the widget's intrinsic
    /// content size (font metrics for text, asset dimensions for images).
    pub fn size(&self, id: WidgetId) -> Size {
        let node = self.node(id);
        let content = self.content_size(id);
        let width = match node.width {
            Dim::Px(w) => w,
            Dim::Content => content.width,
        };
        let height = match node.height {
            Dim::Px(h) => h,
            Dim::Content => content.height,
        };
        Size::new(width, height)
    }

    fn content_size(&self, id: WidgetId) -> Size {
        match &self.node(id).data {
            WidgetData::Label { text } => text_size(text),
            WidgetData::Checkbox { text } => {
                let tick_box = THEME_FONT.character_size.height;
                let text = text_size(text);
                Size::new(
                    tick_box + CHECKBOX_GAP as u32 + text.width,
                    text.height.max(tick_box),
                )
            }
            WidgetData::Image { asset: Some(asset) } => asset.size(),
            _ => Size::zero(),
        }
    }

    // -------------------------------------------------------------------------
    // Styles
    // -------------------------------------------------------------------------

    pub fn set_style_bg_color(&mut self, id: WidgetId, color: Rgb565, selector: Selector) {
        self.style_entry(id, selector).bg_color = Some(color);
    }

    pub fn set_style_bg_grad_color(&mut self, id: WidgetId, color: Rgb565, selector: Selector) {
        self.style_entry(id, selector).bg_grad_color = Some(color);
    }

    pub fn set_style_border_color(&mut self, id: WidgetId, color: Rgb565, selector: Selector) {
        self.style_entry(id, selector).border_color = Some(color);
    }

    pub fn set_style_border_width(&mut self, id: WidgetId, width: u32, selector: Selector) {
        self.style_entry(id, selector).border_width = Some(width);
    }

    pub fn set_style_radius(&mut self, id: WidgetId, radius: u32, selector: Selector) {
        self.style_entry(id, selector).radius = Some(radius);
    }

    pub fn set_style_arc_color(&mut self, id: WidgetId, color: Rgb565, selector: Selector) {
        self.style_entry(id, selector).arc_color = Some(color);
    }

    pub fn set_style_arc_width(&mut self, id: WidgetId, width: u32, selector: Selector) {
        self.style_entry(id, selector).arc_width = Some(width);
    }

    pub fn set_style_arc_opa(&mut self, id: WidgetId, opa: u8, selector: Selector) {
        self.style_entry(id, selector).arc_opa = Some(opa);
    }

    pub fn set_style_text_color(&mut self, id: WidgetId, color: Rgb565, selector: Selector) {
        self.style_entry(id, selector).text_color = Some(color);
    }

    pub fn set_style_text_align(&mut self, id: WidgetId, align: TextAlign, selector: Selector) {
        self.style_entry(id, selector).text_align = Some(align);
    }

    pub fn set_style_pad_top(&mut self, id: WidgetId, pad: i32, selector: Selector) {
        self.style_entry(id, selector).pad_top = Some(pad);
    }

    pub fn set_style_pad_bottom(&mut self, id: WidgetId, pad: i32, selector: Selector) {
        self.style_entry(id, selector).pad_bottom = Some(pad);
    }

    pub fn set_style_pad_left(&mut self, id: WidgetId, pad: i32, selector: Selector) {
        self.style_entry(id, selector).pad_left = Some(pad);
    }

    pub fn set_style_pad_right(&mut self, id: WidgetId, pad: i32, selector: Selector) {
        self.style_entry(id, selector).pad_right = Some(pad);
    }

    pub fn set_style_image_recolor(&mut self, id: WidgetId, color: Rgb565, selector: Selector) {
        self.style_entry(id, selector).image_recolor = Some(color);
    }

    /// Style for one part of a widget, with theme base, default-state entry,
    /// and current-state entry overlaid in that order.
    pub fn resolved_style(&self, id: WidgetId, part: Part) -> Style {
        let node = self.node(id);
        let state = node.state;
        let mut style = self.theme.base_style(self.kind(id), part, state, node.parent.is_none());
        if let Some(entry) = self.find_entry(id, Selector { part, state: WidgetState::Default }) {
            style.overlay(entry);
        }
        if state != WidgetState::Default {
            if let Some(entry) = self.find_entry(id, Selector { part, state }) {
                style.overlay(entry);
            }
        }
        style
    }

    fn find_entry(&self, id: WidgetId, selector: Selector) -> Option<&Style> {
        self.node(id)
            .styles
            .iter()
            .find(|entry| entry.selector == selector)
            .map(|entry| &entry.style)
    }

    fn style_entry(&mut self, id: WidgetId, selector: Selector) -> &mut Style {
        self.changed = true;
        let node = &mut self.nodes[id.0];
        if let Some(idx) = node.styles.iter().position(|entry| entry.selector == selector) {
            return &mut node.styles[idx].style;
        }
        let entry = StyleEntry {
            selector,
            style: Style::default(),
        };
        if node.styles.push(entry).is_err() {
            panic!("style list full, raise MAX_STYLE_ENTRIES");
        }
        let last = node.styles.len() - 1;
        &mut node.styles[last].style
    }

    // -------------------------------------------------------------------------
    // Runtime Updates
    // -------------------------------------------------------------------------

    /// Replaces a label's text; anything beyond the text capacity is
    /// truncated. Panics on a non-label widget.
    pub fn set_label_text(&mut self, id: WidgetId, text: &str) {
        match &mut self.node_mut(id).data {
            WidgetData::Label { text: stored } => fill(stored, text),
            _ => panic!("set_label_text on a non-label widget"),
        }
        self.changed = true;
    }

    /// Replaces a checkbox's text; anything beyond the text capacity is
    /// truncated. Panics on a non-checkbox widget.
    pub fn set_checkbox_text(&mut self, id: WidgetId, text: &str) {
        match &mut self.node_mut(id).data {
            WidgetData::Checkbox { text: stored } => fill(stored, text),
            _ => panic!("set_checkbox_text on a non-checkbox widget"),
        }
        self.changed = true;
    }

    /// Sets an arc's value, clamped to its range. Panics on a non-arc widget.
    pub fn set_arc_value(&mut self, id: WidgetId, value: i32) {
        match &mut self.node_mut(id).data {
            WidgetData::Arc { value: stored, min, max } => *stored = value.clamp(*min, *max),
            _ => panic!("set_arc_value on a non-arc widget"),
        }
        self.changed = true;
    }

    /// Sets an arc's range and re-clamps its value into it. Panics on a
    /// non-arc widget or when `min > max`.
    pub fn set_arc_range(&mut self, id: WidgetId, min: i32, max: i32) {
        match &mut self.node_mut(id).data {
            WidgetData::Arc { value, min: lo, max: hi } => {
                *lo = min;
                *hi = max;
                *value = (*value).clamp(min, max);
            }
            _ => panic!("set_arc_range on a non-arc widget"),
        }
        self.changed = true;
    }

    /// Moves a widget between the checked and default states.
    pub fn set_checked(&mut self, id: WidgetId, checked: bool) {
        self.node_mut(id).state = if checked {
            WidgetState::Checked
        } else {
            WidgetState::Default
        };
        self.changed = true;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn kind(&self, id: WidgetId) -> WidgetKind {
        match &self.node(id).data {
            WidgetData::Panel => WidgetKind::Panel,
            WidgetData::Label { .. } => WidgetKind::Label,
            WidgetData::Arc { .. } => WidgetKind::Arc,
            WidgetData::Checkbox { .. } => WidgetKind::Checkbox,
            WidgetData::Image { .. } => WidgetKind::Image,
        }
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).parent
    }

    /// Children of `id` in creation order, which is also their z-order
    /// (later siblings draw on top).
    pub fn children(&self, id: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(id))
            .map(|(idx, _)| WidgetId(idx))
    }

    /// Text of a label or checkbox. Panics on widgets without text.
    pub fn text(&self, id: WidgetId) -> &str {
        match &self.node(id).data {
            WidgetData::Label { text } | WidgetData::Checkbox { text } => text.as_str(),
            _ => panic!("widget has no text"),
        }
    }

    /// Current arc value. Panics on a non-arc widget.
    pub fn arc_value(&self, id: WidgetId) -> i32 {
        match &self.node(id).data {
            WidgetData::Arc { value, .. } => *value,
            _ => panic!("arc_value on a non-arc widget"),
        }
    }

    /// `(min, max)` range of an arc. Panics on a non-arc widget.
    pub fn arc_range(&self, id: WidgetId) -> (i32, i32) {
        match &self.node(id).data {
            WidgetData::Arc { min, max, .. } => (*min, *max),
            _ => panic!("arc_range on a non-arc widget"),
        }
    }

    pub fn state(&self, id: WidgetId) -> WidgetState {
        self.node(id).state
    }

    pub fn is_checked(&self, id: WidgetId) -> bool {
        self.state(id) == WidgetState::Checked
    }

    /// Sets an image widget's source asset. Panics on a non-image widget.
    pub fn set_image(&mut self, id: WidgetId, asset: &'static ImageAsset) {
        match &mut self.node_mut(id).data {
            WidgetData::Image { asset: stored } => *stored = Some(asset),
            _ => panic!("set_image on a non-image widget"),
        }
        self.changed = true;
    }

    pub(crate) fn image_asset(&self, id: WidgetId) -> Option<&'static ImageAsset> {
        match &self.node(id).data {
            WidgetData::Image { asset } => *asset,
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when anything changed since the last call; clears the flag.
    /// The embedding loop uses this to skip redundant redraws.
    pub fn take_changed(&mut self) -> bool {
        core::mem::take(&mut self.changed)
    }

    fn node(&self, id: WidgetId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: WidgetId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

/// Pixel box a string occupies in the theme font.
pub(crate) fn text_size(text: &str) -> Size {
    let advance = THEME_FONT.character_size.width + THEME_FONT.character_spacing;
    Size::new(text.chars().count() as u32 * advance, THEME_FONT.character_size.height)
}

fn fill(dst: &mut Text, src: &str) {
    dst.clear();
    for ch in src.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, PALETTE_RED, WHITE};

    fn tree_with_root() -> (WidgetTree, WidgetId) {
        let mut tree = WidgetTree::new(Theme::default());
        let root = tree.panel(None);
        (tree, root)
    }

    // -------------------------------------------------------------------------
    // Creation & Structure
    // -------------------------------------------------------------------------

    #[test]
    fn test_creation_order_is_child_order() {
        let (mut tree, root) = tree_with_root();
        let a = tree.label(root);
        let b = tree.arc(root);
        let c = tree.checkbox(root);

        let children: std::vec::Vec<_> = tree.children(root).collect();
        assert_eq!(children, [a, b, c], "children should come back in creation order");
        assert!(a < b && b < c, "handles should order like creation order");
    }

    #[test]
    fn test_parent_links() {
        let (mut tree, root) = tree_with_root();
        let panel = tree.panel(Some(root));
        let label = tree.label(panel);

        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(panel), Some(root));
        assert_eq!(tree.parent(label), Some(panel));
    }

    #[test]
    fn test_kinds() {
        let (mut tree, root) = tree_with_root();
        assert_eq!(tree.kind(root), WidgetKind::Panel);
        let label = tree.label(root);
        let arc = tree.arc(root);
        let cb = tree.checkbox(root);
        let img = tree.image(root);

        assert_eq!(tree.kind(label), WidgetKind::Label);
        assert_eq!(tree.kind(arc), WidgetKind::Arc);
        assert_eq!(tree.kind(cb), WidgetKind::Checkbox);
        assert_eq!(tree.kind(img), WidgetKind::Image);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    #[should_panic(expected = "widget arena full")]
    fn test_arena_capacity_panics() {
        let (mut tree, root) = tree_with_root();
        for _ in 0..MAX_WIDGETS {
            tree.label(root);
        }
    }

    // -------------------------------------------------------------------------
    // Geometry & Content Sizing
    // -------------------------------------------------------------------------

    #[test]
    fn test_fixed_size() {
        let (mut tree, root) = tree_with_root();
        tree.set_pos(root, 0, 0);
        tree.set_size(root, Dim::Px(320), Dim::Px(240));

        assert_eq!(tree.pos(root), Point::zero());
        assert_eq!(tree.size(root), Size::new(320, 240));
    }

    #[test]
    fn test_label_content_size_follows_font() {
        let (mut tree, root) = tree_with_root();
        let label = tree.label(root);
        tree.set_label_text(label, "0");

        let advance = THEME_FONT.character_size.width + THEME_FONT.character_spacing;
        assert_eq!(tree.size(label), Size::new(advance, THEME_FONT.character_size.height));
    }

    #[test]
    fn test_mixed_px_and_content_axes() {
        let (mut tree, root) = tree_with_root();
        let label = tree.label(root);
        tree.set_label_text(label, "00");
        tree.set_size(label, Dim::Px(30), Dim::Content);

        let size = tree.size(label);
        assert_eq!(size.width, 30, "px axis should ignore the content size");
        assert_eq!(size.height, THEME_FONT.character_size.height);
    }

    #[test]
    fn test_checkbox_content_size_includes_tick_box() {
        let (mut tree, root) = tree_with_root();
        let cb = tree.checkbox(root);
        tree.set_checkbox_text(cb, "ARMED");

        let tick_box = THEME_FONT.character_size.height;
        let text = text_size("ARMED");
        let size = tree.size(cb);
        assert_eq!(size.width, tick_box + CHECKBOX_GAP as u32 + text.width);
        assert_eq!(size.height, text.height);
    }

    #[test]
    fn test_empty_panel_content_size_is_zero() {
        let (mut tree, root) = tree_with_root();
        let panel = tree.panel(Some(root));
        assert_eq!(tree.size(panel), Size::zero());
    }

    // -------------------------------------------------------------------------
    // Styles
    // -------------------------------------------------------------------------

    #[test]
    fn test_widget_style_overrides_theme() {
        let (mut tree, root) = tree_with_root();
        let panel = tree.panel(Some(root));
        tree.set_style_bg_color(panel, BLACK, Selector::MAIN);

        let style = tree.resolved_style(panel, Part::Main);
        assert_eq!(style.bg_color, Some(BLACK), "widget entry should override the theme");
        assert_eq!(
            style.radius,
            Some(crate::theme::PANEL_RADIUS),
            "unset properties should fall back to the theme"
        );
    }

    #[test]
    fn test_state_style_overrides_default_state() {
        let (mut tree, root) = tree_with_root();
        let cb = tree.checkbox(root);
        tree.set_style_text_color(cb, BLACK, Selector::MAIN);
        tree.set_style_text_color(cb, PALETTE_RED, Selector::MAIN.with_state(WidgetState::Checked));

        assert_eq!(tree.resolved_style(cb, Part::Main).text_color, Some(BLACK));
        tree.set_checked(cb, true);
        assert_eq!(tree.resolved_style(cb, Part::Main).text_color, Some(PALETTE_RED));
        tree.set_checked(cb, false);
        assert_eq!(tree.resolved_style(cb, Part::Main).text_color, Some(BLACK));
    }

    #[test]
    fn test_parts_style_independently() {
        let (mut tree, root) = tree_with_root();
        let arc = tree.arc(root);
        tree.set_style_arc_color(arc, WHITE, Selector::MAIN);
        tree.set_style_arc_color(arc, BLACK, Selector::INDICATOR);

        assert_eq!(tree.resolved_style(arc, Part::Main).arc_color, Some(WHITE));
        assert_eq!(tree.resolved_style(arc, Part::Indicator).arc_color, Some(BLACK));
    }

    // -------------------------------------------------------------------------
    // Runtime Updates
    // -------------------------------------------------------------------------

    #[test]
    fn test_label_text_roundtrip_and_truncation() {
        let (mut tree, root) = tree_with_root();
        let label = tree.label(root);
        tree.set_label_text(label, "Mando RC  ");
        assert_eq!(tree.text(label), "Mando RC  ");

        tree.set_label_text(label, "an overlong telemetry string");
        assert_eq!(tree.text(label).len(), TEXT_LEN, "overflow should truncate");
    }

    #[test]
    fn test_arc_value_clamps_to_range() {
        let (mut tree, root) = tree_with_root();
        let arc = tree.arc(root);
        assert_eq!(tree.arc_range(arc), (0, 100), "stock range");

        tree.set_arc_value(arc, 150);
        assert_eq!(tree.arc_value(arc), 100);
        tree.set_arc_value(arc, -10);
        assert_eq!(tree.arc_value(arc), 0);
    }

    #[test]
    fn test_arc_range_reclamps_value() {
        let (mut tree, root) = tree_with_root();
        let arc = tree.arc(root);
        tree.set_arc_value(arc, 90);
        tree.set_arc_range(arc, -30, 30);

        assert_eq!(tree.arc_range(arc), (-30, 30));
        assert_eq!(tree.arc_value(arc), 30, "value should re-clamp into the new range");
    }

    #[test]
    fn test_checked_state() {
        let (mut tree, root) = tree_with_root();
        let cb = tree.checkbox(root);
        assert!(!tree.is_checked(cb));

        tree.set_checked(cb, true);
        assert!(tree.is_checked(cb));
        assert_eq!(tree.state(cb), WidgetState::Checked);
    }

    // -------------------------------------------------------------------------
    // Change Tracking
    // -------------------------------------------------------------------------

    #[test]
    fn test_change_flag_lifecycle() {
        let mut tree = WidgetTree::new(Theme::default());
        assert!(!tree.take_changed(), "a fresh tree has no pending changes");

        let root = tree.panel(None);
        assert!(tree.take_changed(), "creation should mark the tree changed");
        assert!(!tree.take_changed(), "take_changed should clear the flag");

        tree.set_pos(root, 1, 2);
        assert!(tree.take_changed());
    }

    #[test]
    fn test_clone_compares_equal() {
        let (mut tree, root) = tree_with_root();
        tree.set_size(root, Dim::Px(320), Dim::Px(240));
        let copy = tree.clone();
        assert_eq!(tree, copy);

        tree.set_pos(root, 5, 5);
        assert_ne!(tree, copy);
    }
}
