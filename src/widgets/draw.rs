//! Depth-first renderer.
//!
//! Draws a widget subtree onto any `DrawTarget<Color = Rgb565>`: each widget
//! paints itself, then its children in creation order, so later siblings end
//! up on top. Positions are parent-relative; the renderer accumulates
//! absolute origins while walking down.
//!
//! Arcs render as 270 degree gauges opening at the bottom, the way the
//! transmitter's stick and trim indicators are laid out: the background
//! track spans the full sweep, the indicator covers the value's share of it,
//! and a round knob marks the indicator's end. Opacity is binary on RGB565,
//! a zero `arc_opa` suppresses the layer and anything else draws it opaque.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc,
    Circle,
    Line,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    Rectangle,
    RoundedRectangle,
    StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text, TextStyleBuilder};
use micromath::F32;

use crate::colors::{BLACK, WHITE};
use crate::theme::{CHECKBOX_GAP, THEME_FONT};
use crate::widgets::style::{Part, Style, TextAlign};
use crate::widgets::tree::{WidgetId, WidgetKind, WidgetTree, text_size};

/// Gauge arcs start here and open at the bottom.
const ARC_START_DEG: f32 = 135.0;
const ARC_SWEEP_DEG: f32 = 270.0;
/// The knob disc outgrows the indicator stroke by this much on each side.
const KNOB_PAD: u32 = 3;

/// Draws `root` and its subtree in z-order.
pub fn draw<D>(tree: &WidgetTree, root: WidgetId, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_node(tree, root, origin_of(tree, root), display)
}

/// Absolute position of the widget's parent origin.
fn origin_of(tree: &WidgetTree, id: WidgetId) -> Point {
    let mut origin = Point::zero();
    let mut cursor = tree.parent(id);
    while let Some(parent) = cursor {
        origin += tree.pos(parent);
        cursor = tree.parent(parent);
    }
    origin
}

fn draw_node<D>(
    tree: &WidgetTree,
    id: WidgetId,
    origin: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let top_left = origin + tree.pos(id);
    match tree.kind(id) {
        WidgetKind::Panel => draw_panel(tree, id, top_left, display)?,
        WidgetKind::Label => draw_label(tree, id, top_left, display)?,
        WidgetKind::Arc => draw_arc(tree, id, top_left, display)?,
        WidgetKind::Checkbox => draw_checkbox(tree, id, top_left, display)?,
        WidgetKind::Image => draw_image(tree, id, top_left, display)?,
    }
    for child in tree.children(id) {
        draw_node(tree, child, top_left, display)?;
    }
    Ok(())
}

// =============================================================================
// Per-Kind Drawing
// =============================================================================

fn draw_panel<D>(
    tree: &WidgetTree,
    id: WidgetId,
    top_left: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = tree.resolved_style(id, Part::Main);
    fill_box(&style, Rectangle::new(top_left, tree.size(id)), display)
}

fn draw_label<D>(
    tree: &WidgetTree,
    id: WidgetId,
    top_left: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = tree.resolved_style(id, Part::Main);
    draw_aligned_text(tree.text(id), Rectangle::new(top_left, tree.size(id)), &style, display)
}

fn draw_arc<D>(
    tree: &WidgetTree,
    id: WidgetId,
    top_left: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let track = tree.resolved_style(id, Part::Main);
    let indicator = tree.resolved_style(id, Part::Indicator);
    let size = tree.size(id);

    // Stroke is centered on the circle, so shrink the diameter to keep the
    // widest layer inside the widget box.
    let track_w = track.arc_width.unwrap_or(0);
    let ind_w = indicator.arc_width.unwrap_or(0);
    let diameter = size.width.min(size.height).saturating_sub(track_w.max(ind_w));
    if diameter == 0 {
        return Ok(());
    }
    let center = top_left + Point::new(size.width as i32 / 2, size.height as i32 / 2);

    stroke_arc(center, diameter, ARC_SWEEP_DEG, &track, display)?;

    let (min, max) = tree.arc_range(id);
    let sweep = if max > min {
        ARC_SWEEP_DEG * (tree.arc_value(id) - min) as f32 / (max - min) as f32
    } else {
        0.0
    };
    stroke_arc(center, diameter, sweep, &indicator, display)?;

    let knob = tree.resolved_style(id, Part::Knob);
    if let Some(bg) = knob.bg_color {
        let angle = F32((ARC_START_DEG + sweep).to_radians());
        let radius = F32(diameter as f32 / 2.0);
        let knob_center = Point::new(
            center.x + (angle.cos() * radius).round().0 as i32,
            center.y + (angle.sin() * radius).round().0 as i32,
        );
        Circle::with_center(knob_center, ind_w + 2 * KNOB_PAD)
            .into_styled(PrimitiveStyle::with_fill(bg))
            .draw(display)?;
    }
    Ok(())
}

fn draw_checkbox<D>(
    tree: &WidgetTree,
    id: WidgetId,
    top_left: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let tick_box = THEME_FONT.character_size.height;
    let box_style = tree.resolved_style(id, Part::Indicator);
    let bounds = Rectangle::new(top_left, Size::new(tick_box, tick_box));
    fill_box(&box_style, bounds, display)?;
    if tree.is_checked(id) {
        draw_check_mark(bounds, display)?;
    }

    let text = tree.text(id);
    let text_bounds = Rectangle::new(
        top_left + Point::new(tick_box as i32 + CHECKBOX_GAP, 0),
        text_size(text),
    );
    let main = tree.resolved_style(id, Part::Main);
    draw_aligned_text(text, text_bounds, &main, display)
}

fn draw_image<D>(
    tree: &WidgetTree,
    id: WidgetId,
    top_left: Point,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(asset) = tree.image_asset(id) else {
        return Ok(());
    };
    let color = tree.resolved_style(id, Part::Main).image_recolor.unwrap_or(BLACK);
    display.draw_iter(asset.on_pixels().map(|p| Pixel(top_left + p, color)))
}

// =============================================================================
// Shared Pieces
// =============================================================================

/// Background fill plus inside-aligned border, corners rounded per the style.
fn fill_box<D>(style: &Style, bounds: Rectangle, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut builder = PrimitiveStyleBuilder::new();
    if let Some(bg) = style.bg_color {
        builder = builder.fill_color(bg);
    }
    let border_w = style.border_width.unwrap_or(0);
    if border_w > 0 {
        if let Some(border) = style.border_color {
            builder = builder
                .stroke_color(border)
                .stroke_width(border_w)
                .stroke_alignment(StrokeAlignment::Inside);
        }
    }
    let prim = builder.build();

    let radius = style
        .radius
        .unwrap_or(0)
        .min(bounds.size.width.min(bounds.size.height) / 2);
    if radius == 0 {
        bounds.into_styled(prim).draw(display)
    } else {
        RoundedRectangle::with_equal_corners(bounds, Size::new(radius, radius))
            .into_styled(prim)
            .draw(display)
    }
}

fn stroke_arc<D>(
    center: Point,
    diameter: u32,
    sweep_deg: f32,
    style: &Style,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = style.arc_width.unwrap_or(0);
    if width == 0 || sweep_deg <= 0.0 || style.arc_opa == Some(0) {
        return Ok(());
    }
    let Some(color) = style.arc_color else {
        return Ok(());
    };
    Arc::with_center(center, diameter, ARC_START_DEG.deg(), sweep_deg.deg())
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
}

fn draw_aligned_text<D>(
    text: &str,
    bounds: Rectangle,
    style: &Style,
    display: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let metrics = text_size(text);
    let x = match style.text_align.unwrap_or_default() {
        TextAlign::Left => bounds.top_left.x,
        TextAlign::Center => {
            bounds.top_left.x + (bounds.size.width as i32 - metrics.width as i32) / 2
        }
        TextAlign::Right => bounds.top_left.x + bounds.size.width as i32 - metrics.width as i32,
    };
    let color = style.text_color.unwrap_or(BLACK);
    let char_style = MonoTextStyle::new(THEME_FONT, color);
    let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();
    Text::with_text_style(text, Point::new(x, bounds.top_left.y), char_style, text_style)
        .draw(display)?;
    Ok(())
}

fn draw_check_mark<D>(bounds: Rectangle, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let side = bounds.size.width as i32;
    let origin = bounds.top_left;
    let low = origin + Point::new(side / 4, side * 5 / 9);
    let tip = origin + Point::new(side * 2 / 5, side * 3 / 4);
    let high = origin + Point::new(side * 3 / 4, side / 4);
    let stroke = PrimitiveStyle::with_stroke(WHITE, 2);
    Line::new(low, tip).into_styled(stroke).draw(display)?;
    Line::new(tip, high).into_styled(stroke).draw(display)
}

// =============================================================================
// Unit Tests
// =============================================================================
