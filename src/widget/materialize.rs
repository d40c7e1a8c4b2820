//! Flattening typed widget properties into native property bags.
//!
//! Every native widget gets its geometry from the layout cell it occupies,
//! then per-kind defaults, then the widget's declared properties, then the
//! `extra` bag.

use crate::color::Color;
use crate::config::Defaults;
use crate::error::NativeError;
use crate::geometry::{Bounds, Size};
use crate::native::{keys, Align, NativeSurface, PropertyBag, TextStyle};

use super::props::{
    ArcProps, ButtonProps, CircleProps, FillRectProps, ImageProps, KindProps, StrokeRectProps,
    TextProps, WidgetProps,
};

/// Image shown when an image widget declares no source.
pub const DEFAULT_ICON: &str = "icon.png";
/// Stroke width of a rectangle outline.
pub const DEFAULT_STROKE_LINE_WIDTH: f32 = 4.0;
/// Stroke width of an arc.
pub const DEFAULT_ARC_LINE_WIDTH: f32 = 20.0;
/// Default arc sweep, and the offset between 12 o'clock and the native 0°.
pub const DEFAULT_ANGLE: f32 = 90.0;
/// Brightness multiplier used to derive a button's press color.
pub const PRESS_MULTIPLIER: f32 = 1.3;

/// Everything besides the widget itself that shapes its native properties.
pub struct MaterializeContext<'a> {
    pub defaults: &'a Defaults,
    pub surface: &'a dyn NativeSurface,
    /// Whether a click handler is registered (buttons only).
    pub has_click: bool,
}

/// Build the native property bag for a widget placed in `cell`.
///
/// Groups have no native counterpart and yield an empty bag.
pub fn native_props(
    props: &WidgetProps,
    cell: Bounds,
    ctx: &MaterializeContext<'_>,
) -> Result<PropertyBag, NativeError> {
    let mut bag = match &props.kind {
        KindProps::Text(p) => text(p, cell, ctx.defaults),
        KindProps::Button(p) => button(p, cell, ctx),
        KindProps::Image(p) => image(p, cell, ctx)?,
        KindProps::Circle(p) => circle(p, cell, ctx.defaults),
        KindProps::Arc(p) => arc(p, cell, ctx.defaults),
        KindProps::FillRect(p) => fill_rect(p, cell, ctx.defaults),
        KindProps::StrokeRect(p) => stroke_rect(p, cell, ctx.defaults),
        KindProps::Group => return Ok(PropertyBag::new()),
    };
    bag.merge(&props.extra);
    Ok(bag)
}

/// Native geometry for `cell`: padded, then rounded to whole pixels.
fn geometry(cell: Bounds, pad: f32) -> PropertyBag {
    let (x, y, w, h) = cell.padded(pad).to_pixels();
    PropertyBag::new()
        .with(keys::X, x)
        .with(keys::Y, y)
        .with(keys::W, w)
        .with(keys::H, h)
}

/// `Some(text)` unless it is missing or empty.
fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

// ---------------------------------------------------------------------------
// Per-kind builders
// ---------------------------------------------------------------------------

fn text(p: &TextProps, cell: Bounds, d: &Defaults) -> PropertyBag {
    let mut bag = geometry(cell, d.padding);
    bag.set(keys::COLOR, p.color.unwrap_or(d.text_color));
    bag.set(keys::TEXT_SIZE, p.text_size.unwrap_or(d.text_size));
    bag.set(keys::ALIGN_H, p.align_h.unwrap_or(Align::Center));
    bag.set(keys::ALIGN_V, p.align_v.unwrap_or(Align::Center));
    bag.set(keys::TEXT_STYLE, p.text_style.unwrap_or(TextStyle::Ellipsis));
    bag.set(keys::TEXT, non_empty(&p.text).unwrap_or(&d.text));
    bag
}

fn button(p: &ButtonProps, cell: Bounds, ctx: &MaterializeContext<'_>) -> PropertyBag {
    let d = ctx.defaults;
    let mut bag = geometry(cell, d.padding);
    bag.set(keys::RADIUS, p.radius.unwrap_or(d.button_radius));
    bag.set(keys::TEXT, non_empty(&p.text).unwrap_or(&d.text));
    bag.set(keys::TEXT_SIZE, p.text_size.unwrap_or(d.text_size));
    bag.set(keys::COLOR, p.color.unwrap_or(d.text_color));
    if ctx.has_click {
        bag.set(keys::CLICK_FUNC, true);
    }
    match non_empty(&p.normal_src) {
        Some(normal) => {
            bag.set(keys::NORMAL_SRC, normal);
            bag.set(keys::PRESS_SRC, non_empty(&p.press_src).unwrap_or(normal));
        }
        None => {
            let normal = p.normal_color.unwrap_or(d.color);
            let press = p.press_color.unwrap_or_else(|| derived_press_color(normal));
            bag.set(keys::NORMAL_COLOR, normal);
            bag.set(keys::PRESS_COLOR, press);
        }
    }
    bag
}

fn image(
    p: &ImageProps,
    cell: Bounds,
    ctx: &MaterializeContext<'_>,
) -> Result<PropertyBag, NativeError> {
    let src = non_empty(&p.src).unwrap_or(DEFAULT_ICON);
    let size: Size = ctx.surface.image_info(src)?.size();
    let placed = if p.centered.unwrap_or(true) {
        cell.centered(size)
    } else {
        Bounds::new(cell.x, cell.y, size.width, size.height)
    };

    let mut bag = geometry(placed, ctx.defaults.padding);
    bag.set(keys::SRC, src);
    bag.set_opt(keys::AUTO_SCALE, p.auto_scale);
    Ok(bag)
}

fn circle(p: &CircleProps, cell: Bounds, d: &Defaults) -> PropertyBag {
    let mut bag = geometry(cell, d.padding);
    let (cx, cy) = cell.center();
    let radius = p
        .radius
        .unwrap_or_else(|| cell.size().min_side() / 2.0 - d.padding);
    bag.set(keys::CENTER_X, cx.round() as i32);
    bag.set(keys::CENTER_Y, cy.round() as i32);
    bag.set(keys::RADIUS, radius);
    bag.set(keys::COLOR, p.color.unwrap_or(d.color));
    bag
}

fn arc(p: &ArcProps, cell: Bounds, d: &Defaults) -> PropertyBag {
    let mut bag = geometry(cell, d.padding);
    let mut start: f32 = 0.0;
    let mut end = p.end_angle.unwrap_or(DEFAULT_ANGLE);
    if !p.original_coordinates.unwrap_or(false) {
        start -= DEFAULT_ANGLE;
        end -= DEFAULT_ANGLE;
    }
    bag.set(keys::START_ANGLE, start);
    bag.set(keys::END_ANGLE, end);
    bag.set(keys::LINE_WIDTH, p.line_width.unwrap_or(DEFAULT_ARC_LINE_WIDTH));
    bag.set(keys::COLOR, p.color.unwrap_or(d.color));
    bag
}

fn fill_rect(p: &FillRectProps, cell: Bounds, d: &Defaults) -> PropertyBag {
    let mut bag = geometry(cell, d.padding);
    bag.set(keys::COLOR, p.color.unwrap_or(d.color));
    bag.set_opt(keys::RADIUS, p.radius);
    bag
}

fn stroke_rect(p: &StrokeRectProps, cell: Bounds, d: &Defaults) -> PropertyBag {
    let mut bag = geometry(cell, d.padding);
    bag.set(keys::COLOR, p.color.unwrap_or(d.color));
    bag.set(keys::LINE_WIDTH, p.line_width.unwrap_or(DEFAULT_STROKE_LINE_WIDTH));
    bag.set_opt(keys::RADIUS, p.radius);
    bag
}

/// The press color a button without an explicit one would use.
pub fn derived_press_color(normal: Color) -> Color {
    normal.press_variant(PRESS_MULTIPLIER)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::PropValue;
    use crate::testing::FakeSurface;
    use pretty_assertions::assert_eq;

    fn defaults() -> Defaults {
        Defaults::for_screen(Size::new(480.0, 480.0))
    }

    fn build(props: impl Into<WidgetProps>, cell: Bounds, has_click: bool) -> PropertyBag {
        let surface = FakeSurface::new(480.0, 480.0).with_image("logo.png", 40.0, 20.0);
        let defaults = defaults();
        let ctx = MaterializeContext { defaults: &defaults, surface: &surface, has_click };
        native_props(&props.into(), cell, &ctx).unwrap()
    }

    fn int(bag: &PropertyBag, key: &str) -> i32 {
        bag.get(key).and_then(PropValue::as_int).unwrap()
    }

    const CELL: Bounds = Bounds::new(4.0, 8.0, 472.0, 236.0);

    #[test]
    fn text_defaults() {
        let bag = build(TextProps::default(), CELL, false);
        let expected = PropertyBag::new()
            .with(keys::X, 8)
            .with(keys::Y, 8)
            .with(keys::W, 464)
            .with(keys::H, 228)
            .with(keys::COLOR, Color::WHITE)
            .with(keys::TEXT_SIZE, 30.0_f32)
            .with(keys::ALIGN_H, Align::Center)
            .with(keys::ALIGN_V, Align::Center)
            .with(keys::TEXT_STYLE, TextStyle::Ellipsis)
            .with(keys::TEXT, "my text");
        assert_eq!(bag, expected);
    }

    #[test]
    fn text_declared_values_win() {
        let bag = build(TextProps::new("Hello").color(Color(0x00ff00)).text_size(12.0), CELL, false);
        assert_eq!(bag.get(keys::TEXT).and_then(PropValue::as_str), Some("Hello"));
        assert_eq!(bag.get(keys::COLOR).and_then(PropValue::as_color), Some(Color(0x00ff00)));
        assert_eq!(bag.get(keys::TEXT_SIZE).and_then(PropValue::as_float), Some(12.0));
    }

    #[test]
    fn empty_text_falls_back_to_default() {
        let bag = build(TextProps::new(""), CELL, false);
        assert_eq!(bag.get(keys::TEXT).and_then(PropValue::as_str), Some("my text"));
    }

    #[test]
    fn button_derives_press_color() {
        let bag = build(ButtonProps::new("OK").normal_color(Color(0x808080)), CELL, true);
        assert_eq!(bag.get(keys::NORMAL_COLOR).and_then(PropValue::as_color), Some(Color(0x808080)));
        assert_eq!(bag.get(keys::PRESS_COLOR).and_then(PropValue::as_color), Some(Color(0xa6a6a6)));
        assert_eq!(bag.get(keys::CLICK_FUNC).and_then(PropValue::as_bool), Some(true));
        assert_eq!(bag.get(keys::RADIUS).and_then(PropValue::as_float), Some(5.0));
    }

    #[test]
    fn button_default_color() {
        let bag = build(ButtonProps::new("OK"), CELL, false);
        assert_eq!(bag.get(keys::NORMAL_COLOR).and_then(PropValue::as_color), Some(Color::ORANGE));
        assert_eq!(
            bag.get(keys::PRESS_COLOR).and_then(PropValue::as_color),
            Some(derived_press_color(Color::ORANGE))
        );
        assert!(!bag.contains(keys::CLICK_FUNC));
    }

    #[test]
    fn button_with_image_source() {
        let bag = build(ButtonProps::new("OK").normal_src("n.png"), CELL, false);
        assert_eq!(bag.get(keys::PRESS_SRC).and_then(PropValue::as_str), Some("n.png"));
        assert!(!bag.contains(keys::NORMAL_COLOR));
        assert!(!bag.contains(keys::PRESS_COLOR));
    }

    #[test]
    fn image_is_centered_in_cell() {
        let cell = Bounds::new(4.0, 8.0, 100.0, 100.0);
        let bag = build(ImageProps::new("logo.png"), cell, false);
        // Centered origin (34, 48), then padded: x + 4, size - 8.
        assert_eq!(int(&bag, keys::X), 38);
        assert_eq!(int(&bag, keys::Y), 48);
        assert_eq!(int(&bag, keys::W), 32);
        assert_eq!(int(&bag, keys::H), 12);
        assert_eq!(bag.get(keys::SRC).and_then(PropValue::as_str), Some("logo.png"));
    }

    #[test]
    fn image_not_centered() {
        let cell = Bounds::new(4.0, 8.0, 100.0, 100.0);
        let bag = build(ImageProps::new("logo.png").centered(false), cell, false);
        assert_eq!(int(&bag, keys::X), 8);
        assert_eq!(int(&bag, keys::Y), 8);
    }

    #[test]
    fn missing_image_is_a_native_error() {
        let surface = FakeSurface::new(480.0, 480.0);
        let defaults = defaults();
        let ctx = MaterializeContext { defaults: &defaults, surface: &surface, has_click: false };
        let err = native_props(&ImageProps::new("nope.png").into(), CELL, &ctx).unwrap_err();
        assert_eq!(err, NativeError::ImageNotFound("nope.png".into()));
    }

    #[test]
    fn circle_geometry() {
        let bag = build(CircleProps::new(), CELL, false);
        assert_eq!(int(&bag, keys::CENTER_X), 240);
        assert_eq!(int(&bag, keys::CENTER_Y), 126);
        assert_eq!(bag.get(keys::RADIUS).and_then(PropValue::as_float), Some(114.0));
        assert_eq!(bag.get(keys::COLOR).and_then(PropValue::as_color), Some(Color::ORANGE));
    }

    #[test]
    fn arc_angles_shift_by_default() {
        let bag = build(ArcProps::new(180.0), CELL, false);
        assert_eq!(bag.get(keys::START_ANGLE).and_then(PropValue::as_float), Some(-90.0));
        assert_eq!(bag.get(keys::END_ANGLE).and_then(PropValue::as_float), Some(90.0));
        assert_eq!(bag.get(keys::LINE_WIDTH).and_then(PropValue::as_float), Some(20.0));
    }

    #[test]
    fn arc_original_coordinates() {
        let bag = build(ArcProps::default().original_coordinates(true), CELL, false);
        assert_eq!(bag.get(keys::START_ANGLE).and_then(PropValue::as_float), Some(0.0));
        assert_eq!(bag.get(keys::END_ANGLE).and_then(PropValue::as_float), Some(90.0));
    }

    #[test]
    fn rects() {
        let fill = build(FillRectProps::new().radius(6.0), CELL, false);
        assert_eq!(fill.get(keys::RADIUS).and_then(PropValue::as_float), Some(6.0));

        let stroke = build(StrokeRectProps::new(), CELL, false);
        assert_eq!(stroke.get(keys::LINE_WIDTH).and_then(PropValue::as_float), Some(4.0));
        assert!(!stroke.contains(keys::RADIUS));
    }

    #[test]
    fn extra_bag_overlays_last() {
        let props = WidgetProps::from(FillRectProps::new()).with_extra(keys::X, 0).with_extra("alpha", 128);
        let bag = build(props, CELL, false);
        assert_eq!(int(&bag, keys::X), 0);
        assert_eq!(int(&bag, "alpha"), 128);
    }

    #[test]
    fn group_has_no_native_props() {
        assert!(build(WidgetProps::group(), CELL, false).is_empty());
    }
}
