//! Typed declarative widget properties.
//!
//! Each widget kind has its own property struct whose fields are all
//! optional: `None` means "use the engine default at materialization time".
//! Updates merge field by field, later values winning. Attributes the typed
//! structs do not model travel in [`WidgetProps::extra`] and are overlaid on
//! the native property bag last.

use std::fmt;

use crate::color::Color;
use crate::native::{Align, NativeKind, PropValue, PropertyBag, TextStyle};

/// Replace `slot` with `value` when `value` is set.
fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

// ---------------------------------------------------------------------------
// WidgetKind
// ---------------------------------------------------------------------------

/// The kind of a logical widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Text,
    Button,
    Image,
    Circle,
    Arc,
    FillRect,
    StrokeRect,
    Group,
}

impl WidgetKind {
    /// The native widget type this kind materializes as. Groups have none.
    pub fn native(self) -> Option<NativeKind> {
        match self {
            WidgetKind::Text => Some(NativeKind::Text),
            WidgetKind::Button => Some(NativeKind::Button),
            WidgetKind::Image => Some(NativeKind::Image),
            WidgetKind::Circle => Some(NativeKind::Circle),
            WidgetKind::Arc => Some(NativeKind::Arc),
            WidgetKind::FillRect => Some(NativeKind::FillRect),
            WidgetKind::StrokeRect => Some(NativeKind::StrokeRect),
            WidgetKind::Group => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WidgetKind::Text => "text",
            WidgetKind::Button => "button",
            WidgetKind::Image => "image",
            WidgetKind::Circle => "circle",
            WidgetKind::Arc => "arc",
            WidgetKind::FillRect => "fill rect",
            WidgetKind::StrokeRect => "stroke rect",
            WidgetKind::Group => "group",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Per-kind properties
// ---------------------------------------------------------------------------

/// Properties of a text label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextProps {
    pub text: Option<String>,
    pub color: Option<Color>,
    pub text_size: Option<f32>,
    pub align_h: Option<Align>,
    pub align_v: Option<Align>,
    pub text_style: Option<TextStyle>,
}

impl TextProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn align_h(mut self, align: Align) -> Self {
        self.align_h = Some(align);
        self
    }

    pub fn align_v(mut self, align: Align) -> Self {
        self.align_v = Some(align);
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    fn merge(&mut self, patch: TextProps) {
        overwrite(&mut self.text, patch.text);
        overwrite(&mut self.color, patch.color);
        overwrite(&mut self.text_size, patch.text_size);
        overwrite(&mut self.align_h, patch.align_h);
        overwrite(&mut self.align_v, patch.align_v);
        overwrite(&mut self.text_style, patch.text_style);
    }
}

/// Properties of a push button.
///
/// A button is drawn either from images (`normal_src`) or from colors. When
/// `normal_src` is set no color is computed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonProps {
    pub text: Option<String>,
    /// Label color.
    pub color: Option<Color>,
    pub text_size: Option<f32>,
    pub radius: Option<f32>,
    pub normal_color: Option<Color>,
    pub press_color: Option<Color>,
    pub normal_src: Option<String>,
    pub press_src: Option<String>,
}

impl ButtonProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn normal_color(mut self, color: Color) -> Self {
        self.normal_color = Some(color);
        self
    }

    pub fn press_color(mut self, color: Color) -> Self {
        self.press_color = Some(color);
        self
    }

    pub fn normal_src(mut self, src: impl Into<String>) -> Self {
        self.normal_src = Some(src.into());
        self
    }

    pub fn press_src(mut self, src: impl Into<String>) -> Self {
        self.press_src = Some(src.into());
        self
    }

    fn merge(&mut self, patch: ButtonProps) {
        overwrite(&mut self.text, patch.text);
        overwrite(&mut self.color, patch.color);
        overwrite(&mut self.text_size, patch.text_size);
        overwrite(&mut self.radius, patch.radius);
        overwrite(&mut self.normal_color, patch.normal_color);
        overwrite(&mut self.press_color, patch.press_color);
        overwrite(&mut self.normal_src, patch.normal_src);
        overwrite(&mut self.press_src, patch.press_src);
    }
}

/// Properties of an image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageProps {
    pub src: Option<String>,
    /// Center the image inside its cell. Defaults to `true`.
    pub centered: Option<bool>,
    pub auto_scale: Option<bool>,
}

impl ImageProps {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = Some(centered);
        self
    }

    pub fn auto_scale(mut self, auto_scale: bool) -> Self {
        self.auto_scale = Some(auto_scale);
        self
    }

    fn merge(&mut self, patch: ImageProps) {
        overwrite(&mut self.src, patch.src);
        overwrite(&mut self.centered, patch.centered);
        overwrite(&mut self.auto_scale, patch.auto_scale);
    }
}

/// Properties of a filled circle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircleProps {
    pub color: Option<Color>,
    pub radius: Option<f32>,
}

impl CircleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    fn merge(&mut self, patch: CircleProps) {
        overwrite(&mut self.color, patch.color);
        overwrite(&mut self.radius, patch.radius);
    }
}

/// Properties of an arc.
///
/// Angles are in degrees. By default 0° points to 12 o'clock; set
/// `original_coordinates` to use the native convention where 0° is 3 o'clock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcProps {
    pub end_angle: Option<f32>,
    pub line_width: Option<f32>,
    pub color: Option<Color>,
    pub original_coordinates: Option<bool>,
}

impl ArcProps {
    pub fn new(end_angle: f32) -> Self {
        Self {
            end_angle: Some(end_angle),
            ..Self::default()
        }
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn original_coordinates(mut self, original: bool) -> Self {
        self.original_coordinates = Some(original);
        self
    }

    fn merge(&mut self, patch: ArcProps) {
        overwrite(&mut self.end_angle, patch.end_angle);
        overwrite(&mut self.line_width, patch.line_width);
        overwrite(&mut self.color, patch.color);
        overwrite(&mut self.original_coordinates, patch.original_coordinates);
    }
}

/// Properties of a filled rectangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillRectProps {
    pub color: Option<Color>,
    pub radius: Option<f32>,
}

impl FillRectProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    fn merge(&mut self, patch: FillRectProps) {
        overwrite(&mut self.color, patch.color);
        overwrite(&mut self.radius, patch.radius);
    }
}

/// Properties of a rectangle outline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeRectProps {
    pub color: Option<Color>,
    pub line_width: Option<f32>,
    pub radius: Option<f32>,
}

impl StrokeRectProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    fn merge(&mut self, patch: StrokeRectProps) {
        overwrite(&mut self.color, patch.color);
        overwrite(&mut self.line_width, patch.line_width);
        overwrite(&mut self.radius, patch.radius);
    }
}

// ---------------------------------------------------------------------------
// KindProps / WidgetProps
// ---------------------------------------------------------------------------

/// Kind-tagged properties.
#[derive(Clone, Debug, PartialEq)]
pub enum KindProps {
    Text(TextProps),
    Button(ButtonProps),
    Image(ImageProps),
    Circle(CircleProps),
    Arc(ArcProps),
    FillRect(FillRectProps),
    StrokeRect(StrokeRectProps),
    Group,
}

impl KindProps {
    pub fn kind(&self) -> WidgetKind {
        match self {
            KindProps::Text(_) => WidgetKind::Text,
            KindProps::Button(_) => WidgetKind::Button,
            KindProps::Image(_) => WidgetKind::Image,
            KindProps::Circle(_) => WidgetKind::Circle,
            KindProps::Arc(_) => WidgetKind::Arc,
            KindProps::FillRect(_) => WidgetKind::FillRect,
            KindProps::StrokeRect(_) => WidgetKind::StrokeRect,
            KindProps::Group => WidgetKind::Group,
        }
    }

    /// Merge `patch` into `self`. Returns the patch's kind if it differs.
    fn merge(&mut self, patch: KindProps) -> Result<(), WidgetKind> {
        match (self, patch) {
            (KindProps::Text(a), KindProps::Text(b)) => a.merge(b),
            (KindProps::Button(a), KindProps::Button(b)) => a.merge(b),
            (KindProps::Image(a), KindProps::Image(b)) => a.merge(b),
            (KindProps::Circle(a), KindProps::Circle(b)) => a.merge(b),
            (KindProps::Arc(a), KindProps::Arc(b)) => a.merge(b),
            (KindProps::FillRect(a), KindProps::FillRect(b)) => a.merge(b),
            (KindProps::StrokeRect(a), KindProps::StrokeRect(b)) => a.merge(b),
            (KindProps::Group, KindProps::Group) => {}
            (_, other) => return Err(other.kind()),
        }
        Ok(())
    }
}

/// The full declarative state of a widget.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetProps {
    pub kind: KindProps,
    /// Native attributes without a typed field; applied last.
    pub extra: PropertyBag,
}

impl WidgetProps {
    pub fn new(kind: KindProps) -> Self {
        Self {
            kind,
            extra: PropertyBag::new(),
        }
    }

    /// Properties of a group container.
    pub fn group() -> Self {
        Self::new(KindProps::Group)
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind.kind()
    }

    /// Attach an extra native attribute (builder).
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.extra.set(key, value);
        self
    }

    /// Shallow-merge `patch` into `self`, later values winning.
    ///
    /// On a kind mismatch nothing changes and the patch's kind is returned.
    pub fn merge(&mut self, patch: WidgetProps) -> Result<(), WidgetKind> {
        self.kind.merge(patch.kind)?;
        self.extra.merge(&patch.extra);
        Ok(())
    }

    pub fn as_text(&self) -> Option<&TextProps> {
        match &self.kind {
            KindProps::Text(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&ButtonProps> {
        match &self.kind {
            KindProps::Button(p) => Some(p),
            _ => None,
        }
    }
}

macro_rules! impl_into_widget_props {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for WidgetProps {
                fn from(props: $ty) -> Self {
                    WidgetProps::new(KindProps::$variant(props))
                }
            }
        )*
    };
}

impl_into_widget_props! {
    TextProps => Text,
    ButtonProps => Button,
    ImageProps => Image,
    CircleProps => Circle,
    ArcProps => Arc,
    FillRectProps => FillRect,
    StrokeRectProps => StrokeRect,
}

impl From<KindProps> for WidgetProps {
    fn from(kind: KindProps) -> Self {
        WidgetProps::new(kind)
    }
}

// ---------------------------------------------------------------------------
// LeafProps
// ---------------------------------------------------------------------------

/// Properties of any widget kind except a group.
///
/// Groups only come from [`AutoGui::start_group`](crate::engine::AutoGui::start_group),
/// so a `LeafProps` can be handed to an open group without breaking the
/// single-level nesting rule.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafProps(WidgetProps);

impl LeafProps {
    pub fn kind(&self) -> WidgetKind {
        self.0.kind()
    }

    /// Attach an extra native attribute (builder).
    pub fn with_extra(self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self(self.0.with_extra(key, value))
    }

    pub fn props(&self) -> &WidgetProps {
        &self.0
    }

    pub fn into_props(self) -> WidgetProps {
        self.0
    }
}

impl TryFrom<WidgetProps> for LeafProps {
    /// The kind that was refused: always [`WidgetKind::Group`].
    type Error = WidgetKind;

    fn try_from(props: WidgetProps) -> Result<Self, Self::Error> {
        match props.kind() {
            WidgetKind::Group => Err(WidgetKind::Group),
            _ => Ok(Self(props)),
        }
    }
}

macro_rules! impl_into_leaf_props {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LeafProps {
                fn from(props: $ty) -> Self {
                    LeafProps(props.into())
                }
            }
        )*
    };
}

impl_into_leaf_props! {
    TextProps,
    ButtonProps,
    ImageProps,
    CircleProps,
    ArcProps,
    FillRectProps,
    StrokeRectProps,
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_native_mapping() {
        assert_eq!(WidgetKind::Image.native(), Some(NativeKind::Image));
        assert_eq!(WidgetKind::Group.native(), None);
    }

    #[test]
    fn from_per_kind_props() {
        let props: WidgetProps = TextProps::new("hi").into();
        assert_eq!(props.kind(), WidgetKind::Text);
        assert_eq!(props.as_text().and_then(|t| t.text.as_deref()), Some("hi"));
        assert!(props.extra.is_empty());
    }

    #[test]
    fn merge_later_values_win() {
        let mut props: WidgetProps = TextProps::new("a").color(Color::WHITE).into();
        let patch: WidgetProps = TextProps::new("b").into();
        props.merge(patch).unwrap();

        let text = props.as_text().unwrap();
        assert_eq!(text.text.as_deref(), Some("b"));
        // Unset fields in the patch leave existing values alone.
        assert_eq!(text.color, Some(Color::WHITE));
    }

    #[test]
    fn merge_kind_mismatch_leaves_props_untouched() {
        let mut props: WidgetProps = TextProps::new("a").into();
        let before = props.clone();
        let err = props.merge(ButtonProps::new("b").into()).unwrap_err();
        assert_eq!(err, WidgetKind::Button);
        assert_eq!(props, before);
    }

    #[test]
    fn merge_extra_bags() {
        let mut props = WidgetProps::from(FillRectProps::new()).with_extra("alpha", 100);
        let patch = WidgetProps::from(FillRectProps::new().radius(8.0)).with_extra("alpha", 50);
        props.merge(patch).unwrap();
        assert_eq!(props.extra.get("alpha"), Some(&PropValue::Int(50)));
        match &props.kind {
            KindProps::FillRect(p) => assert_eq!(p.radius, Some(8.0)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn button_builder() {
        let b = ButtonProps::new("OK").radius(12.0).normal_color(Color(0x333333)).press_src("p.png");
        assert_eq!(b.text.as_deref(), Some("OK"));
        assert_eq!(b.radius, Some(12.0));
        assert_eq!(b.normal_color, Some(Color(0x333333)));
        assert_eq!(b.press_src.as_deref(), Some("p.png"));
    }

    #[test]
    fn group_props_merge() {
        let mut g = WidgetProps::group();
        assert!(g.merge(WidgetProps::group()).is_ok());
        assert_eq!(g.merge(CircleProps::new().into()), Err(WidgetKind::Circle));
    }

    #[test]
    fn leaf_props_refuse_groups() {
        assert_eq!(LeafProps::try_from(WidgetProps::group()), Err(WidgetKind::Group));

        let leaf = LeafProps::try_from(WidgetProps::from(ArcProps::new(180.0))).unwrap();
        assert_eq!(leaf.kind(), WidgetKind::Arc);
    }

    #[test]
    fn leaf_props_keep_extras() {
        let leaf = LeafProps::from(CircleProps::new()).with_extra("alpha", 40);
        assert_eq!(leaf.props().extra.get("alpha"), Some(&PropValue::Int(40)));
        assert_eq!(leaf.into_props().kind(), WidgetKind::Circle);
    }

    #[test]
    fn kind_display() {
        assert_eq!(WidgetKind::StrokeRect.to_string(), "stroke rect");
    }
}
