//! Widget construction: the `Compose` trait and group scopes.
//!
//! Both the engine and an open [`GroupBuilder`] accept new widgets through
//! [`Compose`]. On the engine a widget gets its own cell in the pending row;
//! on a group builder it becomes a child sharing the group's cell.

use tracing::{trace, warn};

use crate::color::Color;
use crate::engine::{AutoGui, Result};
use crate::error::GuiError;
use crate::widget::{
    ArcProps, ButtonProps, CircleProps, FillRectProps, ImageProps, LeafProps, StrokeRectProps,
    TextProps, WidgetId, WidgetProps,
};

// ---------------------------------------------------------------------------
// Compose
// ---------------------------------------------------------------------------

/// Something widgets can be added to.
///
/// Only [`add_leaf`](Compose::add_leaf) is required; the shorthand
/// constructors build typed properties and forward to it. Groups are never
/// added this way: they come from
/// [`AutoGui::start_group`](crate::engine::AutoGui::start_group).
pub trait Compose {
    /// Add a non-group widget and return its id.
    fn add_leaf(&mut self, props: LeafProps) -> WidgetId;

    /// Add a widget from untyped properties.
    ///
    /// Group properties are refused with [`GuiError::NestedGroup`].
    fn add_props(&mut self, props: WidgetProps) -> Result<WidgetId> {
        match LeafProps::try_from(props) {
            Ok(leaf) => Ok(self.add_leaf(leaf)),
            Err(kind) => {
                warn!(%kind, "group properties passed to add_props");
                Err(GuiError::NestedGroup)
            }
        }
    }

    /// Add a widget from any per-kind property struct.
    fn add(&mut self, props: impl Into<LeafProps>) -> WidgetId
    where
        Self: Sized,
    {
        self.add_leaf(props.into())
    }

    /// Add a text label.
    fn text(&mut self, text: impl Into<String>) -> WidgetId
    where
        Self: Sized,
    {
        self.add(TextProps::new(text))
    }

    /// Add a button. Attach its action with
    /// [`AutoGui::on_click`](crate::engine::AutoGui::on_click).
    fn button(&mut self, text: impl Into<String>) -> WidgetId
    where
        Self: Sized,
    {
        self.add(ButtonProps::new(text))
    }

    /// Add an image, centered in its cell.
    fn image(&mut self, src: impl Into<String>) -> WidgetId
    where
        Self: Sized,
    {
        self.add(ImageProps::new(src))
    }

    fn circle(&mut self, color: Color) -> WidgetId
    where
        Self: Sized,
    {
        self.add(CircleProps::new().color(color))
    }

    /// Add an arc sweeping from 12 o'clock to `end_angle` degrees.
    fn arc(&mut self, end_angle: f32) -> WidgetId
    where
        Self: Sized,
    {
        self.add(ArcProps::new(end_angle))
    }

    fn fill_rect(&mut self, color: Color) -> WidgetId
    where
        Self: Sized,
    {
        self.add(FillRectProps::new().color(color))
    }

    fn stroke_rect(&mut self, color: Color) -> WidgetId
    where
        Self: Sized,
    {
        self.add(StrokeRectProps::new().color(color))
    }
}

// ---------------------------------------------------------------------------
// GroupBuilder
// ---------------------------------------------------------------------------

/// An open group. Widgets added through it are children of the group.
///
/// The group is closed by [`end`](GroupBuilder::end) or by dropping the
/// builder. While it is open the engine is borrowed, so no other group can be
/// started and groups cannot nest.
pub struct GroupBuilder<'a> {
    gui: &'a mut AutoGui,
    group: WidgetId,
}

impl<'a> GroupBuilder<'a> {
    pub(crate) fn new(gui: &'a mut AutoGui, group: WidgetId) -> Self {
        trace!(?group, "group opened");
        Self { gui, group }
    }

    /// The id of the group being built.
    pub fn id(&self) -> WidgetId {
        self.group
    }

    /// Close the group and return its id.
    pub fn end(self) -> WidgetId {
        self.group
    }
}

impl Compose for GroupBuilder<'_> {
    fn add_leaf(&mut self, props: LeafProps) -> WidgetId {
        self.gui.insert_widget(props.into_props(), Some(self.group))
    }
}

impl Drop for GroupBuilder<'_> {
    fn drop(&mut self) {
        trace!(group = ?self.group, "group closed");
    }
}

// ===========================================================================
// Tests
// ===========================================================================
