//! The engine: owns widgets, the layout table, and the native surface.
//!
//! `AutoGui` turns calls like `text(..)`, `new_row()` and `render()` into
//! native widget creation, keeping native handles in step with the logical
//! widget set across updates, forced renders and removals.

use std::any::Any;
use std::rc::Rc;

use slotmap::SlotMap;
use tracing::{debug, trace, warn};

use crate::compose::{Compose, GroupBuilder};
use crate::config::{DefaultSetting, Defaults, GuiConfig};
use crate::error::GuiError;
use crate::geometry::{Bounds, Size};
use crate::layout::{self, Cell, CellContent, LayoutTable, Percentage, Placement};
use crate::native::{Gesture, NativeHandle, NativeSurface};
use crate::widget::node::LISTENED_GESTURES;
use crate::widget::{
    native_props, Handler, LeafProps, LifecycleEvent, LifecycleTracker, MaterializeContext,
    Widget, WidgetId, WidgetKind, WidgetProps,
};

pub type Result<T> = std::result::Result<T, GuiError>;

// ---------------------------------------------------------------------------
// AutoGui
// ---------------------------------------------------------------------------

/// A retained-mode GUI over a [`NativeSurface`].
///
/// Widgets are added to the row being built; [`new_row`](Self::new_row)
/// starts the next one. Nothing reaches the screen until
/// [`render`](Self::render).
///
/// # Examples
///
/// ```ignore
/// use autogui::prelude::*;
/// use autogui::testing::FakeSurface;
///
/// let mut gui = AutoGui::new(FakeSurface::new(480.0, 480.0));
/// gui.text("Hello");
/// gui.new_row();
/// let ok = gui.button("OK");
/// gui.on_click(ok, |gui, _| gui.update(ok, TextProps::new("Bye")))?;
/// gui.render()?;
/// ```
pub struct AutoGui {
    surface: Box<dyn NativeSurface>,
    screen: Size,
    defaults: Defaults,
    widgets: SlotMap<WidgetId, Widget>,
    layout: LayoutTable,
    lifecycle: LifecycleTracker,
}

impl AutoGui {
    /// Create an engine with the built-in defaults.
    pub fn new(surface: impl NativeSurface + 'static) -> Self {
        Self::with_config(surface, GuiConfig::default())
    }

    /// Create an engine from a [`GuiConfig`].
    ///
    /// The screen size is read from the surface once, here.
    pub fn with_config(surface: impl NativeSurface + 'static, config: GuiConfig) -> Self {
        let screen = surface.screen_size();
        let defaults = config.defaults_for(screen);
        debug!(width = screen.width, height = screen.height, padding = defaults.padding, "engine created");
        Self {
            surface: Box::new(surface),
            screen,
            defaults,
            widgets: SlotMap::with_key(),
            layout: LayoutTable::new(),
            lifecycle: LifecycleTracker::new().with_recording(config.lifecycle_events),
        }
    }

    // ── Defaults ─────────────────────────────────────────────────────

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Change one default.
    ///
    /// Widgets already on screen keep their look until they are materialized
    /// again (forced render or removal repack).
    pub fn set_default(&mut self, setting: DefaultSetting) {
        debug!(?setting, "default changed");
        self.defaults.apply(setting);
    }

    pub fn screen_size(&self) -> Size {
        self.screen
    }

    // ── Building ─────────────────────────────────────────────────────

    /// Put a widget into the arena: into `parent`'s child list, or else into
    /// a new cell of the pending row.
    pub(crate) fn insert_widget(
        &mut self,
        props: WidgetProps,
        parent: Option<WidgetId>,
    ) -> WidgetId {
        let kind = props.kind();
        let id = self.widgets.insert(Widget::new(props, parent));
        match parent.and_then(|p| self.widgets.get_mut(p)) {
            Some(group) => {
                group.children.push(id);
                group.needs_update = true;
            }
            None => self.layout.push(Cell::widget(id)),
        }
        trace!(?id, %kind, ?parent, "widget added");
        id
    }

    /// Add an empty, 0 px wide cell to the pending row.
    pub fn spacer(&mut self) {
        self.layout.push(Cell::spacer());
    }

    /// Commit the pending row. Does nothing if it is empty.
    pub fn new_row(&mut self) {
        if self.layout.commit() {
            trace!(rows = self.layout.row_count(), "row committed");
        }
    }

    /// Assign explicit percentages, in order, to the cells of the pending
    /// row (or the last committed row when nothing is pending).
    ///
    /// Cells past the end of the list keep their current share.
    pub fn row_layout<I, P>(&mut self, percentages: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Percentage>,
    {
        if self.layout.set_percentages(percentages.into_iter().map(Into::into)) {
            Ok(())
        } else {
            warn!("row_layout called with no row to apply it to");
            Err(GuiError::NoRow)
        }
    }

    /// Open a group. Widgets added through the returned builder share one
    /// cell; the group closes when the builder is ended or dropped.
    pub fn start_group(&mut self) -> GroupBuilder<'_> {
        let group = self.insert_widget(WidgetProps::group(), None);
        GroupBuilder::new(self, group)
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Materialize every dirty widget. Clean widgets are not touched.
    pub fn render(&mut self) -> Result<()> {
        self.render_pass(false)
    }

    /// Destroy every native widget, then materialize all of them again.
    pub fn render_forced(&mut self) -> Result<()> {
        self.render_pass(true)
    }

    fn render_pass(&mut self, forced: bool) -> Result<()> {
        self.new_row();
        if forced {
            self.purge_handles();
        }

        let placements = self.placements();
        debug!(forced, rows = self.layout.row_count(), cells = placements.len(), "render pass");

        for placement in placements {
            let CellContent::Widget(id) = placement.content else {
                continue;
            };
            if forced || self.is_dirty(id) {
                self.render_cell(id, placement.bounds)?;
            }
        }
        Ok(())
    }

    /// A widget is dirty if it needs an update, or, for a group, if any child
    /// does.
    fn is_dirty(&self, id: WidgetId) -> bool {
        let Some(widget) = self.widgets.get(id) else {
            return false;
        };
        widget.needs_update
            || widget
                .children
                .iter()
                .any(|c| self.widgets.get(*c).is_some_and(|w| w.needs_update))
    }

    /// Materialize the widget in a cell. Groups hand the cell to each child.
    fn render_cell(&mut self, id: WidgetId, bounds: Bounds) -> Result<()> {
        let children = match self.widgets.get(id) {
            Some(widget) if widget.is_group() => widget.children.clone(),
            Some(_) => Vec::new(),
            None => return Ok(()),
        };

        for child in children {
            self.materialize(child, bounds)?;
            self.attach_events(child);
            self.mark_clean(child);
        }
        self.materialize(id, bounds)?;
        self.attach_events(id);
        self.mark_clean(id);
        Ok(())
    }

    /// Create the native widget for `id` in `cell`, unless it already has one.
    fn materialize(&mut self, id: WidgetId, cell: Bounds) -> Result<()> {
        let Some(widget) = self.widgets.get(id) else {
            return Ok(());
        };
        if widget.handle.is_some() {
            return Ok(());
        }
        let Some(kind) = widget.kind().native() else {
            if let Some(group) = self.widgets.get_mut(id) {
                group.bounds = Some(cell);
                group.is_rendered = true;
            }
            return Ok(());
        };

        let ctx = MaterializeContext {
            defaults: &self.defaults,
            surface: &*self.surface,
            has_click: widget.has_handler(Gesture::Click),
        };
        let bag = native_props(&widget.props, cell, &ctx)?;
        let handle = self.surface.create_widget(kind, &bag)?;
        trace!(?id, ?handle, kind = kind.name(), "materialized");

        self.lifecycle.on_materialize(id, handle);
        if let Some(widget) = self.widgets.get_mut(id) {
            widget.handle = Some(handle);
            widget.bounds = Some(cell);
            widget.is_rendered = true;
            widget.listening.clear();
        }
        Ok(())
    }

    fn mark_clean(&mut self, id: WidgetId) {
        if let Some(widget) = self.widgets.get_mut(id) {
            widget.needs_update = false;
        }
    }

    /// Destroy every native handle. Widgets stay in the arena, dirty.
    fn purge_handles(&mut self) {
        let mut destroyed = 0usize;
        for widget in self.widgets.values_mut() {
            if let Some(handle) = widget.take_handle() {
                self.surface.destroy_widget(handle);
                self.lifecycle.on_destroy(handle);
                destroyed += 1;
            }
            widget.is_rendered = false;
            widget.needs_update = true;
        }
        trace!(destroyed, "native widgets purged");
    }

    fn destroy_handle(&mut self, widget: &mut Widget) {
        if let Some(handle) = widget.take_handle() {
            self.surface.destroy_widget(handle);
            self.lifecycle.on_destroy(handle);
        }
    }

    // ── Events ───────────────────────────────────────────────────────

    /// Whether `id` should listen for `gesture`: it has a handler, or its
    /// group does.
    fn wants_listener(&self, id: WidgetId, gesture: Gesture) -> bool {
        let Some(widget) = self.widgets.get(id) else {
            return false;
        };
        widget.has_handler(gesture)
            || widget
                .parent
                .and_then(|p| self.widgets.get(p))
                .is_some_and(|group| group.has_handler(gesture))
    }

    /// Attach missing press/release listeners. No-op without a handle.
    fn attach_events(&mut self, id: WidgetId) {
        let wanted: Vec<Gesture> = LISTENED_GESTURES
            .into_iter()
            .filter(|g| self.wants_listener(id, *g))
            .collect();
        let Some(widget) = self.widgets.get_mut(id) else {
            return;
        };
        let Some(handle) = widget.handle else {
            return;
        };
        for gesture in wanted {
            if !widget.is_listening(gesture) {
                self.surface.add_event_listener(handle, gesture);
                widget.listening.push(gesture);
            }
        }
    }

    /// Detach every listener on `id`'s current handle.
    fn detach_events(&mut self, id: WidgetId) {
        let Some(widget) = self.widgets.get_mut(id) else {
            return;
        };
        let Some(handle) = widget.handle else {
            return;
        };
        for gesture in widget.listening.drain(..) {
            self.surface.remove_event_listener(handle, gesture);
        }
    }

    pub fn on_press<F>(&mut self, id: WidgetId, handler: F) -> Result<()>
    where
        F: Fn(&mut AutoGui, WidgetId) -> Result<()> + 'static,
    {
        self.set_handler(id, Gesture::Press, Rc::new(handler))
    }

    pub fn on_release<F>(&mut self, id: WidgetId, handler: F) -> Result<()>
    where
        F: Fn(&mut AutoGui, WidgetId) -> Result<()> + 'static,
    {
        self.set_handler(id, Gesture::Release, Rc::new(handler))
    }

    /// Register the click handler of a button.
    pub fn on_click<F>(&mut self, id: WidgetId, handler: F) -> Result<()>
    where
        F: Fn(&mut AutoGui, WidgetId) -> Result<()> + 'static,
    {
        self.set_handler(id, Gesture::Click, Rc::new(handler))
    }

    fn set_handler(&mut self, id: WidgetId, gesture: Gesture, handler: Handler) -> Result<()> {
        let Some(widget) = self.widgets.get_mut(id) else {
            warn!(?id, ?gesture, "handler for a widget that is not active");
            return Err(GuiError::NotActive(id));
        };
        let kind = widget.kind();
        if gesture == Gesture::Click && kind != WidgetKind::Button {
            warn!(?id, %kind, "click handler on a non-button");
            return Err(GuiError::NotClickable(kind));
        }
        if !widget.handlers.set(gesture, handler) {
            warn!(?id, ?gesture, "handler already set");
            return Err(GuiError::HandlerAlreadySet { widget: id, gesture });
        }
        let children = widget.children.clone();

        match gesture {
            // A live button learns about its click handler through its props.
            Gesture::Click => {
                if let Err(err) = self.push_properties(id) {
                    if let Some(widget) = self.widgets.get_mut(id) {
                        widget.handlers.clear(Gesture::Click);
                    }
                    return Err(err);
                }
            }
            Gesture::Press | Gesture::Release => {
                self.attach_events(id);
                for child in children {
                    self.attach_events(child);
                }
            }
        }
        Ok(())
    }

    /// The handler for `gesture` on `id`, falling back to its group's.
    /// Returns the handler and the widget it was registered on.
    fn handler_for(&self, id: WidgetId, gesture: Gesture) -> Option<(Handler, WidgetId)> {
        let widget = self.widgets.get(id)?;
        if let Some(handler) = widget.handlers.get(gesture) {
            return Some((Rc::clone(handler), id));
        }
        let parent = widget.parent?;
        let handler = self.widgets.get(parent)?.handlers.get(gesture)?;
        Some((Rc::clone(handler), parent))
    }

    /// Deliver a gesture reported by the host for `handle`.
    ///
    /// Returns `Ok(false)` if the handle is unknown or nothing handles the
    /// gesture; otherwise the handler's result.
    pub fn dispatch_gesture(&mut self, handle: NativeHandle, gesture: Gesture) -> Result<bool> {
        let Some(id) = self.lifecycle.owner(handle) else {
            debug!(?handle, ?gesture, "gesture for an unknown handle");
            return Ok(false);
        };
        let Some((handler, owner)) = self.handler_for(id, gesture) else {
            trace!(?id, ?gesture, "no handler");
            return Ok(false);
        };
        trace!(?owner, ?gesture, "dispatching gesture");
        handler(self, owner)?;
        Ok(true)
    }

    // ── Update / remove ──────────────────────────────────────────────

    /// Merge `patch` into a widget's properties and re-render.
    ///
    /// A live native widget gets the merged properties immediately; the
    /// render pass that follows picks up anything else that is dirty.
    pub fn update(&mut self, id: WidgetId, patch: impl Into<WidgetProps>) -> Result<()> {
        let Some(widget) = self.widgets.get_mut(id) else {
            warn!(?id, "update of a widget that is not active");
            return Err(GuiError::NotActive(id));
        };
        let expected = widget.kind();
        if let Err(found) = widget.props.merge(patch.into()) {
            warn!(?id, %expected, %found, "update with properties of another kind");
            return Err(GuiError::KindMismatch { widget: id, expected, found });
        }
        widget.needs_update = true;

        self.push_properties(id)?;
        self.render()
    }

    /// Send the current properties of a live widget to its native handle.
    fn push_properties(&mut self, id: WidgetId) -> Result<()> {
        let Some(widget) = self.widgets.get(id) else {
            return Ok(());
        };
        let (Some(handle), Some(cell)) = (widget.handle, widget.bounds) else {
            return Ok(());
        };
        let ctx = MaterializeContext {
            defaults: &self.defaults,
            surface: &*self.surface,
            has_click: widget.has_handler(Gesture::Click),
        };
        let bag = native_props(&widget.props, cell, &ctx)?;
        self.surface.set_properties(handle, &bag)?;
        self.lifecycle.on_update(handle);
        Ok(())
    }

    /// Remove a widget and repack the layout.
    ///
    /// Every native widget is destroyed, explicit row percentages are reset
    /// to an even split, and everything is rendered again. Removing a group
    /// removes its children; removing the last child of a group leaves the
    /// empty group in place.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        let (parent, children) = match self.widgets.get(id) {
            Some(widget) => (widget.parent, widget.children.clone()),
            None => {
                warn!(?id, "remove of a widget that is not active");
                return Err(GuiError::NotActive(id));
            }
        };

        self.detach_events(id);
        for &child in &children {
            self.detach_events(child);
        }

        if let Some(group) = parent.and_then(|p| self.widgets.get_mut(p)) {
            group.children.retain(|c| *c != id);
            group.needs_update = true;
            let siblings = group.children.clone();
            for sibling in siblings {
                if let Some(w) = self.widgets.get_mut(sibling) {
                    w.needs_update = true;
                }
            }
        }

        if let Some(mut widget) = self.widgets.remove(id) {
            self.destroy_handle(&mut widget);
        }
        for child in children {
            if let Some(mut widget) = self.widgets.remove(child) {
                self.destroy_handle(&mut widget);
            }
        }

        self.purge_handles();
        self.layout.remove_widget(id);
        self.layout.equalize();
        debug!(?id, rows = self.layout.row_count(), remaining = self.widgets.len(), "removal repack");

        self.render()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    /// The declared properties of a widget.
    pub fn properties(&self, id: WidgetId) -> Option<&WidgetProps> {
        self.widgets.get(id).map(Widget::props)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of live logical widgets, group children included.
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    /// Resolved placement of every committed cell.
    pub fn placements(&self) -> Vec<Placement> {
        layout::place_rows(self.layout.rows(), self.screen, self.defaults.padding)
    }

    /// Height of each committed row; 0 when there are none.
    pub fn row_height(&self) -> f32 {
        layout::row_height(self.screen, self.defaults.padding, self.layout.row_count())
    }

    pub fn surface(&self) -> &dyn NativeSurface {
        &*self.surface
    }

    /// Downcast the surface to its concrete type.
    pub fn surface_as<T: Any>(&self) -> Option<&T> {
        self.surface.as_any().downcast_ref::<T>()
    }

    pub fn surface_as_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.surface.as_any_mut().downcast_mut::<T>()
    }

    pub fn lifecycle(&self) -> &LifecycleTracker {
        &self.lifecycle
    }

    /// Drain the native lifecycle events recorded so far.
    ///
    /// Always empty unless the engine was built with
    /// [`GuiConfig::with_lifecycle_events`].
    pub fn drain_lifecycle(&mut self) -> Vec<LifecycleEvent> {
        self.lifecycle.drain()
    }
}

impl Compose for AutoGui {
    fn add_leaf(&mut self, props: LeafProps) -> WidgetId {
        self.insert_widget(props.into_props(), None)
    }
}

impl std::fmt::Debug for AutoGui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoGui")
            .field("screen", &self.screen)
            .field("defaults", &self.defaults)
            .field("widgets", &self.widgets.len())
            .field("rows", &self.layout.row_count())
            .field("live_handles", &self.lifecycle.live_count())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
