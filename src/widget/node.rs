//! The logical widget stored in the engine's arena.

use std::fmt;
use std::rc::Rc;

use crate::engine::AutoGui;
use crate::error::GuiError;
use crate::geometry::Bounds;
use crate::native::{Gesture, NativeHandle};

use super::id::WidgetId;
use super::props::{WidgetKind, WidgetProps};

/// A gesture callback.
///
/// Handlers receive the engine and the id of the widget that was touched, so
/// they can update or remove widgets. They run outside the render pass, and
/// their errors are returned from
/// [`dispatch_gesture`](crate::engine::AutoGui::dispatch_gesture).
pub type Handler = Rc<dyn Fn(&mut AutoGui, WidgetId) -> Result<(), GuiError>>;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Per-gesture handler slots. Each slot is written at most once.
#[derive(Clone, Default)]
pub struct Handlers {
    press: Option<Handler>,
    release: Option<Handler>,
    click: Option<Handler>,
}

impl Handlers {
    pub fn get(&self, gesture: Gesture) -> Option<&Handler> {
        match gesture {
            Gesture::Press => self.press.as_ref(),
            Gesture::Release => self.release.as_ref(),
            Gesture::Click => self.click.as_ref(),
        }
    }

    pub fn has(&self, gesture: Gesture) -> bool {
        self.get(gesture).is_some()
    }

    /// Store `handler` unless the slot is taken. Returns whether it was stored.
    pub fn set(&mut self, gesture: Gesture, handler: Handler) -> bool {
        let slot = match gesture {
            Gesture::Press => &mut self.press,
            Gesture::Release => &mut self.release,
            Gesture::Click => &mut self.click,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(handler);
        true
    }

    /// Empty the slot for `gesture`.
    pub(crate) fn clear(&mut self, gesture: Gesture) -> Option<Handler> {
        match gesture {
            Gesture::Press => self.press.take(),
            Gesture::Release => self.release.take(),
            Gesture::Click => self.click.take(),
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("press", &self.press.is_some())
            .field("release", &self.release.is_some())
            .field("click", &self.click.is_some())
            .finish()
    }
}

/// Gestures whose handlers are delivered through opt-in native listeners.
pub const LISTENED_GESTURES: [Gesture; 2] = [Gesture::Press, Gesture::Release];

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// One logical UI element.
///
/// A widget exists in the arena from creation until removal. Its native
/// counterpart comes and goes: it is created lazily at render time and
/// destroyed by forced renders and removal repacks.
pub struct Widget {
    pub(crate) props: WidgetProps,
    pub(crate) handle: Option<NativeHandle>,
    /// Cell bounds of the last materialization.
    pub(crate) bounds: Option<Bounds>,
    pub(crate) needs_update: bool,
    pub(crate) is_rendered: bool,
    pub(crate) handlers: Handlers,
    /// Gestures with a listener attached to the current handle.
    pub(crate) listening: Vec<Gesture>,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
}

impl Widget {
    pub(crate) fn new(props: WidgetProps, parent: Option<WidgetId>) -> Self {
        Self {
            props,
            handle: None,
            bounds: None,
            needs_update: true,
            is_rendered: false,
            handlers: Handlers::default(),
            listening: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.props.kind()
    }

    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    pub fn handle(&self) -> Option<NativeHandle> {
        self.handle
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    pub fn is_rendered(&self) -> bool {
        self.is_rendered
    }

    pub fn is_group(&self) -> bool {
        self.kind() == WidgetKind::Group
    }

    /// The group this widget belongs to, if any.
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Children of a group, in insertion order. Empty for other kinds.
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn has_handler(&self, gesture: Gesture) -> bool {
        self.handlers.has(gesture)
    }

    pub fn is_listening(&self, gesture: Gesture) -> bool {
        self.listening.contains(&gesture)
    }

    /// Forget the native handle. Listener state goes with it.
    pub(crate) fn take_handle(&mut self) -> Option<NativeHandle> {
        self.listening.clear();
        self.handle.take()
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("kind", &self.kind())
            .field("handle", &self.handle)
            .field("needs_update", &self.needs_update)
            .field("is_rendered", &self.is_rendered)
            .field("handlers", &self.handlers)
            .field("parent", &self.parent)
            .field("children", &self.children.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TextProps;

    fn noop() -> Handler {
        Rc::new(|_: &mut AutoGui, _: WidgetId| -> Result<(), GuiError> { Ok(()) })
    }

    #[test]
    fn new_widget_is_dirty_and_unrendered() {
        let w = Widget::new(TextProps::new("a").into(), None);
        assert!(w.needs_update());
        assert!(!w.is_rendered());
        assert_eq!(w.handle(), None);
        assert_eq!(w.kind(), WidgetKind::Text);
        assert!(!w.is_group());
    }

    #[test]
    fn handler_slots_are_write_once() {
        let mut h = Handlers::default();
        assert!(h.set(Gesture::Press, noop()));
        assert!(!h.set(Gesture::Press, noop()));
        assert!(h.set(Gesture::Release, noop()));
        assert!(h.has(Gesture::Press));
        assert!(!h.has(Gesture::Click));
    }

    #[test]
    fn cleared_slot_accepts_a_new_handler() {
        let mut h = Handlers::default();
        assert!(h.set(Gesture::Click, noop()));
        assert!(h.clear(Gesture::Click).is_some());
        assert!(!h.has(Gesture::Click));
        assert!(h.set(Gesture::Click, noop()));
    }

    #[test]
    fn take_handle_clears_listeners() {
        let mut w = Widget::new(WidgetProps::group(), None);
        w.handle = Some(NativeHandle(3));
        w.listening.push(Gesture::Press);
        assert_eq!(w.take_handle(), Some(NativeHandle(3)));
        assert!(!w.is_listening(Gesture::Press));
        assert_eq!(w.handle(), None);
    }

    #[test]
    fn debug_hides_closures() {
        let mut w = Widget::new(TextProps::new("a").into(), None);
        w.handlers.set(Gesture::Press, noop());
        let out = format!("{w:?}");
        assert!(out.contains("press: true"));
        assert!(out.contains("release: false"));
    }
}
