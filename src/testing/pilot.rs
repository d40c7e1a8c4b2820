//! Pilot: drive gestures against a headless engine.
//!
//! The `Pilot` owns an [`AutoGui`] over a [`FakeSurface`] and simulates
//! touches by looking up a widget's native handle and dispatching to it, the
//! way a host event loop would.

use crate::config::GuiConfig;
use crate::engine::AutoGui;
use crate::error::GuiError;
use crate::native::Gesture;
use crate::widget::WidgetId;

use super::fake::FakeSurface;
use super::snapshot::surface_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless engine driver for tests.
///
/// # Examples
///
/// ```ignore
/// use autogui::prelude::*;
/// use autogui::testing::Pilot;
///
/// let mut pilot = Pilot::new(480.0, 480.0);
/// let ok = pilot.gui_mut().button("OK");
/// pilot.gui_mut().on_click(ok, |gui, id| gui.remove(id))?;
/// pilot.render()?;
/// pilot.click(ok)?;
/// ```
pub struct Pilot {
    gui: AutoGui,
}

impl Pilot {
    /// A pilot over a blank fake screen.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_surface(FakeSurface::new(width, height), GuiConfig::default())
    }

    /// A pilot over a prepared fake screen (e.g. with images registered).
    pub fn with_surface(surface: FakeSurface, config: GuiConfig) -> Self {
        Self {
            gui: AutoGui::with_config(surface, config),
        }
    }

    // ── Gestures ─────────────────────────────────────────────────────

    /// Touch down on a widget. Returns whether a handler ran.
    pub fn press(&mut self, id: WidgetId) -> Result<bool, GuiError> {
        self.gesture(id, Gesture::Press)
    }

    /// Lift off a widget.
    pub fn release(&mut self, id: WidgetId) -> Result<bool, GuiError> {
        self.gesture(id, Gesture::Release)
    }

    /// Activate a button.
    pub fn click(&mut self, id: WidgetId) -> Result<bool, GuiError> {
        self.gesture(id, Gesture::Click)
    }

    /// Press then release, as a real tap would.
    pub fn tap(&mut self, id: WidgetId) -> Result<bool, GuiError> {
        let pressed = self.press(id)?;
        let released = self.release(id)?;
        Ok(pressed || released)
    }

    /// Deliver `gesture` to `id` if the fake screen would report it: the
    /// widget must be live, and press/release need an attached listener.
    fn gesture(&mut self, id: WidgetId, gesture: Gesture) -> Result<bool, GuiError> {
        let Some(handle) = self.gui.widget(id).and_then(|w| w.handle()) else {
            return Ok(false);
        };
        let reported = match gesture {
            Gesture::Click => true,
            Gesture::Press | Gesture::Release => self.surface().is_listening(handle, gesture),
        };
        if !reported {
            return Ok(false);
        }
        self.gui.dispatch_gesture(handle, gesture)
    }

    // ── Engine ───────────────────────────────────────────────────────

    pub fn render(&mut self) -> Result<(), GuiError> {
        self.gui.render()
    }

    pub fn gui(&self) -> &AutoGui {
        &self.gui
    }

    pub fn gui_mut(&mut self) -> &mut AutoGui {
        &mut self.gui
    }

    /// The fake screen behind the engine.
    pub fn surface(&self) -> &FakeSurface {
        self.gui
            .surface_as::<FakeSurface>()
            .unwrap_or_else(|| unreachable!("a pilot is always built over a FakeSurface"))
    }

    pub fn surface_mut(&mut self) -> &mut FakeSurface {
        self.gui
            .surface_as_mut::<FakeSurface>()
            .unwrap_or_else(|| unreachable!("a pilot is always built over a FakeSurface"))
    }

    /// Snapshot of the live native widgets.
    pub fn snapshot(&self) -> String {
        surface_to_string(self.surface())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Compose;
    use crate::widget::TextProps;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn press_without_listener_is_ignored() {
        let mut pilot = Pilot::new(480.0, 480.0);
        let id = pilot.gui_mut().text("a");
        pilot.render().unwrap();
        assert_eq!(pilot.press(id), Ok(false));
    }

    #[test]
    fn press_before_render_is_ignored() {
        let mut pilot = Pilot::new(480.0, 480.0);
        let id = pilot.gui_mut().text("a");
        pilot.gui_mut().on_press(id, |_, _| Ok(())).unwrap();
        assert_eq!(pilot.press(id), Ok(false));
    }

    #[test]
    fn tap_runs_both_handlers() {
        let mut pilot = Pilot::new(480.0, 480.0);
        let id = pilot.gui_mut().text("a");
        let hits = Rc::new(Cell::new(0));
        let (p, r) = (Rc::clone(&hits), Rc::clone(&hits));
        pilot.gui_mut().on_press(id, move |_, _| {
            p.set(p.get() + 1);
            Ok(())
        }).unwrap();
        pilot.gui_mut().on_release(id, move |_, _| {
            r.set(r.get() + 10);
            Ok(())
        }).unwrap();
        pilot.render().unwrap();

        assert_eq!(pilot.tap(id), Ok(true));
        assert_eq!(hits.get(), 11);
    }

    #[test]
    fn handler_can_update() {
        let mut pilot = Pilot::new(480.0, 480.0);
        let id = pilot.gui_mut().text("before");
        pilot
            .gui_mut()
            .on_press(id, |gui, id| gui.update(id, TextProps::new("after")))
            .unwrap();
        pilot.render().unwrap();
        pilot.press(id).unwrap();
        assert!(pilot.snapshot().contains("text=\"after\""));
    }
}
