//! Engine configuration and the defaults read at materialization.

use crate::color::Color;
use crate::geometry::Size;

/// Default padding around every cell, in pixels.
pub const DEFAULT_PADDING: f32 = 4.0;
/// Default button corner radius.
pub const DEFAULT_BUTTON_RADIUS: f32 = 5.0;
/// Default label for text widgets and buttons.
pub const DEFAULT_TEXT: &str = "my text";
/// The default text size is the screen width divided by this.
pub const TEXT_SIZE_DIVISOR: f32 = 16.0;

// ---------------------------------------------------------------------------
// GuiConfig
// ---------------------------------------------------------------------------

/// Configuration for an [`AutoGui`](crate::engine::AutoGui).
///
/// Unset fields fall back to the built-in defaults when the engine is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuiConfig {
    pub padding: Option<f32>,
    pub color: Option<Color>,
    pub text_color: Option<Color>,
    /// Text size in points. Derived from the screen width when unset.
    pub text_size: Option<f32>,
    pub button_radius: Option<f32>,
    pub text: Option<String>,
    /// Queue native lifecycle events for
    /// [`drain_lifecycle`](crate::engine::AutoGui::drain_lifecycle). Off by default.
    pub lifecycle_events: bool,
}

impl GuiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell padding (builder).
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the default widget color (builder).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the default text color (builder).
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Set the default text size (builder).
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    /// Set the default button radius (builder).
    pub fn with_button_radius(mut self, radius: f32) -> Self {
        self.button_radius = Some(radius);
        self
    }

    /// Set the default label (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Record lifecycle events (builder). A host that turns this on must
    /// drain them.
    pub fn with_lifecycle_events(mut self, enabled: bool) -> Self {
        self.lifecycle_events = enabled;
        self
    }

    /// Resolve against the device screen.
    pub fn defaults_for(&self, screen: Size) -> Defaults {
        Defaults {
            padding: self.padding.unwrap_or(DEFAULT_PADDING),
            color: self.color.unwrap_or(Color::ORANGE),
            text_color: self.text_color.unwrap_or(Color::WHITE),
            text_size: self.text_size.unwrap_or(screen.width / TEXT_SIZE_DIVISOR),
            button_radius: self.button_radius.unwrap_or(DEFAULT_BUTTON_RADIUS),
            text: self.text.clone().unwrap_or_else(|| DEFAULT_TEXT.to_owned()),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Values used for every property a widget does not declare.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub padding: f32,
    pub color: Color,
    pub text_color: Color,
    pub text_size: f32,
    pub button_radius: f32,
    pub text: String,
}

impl Defaults {
    /// Built-in defaults for a screen.
    pub fn for_screen(screen: Size) -> Self {
        GuiConfig::default().defaults_for(screen)
    }

    pub fn apply(&mut self, setting: DefaultSetting) {
        match setting {
            DefaultSetting::Padding(v) => self.padding = v,
            DefaultSetting::Color(v) => self.color = v,
            DefaultSetting::TextColor(v) => self.text_color = v,
            DefaultSetting::TextSize(v) => self.text_size = v,
            DefaultSetting::ButtonRadius(v) => self.button_radius = v,
            DefaultSetting::Text(v) => self.text = v,
        }
    }
}

/// A single change to the engine defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultSetting {
    Padding(f32),
    Color(Color),
    TextColor(Color),
    TextSize(f32),
    ButtonRadius(f32),
    Text(String),
}

// ===========================================================================
// Tests
// ===========================================================================
