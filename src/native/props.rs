//! Property bags: the untyped attribute maps handed to the native layer.
//!
//! Widgets keep typed properties; they are flattened into a [`PropertyBag`]
//! only when a native widget is created or updated. The bag doubles as the
//! `extra` escape hatch for native attributes the typed properties don't
//! model.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::color::Color;

/// Well-known property keys.
pub mod keys {
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const W: &str = "w";
    pub const H: &str = "h";
    pub const TEXT: &str = "text";
    pub const COLOR: &str = "color";
    pub const TEXT_SIZE: &str = "text_size";
    pub const ALIGN_H: &str = "align_h";
    pub const ALIGN_V: &str = "align_v";
    pub const TEXT_STYLE: &str = "text_style";
    pub const RADIUS: &str = "radius";
    pub const NORMAL_COLOR: &str = "normal_color";
    pub const PRESS_COLOR: &str = "press_color";
    pub const NORMAL_SRC: &str = "normal_src";
    pub const PRESS_SRC: &str = "press_src";
    pub const CLICK_FUNC: &str = "click_func";
    pub const SRC: &str = "src";
    pub const AUTO_SCALE: &str = "auto_scale";
    pub const CENTER_X: &str = "center_x";
    pub const CENTER_Y: &str = "center_y";
    pub const START_ANGLE: &str = "start_angle";
    pub const END_ANGLE: &str = "end_angle";
    pub const LINE_WIDTH: &str = "line_width";
}

// ---------------------------------------------------------------------------
// Enumerated attribute values
// ---------------------------------------------------------------------------

/// Horizontal or vertical text alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

/// How text that does not fit its box is handled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Clip without a marker.
    None,
    /// Wrap at word boundaries.
    Wrap,
    /// Wrap at any character.
    CharWrap,
    /// Truncate with an ellipsis.
    #[default]
    Ellipsis,
}

// ---------------------------------------------------------------------------
// PropValue
// ---------------------------------------------------------------------------

/// A single native attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    Text(String),
    Color(Color),
    Align(Align),
    TextStyle(TextStyle),
}

impl PropValue {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            PropValue::Float(v) => Some(*v),
            PropValue::Int(v) => Some(*v as f32),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        PropValue::Int(v)
    }
}

impl From<f32> for PropValue {
    fn from(v: f32) -> Self {
        PropValue::Float(v)
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Text(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Text(v)
    }
}

impl From<Color> for PropValue {
    fn from(v: Color) -> Self {
        PropValue::Color(v)
    }
}

impl From<Align> for PropValue {
    fn from(v: Align) -> Self {
        PropValue::Align(v)
    }
}

impl From<TextStyle> for PropValue {
    fn from(v: TextStyle) -> Self {
        PropValue::TextStyle(v)
    }
}

// ---------------------------------------------------------------------------
// PropertyBag
// ---------------------------------------------------------------------------

/// An ordered map of native attribute names to values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyBag {
    entries: BTreeMap<String, PropValue>,
}

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value (builder).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Set a value only if `value` is `Some`.
    pub fn set_opt<V: Into<PropValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.remove(key)
    }

    /// Overlay every entry of `other`; keys in `other` win.
    pub fn merge(&mut self, other: &PropertyBag) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, PropValue> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PropertyBag {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
