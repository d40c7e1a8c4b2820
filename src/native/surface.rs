//! The host capability the engine renders through.
//!
//! [`NativeSurface`] is the only way the engine touches the screen. The host
//! (firmware binding, simulator, or the in-memory fake in
//! [`testing`](crate::testing)) implements it; the engine owns one boxed
//! instance for its whole lifetime.

use std::any::Any;

use crate::error::NativeError;
use crate::geometry::Size;

use super::props::PropertyBag;

// ---------------------------------------------------------------------------
// Handles and tags
// ---------------------------------------------------------------------------

/// Opaque identifier of an on-screen native widget.
///
/// Only meaningful to the surface that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NativeHandle(pub u64);

/// The native widget types the engine can create.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NativeKind {
    Text,
    Button,
    Image,
    Circle,
    Arc,
    FillRect,
    StrokeRect,
}

impl NativeKind {
    /// Lowercase name as the native API spells it.
    pub fn name(self) -> &'static str {
        match self {
            NativeKind::Text => "text",
            NativeKind::Button => "button",
            NativeKind::Image => "img",
            NativeKind::Circle => "circle",
            NativeKind::Arc => "arc",
            NativeKind::FillRect => "fill_rect",
            NativeKind::StrokeRect => "stroke_rect",
        }
    }
}

/// Touch gestures a widget can react to.
///
/// `Press` and `Release` are opt-in listeners on any widget. `Click` is the
/// built-in activation of a native button; the host reports it without a
/// listener being registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gesture {
    Press,
    Release,
    Click,
}

/// Pixel dimensions of an image asset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageInfo {
    pub width: f32,
    pub height: f32,
}

impl ImageInfo {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// NativeSurface
// ---------------------------------------------------------------------------

/// Imperative native widget API.
///
/// Implementations are not expected to know anything about layout. The engine
/// guarantees it never uses a handle after destroying it.
pub trait NativeSurface {
    /// Device screen size. Queried once when the engine is built.
    fn screen_size(&self) -> Size;

    /// Create a native widget and return its handle.
    fn create_widget(
        &mut self,
        kind: NativeKind,
        props: &PropertyBag,
    ) -> Result<NativeHandle, NativeError>;

    /// Replace the visual properties of an existing widget in place.
    fn set_properties(
        &mut self,
        handle: NativeHandle,
        props: &PropertyBag,
    ) -> Result<(), NativeError>;

    /// Release a native widget. Its listeners go with it.
    fn destroy_widget(&mut self, handle: NativeHandle);

    /// Start reporting `gesture` for `handle`.
    fn add_event_listener(&mut self, handle: NativeHandle, gesture: Gesture);

    /// Stop reporting `gesture` for `handle`.
    fn remove_event_listener(&mut self, handle: NativeHandle, gesture: Gesture);

    /// Dimensions of the image at `src`.
    fn image_info(&self, src: &str) -> Result<ImageInfo, NativeError>;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_kind_names() {
        assert_eq!(NativeKind::Image.name(), "img");
        assert_eq!(NativeKind::FillRect.name(), "fill_rect");
        assert_eq!(NativeKind::StrokeRect.name(), "stroke_rect");
    }

    #[test]
    fn handles_order_by_value() {
        assert!(NativeHandle(1) < NativeHandle(2));
    }

    #[test]
    fn image_info_size() {
        assert_eq!(ImageInfo::new(64.0, 32.0).size(), Size::new(64.0, 32.0));
    }
}
