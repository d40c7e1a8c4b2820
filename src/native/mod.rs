//! Native boundary: the surface trait, handles, and property bags.

pub mod props;
pub mod surface;

pub use props::{keys, Align, PropValue, PropertyBag, TextStyle};
pub use surface::{Gesture, ImageInfo, NativeHandle, NativeKind, NativeSurface};
