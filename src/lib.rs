//! # autogui
//!
//! A retained-mode GUI layer over an imperative native widget API.
//!
//! Native smartwatch widget APIs place every widget at absolute pixel
//! coordinates and know nothing about layout. autogui adds a row/percentage
//! layout, lazy dirty-tracked materialization, widget groups, and a removal
//! protocol that repacks the screen, all behind a small [`NativeSurface`]
//! trait the host implements.
//!
//! ## Core Systems
//!
//! - **[`engine`]**: `AutoGui`, the render pass, updates, removal, gestures
//! - **[`layout`]**: rows of cells, percentage resolution, pixel placement
//! - **[`widget`]**: typed widget properties, materialization, lifecycle
//! - **[`compose`]**: the `Compose` construction trait and group scopes
//! - **[`native`]**: the `NativeSurface` trait, handles, property bags
//! - **[`config`]**: `GuiConfig` and the engine defaults
//! - **[`color`]**: 24-bit colors and the button press transform
//! - **[`testing`]**: fake surface, Pilot, snapshot helpers
//!
//! [`NativeSurface`]: native::NativeSurface

// Foundation
pub mod color;
pub mod error;
pub mod geometry;

// Native boundary
pub mod native;

// Layout and widgets
pub mod layout;
pub mod widget;

// Engine
pub mod compose;
pub mod config;
pub mod engine;

// Headless testing
pub mod testing;

/// The types most applications need.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::compose::{Compose, GroupBuilder};
    pub use crate::config::{DefaultSetting, GuiConfig};
    pub use crate::engine::AutoGui;
    pub use crate::error::{GuiError, NativeError};
    pub use crate::layout::Percentage;
    pub use crate::native::{Gesture, NativeHandle, NativeSurface, PropertyBag};
    pub use crate::widget::{
        ArcProps, ButtonProps, CircleProps, FillRectProps, ImageProps, LeafProps,
        StrokeRectProps, TextProps, WidgetId, WidgetProps,
    };
}
