//! Widget system: identity, properties, materialization, lifecycle.

pub mod id;
pub mod lifecycle;
pub mod materialize;
pub mod node;
pub mod props;

pub use id::WidgetId;
pub use lifecycle::{LifecycleEvent, LifecycleTracker};
pub use materialize::{native_props, MaterializeContext};
pub use node::{Handler, Handlers, Widget};
pub use props::{
    ArcProps, ButtonProps, CircleProps, FillRectProps, ImageProps, KindProps, LeafProps,
    StrokeRectProps, TextProps, WidgetKind, WidgetProps,
};
