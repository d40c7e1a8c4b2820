//! Error types for the engine and the native boundary.

use thiserror::Error;

use crate::native::{Gesture, NativeHandle};
use crate::widget::{WidgetId, WidgetKind};

/// Failures reported by a [`NativeSurface`](crate::native::NativeSurface).
///
/// The engine never swallows these; they surface as [`GuiError::Native`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    #[error("image not found: {0}")]
    ImageNotFound(String),

    #[error("unknown native handle: {0:?}")]
    UnknownHandle(NativeHandle),
}

/// Errors returned by [`AutoGui`](crate::engine::AutoGui) operations.
///
/// Everything except [`GuiError::Native`] is a usage error: the call is
/// logged, leaves the engine untouched, and is safe to ignore.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuiError {
    #[error("widget {0:?} is not in the active widget set")]
    NotActive(WidgetId),

    #[error("cannot update {widget:?}: it is a {expected} widget, got {found} properties")]
    KindMismatch {
        widget: WidgetId,
        expected: WidgetKind,
        found: WidgetKind,
    },

    #[error("widget {widget:?} already has a {gesture:?} handler")]
    HandlerAlreadySet { widget: WidgetId, gesture: Gesture },

    #[error("{0} widgets have no click handler; only buttons do")]
    NotClickable(WidgetKind),

    #[error("there is no row to apply a layout to")]
    NoRow,

    #[error("group properties cannot be added as a widget; groups come from start_group and do not nest")]
    NestedGroup,

    #[error(transparent)]
    Native(#[from] NativeError),
}

impl GuiError {
    /// Whether this is a usage error rather than a native failure.
    pub fn is_usage(&self) -> bool {
        !matches!(self, GuiError::Native(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_error_converts() {
        let err: GuiError = NativeError::ImageNotFound("a.png".into()).into();
        assert!(!err.is_usage());
        assert_eq!(err.to_string(), "image not found: a.png");
    }

    #[test]
    fn usage_errors_are_usage() {
        assert!(GuiError::NoRow.is_usage());
        assert!(GuiError::NestedGroup.is_usage());
        assert!(GuiError::NotClickable(WidgetKind::Text).is_usage());
    }

    #[test]
    fn not_clickable_message() {
        let err = GuiError::NotClickable(WidgetKind::Circle);
        assert_eq!(err.to_string(), "circle widgets have no click handler; only buttons do");
    }
}
