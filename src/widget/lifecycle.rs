//! Native lifecycle: materialize, update, destroy.
//!
//! The `LifecycleTracker` records which native handles are currently alive
//! and which logical widget owns each one. When recording is switched on it
//! also queues events (`Materialize`, `Update`, `Destroy`) for the host to
//! drain. Recording is off by default so the queue cannot grow unbounded in
//! a host that never drains it.

use std::collections::HashMap;

use crate::native::NativeHandle;

use super::id::WidgetId;

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// Events that occur during the native widget lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A native widget was created for a logical widget.
    Materialize { widget: WidgetId, handle: NativeHandle },
    /// A live native widget had its properties replaced.
    Update { widget: WidgetId, handle: NativeHandle },
    /// A native widget was destroyed.
    Destroy { widget: WidgetId, handle: NativeHandle },
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Tracks live native handles and, optionally, queues lifecycle events.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    live: HashMap<NativeHandle, WidgetId>,
    recording: bool,
    pending: Vec<LifecycleEvent>,
}

impl LifecycleTracker {
    /// A tracker that keeps the live handle map but queues no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch event recording on or off (builder).
    pub fn with_recording(mut self, recording: bool) -> Self {
        self.recording = recording;
        self
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    fn record(&mut self, event: LifecycleEvent) {
        if self.recording {
            self.pending.push(event);
        }
    }

    /// Record that `handle` was created for `widget`.
    ///
    /// A handle that is already live is not recorded twice.
    pub fn on_materialize(&mut self, widget: WidgetId, handle: NativeHandle) {
        if self.live.insert(handle, widget).is_none() {
            self.record(LifecycleEvent::Materialize { widget, handle });
        }
    }

    /// Record that `handle` was updated in place. Dead handles are ignored.
    pub fn on_update(&mut self, handle: NativeHandle) {
        if let Some(&widget) = self.live.get(&handle) {
            self.record(LifecycleEvent::Update { widget, handle });
        }
    }

    /// Record that `handle` was destroyed. Dead handles are ignored.
    pub fn on_destroy(&mut self, handle: NativeHandle) {
        if let Some(widget) = self.live.remove(&handle) {
            self.record(LifecycleEvent::Destroy { widget, handle });
        }
    }

    pub fn is_live(&self, handle: NativeHandle) -> bool {
        self.live.contains_key(&handle)
    }

    /// The widget owning a live handle.
    pub fn owner(&self, handle: NativeHandle) -> Option<WidgetId> {
        self.live.get(&handle).copied()
    }

    /// Live handles owned by `widget`.
    pub fn handles_of(&self, widget: WidgetId) -> Vec<NativeHandle> {
        let mut handles: Vec<NativeHandle> = self
            .live
            .iter()
            .filter(|(_, &owner)| owner == widget)
            .map(|(&handle, _)| handle)
            .collect();
        handles.sort();
        handles
    }

    /// The number of live native handles.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Drain and return all pending events in order of occurrence.
    pub fn drain(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
