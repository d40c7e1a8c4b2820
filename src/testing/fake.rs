//! An in-memory [`NativeSurface`] that records every call.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::NativeError;
use crate::geometry::Size;
use crate::native::{Gesture, ImageInfo, NativeHandle, NativeKind, NativeSurface, PropertyBag};

/// One call made against a [`FakeSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Create { handle: NativeHandle, kind: NativeKind },
    SetProperties { handle: NativeHandle },
    Destroy { handle: NativeHandle },
    AddListener { handle: NativeHandle, gesture: Gesture },
    RemoveListener { handle: NativeHandle, gesture: Gesture },
}

/// A live native widget on the fake screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeWidget {
    pub kind: NativeKind,
    pub props: PropertyBag,
}

/// A headless screen for tests.
///
/// Handles are issued sequentially starting at 1 and never reused. Images
/// must be registered with [`with_image`](Self::with_image) before use.
#[derive(Debug, Default)]
pub struct FakeSurface {
    size: Size,
    next_handle: u64,
    live: BTreeMap<NativeHandle, FakeWidget>,
    listeners: BTreeSet<(NativeHandle, Gesture)>,
    images: HashMap<String, ImageInfo>,
    calls: Vec<SurfaceCall>,
}

impl FakeSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Register an image asset (builder).
    pub fn with_image(mut self, src: impl Into<String>, width: f32, height: f32) -> Self {
        self.images.insert(src.into(), ImageInfo::new(width, height));
        self
    }

    // ── Inspection ───────────────────────────────────────────────────

    pub fn widget(&self, handle: NativeHandle) -> Option<&FakeWidget> {
        self.live.get(&handle)
    }

    /// Live widgets in handle order.
    pub fn live(&self) -> impl Iterator<Item = (NativeHandle, &FakeWidget)> {
        self.live.iter().map(|(h, w)| (*h, w))
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_listening(&self, handle: NativeHandle, gesture: Gesture) -> bool {
        self.listeners.contains(&(handle, gesture))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn create_count(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Create { .. }))
    }

    pub fn destroy_count(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Destroy { .. }))
    }

    pub fn set_properties_count(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::SetProperties { .. }))
    }

    fn count(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl NativeSurface for FakeSurface {
    fn screen_size(&self) -> Size {
        self.size
    }

    fn create_widget(
        &mut self,
        kind: NativeKind,
        props: &PropertyBag,
    ) -> Result<NativeHandle, NativeError> {
        self.next_handle += 1;
        let handle = NativeHandle(self.next_handle);
        self.live.insert(handle, FakeWidget { kind, props: props.clone() });
        self.calls.push(SurfaceCall::Create { handle, kind });
        Ok(handle)
    }

    fn set_properties(
        &mut self,
        handle: NativeHandle,
        props: &PropertyBag,
    ) -> Result<(), NativeError> {
        let widget = self
            .live
            .get_mut(&handle)
            .ok_or(NativeError::UnknownHandle(handle))?;
        widget.props.merge(props);
        self.calls.push(SurfaceCall::SetProperties { handle });
        Ok(())
    }

    fn destroy_widget(&mut self, handle: NativeHandle) {
        if self.live.remove(&handle).is_some() {
            self.listeners.retain(|(h, _)| *h != handle);
            self.calls.push(SurfaceCall::Destroy { handle });
        }
    }

    fn add_event_listener(&mut self, handle: NativeHandle, gesture: Gesture) {
        if self.live.contains_key(&handle) {
            self.listeners.insert((handle, gesture));
            self.calls.push(SurfaceCall::AddListener { handle, gesture });
        }
    }

    fn remove_event_listener(&mut self, handle: NativeHandle, gesture: Gesture) {
        if self.listeners.remove(&(handle, gesture)) {
            self.calls.push(SurfaceCall::RemoveListener { handle, gesture });
        }
    }

    fn image_info(&self, src: &str) -> Result<ImageInfo, NativeError> {
        self.images
            .get(src)
            .copied()
            .ok_or_else(|| NativeError::ImageNotFound(src.to_owned()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::keys;

    #[test]
    fn handles_are_sequential() {
        let mut s = FakeSurface::new(100.0, 100.0);
        let a = s.create_widget(NativeKind::Text, &PropertyBag::new()).unwrap();
        let b = s.create_widget(NativeKind::Circle, &PropertyBag::new()).unwrap();
        assert_eq!(a, NativeHandle(1));
        assert_eq!(b, NativeHandle(2));
        assert_eq!(s.live_count(), 2);
    }

    #[test]
    fn destroy_drops_listeners() {
        let mut s = FakeSurface::new(100.0, 100.0);
        let h = s.create_widget(NativeKind::Button, &PropertyBag::new()).unwrap();
        s.add_event_listener(h, Gesture::Press);
        assert!(s.is_listening(h, Gesture::Press));
        s.destroy_widget(h);
        assert!(!s.is_listening(h, Gesture::Press));
        assert_eq!(s.listener_count(), 0);
        assert_eq!(s.destroy_count(), 1);
    }

    #[test]
    fn set_properties_merges() {
        let mut s = FakeSurface::new(100.0, 100.0);
        let h = s
            .create_widget(NativeKind::Text, &PropertyBag::new().with(keys::TEXT, "a").with(keys::X, 1))
            .unwrap();
        s.set_properties(h, &PropertyBag::new().with(keys::TEXT, "b")).unwrap();
        let w = s.widget(h).unwrap();
        assert_eq!(w.props.get(keys::TEXT).and_then(|v| v.as_str()), Some("b"));
        assert!(w.props.contains(keys::X));
    }

    #[test]
    fn set_properties_unknown_handle() {
        let mut s = FakeSurface::new(100.0, 100.0);
        let err = s.set_properties(NativeHandle(5), &PropertyBag::new()).unwrap_err();
        assert_eq!(err, NativeError::UnknownHandle(NativeHandle(5)));
    }

    #[test]
    fn images_must_be_registered() {
        let s = FakeSurface::new(100.0, 100.0).with_image("a.png", 10.0, 20.0);
        assert_eq!(s.image_info("a.png"), Ok(ImageInfo::new(10.0, 20.0)));
        assert!(s.image_info("b.png").is_err());
    }

    #[test]
    fn screen_size() {
        assert_eq!(FakeSurface::new(390.0, 450.0).screen_size(), Size::new(390.0, 450.0));
    }
}
