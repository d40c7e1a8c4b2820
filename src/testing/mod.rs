//! Headless testing support: a fake native surface, a Pilot, snapshots.
//!
//! Use [`FakeSurface`] as the engine's surface to record native calls, the
//! [`Pilot`] to drive gestures, and [`surface_to_string`] to capture the live
//! native widgets as text.

pub mod fake;
pub mod pilot;
pub mod snapshot;

pub use fake::{FakeSurface, FakeWidget, SurfaceCall};
pub use pilot::Pilot;
pub use snapshot::{props_to_string, surface_to_string};
