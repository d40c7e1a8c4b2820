//! Widget identity.

use slotmap::new_key_type;

new_key_type! {
    /// Stable identifier of a logical widget in the engine's arena.
    ///
    /// Ids are generational: once a widget is removed its id never resolves
    /// again, even if the slot is reused.
    pub struct WidgetId;
}
