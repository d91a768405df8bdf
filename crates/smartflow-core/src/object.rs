//! Widget identity.
//!
//! Layouts never hold widgets directly. They store metadata keyed by a
//! [`WidgetId`] and reach the widget itself through a storage that resolves
//! the id. Ids are issued when a widget is inserted into storage, so identity
//! never depends on where the widget lives in memory.

use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a widget.
    ///
    /// `WidgetId`s are stable handles issued by widget storage. They stay
    /// valid while the widget is stored and are never reused for another
    /// widget while it is alive.
    pub struct WidgetId;
}

impl WidgetId {
    /// Convert the WidgetId to a raw u64 value.
    ///
    /// The raw value can be converted back using [`WidgetId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a WidgetId from a raw u64 value.
    ///
    /// This does not check that any storage holds a widget for the id.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_raw_round_trip() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let id = map.insert(());
        assert_eq!(WidgetId::from_raw(id.as_raw()), id);
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = map.insert(());
        let b = map.insert(());
        assert_ne!(a, b);
    }
}
