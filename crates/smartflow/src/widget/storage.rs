//! Owning widget storage.

use slotmap::SlotMap;
use smartflow_core::WidgetId;

use super::{Widget, WidgetAccess};

/// Slotmap-backed storage that owns widgets and issues their ids.
///
/// Ids are issued on [`insert`](WidgetStore::insert) and stay stable for as
/// long as the widget is stored.
#[derive(Default)]
pub struct WidgetStore {
    widgets: SlotMap<WidgetId, Box<dyn Widget>>,
}

impl WidgetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a widget and return its id.
    pub fn insert<W: Widget + 'static>(&mut self, widget: W) -> WidgetId {
        let id = self.widgets.insert(Box::new(widget));
        tracing::trace!(target: "smartflow_core", ?id, type_name = std::any::type_name::<W>(), "stored widget");
        id
    }

    /// Remove a widget, returning it if it was stored.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.widgets.remove(id)
    }

    /// Check whether a widget is stored under `id`.
    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of stored widgets.
    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl WidgetAccess for WidgetStore {
    fn get_widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|w| &**w as &dyn Widget)
    }

    fn get_widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.widgets.get_mut(id).map(|w| &mut **w as &mut dyn Widget)
    }
}

impl std::fmt::Debug for WidgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetStore")
            .field("len", &self.widgets.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(WidgetStore: Send, Sync);
