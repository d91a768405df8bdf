//! Core Layout trait definition.

use smartflow_core::{Size, WidgetId};

use crate::widget::WidgetAccess;

/// The interface a container uses to arrange its children.
///
/// A container hands its layout the ordered list of child ids. The layout
/// reads what it needs through `storage` and writes geometry back through it.
pub trait Layout: Send + Sync {
    /// Position and size every widget in `widgets` within `size`.
    ///
    /// Widgets the layout knows nothing about are left untouched.
    fn layout<S: WidgetAccess>(&mut self, storage: &mut S, widgets: &[WidgetId], size: Size);

    /// The smallest size the container can take without clipping.
    fn min_size<S: WidgetAccess>(&mut self, storage: &S, widgets: &[WidgetId]) -> Size;
}
