//! Widget abstraction consumed by layouts.
//!
//! Layouts only need three things from a widget: its minimum size, and the
//! ability to resize and move it. [`Widget`] exposes those through an embedded
//! [`WidgetBase`], and [`WidgetAccess`] resolves a [`WidgetId`] to a widget.
//!
//! [`WidgetStore`] is a ready-made storage that issues ids on insertion.

mod base;
mod storage;

pub use base::WidgetBase;
pub use storage::WidgetStore;

use smartflow_core::{Point, Rect, Size, WidgetId};

/// A widget that can be arranged by a layout.
///
/// Implementors embed a [`WidgetBase`] and return it from
/// [`widget_base`](Widget::widget_base) and
/// [`widget_base_mut`](Widget::widget_base_mut). The remaining methods have
/// default implementations backed by the base, and can be overridden when a
/// widget computes its minimum size from content.
pub trait Widget: Send + Sync {
    /// Get the embedded widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get the embedded widget base mutably.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The smallest size the widget can be displayed at.
    fn minimum_size(&self) -> Size {
        self.widget_base().minimum_size()
    }

    /// Change the widget's size, keeping its position.
    fn resize(&mut self, size: Size) {
        self.widget_base_mut().resize(size);
    }

    /// Move the widget, keeping its size.
    fn move_to(&mut self, position: Point) {
        self.widget_base_mut().move_to(position);
    }

    /// The widget's current geometry relative to its container.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }
}

/// Access to widgets by id.
///
/// Layouts are generic over this trait so they work with any storage the
/// host application uses.
pub trait WidgetAccess {
    /// Get an immutable reference to a widget by its ID.
    fn get_widget(&self, id: WidgetId) -> Option<&dyn Widget>;

    /// Get a mutable reference to a widget by its ID.
    fn get_widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget>;
}
