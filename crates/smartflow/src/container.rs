//! Containers arranged by a row layout.
//!
//! [`Container`] holds an ordered list of child ids and the size it has been
//! given. Changes do not lay children out immediately: they request a
//! refresh, and the pending refresh runs on the next
//! [`activate`](Container::activate), typically right before painting.
//!
//! [`SmartFlow`] couples a [`Container`] with a [`SmartFlowLayout`] and
//! forwards registration calls to both.
//!
//! # Example
//!
//! ```ignore
//! use smartflow::container::SmartFlow;
//! use smartflow_core::Size;
//!
//! let mut flow = SmartFlow::new(Size::new(400.0, 300.0));
//! flow.add_row(title);
//! flow.add_column([ok_button, cancel_button]);
//! flow.activate(&mut storage);
//! ```

use smartflow_core::{Point, Size, WidgetId};

use crate::config::FlowConfig;
use crate::layout::{Gap, Layout, SmartFlowLayout};
use crate::widget::WidgetAccess;

/// An ordered collection of child widgets with a size.
#[derive(Debug, Clone)]
pub struct Container {
    children: Vec<WidgetId>,
    size: Size,
    needs_layout: bool,
    refresh_count: u64,
}

impl Container {
    /// Create an empty container of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            children: Vec::new(),
            size,
            needs_layout: true,
            refresh_count: 0,
        }
    }

    /// Children in insertion order.
    #[inline]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Check whether `id` is a child.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.children.contains(&id)
    }

    /// Append a child. Returns false if it was already a child.
    ///
    /// Adding does not request a refresh on its own.
    pub fn add(&mut self, id: WidgetId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.children.push(id);
        true
    }

    /// The container's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Change the container's size, requesting a refresh if it changed.
    pub fn resize(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.refresh();
        }
    }

    /// Request that children be laid out again.
    pub fn refresh(&mut self) {
        self.needs_layout = true;
        self.refresh_count += 1;
        tracing::trace!(target: "smartflow::container", refresh = self.refresh_count, "refresh requested");
    }

    /// Check whether a refresh is pending.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Number of refreshes requested since creation.
    #[inline]
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Run a pending refresh.
    ///
    /// Returns true if the layout ran.
    pub fn activate<L: Layout, S: WidgetAccess>(&mut self, layout: &mut L, storage: &mut S) -> bool {
        if !self.needs_layout {
            return false;
        }
        layout.layout(storage, &self.children, self.size);
        self.needs_layout = false;
        true
    }

    /// The minimum size the layout needs for the current children.
    pub fn min_size<L: Layout, S: WidgetAccess>(&self, layout: &mut L, storage: &S) -> Size {
        layout.min_size(storage, &self.children)
    }
}

/// A container laid out by its own [`SmartFlowLayout`].
///
/// Every method that changes rows, overrides or gaps forwards to the layout
/// and requests a refresh of the container. Registration methods also add
/// the widgets to the container.
#[derive(Debug, Clone)]
pub struct SmartFlow {
    container: Container,
    layout: SmartFlowLayout,
}

impl SmartFlow {
    /// Create an empty flow with default gaps.
    pub fn new(size: Size) -> Self {
        Self {
            container: Container::new(size),
            layout: SmartFlowLayout::new(),
        }
    }

    /// Create an empty flow configured from `config`.
    pub fn with_config(size: Size, config: &FlowConfig) -> Self {
        Self {
            container: Container::new(size),
            layout: SmartFlowLayout::from_config(config),
        }
    }

    /// The underlying container.
    #[inline]
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The underlying layout.
    #[inline]
    pub fn layout(&self) -> &SmartFlowLayout {
        &self.layout
    }

    /// Put a widget alone in a new row and add it to the container.
    pub fn add_row(&mut self, id: WidgetId) {
        self.layout.add_row(id);
        self.container.add(id);
        self.container.refresh();
    }

    /// Put widgets side by side in a new row and add them to the container.
    pub fn add_column<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = WidgetId>,
    {
        let ids: Vec<WidgetId> = ids.into_iter().collect();
        self.layout.add_column(ids.iter().copied());
        for id in ids {
            self.container.add(id);
        }
        self.container.refresh();
    }

    /// Give a widget a fixed size.
    pub fn set_fixed_size(&mut self, id: WidgetId, size: Size) {
        self.layout.set_fixed_size(id, size);
        self.container.refresh();
    }

    /// Give a widget a fixed horizontal position.
    pub fn set_fixed_position(&mut self, id: WidgetId, position: Point) {
        self.layout.set_fixed_position(id, position);
        self.container.refresh();
    }

    /// Override the gap following a widget.
    pub fn set_gap(&mut self, id: WidgetId, gap: Gap) {
        self.layout.set_gap(id, gap);
        self.container.refresh();
    }

    /// Set the global gap.
    pub fn set_global_gap(&mut self, x: f32, y: f32) {
        self.layout.set_global_gap(x, y);
        self.container.refresh();
    }

    /// Resize the container.
    pub fn resize(&mut self, size: Size) {
        self.container.resize(size);
    }

    /// Lay children out if a refresh is pending. Returns true if it ran.
    pub fn activate<S: WidgetAccess>(&mut self, storage: &mut S) -> bool {
        self.container.activate(&mut self.layout, storage)
    }

    /// The minimum size of the container's current content.
    pub fn min_size<S: WidgetAccess>(&mut self, storage: &S) -> Size {
        self.container.min_size(&mut self.layout, storage)
    }
}

static_assertions::assert_impl_all!(SmartFlow: Send, Sync);
