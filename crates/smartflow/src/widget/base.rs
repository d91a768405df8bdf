//! Shared widget state.

use smartflow_core::{Point, Rect, Size};

/// Geometry and minimum size shared by all widgets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidgetBase {
    geometry: Rect,
    minimum_size: Size,
}

impl WidgetBase {
    /// Create a widget base with the given minimum size.
    ///
    /// The geometry starts at the origin with zero size until a layout
    /// places the widget.
    pub fn new(minimum_size: Size) -> Self {
        Self {
            geometry: Rect::ZERO,
            minimum_size,
        }
    }

    /// Get the widget's geometry.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the whole geometry at once.
    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    /// Get the minimum size.
    #[inline]
    pub fn minimum_size(&self) -> Size {
        self.minimum_size
    }

    /// Set the minimum size.
    pub fn set_minimum_size(&mut self, size: Size) {
        self.minimum_size = size;
    }

    /// Current position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Current size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Resize, keeping the position.
    pub fn resize(&mut self, size: Size) {
        self.geometry = self.geometry.with_size(size);
    }

    /// Move, keeping the size.
    pub fn move_to(&mut self, position: Point) {
        self.geometry = self.geometry.with_origin(position);
    }
}
