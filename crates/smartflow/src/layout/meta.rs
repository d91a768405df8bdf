//! Per-widget layout metadata.

use smartflow_core::{Point, Size};

use super::Gap;

/// Row assignment and overrides for one widget.
///
/// Every override is optional. An unset override means the layout computes
/// the value; a set override is used as is, even when it is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetMeta {
    row: usize,
    fixed_size: Option<Size>,
    fixed_position: Option<Point>,
    gap: Option<Gap>,
}

impl WidgetMeta {
    pub(crate) fn new(row: usize) -> Self {
        Self {
            row,
            fixed_size: None,
            fixed_position: None,
            gap: None,
        }
    }

    /// The row this widget belongs to.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The fixed size, replacing both automatic width and height.
    #[inline]
    pub fn fixed_size(&self) -> Option<Size> {
        self.fixed_size
    }

    /// The fixed position. Only its `x` is used during placement.
    #[inline]
    pub fn fixed_position(&self) -> Option<Point> {
        self.fixed_position
    }

    /// The gap override.
    #[inline]
    pub fn gap(&self) -> Option<Gap> {
        self.gap
    }

    pub(crate) fn set_fixed_size(&mut self, size: Size) {
        self.fixed_size = Some(size);
    }

    pub(crate) fn set_fixed_position(&mut self, position: Point) {
        self.fixed_position = Some(position);
    }

    pub(crate) fn set_gap(&mut self, gap: Gap) {
        self.gap = Some(gap);
    }

    /// Height the widget asks of its row.
    pub(crate) fn height(&self, minimum: Size) -> f32 {
        self.fixed_size.map_or(minimum.height, |size| size.height)
    }

    /// Horizontal spacing after this widget.
    pub(crate) fn gap_x(&self, global: Gap) -> f32 {
        self.gap.map_or(global.x, |gap| gap.x)
    }

    /// Vertical spacing this widget asks for after its row, if any.
    ///
    /// Only positive values count as a request.
    pub(crate) fn row_gap_y(&self) -> Option<f32> {
        self.gap.map(|gap| gap.y).filter(|&y| y > 0.0)
    }
}
