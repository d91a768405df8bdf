//! Row layout with per-widget overrides.
//!
//! `SmartFlowLayout` arranges widgets in explicit rows, top to bottom. Within
//! a row widgets are placed left to right. Widgets with a fixed size keep it;
//! every other widget in the row gets an equal share of the width that is
//! left over.
//!
//! # Example
//!
//! ```ignore
//! use smartflow::layout::{Layout, SmartFlowLayout};
//! use smartflow_core::Size;
//!
//! let mut layout = SmartFlowLayout::new();
//! layout.add_column([ok_button, cancel_button]);
//!
//! // (207 - 7) / 2 = 100 each, cancel starts at 100 + 7
//! layout.layout(&mut storage, &[ok_button, cancel_button], Size::new(207.0, 40.0));
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use smartflow_core::logging::span_names;
use smartflow_core::{PerfSpan, Point, Size, WidgetId, flow_debug, flow_trace};

use super::meta::WidgetMeta;
use super::rows::RowBuffer;
use super::traits::Layout;
use super::{DEFAULT_GAP, Gap};
use crate::config::FlowConfig;
use crate::widget::WidgetAccess;

/// A layout that places widgets in explicitly assigned rows.
///
/// # Rows
///
/// Rows are numbered from zero in the order they are created. Each call to
/// [`add_row`](Self::add_row) or [`add_column`](Self::add_column) creates one
/// row. The setters also create a row for a widget they have not seen
/// before, so configuring a widget ahead of registering it leaves it alone in
/// its own row.
///
/// # Placement
///
/// - A row is as tall as its tallest widget (fixed height or minimum height).
/// - Fixed-size widgets keep their size. The others share the remaining
///   width equally and take the row height.
/// - A fixed position moves the widget horizontally only. Its `y` is always
///   the top of the row.
/// - The horizontal gap after a widget is its own gap override, or the
///   global gap.
/// - The vertical gap after a row comes from the first widget in the row
///   whose gap override has a positive `y`, or the global gap.
/// - Rows with no widgets in the pass take no space.
#[derive(Debug, Clone)]
pub struct SmartFlowLayout {
    /// Metadata for every widget the layout has seen.
    meta: HashMap<WidgetId, WidgetMeta>,
    /// Scratch buckets reused by every pass.
    rows: RowBuffer,
    /// Next row index to assign.
    row: usize,
    /// Global spacing.
    gap: Gap,
}

/// Measurements of one row, taken before any widget is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RowMetrics {
    height: f32,
    fixed_width: f32,
    auto_count: usize,
}

impl SmartFlowLayout {
    /// Create a new layout with the default gap of 7 in both directions.
    pub fn new() -> Self {
        Self {
            meta: HashMap::new(),
            rows: RowBuffer::default(),
            row: 0,
            gap: DEFAULT_GAP,
        }
    }

    /// Create a new layout using a loaded configuration.
    pub fn from_config(config: &FlowConfig) -> Self {
        let mut layout = Self::new();
        layout.apply_config(config);
        layout
    }

    /// Apply configuration values to this layout.
    pub fn apply_config(&mut self, config: &FlowConfig) {
        self.set_global_gap(config.gap.x, config.gap.y);
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the global gap.
    #[inline]
    pub fn global_gap(&self) -> Gap {
        self.gap
    }

    /// Set the global horizontal and vertical gap.
    pub fn set_global_gap(&mut self, x: f32, y: f32) {
        self.gap = Gap::new(x, y);
        flow_trace!(x, y, "global gap set");
    }

    /// Give a widget a fixed size.
    ///
    /// Registers the widget in a new row if it has not been seen before.
    pub fn set_fixed_size(&mut self, id: WidgetId, size: Size) {
        self.ensure_meta(id).set_fixed_size(size);
    }

    /// Give a widget a fixed horizontal position.
    ///
    /// Only `position.x` takes effect. Registers the widget in a new row if
    /// it has not been seen before.
    pub fn set_fixed_position(&mut self, id: WidgetId, position: Point) {
        self.ensure_meta(id).set_fixed_position(position);
    }

    /// Override the gap following a widget.
    ///
    /// Registers the widget in a new row if it has not been seen before.
    pub fn set_gap(&mut self, id: WidgetId, gap: Gap) {
        self.ensure_meta(id).set_gap(gap);
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Put a widget alone in a new row.
    ///
    /// A widget that was already registered moves to the new row and loses
    /// its overrides.
    pub fn add_row(&mut self, id: WidgetId) {
        self.meta.insert(id, WidgetMeta::new(self.row));
        flow_trace!(?id, row = self.row, "added row");
        self.row += 1;
    }

    /// Put several widgets side by side in a new row.
    ///
    /// The row is created even when `ids` is empty. Widgets that were already
    /// registered move to the new row and lose their overrides.
    pub fn add_column<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = WidgetId>,
    {
        let row = self.row;
        let mut count = 0usize;
        for id in ids {
            self.meta.insert(id, WidgetMeta::new(row));
            count += 1;
        }
        flow_trace!(row, count, "added columns");
        self.row += 1;
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of rows created so far.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row
    }

    /// Metadata for a widget, if it has been registered.
    #[inline]
    pub fn meta(&self, id: WidgetId) -> Option<&WidgetMeta> {
        self.meta.get(&id)
    }

    /// Check whether a widget has been registered.
    #[inline]
    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.meta.contains_key(&id)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_meta(&mut self, id: WidgetId) -> &mut WidgetMeta {
        match self.meta.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let row = self.row;
                self.row += 1;
                flow_trace!(?id, row, "registered by setter");
                entry.insert(WidgetMeta::new(row))
            }
        }
    }

    /// Bucket `widgets` into their rows, keeping their relative order.
    ///
    /// Widgets without metadata, or that storage cannot resolve, are skipped.
    fn fill_rows<S: WidgetAccess>(&mut self, storage: &S, widgets: &[WidgetId]) {
        self.rows.prepare(self.row);

        for &id in widgets {
            let Some(meta) = self.meta.get(&id) else {
                continue;
            };
            if storage.get_widget(id).is_none() {
                flow_trace!(?id, "skipping unresolved widget");
                continue;
            }
            self.rows.push(meta.row(), id);
        }
    }
}

/// Measure a row from its widgets' overrides and minimum sizes.
fn measure_row<S: WidgetAccess>(
    meta: &HashMap<WidgetId, WidgetMeta>,
    storage: &S,
    row: &[WidgetId],
) -> RowMetrics {
    let mut metrics = RowMetrics {
        height: 0.0,
        fixed_width: 0.0,
        auto_count: 0,
    };

    for id in row {
        let (Some(meta), Some(widget)) = (meta.get(id), storage.get_widget(*id)) else {
            continue;
        };

        match meta.fixed_size() {
            Some(size) => metrics.fixed_width += size.width,
            None => metrics.auto_count += 1,
        }
        metrics.height = metrics.height.max(meta.height(widget.minimum_size()));
    }

    metrics
}

/// Vertical gap following a row: the first positive override wins.
fn row_gap_y(meta: &HashMap<WidgetId, WidgetMeta>, row: &[WidgetId], global: Gap) -> f32 {
    row.iter()
        .filter_map(|id| meta.get(id))
        .find_map(WidgetMeta::row_gap_y)
        .unwrap_or(global.y)
}

impl Layout for SmartFlowLayout {
    fn layout<S: WidgetAccess>(&mut self, storage: &mut S, widgets: &[WidgetId], size: Size) {
        let _perf = PerfSpan::new(span_names::LAYOUT);
        self.fill_rows(&*storage, widgets);

        let gap = self.gap;
        let mut y = 0.0;

        for row in self.rows.rows(self.row) {
            if row.is_empty() {
                continue;
            }

            let metrics = measure_row(&self.meta, &*storage, row);

            let spacing = gap.x * (row.len() - 1) as f32;
            let remaining = (size.width - metrics.fixed_width - spacing).max(0.0);
            let auto_width = if metrics.auto_count > 0 {
                remaining / metrics.auto_count as f32
            } else {
                0.0
            };

            let mut x = 0.0;
            for &id in row {
                let Some(meta) = self.meta.get(&id) else {
                    continue;
                };
                let Some(widget) = storage.get_widget_mut(id) else {
                    continue;
                };

                let widget_size = meta
                    .fixed_size()
                    .unwrap_or(Size::new(auto_width, metrics.height));
                widget.resize(widget_size);

                let widget_x = meta.fixed_position().map_or(x, |pos| pos.x);
                widget.move_to(Point::new(widget_x, y));

                x += widget_size.width + meta.gap_x(gap);
            }

            y += metrics.height + row_gap_y(&self.meta, row, gap);
        }

        flow_debug!(
            rows = self.row,
            widgets = widgets.len(),
            width = size.width,
            height = size.height,
            "layout pass complete"
        );
    }

    fn min_size<S: WidgetAccess>(&mut self, storage: &S, widgets: &[WidgetId]) -> Size {
        let _perf = PerfSpan::new(span_names::MIN_SIZE);
        self.fill_rows(storage, widgets);

        let mut height = 0.0;
        let mut any_row = false;

        for row in self.rows.rows(self.row) {
            if row.is_empty() {
                continue;
            }
            if any_row {
                height += self.gap.y;
            }
            height += measure_row(&self.meta, storage, row).height;
            any_row = true;
        }

        flow_debug!(rows = self.row, height, "measured minimum size");
        Size::new(0.0, height)
    }
}

impl Default for SmartFlowLayout {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(SmartFlowLayout: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Widget, WidgetBase};
    use slotmap::SlotMap;
    use smartflow_core::Rect;

    /// Mock widget for testing layouts.
    struct MockWidget {
        base: WidgetBase,
    }

    impl MockWidget {
        fn new(minimum: Size) -> Self {
            Self {
                base: WidgetBase::new(minimum),
            }
        }
    }

    impl Widget for MockWidget {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }
    }

    /// Mock widget storage for testing.
    struct MockStorage {
        widgets: SlotMap<WidgetId, MockWidget>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                widgets: SlotMap::with_key(),
            }
        }

        fn add(&mut self, width: f32, height: f32) -> WidgetId {
            self.widgets.insert(MockWidget::new(Size::new(width, height)))
        }

        fn geometry(&self, id: WidgetId) -> Rect {
            self.widgets[id].geometry()
        }
    }

    impl WidgetAccess for MockStorage {
        fn get_widget(&self, id: WidgetId) -> Option<&dyn Widget> {
            self.widgets.get(id).map(|w| w as &dyn Widget)
        }

        fn get_widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
            self.widgets.get_mut(id).map(|w| w as &mut dyn Widget)
        }
    }

    #[test]
    fn test_layout_creation() {
        let layout = SmartFlowLayout::new();
        assert_eq!(layout.row_count(), 0);
        assert_eq!(layout.global_gap(), Gap::new(7.0, 7.0));
    }

    #[test]
    fn test_add_column_shares_one_row() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([a, b]);

        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.meta(a).unwrap().row(), 0);
        assert_eq!(layout.meta(b).unwrap().row(), 0);
    }

    #[test]
    fn test_empty_add_column_consumes_a_row() {
        let mut layout = SmartFlowLayout::new();
        layout.add_column(std::iter::empty::<WidgetId>());
        assert_eq!(layout.row_count(), 1);
    }

    #[test]
    fn test_two_auto_widgets_split_width() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([a, b]);
        layout.layout(&mut storage, &[a, b], Size::new(207.0, 100.0));

        assert_eq!(storage.geometry(a), Rect::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(storage.geometry(b), Rect::new(107.0, 0.0, 100.0, 20.0));
    }

    #[test]
    fn test_row_height_is_tallest_widget() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 35.0);
        let c = storage.add(10.0, 10.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([a, b]);
        layout.add_row(c);
        layout.layout(&mut storage, &[a, b, c], Size::new(100.0, 100.0));

        assert_eq!(storage.geometry(a).height(), 35.0);
        assert_eq!(storage.geometry(b).height(), 35.0);
        // 35 + 7
        assert_eq!(storage.geometry(c).origin.y, 42.0);
    }

    #[test]
    fn test_fixed_size_is_kept() {
        let mut storage = MockStorage::new();
        let c = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.set_fixed_size(c, Size::new(50.0, 40.0));
        layout.layout(&mut storage, &[c], Size::new(300.0, 100.0));

        assert_eq!(storage.geometry(c).size, Size::new(50.0, 40.0));
    }

    #[test]
    fn test_fixed_width_reduces_auto_share() {
        let mut storage = MockStorage::new();
        let label = storage.add(10.0, 20.0);
        let input = storage.add(10.0, 24.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([label, input]);
        layout.set_fixed_size(label, Size::new(80.0, 20.0));
        layout.layout(&mut storage, &[label, input], Size::new(300.0, 100.0));

        // 300 - 80 - 7 = 213
        assert_eq!(storage.geometry(input), Rect::new(87.0, 0.0, 213.0, 24.0));
        // Fixed widgets do not stretch to the row height.
        assert_eq!(storage.geometry(label).size, Size::new(80.0, 20.0));
    }

    #[test]
    fn test_fixed_position_moves_x_only() {
        let mut storage = MockStorage::new();
        let top = storage.add(10.0, 30.0);
        let moved = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_row(top);
        layout.add_row(moved);
        layout.set_fixed_position(moved, Point::new(25.0, 500.0));
        layout.layout(&mut storage, &[top, moved], Size::new(100.0, 100.0));

        assert_eq!(storage.geometry(moved).origin, Point::new(25.0, 37.0));
    }

    #[test]
    fn test_fixed_position_does_not_advance_cursor() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([a, b]);
        layout.set_fixed_position(a, Point::new(60.0, 0.0));
        layout.layout(&mut storage, &[a, b], Size::new(207.0, 100.0));

        assert_eq!(storage.geometry(a).origin.x, 60.0);
        // The cursor ignores the override: 0 + 100 + 7.
        assert_eq!(storage.geometry(b).origin.x, 107.0);
    }

    #[test]
    fn test_gap_x_override_applies_after_widget() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([a, b]);
        layout.set_gap(a, Gap::new(20.0, 0.0));
        layout.layout(&mut storage, &[a, b], Size::new(207.0, 100.0));

        // Widths still use the global gap: (207 - 7) / 2 = 100.
        assert_eq!(storage.geometry(a).width(), 100.0);
        assert_eq!(storage.geometry(b).origin.x, 120.0);
    }

    #[test]
    fn test_first_positive_gap_y_wins() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 20.0);
        let c = storage.add(10.0, 20.0);
        let d = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([a, b, c]);
        layout.add_row(d);
        layout.set_gap(a, Gap::new(7.0, 0.0));
        layout.set_gap(b, Gap::new(7.0, 15.0));
        layout.set_gap(c, Gap::new(7.0, 40.0));
        layout.layout(&mut storage, &[a, b, c, d], Size::new(300.0, 100.0));

        assert_eq!(storage.geometry(d).origin.y, 35.0);
    }

    #[test]
    fn test_remaining_width_clamped_to_zero() {
        let mut storage = MockStorage::new();
        let fixed = storage.add(10.0, 20.0);
        let auto = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([fixed, auto]);
        layout.set_fixed_size(fixed, Size::new(200.0, 20.0));
        layout.layout(&mut storage, &[fixed, auto], Size::new(100.0, 50.0));

        assert_eq!(storage.geometry(auto).width(), 0.0);
        assert_eq!(storage.geometry(auto).origin.x, 207.0);
    }

    #[test]
    fn test_setter_registers_new_row() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_row(a);
        layout.set_gap(b, Gap::new(1.0, 1.0));
        assert_eq!(layout.row_count(), 2);
        assert_eq!(layout.meta(b).unwrap().row(), 1);

        // A second setter on the same widget does not add a row.
        layout.set_fixed_size(b, Size::new(5.0, 5.0));
        assert_eq!(layout.row_count(), 2);
    }

    #[test]
    fn test_reregistration_resets_overrides() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.set_fixed_size(a, Size::new(50.0, 50.0));
        layout.add_row(a);

        let meta = layout.meta(a).unwrap();
        assert_eq!(meta.row(), 1);
        assert!(meta.fixed_size().is_none());
    }

    #[test]
    fn test_unregistered_widget_is_untouched() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let stray = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_row(a);
        layout.layout(&mut storage, &[a, stray], Size::new(100.0, 100.0));

        assert_eq!(storage.geometry(stray), Rect::ZERO);
        assert!(!layout.is_registered(stray));
    }

    #[test]
    fn test_empty_rows_take_no_space() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let hidden = storage.add(10.0, 50.0);
        let c = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_row(a);
        layout.add_row(hidden);
        layout.add_row(c);

        // `hidden` is not passed, so its row is empty this pass.
        layout.layout(&mut storage, &[a, c], Size::new(100.0, 100.0));
        assert_eq!(storage.geometry(c).origin.y, 27.0);

        let min = layout.min_size(&storage, &[a, c]);
        assert_eq!(min, Size::new(0.0, 47.0));
    }

    #[test]
    fn test_min_size_sums_rows_and_gaps() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 30.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_row(a);
        layout.add_row(b);

        assert_eq!(layout.min_size(&storage, &[a, b]), Size::new(0.0, 57.0));
    }

    #[test]
    fn test_min_size_uses_fixed_height_and_global_gap() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 30.0);

        let mut layout = SmartFlowLayout::new();
        layout.set_global_gap(4.0, 10.0);
        layout.add_row(a);
        layout.add_row(b);
        layout.set_fixed_size(a, Size::new(10.0, 45.0));
        // Row gap overrides only affect placement.
        layout.set_gap(a, Gap::new(0.0, 99.0));

        assert_eq!(layout.min_size(&storage, &[a, b]), Size::new(0.0, 85.0));
    }

    #[test]
    fn test_min_size_of_nothing_is_zero() {
        let storage = MockStorage::new();
        let mut layout = SmartFlowLayout::new();
        assert_eq!(layout.min_size(&storage, &[]), Size::ZERO);
    }

    #[test]
    fn test_input_order_within_row() {
        let mut storage = MockStorage::new();
        let a = storage.add(10.0, 20.0);
        let b = storage.add(10.0, 20.0);

        let mut layout = SmartFlowLayout::new();
        layout.add_column([a, b]);
        // The pass order decides placement, not registration order.
        layout.layout(&mut storage, &[b, a], Size::new(207.0, 100.0));

        assert_eq!(storage.geometry(b).origin.x, 0.0);
        assert_eq!(storage.geometry(a).origin.x, 107.0);
    }
}
