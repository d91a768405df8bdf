//! Reusable row buckets.

use smartflow_core::WidgetId;

/// Widgets grouped by row, rebuilt at the start of every pass.
///
/// The inner vectors are cleared rather than dropped so their allocations
/// carry over from one pass to the next.
#[derive(Debug, Clone, Default)]
pub(crate) struct RowBuffer {
    rows: Vec<Vec<WidgetId>>,
}

impl RowBuffer {
    /// Make room for `count` rows and empty each of them.
    pub(crate) fn prepare(&mut self, count: usize) {
        if self.rows.len() < count {
            self.rows.resize_with(count, Vec::new);
        }
        for row in &mut self.rows[..count] {
            row.clear();
        }
    }

    /// Append a widget to a row. Rows outside the prepared range are ignored.
    pub(crate) fn push(&mut self, row: usize, id: WidgetId) {
        if let Some(bucket) = self.rows.get_mut(row) {
            bucket.push(id);
        }
    }

    /// The first `count` rows, in row order.
    pub(crate) fn rows(&self, count: usize) -> &[Vec<WidgetId>] {
        &self.rows[..count.min(self.rows.len())]
    }
}
