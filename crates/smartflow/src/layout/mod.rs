//! Row layout system.
//!
//! This module provides:
//!
//! - [`Layout`] trait: the two operations a container asks of its layout
//! - [`SmartFlowLayout`]: the row layout engine
//! - [`WidgetMeta`]: per-widget row assignment and overrides
//! - [`Gap`]: horizontal and vertical spacing
//!
//! # Overview
//!
//! Widgets are registered into rows in the order rows are created.
//! [`SmartFlowLayout::add_row`] puts one widget in a new row and
//! [`SmartFlowLayout::add_column`] puts several widgets side by side in a new
//! row. During a layout pass each row is as tall as its tallest widget, fixed
//! size widgets keep their size, and the width left over is shared equally by
//! the remaining widgets.
//!
//! # Example
//!
//! ```ignore
//! use smartflow::layout::{Gap, Layout, SmartFlowLayout};
//! use smartflow_core::Size;
//!
//! let mut layout = SmartFlowLayout::new();
//! layout.add_row(title);
//! layout.add_column([name_label, name_input]);
//! layout.set_fixed_size(name_label, Size::new(80.0, 24.0));
//! layout.set_gap(name_input, Gap::new(7.0, 20.0));
//!
//! layout.layout(&mut storage, &[title, name_label, name_input], Size::new(400.0, 300.0));
//! ```

mod meta;
mod rows;
mod smart_flow_layout;
mod traits;

pub use meta::WidgetMeta;
pub use smart_flow_layout::SmartFlowLayout;
pub use traits::Layout;

/// Spacing between widgets (`x`) and between rows (`y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    /// Horizontal spacing following a widget.
    pub x: f32,
    /// Vertical spacing following a row.
    pub y: f32,
}

impl Gap {
    /// Create a new gap.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The same spacing in both directions.
    #[inline]
    pub const fn uniform(gap: f32) -> Self {
        Self::new(gap, gap)
    }
}

impl From<(f32, f32)> for Gap {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Default global gap in both directions.
pub const DEFAULT_GAP: Gap = Gap::uniform(7.0);
