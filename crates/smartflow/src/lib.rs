//! SmartFlow: a row layout engine for retained-mode widget trees.
//!
//! Widgets are registered into explicit rows. Each row is as tall as its
//! tallest widget, fixed-size widgets keep their size, and the other widgets
//! share the remaining width equally.
//!
//! # Modules
//!
//! - [`layout`]: the [`Layout`](layout::Layout) trait and [`SmartFlowLayout`](layout::SmartFlowLayout)
//! - [`widget`]: the widget abstraction layouts consume
//! - [`container`]: a container wrapper that forwards to its layout
//! - [`config`]: TOML configuration for global gaps
//!
//! # Example
//!
//! ```
//! use smartflow::prelude::*;
//!
//! struct Button {
//!     base: WidgetBase,
//! }
//!
//! impl Widget for Button {
//!     fn widget_base(&self) -> &WidgetBase {
//!         &self.base
//!     }
//!
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase {
//!         &mut self.base
//!     }
//! }
//!
//! let mut store = WidgetStore::new();
//! let ok = store.insert(Button { base: WidgetBase::new(Size::new(60.0, 24.0)) });
//! let cancel = store.insert(Button { base: WidgetBase::new(Size::new(60.0, 24.0)) });
//!
//! let mut flow = SmartFlow::new(Size::new(207.0, 100.0));
//! flow.add_column([ok, cancel]);
//! flow.activate(&mut store);
//!
//! let cancel_geometry = store.get_widget(cancel).unwrap().geometry();
//! assert_eq!(cancel_geometry, Rect::new(107.0, 0.0, 100.0, 24.0));
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod layout;
pub mod prelude;
pub mod widget;

pub use error::{Error, Result};
pub use smartflow_core::{Point, Rect, Size, WidgetId};
