//! Core types for SmartFlow.
//!
//! This crate provides the pieces shared by every SmartFlow crate:
//!
//! - **Geometry**: [`Point`], [`Size`] and [`Rect`] in logical units
//! - **Widget identity**: [`WidgetId`], a stable handle used to key layout metadata
//! - **Logging**: target names, span names and tracing macros
//!
//! # Example
//!
//! ```
//! use smartflow_core::{Point, Rect, Size};
//!
//! let rect = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(100.0, 30.0));
//! assert_eq!(rect.right(), 110.0);
//! assert_eq!(rect.bottom(), 50.0);
//! ```

pub mod logging;
pub mod object;
pub mod types;

pub use logging::PerfSpan;
pub use object::WidgetId;
pub use types::{Point, Rect, Size};
