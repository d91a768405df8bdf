//! Prelude module for SmartFlow.
//!
//! ```ignore
//! use smartflow::prelude::*;
//! ```

pub use crate::config::FlowConfig;
pub use crate::container::{Container, SmartFlow};
pub use crate::layout::{Gap, Layout, SmartFlowLayout, WidgetMeta};
pub use crate::widget::{Widget, WidgetAccess, WidgetBase, WidgetStore};
pub use smartflow_core::{Point, Rect, Size, WidgetId};
