//! Dock layout module
//!
//! Maps the pinned-entry count and dock position to a window frame and
//! arrangement axis. The computation is a pure function of its inputs so
//! the frame is always consistent with the current state, no matter how
//! recomputation is triggered.

mod engine;
mod position;
mod style;

pub use engine::{compute_layout, compute_layout_with_style, LayoutResult};
pub use position::{Axis, DockPosition};
pub use style::{DockStyle, DOCK_STYLE};
