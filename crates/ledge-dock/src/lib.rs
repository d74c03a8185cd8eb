//! Dock Engine for Ledge
//!
//! This crate provides the core logic of the Ledge dock widget:
//! - Pinned-application registry (add, remove, dedupe, clear)
//! - Frame computation for bottom/left/right dock positions
//! - Background style state
//! - Command orchestration and presentation-event emission
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`registry`]: Pinned-application records and their uniqueness rules
//! - [`layout`]: Pure frame computation and the dock metrics block
//! - [`background`]: Dock background styles
//! - [`platform`]: Collaborator traits the host implements
//! - [`dock`]: The controller tying registry, layout, and surface together
//!
//! ## Example
//!
//! ```rust
//! use ledge_dock::{compute_layout, Axis, DockPosition, Rect};
//!
//! let screen = Rect::new(0.0, 0.0, 1920.0, 1080.0);
//! let layout = compute_layout(3, DockPosition::Bottom, screen);
//!
//! assert_eq!(layout.axis, Axis::Horizontal);
//! assert_eq!(layout.frame.width, 232.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: frame math and registry rules have no platform
//!    dependencies and are testable without a window server
//! 2. **Injected Collaborators**: bundle resolution, launching, screen
//!    bounds, and presentation are traits implemented by the host
//! 3. **Synchronous Commands**: every mutation recomputes layout and emits
//!    its presentation events before returning
//! 4. **Recoverable Errors Only**: rejected candidates and missing entries
//!    degrade to logged no-ops, never failures

pub mod background;
pub mod dock;
pub mod error;
pub mod layout;
pub mod math;
pub mod platform;
pub mod registry;

// Re-export core types for convenience
pub use background::DockBackground;
pub use dock::DockController;
pub use error::{DockError, DockResult};
pub use layout::{
    compute_layout, compute_layout_with_style, Axis, DockPosition, DockStyle, LayoutResult,
    DOCK_STYLE,
};
pub use math::{Rect, Size, Vec2};
pub use platform::{
    is_app_bundle, BundleResolver, LaunchService, PresentationSurface, ResolveError,
    ResolvedBundle, ScreenBoundsProvider,
};
pub use registry::{AppEntry, AppRegistry, IconHandle};
