//! Collaborator boundary for the dock engine
//!
//! The engine never talks to the window server, the filesystem, or the
//! launch subsystem directly. Hosts inject implementations of these traits
//! at controller construction, which keeps the engine deterministic under
//! test and free of platform dependencies.

use std::path::{Path, PathBuf};

use crate::background::DockBackground;
use crate::layout::LayoutResult;
use crate::math::Rect;
use crate::registry::IconHandle;

/// Metadata resolved from an application bundle on disk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedBundle {
    /// Human-readable application name
    pub display_name: String,
    /// Stable bundle identifier, e.g. `com.example.editor`
    pub bundle_id: String,
    /// Opaque handle to the bundle's icon, minted by the resolver
    pub icon: IconHandle,
}

/// Reasons a drop candidate cannot become a dock entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The path does not point at an application bundle
    NotAnApplicationBundle(PathBuf),

    /// The bundle exists but carries no usable identifier
    MissingIdentifier(PathBuf),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnApplicationBundle(path) => {
                write!(f, "not an application bundle: {}", path.display())
            }
            Self::MissingIdentifier(path) => {
                write!(f, "bundle has no identifier: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolves filesystem paths into application metadata
pub trait BundleResolver {
    /// Inspect the bundle at `path` and return its metadata
    fn resolve(&self, path: &Path) -> Result<ResolvedBundle, ResolveError>;
}

/// Opens launch targets on behalf of the dock
///
/// Fire-and-forget: the engine never consumes a launch result.
pub trait LaunchService {
    /// Open the application at `target`
    fn launch(&self, target: &Path);
}

/// Supplies the reference screen rectangle used for layout
pub trait ScreenBoundsProvider {
    /// Current screen bounds, or `None` when no screen is available
    fn screen_bounds(&self) -> Option<Rect>;
}

/// Receives frame, item, and background updates from the controller
///
/// The engine only writes to this surface; it never reads back.
pub trait PresentationSurface {
    /// Reposition and resize the dock window
    fn apply_layout(&mut self, layout: &LayoutResult);

    /// An entry was appended at `index`
    fn item_inserted(&mut self, index: usize);

    /// The entry at `index` was removed
    fn item_removed(&mut self, index: usize);

    /// All entries were removed
    fn items_cleared(&mut self);

    /// Repaint the dock background
    fn set_background(&mut self, background: DockBackground);
}

/// Check whether a path's extension denotes an application bundle
///
/// Drop sources deliver arbitrary paths; only `.app` bundles are handed
/// to the resolver.
pub fn is_app_bundle(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("app"))
        .unwrap_or(false)
}
