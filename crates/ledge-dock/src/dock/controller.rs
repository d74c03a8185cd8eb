use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::background::DockBackground;
use crate::error::{DockError, DockResult};
use crate::layout::{compute_layout, DockPosition, LayoutResult};
use crate::platform::{
    is_app_bundle, BundleResolver, LaunchService, PresentationSurface, ResolveError,
    ScreenBoundsProvider,
};
use crate::registry::{AppEntry, AppRegistry};

/// Reactive command surface for the dock
///
/// Every mutating command runs to completion on the caller's thread:
/// registry mutation, layout recompute, and presentation-event emission
/// happen synchronously before the command returns. Failed commands are
/// absorbed into logged no-ops; the worst outcome is that the requested
/// mutation did not happen.
pub struct DockController {
    position: DockPosition,
    background: DockBackground,
    registry: AppRegistry,
    resolver: Box<dyn BundleResolver>,
    launcher: Box<dyn LaunchService>,
    screens: Box<dyn ScreenBoundsProvider>,
    surface: Box<dyn PresentationSurface>,
}

impl DockController {
    /// Create a controller with the given collaborators
    ///
    /// The registry starts empty, anchored at the bottom edge with an
    /// opaque background. Call [`refresh`](Self::refresh) once the surface
    /// is ready to paint.
    pub fn new(
        resolver: Box<dyn BundleResolver>,
        launcher: Box<dyn LaunchService>,
        screens: Box<dyn ScreenBoundsProvider>,
        surface: Box<dyn PresentationSurface>,
    ) -> Self {
        Self {
            position: DockPosition::default(),
            background: DockBackground::default(),
            registry: AppRegistry::new(),
            resolver,
            launcher,
            screens,
            surface,
        }
    }

    /// Push the current frame and background to the surface
    pub fn refresh(&mut self) {
        self.apply_layout();
        self.surface.set_background(self.background);
    }

    /// Move the dock to a different screen edge
    pub fn set_position(&mut self, position: DockPosition) {
        self.position = position;
        self.apply_layout();
    }

    /// Switch the background style
    ///
    /// Purely cosmetic; the frame is untouched.
    pub fn set_background(&mut self, background: DockBackground) {
        self.background = background;
        self.surface.set_background(background);
    }

    /// Pin the application bundle at `path`
    ///
    /// Returns whether the candidate was accepted. Non-bundles, resolver
    /// failures, and duplicates are rejected silently; rejection is never
    /// an error the host has to handle.
    pub fn add_application(&mut self, path: &Path) -> bool {
        match self.try_add(path) {
            Ok(index) => {
                self.apply_layout();
                self.surface.item_inserted(index);
                true
            }
            Err(err) => {
                debug!("drop candidate rejected ({}): {}", path.display(), err);
                false
            }
        }
    }

    /// Pin every acceptable candidate from a drop, returning how many were
    /// accepted
    pub fn accept_drop(&mut self, paths: &[PathBuf]) -> usize {
        paths
            .iter()
            .filter(|path| self.add_application(path.as_path()))
            .count()
    }

    /// Unpin the entry with the given bundle identifier
    ///
    /// Returns whether an entry was removed.
    pub fn remove_application(&mut self, bundle_id: &str) -> bool {
        match self.registry.remove(bundle_id) {
            Ok(index) => {
                self.apply_layout();
                self.surface.item_removed(index);
                true
            }
            Err(err) => {
                debug!("remove ignored: {}", err);
                false
            }
        }
    }

    /// Unpin every entry
    pub fn clear_all(&mut self) {
        self.registry.clear();
        self.apply_layout();
        self.surface.items_cleared();
    }

    /// Open the application pinned under `bundle_id`
    ///
    /// Fire-and-forget; returns whether a launch was dispatched.
    pub fn launch(&self, bundle_id: &str) -> bool {
        match self.registry.get(bundle_id) {
            Some(entry) => {
                self.launcher.launch(entry.target());
                true
            }
            None => {
                debug!("launch ignored, entry not found: {}", bundle_id);
                false
            }
        }
    }

    /// Current dock position
    pub fn position(&self) -> DockPosition {
        self.position
    }

    /// Current background style
    pub fn background(&self) -> DockBackground {
        self.background
    }

    /// Number of pinned entries
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Pinned entries in insertion order
    pub fn entries(&self) -> &[AppEntry] {
        self.registry.entries()
    }

    /// Frame the dock would occupy right now
    ///
    /// Computed fresh on every call; `None` when no screen is available.
    pub fn current_layout(&self) -> Option<LayoutResult> {
        self.screens
            .screen_bounds()
            .map(|screen| compute_layout(self.registry.count(), self.position, screen))
    }

    fn try_add(&mut self, path: &Path) -> DockResult<usize> {
        if !is_app_bundle(path) {
            return Err(ResolveError::NotAnApplicationBundle(path.to_path_buf()).into());
        }
        let bundle = self.resolver.resolve(path)?;
        let entry = AppEntry::new(bundle.display_name, bundle.bundle_id, bundle.icon, path);
        self.registry.add(entry)
    }

    fn apply_layout(&mut self) {
        match self.screens.screen_bounds() {
            Some(screen) => {
                let layout = compute_layout(self.registry.count(), self.position, screen);
                self.surface.apply_layout(&layout);
            }
            None => warn!("dock layout skipped: {}", DockError::ScreenUnavailable),
        }
    }
}
