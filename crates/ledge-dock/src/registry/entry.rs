use std::path::{Path, PathBuf};

use super::IconHandle;

/// One pinned application record
///
/// Entries are immutable once constructed and owned exclusively by the
/// registry, which only hands out shared references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppEntry {
    /// Human-readable application name
    pub display_name: String,
    /// Stable bundle identifier, the registry's identity key
    pub bundle_id: String,
    /// Opaque handle to the application icon
    pub icon: IconHandle,
    /// Path opened when the entry is activated
    pub launch_target: PathBuf,
}

impl AppEntry {
    /// Create a new entry
    pub fn new(
        display_name: impl Into<String>,
        bundle_id: impl Into<String>,
        icon: IconHandle,
        launch_target: impl Into<PathBuf>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            bundle_id: bundle_id.into(),
            icon,
            launch_target: launch_target.into(),
        }
    }

    /// Whether pinning `other` alongside this entry would violate uniqueness
    ///
    /// The launch target is compared as well as the identifier, guarding
    /// against bundles that resolve without a usable identifier.
    pub fn collides_with(&self, other: &AppEntry) -> bool {
        self.bundle_id == other.bundle_id || self.launch_target == other.launch_target
    }

    /// Launch target as a borrowed path
    pub fn target(&self) -> &Path {
        &self.launch_target
    }
}
