//! Dock background styles

use serde::{Deserialize, Serialize};

/// Available dock background styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockBackground {
    /// Dark rounded panel behind the icons
    #[default]
    Opaque,
    /// No panel fill, icons float directly on the desktop
    Transparent,
}

impl DockBackground {
    /// Get all available background styles
    pub fn all() -> &'static [DockBackground] {
        &[DockBackground::Opaque, DockBackground::Transparent]
    }

    /// Get the display name for this background
    pub fn name(&self) -> &'static str {
        match self {
            DockBackground::Opaque => "Opaque",
            DockBackground::Transparent => "Transparent",
        }
    }

    /// Get the fill color as premultiplied RGBA
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            DockBackground::Opaque => [0.0, 0.0, 0.0, 0.8],
            DockBackground::Transparent => [0.0, 0.0, 0.0, 0.0],
        }
    }

    /// Parse from string ID (e.g., "opaque", "transparent")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "opaque" => Some(DockBackground::Opaque),
            "transparent" => Some(DockBackground::Transparent),
            _ => None,
        }
    }

    /// Get the string ID for this background
    pub fn id(&self) -> &'static str {
        match self {
            DockBackground::Opaque => "opaque",
            DockBackground::Transparent => "transparent",
        }
    }
}
