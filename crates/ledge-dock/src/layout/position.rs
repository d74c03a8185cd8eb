use serde::{Deserialize, Serialize};

/// Screen edge the dock is anchored to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    /// Anchored above the bottom screen edge, icons flow horizontally
    #[default]
    Bottom,
    /// Anchored at the left screen edge, icons flow vertically
    Left,
    /// Anchored at the right screen edge, icons flow vertically
    Right,
}

/// Direction icons are laid out along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl DockPosition {
    /// Get all available dock positions
    pub fn all() -> &'static [DockPosition] {
        &[
            DockPosition::Bottom,
            DockPosition::Left,
            DockPosition::Right,
        ]
    }

    /// Get the display name for this position
    pub fn name(&self) -> &'static str {
        match self {
            DockPosition::Bottom => "Bottom",
            DockPosition::Left => "Left",
            DockPosition::Right => "Right",
        }
    }

    /// Main axis icons flow along at this position
    pub fn axis(&self) -> Axis {
        match self {
            DockPosition::Bottom => Axis::Horizontal,
            DockPosition::Left | DockPosition::Right => Axis::Vertical,
        }
    }

    /// Parse from string ID (e.g., "bottom", "left", "right")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "bottom" => Some(DockPosition::Bottom),
            "left" => Some(DockPosition::Left),
            "right" => Some(DockPosition::Right),
            _ => None,
        }
    }

    /// Get the string ID for this position
    pub fn id(&self) -> &'static str {
        match self {
            DockPosition::Bottom => "bottom",
            DockPosition::Left => "left",
            DockPosition::Right => "right",
        }
    }
}
