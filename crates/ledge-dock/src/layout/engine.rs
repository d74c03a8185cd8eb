//! Frame computation for the dock window
//!
//! `compute_layout` is stateless: every count or position change recomputes
//! the whole frame from scratch rather than patching the previous one, so
//! out-of-order triggers cannot leave a stale frame behind.

use serde::{Deserialize, Serialize};

use super::position::{Axis, DockPosition};
use super::style::{DockStyle, DOCK_STYLE};
use crate::math::Rect;

/// Computed dock frame and arrangement axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Window frame in screen coordinates
    pub frame: Rect,
    /// Direction the icon run flows along
    pub axis: Axis,
}

/// Compute the dock frame for the given entry count, position, and screen
/// using the default metrics.
pub fn compute_layout(count: usize, position: DockPosition, screen: Rect) -> LayoutResult {
    compute_layout_with_style(count, position, screen, &DOCK_STYLE)
}

/// Compute the dock frame with explicit metrics.
///
/// The extent along the main axis grows with the entry count but never
/// shrinks below `min_extent`, and is clamped so the dock keeps
/// `screen_margin` clear of both screen edges. The cross extent is fixed
/// at one icon cell plus padding.
pub fn compute_layout_with_style(
    count: usize,
    position: DockPosition,
    screen: Rect,
    style: &DockStyle,
) -> LayoutResult {
    let icons = count as f32 * style.icon_size;
    let gaps = count.saturating_sub(1) as f32 * style.item_spacing;
    let main = (icons + gaps + style.edge_padding).max(style.min_extent);
    let cross = style.icon_size + style.edge_padding;

    let frame = match position {
        DockPosition::Bottom => {
            let main = main.min(screen.width - 2.0 * style.screen_margin);
            Rect::new(
                screen.x + (screen.width - main) / 2.0,
                screen.y + style.edge_offset,
                main,
                cross,
            )
        }
        DockPosition::Left => {
            let main = main.min(screen.height - 2.0 * style.screen_margin);
            Rect::new(
                screen.x + style.edge_offset,
                screen.y + (screen.height - main) / 2.0,
                cross,
                main,
            )
        }
        DockPosition::Right => {
            let main = main.min(screen.height - 2.0 * style.screen_margin);
            Rect::new(
                screen.x + screen.width - cross - style.edge_offset,
                screen.y + (screen.height - main) / 2.0,
                cross,
                main,
            )
        }
    };

    LayoutResult {
        frame,
        axis: position.axis(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Bottom frames never exceed the screen width minus both margins
        #[test]
        fn bottom_width_clamped(
            count in 0usize..4096,
            width in 100.0f32..8192.0,
            height in 100.0f32..8192.0,
        ) {
            let screen = Rect::new(0.0, 0.0, width, height);
            let layout = compute_layout(count, DockPosition::Bottom, screen);
            prop_assert!(
                layout.frame.width <= width - 20.0 + 0.001,
                "frame width {} exceeds clamp for screen width {}",
                layout.frame.width,
                width
            );
        }

        /// Vertical frames never exceed the screen height minus both margins
        #[test]
        fn vertical_height_clamped(
            count in 0usize..4096,
            width in 100.0f32..8192.0,
            height in 100.0f32..8192.0,
        ) {
            let screen = Rect::new(0.0, 0.0, width, height);
            for position in [DockPosition::Left, DockPosition::Right] {
                let layout = compute_layout(count, position, screen);
                prop_assert!(
                    layout.frame.height <= height - 20.0 + 0.001,
                    "frame height {} exceeds clamp for screen height {}",
                    layout.frame.height,
                    height
                );
            }
        }

        /// Identical inputs always produce identical frames
        #[test]
        fn layout_deterministic(
            count in 0usize..512,
            width in 100.0f32..8192.0,
            height in 100.0f32..8192.0,
        ) {
            let screen = Rect::new(0.0, 0.0, width, height);
            for position in DockPosition::all() {
                let a = compute_layout(count, *position, screen);
                let b = compute_layout(count, *position, screen);
                prop_assert_eq!(a, b);
            }
        }

        /// Frames stay inside screens large enough to hold the minimum extent
        #[test]
        fn frame_within_screen(
            count in 0usize..512,
            width in 200.0f32..8192.0,
            height in 200.0f32..8192.0,
        ) {
            let screen = Rect::new(0.0, 0.0, width, height);
            for position in DockPosition::all() {
                let frame = compute_layout(count, *position, screen).frame;
                prop_assert!(frame.x >= screen.x - 0.001);
                prop_assert!(frame.right() <= screen.right() + 0.001);
            }
        }

        /// The axis only depends on the position
        #[test]
        fn axis_matches_position(count in 0usize..512) {
            let screen = Rect::new(0.0, 0.0, 1920.0, 1080.0);
            for position in DockPosition::all() {
                let layout = compute_layout(count, *position, screen);
                prop_assert_eq!(layout.axis, position.axis());
            }
        }
    }
}
