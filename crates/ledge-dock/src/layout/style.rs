/// Dock metric constants
///
/// All frame math is driven by this block; hosts that want a different
/// icon size or spacing pass their own instance to
/// [`compute_layout_with_style`](super::compute_layout_with_style).
pub struct DockStyle {
    /// Edge length of one icon cell
    pub icon_size: f32,
    /// Gap between adjacent icon cells
    pub item_spacing: f32,
    /// Padding added around the icon run, split across both ends
    pub edge_padding: f32,
    /// Smallest allowed extent along the main axis
    pub min_extent: f32,
    /// Margin kept between the dock and each screen edge when clamping
    pub screen_margin: f32,
    /// Distance between the dock and its anchoring screen edge
    pub edge_offset: f32,
}

/// Default dock style
pub const DOCK_STYLE: DockStyle = DockStyle {
    icon_size: 64.0,
    item_spacing: 10.0,
    edge_padding: 20.0,
    min_extent: 100.0,
    screen_margin: 10.0,
    edge_offset: 5.0,
};
