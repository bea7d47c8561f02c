use crate::config::ShowConfig;

/// Rooftop heights, left to right.
const HEIGHTS: [f64; 10] = [8.0, 15.0, 10.0, 25.0, 20.0, 30.0, 12.0, 28.0, 14.0, 18.0];
const BUILDING_WIDTH: f64 = 10.0;
const BUILDING_SPACING: f64 = 12.0;

/// A flat-roofed building silhouette sitting on the ground line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

/// Static backdrop: ten buildings along the ground, starting at the left
/// canvas edge. Computed once; the skyline never changes during a show.
pub fn buildings(config: &ShowConfig) -> Vec<Building> {
    let mut x = config.x_bounds.0;
    HEIGHTS
        .iter()
        .map(|&height| {
            let building = Building {
                x,
                width: BUILDING_WIDTH,
                height,
            };
            x += BUILDING_SPACING;
            building
        })
        .collect()
}
