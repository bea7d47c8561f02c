/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to [0, 1], the form renderers consume in RGBA rows.
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

/// Launch palette. Rockets pick one entry uniformly at launch and pass it
/// on to their burst.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(255, 87, 51),   // vermilion
    Rgb::new(255, 215, 0),   // gold
    Rgb::new(0, 255, 255),   // cyan
    Rgb::new(127, 255, 0),   // chartreuse
    Rgb::new(255, 20, 147),  // deep pink
    Rgb::new(30, 144, 255),  // dodger blue
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(255, 51, 236),  // magenta
];

/// Glitter bursts ignore the rocket's color and always burn this.
pub const GOLD: Rgb = Rgb::new(255, 215, 0);
