use crate::config::ShowConfig;
use crate::rng::RandomSource;

/// Twinkle oscillation amplitude around each star's base alpha.
const TWINKLE_AMPLITUDE: f64 = 0.25;
/// Phase advance per tick.
const TWINKLE_RATE: f64 = 0.1;
/// Twinkled alpha bounds.
const ALPHA_FLOOR: f64 = 0.2;
const ALPHA_CEIL: f64 = 1.0;

const BASE_ALPHA_MIN: f64 = 0.3;
const BASE_ALPHA_MAX: f64 = 1.0;
const SIZE_MIN: f64 = 5.0;
const SIZE_MAX: f64 = 25.0;

/// Static star backdrop. Positions and sizes are fixed at generation; only
/// the per-star alpha changes, as a twinkle function of the tick index.
#[derive(Debug, Clone)]
pub struct StarField {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub size: Vec<f64>,
    base_alpha: Vec<f64>,
}

impl StarField {
    /// Scatter `config.star_count` stars over the upper half of the canvas.
    pub fn generate(config: &ShowConfig, rng: &mut RandomSource) -> Self {
        let n = config.star_count;
        let (x_min, x_max) = config.x_bounds;
        let (y_min, y_max) = config.y_bounds;
        let band_min = y_min + (y_max - y_min) / 2.0;

        let mut field = Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            size: Vec::with_capacity(n),
            base_alpha: Vec::with_capacity(n),
        };
        for _ in 0..n {
            field.x.push(rng.uniform(x_min, x_max));
            field.y.push(rng.uniform(band_min, y_max));
            field.base_alpha.push(rng.uniform(BASE_ALPHA_MIN, BASE_ALPHA_MAX));
            field.size.push(rng.uniform(SIZE_MIN, SIZE_MAX));
        }
        field
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Alpha for star `i` at the given tick: a slow sine around the base
    /// alpha, phase-shifted per star so the field shimmers rather than
    /// pulsing in unison.
    pub fn twinkle_alpha(&self, i: usize, tick: u64) -> f64 {
        let wave = TWINKLE_AMPLITUDE * (tick as f64 * TWINKLE_RATE + i as f64).sin();
        (self.base_alpha[i] + wave).clamp(ALPHA_FLOOR, ALPHA_CEIL)
    }
}
