use std::f64::consts::PI;

use crate::color::{Rgb, GOLD};
use crate::config::ShowConfig;
use crate::pattern::PatternKind;
use crate::rng::RandomSource;

/// Fraction of a particle's velocity applied to its position each tick.
const STEP: f64 = 0.12;
/// Per-tick opacity loss; a burst fades to nothing in ~83 ticks.
const ALPHA_DECAY: f64 = 0.012;

/// Heart curve scale factor.
const HEART_SCALE: f64 = 6.0;
/// Standard deviation of the heart's velocity jitter.
const HEART_JITTER_SD: f64 = 0.8;
/// Ring radius band, drawn once per burst.
const RING_RADIUS_MIN: f64 = 10.0;
const RING_RADIUS_MAX: f64 = 14.0;
/// Ring outward speed band, drawn per particle.
const RING_SPEED_MIN: f64 = 0.8;
const RING_SPEED_MAX: f64 = 2.5;
/// Spiral arm: angle sweep and radius growth across the burst.
const SPIRAL_SWEEP: f64 = 6.0 * PI;
const SPIRAL_RADIUS_MIN: f64 = 1.0;
const SPIRAL_RADIUS_MAX: f64 = 18.0;
/// Round bursts start this close to the origin, as a fraction of speed.
const BURST_OFFSET: f64 = 0.2;
const GLITTER_SPEED_MIN: f64 = 1.0;
const GLITTER_SPEED_MAX: f64 = 6.0;
const NORMAL_SPEED_MIN: f64 = 1.0;
const NORMAL_SPEED_MAX: f64 = 5.0;

/// A burst of particles sharing one color, one update law and one lifecycle.
///
/// Particles live in parallel arrays and have no identity beyond their
/// index; nothing outside the burst ever points at an individual particle.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pattern: PatternKind,
    pub color: Rgb,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,
    pub alpha: Vec<f64>,
}

impl Explosion {
    /// Burst a shell at `origin` into `config.particles_per_burst` particles
    /// laid out by `pattern`. Glitter ignores the shell color and burns gold.
    pub fn ignite(
        origin: (f64, f64),
        color: Rgb,
        pattern: PatternKind,
        config: &ShowConfig,
        rng: &mut RandomSource,
    ) -> Self {
        let n = config.particles_per_burst;
        let (x0, y0) = origin;
        let mut burst = Self {
            pattern,
            color: if pattern == PatternKind::Glitter {
                GOLD
            } else {
                color
            },
            x: vec![0.0; n],
            y: vec![0.0; n],
            vx: vec![0.0; n],
            vy: vec![0.0; n],
            alpha: vec![1.0; n],
        };

        // Even spacing over n samples, endpoints included, so closed curves
        // (heart, ring) land their last particle on their first.
        let fraction = |i: usize| i as f64 / (n - 1) as f64;

        match pattern {
            PatternKind::Heart => {
                for i in 0..n {
                    let t = fraction(i) * 2.0 * PI;
                    burst.x[i] = x0 + HEART_SCALE * 16.0 * t.sin().powi(3);
                    burst.y[i] = y0
                        + HEART_SCALE
                            * (13.0 * t.cos()
                                - 5.0 * (2.0 * t).cos()
                                - 2.0 * (3.0 * t).cos()
                                - (4.0 * t).cos());
                }
                for i in 0..n {
                    burst.vx[i] = rng.normal(0.0, HEART_JITTER_SD);
                }
                for i in 0..n {
                    burst.vy[i] = rng.normal(0.0, HEART_JITTER_SD);
                }
            }
            PatternKind::Ring => {
                let radius = rng.uniform(RING_RADIUS_MIN, RING_RADIUS_MAX);
                for i in 0..n {
                    let angle = fraction(i) * 2.0 * PI;
                    burst.x[i] = x0 + radius * angle.cos();
                    burst.y[i] = y0 + radius * angle.sin();
                    let speed = rng.uniform(RING_SPEED_MIN, RING_SPEED_MAX);
                    burst.vx[i] = angle.cos() * speed;
                    burst.vy[i] = angle.sin() * speed;
                }
            }
            PatternKind::Spiral => {
                for i in 0..n {
                    let angle = fraction(i) * SPIRAL_SWEEP;
                    let radius = SPIRAL_RADIUS_MIN
                        + fraction(i) * (SPIRAL_RADIUS_MAX - SPIRAL_RADIUS_MIN);
                    burst.x[i] = x0 + radius * angle.cos();
                    burst.y[i] = y0 + radius * angle.sin();
                    burst.vx[i] = angle.cos();
                    burst.vy[i] = angle.sin();
                }
            }
            PatternKind::Glitter => {
                burst.round_burst(x0, y0, GLITTER_SPEED_MIN, GLITTER_SPEED_MAX, rng);
            }
            PatternKind::Normal => {
                burst.round_burst(x0, y0, NORMAL_SPEED_MIN, NORMAL_SPEED_MAX, rng);
            }
        }

        burst
    }

    /// Random-direction burst: particles start a small offset from the
    /// origin and fly outward along that same direction at full speed.
    fn round_burst(
        &mut self,
        x0: f64,
        y0: f64,
        speed_min: f64,
        speed_max: f64,
        rng: &mut RandomSource,
    ) {
        for i in 0..self.len() {
            let angle = rng.uniform(0.0, 2.0 * PI);
            let speed = rng.uniform(speed_min, speed_max);
            self.x[i] = x0 + angle.cos() * speed * BURST_OFFSET;
            self.y[i] = y0 + angle.sin() * speed * BURST_OFFSET;
            self.vx[i] = angle.cos() * speed;
            self.vy[i] = angle.sin() * speed;
        }
    }

    /// One integration step, uniform across patterns: gravity, drag,
    /// advance, fade. Alpha never leaves [0, 1] and never increases.
    pub fn update(&mut self, config: &ShowConfig) {
        for i in 0..self.len() {
            self.vy[i] += config.gravity;
            self.vx[i] *= config.drag;
            self.vy[i] *= config.drag;
            self.x[i] += self.vx[i] * STEP;
            self.y[i] += self.vy[i] * STEP;
            self.alpha[i] = (self.alpha[i] - ALPHA_DECAY).clamp(0.0, 1.0);
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// A burst is dead once every particle has fully faded.
    pub fn is_dead(&self) -> bool {
        self.alpha.iter().all(|&a| a <= 0.0)
    }
}
