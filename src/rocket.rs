use std::collections::VecDeque;

use crate::color::Rgb;
use crate::config::ShowConfig;
use crate::rng::RandomSource;

/// Most recent trail samples kept per rocket; the oldest is evicted first.
pub const TRAIL_CAP: usize = 25;

/// Vertical velocity retention per tick during ascent.
const ASCENT_DRAG: f64 = 0.99;
/// A rocket burns out once it climbs slower than this.
const BURNOUT_VY: f64 = 1.0;

/// Launch column range.
const LAUNCH_X_MIN: f64 = -60.0;
const LAUNCH_X_MAX: f64 = 60.0;
/// Initial climb speed range.
const LAUNCH_VY_MIN: f64 = 4.0;
const LAUNCH_VY_MAX: f64 = 6.5;
/// How far below the nose each trail sample lands.
const TRAIL_DROP_MIN: f64 = 0.5;
const TRAIL_DROP_MAX: f64 = 1.8;
/// Altitude band in which a rocket may burst early.
const CEILING_MIN: f64 = 60.0;
const CEILING_MAX: f64 = 100.0;

/// An ascending shell: climbs from the ground line, bleeds speed, lays a
/// fading trail, and flips `exploded` exactly once at burnout.
#[derive(Debug, Clone)]
pub struct Rocket {
    pub x: f64,
    pub y: f64,
    pub vy: f64,
    pub color: Rgb,
    pub exploded: bool,
    trail: VecDeque<(f64, f64)>,
}

impl Rocket {
    /// Launch a fresh shell with randomized column, thrust and color.
    ///
    /// Draw order is fixed: column, climb speed, then color.
    pub fn launch(config: &ShowConfig, rng: &mut RandomSource) -> Self {
        let x = rng.uniform(LAUNCH_X_MIN, LAUNCH_X_MAX);
        let vy = rng.uniform(LAUNCH_VY_MIN, LAUNCH_VY_MAX);
        let color = config.palette[rng.index(config.palette.len())];
        Self {
            x,
            y: 0.0,
            vy,
            color,
            exploded: false,
            trail: VecDeque::with_capacity(TRAIL_CAP),
        }
    }

    /// One tick of ascent: climb, bleed speed, lay a trail sample and check
    /// for burnout.
    ///
    /// The burst ceiling is re-drawn on every call rather than fixed at
    /// launch, which skews bursts lower than a draw-once ceiling would.
    pub fn update(&mut self, rng: &mut RandomSource) {
        self.y += self.vy;
        self.vy *= ASCENT_DRAG;

        self.trail
            .push_back((self.x, self.y - rng.uniform(TRAIL_DROP_MIN, TRAIL_DROP_MAX)));
        if self.trail.len() > TRAIL_CAP {
            self.trail.pop_front();
        }

        // The ceiling draw is skipped when the speed check already fires.
        if self.vy < BURNOUT_VY || self.y > rng.uniform(CEILING_MIN, CEILING_MAX) {
            self.exploded = true;
        }
    }

    /// Recent trail samples, oldest first.
    pub fn trail(&self) -> &VecDeque<(f64, f64)> {
        &self.trail
    }
}
