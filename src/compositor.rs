use crate::config::ShowConfig;
use crate::rng::RandomSource;
use crate::simulator::Simulator;
use crate::skyline::{self, Building};
use crate::stars::StarField;

/// Gaussian spread of trail points at render time.
const TRAIL_JITTER_SD: f64 = 0.1;
/// Gaussian spread of smoke points around trail samples.
const SMOKE_JITTER_SD: f64 = 0.8;
/// Smoke is drawn at a fixed opacity.
const SMOKE_ALPHA: f64 = 0.4;

/// Flat draw-ready geometry for one tick. Arrays within each group are
/// parallel: `star_alpha[i]` and `star_size[i]` belong to `star_pos[i]`,
/// `particle_rgba[i]` to `particle_pos[i]`.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffers {
    pub star_pos: Vec<(f64, f64)>,
    pub star_alpha: Vec<f64>,
    pub star_size: Vec<f64>,
    pub rocket_pos: Vec<(f64, f64)>,
    pub trail_pos: Vec<(f64, f64)>,
    pub smoke_pos: Vec<(f64, f64)>,
    /// One opacity for every smoke point.
    pub smoke_alpha: f64,
    pub particle_pos: Vec<(f64, f64)>,
    pub particle_rgba: Vec<[f64; 4]>,
}

/// Gathers everything visible this tick into `FrameBuffers`.
///
/// Owns the static backdrop (stars and skyline); rockets, trails, smoke and
/// particles are read from the simulator without mutating it.
#[derive(Debug, Clone)]
pub struct FrameCompositor {
    stars: StarField,
    skyline: Vec<Building>,
}

impl FrameCompositor {
    pub fn new(config: &ShowConfig, rng: &mut RandomSource) -> Self {
        Self {
            stars: StarField::generate(config, rng),
            skyline: skyline::buildings(config),
        }
    }

    /// The static building backdrop; never changes during a show.
    pub fn skyline(&self) -> &[Building] {
        &self.skyline
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// Snapshot the world for rendering.
    ///
    /// A pure read of the simulator; the `RandomSource` is consumed only for
    /// trail and smoke jitter, which is drawn fresh every frame rather than
    /// stored. An empty world yields empty, valid buffers.
    pub fn collect(&self, sim: &Simulator, tick: u64, rng: &mut RandomSource) -> FrameBuffers {
        let mut frame = FrameBuffers {
            smoke_alpha: SMOKE_ALPHA,
            ..FrameBuffers::default()
        };

        for i in 0..self.stars.len() {
            frame.star_pos.push((self.stars.x[i], self.stars.y[i]));
            frame.star_alpha.push(self.stars.twinkle_alpha(i, tick));
            frame.star_size.push(self.stars.size[i]);
        }

        for rocket in sim.rockets() {
            frame.rocket_pos.push((rocket.x, rocket.y));
            for &(tx, ty) in rocket.trail() {
                frame
                    .trail_pos
                    .push((tx + rng.normal(0.0, TRAIL_JITTER_SD), ty));
                frame.smoke_pos.push((
                    tx + rng.normal(0.0, SMOKE_JITTER_SD),
                    ty + rng.normal(0.0, SMOKE_JITTER_SD),
                ));
            }
        }

        for burst in sim.explosions() {
            let [r, g, b] = burst.color.to_unit();
            for i in 0..burst.len() {
                frame.particle_pos.push((burst.x[i], burst.y[i]));
                frame.particle_rgba.push([r, g, b, burst.alpha[i]]);
            }
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(seed: u64) -> (Simulator, FrameCompositor, RandomSource) {
        let config = ShowConfig::default();
        let mut rng = RandomSource::seeded(seed);
        let compositor = FrameCompositor::new(&config, &mut rng);
        let sim = Simulator::seeded(seed);
        (sim, compositor, rng)
    }

    #[test]
    fn test_empty_world_yields_valid_buffers() {
        let (sim, compositor, mut rng) = setup(1);
        let frame = compositor.collect(&sim, 0, &mut rng);
        assert_eq!(frame.star_pos.len(), sim.config().star_count);
        assert!(frame.rocket_pos.is_empty());
        assert!(frame.trail_pos.is_empty());
        assert!(frame.smoke_pos.is_empty());
        assert!(frame.particle_pos.is_empty());
        assert!(frame.particle_rgba.is_empty());
        assert_eq!(frame.smoke_alpha, SMOKE_ALPHA);
    }

    #[test]
    fn test_buffer_groups_stay_parallel() {
        let (mut sim, compositor, mut rng) = setup(2);
        for tick in 0..300 {
            sim.advance(tick);
            let frame = compositor.collect(&sim, tick, &mut rng);
            assert_eq!(frame.star_pos.len(), frame.star_alpha.len());
            assert_eq!(frame.star_pos.len(), frame.star_size.len());
            assert_eq!(frame.trail_pos.len(), frame.smoke_pos.len());
            assert_eq!(frame.particle_pos.len(), frame.particle_rgba.len());
        }
    }

    #[test]
    fn test_particle_buffer_concatenates_bursts() {
        let (mut sim, compositor, mut rng) = setup(3);
        for tick in 0..300 {
            sim.advance(tick);
            let frame = compositor.collect(&sim, tick, &mut rng);
            let expected: usize = sim.explosions().iter().map(|e| e.len()).sum();
            assert_eq!(frame.particle_pos.len(), expected);
            for rgba in &frame.particle_rgba {
                for channel in rgba {
                    assert!((0.0..=1.0).contains(channel));
                }
            }
        }
    }

    #[test]
    fn test_collect_does_not_mutate_world() {
        let (mut sim, compositor, mut rng) = setup(4);
        for tick in 0..120 {
            sim.advance(tick);
        }
        let rockets_before: Vec<(f64, f64)> =
            sim.rockets().iter().map(|r| (r.x, r.y)).collect();
        let alphas_before: Vec<Vec<f64>> =
            sim.explosions().iter().map(|e| e.alpha.clone()).collect();

        let _ = compositor.collect(&sim, 120, &mut rng);

        let rockets_after: Vec<(f64, f64)> =
            sim.rockets().iter().map(|r| (r.x, r.y)).collect();
        let alphas_after: Vec<Vec<f64>> =
            sim.explosions().iter().map(|e| e.alpha.clone()).collect();
        assert_eq!(rockets_before, rockets_after);
        assert_eq!(alphas_before, alphas_after);
    }

    #[test]
    fn test_trail_jitter_is_fresh_each_frame() {
        let (mut sim, compositor, mut rng) = setup(5);
        // run until some rocket is airborne with a trail
        let mut tick = 0;
        while sim.rockets().is_empty() || sim.rockets()[0].trail().is_empty() {
            sim.advance(tick);
            tick += 1;
        }
        let a = compositor.collect(&sim, tick, &mut rng);
        let b = compositor.collect(&sim, tick, &mut rng);
        assert_eq!(a.trail_pos.len(), b.trail_pos.len());
        // same stored trail, different render-time jitter
        assert_ne!(a.trail_pos, b.trail_pos);
        // jitter shifts x only; y comes straight from the stored sample
        for (pa, pb) in a.trail_pos.iter().zip(&b.trail_pos) {
            assert_eq!(pa.1, pb.1);
        }
    }

    #[test]
    fn test_skyline_matches_canvas_edge() {
        let (sim, compositor, _) = setup(6);
        assert_eq!(compositor.skyline().len(), 10);
        assert_eq!(compositor.skyline()[0].x, sim.config().x_bounds.0);
    }
}
