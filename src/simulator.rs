use crate::config::ShowConfig;
use crate::explosion::Explosion;
use crate::pattern::PatternKind;
use crate::rng::RandomSource;
use crate::rocket::Rocket;

/// Top-level world state: the active rockets and explosions, advanced one
/// tick at a time by an external frame driver.
///
/// `advance` is the only writer. Random draws happen in a fixed order each
/// tick — launch roll, per-rocket update draws, then for each burnt-out
/// rocket a pattern draw followed by the new burst's own draws — so a seeded
/// `RandomSource` replays the same show.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: ShowConfig,
    rng: RandomSource,
    rockets: Vec<Rocket>,
    explosions: Vec<Explosion>,
    tick: u64,
}

impl Simulator {
    /// Build a simulator, rejecting invalid configurations up front.
    pub fn new(config: ShowConfig, rng: RandomSource) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::assemble(config, rng))
    }

    /// Default show with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::assemble(ShowConfig::default(), RandomSource::seeded(seed))
    }

    fn assemble(config: ShowConfig, rng: RandomSource) -> Self {
        Self {
            config,
            rng,
            rockets: Vec::new(),
            explosions: Vec::new(),
            tick: 0,
        }
    }

    /// Advance the world by one tick.
    ///
    /// `tick` values must be monotonically increasing, one per displayed
    /// frame; the compositor reads the recorded value for star twinkle.
    /// After this returns the active sets hold no burnt-out rocket and no
    /// fully faded explosion.
    pub fn advance(&mut self, tick: u64) {
        self.tick = tick;

        // The launch roll always happens, even at the rocket cap, so the
        // cap changes population but not the rest of the draw sequence.
        if self.rng.chance(self.config.spawn_probability)
            && self.rockets.len() < self.config.max_rockets
        {
            self.rockets.push(Rocket::launch(&self.config, &mut self.rng));
        }

        // Filter into a fresh list rather than deleting mid-scan.
        let mut ignited = Vec::new();
        let mut rockets = std::mem::take(&mut self.rockets);
        let mut kept = Vec::with_capacity(rockets.len());
        for mut rocket in rockets.drain(..) {
            rocket.update(&mut self.rng);
            if rocket.exploded {
                let pattern = PatternKind::sample(&self.config.pattern_weights, &mut self.rng);
                ignited.push(Explosion::ignite(
                    (rocket.x, rocket.y),
                    rocket.color,
                    pattern,
                    &self.config,
                    &mut self.rng,
                ));
            } else {
                kept.push(rocket);
            }
        }
        self.rockets = kept;

        // Age the existing bursts; the ones ignited this tick join after
        // the pass and first age on the next tick.
        let config = &self.config;
        self.explosions.retain_mut(|burst| {
            burst.update(config);
            !burst.is_dead()
        });

        for burst in ignited {
            if self.explosions.len() < self.config.max_explosions {
                self.explosions.push(burst);
            }
        }
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    /// Last tick passed to `advance`.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Rockets still ascending, in launch order.
    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    /// Bursts still visible, in ignition order.
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }
}
