use crate::rng::RandomSource;

/// The burst shapes a shell can explode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Round burst with random particle directions.
    Normal,
    /// Particles start on a circle and expand outward.
    Ring,
    /// Particles trace an unwinding spiral arm.
    Spiral,
    /// Particles outline a parametric heart curve.
    Heart,
    /// Tight golden burst, always gold regardless of shell color.
    Glitter,
}

impl PatternKind {
    pub const COUNT: usize = 5;

    /// All kinds, in the order the weight table uses.
    pub const ALL: [PatternKind; Self::COUNT] = [
        PatternKind::Normal,
        PatternKind::Ring,
        PatternKind::Spiral,
        PatternKind::Heart,
        PatternKind::Glitter,
    ];

    /// Stock distribution: mostly plain bursts, glitter rarest.
    pub const fn default_weights() -> [f64; Self::COUNT] {
        [0.45, 0.20, 0.15, 0.12, 0.08]
    }

    /// Draw a kind from the categorical distribution given by `weights`,
    /// indexed in `ALL` order.
    pub fn sample(weights: &[f64; Self::COUNT], rng: &mut RandomSource) -> PatternKind {
        Self::ALL[rng.weighted(weights)]
    }
}
