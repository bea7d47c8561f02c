use crate::color::{Rgb, PALETTE};
use crate::pattern::PatternKind;

/// Tunable constants a driving collaborator may override at construction.
///
/// Defaults give the stock show: a 160x140 canvas, 200 stars,
/// 130-particle bursts, and a 6% launch chance per tick.
#[derive(Debug, Clone)]
pub struct ShowConfig {
    /// Horizontal canvas bounds (min, max).
    pub x_bounds: (f64, f64),
    /// Vertical canvas bounds (min, max); the ground line is at the minimum.
    pub y_bounds: (f64, f64),
    /// Number of background stars.
    pub star_count: usize,
    /// Particles per explosion. Every pattern uses the same count.
    pub particles_per_burst: usize,
    /// Per-tick vertical acceleration applied to burst particles.
    pub gravity: f64,
    /// Per-tick velocity retention factor for burst particles.
    pub drag: f64,
    /// Probability of launching a new rocket on any given tick.
    pub spawn_probability: f64,
    /// Categorical weights over `PatternKind::ALL` order.
    pub pattern_weights: [f64; PatternKind::COUNT],
    /// Colors rockets launch with.
    pub palette: Vec<Rgb>,
    /// Cap on concurrently ascending rockets; launches are skipped beyond it.
    pub max_rockets: usize,
    /// Cap on concurrently live explosions; extra ignitions are dropped.
    pub max_explosions: usize,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            x_bounds: (-80.0, 80.0),
            y_bounds: (0.0, 140.0),
            star_count: 200,
            particles_per_burst: 130,
            gravity: -0.08,
            drag: 0.985,
            spawn_probability: 0.06,
            pattern_weights: PatternKind::default_weights(),
            palette: PALETTE.to_vec(),
            max_rockets: 32,
            max_explosions: 64,
        }
    }
}

impl ShowConfig {
    /// Check the configuration for values that would break the simulation.
    ///
    /// A bad configuration is a programming error in the embedding driver,
    /// so `Simulator::new` rejects it up front instead of failing mid-show.
    pub fn validate(&self) -> Result<(), String> {
        if self.x_bounds.0 >= self.x_bounds.1 {
            return Err(format!(
                "x_bounds must be ordered (min < max), got {:?}",
                self.x_bounds
            ));
        }
        if self.y_bounds.0 >= self.y_bounds.1 {
            return Err(format!(
                "y_bounds must be ordered (min < max), got {:?}",
                self.y_bounds
            ));
        }
        if self.palette.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        // Shape generators space particles over N-1 intervals
        if self.particles_per_burst < 2 {
            return Err(format!(
                "particles_per_burst must be at least 2, got {}",
                self.particles_per_burst
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(format!(
                "spawn_probability must be in [0, 1], got {}",
                self.spawn_probability
            ));
        }
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(format!("drag must be in (0, 1], got {}", self.drag));
        }
        if !self.gravity.is_finite() {
            return Err(format!("gravity must be finite, got {}", self.gravity));
        }
        if self
            .pattern_weights
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(format!(
                "pattern_weights must be finite and non-negative, got {:?}",
                self.pattern_weights
            ));
        }
        if self.pattern_weights.iter().sum::<f64>() <= 0.0 {
            return Err("pattern_weights must sum to a positive value".to_string());
        }
        if self.max_rockets == 0 || self.max_explosions == 0 {
            return Err("max_rockets and max_explosions must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ShowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let config = ShowConfig {
            palette: Vec::new(),
            ..ShowConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_weights_rejected() {
        let negative = ShowConfig {
            pattern_weights: [0.5, -0.1, 0.2, 0.2, 0.2],
            ..ShowConfig::default()
        };
        assert!(negative.validate().is_err());

        let zero_sum = ShowConfig {
            pattern_weights: [0.0; PatternKind::COUNT],
            ..ShowConfig::default()
        };
        assert!(zero_sum.validate().is_err());
    }

    #[test]
    fn test_bad_spawn_probability_rejected() {
        let config = ShowConfig {
            spawn_probability: 1.5,
            ..ShowConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unordered_bounds_rejected() {
        let config = ShowConfig {
            x_bounds: (80.0, -80.0),
            ..ShowConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_burst_rejected() {
        let config = ShowConfig {
            particles_per_burst: 1,
            ..ShowConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
