//! Drifting snowflakes: vertical fall with a sinusoidal sideways swing, wrapping
//! horizontally and respawning above the area.
use std::f64::consts::TAU;

use glam::DVec2;

use crate::effects::lerp;
use crate::error::{ensure_positive, ensure_range, Result};
use crate::source::{DistributionKind, RandomSource, ScalarRandomSource};

/// Configuration for a [`SnowGenerator`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnowConfig {
    pub area: DVec2,
    pub min_size: f64,
    pub max_size: f64,
    pub min_speed: f64,
    pub max_speed: f64,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            area: DVec2::ZERO,
            min_size: 2.0,
            max_size: 8.0,
            min_speed: 1.0,
            max_speed: 5.0,
        }
    }
}

impl SnowConfig {
    pub fn new(area: impl Into<mint::Vector2<f64>>) -> Self {
        Self {
            area: DVec2::from(area.into()),
            ..Default::default()
        }
    }

    pub fn with_size_range(mut self, min: f64, max: f64) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    pub fn with_speed_range(mut self, min: f64, max: f64) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("area.x", self.area.x)?;
        ensure_positive("area.y", self.area.y)?;
        ensure_range("size", self.min_size, self.max_size)?;
        ensure_range("speed", self.min_speed, self.max_speed)
    }
}

/// Outline family a host may draw a flake with, from simplest to most detailed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnowflakeShape {
    Circle,
    Hexagon,
    Star,
    Cross,
    Branched,
}

impl SnowflakeShape {
    /// Shape for a complexity level; values outside 1..=5 fall back to [`SnowflakeShape::Circle`].
    pub fn from_complexity(level: u8) -> Self {
        match level {
            2 => SnowflakeShape::Hexagon,
            3 => SnowflakeShape::Star,
            4 => SnowflakeShape::Cross,
            5 => SnowflakeShape::Branched,
            _ => SnowflakeShape::Circle,
        }
    }

    pub fn complexity(self) -> u8 {
        match self {
            SnowflakeShape::Circle => 1,
            SnowflakeShape::Hexagon => 2,
            SnowflakeShape::Star => 3,
            SnowflakeShape::Cross => 4,
            SnowflakeShape::Branched => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snowflake {
    pub position: DVec2,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    /// Radians.
    pub rotation: f64,
    pub swing_amount: f64,
    /// Radians per second of total elapsed time.
    pub swing_frequency: f64,
    pub initial_phase: f64,
    pub shape: SnowflakeShape,
}

impl Snowflake {
    /// The flake after `dt` seconds, `total` seconds into the animation.
    pub fn updated(&self, dt: f64, total: f64) -> Snowflake {
        let phase = self.initial_phase + total * self.swing_frequency;
        let swing = phase.sin() * self.swing_amount;
        Snowflake {
            position: DVec2::new(
                self.position.x + swing * dt,
                self.position.y + self.speed * dt,
            ),
            rotation: self.rotation + dt * 0.2 * self.speed,
            ..*self
        }
    }
}

#[derive(Debug)]
pub struct SnowGenerator<S = ScalarRandomSource> {
    config: SnowConfig,
    source: S,
}

impl SnowGenerator<ScalarRandomSource> {
    pub fn new(config: SnowConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid snow configuration");
        Self {
            config,
            source: ScalarRandomSource::new(DistributionKind::Uniform),
        }
    }

    pub fn try_new(config: SnowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<S: RandomSource> SnowGenerator<S> {
    pub fn with_source<T: RandomSource>(self, source: T) -> SnowGenerator<T> {
        SnowGenerator {
            config: self.config,
            source,
        }
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    /// Spawn `count` flakes above the top edge.
    pub fn generate(&mut self, count: usize) -> Vec<Snowflake> {
        let cfg = self.config;
        (0..count)
            .map(|_| {
                let x = self.source.next_unit() * cfg.area.x;
                let y = -cfg.max_size - self.source.next_unit() * cfg.area.y * 0.3;
                let size = lerp(cfg.min_size, cfg.max_size, self.source.next_unit());
                let speed = lerp(cfg.min_speed, cfg.max_speed, self.source.next_unit());
                let opacity = 0.5 + self.source.next_unit() * 0.5;
                let rotation = self.source.next_unit() * TAU;
                let swing_amount = 0.5 + self.source.next_unit() * 1.5;
                let swing_frequency = 0.2 + self.source.next_unit() * 0.8;
                let initial_phase = self.source.next_unit() * TAU;
                let complexity = 1 + (self.source.next_unit() * 4.0).floor() as u8;
                Snowflake {
                    position: DVec2::new(x, y),
                    size,
                    speed,
                    opacity,
                    rotation,
                    swing_amount,
                    swing_frequency,
                    initial_phase,
                    shape: SnowflakeShape::from_complexity(complexity),
                }
            })
            .collect()
    }

    /// Advance every flake. Flakes below the area respawn above it with a fresh swing
    /// phase; flakes drifting past a side edge wrap to the opposite side.
    pub fn update(&mut self, flakes: &mut [Snowflake], dt: f64, total: f64) {
        let area = self.config.area;
        for flake in flakes.iter_mut() {
            let moved = flake.updated(dt, total);
            let size = flake.size;

            *flake = if moved.position.y > area.y + size {
                Snowflake {
                    position: DVec2::new(self.source.next_unit() * area.x, -size * 2.0),
                    initial_phase: self.source.next_unit() * TAU,
                    ..*flake
                }
            } else if moved.position.x < -size {
                // wrapped flakes keep their previous rotation
                Snowflake {
                    position: DVec2::new(area.x + size, moved.position.y),
                    ..*flake
                }
            } else if moved.position.x > area.x + size {
                Snowflake {
                    position: DVec2::new(-size, moved.position.y),
                    ..*flake
                }
            } else {
                moved
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: u64) -> SnowGenerator {
        SnowGenerator::new(SnowConfig::new(DVec2::new(400.0, 300.0)))
            .with_source(ScalarRandomSource::with_seed(DistributionKind::Uniform, seed))
    }

    fn flake_at(x: f64, y: f64) -> Snowflake {
        Snowflake {
            position: DVec2::new(x, y),
            size: 4.0,
            speed: 2.0,
            opacity: 1.0,
            rotation: 0.0,
            swing_amount: 1.0,
            swing_frequency: 0.5,
            initial_phase: 0.0,
            shape: SnowflakeShape::Star,
        }
    }

    #[test]
    fn generated_flakes_respect_configured_ranges() {
        let mut snow = generator(11);
        let flakes = snow.generate(500);
        for f in flakes {
            assert!((0.0..400.0).contains(&f.position.x));
            assert!(f.position.y <= -8.0 && f.position.y > -8.0 - 90.0);
            assert!((2.0..=8.0).contains(&f.size));
            assert!((1.0..=5.0).contains(&f.speed));
            assert!((0.5..=1.0).contains(&f.opacity));
            assert!((0.0..TAU).contains(&f.rotation));
            assert!((0.5..=2.0).contains(&f.swing_amount));
            assert!((0.2..=1.0).contains(&f.swing_frequency));
            assert!((1..=4).contains(&f.shape.complexity()));
        }
    }

    #[test]
    fn updated_swings_and_falls() {
        let f = flake_at(100.0, 50.0);
        let u = f.updated(0.5, 1.0);
        let expected_swing = (0.0 + 1.0 * 0.5f64).sin() * 1.0;
        assert!((u.position.x - (100.0 + expected_swing * 0.5)).abs() < 1e-12);
        assert_eq!(u.position.y, 51.0);
        assert!((u.rotation - 0.5 * 0.2 * 2.0).abs() < 1e-12);
    }

    #[test]
    fn flakes_below_the_area_respawn_above_it() {
        let mut snow = generator(12);
        let mut flakes = vec![flake_at(100.0, 303.9)];
        snow.update(&mut flakes, 1.0, 0.0);
        assert_eq!(flakes[0].position.y, -8.0);
        assert!((0.0..400.0).contains(&flakes[0].position.x));
        assert!((0.0..TAU).contains(&flakes[0].initial_phase));
        assert_eq!(flakes[0].speed, 2.0);
    }

    #[test]
    fn flakes_wrap_horizontally() {
        let mut snow = generator(13);
        // sin(initial_phase) = -1 drifts left
        let mut left = flake_at(-3.9, 10.0);
        left.initial_phase = -std::f64::consts::FRAC_PI_2;
        let mut right = flake_at(403.9, 10.0);
        right.initial_phase = std::f64::consts::FRAC_PI_2;

        let mut flakes = vec![left, right];
        snow.update(&mut flakes, 1.0, 0.0);
        assert_eq!(flakes[0].position.x, 404.0);
        assert_eq!(flakes[1].position.x, -4.0);
        assert_eq!(flakes[0].position.y, 12.0);
    }

    #[test]
    fn complexity_round_trips_through_shape() {
        for level in 1..=5u8 {
            assert_eq!(SnowflakeShape::from_complexity(level).complexity(), level);
        }
        assert_eq!(SnowflakeShape::from_complexity(0), SnowflakeShape::Circle);
        assert_eq!(SnowflakeShape::from_complexity(9), SnowflakeShape::Circle);
    }

    #[test]
    fn try_new_rejects_bad_configs() {
        assert!(SnowGenerator::try_new(SnowConfig::new(DVec2::new(1.0, 1.0))).is_ok());
        assert!(SnowGenerator::try_new(
            SnowConfig::new(DVec2::new(1.0, 1.0)).with_size_range(3.0, 2.0)
        )
        .is_err());
    }

    #[test]
    fn debug_output_names_the_generator() {
        let rendered = format!("{:?}", generator(1));
        assert!(rendered.starts_with("SnowGenerator"), "{rendered}");
        assert!(rendered.contains("config"));
    }
}
