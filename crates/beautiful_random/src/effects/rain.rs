//! Falling rain streaks with respawn at the top of the area.
use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::effects::lerp;
use crate::error::{ensure_positive, ensure_range, Result};
use crate::source::{DistributionKind, RandomSource, ScalarRandomSource};

/// Configuration for a [`RainGenerator`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainConfig {
    /// Width and height of the area drops fall through.
    pub area: DVec2,
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_length: f64,
    pub max_length: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            area: DVec2::ZERO,
            min_speed: 5.0,
            max_speed: 15.0,
            min_length: 10.0,
            max_length: 30.0,
        }
    }
}

impl RainConfig {
    pub fn new(area: impl Into<mint::Vector2<f64>>) -> Self {
        Self {
            area: DVec2::from(area.into()),
            ..Default::default()
        }
    }

    pub fn with_speed_range(mut self, min: f64, max: f64) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    pub fn with_length_range(mut self, min: f64, max: f64) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("area.x", self.area.x)?;
        ensure_positive("area.y", self.area.y)?;
        ensure_range("speed", self.min_speed, self.max_speed)?;
        ensure_range("length", self.min_length, self.max_length)
    }
}

/// A single streak. Its head is at `position` and it extends `length` downward.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raindrop {
    pub position: DVec2,
    pub length: f64,
    /// Units per second, downward.
    pub speed: f64,
    pub opacity: f64,
    /// Direction in radians; always straight down.
    pub angle: f64,
}

impl Raindrop {
    pub fn end_point(&self) -> DVec2 {
        DVec2::new(self.position.x, self.position.y + self.length)
    }

    /// The drop after falling for `dt` seconds.
    pub fn updated(&self, dt: f64) -> Raindrop {
        Raindrop {
            position: DVec2::new(self.position.x, self.position.y + self.speed * dt),
            ..*self
        }
    }
}

#[derive(Debug)]
pub struct RainGenerator<S = ScalarRandomSource> {
    config: RainConfig,
    source: S,
}

impl RainGenerator<ScalarRandomSource> {
    pub fn new(config: RainConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid rain configuration");
        Self {
            config,
            source: ScalarRandomSource::new(DistributionKind::Uniform),
        }
    }

    pub fn try_new(config: RainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<S: RandomSource> RainGenerator<S> {
    pub fn with_source<T: RandomSource>(self, source: T) -> RainGenerator<T> {
        RainGenerator {
            config: self.config,
            source,
        }
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Spawn `count` drops in the upper half of the area, heads at or above the top edge
    /// minus `max_length`.
    pub fn generate(&mut self, count: usize) -> Vec<Raindrop> {
        let cfg = self.config;
        (0..count)
            .map(|_| {
                let x = self.source.next_unit() * cfg.area.x;
                let y = self.source.next_unit() * cfg.area.y * 0.5 - cfg.max_length;
                let length = lerp(cfg.min_length, cfg.max_length, self.source.next_unit());
                let speed = lerp(cfg.min_speed, cfg.max_speed, self.source.next_unit());
                let opacity = 0.3 + self.source.next_unit() * 0.7;
                Raindrop {
                    position: DVec2::new(x, y),
                    length,
                    speed,
                    opacity,
                    angle: FRAC_PI_2,
                }
            })
            .collect()
    }

    /// Advance every drop by `dt`; drops below the area respawn just above the top.
    pub fn update(&mut self, drops: &mut [Raindrop], dt: f64) {
        let area = self.config.area;
        for drop in drops.iter_mut() {
            let moved = drop.updated(dt);
            *drop = if moved.position.y > area.y {
                Raindrop {
                    position: DVec2::new(self.source.next_unit() * area.x, -drop.length),
                    ..*drop
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

    fn generator(seed: u64) -> RainGenerator {
        RainGenerator::new(RainConfig::new(DVec2::new(300.0, 600.0)))
            .with_source(ScalarRandomSource::with_seed(DistributionKind::Uniform, seed))
    }

    #[test]
    fn generated_drops_respect_configured_ranges() {
        let mut rain = generator(1);
        let drops = rain.generate(500);
        assert_eq!(drops.len(), 500);
        for d in drops {
            assert!((0.0..300.0).contains(&d.position.x));
            assert!(d.position.y >= -30.0 && d.position.y < 300.0 - 30.0);
            assert!((10.0..=30.0).contains(&d.length));
            assert!((5.0..=15.0).contains(&d.speed));
            assert!((0.3..=1.0).contains(&d.opacity));
            assert_eq!(d.angle, FRAC_PI_2);
            assert_eq!(d.end_point().x, d.position.x);
            assert_eq!(d.end_point().y, d.position.y + d.length);
        }
    }

    #[test]
    fn update_falls_straight_down() {
        let mut rain = generator(2);
        let mut drops = rain.generate(1);
        let before = drops[0];
        drops[0].position.y = 0.0;
        rain.update(&mut drops, 0.5);
        assert_eq!(drops[0].position.x, before.position.x);
        assert_eq!(drops[0].position.y, before.speed * 0.5);
    }

    #[test]
    fn drops_below_the_area_respawn_above_the_top() {
        let mut rain = generator(3);
        let mut drops = rain.generate(10);
        for d in drops.iter_mut() {
            d.position.y = 599.0;
        }
        let before = drops.clone();
        rain.update(&mut drops, 1.0);
        for (d, b) in drops.iter().zip(&before) {
            assert_eq!(d.position.y, -b.length);
            assert!((0.0..300.0).contains(&d.position.x));
            assert_eq!((d.length, d.speed, d.opacity), (b.length, b.speed, b.opacity));
        }
    }

    #[test]
    fn try_new_rejects_bad_configs() {
        assert!(RainGenerator::try_new(RainConfig::new(DVec2::new(10.0, 10.0))).is_ok());
        assert!(RainGenerator::try_new(RainConfig::default()).is_err());
        assert!(RainGenerator::try_new(
            RainConfig::new(DVec2::new(10.0, 10.0)).with_speed_range(9.0, 1.0)
        )
        .is_err());
    }

    #[test]
    fn debug_output_names_the_generator() {
        let rendered = format!("{:?}", generator(1));
        assert!(rendered.starts_with("RainGenerator"), "{rendered}");
        assert!(rendered.contains("config"));
    }
}
