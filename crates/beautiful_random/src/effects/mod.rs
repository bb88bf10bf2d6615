//! Particle-style effect generators built on [`RandomSource`](crate::source::RandomSource).
//!
//! Each generator owns its source and integrates its particles once per frame; the
//! host decides how to draw them.
pub mod audio;
pub mod rain;
pub mod snow;

pub use audio::{AudioConfig, AudioVisualizer};
pub use rain::{RainConfig, RainGenerator, Raindrop};
pub use snow::{SnowConfig, SnowGenerator, Snowflake, SnowflakeShape};

#[inline]
pub(crate) fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + t * (max - min)
}
