#![forbid(unsafe_code)]
//! beautiful_random: procedural random effects for animated decorations.
//!
//! Modules:
//! - source: scalar random sources with selectable distributions (uniform, wave, Gaussian,
//!   smooth noise, cubic ease) over a 64-bit LCG, with an injectable clock
//! - angle: degree normalization and wraparound-aware sector membership
//! - radar: circle- and sector-constrained point-of-interest sampling
//! - effects: rain, snow and audio-bar generators driven by a source
//!
//! Nothing here is suitable for cryptographic use.
pub mod angle;
pub mod effects;
pub mod error;
pub mod radar;
pub mod source;

/// Convenient re-exports for common types. Import with `use beautiful_random::prelude::*;`.
pub mod prelude {
    pub use crate::angle::{normalize, sector_contains, Sector};
    pub use crate::effects::{
        AudioConfig, AudioVisualizer, RainConfig, RainGenerator, Raindrop, SnowConfig,
        SnowGenerator, Snowflake, SnowflakeShape,
    };
    pub use crate::error::{Error, Result};
    pub use crate::radar::{PointOfInterest, RadarScanner, ScanConstraints, ScanReport};
    pub use crate::source::{
        Clock, DistributionKind, FixedClock, Lcg, RandomSource, ScalarRandomSource, SystemClock,
    };
}
