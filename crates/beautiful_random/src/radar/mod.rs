//! Radar scanning: sector- and circle-constrained point-of-interest sampling.
//!
//! [`RadarScanner`] draws candidate blips from its own [`RandomSource`] and keeps
//! only those passing the active [`ScanConstraints`].
//!
//! [`RandomSource`]: crate::source::RandomSource
use glam::DVec2;

pub mod constraints;
pub mod scanner;

pub use constraints::{
    ScanConstraints, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DISTANCE, DEFAULT_SECTOR_WIDTH,
    MAX_SECTOR_WIDTH, MIN_SECTOR_WIDTH,
};
pub use scanner::{RadarScanner, ScanReport};

/// A detected blip in polar coordinates around the scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Distance from the scanner origin, `>= 0`.
    pub distance: f64,
    /// Bearing in degrees, in [0, 360).
    pub angle: f64,
    /// Echo strength in [0, 1].
    pub intensity: f64,
}

impl PointOfInterest {
    pub fn new(distance: f64, angle: f64, intensity: f64) -> Self {
        Self {
            distance,
            angle,
            intensity,
        }
    }

    /// Cartesian offset from the origin, with 0° along +x and angles increasing towards +y.
    pub fn to_cartesian(&self) -> DVec2 {
        let theta = self.angle.to_radians();
        DVec2::new(theta.cos(), theta.sin()) * self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_cartesian_follows_bearing() {
        let east = PointOfInterest::new(10.0, 0.0, 1.0).to_cartesian();
        assert!((east - DVec2::new(10.0, 0.0)).length() < 1e-9);

        let south = PointOfInterest::new(2.0, 90.0, 1.0).to_cartesian();
        assert!((south - DVec2::new(0.0, 2.0)).length() < 1e-9);

        let origin = PointOfInterest::new(0.0, 123.0, 0.5).to_cartesian();
        assert_eq!(origin.length(), 0.0);
    }
}
