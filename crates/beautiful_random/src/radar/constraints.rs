//! Scan constraints held by a [`RadarScanner`](crate::radar::RadarScanner).
use crate::angle::normalize;
use crate::error::{ensure_positive, Result};

pub const MIN_SECTOR_WIDTH: f64 = 10.0;
pub const MAX_SECTOR_WIDTH: f64 = 180.0;
pub const DEFAULT_SECTOR_WIDTH: f64 = 60.0;
pub const DEFAULT_MAX_DISTANCE: f64 = 1000.0;
/// Candidates drawn per requested point before giving up on it.
pub const DEFAULT_MAX_ATTEMPTS: usize = 8;

/// Geometry a scan must satisfy. Updated by the host between scans.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanConstraints {
    /// Scanner range, `> 0`.
    pub max_distance: f64,
    /// Reject candidates farther than `max_distance`; radii are area-uniform.
    pub constrain_to_circle: bool,
    /// Restrict bearings to the sector centered on `scan_angle`.
    pub constrain_to_sector: bool,
    /// Sector width in degrees, in [10, 180].
    pub sector_width: f64,
    /// Sweep center in degrees, in [0, 360).
    pub scan_angle: f64,
}

impl Default for ScanConstraints {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            constrain_to_circle: true,
            constrain_to_sector: true,
            sector_width: DEFAULT_SECTOR_WIDTH,
            scan_angle: 0.0,
        }
    }
}

impl ScanConstraints {
    /// Default constraints with the given range.
    pub fn new(max_distance: f64) -> Self {
        Self {
            max_distance,
            ..Default::default()
        }
    }

    pub fn with_circle_constraint(mut self, enabled: bool) -> Self {
        self.constrain_to_circle = enabled;
        self
    }

    pub fn with_sector_constraint(mut self, enabled: bool) -> Self {
        self.constrain_to_sector = enabled;
        self
    }

    /// Sets the sector width, clamped to [10, 180].
    pub fn with_sector_width(mut self, width: f64) -> Self {
        self.sector_width = clamp_sector_width(width);
        self
    }

    /// Sets the sweep center, normalized into [0, 360).
    pub fn with_scan_angle(mut self, angle: f64) -> Self {
        self.scan_angle = normalize(angle);
        self
    }

    /// Validates the constraints, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("max_distance", self.max_distance)
    }
}

pub(crate) fn clamp_sector_width(width: f64) -> f64 {
    if width.is_nan() {
        MIN_SECTOR_WIDTH
    } else {
        width.clamp(MIN_SECTOR_WIDTH, MAX_SECTOR_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn builder_clamps_and_normalizes() {
        let c = ScanConstraints::new(150.0)
            .with_sector_width(500.0)
            .with_scan_angle(-90.0)
            .with_circle_constraint(false);
        assert_eq!(c.sector_width, MAX_SECTOR_WIDTH);
        assert_eq!(c.scan_angle, 270.0);
        assert!(!c.constrain_to_circle);
        assert!(c.constrain_to_sector);

        assert_eq!(
            ScanConstraints::default().with_sector_width(1.0).sector_width,
            MIN_SECTOR_WIDTH
        );
        assert_eq!(clamp_sector_width(f64::NAN), MIN_SECTOR_WIDTH);
    }

    #[test]
    fn validate_rejects_non_positive_range() {
        assert!(ScanConstraints::new(150.0).validate().is_ok());
        assert!(matches!(
            ScanConstraints::new(0.0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(ScanConstraints::new(f64::NAN).validate().is_err());
    }
}
