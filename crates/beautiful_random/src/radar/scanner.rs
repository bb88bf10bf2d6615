//! Rejection-sampling radar scanner.
use tracing::{debug, trace};

use crate::angle::{normalize, Sector, FULL_TURN};
use crate::error::Result;
use crate::radar::constraints::{clamp_sector_width, ScanConstraints, DEFAULT_MAX_ATTEMPTS};
use crate::radar::PointOfInterest;
use crate::source::{DistributionKind, RandomSource, ScalarRandomSource};

/// Upper bound (exclusive, before the `+ 1`) of the random default point count.
const DEFAULT_COUNT_SPAN: f64 = 5.0;
const MIN_INTENSITY: f64 = 0.3;

/// Outcome of one scan.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    /// Accepted points, at most `requested`.
    pub points: Vec<PointOfInterest>,
    /// Number of points asked for.
    pub requested: usize,
    /// Candidates drawn.
    pub attempts: usize,
    /// Candidates discarded by validation.
    pub rejected: usize,
}

/// Generates points of interest under [`ScanConstraints`].
///
/// Each requested point gets up to `max_attempts` candidates; a point whose candidates
/// all fail validation is dropped, so a scan returns anywhere from zero to `count`
/// points. Draws use `|next()|`, so sources whose output leaves [0, 1) (for example
/// [`DistributionKind::Gaussian`]) produce out-of-range candidates that the validator
/// rejects.
#[derive(Debug, Clone)]
pub struct RadarScanner<S = ScalarRandomSource> {
    constraints: ScanConstraints,
    max_attempts: usize,
    source: S,
}

impl RadarScanner<ScalarRandomSource> {
    /// Scanner with default constraints and a clock-seeded uniform source.
    pub fn new(max_distance: f64) -> Self {
        debug_assert!(
            max_distance.is_finite() && max_distance > 0.0,
            "max_distance must be > 0"
        );
        Self {
            constraints: ScanConstraints::new(max_distance),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            source: ScalarRandomSource::new(DistributionKind::Uniform),
        }
    }

    pub fn try_new(max_distance: f64) -> Result<Self> {
        Self::with_constraints(
            ScanConstraints::new(max_distance),
            ScalarRandomSource::new(DistributionKind::Uniform),
        )
    }
}

impl<S: RandomSource> RadarScanner<S> {
    /// Scanner with explicit constraints and source. The sector width and scan angle
    /// are clamped and normalized; the range is validated.
    pub fn with_constraints(constraints: ScanConstraints, source: S) -> Result<Self> {
        constraints.validate()?;
        let constraints = constraints
            .with_sector_width(constraints.sector_width)
            .with_scan_angle(constraints.scan_angle);
        Ok(Self {
            constraints,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            source,
        })
    }

    /// Replace the random source, keeping constraints.
    pub fn with_source<T: RandomSource>(self, source: T) -> RadarScanner<T> {
        RadarScanner {
            constraints: self.constraints,
            max_attempts: self.max_attempts,
            source,
        }
    }

    /// Candidates per requested point. Zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.set_max_attempts(max_attempts);
        self
    }

    pub fn with_circle_constraint(mut self, enabled: bool) -> Self {
        self.constraints.constrain_to_circle = enabled;
        self
    }

    pub fn with_sector_constraint(mut self, enabled: bool) -> Self {
        self.constraints.constrain_to_sector = enabled;
        self
    }

    pub fn constraints(&self) -> &ScanConstraints {
        &self.constraints
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn set_max_attempts(&mut self, max_attempts: usize) {
        self.max_attempts = max_attempts.max(1);
    }

    pub fn set_constrain_to_circle(&mut self, enabled: bool) {
        self.constraints.constrain_to_circle = enabled;
    }

    pub fn set_constrain_to_sector(&mut self, enabled: bool) {
        self.constraints.constrain_to_sector = enabled;
    }

    /// Clamp `width` to [10, 180] and store it.
    pub fn set_scan_sector_width(&mut self, width: f64) {
        self.constraints.sector_width = clamp_sector_width(width);
    }

    /// Normalize `angle` and store it as the sweep center.
    pub fn update_scan_angle(&mut self, angle: f64) {
        self.constraints.scan_angle = normalize(angle);
    }

    /// Rotate the sweep by `delta` degrees.
    pub fn advance_scan_angle(&mut self, delta: f64) {
        self.update_scan_angle(self.constraints.scan_angle + delta);
    }

    pub fn sector_width(&self) -> f64 {
        self.constraints.sector_width
    }

    pub fn scan_angle(&self) -> f64 {
        self.constraints.scan_angle
    }

    /// Sector centered on the current sweep angle.
    pub fn sector(&self) -> Sector {
        Sector::around(self.constraints.scan_angle, self.constraints.sector_width)
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Generate up to `count` points around `at_angle` (default: the stored sweep angle).
    ///
    /// When `count` is `None`, between 1 and 5 points are requested at random. The
    /// returned length is only an upper-bounded estimate of `count`.
    pub fn scan(&mut self, at_angle: Option<f64>, count: Option<usize>) -> Vec<PointOfInterest> {
        self.scan_detailed(at_angle, count).points
    }

    /// Like [`scan`](Self::scan), also reporting attempt and rejection counts.
    pub fn scan_detailed(&mut self, at_angle: Option<f64>, count: Option<usize>) -> ScanReport {
        let scan_angle = at_angle.map_or(self.constraints.scan_angle, normalize);
        let requested = match count {
            Some(n) => n,
            None => self.default_count(),
        };
        let sector = Sector::around(scan_angle, self.constraints.sector_width);

        let mut report = ScanReport {
            points: Vec::with_capacity(requested),
            requested,
            attempts: 0,
            rejected: 0,
        };

        for _ in 0..requested {
            for _ in 0..self.max_attempts {
                report.attempts += 1;
                match self.candidate(sector) {
                    Some(poi) => {
                        report.points.push(poi);
                        break;
                    }
                    None => report.rejected += 1,
                }
            }
        }

        if report.points.len() < requested {
            debug!(
                "Scan at {:.1}° delivered {}/{} points ({} candidates rejected).",
                scan_angle,
                report.points.len(),
                requested,
                report.rejected
            );
        }

        report
    }

    fn default_count(&mut self) -> usize {
        let n = (self.source.next_unit() * DEFAULT_COUNT_SPAN).floor() as usize + 1;
        n.max(1)
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        self.source.next().abs()
    }

    /// One candidate, or `None` if it fails validation.
    fn candidate(&mut self, sector: Sector) -> Option<PointOfInterest> {
        let c = self.constraints;

        let intensity = (MIN_INTENSITY + self.draw() * (1.0 - MIN_INTENSITY)).min(1.0);

        let distance = if c.constrain_to_circle {
            // sqrt keeps the density uniform over the disk's area
            self.draw().sqrt() * c.max_distance
        } else {
            self.draw() * c.max_distance
        };

        let raw_angle = if c.constrain_to_sector {
            if sector.wraps() {
                if self.draw() < 0.5 {
                    sector.start + self.draw() * (FULL_TURN - sector.start)
                } else {
                    self.draw() * sector.end
                }
            } else {
                sector.start + self.draw() * (sector.end - sector.start)
            }
        } else {
            self.draw() * FULL_TURN
        };

        if !intensity.is_finite() || !distance.is_finite() || !raw_angle.is_finite() {
            trace!("Rejected non-finite candidate.");
            return None;
        }

        let angle = normalize(raw_angle);

        if c.constrain_to_circle && distance > c.max_distance {
            trace!(
                "Rejected candidate at distance {:.3} beyond {:.3}.",
                distance,
                c.max_distance
            );
            return None;
        }
        if c.constrain_to_sector && !sector.contains(angle) {
            trace!(
                "Rejected candidate at {:.3}° outside [{:.3}°, {:.3}°].",
                angle,
                sector.start,
                sector.end
            );
            return None;
        }

        Some(PointOfInterest {
            distance,
            angle,
            intensity,
        })
    }
}
