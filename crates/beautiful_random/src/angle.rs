//! Degree-based angle helpers: normalization into [0, 360) and sector membership
//! with wraparound through 0°.

pub const FULL_TURN: f64 = 360.0;

/// Map any finite angle in degrees into [0, 360). Non-finite input maps to 0.
#[inline]
pub fn normalize(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= FULL_TURN {
        0.0
    } else {
        a
    }
}

/// Sector membership. When `start > end` the sector crosses 0° and membership is
/// `angle >= start || angle <= end`; otherwise it is the closed interval `[start, end]`.
#[inline]
pub fn sector_contains(angle: f64, start: f64, end: f64) -> bool {
    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

/// Angular range `[start, end]` on the circle, possibly wrapping through 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector {
    pub start: f64,
    pub end: f64,
}

impl Sector {
    /// Sector of `width` degrees centered on `center`, with both bounds normalized.
    pub fn around(center: f64, width: f64) -> Self {
        let half = width * 0.5;
        Self {
            start: normalize(center - half),
            end: normalize(center + half),
        }
    }

    /// True if the sector crosses the 0° boundary.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, angle: f64) -> bool {
        sector_contains(angle, self.start, self.end)
    }

    /// Angular size in degrees.
    pub fn span(&self) -> f64 {
        if self.wraps() {
            FULL_TURN - self.start + self.end
        } else {
            self.end - self.start
        }
    }
}
