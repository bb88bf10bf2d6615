//! Scalar random sources with selectable distribution algorithms.
//!
//! Every kind is built on the [`Lcg`] uniform primitive, so the generator state
//! advances on each draw regardless of the selected [`DistributionKind`].
//!
//! # Time coupling
//!
//! [`DistributionKind::Wave`] and [`DistributionKind::SmoothNoise`] read a phase
//! from the source's [`Clock`]. With the default [`SystemClock`] their output is
//! tied to real time and is not reproducible from the seed alone. Use
//! [`ScalarRandomSource::sample_at`] or a [`FixedClock`] when determinism matters.
use rand::RngCore;
use tracing::warn;

pub mod clock;
pub mod lcg;

pub use clock::{Clock, FixedClock, SystemClock};
pub use lcg::Lcg;

/// Upper bound on polar-method rejections before falling back to `0.0`.
pub const MAX_GAUSSIAN_ATTEMPTS: usize = 1000;

/// Largest `f64` strictly below one.
pub(crate) const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// Distribution algorithm used by a [`ScalarRandomSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind {
    /// LCG output in [0, 1).
    Uniform,
    /// `sin(t) * 0.5 + uniform * 0.5`, in (-0.5, 1).
    Wave,
    /// Standard normal via the Marsaglia polar method. Unbounded.
    Gaussian,
    /// Mean of four incommensurate sines of `t`, in [-1, 1]. Consumes no state.
    SmoothNoise,
    /// Fixed cubic polynomial of a uniform draw, in [0, 1).
    CubicEase,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 5] = [
        DistributionKind::Uniform,
        DistributionKind::Wave,
        DistributionKind::Gaussian,
        DistributionKind::SmoothNoise,
        DistributionKind::CubicEase,
    ];

    /// True for kinds whose output depends on the clock.
    pub fn is_time_coupled(self) -> bool {
        matches!(self, DistributionKind::Wave | DistributionKind::SmoothNoise)
    }
}

/// Anything that yields one scalar per call. Consumers own their source exclusively.
pub trait RandomSource {
    fn next(&mut self) -> f64;

    /// Draw folded into [0, 1): absolute value, clamped below one, non-finite mapped to zero.
    fn next_unit(&mut self) -> f64 {
        unit(self.next())
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

#[inline]
pub(crate) fn unit(v: f64) -> f64 {
    let a = v.abs();
    if a.is_finite() {
        a.min(ONE_BELOW)
    } else {
        0.0
    }
}

/// Scalar random source: a distribution kind, the LCG state it draws from, and a clock.
///
/// Not synchronized. Give each consumer (and each thread) its own instance.
#[derive(Debug, Clone)]
pub struct ScalarRandomSource<C: Clock = SystemClock> {
    kind: DistributionKind,
    lcg: Lcg,
    clock: C,
}

impl ScalarRandomSource<SystemClock> {
    /// Create a source seeded from the current Unix time in whole seconds.
    pub fn new(kind: DistributionKind) -> Self {
        Self::with_seed(kind, SystemClock.now_seconds() as u64)
    }

    /// Create a source with an explicit seed.
    pub fn with_seed(kind: DistributionKind, seed: u64) -> Self {
        Self {
            kind,
            lcg: Lcg::new(seed),
            clock: SystemClock,
        }
    }

    /// Create a source seeded from another generator.
    pub fn from_rng(kind: DistributionKind, rng: &mut dyn RngCore) -> Self {
        Self::with_seed(kind, rng.next_u64())
    }
}

impl<C: Clock> ScalarRandomSource<C> {
    /// Replace the clock, keeping kind and state.
    pub fn with_clock<D: Clock>(self, clock: D) -> ScalarRandomSource<D> {
        ScalarRandomSource {
            kind: self.kind,
            lcg: self.lcg,
            clock,
        }
    }

    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    pub fn state(&self) -> u64 {
        self.lcg.state()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Restart the underlying LCG from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.lcg.reseed(seed);
    }

    /// Draw one value for the configured kind, reading the clock if the kind needs it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let t = if self.kind.is_time_coupled() {
            self.clock.now_seconds()
        } else {
            0.0
        };
        self.sample_at(t)
    }

    /// Draw one value using `t` as the phase for time-coupled kinds.
    ///
    /// For `Uniform`, `Gaussian` and `CubicEase` the phase is ignored.
    pub fn sample_at(&mut self, t: f64) -> f64 {
        match self.kind {
            DistributionKind::Uniform => self.lcg.next_f64(),
            DistributionKind::Wave => wave(t, self.lcg.next_f64()),
            DistributionKind::Gaussian => self.gaussian(),
            DistributionKind::SmoothNoise => smooth_noise(t),
            DistributionKind::CubicEase => cubic_ease(self.lcg.next_f64()),
        }
    }

    /// Uniform primitive in [0, 1), independent of the configured kind.
    pub fn next_uniform(&mut self) -> f64 {
        self.lcg.next_f64()
    }

    fn gaussian(&mut self) -> f64 {
        let lcg = &mut self.lcg;
        polar_gaussian(|| lcg.next_f64())
    }
}

impl<C: Clock> RandomSource for ScalarRandomSource<C> {
    fn next(&mut self) -> f64 {
        ScalarRandomSource::next(self)
    }
}

/// Marsaglia polar method over a stream of uniform draws in [0, 1).
///
/// Gives up after [`MAX_GAUSSIAN_ATTEMPTS`] rejected pairs and returns `0.0`.
pub fn polar_gaussian(mut uniform: impl FnMut() -> f64) -> f64 {
    for _ in 0..MAX_GAUSSIAN_ATTEMPTS {
        let v1 = 2.0 * uniform() - 1.0;
        let v2 = 2.0 * uniform() - 1.0;
        let s = v1 * v1 + v2 * v2;
        if s < 1.0 && s != 0.0 {
            return v1 * (-2.0 * s.ln() / s).sqrt();
        }
    }

    warn!(
        "Gaussian draw exhausted {} attempts; returning 0.",
        MAX_GAUSSIAN_ATTEMPTS
    );
    0.0
}

/// Wave mix of a phase and a uniform draw.
#[inline]
pub fn wave(t: f64, uniform: f64) -> f64 {
    t.sin() * 0.5 + uniform * 0.5
}

/// Four-octave sine sum evaluated at `t`, in [-1, 1].
#[inline]
pub fn smooth_noise(t: f64) -> f64 {
    (t.sin() + (2.2 * t + 5.52).sin() + (2.9 * t + 0.93).sin() + (4.6 * t + 8.94).sin()) / 4.0
}

/// `3(1-t)²t + 3(1-t)t² + t³`.
#[inline]
pub fn cubic_ease(t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t + 3.0 * u * t * t + t * t * t
}
