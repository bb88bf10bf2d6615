//! Audio-reactive bar heights from layered sine waves with neighbour smoothing.
use crate::error::{ensure_positive, Error, Result};
use crate::source::{DistributionKind, RandomSource, ScalarRandomSource};

/// Configuration for an [`AudioVisualizer`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioConfig {
    pub bar_count: usize,
    /// Resting height; also the lower clamp for every bar.
    pub base_height: f64,
    /// Phase advance per generated frame.
    pub phase_step: f64,
    pub smoothing_passes: usize,
    /// Scale of an extra `|source|` term per bar. Zero keeps the output fully deterministic.
    pub jitter: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            bar_count: 20,
            base_height: 0.3,
            phase_step: 0.1,
            smoothing_passes: 3,
            jitter: 0.0,
        }
    }
}

impl AudioConfig {
    pub fn new(bar_count: usize) -> Self {
        Self {
            bar_count,
            ..Default::default()
        }
    }

    pub fn with_base_height(mut self, base_height: f64) -> Self {
        self.base_height = base_height;
        self
    }

    pub fn with_phase_step(mut self, phase_step: f64) -> Self {
        self.phase_step = phase_step;
        self
    }

    pub fn with_smoothing_passes(mut self, passes: usize) -> Self {
        self.smoothing_passes = passes;
        self
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.bar_count == 0 {
            return Err(Error::InvalidConfig("bar_count must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.base_height) {
            return Err(Error::InvalidConfig(format!(
                "base_height must be in [0, 1] (got {})",
                self.base_height
            )));
        }
        ensure_positive("phase_step", self.phase_step)?;
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "jitter must be finite and >= 0 (got {})",
                self.jitter
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct AudioVisualizer<S = ScalarRandomSource> {
    config: AudioConfig,
    phase: f64,
    last_bars: Vec<f64>,
    source: S,
}

impl AudioVisualizer<ScalarRandomSource> {
    /// Visualizer with a clock-driven [`DistributionKind::Wave`] source.
    pub fn new(config: AudioConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid audio configuration");
        Self {
            config,
            phase: 0.0,
            last_bars: vec![config.base_height; config.bar_count],
            source: ScalarRandomSource::new(DistributionKind::Wave),
        }
    }

    pub fn try_new(config: AudioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<S: RandomSource> AudioVisualizer<S> {
    pub fn with_source<T: RandomSource>(self, source: T) -> AudioVisualizer<T> {
        AudioVisualizer {
            config: self.config,
            phase: self.phase,
            last_bars: self.last_bars,
            source,
        }
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Most recent frame, or the resting heights before the first one.
    pub fn last_bars(&self) -> &[f64] {
        &self.last_bars
    }

    /// Advance the phase and compute one frame of bar heights in `[base_height, 1]`.
    pub fn generate_bars(&mut self) -> &[f64] {
        let cfg = self.config;
        self.phase += cfg.phase_step;
        let n = cfg.bar_count;

        let mut bars: Vec<f64> = (0..n)
            .map(|i| {
                let position = i as f64 / n as f64;
                let wave1 = (self.phase + position * 6.28).sin() * 0.15;
                let wave2 = (self.phase * 0.5 + position * 12.56).sin() * 0.1;
                let jitter = if cfg.jitter > 0.0 {
                    self.source.next_unit() * cfg.jitter
                } else {
                    0.0
                };
                cfg.base_height + wave1 + wave2 + jitter
            })
            .collect();

        if n >= 3 {
            for _ in 0..cfg.smoothing_passes {
                for i in 1..n - 1 {
                    let avg = (bars[i - 1] + bars[i + 1]) / 2.0;
                    bars[i] = bars[i] * 0.7 + avg * 0.3;
                }
            }
        }

        for bar in bars.iter_mut() {
            *bar = bar.clamp(cfg.base_height, 1.0);
        }

        self.last_bars = bars;
        &self.last_bars
    }
}
