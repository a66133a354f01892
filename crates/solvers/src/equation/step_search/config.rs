use serde::Deserialize;
use thiserror::Error;

/// Configuration for the step search solver.
///
/// Deserialization goes through [`Config::new`], so a loaded config is always
/// valid. Missing fields take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    start: f64,
    step: f64,
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a step search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start must be finite")]
    Start,

    #[error("step must be finite and positive")]
    Step,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: 0.01,
            step: 0.01,
            tolerance: 0.01,
            max_iters: 100_000,
        }
    }
}

impl Config {
    /// Creates a new config with validated values.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not finite, or if `step` or `tolerance`
    /// is not finite and positive.
    pub fn new(
        start: f64,
        step: f64,
        tolerance: f64,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !start.is_finite() {
            return Err(ConfigError::Start);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            start,
            step,
            tolerance,
            max_iters,
        })
    }

    /// Returns the first `x` evaluated.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the fixed increment between samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the residual magnitude below which the search has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration index at which the search gives up.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns a copy with a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tolerance` is not finite and positive.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(self.start, self.step, tolerance, self.max_iters)
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    start: f64,
    step: f64,
    tolerance: f64,
    max_iters: usize,
}

impl Default for RawConfig {
    fn default() -> Self {
        let config = Config::default();
        Self {
            start: config.start,
            step: config.step,
            tolerance: config.tolerance,
            max_iters: config.max_iters,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Config::new(raw.start, raw.step, raw.tolerance, raw.max_iters)
    }
}
