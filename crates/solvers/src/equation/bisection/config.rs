use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("residual_tol must be finite and non-negative")]
    Residual,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, residual_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            residual_tol,
        })
    }

    /// Returns the maximum number of halvings.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bracket width below which the search stops.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the residual magnitude below which the search stops.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
