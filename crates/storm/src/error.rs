use thiserror::Error;

/// Invalid storm parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StormError {
    #[error("storm duration must be between 0 and 24 hours, got {hours} h")]
    DurationOutOfRange { hours: f64 },

    #[error("time step must be finite and positive, got {hours} h")]
    NonPositiveStep { hours: f64 },

    #[error("time step of {hours} h is too small for a {duration} h storm")]
    StepTooSmall { hours: f64, duration: f64 },

    #[error("rainfall depth must be finite and non-negative, got {depth}")]
    InvalidRainfall { depth: f64 },
}
