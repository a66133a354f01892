use sluice_hydraulics::UnitSystem;
use uom::si::{f64::Time, time::hour};

use crate::{
    StormError,
    curve::{CURVE_HOURS, PEAK_HOUR, scs_ordinate},
};

/// Slack when deciding whether the window is a whole number of steps.
const STEP_SLACK: f64 = 1e-9;

/// Most samples a storm may have, one every 0.864 s over a full day.
pub const MAX_SAMPLES: usize = 100_000;

/// A design storm distributed over time with the SCS Type II/III curve.
///
/// The storm is centered on hour 12 and clipped to the 24-hour curve, so it
/// covers `[max(0, 12 − D/2), min(24, 12 + D/2)]`. Samples are taken every
/// `step` hours from the start; when the window is not a whole number of
/// steps one more sample past the end is included.
///
/// All sequences are computed on construction and share one index. A storm
/// with fewer than two samples (a zero duration) has empty sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct ScsStorm {
    rainfall: f64,
    duration: f64,
    step: f64,
    units: UnitSystem,
    time: Vec<f64>,
    ordinates: Vec<f64>,
    cumulative: Vec<f64>,
    hyetograph: Vec<f64>,
}

impl ScsStorm {
    /// Distributes `rainfall` (mm or in, per `units`) over a storm of the
    /// given duration.
    ///
    /// # Errors
    ///
    /// Returns a [`StormError`] if the rainfall is negative or not finite,
    /// the duration is outside 0 to 24 hours, or the step is not positive.
    /// A step that would need more than [`MAX_SAMPLES`] samples, or that is
    /// too small to advance the clock, is [`StormError::StepTooSmall`].
    pub fn new(
        rainfall: f64,
        duration: Time,
        step: Time,
        units: UnitSystem,
    ) -> Result<Self, StormError> {
        let duration = duration.get::<hour>();
        let step = step.get::<hour>();

        if !rainfall.is_finite() || rainfall < 0.0 {
            return Err(StormError::InvalidRainfall { depth: rainfall });
        }
        if !(0.0..=CURVE_HOURS).contains(&duration) {
            return Err(StormError::DurationOutOfRange { hours: duration });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(StormError::NonPositiveStep { hours: step });
        }

        let mut storm = Self {
            rainfall,
            duration,
            step,
            units,
            time: Vec::new(),
            ordinates: Vec::new(),
            cumulative: Vec::new(),
            hyetograph: Vec::new(),
        };

        let time = sample_times(duration, step)?;
        if time.len() < 2 {
            log::debug!("a {duration} h storm has no time steps; the hyetograph is empty");
            return Ok(storm);
        }

        let ordinates: Vec<f64> = time.iter().map(|&t| scs_ordinate(t)).collect();
        let first = ordinates[0];
        let span = ordinates[ordinates.len() - 1] - first;

        let cumulative: Vec<f64> = ordinates
            .iter()
            .map(|p| rainfall * (p - first) / span)
            .collect();

        let hyetograph = cumulative
            .iter()
            .scan(0.0, |previous, &depth| {
                let increment = depth - *previous;
                *previous = depth;
                Some(increment)
            })
            .collect();

        storm.time = time;
        storm.ordinates = ordinates;
        storm.cumulative = cumulative;
        storm.hyetograph = hyetograph;
        Ok(storm)
    }

    /// Total rainfall depth of the storm.
    #[must_use]
    pub fn rainfall(&self) -> f64 {
        self.rainfall
    }

    #[must_use]
    pub fn duration(&self) -> Time {
        Time::new::<hour>(self.duration)
    }

    #[must_use]
    pub fn step(&self) -> Time {
        Time::new::<hour>(self.step)
    }

    #[must_use]
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Sample times in hours on the 24-hour clock.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// `P(t)/P24` at each sample time.
    #[must_use]
    pub fn ordinates(&self) -> &[f64] {
        &self.ordinates
    }

    /// Rainfall depth fallen since the start of the storm.
    #[must_use]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Rainfall depth fallen during each time step.
    #[must_use]
    pub fn hyetograph(&self) -> &[f64] {
        &self.hyetograph
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Sample times for a storm of `duration` hours.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn sample_times(duration: f64, step: f64) -> Result<Vec<f64>, StormError> {
    let too_small = StormError::StepTooSmall {
        hours: step,
        duration,
    };
    let start = (PEAK_HOUR - duration / 2.0).max(0.0);
    let end = (PEAK_HOUR + duration / 2.0).min(CURVE_HOURS);

    let steps = (end - start) / step;
    if steps >= MAX_SAMPLES as f64 {
        return Err(too_small);
    }
    let whole = (steps + STEP_SLACK).floor();
    let count = whole as usize + 1 + usize::from(steps - whole > STEP_SLACK);
    if count > MAX_SAMPLES {
        return Err(too_small);
    }

    let time: Vec<f64> = (0..count).map(|k| start + k as f64 * step).collect();
    if time.windows(2).any(|w| w[1] <= w[0]) {
        return Err(too_small);
    }
    Ok(time)
}
