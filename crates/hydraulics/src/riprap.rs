//! Riprap stone sizing.
//!
//! A trial median stone diameter `D` sets the bed roughness
//! (`n = 0.0395·D^(1/6)`), which sets the normal depth of the design flow in
//! a wide channel and with it the bed shear. The stability number and safety
//! factor of a stone on the channel side slope follow. The design increases
//! `D` until that safety factor matches the target within tolerance.

use serde::{Deserialize, Serialize};
use sluice_core::{EquationProblem, Model, Observer};
use sluice_solvers::equation::step_search::{self, Action, Config, Event, Status};
use uom::si::{angle::radian, f64::Angle};

use crate::{DesignError, DomainError, UnitSystem, manning, section::ratio};

/// Safety factor used when a case does not specify one.
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.5;

/// A channel to be lined with riprap.
///
/// Angles serialize in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiprapInput {
    pub bottom_width: f64,
    pub discharge: f64,
    pub slope: f64,

    /// Angle of repose of the stone.
    pub friction_angle: Angle,

    /// Inclination of the side slope the stone rests on.
    pub bed_angle: Angle,

    pub specific_gravity: f64,

    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,

    #[serde(default)]
    pub units: UnitSystem,
}

fn default_safety_factor() -> f64 {
    DEFAULT_SAFETY_FACTOR
}

/// Manning roughness of a riprap bed with median stone diameter `diameter`.
#[must_use]
pub fn stone_roughness(diameter: f64) -> f64 {
    0.0395 * diameter.powf(1.0 / 6.0)
}

/// Forces on a stone of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoneStability {
    pub roughness: f64,
    pub flow_depth: f64,
    pub tractive_force: f64,
    pub stability_number: f64,
    pub safety_factor: f64,
}

/// Evaluates stone stability for a trial diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoneModel {
    input: RiprapInput,
}

impl StoneModel {
    #[must_use]
    pub fn new(input: RiprapInput) -> Self {
        Self { input }
    }
}

impl Model for StoneModel {
    type Input = f64;
    type Output = StoneStability;
    type Error = DomainError;

    fn call(&self, &diameter: &f64) -> Result<StoneStability, DomainError> {
        let input = &self.input;
        if diameter <= 0.0 {
            return Err(DomainError::NonPositiveDiameter { diameter });
        }
        if input.specific_gravity < 1.0 {
            return Err(DomainError::NonBuoyantStone {
                specific_gravity: input.specific_gravity,
            });
        }

        let gamma = input.units.water_specific_weight();
        let roughness = stone_roughness(diameter);
        let flow_depth = manning::normal_depth(
            roughness,
            input.bottom_width,
            input.discharge,
            input.slope,
            input.units,
        )?;
        let tractive_force = gamma * flow_depth * input.slope;
        let stability_number = ratio(
            21.0 * tractive_force,
            gamma * (input.specific_gravity - 1.0) * diameter,
            "stability number",
        )?;

        let bed = input.bed_angle.get::<radian>();
        let tan_friction = input.friction_angle.get::<radian>().tan();
        let safety_factor = ratio(
            bed.cos() * tan_friction,
            bed.sin() + stability_number * tan_friction,
            "side slope safety factor",
        )?;

        Ok(StoneStability {
            roughness,
            flow_depth,
            tractive_force,
            stability_number,
            safety_factor,
        })
    }
}

/// Residual is the target safety factor minus the one a stone achieves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyFactorTarget {
    pub safety_factor: f64,
}

impl EquationProblem<1> for SafetyFactorTarget {
    type Input = f64;
    type Output = StoneStability;
    type Error = DomainError;

    fn input(&self, x: &[f64; 1]) -> Result<f64, DomainError> {
        Ok(x[0])
    }

    fn residuals(&self, _diameter: &f64, stone: &StoneStability) -> Result<[f64; 1], DomainError> {
        Ok([self.safety_factor - stone.safety_factor])
    }
}

/// One trial diameter of the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiprapIteration {
    pub index: usize,
    pub diameter: f64,
    pub roughness: f64,
    pub flow_depth: f64,
    pub tractive_force: f64,
    pub stability_number: f64,
    pub safety_factor: f64,
    pub difference: f64,
    pub accepted: bool,
}

impl RiprapIteration {
    fn from_event(event: &Event<'_, f64, StoneStability>) -> Self {
        let stone = event.eval.output();
        Self {
            index: event.iter,
            diameter: event.x(),
            roughness: stone.roughness,
            flow_depth: stone.flow_depth,
            tractive_force: stone.tractive_force,
            stability_number: stone.stability_number,
            safety_factor: stone.safety_factor,
            difference: event.residual(),
            accepted: event.converged,
        }
    }
}

/// The outcome of a riprap design.
#[derive(Debug, Clone)]
pub struct RiprapDesign {
    pub status: Status,
    /// Median stone diameter at termination.
    pub diameter: f64,
    pub stone: StoneStability,
    pub iterations: Vec<RiprapIteration>,
}

impl RiprapDesign {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Finds the median stone diameter that reaches the target safety factor.
///
/// # Errors
///
/// Returns a [`DesignError::Domain`] if a trial diameter is not positive, the
/// stone is not denser than water, or a formula hits a zero denominator.
pub fn design(input: &RiprapInput, config: &Config) -> Result<RiprapDesign, DesignError> {
    design_observed(input, config, ())
}

/// Runs [`design`] while forwarding every search event to `observer`.
///
/// # Errors
///
/// Same as [`design`].
pub fn design_observed<Obs>(
    input: &RiprapInput,
    config: &Config,
    mut observer: Obs,
) -> Result<RiprapDesign, DesignError>
where
    Obs: for<'a> Observer<Event<'a, f64, StoneStability>, Action>,
{
    let model = StoneModel::new(*input);
    let problem = SafetyFactorTarget {
        safety_factor: input.safety_factor,
    };

    let mut iterations = Vec::new();
    let solution = step_search::solve(
        &model,
        &problem,
        config,
        |event: &Event<'_, f64, StoneStability>| {
            iterations.push(RiprapIteration::from_event(event));
            observer.observe(event)
        },
    )?;

    Ok(RiprapDesign {
        status: solution.status,
        diameter: solution.x,
        stone: solution.snapshot.output,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    fn textbook_channel() -> RiprapInput {
        RiprapInput {
            bottom_width: 18.0,
            discharge: 115.0,
            slope: 0.1,
            friction_angle: Angle::new::<degree>(42.0),
            bed_angle: Angle::new::<degree>(5.71),
            specific_gravity: 2.65,
            safety_factor: DEFAULT_SAFETY_FACTOR,
            units: UnitSystem::UsCustomary,
        }
    }

    #[test]
    fn roughness_grows_with_stone_size() {
        assert_relative_eq!(stone_roughness(1.0), 0.0395);
        assert_relative_eq!(stone_roughness(64.0), 0.079, max_relative = 1e-12);
    }

    #[test]
    fn first_trial_matches_hand_calculation() {
        let stone = StoneModel::new(textbook_channel())
            .call(&0.01)
            .expect("valid trial");

        assert_relative_eq!(stone.roughness, 0.018_334_275_892_770_48, max_relative = 1e-12);
        assert_relative_eq!(stone.flow_depth, 0.433_812_136_136_679_1, max_relative = 1e-12);
        assert_relative_eq!(stone.tractive_force, 2.706_987_729_492_878, max_relative = 1e-12);
        assert_relative_eq!(stone.stability_number, 55.212_453_690_122_81, max_relative = 1e-9);
        assert_relative_eq!(stone.safety_factor, 0.017_985_992_764_535_24, max_relative = 1e-9);
    }

    #[test]
    fn textbook_riprap_converges() {
        let design = design(&textbook_channel(), &Config::default()).expect("should design");

        assert!(design.is_converged());
        assert_relative_eq!(design.diameter, 1.66, epsilon = 1e-9);
        assert!((design.stone.safety_factor - 1.5).abs() < 0.01);
        assert_relative_eq!(design.stone.roughness, 0.04298, epsilon = 1e-5);
        assert_relative_eq!(design.stone.flow_depth, 0.72329, epsilon = 1e-5);
        assert_relative_eq!(design.stone.tractive_force, 4.51333, epsilon = 1e-5);
        assert_relative_eq!(design.stone.stability_number, 0.55455, epsilon = 1e-5);

        assert_eq!(design.iterations.len(), 166);
        let last = design.iterations[165];
        assert!(last.accepted);
        assert_relative_eq!(last.difference, 1.5 - last.safety_factor);
        assert!(!design.iterations[164].accepted);
    }

    #[test]
    fn safety_factor_rises_with_diameter() {
        let design = design(&textbook_channel(), &Config::default()).expect("should design");

        assert!(
            design
                .iterations
                .windows(2)
                .all(|pair| pair[1].safety_factor > pair[0].safety_factor)
        );
    }

    #[test]
    fn metric_case_converges() {
        let input = RiprapInput {
            bottom_width: 5.0,
            discharge: 10.0,
            slope: 0.02,
            friction_angle: Angle::new::<degree>(40.0),
            bed_angle: Angle::new::<degree>(3.0),
            units: UnitSystem::Metric,
            ..textbook_channel()
        };

        let design = design(&input, &Config::default()).expect("should design");

        assert!(design.is_converged());
        assert_relative_eq!(design.diameter, 0.26, epsilon = 1e-9);
        assert_eq!(design.iterations.len(), 26);
    }

    #[test]
    fn exhausted_budget_is_not_an_error() {
        let config = Config::default().with_max_iters(20);

        let design = design(&textbook_channel(), &config).expect("exhaustion is not an error");

        assert_eq!(design.status, Status::MaxIters);
        assert_eq!(design.iterations.len(), 21);
        assert_relative_eq!(design.diameter, 0.21, epsilon = 1e-9);
    }

    #[test]
    fn zero_start_diameter_is_a_domain_error() {
        let config = Config::new(0.0, 0.01, 0.01, 100).expect("valid config");

        let err = design(&textbook_channel(), &config).expect_err("zero diameter");

        assert!(matches!(
            err,
            DesignError::Domain(DomainError::NonPositiveDiameter { .. })
        ));
    }

    #[test]
    fn neutrally_buoyant_stone_has_no_stability_number() {
        let input = RiprapInput {
            specific_gravity: 1.0,
            ..textbook_channel()
        };

        let err = design(&input, &Config::default()).expect_err("SG of 1");

        assert!(matches!(
            err,
            DesignError::Domain(DomainError::ZeroDenominator {
                quantity: "stability number"
            })
        ));
    }

    #[test]
    fn floating_stone_is_rejected() {
        let input = RiprapInput {
            specific_gravity: 0.9,
            ..textbook_channel()
        };

        assert!(matches!(
            design(&input, &Config::default()),
            Err(DesignError::Domain(DomainError::NonBuoyantStone { .. }))
        ));
    }

    #[test]
    fn observer_sees_every_trial() {
        let mut seen = 0;
        let design = design_observed(
            &textbook_channel(),
            &Config::default(),
            |_: &Event<'_, f64, StoneStability>| {
                seen += 1;
                None
            },
        )
        .expect("should design");

        assert_eq!(seen, design.iterations.len());
    }

    #[test]
    fn safety_factor_defaults_when_omitted() {
        let input: RiprapInput = toml::from_str(
            r#"
            bottom_width = 18.0
            discharge = 115.0
            slope = 0.1
            friction_angle = 0.7330382858376184
            bed_angle = 0.09965830028887622
            specific_gravity = 2.65
            "#,
        )
        .expect("valid input");

        assert_relative_eq!(input.safety_factor, DEFAULT_SAFETY_FACTOR);
        assert_eq!(input.units, UnitSystem::Metric);
        assert_relative_eq!(input.friction_angle.get::<degree>(), 42.0, epsilon = 1e-9);
    }
}
