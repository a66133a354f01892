//! Channel depth design.
//!
//! Given a roughness, bed slope, design discharge and cross-section shape,
//! the design raises the flow depth in fixed increments until Manning's
//! discharge matches the design discharge within tolerance.
//!
//! The search runs on [`step_search`], so the starting depth, increment,
//! tolerance and iteration budget all come from the [`Config`] passed to each
//! call. An increment that is coarse relative to the tolerance can step over
//! the answer. The design then keeps going until the budget is spent and
//! reports [`Status::MaxIters`] along with the two depths that bracket the
//! answer; [`ChannelDesign::refine`] narrows that bracket on request.


use serde::{Deserialize, Serialize};
use sluice_core::{EquationProblem, Model, Observer};
use sluice_solvers::equation::{
    bisection,
    step_search::{self, Action, Config, Event, Status},
};

use crate::{
    DesignError, DomainError, UnitSystem,
    manning::{self, Turbulence},
    section::{CrossSection, Section, Shape},
};

/// What the channel has to convey, and how it is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelInput {
    /// Manning roughness coefficient `n`.
    pub roughness: f64,

    /// Bed slope `S`.
    pub slope: f64,

    /// Design discharge.
    pub discharge: f64,

    pub shape: Shape,

    #[serde(default)]
    pub units: UnitSystem,
}

/// Uniform flow through a section at a given depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelFlow {
    pub area: f64,
    pub hydraulic_radius: f64,
    pub velocity: f64,
    pub discharge: f64,
}

/// Manning's equation as a model from a section to the flow it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManningFlow {
    roughness: f64,
    slope: f64,
    units: UnitSystem,
}

impl ManningFlow {
    #[must_use]
    pub fn new(roughness: f64, slope: f64, units: UnitSystem) -> Self {
        Self {
            roughness,
            slope,
            units,
        }
    }
}

impl Model for ManningFlow {
    type Input = Section;
    type Output = ChannelFlow;
    type Error = DomainError;

    fn call(&self, section: &Section) -> Result<ChannelFlow, DomainError> {
        let area = section.area()?;
        let hydraulic_radius = section.hydraulic_radius()?;
        let velocity = manning::velocity(self.roughness, hydraulic_radius, self.slope, self.units)?;

        Ok(ChannelFlow {
            area,
            hydraulic_radius,
            velocity,
            discharge: area * velocity,
        })
    }
}

/// Puts a trial depth on the section; the residual is the discharge still
/// missing, `Q_design − Q`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DischargeTarget {
    section: Section,
    discharge: f64,
}

impl DischargeTarget {
    #[must_use]
    pub fn new(section: Section, discharge: f64) -> Self {
        Self { section, discharge }
    }
}

impl EquationProblem<1> for DischargeTarget {
    type Input = Section;
    type Output = ChannelFlow;
    type Error = DomainError;

    fn input(&self, x: &[f64; 1]) -> Result<Section, DomainError> {
        let mut section = self.section;
        section.set_depth(x[0])?;
        Ok(section)
    }

    fn residuals(&self, _section: &Section, flow: &ChannelFlow) -> Result<[f64; 1], DomainError> {
        Ok([self.discharge - flow.discharge])
    }
}

/// One trial depth of the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignIteration {
    pub index: usize,
    pub depth: f64,
    pub area: f64,
    pub hydraulic_radius: f64,
    pub velocity: f64,
    pub discharge: f64,
    /// Design discharge minus computed discharge.
    pub difference: f64,
    pub accepted: bool,
}

impl DesignIteration {
    fn from_event(event: &Event<'_, Section, ChannelFlow>) -> Self {
        let flow = event.eval.output();
        Self {
            index: event.iter,
            depth: event.x(),
            area: flow.area,
            hydraulic_radius: flow.hydraulic_radius,
            velocity: flow.velocity,
            discharge: flow.discharge,
            difference: event.residual(),
            accepted: event.converged,
        }
    }
}

/// The outcome of a channel design.
#[derive(Debug, Clone)]
pub struct ChannelDesign {
    /// [`Status::Converged`], or [`Status::MaxIters`] when the depth is only
    /// the last one tried.
    pub status: Status,

    /// Flow depth at termination.
    pub depth: f64,

    /// Flow at `depth`.
    pub flow: ChannelFlow,

    /// Every trial in search order.
    pub iterations: Vec<DesignIteration>,

    /// The last pair of consecutive depths between which the discharge
    /// difference went from positive to negative.
    pub sign_change: Option<[f64; 2]>,

    /// Turbulence check at `depth`.
    pub turbulence: Turbulence,

    input: ChannelInput,
}

/// A depth found by bisecting the bracket of a [`ChannelDesign`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refinement {
    pub status: bisection::Status,
    pub depth: f64,
    pub flow: ChannelFlow,
    pub difference: f64,
    pub iters: usize,
}

impl ChannelDesign {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the input the design was run with.
    #[must_use]
    pub fn input(&self) -> &ChannelInput {
        &self.input
    }

    /// Bisects between the depths recorded in [`sign_change`](Self::sign_change).
    ///
    /// Returns `Ok(None)` when the search never crossed the design discharge.
    /// The design itself is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry or flow cannot be evaluated inside
    /// the bracket.
    pub fn refine(&self, config: &bisection::Config) -> Result<Option<Refinement>, DesignError> {
        let Some(bracket) = self.sign_change else {
            return Ok(None);
        };

        let input = &self.input;
        let model = ManningFlow::new(input.roughness, input.slope, input.units);
        let problem = DischargeTarget::new(input.shape.at_depth(bracket[0])?, input.discharge);

        let solution = bisection::solve(&model, &problem, bracket, config)?;

        Ok(Some(Refinement {
            status: solution.status,
            depth: solution.x,
            flow: solution.snapshot.output,
            difference: solution.residual,
            iters: solution.iters,
        }))
    }
}

/// Finds the flow depth at which the channel carries the design discharge.
///
/// # Errors
///
/// Returns an error if the shape dimensions are invalid or the geometry or
/// flow cannot be evaluated at some trial depth (for example a circular
/// section filled past its diameter).
pub fn design(input: &ChannelInput, config: &Config) -> Result<ChannelDesign, DesignError> {
    design_observed(input, config, ())
}

/// Runs [`design`] while forwarding every search event to `observer`.
///
/// # Errors
///
/// Same as [`design`].
pub fn design_observed<Obs>(
    input: &ChannelInput,
    config: &Config,
    mut observer: Obs,
) -> Result<ChannelDesign, DesignError>
where
    Obs: for<'a> Observer<Event<'a, Section, ChannelFlow>, Action>,
{
    input.shape.validate()?;

    let model = ManningFlow::new(input.roughness, input.slope, input.units);
    let problem = DischargeTarget::new(input.shape.at_depth(config.start())?, input.discharge);

    let mut iterations = Vec::new();
    let solution = step_search::solve(
        &model,
        &problem,
        config,
        |event: &Event<'_, Section, ChannelFlow>| {
            iterations.push(DesignIteration::from_event(event));
            observer.observe(event)
        },
    )?;
    let flow = solution.snapshot.output;

    let turbulence = manning::check_turbulent(
        input.roughness,
        flow.hydraulic_radius,
        input.slope,
        input.units,
    );
    if !turbulence.turbulent {
        log::debug!(
            "flow at depth {} is not fully turbulent (n^6·sqrt(RS) = {:e})",
            solution.x,
            turbulence.value
        );
    }

    Ok(ChannelDesign {
        status: solution.status,
        depth: solution.x,
        flow,
        iterations,
        sign_change: solution.sign_change.map(|crossing| crossing.bracket),
        turbulence,
        input: *input,
    })
}
