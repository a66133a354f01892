use approx::assert_relative_eq;
use sluice_hydraulics::{
    DesignError, DomainError, UnitSystem,
    channel::{self, ChannelInput},
    section::{CrossSection, Shape},
};
use sluice_solvers::equation::step_search::{Config, Status};

fn pipe(discharge: f64) -> ChannelInput {
    ChannelInput {
        roughness: 0.013,
        slope: 0.005,
        discharge,
        shape: Shape::Circular { diameter: 0.6 },
        units: UnitSystem::Metric,
    }
}

#[test]
fn small_budget_reports_max_iters_with_a_trace() {
    let config = Config::default().with_max_iters(10);

    let design = channel::design(&pipe(0.3), &config).expect("exhaustion is not an error");

    assert_eq!(design.status, Status::MaxIters);
    assert_eq!(design.iterations.len(), 11);
    assert_relative_eq!(design.depth, 0.11, epsilon = 1e-9);
    assert!(design.iterations.iter().all(|it| !it.accepted));
}

#[test]
fn pipe_flowing_full_is_valid_geometry() {
    let full = Shape::Circular { diameter: 0.6 }.at_depth(0.6).expect("full pipe");

    assert_relative_eq!(full.area().expect("area"), std::f64::consts::PI * 0.09, epsilon = 1e-12);
    assert_relative_eq!(full.hydraulic_radius().expect("radius"), 0.15, epsilon = 1e-12);
}

#[test]
fn pipe_too_small_for_the_flow_fails() {
    let err = channel::design(&pipe(50.0), &Config::default()).expect_err("cannot carry it");

    assert!(matches!(
        err,
        DesignError::Domain(DomainError::DepthExceedsDiameter { .. })
    ));
}
