use approx::assert_relative_eq;
use sluice_hydraulics::{
    UnitSystem,
    channel::{self, ChannelInput},
    riprap,
    section::Shape,
};
use sluice_solvers::equation::{bisection, step_search};

use integration_tests::{TEXTBOOK, parse};

#[test]
fn textbook_cases_load() {
    let cases = parse(TEXTBOOK).expect("cases parse");

    assert_eq!(cases.channel.input.shape, Shape::Triangular { side_slope: 1.0 });
    assert_relative_eq!(cases.channel.search.tolerance(), 0.1);
    assert_relative_eq!(cases.channel.search.step(), 0.01);
    assert_eq!(cases.channel.search.max_iters(), 100_000);
    assert_relative_eq!(cases.riprap.safety_factor, 1.5);
    assert_eq!(cases.storm.units, UnitSystem::UsCustomary);
}

#[test]
fn triangular_ditch_depth() {
    let cases = parse(TEXTBOOK).expect("cases parse");

    let design = channel::design(&cases.channel.input, &cases.channel.search).expect("designs");

    assert!(design.is_converged());
    assert_relative_eq!(design.depth, 2.38, epsilon = 1e-9);
    assert_eq!(design.iterations.len(), 238);
    assert!((design.flow.discharge - 30.0).abs() < 0.1);

    // The bracket holds a depth that carries exactly the design discharge.
    let refined = design
        .refine(&bisection::Config::default())
        .expect("bracket evaluates")
        .expect("bracket recorded");
    assert!(refined.depth > 2.37 && refined.depth < 2.38);
    assert_relative_eq!(refined.flow.discharge, 30.0, epsilon = 1e-6);
}

#[test]
fn riprap_stone_size() {
    let cases = parse(TEXTBOOK).expect("cases parse");

    let design = riprap::design(&cases.riprap, &step_search::Config::default()).expect("designs");

    assert!(design.is_converged());
    assert_relative_eq!(design.diameter, 1.66, epsilon = 1e-9);
    assert_eq!(design.iterations.len(), 166);
    assert!((design.stone.safety_factor - 1.5).abs() < 0.01);
}

#[test]
fn three_hour_storm() {
    let cases = parse(TEXTBOOK).expect("cases parse");

    let storm = cases.storm.build().expect("valid storm");

    assert_eq!(storm.len(), 13);
    assert_relative_eq!(storm.hyetograph().iter().sum::<f64>(), 6.8, epsilon = 1e-9);
    assert!(storm.cumulative().windows(2).all(|w| w[1] >= w[0]));
    assert!(storm.to_string().contains("Rainfall: 6.8 in"));
}

#[test]
fn legacy_dimensions_pick_the_same_channel() {
    let cases = parse(TEXTBOOK).expect("cases parse");
    let input = ChannelInput {
        shape: Shape::from_dimensions(0.0, 1.0).expect("triangle"),
        ..cases.channel.input
    };

    let legacy = channel::design(&input, &cases.channel.search).expect("designs");

    assert_relative_eq!(legacy.depth, 2.38, epsilon = 1e-9);
}

#[test]
fn invalid_search_settings_are_rejected_on_load() {
    let text = TEXTBOOK.replace("tolerance = 0.1", "tolerance = -0.1");

    let err = parse(&text).expect_err("negative tolerance");

    assert!(err.to_string().contains("tolerance"));
}
