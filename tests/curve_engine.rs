use std::sync::Arc;

use transformcurve::access::principal::Principal;
use transformcurve::circle::circlecomponent::CircleComponent;
use transformcurve::curveerror::CurveError;
use transformcurve::math::fixedpoint::{
    Fixed,
    WAD
};
use transformcurve::registry::curveobserver::CurveEventLog;
use transformcurve::transformcurve::TransformCurve;

fn circle(r: i64, f: i64, p: i64) -> CircleComponent {
    CircleComponent::new(Fixed::from_int(r), Fixed::from_int(f), Fixed::from_int(p)).unwrap()
}

fn deploy() -> (Principal, TransformCurve, Arc<CurveEventLog>) {
    let deployer = Principal::new();
    let log = Arc::new(CurveEventLog::new());
    let mut engine = TransformCurve::initialize(deployer, Some(1_000));
    engine.subscribe(log.clone());
    (deployer, engine, log)
}

#[test]
fn linear_space_fixture_over_empty_curve() {
    let (_, engine, _) = deploy();
    let points = engine
        .get_linear_space(&[], 11, 11, 0, Fixed::ZERO, Fixed::from_int(50))
        .unwrap();
    let pairs: Vec<(i128, i128)> = points
        .iter()
        .map(|p| (p.x().raw() / WAD, p.y().raw()))
        .collect();
    assert_eq!(
        pairs,
        vec![(0, 0), (5, 0), (10, 0), (15, 0), (20, 0), (25, 0), (30, 0), (35, 0), (40, 0), (45, 0), (50, 0)]
    );
    assert!(points.iter().all(|p| p.x().raw() % WAD == 0));
}

#[test]
fn linear_space_pages_and_remainder() {
    let (_, engine, _) = deploy();
    let components = [circle(1, 3, 0)];
    let full = engine
        .get_linear_space(&components, 10, 10, 0, Fixed::ZERO, Fixed::from_int(90))
        .unwrap();

    let mut collected = Vec::new();
    for page in 0..3 {
        let chunk = engine
            .get_linear_space(&components, 10, 4, page, Fixed::ZERO, Fixed::from_int(90))
            .unwrap();
        assert_eq!(chunk.len(), if page < 2 { 4 } else { 2 });
        collected.extend(chunk);
    }
    assert_eq!(collected, full);

    let beyond = engine
        .get_linear_space(&components, 10, 4, 3, Fixed::ZERO, Fixed::from_int(90))
        .unwrap();
    assert!(beyond.is_empty());
}

#[test]
fn linear_space_rejects_bad_ranges() {
    let (_, engine, _) = deploy();
    let one = Fixed::ONE;
    assert!(matches!(engine.get_linear_space(&[], 0, 1, 0, Fixed::ZERO, one), Err(CurveError::InvalidRange(_))));
    assert!(matches!(engine.get_linear_space(&[], 4, 0, 0, Fixed::ZERO, one), Err(CurveError::InvalidRange(_))));
    assert!(matches!(engine.get_linear_space(&[], 4, 1, 0, one, Fixed::ZERO), Err(CurveError::InvalidRange(_))));
}

#[test]
fn ephemeral_curve_matches_reference_values() {
    let (_, engine, log) = deploy();
    let (xs, ys) = engine
        .get_ephemeral_curve(
            &[Fixed::ONE; 3],
            &[Fixed::from_int(1), Fixed::from_int(2), Fixed::from_int(3)],
            &[Fixed::ZERO; 3],
        )
        .unwrap();
    assert_eq!(xs, vec![Fixed::ZERO, Fixed::ONE, Fixed::from_int(2)]);
    for (x, y) in xs.iter().zip(ys.iter()) {
        let x = x.to_f64();
        let expected: f64 = [1.0f64, 2.0, 3.0].iter().map(|f| (f * x).to_radians().sin()).sum();
        assert!((y.to_f64() - expected).abs() < 1e-12);
    }
    assert!(log.is_empty());
    assert!(engine.registry().is_empty());
}

#[test]
fn ephemeral_curve_length_mismatch_mutates_nothing() {
    let (_, engine, log) = deploy();
    let err = engine
        .get_ephemeral_curve(&[Fixed::ONE, Fixed::ONE], &[Fixed::ONE], &[Fixed::ZERO, Fixed::ZERO])
        .unwrap_err();
    assert_eq!(err, CurveError::LengthMismatch { radii: 2, frequencies: 1, phases: 2 });
    assert!(engine.registry().is_empty());
    assert!(log.is_empty());
}

#[test]
fn set_curve_is_idempotent() {
    let (deployer, engine, log) = deploy();
    let components = vec![circle(1, 1, 0), circle(2, 5, 90)];
    let first = engine.set_curve(&deployer, 11, 64, components.clone()).unwrap();
    let second = engine.set_curve(&deployer, 11, 64, components).unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.registry().len(), 1);
    assert_eq!(log.len(), 1);
    assert_eq!(log.events()[0].curve_id(), first);
}

#[test]
fn stored_curve_round_trips_by_identifier() {
    let (deployer, engine, _) = deploy();
    let components = vec![circle(3, 2, 45)];
    let id = engine.set_curve(&deployer, 1, 12, components.clone()).unwrap();
    let stored = engine.get_curve(&id).unwrap();
    assert_eq!(stored.components(), components.as_slice());
    assert_eq!(stored.curve_id(), id);
}

#[test]
fn unknown_identifier_is_not_found() {
    let (deployer, engine, _) = deploy();
    let id = engine.set_curve(&deployer, 1, 12, vec![]).unwrap();
    let other = TransformCurve::initialize(deployer, None);
    assert_eq!(other.get_curve(&id), Err(CurveError::NotFound(id)));
}

#[test]
fn owner_gate_versus_open_submission() {
    let (deployer, mut engine, log) = deploy();
    let stranger = Principal::new();

    assert_eq!(engine.set_sample_bound(&stranger, Some(1)), Err(CurveError::Unauthorized(stranger)));
    assert_eq!(engine.sample_bound(), Some(1_000));

    let id = engine.set_curve(&stranger, 0, 3, vec![circle(1, 1, 1)]).unwrap();
    assert!(engine.registry().contains(&id));
    assert_eq!(log.len(), 1);

    engine.set_sample_bound(&deployer, None).unwrap();
    assert_eq!(engine.sample_bound(), None);
}
