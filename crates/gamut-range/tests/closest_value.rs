//! End-to-end closest-value scenarios across all backends.

use gamut_core::{RangeError, RangeProperty};
use gamut_range::{
    CompositeRange, ContinuousRange, DiscreteSetRange, LinearDiscreteRange, Range, StepAnchor,
};
use gamut_test_utils::{
    boxed, canonical_composite, init_logging, mixed_composite, RecordingListener, CANONICAL_QUERY,
};

// ── Reference values ────────────────────────────────────────────

#[test]
fn continuous_reference_values() {
    init_logging();
    let r = ContinuousRange::new(2, 10).unwrap();
    assert_eq!(r.find_closest_value(1), 2);
    assert_eq!(r.find_closest_value(15), 10);
    assert_eq!(r.find_closest_value(5), 5);
}

#[test]
fn linear_reference_value() {
    init_logging();
    let r = LinearDiscreteRange::new(900.0f32, 1000.0, 1.0).unwrap();
    assert_eq!(r.find_closest_value(905.5), 906.0);
}

#[test]
fn discrete_reference_values() {
    init_logging();
    let r = DiscreteSetRange::new([1, 5, 9]).unwrap();
    assert_eq!(r.find_closest_value(6), 5);
    assert_eq!(r.find_closest_value(7), 5);
}

#[test]
fn canonical_composite_picks_stepped_member() {
    init_logging();
    let c = canonical_composite();
    let candidates: Vec<f32> = c.candidates(CANONICAL_QUERY).collect();
    assert_eq!(candidates, vec![800.0, 906.0]);
    assert_eq!(c.find_closest_value(CANONICAL_QUERY), 906.0);
}

#[test]
fn composite_of_composites() {
    init_logging();
    let outer = CompositeRange::new(vec![
        boxed(mixed_composite()),
        boxed(
            LinearDiscreteRange::new(100.0, 200.0, 10.0)
                .unwrap()
                .with_anchor(StepAnchor::Minimum),
        ),
    ])
    .unwrap();
    assert_eq!(outer.min_value(), 0.0);
    assert_eq!(outer.max_value(), 200.0);
    assert_eq!(outer.find_closest_value(78.0), 60.0);
    assert_eq!(outer.find_closest_value(83.0), 100.0);
    assert_eq!(outer.find_closest_value(144.0), 140.0);
    assert_eq!(outer.find_closest_value(26.0), 25.0);
}

// ── Contract properties ─────────────────────────────────────────

fn every_kind() -> Vec<Box<dyn Range<f64>>> {
    vec![
        boxed(ContinuousRange::new(-3.0, 3.0).unwrap()),
        boxed(DiscreteSetRange::new([-8.0, -1.0, 0.5, 6.0]).unwrap()),
        boxed(LinearDiscreteRange::new(-6.0, 6.0, 1.5).unwrap()),
        boxed(
            LinearDiscreteRange::new(0.5, 8.5, 2.0)
                .unwrap()
                .with_anchor(StepAnchor::Minimum),
        ),
        boxed(mixed_composite()),
    ]
}

#[test]
fn closest_value_is_always_admissible() {
    init_logging();
    for range in every_kind() {
        for i in -400..=400 {
            let v = i as f64 * 0.25;
            let c = range.find_closest_value(v);
            assert!(range.is_in_range(c), "{range:?}: closest({v}) = {c}");
            assert!(range.is_correct(c), "{range:?}: is_correct({c})");
        }
    }
}

#[test]
fn admissible_values_are_fixed_points() {
    init_logging();
    let set = DiscreteSetRange::new([-8.0, -1.0, 0.5, 6.0]).unwrap();
    for &v in set.values() {
        assert!(set.is_correct(v));
    }
    let stepped = LinearDiscreteRange::new(-6.0, 6.0, 1.5).unwrap();
    for k in -4..=4 {
        let v = k as f64 * 1.5;
        assert_eq!(stepped.find_closest_value(v), v);
    }
}

// ── Error surface ───────────────────────────────────────────────

#[test]
fn empty_domains_are_reported_not_defaulted() {
    init_logging();
    let err = DiscreteSetRange::<f64>::new(Vec::new()).unwrap_err();
    assert_eq!(err, RangeError::EmptyDomain);
    let err = CompositeRange::<f64>::new(Vec::new()).unwrap_err();
    assert_eq!(err, RangeError::EmptyComposite);
}

#[test]
fn invalid_configurations_fail_fast() {
    init_logging();
    assert!(ContinuousRange::new(10.0, 2.0).is_err());
    assert!(LinearDiscreteRange::new(0.0, 1.0, 0.0).is_err());
    assert!(DiscreteSetRange::new([3, 1]).is_err());
}

// ── Change notification ─────────────────────────────────────────

#[test]
fn mutators_notify_their_listeners() {
    init_logging();
    let recorder = RecordingListener::new();

    let mut stepped = LinearDiscreteRange::new(0.0f32, 10.0, 1.0).unwrap();
    let mut set = DiscreteSetRange::new([1, 2, 3]).unwrap();
    stepped.on_change(recorder.callback());
    set.on_change(recorder.callback());

    stepped.set_value_step(2.5).unwrap();
    set.set_values([4, 8]).unwrap();
    assert!(stepped.set_value_step(0.0).is_err());

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].range, stepped.instance_id());
    assert_eq!(events[0].property, RangeProperty::ValueStep);
    assert_eq!(events[1].range, set.instance_id());
    assert_eq!(events[1].property, RangeProperty::DiscreteValues);

    assert_eq!(stepped.find_closest_value(6.0), 5.0);
    assert_eq!(set.find_closest_value(7), 8);

    recorder.clear();
    assert_eq!(recorder.count(), 0);
}
