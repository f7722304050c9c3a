use sweeplog::prelude::*;
use sweeplog_test_utils::fixtures::QuadraticBowl;
use sweeplog_test_utils::ExhaustiveSweep;

#[test]
fn prelude_covers_a_full_sweep() {
    let sweep = ExhaustiveSweep::new(vec![0.0, 0.0, 0.0], vec![10, 10, 1], vec![0.1, 1.0, 1.0]);
    let bowl = QuadraticBowl::new(vec![0.0, 0.0, 1.0]);
    let mut log = ExhaustiveLog::new();
    log.set_center(sweep.center());
    let outcome = sweep.run(&mut log, |p| bowl.evaluate(p)).unwrap();
    assert_eq!(log.state(), SweepState::Complete);

    let record: SweepRecord<f64> = log.finish().unwrap();
    assert_eq!(record.grid().size(), 1323);
    assert_eq!(record.get_at(&outcome.min_position).unwrap(), 0.0);
    // Worst corner: (+-1)^2 + (+-10)^2 + (-1 - 1)^2.
    assert_eq!(outcome.max_value, 105.0);
    assert_eq!(record.get_at(&outcome.max_position).unwrap(), 105.0);
}

#[test]
fn facade_modules_resolve() {
    let spec = sweeplog::array::GridSpec::centered(&[0.0], &[1], &[1.0]).unwrap();
    let grid = sweeplog::array::GridArray::<f64>::from_spec(&spec).unwrap();
    let err = sweeplog::slice::extract_slice_2d(&grid, &[0.0], &[true]).unwrap_err();
    assert_eq!(
        err,
        sweeplog::types::GridError::TooFewVariableDimensions { count: 1 }
    );
}
