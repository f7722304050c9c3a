//! Record an exhaustive sweep and inspect it.
//!
//! Demonstrates: set center → run driver → query extremes → extract a slice
//! through the minimum → freeze into a shareable record.
//!
//! Set `RUST_LOG=debug` to see the recorder's sweep events.

use sweeplog_bench::reference_sweep;
use sweeplog_monitor::ExhaustiveLog;
use sweeplog_test_utils::fixtures::{NoisyMetric, QuadraticBowl};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== sweeplog exhaustive sweep ===\n");

    let sweep = reference_sweep();
    let mut metric = NoisyMetric::new(QuadraticBowl::new(vec![0.2, -3.0, 1.0]), 0.05, 42);
    let mut log = ExhaustiveLog::new();
    log.set_center(sweep.center());

    let outcome = sweep.run(&mut log, |p| metric.evaluate(p)).unwrap();
    tracing::info!(steps = outcome.steps, "sweep finished");

    println!("  grid lengths:   {:?}", log.data_lengths());
    println!("  cells:          {}", log.data_size());
    println!(
        "  minimum:        {:.4} at {:?}",
        outcome.min_value, outcome.min_position
    );
    println!(
        "  maximum:        {:.4} at {:?}",
        outcome.max_value, outcome.max_position
    );

    let slice = log
        .slice_2d(&outcome.min_position, &[false, true, true])
        .unwrap();
    println!(
        "\n  slice through minimum (axes {} x {}, {} x {}):",
        slice.row_axis(),
        slice.col_axis(),
        slice.rows(),
        slice.cols()
    );
    for row in slice.iter_rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:8.3}")).collect();
        println!("    {}", cells.join(" "));
    }

    let record = log.finish().unwrap();
    let m = record.metrics();
    println!(
        "\n  recorded {} steps into {} of {} cells in {} us",
        m.steps_recorded, m.cells_written, m.expected_cells, m.elapsed_us
    );
}
