use proptest::prelude::*;
use sweeplog_array::{GridArray, GridSpec};
use sweeplog_slice::{extract_slice, extract_slice_2d, VariableAxes};

/// Fill a grid with values derived from each cell's position so any
/// mis-addressed read shows up as a mismatch.
fn filled(spec: &GridSpec) -> GridArray<f64> {
    let mut grid = GridArray::from_spec(spec).unwrap();
    for offset in 0..grid.size() {
        let index = grid.dense().index_of(offset).unwrap();
        let pos = grid.position_of_index(&index).unwrap();
        let v: f64 = pos
            .iter()
            .enumerate()
            .map(|(i, x)| (i as f64 + 1.0) * x * x)
            .sum();
        grid.set(&index, v).unwrap();
    }
    grid
}

#[test]
fn slice_with_fixed_first_axis_matches_positional_reads() {
    let center = [0.0, 0.0, 0.0];
    let steps = [10usize, 10, 1];
    let scales = [0.1, 1.0, 1.0];
    let spec = GridSpec::centered(&center, &steps, &scales).unwrap();
    let grid = filled(&spec);

    let fixed = 0.6;
    let slice = extract_slice_2d(&grid, &[fixed, 0.0, 1.0], &[false, true, true]).unwrap();
    assert_eq!(slice.len(), 21 * 3);

    let row_steps = steps[1] as i64;
    let col_steps = steps[2] as i64;
    for i in -row_steps..=row_steps {
        for j in -col_steps..=col_steps {
            let pos = [
                fixed,
                center[1] + i as f64 * scales[1],
                center[2] + j as f64 * scales[2],
            ];
            let r = (i + row_steps) as usize;
            let c = (j + col_steps) as usize;
            assert_eq!(slice.get(r, c), Some(grid.get_at(&pos).unwrap()));
        }
    }
}

proptest! {
    #[test]
    fn any_axis_pair_agrees_with_direct_access(
        lengths in prop::collection::vec(1usize..5, 2..5),
        a in 0usize..5,
        b in 0usize..5,
        pick in 0usize..1000,
    ) {
        let n = lengths.len();
        let (a, b) = (a % n, b % n);
        prop_assume!(a != b);
        let spec = GridSpec {
            lengths: lengths.iter().copied().collect(),
            step_size: (0..n).map(|i| 0.25 * (i as f64 + 1.0)).collect(),
            anchor: (0..n).map(|i| i as f64 - 2.0).collect(),
        };
        let grid = filled(&spec);
        let axes = VariableAxes::new(a, b).unwrap();

        // Base position: some valid cell; its swept coordinates get overwritten.
        let index = grid.dense().index_of(pick % grid.size()).unwrap();
        let base = grid.position_of_index(&index).unwrap();
        let slice = extract_slice(&grid, &base, axes).unwrap();

        let (row, col) = (axes.row_axis(), axes.col_axis());
        prop_assert_eq!(slice.shape(), (lengths[row], lengths[col]));
        for r in 0..lengths[row] {
            for c in 0..lengths[col] {
                let mut cell = index.clone();
                cell[row] = r;
                cell[col] = c;
                prop_assert_eq!(slice.get(r, c), Some(grid.get(&cell).unwrap()));
            }
        }
    }
}
