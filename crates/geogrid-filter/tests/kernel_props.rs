//! Property-based tests for kernel application

use geogrid_core::Matrix;
use geogrid_filter::reducers;
use geogrid_filter::{KernelSpec, map_windows, max_filter, min_filter};
use proptest::prelude::*;

fn arb_matrix() -> impl Strategy<Value = Matrix<i32>> {
    (1u32..=10, 1u32..=10).prop_flat_map(|(w, h)| {
        prop::collection::vec(-500i32..500, (w * h) as usize)
            .prop_map(move |data| Matrix::from_data(w, h, data).unwrap())
    })
}

proptest! {
    // Property: the center of every window is the cell it was cut around
    #[test]
    fn prop_window_center_is_cell(m in arb_matrix(), r in 0u32..4, edge in -10i32..10) {
        let spec = KernelSpec::new(r).unwrap().with_edge_value(edge);
        let out = map_windows(&m, &spec, |w, _| reducers::center(w));
        prop_assert_eq!(out, m);
    }

    // Property: every window has side 2r+1
    #[test]
    fn prop_window_size(m in arb_matrix(), r in 0u32..4) {
        let spec = KernelSpec::new(r).unwrap();
        let side = spec.window_size();
        let out = map_windows(&m, &spec, |w, _| u8::from(w.dimensions() == (side, side)));
        prop_assert!(out.data().iter().all(|&ok| ok == 1));
    }

    // Property: min <= cell <= max when the edge fill is neutral
    #[test]
    fn prop_min_max_bracket(m in arb_matrix(), r in 0u32..3) {
        let lo = min_filter(&m, r, i32::MAX).unwrap();
        let hi = max_filter(&m, r, i32::MIN).unwrap();
        for ((&l, &v), &h) in lo.data().iter().zip(m.data()).zip(hi.data()) {
            prop_assert!(l <= v && v <= h);
        }
    }
}
