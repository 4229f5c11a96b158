//! Heap ordering and top-k selection.

use proptest::prelude::*;
use webrank::{top_k, QuaternaryHeap};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// N inserts then N remove_min calls give a non-decreasing sequence holding
    /// exactly the inserted multiset.
    #[test]
    fn prop_heap_sorts_multiset(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = QuaternaryHeap::new();
        for &v in &values {
            heap.insert(v).unwrap();
        }
        heap.check_invariants();

        let mut drained = Vec::with_capacity(values.len());
        while let Ok(v) = heap.remove_min() {
            drained.push(v);
        }
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    /// Interleaved inserts and removals keep the heap order.
    #[test]
    fn prop_interleaved_ops_keep_order(
        ops in prop::collection::vec(prop::option::of(-1000i32..1000), 0..300)
    ) {
        let mut heap = QuaternaryHeap::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                Some(v) => {
                    heap.insert(v).unwrap();
                    model.push(v);
                }
                None => {
                    let expected = model.iter().copied().min();
                    prop_assert_eq!(heap.remove_min().ok(), expected);
                    if let Some(min) = expected {
                        let pos = model.iter().position(|&x| x == min).unwrap();
                        model.swap_remove(pos);
                    }
                }
            }
            heap.check_invariants();
            prop_assert_eq!(heap.len(), model.len());
        }
    }

    /// Finite f64 scores behave like integers.
    #[test]
    fn prop_heap_accepts_finite_floats(values in prop::collection::vec(-1e6f64..1e6, 1..100)) {
        let mut heap = QuaternaryHeap::new();
        for &v in &values {
            heap.insert(v).unwrap();
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(heap.peek_min().copied(), Ok(min));
    }

    /// top_k matches sort-and-slice.
    #[test]
    fn prop_top_k_matches_sort(
        values in prop::collection::vec(any::<i64>(), 0..200),
        k in 0usize..50,
    ) {
        let top = top_k(k, values.iter().copied()).unwrap();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        let expected = sorted[sorted.len().saturating_sub(k)..].to_vec();
        prop_assert_eq!(top, expected);
    }
}
