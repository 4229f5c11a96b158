//! QuaternaryHeap and top_k through the public API.

use webrank::{top_k, ContainerError, QuaternaryHeap};

#[test]
fn test_stress_insert_then_drain() {
    let mut heap = QuaternaryHeap::new();
    // Interleave high and low values so percolation runs in both directions.
    for i in 0..500_000u32 {
        let value = if i % 2 == 0 { i } else { 500_000 - i };
        heap.insert(value).unwrap();
    }
    assert_eq!(heap.len(), 500_000);
    let mut previous = heap.remove_min().unwrap();
    while let Ok(value) = heap.remove_min() {
        assert!(previous <= value);
        previous = value;
    }
    assert!(heap.is_empty());
}

#[test]
fn test_peek_does_not_remove() {
    let mut heap = QuaternaryHeap::new();
    heap.insert("pear").unwrap();
    heap.insert("apple").unwrap();
    assert_eq!(heap.peek_min(), Ok(&"apple"));
    assert_eq!(heap.peek_min(), Ok(&"apple"));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_negative_and_fractional_scores() {
    let mut heap = QuaternaryHeap::new();
    for score in [0.5, -2.25, 3.0, -0.0, 1e-9] {
        heap.insert(score).unwrap();
    }
    assert_eq!(heap.remove_min(), Ok(-2.25));
    heap.check_invariants();
    assert_eq!(heap.into_sorted_vec().len(), 4);
}

#[test]
fn test_drained_heap_reports_empty() {
    let mut heap = QuaternaryHeap::new();
    heap.insert(1).unwrap();
    heap.remove_min().unwrap();
    assert_eq!(heap.remove_min(), Err(ContainerError::EmptyContainer));
    assert_eq!(heap.peek_min(), Err(ContainerError::EmptyContainer));
}

#[test]
fn test_top_k_over_large_range() {
    let top = top_k(500, 0..500_000).unwrap();
    assert_eq!(top.len(), 500);
    assert_eq!(top, (499_500..500_000).collect::<Vec<_>>());
}

#[test]
fn test_top_k_more_than_available() {
    assert_eq!(top_k(10, [3, 1, 2]).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_top_k_rejects_nan() {
    let result = top_k(2, [1.0, f64::NAN, 2.0]);
    assert!(matches!(result, Err(ContainerError::InvalidArgument(_))));
}
