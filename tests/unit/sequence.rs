//! Sequence behavior through the public API.

use webrank::{ContainerError, Sequence};

fn contents(seq: &Sequence<i32>) -> Vec<i32> {
    seq.iter().copied().collect()
}

// ============================================================================
// EMPTY AND SINGLE-ELEMENT EDGES
// ============================================================================

#[test]
fn test_empty_sequence_errors() {
    let mut seq: Sequence<i32> = Sequence::new();
    assert_eq!(seq.pop_back(), Err(ContainerError::EmptyContainer));
    assert_eq!(seq.pop_front(), Err(ContainerError::EmptyContainer));
    assert_eq!(
        seq.get(0),
        Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        seq.delete(0),
        Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(seq.front(), None);
    assert_eq!(seq.iter().try_next(), Err(ContainerError::Exhausted));
    seq.check_invariants();
}

#[test]
fn test_insert_into_empty_at_zero() {
    let mut seq = Sequence::new();
    seq.insert(0, 42).unwrap();
    assert_eq!(contents(&seq), vec![42]);
    assert_eq!(seq.front(), seq.back());
    seq.check_invariants();
}

#[test]
fn test_delete_only_element() {
    let mut seq: Sequence<i32> = [7].into_iter().collect();
    assert_eq!(seq.delete(0), Ok(7));
    assert!(seq.is_empty());
    seq.check_invariants();
    seq.push_back(8);
    assert_eq!(contents(&seq), vec![8]);
    seq.check_invariants();
}

// ============================================================================
// MIXED WORKLOADS
// ============================================================================

#[test]
fn test_matches_vec_model_under_mixed_edits() {
    let mut seq = Sequence::new();
    let mut model = Vec::new();
    for i in 0..200 {
        let len = model.len();
        match i % 5 {
            0 | 1 => {
                seq.push_back(i);
                model.push(i);
            }
            2 => {
                let index = (i as usize * 7) % (len + 1);
                seq.insert(index, i).unwrap();
                model.insert(index, i);
            }
            3 if len > 0 => {
                let index = (i as usize * 3) % len;
                assert_eq!(seq.delete(index), Ok(model.remove(index)));
            }
            4 if len > 0 => {
                let index = (i as usize * 11) % len;
                assert_eq!(seq.set(index, -i), Ok(model[index]));
                model[index] = -i;
            }
            _ => {}
        }
        assert_eq!(seq.len(), model.len());
    }
    assert_eq!(contents(&seq), model);
    seq.check_invariants();
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut seq: Sequence<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    seq.get_mut(1).unwrap().push('!');
    seq.get_mut(2).unwrap().push('?');
    let got: Vec<&str> = seq.iter().map(String::as_str).collect();
    assert_eq!(got, vec!["a", "b!", "c?"]);
}

#[test]
fn test_index_of_and_contains() {
    let seq: Sequence<&str> = ["x", "y", "x"].into_iter().collect();
    assert_eq!(seq.index_of(&"x"), Some(0));
    assert_eq!(seq.index_of(&"y"), Some(1));
    assert!(!seq.contains(&"z"));
}

#[test]
fn test_clear_then_reuse() {
    let mut seq: Sequence<i32> = (0..10).collect();
    seq.clear();
    assert!(seq.is_empty());
    seq.check_invariants();
    seq.extend([1, 2]);
    assert_eq!(contents(&seq), vec![1, 2]);
}

#[test]
fn test_equality_ignores_arena_layout() {
    let mut a: Sequence<i32> = (0..5).collect();
    a.delete(0).unwrap();
    a.push_back(5);
    let b: Sequence<i32> = (1..6).collect();
    assert_eq!(a, b);
    assert_eq!(format!("{:?}", b), "[1, 2, 3, 4, 5]");
}

#[test]
fn test_large_append_and_drain() {
    let mut seq = Sequence::new();
    for i in 0..100_000 {
        seq.push_back(i);
    }
    assert_eq!(seq.get(50_000), Ok(&50_000));
    assert_eq!(seq.get(99_999), Ok(&99_999));
    let mut expected = 99_999;
    while let Ok(value) = seq.pop_back() {
        assert_eq!(value, expected);
        expected -= 1;
    }
    assert!(seq.is_empty());
}
