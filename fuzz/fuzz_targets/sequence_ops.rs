// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence against `Vec` under arbitrary edit scripts.
//!
//! Indices come straight from the fuzzer, so most of them are out of range.
//! Those must fail with an error and leave the sequence untouched; the rest
//! must agree with the same edit applied to a Vec.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use webrank::{ContainerError, Sequence};

#[derive(Debug, Arbitrary)]
enum Op {
    PushBack(i16),
    PopBack,
    PopFront,
    Insert(u8, i16),
    Delete(u8),
    Set(u8, i16),
    Get(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut seq = Sequence::new();
    let mut model: Vec<i16> = Vec::new();

    for op in ops.into_iter().take(512) {
        let len = model.len();
        let out_of_range = |index: usize| ContainerError::IndexOutOfRange { index, len };
        match op {
            Op::PushBack(v) => {
                seq.push_back(v);
                model.push(v);
            }
            Op::PopBack => match model.pop() {
                Some(v) => assert_eq!(seq.pop_back(), Ok(v)),
                None => assert_eq!(seq.pop_back(), Err(ContainerError::EmptyContainer)),
            },
            Op::PopFront => {
                if model.is_empty() {
                    assert_eq!(seq.pop_front(), Err(ContainerError::EmptyContainer));
                } else {
                    assert_eq!(seq.pop_front(), Ok(model.remove(0)));
                }
            }
            Op::Insert(i, v) => {
                let i = usize::from(i);
                if i <= len {
                    assert_eq!(seq.insert(i, v), Ok(()));
                    model.insert(i, v);
                } else {
                    assert_eq!(seq.insert(i, v), Err(out_of_range(i)));
                }
            }
            Op::Delete(i) => {
                let i = usize::from(i);
                if i < len {
                    assert_eq!(seq.delete(i), Ok(model.remove(i)));
                } else {
                    assert_eq!(seq.delete(i), Err(out_of_range(i)));
                }
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                if i < len {
                    assert_eq!(seq.set(i, v), Ok(std::mem::replace(&mut model[i], v)));
                } else {
                    assert_eq!(seq.set(i, v), Err(out_of_range(i)));
                }
            }
            Op::Get(i) => {
                let i = usize::from(i);
                match model.get(i) {
                    Some(v) => assert_eq!(seq.get(i), Ok(v)),
                    None => assert_eq!(seq.get(i), Err(out_of_range(i))),
                }
            }
        }
        assert_eq!(seq.len(), model.len());
    }

    seq.check_invariants();
    assert!(seq.iter().eq(model.iter()));
});
