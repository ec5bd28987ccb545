#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::error::IndexOutOfBounds;
use crate::util::alloc::{CountedDrop, CountingAlloc, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_default_capacity() {
    let vec: Vector<u32> = Vector::new();
    assert_eq!(vec.len(), 0);
    assert_eq!(
        vec.capacity(),
        8,
        "A default-constructed Vector should start with capacity 8."
    );
    assert_eq!(Vector::<u32>::default().capacity(), 8);
}

#[test]
fn test_push_appends_at_back() {
    let mut vec = Vector::new();
    for i in 0..20 {
        let old_len = vec.len();
        vec.push(i);
        assert_eq!(vec.last(), Some(&i), "The pushed value should be at the back.");
        assert_eq!(vec.len(), old_len + 1, "Each push should grow the length by one.");
    }
    assert_eq!(vec.first(), Some(&0));
}

#[test]
fn test_pop_preserves_order() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);

    assert_eq!(vec.pop(), Some(5));
    assert_eq!(vec.len(), 4);
    assert_eq!(
        &*vec,
        &[1, 2, 3, 4],
        "Popping should leave the remaining elements in order."
    );

    vec.clear();
    assert_eq!(vec.pop(), None, "Popping an empty Vector should yield None.");
}

#[test]
fn test_growth_policy() {
    let mut vec: Vector<u8> = Vector::with_capacity(0);

    for expected in [1_usize, 2, 4, 7, 11, 17] {
        // The buffer is full at the top of each pass, so this push grows it.
        vec.push(0);
        assert_eq!(
            vec.capacity(),
            expected,
            "Each growth should adopt capacity + capacity / 2 + 1."
        );
        assert!(vec.capacity() >= vec.len());

        while vec.len() < vec.capacity() {
            vec.push(0);
        }
    }
}

#[test]
fn test_reserve_then_grow_once() {
    let alloc = CountingAlloc::new();
    let mut vec = Vector::with_capacity_in(4, alloc.clone());

    for i in 1..=5 {
        vec.push(i);
    }

    assert_eq!(vec.len(), 5);
    assert_eq!(
        vec.capacity(),
        7,
        "Growing from capacity 4 should adopt 4 + 4 / 2 + 1."
    );
    assert_eq!(
        alloc.allocations(),
        2,
        "Five pushes into capacity 4 should reallocate exactly once."
    );
    assert_eq!(alloc.deallocations(), 1);
}

#[test]
fn test_reserve_is_exact_and_truncates() {
    let mut vec: Vector<u8> = Vector::new();
    vec.reserve(100);
    assert_eq!(vec.capacity(), 100, "reserve should adopt the exact capacity.");

    vec.extend(0..10_u8);
    vec.reserve(4);
    assert_eq!(vec.capacity(), 4);
    assert_eq!(
        &*vec,
        &[0, 1, 2, 3],
        "A shrinking reserve should keep the leading elements."
    );

    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = (0..10).map(|_| counter.clone()).collect();
    vec.reserve(3);
    assert_eq!(
        counter.take(),
        7,
        "A shrinking reserve should drop the truncated tail."
    );
}

#[test]
fn test_shrink_to_fit() {
    let mut vec = Vector::with_capacity(32);
    vec.extend(0..5);
    vec.shrink_to_fit();
    assert_eq!(vec.capacity(), 5);
    assert_eq!(vec.len(), 5);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_insert_shifts_right() {
    let mut vec = Vector::from([1, 2, 3]);
    vec.insert(0, 0);
    assert_eq!(
        &*vec,
        &[0, 1, 2, 3],
        "Inserting at the front should shift every element back by one."
    );

    vec.insert(vec.len(), 4);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Inserting at the end should append.");

    assert_eq!(
        vec.try_insert(99, 99),
        Err(IndexOutOfBounds { index: 99, len: 5 }),
        "Inserting past the end position should be rejected."
    );
}

#[test]
fn test_insert_grows_when_full() {
    let mut vec = Vector::with_capacity(3);
    vec.extend([1, 2, 3]);
    vec.insert(1, 9);
    assert_eq!(&*vec, &[1, 9, 2, 3]);
    assert_eq!(vec.capacity(), 5, "A full insert should grow by half plus one.");
}

#[test]
fn test_remove_shifts_left() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.remove(1), 2);
    assert_eq!(
        &*vec,
        &[1, 3],
        "Removing should close the gap while preserving order."
    );
}

#[test]
fn test_insert_remove_round_trip() {
    let original = Vector::from([1, 2, 3, 4]);

    for index in 0..=original.len() {
        let mut vec = original.clone();
        vec.insert(index, 99);
        assert_eq!(vec.len(), original.len() + 1);
        assert_eq!(vec.remove(index), 99);
        assert_eq!(
            vec, original,
            "Removing a just-inserted element should reproduce the original sequence."
        );
    }
}

#[test]
fn test_out_of_bounds_is_an_error() {
    let mut vec = Vector::from([1, 2, 3]);

    assert_eq!(
        vec.at(vec.len()),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "at() on the end position should report the index and length."
    );
    assert_eq!(vec.at(1), Ok(&2));
    assert_eq!(vec.at_mut(0), Ok(&mut 1));
    assert!(vec.at_mut(7).is_err());

    let len = vec.len();
    assert_eq!(
        vec.try_remove(len),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Removing at the end position should be rejected, not undefined."
    );

    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let _ = vec[3];
    });
}

#[test]
fn test_clear_keeps_capacity() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = (0..6).map(|_| counter.clone()).collect();
    let cap = vec.capacity();

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), cap, "clear should not release the buffer.");
    assert_eq!(counter.take(), 6, "clear should drop every live element.");
}

#[test]
fn test_realloc_is_destructive() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = (0..4).map(|_| counter.clone()).collect();

    vec.realloc_with(|| counter.clone(), 7);
    assert_eq!(vec.len(), 7);
    assert_eq!(vec.capacity(), 7);
    assert_eq!(
        counter.take(),
        4,
        "A destructive reallocation should drop all previous elements."
    );

    let mut vec = Vector::from([1, 2, 3]);
    vec.realloc_with_fill(9, 5);
    assert_eq!(&*vec, &[9, 9, 9, 9, 9]);

    vec.realloc_with_default(2);
    assert_eq!(&*vec, &[0, 0]);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_resize_both_directions() {
    let mut vec = Vector::from([1, 2, 3]);

    vec.resize_with_fill(7, 6);
    assert_eq!(&*vec, &[1, 2, 3, 7, 7, 7]);
    assert_eq!(
        vec.capacity(),
        6,
        "A growing resize past the capacity should reserve exactly the new length."
    );

    vec.resize_with_default(2);
    assert_eq!(&*vec, &[1, 2]);
    assert_eq!(vec.capacity(), 6, "A shrinking resize should not reallocate.");

    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = (0..5).map(|_| counter.clone()).collect();
    vec.resize_with(|| counter.clone(), 2);
    assert_eq!(counter.take(), 3, "A shrinking resize should drop the tail.");
}

#[test]
fn test_with_fill() {
    let vec = Vector::with_fill(4, 1_u8);
    assert_eq!(&*vec, &[1, 1, 1, 1]);
    assert_eq!(vec.len(), vec.capacity());

    let empty = Vector::with_fill(0, 1_u8);
    assert!(empty.is_empty());
}

#[test]
fn test_deep_copy_independence() {
    let mut vec = Vector::with_capacity(10);
    vec.extend([1, 2, 3]);

    let mut copy = vec.clone();
    assert_eq!(copy, vec);
    assert_eq!(
        copy.capacity(),
        vec.capacity(),
        "A copy should be sized to the source's capacity, not its length."
    );

    copy.push(4);
    copy[0] = 99;
    assert_eq!(&*vec, &[1, 2, 3], "Mutating the copy should not affect the source.");

    vec.push(5);
    assert_eq!(&*copy, &[99, 2, 3, 4]);
}

#[test]
fn test_take_leaves_empty() {
    let mut vec = Vector::from([1, 2, 3]);
    let taken = vec.take();

    assert_eq!(&*taken, &[1, 2, 3], "The taken Vector should hold the prior contents.");
    assert_eq!(vec.len(), 0);
    assert_eq!(
        vec.capacity(),
        0,
        "The source of a take should be left in the empty state."
    );

    vec.push(9);
    assert_eq!(&*vec, &[9], "A taken-from Vector should remain usable.");
}

#[test]
fn test_equality_and_hash() {
    let vec = Vector::from([0_usize, 1, 2, 3, 4]);

    assert_eq!(
        vec,
        (0_usize..5).collect::<Vector<_>>(),
        "Different construction methods should produce equal results."
    );
    assert_ne!(vec, Vector::from([0_usize, 1, 2, 5, 4]));
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one((0_usize..5).collect::<Vector<_>>()),
        "Equal Vectors should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = (0..10).map(|_| counter.clone()).collect();

    drop(vec);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_zst_support() {
    let mut vec: Vector<ZeroSizedType> = Vector::new();
    assert_eq!(vec.capacity(), 8);
    assert_eq!(vec.max_size(), usize::MAX);

    for _ in 0..20 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 20);
    assert_eq!(vec[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(vec[19], ZeroSizedType, "Indexing with an in-bounds offset should work.");

    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.iter().count(), 19);

    let alloc = CountingAlloc::new();
    let zst_vec: Vector<ZeroSizedType, _> = Vector::with_capacity_in(100, alloc.clone());
    drop(zst_vec);
    assert_eq!(
        alloc.allocations(),
        0,
        "Zero-sized elements should never reach the allocator."
    );
}

#[test]
fn test_iterators() {
    let mut vec = Vector::from([0_usize, 1, 2, 3, 4]);
    let collected: Vector<_> = vec.iter().cloned().collect();
    assert_eq!(vec, collected, "Collected iter should be equal.");

    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *vec,
        [0_usize, 2, 4, 6, 8],
        "Vector mutated by iterator should equal this slice."
    );

    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = (0..10).map(|_| counter.clone()).collect();

    let mut iter = vec.into_iter();
    iter.next();
    iter.next();
    counter.take();
    drop(iter);
    assert_eq!(
        counter.take(),
        8,
        "Dropping an owned iterator should drop the elements not yet yielded."
    );
}

#[test]
fn test_for_loops() {
    let mut vec = Vector::from([1, 2, 3]);

    let mut total = 0;
    for value in &vec {
        total += *value;
    }
    assert_eq!(total, 6);

    for value in &mut vec {
        *value += 1;
    }
    assert_eq!(&*vec, &[2, 3, 4]);

    let mut total = 0;
    for value in vec {
        total += value;
    }
    assert_eq!(total, 9);
}

#[test]
fn test_cursor_navigation() {
    let vec = Vector::from([10, 20, 30]);

    let mut cur = vec.cursor();
    assert!(cur.is_begin());
    assert!(!cur.is_end());
    assert_eq!(cur.index(), 0);
    assert_eq!(cur.get(), Ok(&10));

    cur.advance(2);
    assert_eq!(cur.index(), 2);
    assert_eq!(cur.get(), Ok(&30));
    assert_eq!(cur.peek(0), Ok(&30));
    assert!(cur.peek(1).is_err(), "Peeking past the last element should fail.");

    cur.step();
    assert!(cur.is_end());
    assert_eq!(
        cur.get(),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Reading the end position should be an error."
    );

    cur.retreat(3);
    assert!(cur.is_begin());
    assert_eq!(cur.peek(1), Ok(&20));

    assert!(vec.cursor_at(vec.len()).is_end());
}

#[test]
fn test_cursor_bounds_panics() {
    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let mut cur = vec.cursor();
        cur.advance(4);
    });

    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let mut cur = vec.cursor();
        cur.step_back();
    });

    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let _ = vec.cursor_at(4);
    });
}

#[test]
fn test_cursor_equality() {
    let vec = Vector::from([1, 2, 3]);

    let mut a = vec.cursor();
    let b = vec.cursor_at(2);
    assert_ne!(a, b);

    a.advance(2);
    assert_eq!(a, b, "Cursors at the same position should compare equal.");

    let copy = a;
    assert_eq!(copy, a, "A copied cursor should stay at the same position.");
}

#[test]
fn test_cursor_iteration() {
    let vec = Vector::from([1, 2, 3, 4]);

    let mut cur = vec.cursor();
    cur.advance(1);
    assert_eq!(cur.size_hint(), (3, Some(3)));
    assert_eq!(cur.copied().sum::<i32>(), 9, "Iteration should cover the remaining range.");

    let empty: Vector<i32> = Vector::with_capacity(0);
    assert_eq!(empty.cursor().count(), 0);
}

#[test]
fn test_cursor_mut() {
    let mut vec = Vector::from([1, 2, 3]);

    let mut cur = vec.cursor_mut();
    cur.advance(1);
    *cur.get_mut().unwrap() = 99;
    assert_eq!(cur.get(), Ok(&99));
    assert_eq!(cur.as_cursor().index(), 1);

    cur.step();
    cur.step();
    assert!(cur.is_end());
    assert!(cur.get_mut().is_err(), "Writing through the end position should be rejected.");

    assert_eq!(&*vec, &[1, 99, 3]);
}

#[test]
fn test_cursor_positions_convert_to_indices() {
    let mut vec = Vector::from([1, 2, 3, 4]);

    let index = {
        let mut cur = vec.cursor();
        cur.advance(1);
        cur.index()
    };

    vec.remove(index);
    assert_eq!(&*vec, &[1, 3, 4]);
}
