use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use super::{Cursor, CursorMut};
use crate::alloc::{Allocator, Global};
use crate::collections::contiguous::buffer::RawBuf;
use crate::error::{AllocFailure, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity a default-constructed Vector starts with, so that the first
/// few appends never reallocate.
pub(crate) const DEFAULT_CAP: usize = 8;

/// The capacity adopted when an append finds the buffer full.
///
/// Growing by half plus one slot keeps repeated single-element appends
/// amortized O(1) while also making progress from capacity 0.
pub(crate) const fn next_cap(cap: usize) -> usize {
    cap + cap / 2 + 1
}

/// A growable contiguous collection with an explicit allocator seam and
/// range-checked position cursors.
///
/// The element storage is a single heap buffer obtained from the
/// [`Allocator`] `A`; the first [`len`](Vector::len) slots hold live values
/// and the remainder up to [`capacity`](Vector::capacity) is reserved for
/// growth. Reallocation replaces the buffer wholesale, so element addresses
/// never survive a capacity change; the borrow checker makes that harmless
/// by preventing any reference or [`Cursor`] from being held across one.
///
/// Checked accessors stay checked in every build profile. The only
/// unchecked entry points are the explicitly `unsafe` ones
/// ([`push_unchecked`](Vector::push_unchecked), the slice
/// `get_unchecked` family via [`Deref`]).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `realloc_with` | `O(n)` |
/// | `resize_with` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element,
/// `push` will take `O(n)`.
pub struct Vector<T, A: Allocator = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length 0 and the default starting capacity
    /// of 8.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    pub fn new() -> Vector<T> {
        Self::new_in(Global)
    }

    /// Creates a new Vector with capacity exactly equal to the provided
    /// value, allowing that many values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the
    /// allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec: Vector<u8> = Vector::with_capacity(5);
    /// assert_eq!(vec.capacity(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn with_capacity(cap: usize) -> Vector<T> {
        Self::with_capacity_in(cap, Global)
    }

    /// Creates a new Vector filled to capacity with clones of `value`, so
    /// that `len() == capacity() == cap`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the
    /// allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let vec = Vector::with_fill(3, 7_u8);
    /// assert_eq!(&*vec, &[7, 7, 7]);
    /// ```
    pub fn with_fill(cap: usize, value: T) -> Vector<T>
    where
        T: Clone,
    {
        Self::with_fill_in(cap, value, Global)
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Like [`Vector::new`], but allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn new_in(alloc: A) -> Vector<T, A> {
        Self::with_capacity_in(DEFAULT_CAP, alloc)
    }

    /// Like [`Vector::with_capacity`], but allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the
    /// allocation fails.
    pub fn with_capacity_in(cap: usize, alloc: A) -> Vector<T, A> {
        Vector {
            buf: RawBuf::with_capacity_in(cap, alloc),
            len: 0,
        }
    }

    /// Like [`Vector::with_fill`], but allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the
    /// allocation fails.
    pub fn with_fill_in(cap: usize, value: T, alloc: A) -> Vector<T, A>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity_in(cap, alloc);
        for _ in 0..cap {
            // SAFETY: The buffer was created with one slot per fill element.
            unsafe { vec.push_unchecked(value.clone()) }
        }
        vec
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is
    /// guaranteed to be exactly the value provided to any of the capacity
    /// manipulation functions; growth during appends follows the
    /// half-plus-one policy.
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The largest length this Vector could ever reach under its allocator.
    pub fn max_size(&self) -> usize {
        self.buf.max_size()
    }

    /// The allocator this Vector requests memory through.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Borrows the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Borrows the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// A pointer to the first slot of the buffer. Dangling when the
    /// capacity is 0.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// A mutable pointer to the first slot of the buffer. Dangling when the
    /// capacity is 0.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// References the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// # use cursor_vec::IndexOutOfBounds;
    /// let vec = Vector::from([1_u8, 2, 3]);
    /// assert_eq!(vec.at(1), Ok(&2));
    /// assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Mutably references the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Push the provided value onto the end of the Vector, increasing the
    /// capacity if required.
    ///
    /// # Panics
    /// Panics if the grown memory layout would have a size that exceeds
    /// [`isize::MAX`], or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Fallible form of [`Vector::push`]: a failed growth allocation is
    /// returned instead of panicking, leaving the Vector untouched.
    ///
    /// # Errors
    /// Propagates [`AllocFailure`] from the allocator.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocFailure> {
        if self.len == self.capacity() {
            self.buf.try_resize(next_cap(self.capacity()), self.len)?;
        }
        // SAFETY: The capacity has just been ensured to exceed len.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that
    /// there is enough capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has spare capacity,
    /// using methods like [`reserve`](Vector::reserve) or
    /// [`with_capacity`](Vector::with_capacity) to arrange it. Calling this
    /// on a full Vector is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: len < capacity per the caller's contract, and slot len is
        // not live.
        unsafe { self.buf.write_at(self.len, value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned
    /// value if the Vector has length greater than 0. Never changes the
    /// capacity.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::from([0_usize, 1, 2, 3, 4]);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: The old last element is live, and decrementing len
            // first hands its ownership to the caller exactly once.
            Some(unsafe { self.buf.read_at(self.len) })
        }
    }

    /// Inserts the provided value at the given index, shifting the elements
    /// at `index..` one slot toward the end and growing if required.
    /// `index == len()` appends. The relative order of all other elements
    /// is preserved.
    ///
    /// # Panics
    /// Panics if `index > len()`, or on growth failure.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Fallible form of [`Vector::insert`].
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len()`. Growth failure
    /// still panics.
    ///
    /// # Panics
    /// Panics if growth is required and the allocation fails.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == self.capacity() {
            self.buf
                .try_resize(next_cap(self.capacity()), self.len)
                .throw();
        }

        // SAFETY: index <= len < capacity; the hole opened at index is
        // filled before anything observes it.
        unsafe {
            self.buf.shift_right(index, self.len);
            self.buf.write_at(index, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, shifting all following
    /// values one slot toward the start to fill the gap. The element that
    /// followed the removed one ends up at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Fallible form of [`Vector::remove`]. Removing at the end position
    /// (or beyond) is an error, never undefined behavior.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.try_remove(1), Ok(2));
    /// assert!(vec.try_remove(vec.len()).is_err());
    /// ```
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is live; the value is read out
        // before the tail closes over its slot, and len is reduced so the
        // vacated last slot is no longer considered live.
        let value = unsafe {
            let value = self.buf.read_at(index);
            self.buf.shift_left(index, self.len);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Destroys all live elements. The capacity is retained.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        // len is zeroed first so a panicking element drop cannot lead to a
        // second drop of the same slot.
        self.len = 0;
        if len > 0 {
            // SAFETY: The first len slots held live elements.
            unsafe { self.buf.drop_range(0, len) }
        }
    }

    /// Sets the capacity to exactly `new_cap` by migrating the live
    /// elements into a fresh allocation and releasing the old one. Shrinking
    /// below `len()` drops the truncated tail. The buffer is replaced even
    /// when the capacity does not change, so spare capacity never lingers.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size
    /// that exceeds [`isize::MAX`], or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(100);
    /// assert_eq!(vec.capacity(), 100);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).throw()
    }

    /// Fallible form of [`Vector::reserve`]. On allocation failure the
    /// buffer and all elements that were not explicitly truncated remain
    /// intact.
    ///
    /// # Errors
    /// Propagates [`AllocFailure`] from the allocator.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size
    /// that exceeds [`isize::MAX`].
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), AllocFailure> {
        if new_cap < self.len {
            // SAFETY: The truncated tail [new_cap, len) holds live elements
            // that will not fit the new buffer.
            unsafe { self.buf.drop_range(new_cap, self.len) }
            self.len = new_cap;
        }
        self.buf.try_resize(new_cap, self.len)
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn shrink_to_fit(&mut self) {
        self.reserve(self.len);
    }

    /// Destructive reallocation: discards all existing contents, then fills
    /// a buffer of exactly `new_cap` slots with values produced by `fill`,
    /// so that `len() == capacity() == new_cap`.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size
    /// that exceeds [`isize::MAX`], or the allocation fails.
    pub fn realloc_with<F: FnMut() -> T>(&mut self, mut fill: F, new_cap: usize) {
        self.clear();
        self.buf.try_resize(new_cap, 0).throw();
        for _ in 0..new_cap {
            // SAFETY: The buffer was just resized to hold new_cap elements.
            unsafe { self.push_unchecked(fill()) }
        }
    }

    /// [`realloc_with`](Vector::realloc_with) using `T::default()`.
    ///
    /// # Panics
    /// See [`Vector::realloc_with`].
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.realloc_with_default(5);
    /// assert_eq!(&*vec, &[0, 0, 0, 0, 0]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn realloc_with_default(&mut self, new_cap: usize)
    where
        T: Default,
    {
        self.realloc_with(T::default, new_cap);
    }

    /// [`realloc_with`](Vector::realloc_with) using clones of `value`.
    ///
    /// # Panics
    /// See [`Vector::realloc_with`].
    pub fn realloc_with_fill(&mut self, value: T, new_cap: usize)
    where
        T: Clone,
    {
        self.realloc_with(|| value.clone(), new_cap);
    }

    /// Resizes the live range to `new_len`: shrinking drops the trailing
    /// elements in place, growing appends values produced by `fill`
    /// (reserving exactly `new_len` slots first if the capacity is too
    /// small).
    ///
    /// # Panics
    /// Panics if a required allocation fails.
    pub fn resize_with<F: FnMut() -> T>(&mut self, mut fill: F, new_len: usize) {
        if new_len < self.len {
            // SAFETY: [new_len, len) holds live elements being truncated.
            unsafe { self.buf.drop_range(new_len, self.len) }
            self.len = new_len;
        } else {
            if new_len > self.capacity() {
                self.reserve(new_len);
            }
            for _ in 0..new_len - self.len {
                // SAFETY: The capacity now covers all new_len elements.
                unsafe { self.push_unchecked(fill()) }
            }
        }
    }

    /// [`resize_with`](Vector::resize_with) using `T::default()`.
    ///
    /// # Panics
    /// See [`Vector::resize_with`].
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.resize_with_default(5);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// vec.resize_with_default(2);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn resize_with_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(T::default, new_len);
    }

    /// [`resize_with`](Vector::resize_with) using clones of `value`.
    ///
    /// # Panics
    /// See [`Vector::resize_with`].
    pub fn resize_with_fill(&mut self, value: T, new_len: usize)
    where
        T: Clone,
    {
        self.resize_with(|| value.clone(), new_len);
    }

    /// Steals the buffer out of this Vector, leaving it with length 0 and
    /// capacity 0. The O(1) counterpart of cloning when the source is no
    /// longer needed.
    ///
    /// # Examples
    /// ```
    /// # use cursor_vec::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// let taken = vec.take();
    /// assert_eq!(&*taken, &[1, 2, 3]);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Vector<T, A>
    where
        A: Clone,
    {
        let alloc = self.buf.allocator().clone();
        mem::replace(
            self,
            Vector {
                buf: RawBuf::empty_in(alloc),
                len: 0,
            },
        )
    }

    /// A shared cursor at the first element (or at the end position when
    /// empty).
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.buf.start(), self.len, 0)
    }

    /// A shared cursor at `index`. `index == len()` yields the end
    /// position.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn cursor_at(&self, index: usize) -> Cursor<'_, T> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
            .throw()
        }
        Cursor::new(self.buf.start(), self.len, index)
    }

    /// A mutable cursor at the first element (or at the end position when
    /// empty).
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.buf.start(), self.len, 0)
    }

    /// A mutable cursor at `index`. `index == len()` yields the end
    /// position.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn cursor_mut_at(&mut self, index: usize) -> CursorMut<'_, T> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
            .throw()
        }
        CursorMut::new(self.buf.start(), self.len, index)
    }

    /// Checks that the provided index refers to a live element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len()`.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T, A: Allocator> Index<usize> for Vector<T, A> {
    type Output = T;

    /// # Panics
    /// Panics if the provided index is out of bounds. [`Vector::at`] is the
    /// non-panicking equivalent.
    fn index(&self, index: usize) -> &T {
        self.at(index).throw()
    }
}

impl<T, A: Allocator> IndexMut<usize> for Vector<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index).throw()
    }
}

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Vector::with_capacity(iter.size_hint().0);

        for value in iter {
            vec.push(value);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// The literal-array constructor: `Vector::from([1, 2, 3])`.
    fn from(values: [T; N]) -> Self {
        let mut vec = Vector::with_capacity(N);
        for value in values {
            // SAFETY: The buffer was created with one slot per element.
            unsafe { vec.push_unchecked(value) }
        }
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // Destroy the live elements; the buffer's own drop releases the
        // allocation afterwards.
        self.clear();
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are always live.
        unsafe { self.buf.as_slice(self.len) }
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots are always live.
        unsafe { self.buf.as_mut_slice(self.len) }
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: Allocator> Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    /// Deep copy: the new buffer is sized to the source's *capacity*, and
    /// exactly `len()` elements are cloned into it.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_capacity_in(self.capacity(), self.buf.allocator().clone());

        for value in self.iter() {
            // SAFETY: The new capacity covers at least the source length.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.reserve(source.capacity());
        for value in source.iter() {
            // SAFETY: The reserved capacity covers the source length.
            unsafe { self.push_unchecked(value.clone()) }
        }
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<Vector<T, B>> for Vector<T, A> {
    /// Size-then-elementwise comparison over the live ranges.
    fn eq(&self, other: &Vector<T, B>) -> bool {
        **self == **other
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: Allocator> Debug for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Debug, A: Allocator> Display for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
