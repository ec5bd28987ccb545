use std::alloc::Layout;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use crate::alloc::{Allocator, Global};
use crate::error::{AllocFailure, CapacityOverflow};
use crate::util::result::ResultExtension;

/// An exclusively owned, uninitialized allocation of `cap` slots of `T`.
///
/// `RawBuf` knows nothing about which slots hold live values; the owning
/// container tracks that and is responsible for destroying live elements
/// before the buffer is resized below them or dropped. Dropping a `RawBuf`
/// releases the allocation only.
///
/// Zero-sized element types and zero capacities never touch the allocator:
/// both are represented by a dangling, well-aligned pointer, which all of
/// the primitives below accept.
pub(crate) struct RawBuf<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _phantom: PhantomData<T>,
}

impl<T, A: Allocator> RawBuf<T, A> {
    /// Creates a buffer with capacity 0 and no allocation.
    pub(crate) const fn empty_in(alloc: A) -> RawBuf<T, A> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer of `cap` uninitialized slots.
    ///
    /// # Errors
    /// Propagates [`AllocFailure`] from the allocator.
    ///
    /// # Panics
    /// Panics if the memory layout of the buffer would have a size that
    /// exceeds [`isize::MAX`].
    pub(crate) fn try_with_capacity_in(cap: usize, alloc: A) -> Result<RawBuf<T, A>, AllocFailure> {
        let mut buf = RawBuf::empty_in(alloc);
        buf.try_resize(cap, 0)?;
        Ok(buf)
    }

    /// Panicking form of [`RawBuf::try_with_capacity_in`].
    ///
    /// # Panics
    /// Panics on allocation failure or capacity overflow.
    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> RawBuf<T, A> {
        Self::try_with_capacity_in(cap, alloc).throw()
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) const fn start(&self) -> NonNull<T> {
        self.ptr
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// The largest capacity any buffer of `T` can reach under this
    /// allocator.
    pub(crate) fn max_size(&self) -> usize {
        if size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.alloc.max_size() / size_of::<T>()
        }
    }

    /// Replaces the allocation with a fresh one of `new_cap` slots, moving
    /// the first `min(live, new_cap)` elements into it in index order and
    /// releasing the old allocation. A new block is obtained even when the
    /// capacity is unchanged, so the element addresses never survive a
    /// resize.
    ///
    /// The old buffer is kept intact if the allocation fails, which happens
    /// strictly before any destructive step.
    ///
    /// Elements at `new_cap..live` must already have been destroyed by the
    /// caller; this method will not touch them.
    ///
    /// # Errors
    /// Propagates [`AllocFailure`] from the allocator.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size
    /// that exceeds [`isize::MAX`].
    pub(crate) fn try_resize(&mut self, new_cap: usize, live: usize) -> Result<(), AllocFailure> {
        if size_of::<T>() == 0 {
            // Zero-sized elements occupy no memory; only the bookkeeping
            // changes.
            self.cap = new_cap;
            return Ok(());
        }

        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            let layout = Self::make_layout(new_cap);
            let ptr = self.alloc.allocate(layout)?.cast::<T>();

            // SAFETY: The two blocks are distinct allocations, both valid
            // for at least min(live, new_cap) elements, and the source
            // elements at those indices are initialized per the caller's
            // contract.
            unsafe {
                ptr::copy_nonoverlapping(self.ptr.as_ptr(), ptr.as_ptr(), live.min(new_cap));
            }

            ptr
        };

        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Reads the element at `index` out of the buffer, leaving the slot
    /// logically uninitialized.
    ///
    /// # Safety
    /// `index` must be within capacity and the slot must hold a live value
    /// that the caller now owns.
    pub(crate) unsafe fn read_at(&self, index: usize) -> T {
        // SAFETY: index is within the allocation per the caller's contract.
        unsafe { ptr::read(self.ptr.as_ptr().add(index)) }
    }

    /// Writes `value` into the slot at `index` without reading the previous
    /// contents.
    ///
    /// # Safety
    /// `index` must be within capacity and the slot must not hold a live
    /// value.
    pub(crate) unsafe fn write_at(&mut self, index: usize, value: T) {
        // SAFETY: index is within the allocation per the caller's contract.
        unsafe { ptr::write(self.ptr.as_ptr().add(index), value) }
    }

    /// Moves the elements at `index..len` one slot toward the end, opening
    /// an uninitialized hole at `index`.
    ///
    /// # Safety
    /// `index <= len` and `len < capacity`; the elements at `index..len`
    /// must be live.
    pub(crate) unsafe fn shift_right(&mut self, index: usize, len: usize) {
        // SAFETY: Source and destination ranges lie within the allocation
        // per the caller's contract; copy handles the overlap.
        unsafe {
            let head = self.ptr.as_ptr().add(index);
            ptr::copy(head, head.add(1), len - index);
        }
    }

    /// Moves the elements at `index + 1..len` one slot toward the start,
    /// closing over the slot at `index`. The slot at `len - 1` is left
    /// logically uninitialized.
    ///
    /// # Safety
    /// `index < len <= capacity`; the elements at `index + 1..len` must be
    /// live and the value at `index` must already have been read out.
    pub(crate) unsafe fn shift_left(&mut self, index: usize, len: usize) {
        // SAFETY: Source and destination ranges lie within the allocation
        // per the caller's contract; copy handles the overlap.
        unsafe {
            let head = self.ptr.as_ptr().add(index);
            ptr::copy(head.add(1), head, len - index - 1);
        }
    }

    /// Drops the elements at `from..to` in place.
    ///
    /// # Safety
    /// The range must be within capacity and every slot in it must hold a
    /// live value; afterwards those slots are uninitialized.
    pub(crate) unsafe fn drop_range(&mut self, from: usize, to: usize) {
        // SAFETY: The range describes initialized elements inside the
        // allocation per the caller's contract.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(from),
                to - from,
            ));
        }
    }

    /// Views the first `len` slots as a slice.
    ///
    /// # Safety
    /// The elements at `0..len` must be live.
    pub(crate) unsafe fn as_slice(&self, len: usize) -> &[T] {
        // SAFETY: The prefix is initialized per the caller's contract, the
        // pointer is properly aligned, and the borrow checker prevents
        // mutation through &self for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Views the first `len` slots as a mutable slice.
    ///
    /// # Safety
    /// The elements at `0..len` must be live.
    pub(crate) unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        // SAFETY: The prefix is initialized per the caller's contract, the
        // pointer is properly aligned, and the borrow checker prevents
        // other access through &mut self for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }

    /// Builds the [`Layout`] for `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => Err(CapacityOverflow).throw(),
        }
    }

    /// Returns the current allocation to the allocator, leaving the pointer
    /// and capacity fields stale. Callers must overwrite them immediately.
    fn release(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            let layout = Self::make_layout(self.cap);
            // SAFETY: A non-zero capacity of a sized type is always backed
            // by an allocation obtained from self.alloc with this layout.
            unsafe {
                self.alloc.deallocate(self.ptr.cast(), layout);
            }
        }
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // Live elements were destroyed by the owning container; only the
        // allocation remains.
        self.release();
    }
}

// SAFETY: RawBuf owns its allocation uniquely, so sending it moves exclusive
// access along with the values; T: Send is the only requirement on the
// element side.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
// SAFETY: RawBuf exposes no interior mutability; shared references only
// permit reads, so T: Sync suffices.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}
