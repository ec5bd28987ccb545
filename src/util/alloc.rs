//! Test doubles for drop accounting and allocation accounting.

use std::alloc::Layout;
use std::cell::{Cell, RefCell};
use std::ops::Deref;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::alloc::{Allocator, Global};
use crate::error::AllocFailure;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value whose clones share a counter that is incremented on every drop.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// An allocator that delegates to [`Global`] while counting every call, so
/// tests can assert how many (re)allocations an operation performed.
#[derive(Debug, Default, Clone)]
pub struct CountingAlloc {
    allocations: Rc<Cell<usize>>,
    deallocations: Rc<Cell<usize>>,
}

impl CountingAlloc {
    pub fn new() -> CountingAlloc {
        CountingAlloc::default()
    }

    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub fn deallocations(&self) -> usize {
        self.deallocations.get()
    }
}

impl Allocator for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocFailure> {
        self.allocations.set(self.allocations.get() + 1);
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.deallocations.set(self.deallocations.get() + 1);
        // SAFETY: ptr and layout are passed through unchanged from a caller
        // upholding the deallocate contract for Global.
        unsafe { Global.deallocate(ptr, layout) }
    }
}
