use core::ptr;

use scopeguard::ScopeGuard;

use crate::{
    alloc::Allocator,
    collections::TryReserveError,
};
use super::array::RawArray;

struct Staging<T, A: Allocator> {
    raw:      RawArray<T, A>,
    num_init: usize,
}

fn release<T, A: Allocator>(staging: Staging<T, A>) {
    // SAFETY: exactly the first `num_init` slots were written; the storage itself is freed when `raw` drops
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(staging.raw.ptr(), staging.num_init)) }
}

/// Freshly acquired storage that is being filled front to back.
///
/// Until [`StagedArray::commit`] is called, the staged storage is owned by a scope guard:
/// on any early exit (an error return or a panic while producing an element) the elements written so far are dropped and the storage is released.
/// Committing hands the storage over to its new owner.
pub(crate) struct StagedArray<T, A: Allocator> {
    guard: ScopeGuard<Staging<T, A>, fn(Staging<T, A>)>,
}

impl<T, A: Allocator> StagedArray<T, A> {
    /// Acquire storage for exactly `capacity` elements.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, TryReserveError> {
        let raw = RawArray::try_with_capacity_in(capacity, alloc)?;
        let release: fn(Staging<T, A>) = release::<T, A>;
        Ok(Self { guard: scopeguard::guard(Staging { raw, num_init: 0 }, release) })
    }

    /// Number of elements written so far.
    pub fn len(&self) -> usize {
        self.guard.num_init
    }

    pub fn capacity(&self) -> usize {
        self.guard.raw.capacity()
    }

    /// Write the next element.
    ///
    /// # Panics
    ///
    /// Panics if the staged storage is already full.
    pub fn push(&mut self, value: T) {
        let staging = &mut *self.guard;
        assert!(staging.num_init < staging.raw.capacity(), "Staged storage is full");
        // SAFETY: the slot is in bounds and not initialized yet
        unsafe { staging.raw.ptr().add(staging.num_init).write(value) };
        staging.num_init += 1;
    }

    /// Write elements produced by `f` until the storage is full.
    pub fn fill_with<F: FnMut() -> T>(&mut self, mut f: F) {
        while self.len() < self.capacity() {
            self.push(f());
        }
    }

    /// Write clones of all elements in `src`.
    pub fn extend_from_slice(&mut self, src: &[T]) where
        T: Clone
    {
        for value in src {
            self.push(value.clone());
        }
    }

    /// Move `count` elements from `src` into the next slots, without dropping or reading them afterwards from `src`.
    ///
    /// # Safety
    ///
    /// - `src` must point to `count` initialized elements that do not overlap with the staged storage.
    /// - The caller must treat the elements at `src` as moved-from: they may not be used or dropped again.
    pub unsafe fn move_from(&mut self, src: *const T, count: usize) {
        let staging = &mut *self.guard;
        assert!(count <= staging.raw.capacity() - staging.num_init, "Staged storage is too small");
        ptr::copy_nonoverlapping(src, staging.raw.ptr().add(staging.num_init), count);
        staging.num_init += count;
    }

    /// Transfer ownership of the storage, returning it together with the number of initialized leading elements.
    pub fn commit(self) -> (RawArray<T, A>, usize) {
        let Staging { raw, num_init } = ScopeGuard::into_inner(self.guard);
        (raw, num_init)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, panic::{self, AssertUnwindSafe}, rc::Rc};

    use crate::alloc::primitives::LimitedAllocator;
    use super::*;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn commit_transfers_ownership() {
        let alloc = LimitedAllocator::unlimited();
        let mut staged = StagedArray::try_with_capacity_in(3, alloc.clone()).unwrap();
        staged.fill_with(|| 7u32);

        let (raw, num_init) = staged.commit();
        assert_eq!(num_init, 3);
        assert_eq!(raw.capacity(), 3);
        assert_eq!(alloc.stats().live_allocations(), 1);
        assert_eq!(unsafe { *raw.ptr().add(2) }, 7);

        drop(raw);
        assert_eq!(alloc.stats().live_allocations(), 0);
    }

    #[test]
    fn drop_releases_partial_contents() {
        let alloc = LimitedAllocator::unlimited();
        let drops = Rc::new(Cell::new(0));

        let mut staged = StagedArray::try_with_capacity_in(4, alloc.clone()).unwrap();
        staged.push(DropCounter(drops.clone()));
        staged.push(DropCounter(drops.clone()));
        drop(staged);

        assert_eq!(drops.get(), 2);
        assert_eq!(alloc.stats().live_allocations(), 0);
    }

    #[test]
    fn panic_while_filling_releases() {
        let alloc = LimitedAllocator::unlimited();
        let drops = Rc::new(Cell::new(0));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut staged = StagedArray::try_with_capacity_in(4, alloc.clone()).unwrap();
            let mut produced = 0;
            staged.fill_with(|| {
                produced += 1;
                if produced == 3 {
                    panic!("element construction failed");
                }
                DropCounter(drops.clone())
            });
        }));

        assert!(result.is_err());
        assert_eq!(drops.get(), 2);
        assert_eq!(alloc.stats().live_allocations(), 0);
    }

    #[test]
    fn move_from_leaves_tail_free() {
        let src = [1u8, 2, 3];
        let mut staged = StagedArray::try_with_capacity_in(8, LimitedAllocator::unlimited()).unwrap();
        unsafe { staged.move_from(src.as_ptr(), src.len()) };
        staged.push(4);

        let (raw, num_init) = staged.commit();
        assert_eq!(num_init, 4);
        assert_eq!(raw.capacity(), 8);
        assert_eq!(unsafe { core::slice::from_raw_parts(raw.ptr(), num_init) }, &[1, 2, 3, 4]);
    }
}
