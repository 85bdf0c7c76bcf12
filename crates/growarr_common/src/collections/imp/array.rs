use std::{
    alloc::{self, Layout},
    marker::PhantomData,
    mem::{align_of, size_of},
    ptr::NonNull,
};

use crate::{
    alloc::Allocator,
    collections::TryReserveError,
};

/// Low level utility for more ergonomically allocating and deallocating a buffer of memory in an allocator
/// without having to worry about all the corner cases involved.
/// In particular:
///
/// - Produces a dangling pointer on zero-sized types.
/// - Produces a dangling pointer on zero-length allocations.
/// - Avoids freeing a dangling pointer.
/// - Catches all overflows in capacity computations (promotes them to "capacity overflow" errors).
///
/// This type does not in anyway inspect the memory it manages. When dropped it *will* free its memory, but it *won't* try to drop its contents.
/// It is up to the user of `RawArray` to handle the actual things *stored* inside of `RawArray`.
///
/// Unlike a general purpose raw vector, the capacity is always exactly the requested one, also for zero-sized types,
/// as the owning container reports it as part of its contract.
pub(crate) struct RawArray<T, A: Allocator> {
    ptr:      NonNull<T>,
    cap:      usize,
    alloc:    A,
    _phantom: PhantomData<T>,
}

impl<T, A: Allocator> RawArray<T, A> {
    /// Creates an empty `RawArray` without allocating.
    pub const fn new_in(alloc: A) -> Self {
        Self { ptr: NonNull::dangling(), cap: 0, alloc, _phantom: PhantomData }
    }

    /// Tries to create a `RawArray` (in the allocator) with exactly the capacity and alignment requirements for a `[T; capacity]`.
    /// No memory is requested when `capacity` is `0` or `T` is zero-sized.
    ///
    /// # Error
    ///
    /// Returns `TryReserveError::CapacityOverflow` if the buffer would exceed `isize::MAX` bytes,
    /// or `TryReserveError::AllocError` if the allocator could not provide the memory.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, TryReserveError> {
        // Don't allocate here, because `drop` will not deallocate when the layout is empty.
        if capacity == 0 {
            return Ok(Self::new_in(alloc));
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| TryReserveError::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(Self { ptr: NonNull::dangling(), cap: capacity, alloc, _phantom: PhantomData });
        }

        // SAFETY: `layout` has a non-zero size
        let ptr = match unsafe { alloc.alloc(layout) } {
            Some(ptr) => ptr.cast(),
            None => return Err(TryReserveError::AllocError(layout)),
        };
        Ok(Self { ptr, cap: capacity, alloc, _phantom: PhantomData })
    }

    /// Get the capacity of the allocation.
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Get the allocator used for the allocation.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Get a raw pointer to the start of the allocation.
    /// Note that this is a dangling pointer when either `capacity() == 0` or `T` is zero-sized.
    pub const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if size_of::<T>() == 0 || self.cap == 0 {
            None
        } else {
            // The layout was already validated by `Layout::array` when this memory was allocated.
            debug_assert!(size_of::<T>() % align_of::<T>() == 0);
            unsafe {
                let size = size_of::<T>() * self.cap;
                let layout = Layout::from_size_align_unchecked(size, align_of::<T>());
                Some((self.ptr.cast(), layout))
            }
        }
    }
}

impl<T, A: Allocator> Drop for RawArray<T, A> {
    fn drop(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: `ptr` was allocated by `self.alloc` with `layout` and is only freed here
            unsafe { self.alloc.dealloc(ptr, layout) };
        }
    }
}

// SAFETY: `RawArray` uniquely owns its buffer, like a `Box<[T]>`
unsafe impl<T: Send, A: Allocator + Send> Send for RawArray<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawArray<T, A> {}

/// Central function for reserve error handling
#[cold]
pub(crate) fn handle_error(e: TryReserveError) -> ! {
    match e {
        TryReserveError::CapacityOverflow => capacity_overflow(),
        TryReserveError::AllocError(layout) => alloc::handle_alloc_error(layout),
    }
}

fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
