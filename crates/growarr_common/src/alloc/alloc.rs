use std::{alloc::Layout, ptr::NonNull};

/// Allocator/Arena that can provide access to heap memory for the program
///
/// Allocators that keep state do so through interior mutability, containers hold their allocator by value and clone it
/// when they need to acquire a replacement buffer, so clones are expected to share the same underlying source.
pub trait Allocator {
    /// Allocate memory from an allocator/arena
    ///
    /// # Return
    ///
    /// If no memory could be allocated, `None` should be returned.
    ///
    /// # Safety
    ///
    /// `layout` must have a non-zero size.
    unsafe fn alloc(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Deallocate an allocation
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `alloc` on this allocator (or a clone of it) with the same `layout`,
    /// and must not have been deallocated yet.
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout);
}
