use std::{
    alloc::{self, Layout},
    ptr::NonNull,
};

use crate::alloc::Allocator;

/// Allocator calling directly to the system allocator
///
/// Mallocator uses rust's global allocator to retrieve memory
#[derive(Clone, Copy, Default, Debug)]
pub struct Mallocator;

impl Allocator for Mallocator {
    unsafe fn alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() != 0, "Zero-sized allocations are not supported");
        NonNull::new(alloc::alloc(layout))
    }

    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        alloc::dealloc(ptr.as_ptr(), layout);
    }
}

static_assertions::assert_eq_size!(Mallocator, ());
static_assertions::assert_impl_all!(Mallocator: Send, Sync, Clone, Default);

#[cfg(test)]
mod test {
    use std::alloc::Layout;

    use crate::alloc::*;
    use super::Mallocator;

    #[test]
    fn alloc_dealloc() {
        let alloc = Mallocator;
        let layout = Layout::new::<u64>();

        unsafe {
            let ptr = alloc.alloc(layout).unwrap();
            ptr.cast::<u64>().as_ptr().write(42);
            assert_eq!(*ptr.cast::<u64>().as_ptr(), 42);
            alloc.dealloc(ptr, layout);
        }
    }

    #[test]
    fn alloc_aligned() {
        let alloc = Mallocator;
        let layout = Layout::from_size_align(64, 64).unwrap();

        unsafe {
            let ptr = alloc.alloc(layout).unwrap();
            assert_eq!(ptr.as_ptr() as usize % 64, 0);
            alloc.dealloc(ptr, layout);
        }
    }
}
