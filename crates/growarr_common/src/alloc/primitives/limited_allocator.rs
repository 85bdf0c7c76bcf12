use core::cell::Cell;
use std::{alloc::Layout, ptr::NonNull, rc::Rc};

use crate::alloc::Allocator;
use super::Mallocator;

/// Allocation statistics recorded by a [`LimitedAllocator`]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct AllocStats {
    /// Number of successful allocations
    pub allocations:   usize,
    /// Number of deallocations
    pub deallocations: usize,
    /// Number of allocations that were refused because they would exceed the limit
    pub failures:      usize,
    /// Bytes currently handed out and not yet returned
    pub bytes_in_use:  usize,
}

impl AllocStats {
    /// Number of allocations that have not been deallocated yet
    pub const fn live_allocations(&self) -> usize {
        self.allocations - self.deallocations
    }
}

#[derive(Default)]
struct LimitState {
    limit: Cell<Option<usize>>,
    stats: Cell<AllocStats>,
}

/// Budgeted allocator
///
/// Forwards to the [`Mallocator`] as long as the total number of live bytes stays within its limit,
/// any allocation that would go over the limit fails by returning `None`.
/// Every allocation, deallocation and refusal is counted.
///
/// Clones share their budget and statistics, so a container and the copies it makes draw from the same pool.
#[derive(Clone, Default)]
pub struct LimitedAllocator {
    state: Rc<LimitState>,
}

impl LimitedAllocator {
    /// Create an allocator without a limit, which only records statistics
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Create an allocator that allows at most `limit` bytes to be live at once
    pub fn with_limit(limit: usize) -> Self {
        let alloc = Self::default();
        alloc.set_limit(Some(limit));
        alloc
    }

    /// Set the maximum number of live bytes, `None` removes the limit
    pub fn set_limit(&self, limit: Option<usize>) {
        self.state.limit.set(limit);
    }

    /// Get the current limit
    pub fn limit(&self) -> Option<usize> {
        self.state.limit.get()
    }

    /// Get a snapshot of the allocation statistics
    pub fn stats(&self) -> AllocStats {
        self.state.stats.get()
    }

    fn update_stats(&self, f: impl FnOnce(&mut AllocStats)) {
        let mut stats = self.state.stats.get();
        f(&mut stats);
        self.state.stats.set(stats);
    }
}

impl Allocator for LimitedAllocator {
    unsafe fn alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        let in_use = self.state.stats.get().bytes_in_use;
        let fits = match self.limit() {
            Some(limit) => in_use.checked_add(layout.size()).map_or(false, |total| total <= limit),
            None => true,
        };

        let ptr = if fits { Mallocator.alloc(layout) } else { None };
        match ptr {
            Some(_) => self.update_stats(|stats| {
                stats.allocations += 1;
                stats.bytes_in_use += layout.size();
            }),
            None => self.update_stats(|stats| stats.failures += 1),
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        Mallocator.dealloc(ptr, layout);
        self.update_stats(|stats| {
            stats.deallocations += 1;
            stats.bytes_in_use -= layout.size();
        });
    }
}

#[cfg(test)]
mod tests {
    use std::alloc::Layout;

    use crate::alloc::Allocator;
    use super::*;

    #[test]
    fn counts_allocations() {
        let alloc = LimitedAllocator::unlimited();
        let layout = Layout::new::<[u32; 4]>();

        unsafe {
            let a = alloc.alloc(layout).unwrap();
            let b = alloc.alloc(layout).unwrap();
            assert_eq!(alloc.stats().live_allocations(), 2);
            assert_eq!(alloc.stats().bytes_in_use, 32);

            alloc.dealloc(a, layout);
            alloc.dealloc(b, layout);
        }

        assert_eq!(alloc.stats(), AllocStats { allocations: 2, deallocations: 2, failures: 0, bytes_in_use: 0 });
    }

    #[test]
    fn refuses_over_limit() {
        let alloc = LimitedAllocator::with_limit(16);
        let layout = Layout::new::<[u8; 12]>();

        unsafe {
            let a = alloc.alloc(layout).unwrap();
            assert!(alloc.alloc(layout).is_none());
            assert_eq!(alloc.stats().failures, 1);

            alloc.dealloc(a, layout);
            let b = alloc.alloc(layout).unwrap();
            alloc.dealloc(b, layout);
        }
    }

    #[test]
    fn clones_share_budget() {
        let alloc = LimitedAllocator::with_limit(8);
        let other = alloc.clone();
        let layout = Layout::new::<u64>();

        unsafe {
            let ptr = alloc.alloc(layout).unwrap();
            assert!(other.alloc(layout).is_none());
            assert_eq!(other.stats().allocations, 1);

            other.set_limit(None);
            assert_eq!(alloc.limit(), None);
            let second = alloc.alloc(layout).unwrap();

            other.dealloc(ptr, layout);
            alloc.dealloc(second, layout);
        }
        assert_eq!(alloc.stats().live_allocations(), 0);
    }
}
