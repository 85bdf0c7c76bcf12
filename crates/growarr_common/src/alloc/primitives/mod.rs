mod mallocator;
pub use mallocator::*;

mod limited_allocator;
pub use limited_allocator::*;
