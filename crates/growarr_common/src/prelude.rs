pub use crate::alloc::{Allocator, primitives::Mallocator};
pub use crate::collections::{
    ArrayError,
    ArrayIterator,
    ArrayIteratorMut,
    DynamicArray,
    OutOfRangeError,
    TryReserveError,
};
pub use crate::dyn_array;
