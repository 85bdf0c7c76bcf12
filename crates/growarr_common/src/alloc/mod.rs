mod alloc;

pub mod primitives;

pub use alloc::*;
