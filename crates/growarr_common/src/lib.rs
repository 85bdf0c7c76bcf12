//! Core containers and memory utilities for growarr.
//!
//! The main type is [`collections::DynamicArray`], a contiguous growable array with a doubling growth policy,
//! together with its bidirectional cursors [`collections::ArrayIterator`] and [`collections::ArrayIteratorMut`].

pub mod alloc;
pub mod collections;
pub mod prelude;
