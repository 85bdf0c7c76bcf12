use core::{
    fmt,
    ops::{Deref, DerefMut},
    ptr,
};

use crate::{
    alloc::{Allocator, primitives::Mallocator},
    collections::{DoubleOrMinReserveStrategy, ReserveStrategy},
};
use super::DynamicArray;

/// A bidirectional cursor over a [`DynamicArray`].
///
/// The cursor is an array reference plus a position in `[0, len]`, where `len` is the past-the-end position.
/// It reads through to the array on every dereference and holds no data of its own.
///
/// Cursors borrow the array they point into, so the array cannot be resized or reassigned while a cursor is alive.
///
/// Having a cursor does not prevent its *position* from changing, only the underlying array.
///
/// # Examples
///
/// ```
/// use growarr_common::dyn_array;
///
/// let arr = dyn_array!['h', 'i'];
/// let mut name = String::new();
///
/// let mut it = arr.begin();
/// while it != arr.end() {
///     name.push(*it.post_increment());
/// }
/// assert_eq!(name, "hi");
/// ```
pub struct ArrayIterator<'a, T, A: Allocator = Mallocator, R: ReserveStrategy = DoubleOrMinReserveStrategy> {
    array: &'a DynamicArray<T, A, R>,
    pos:   usize,
}

impl<'a, T, A: Allocator, R: ReserveStrategy> ArrayIterator<'a, T, A, R> {
    /// Construct an `ArrayIterator` at position `pos`.
    pub const fn new(array: &'a DynamicArray<T, A, R>, pos: usize) -> Self {
        Self { array, pos }
    }

    /// Current position
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The array the cursor points into
    pub const fn array(&self) -> &'a DynamicArray<T, A, R> {
        self.array
    }

    /// Returns a reference to the element at the current position.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is not on an element, e.g. at the past-the-end position.
    pub fn get(&self) -> &'a T {
        let array = self.array;
        &array[self.pos]
    }

    /// Move to the next position (pre-increment)
    pub fn increment(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Move to the next position, returning the cursor as it was before moving (post-increment)
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        self.increment();
        old
    }

    /// Move to the previous position (pre-decrement)
    ///
    /// Moving before the first element is not checked, the cursor can not be dereferenced until it is moved back in range.
    pub fn decrement(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// Move to the previous position, returning the cursor as it was before moving (post-decrement)
    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.decrement();
        old
    }
}

impl<T, A: Allocator, R: ReserveStrategy> Clone for ArrayIterator<'_, T, A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Allocator, R: ReserveStrategy> Copy for ArrayIterator<'_, T, A, R> {}

impl<T, A: Allocator, R: ReserveStrategy> Deref for ArrayIterator<'_, T, A, R> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, A: Allocator, R: ReserveStrategy> PartialEq for ArrayIterator<'_, T, A, R> {
    /// Cursors are equal when they point into the same array at the same position.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.array, other.array) && self.pos == other.pos
    }
}

impl<T, A: Allocator, R: ReserveStrategy> Eq for ArrayIterator<'_, T, A, R> {}

impl<T, A: Allocator, R: ReserveStrategy> fmt::Debug for ArrayIterator<'_, T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayIterator")
            .field("array", &ptr::addr_of!(*self.array))
            .field("position", &self.pos)
            .finish()
    }
}

//--------------------------------------------------------------

/// A bidirectional cursor over a [`DynamicArray`] that can write through to the element it is positioned on.
///
/// As it holds the only borrow of the array, it cannot be copied or compared with other cursors,
/// use [`ArrayIteratorMut::is_end`] to detect the past-the-end position.
///
/// # Examples
///
/// ```
/// use growarr_common::dyn_array;
///
/// let mut arr = dyn_array![1, 2, 3];
///
/// let mut it = arr.begin_mut();
/// while !it.is_end() {
///     *it *= 10;
///     it.increment();
/// }
/// assert_eq!(arr, [10, 20, 30]);
/// ```
pub struct ArrayIteratorMut<'a, T, A: Allocator = Mallocator, R: ReserveStrategy = DoubleOrMinReserveStrategy> {
    array: &'a mut DynamicArray<T, A, R>,
    pos:   usize,
}

impl<'a, T, A: Allocator, R: ReserveStrategy> ArrayIteratorMut<'a, T, A, R> {
    /// Construct an `ArrayIteratorMut` at position `pos`.
    pub fn new(array: &'a mut DynamicArray<T, A, R>, pos: usize) -> Self {
        Self { array, pos }
    }

    /// Current position
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Check if the cursor is at the past-the-end position
    pub fn is_end(&self) -> bool {
        self.pos == self.array.len()
    }

    /// Returns a reference to the element at the current position.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is not on an element, e.g. at the past-the-end position.
    pub fn get(&self) -> &T {
        &self.array[self.pos]
    }

    /// Returns a mutable reference to the element at the current position.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is not on an element, e.g. at the past-the-end position.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.array[self.pos]
    }

    /// Move to the next position (pre-increment)
    pub fn increment(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Move to the previous position (pre-decrement)
    pub fn decrement(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }
}

impl<T, A: Allocator, R: ReserveStrategy> Deref for ArrayIteratorMut<'_, T, A, R> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, A: Allocator, R: ReserveStrategy> DerefMut for ArrayIteratorMut<'_, T, A, R> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T, A: Allocator, R: ReserveStrategy> fmt::Debug for ArrayIteratorMut<'_, T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayIteratorMut")
            .field("array", &ptr::addr_of!(*self.array))
            .field("position", &self.pos)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{collections::DynamicArray, dyn_array};

    #[test]
    fn begin_end() {
        let arr = dyn_array![1, 2, 3];
        assert_eq!(arr.begin().position(), 0);
        assert_eq!(arr.end().position(), 3);
        assert_eq!(*arr.begin(), 1);

        let empty = DynamicArray::<i32>::new(0);
        assert!(empty.begin() == empty.end());
    }

    #[test]
    fn forward_traversal() {
        let arr = dyn_array!['r', 'u', 's', 't'];
        let mut out = String::new();

        let mut it = arr.begin();
        while it != arr.end() {
            out.push(*it);
            it.increment();
        }
        assert_eq!(out, "rust");
    }

    #[test]
    fn backward_traversal() {
        let arr = dyn_array![1, 2, 3];
        let mut out = Vec::new();

        let mut it = arr.end();
        while it != arr.begin() {
            it.decrement();
            out.push(*it);
        }
        assert_eq!(out, [3, 2, 1]);
    }

    #[test]
    fn post_increment_returns_previous() {
        let arr = dyn_array![10, 20];
        let mut it = arr.begin();

        let old = it.post_increment();
        assert_eq!(old.position(), 0);
        assert_eq!(*old, 10);
        assert_eq!(it.position(), 1);
        assert_eq!(*it, 20);

        let old = it.post_decrement();
        assert_eq!(old.position(), 1);
        assert_eq!(it.position(), 0);
    }

    #[test]
    fn pre_increment_chains() {
        let arr = dyn_array![1, 2, 3, 4];
        let mut it = arr.begin();
        it.increment().increment().increment();
        assert_eq!(*it, 4);
        it.decrement().decrement();
        assert_eq!(*it, 2);
    }

    #[test]
    fn equality_is_scoped_to_array() {
        let a = dyn_array![1, 2];
        let b = a.clone();
        assert!(a == b);

        assert!(a.begin() == a.begin());
        assert!(a.begin() != b.begin());
        assert!(a.end() != b.end());

        let mut it = a.begin();
        it.increment();
        assert!(it != a.begin());
        assert!(it == super::ArrayIterator::new(&a, 1));
        assert_eq!(it.array().len(), 2);
    }

    #[test]
    fn decrement_past_start_wraps() {
        let arr = dyn_array![1];
        let mut it = arr.begin();
        it.decrement();
        assert_eq!(it.position(), usize::MAX);
        it.increment();
        assert!(it == arr.begin());
    }

    #[test]
    #[should_panic]
    fn deref_end_panics() {
        let arr = dyn_array![1, 2];
        let _ = arr.end().get();
    }

    #[test]
    fn mutable_cursor_writes() {
        let mut arr = dyn_array!['a', 'b', 'c'];
        {
            let mut it = arr.begin_mut();
            it.increment();
            *it = 'x';
            assert_eq!(*it.get(), 'x');
            it.increment().increment();
            assert!(it.is_end());
            it.decrement();
            *it.get_mut() = 'z';
        }
        assert_eq!(arr, ['a', 'x', 'z']);
    }
}
