use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

use cfg_if::cfg_if;

use crate::alloc::{Allocator, primitives::Mallocator};
use super::{
    imp::{array::{handle_error, RawArray}, staged::StagedArray},
    impl_slice_partial_eq_generic,
    DoubleOrMinReserveStrategy,
    OutOfRangeError,
    ReserveStrategy,
    TryReserveError,
};

mod iterator;
pub use iterator::*;


/// A contiguous growable array type with value semantics, also known as a dynamic array.
///
/// Dynamic arrays have *O*(1) indexing and amortized *O*(1) growth when written one past their end.
///
/// # Examples
///
/// ```
/// use growarr_common::collections::DynamicArray;
///
/// let mut arr = DynamicArray::from_elem(1, 'D');
/// assert_eq!(arr.len(), 1);
/// assert_eq!(arr[0], 'D');
///
/// arr.set('h', 0);
/// arr.set('i', 1);
/// assert_eq!(arr, ['h', 'i']);
///
/// assert!(arr.get(5).is_err());
/// ```
///
/// The [`dyn_array!`] macro is provided for convenient initialization:
///
/// ```
/// use growarr_common::dyn_array;
///
/// let arr = dyn_array![1, 2, 3];
/// assert_eq!(arr, [1, 2, 3]);
///
/// let zeros = dyn_array![0; 5];
/// assert_eq!(zeros, [0, 0, 0, 0, 0]);
/// ```
///
/// # Indexing
///
/// Elements can be read and written with the index operator, which panics when the index is not below [`len`].
/// [`get`] and [`get_mut`] report an [`OutOfRangeError`] instead,
/// and [`set`] grows the array when writing past its end.
/// [`get_unchecked`] and [`get_unchecked_mut`] skip all checks.
///
/// # Capacity and reallocation
///
/// The capacity of a dynamic array is the number of slots in its buffer,
/// the *length* is the number of those slots that are logically part of the array.
/// The capacity is never smaller than the length.
///
/// Every constructor, [`Clone::clone`] and [`Clone::clone_from`] produce an array whose capacity equals its length.
/// Resizing within the capacity never reallocates: shrinking only lowers the length,
/// and growing again exposes whatever values were left in those slots before (slots that were never written are filled with `T::default()`).
///
/// Growing past the capacity reallocates, the new capacity is chosen by the reserve strategy `R`.
/// The default, [`DoubleOrMinReserveStrategy`], picks the larger of the requested length and double the current capacity,
/// which keeps a sequence of *n* appending writes at *O*(*n*) total work.
/// Only the elements below the length are moved into the new buffer.
///
/// Any operation that needs new storage has a `try_` variant that reports a [`TryReserveError`],
/// in which case the array is left exactly as it was.
/// The other variant panics on capacity overflow and aborts through [`std::alloc::handle_alloc_error`] when out of memory.
///
/// # Cursors
///
/// [`begin`] and [`end`] return [`ArrayIterator`]s, bidirectional cursors positioned on the first element and one past the last element.
/// Because they borrow the array, it cannot be reallocated while a cursor is alive.
///
/// [`len`]: DynamicArray::len
/// [`get`]: DynamicArray::get
/// [`get_mut`]: DynamicArray::get_mut
/// [`set`]: DynamicArray::set
/// [`get_unchecked`]: DynamicArray::get_unchecked
/// [`get_unchecked_mut`]: DynamicArray::get_unchecked_mut
/// [`begin`]: DynamicArray::begin
/// [`end`]: DynamicArray::end
/// [`dyn_array!`]: crate::dyn_array
pub struct DynamicArray<T, A: Allocator = Mallocator, R: ReserveStrategy = DoubleOrMinReserveStrategy> {
    buf:      RawArray<T, A>,
    len:      usize,
    // Slots `[len, num_init)` hold stale values from shrinking, slots `[num_init, capacity)` are uninitialized
    num_init: usize,
    _phantom: PhantomData<R>,
}

impl<T> DynamicArray<T> {
    /// Constructs a new `DynamicArray` with `size` default-constructed elements.
    ///
    /// The capacity will be exactly `size`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    #[must_use]
    pub fn new(size: usize) -> Self where
        T: Default
    {
        Self::new_in(size, Mallocator)
    }

    /// Tries to construct a new `DynamicArray` with `size` default-constructed elements.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports an allocation failure.
    pub fn try_new(size: usize) -> Result<Self, TryReserveError> where
        T: Default
    {
        Self::try_new_in(size, Mallocator)
    }

    /// Constructs a new `DynamicArray` with `size` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    #[must_use]
    pub fn from_elem(size: usize, value: T) -> Self where
        T: Clone
    {
        Self::from_elem_in(size, value, Mallocator)
    }

    /// Tries to construct a new `DynamicArray` with `size` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports an allocation failure.
    pub fn try_from_elem(size: usize, value: T) -> Result<Self, TryReserveError> where
        T: Clone
    {
        Self::try_from_elem_in(size, value, Mallocator)
    }
}

impl<T, A: Allocator, R: ReserveStrategy> DynamicArray<T, A, R> {
    /// Constructs a new, empty `DynamicArray` using the given allocator.
    ///
    /// The dynamic array will not allocate until it grows.
    #[must_use]
    pub const fn empty_in(alloc: A) -> Self {
        Self { buf: RawArray::new_in(alloc), len: 0, num_init: 0, _phantom: PhantomData }
    }

    /// Constructs a new `DynamicArray` with `size` default-constructed elements using the given allocator.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    #[must_use]
    pub fn new_in(size: usize, alloc: A) -> Self where
        T: Default
    {
        Self::try_new_in(size, alloc).unwrap_or_else(|err| handle_error(err))
    }

    /// Tries to construct a new `DynamicArray` with `size` default-constructed elements using the given allocator.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports an allocation failure.
    pub fn try_new_in(size: usize, alloc: A) -> Result<Self, TryReserveError> where
        T: Default
    {
        let mut staged = StagedArray::try_with_capacity_in(size, alloc)?;
        staged.fill_with(T::default);
        Ok(Self::from_staged(staged))
    }

    /// Constructs a new `DynamicArray` with `size` clones of `value` using the given allocator.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    #[must_use]
    pub fn from_elem_in(size: usize, value: T, alloc: A) -> Self where
        T: Clone
    {
        Self::try_from_elem_in(size, value, alloc).unwrap_or_else(|err| handle_error(err))
    }

    /// Tries to construct a new `DynamicArray` with `size` clones of `value` using the given allocator.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports an allocation failure.
    pub fn try_from_elem_in(size: usize, value: T, alloc: A) -> Result<Self, TryReserveError> where
        T: Clone
    {
        let mut staged = StagedArray::try_with_capacity_in(size, alloc)?;
        staged.fill_with(|| value.clone());
        Ok(Self::from_staged(staged))
    }

    /// Tries to construct a new `DynamicArray` holding clones of the elements in `src`, using the given allocator.
    ///
    /// The capacity will be exactly `src.len()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports an allocation failure.
    pub fn try_from_slice_in(src: &[T], alloc: A) -> Result<Self, TryReserveError> where
        T: Clone
    {
        let mut staged = StagedArray::try_with_capacity_in(src.len(), alloc)?;
        staged.extend_from_slice(src);
        Ok(Self::from_staged(staged))
    }

    /// Tries to construct a new `DynamicArray` by moving the elements of `src`, using the given allocator.
    ///
    /// # Errors
    ///
    /// Returns an error if the allocator reports an allocation failure.
    pub fn try_from_array_in<const N: usize>(src: [T; N], alloc: A) -> Result<Self, TryReserveError> {
        let mut staged = StagedArray::try_with_capacity_in(N, alloc)?;
        for value in src {
            staged.push(value);
        }
        Ok(Self::from_staged(staged))
    }

    fn from_staged(staged: StagedArray<T, A>) -> Self {
        let (buf, num_init) = staged.commit();
        debug_assert_eq!(num_init, buf.capacity());
        Self { buf, len: num_init, num_init, _phantom: PhantomData }
    }

    /// Returns the number of elements in the dynamic array, also referred to as its 'length'.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the dynamic array contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of elements the dynamic array can hold without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a reference to the underlying allocator.
    #[inline]
    pub const fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns a raw pointer to the dynamic array's buffer, or a dangling pointer when nothing is allocated.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a raw mutable pointer to the dynamic array's buffer, or a dangling pointer when nothing is allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Extracts a slice containing the entire dynamic array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` elements are initialized
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire dynamic array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` elements are initialized
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    fn in_range(&self, index: usize) -> bool {
        index < self.len
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Never grows the dynamic array.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `index` is not less than [`len`](DynamicArray::len).
    pub fn get(&self, index: usize) -> Result<&T, OutOfRangeError> {
        if self.in_range(index) {
            // SAFETY: bounds checked above
            Ok(unsafe { self.get_unchecked(index) })
        } else {
            Err(OutOfRangeError { index, len: self.len })
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] if `index` is not less than [`len`](DynamicArray::len).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        if self.in_range(index) {
            // SAFETY: bounds checked above
            Ok(unsafe { self.get_unchecked_mut(index) })
        } else {
            Err(OutOfRangeError { index, len: self.len })
        }
    }

    /// Returns a reference to the element at `index`, without doing any bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](DynamicArray::len), calling this with an out-of-bounds index is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "get_unchecked requires that the index is within the array's length");
        &*self.buf.ptr().add(index)
    }

    /// Returns a mutable reference to the element at `index`, without doing any bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](DynamicArray::len), calling this with an out-of-bounds index is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "get_unchecked_mut requires that the index is within the array's length");
        &mut *self.buf.ptr().add(index)
    }

    /// Returns a cursor positioned on the first element.
    pub fn begin(&self) -> ArrayIterator<'_, T, A, R> {
        ArrayIterator::new(self, 0)
    }

    /// Returns a cursor positioned one past the last element.
    ///
    /// The returned cursor must not be dereferenced.
    pub fn end(&self) -> ArrayIterator<'_, T, A, R> {
        ArrayIterator::new(self, self.len)
    }

    /// Returns a mutable cursor positioned on the first element.
    pub fn begin_mut(&mut self) -> ArrayIteratorMut<'_, T, A, R> {
        ArrayIteratorMut::new(self, 0)
    }

    /// Resizes the `DynamicArray` so that its length is equal to `new_len`.
    ///
    /// If `new_len` fits within the capacity, only the length changes: slots below the old capacity keep the values they had,
    /// slots that never held a value are filled with `T::default()`.
    /// Otherwise the dynamic array is reallocated with a capacity chosen by `R`, moving over the first `len` elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    pub fn resize(&mut self, new_len: usize) where
        T: Default,
        A: Clone
    {
        if let Err(err) = self.try_resize(new_len) {
            handle_error(err);
        }
    }

    /// Tries to resize the `DynamicArray` so that its length is equal to `new_len`, see [`resize`](DynamicArray::resize).
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity exceeds `isize::MAX` _bytes_, or if the allocator reports an allocation failure.
    /// The dynamic array is unchanged when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarr_common::dyn_array;
    ///
    /// let mut arr = dyn_array![1, 2, 3];
    /// arr.try_resize(1).unwrap();
    /// assert_eq!(arr, [1]);
    ///
    /// // Still within the capacity, so the old values are visible again
    /// arr.try_resize(3).unwrap();
    /// assert_eq!(arr, [1, 2, 3]);
    ///
    /// arr.try_resize(4).unwrap();
    /// assert_eq!(arr, [1, 2, 3, 0]);
    /// assert_eq!(arr.capacity(), 6);
    /// ```
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), TryReserveError> where
        T: Default,
        A: Clone
    {
        if new_len > self.capacity() {
            self.try_grow_to(new_len)?;
        }
        self.fill_default_to(new_len);
        self.len = new_len;
        Ok(())
    }

    /// Writes `value` at `index`, growing the dynamic array to `index + 1` elements first if `index` is not within its length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` _bytes_.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    pub fn set(&mut self, value: T, index: usize) where
        T: Default,
        A: Clone
    {
        if let Err(err) = self.try_set(value, index) {
            handle_error(err);
        }
    }

    /// Tries to write `value` at `index`, see [`set`](DynamicArray::set).
    ///
    /// # Errors
    ///
    /// Returns an error if growing the dynamic array failed, in which case it is unchanged and `value` is dropped.
    pub fn try_set(&mut self, value: T, index: usize) -> Result<(), TryReserveError> where
        T: Default,
        A: Clone
    {
        if !self.in_range(index) {
            let new_len = index.checked_add(1).ok_or(TryReserveError::CapacityOverflow)?;
            self.try_resize(new_len)?;
        }
        // SAFETY: `index < len` after the resize
        unsafe { *self.get_unchecked_mut(index) = value };
        Ok(())
    }

    /// Tries to make a copy of the dynamic array, with a capacity equal to its length.
    ///
    /// # Errors
    ///
    /// Returns an error if the allocator reports an allocation failure.
    pub fn try_clone(&self) -> Result<Self, TryReserveError> where
        T: Clone,
        A: Clone
    {
        Self::try_from_slice_in(self.as_slice(), self.allocator().clone())
    }

    /// Tries to replace the contents of the dynamic array with clones of the elements of `source`.
    ///
    /// The copy is built in a new buffer of exactly `source.len()` elements before it replaces the current one,
    /// so afterwards the capacity equals the length, even if that shrinks the allocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the allocator reports an allocation failure, in which case the dynamic array is unchanged.
    pub fn try_assign<A2: Allocator, R2: ReserveStrategy>(&mut self, source: &DynamicArray<T, A2, R2>) -> Result<(), TryReserveError> where
        T: Clone,
        A: Clone
    {
        let mut copy = Self::try_from_slice_in(source.as_slice(), self.allocator().clone())?;
        mem::swap(self, &mut copy);
        // `copy` now holds the previous buffer and releases it on drop
        Ok(())
    }

    /// Grow the buffer to hold at least `min_capacity` elements, moving the elements below the length.
    fn try_grow_to(&mut self, min_capacity: usize) -> Result<(), TryReserveError> where
        A: Clone
    {
        debug_assert!(min_capacity > self.capacity());

        let old_capacity = self.capacity();
        let mut staged = R::calculate(old_capacity, min_capacity)
            .and_then(|new_capacity| StagedArray::try_with_capacity_in(new_capacity, self.allocator().clone()))
            .map_err(|err| {
                report_reserve_error(err, min_capacity);
                err
            })?;

        // Stale values past the length are not carried over
        let stale = self.num_init - self.len;
        self.num_init = self.len;
        // SAFETY:
        // - slots `[len, len + stale)` were initialized and are no longer tracked
        // - slots `[0, len)` are moved out, after which the old buffer is only released, never read or dropped
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr().add(self.len), stale));
            staged.move_from(self.buf.ptr(), self.len);
        }

        let (buf, num_init) = staged.commit();
        debug_assert_eq!(num_init, self.len);
        let new_capacity = buf.capacity();
        drop(mem::replace(&mut self.buf, buf));

        report_growth(old_capacity, new_capacity, min_capacity);
        Ok(())
    }

    fn fill_default_to(&mut self, end: usize) where
        T: Default
    {
        debug_assert!(end <= self.capacity());
        while self.num_init < end {
            // SAFETY: the slot is within the capacity and uninitialized
            unsafe { self.buf.ptr().add(self.num_init).write(T::default()) };
            self.num_init += 1;
        }
    }
}

cfg_if! {
    if #[cfg(feature = "growth_logging")] {
        const LOG_CAT: growarr_logging::LogCategory = growarr_logging::LogCategory::new_with_sub("Collections", "DynamicArray");

        fn report_growth(old_capacity: usize, new_capacity: usize, requested: usize) {
            growarr_logging::log_verbose!(LOG_CAT, "Reallocated from {old_capacity} to {new_capacity} elements ({requested} requested)");
        }

        #[cold]
        fn report_reserve_error(err: TryReserveError, requested: usize) {
            growarr_logging::log_error!(LOG_CAT, report_reserve_error, "Failed to grow to {requested} elements: {err}");
        }
    } else {
        #[inline(always)]
        fn report_growth(_old_capacity: usize, _new_capacity: usize, _requested: usize) {}

        #[inline(always)]
        fn report_reserve_error(_err: TryReserveError, _requested: usize) {}
    }
}

impl<T, A: Allocator, R: ReserveStrategy> Drop for DynamicArray<T, A, R> {
    fn drop(&mut self) {
        unsafe {
            // Stale values past the length are still owned by the array
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.num_init))
        }
        // RawArray handles deallocation
    }
}

impl<T: Clone, A: Allocator + Clone, R: ReserveStrategy> Clone for DynamicArray<T, A, R> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| handle_error(err))
    }

    /// Overwrites the contents of `self` with a clone of the contents of `source`.
    ///
    /// Unlike a `Vec`, this always builds a new buffer of exactly `source.len()` elements, see [`DynamicArray::try_assign`].
    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_assign(source) {
            handle_error(err);
        }
    }
}

impl<T, A: Allocator + Default, R: ReserveStrategy> Default for DynamicArray<T, A, R> {
    /// Creates an empty `DynamicArray<T>`.
    ///
    /// The dynamic array will not allocate until it grows.
    fn default() -> Self {
        Self::empty_in(A::default())
    }
}

impl<T: fmt::Debug, A: Allocator, R: ReserveStrategy> fmt::Debug for DynamicArray<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Hash, A: Allocator, R: ReserveStrategy> Hash for DynamicArray<T, A, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator, R: ReserveStrategy> Index<I> for DynamicArray<T, A, R> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator, R: ReserveStrategy> IndexMut<I> for DynamicArray<T, A, R> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl_slice_partial_eq_generic!([A0: Allocator, A1: Allocator, R0: ReserveStrategy, R1: ReserveStrategy] DynamicArray<T, A0, R0>, DynamicArray<U, A1, R1>);
impl_slice_partial_eq_generic!([A: Allocator, R: ReserveStrategy] DynamicArray<T, A, R>, &[U]);
impl_slice_partial_eq_generic!([A: Allocator, R: ReserveStrategy] DynamicArray<T, A, R>, &mut [U]);
impl_slice_partial_eq_generic!([A: Allocator, R: ReserveStrategy] DynamicArray<T, A, R>, [U]);
impl_slice_partial_eq_generic!([A: Allocator, R: ReserveStrategy, const N: usize] DynamicArray<T, A, R>, [U; N]);
impl_slice_partial_eq_generic!([A: Allocator, R: ReserveStrategy] [T], DynamicArray<U, A, R>);
impl_slice_partial_eq_generic!([A: Allocator, R: ReserveStrategy, const N: usize] [T; N], DynamicArray<U, A, R>);

impl<T: Eq, A: Allocator, R: ReserveStrategy> Eq for DynamicArray<T, A, R> {}

impl<T, A: Allocator, R: ReserveStrategy> AsRef<[T]> for DynamicArray<T, A, R> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator, R: ReserveStrategy> AsMut<[T]> for DynamicArray<T, A, R> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, A: Allocator + Default, R: ReserveStrategy> From<&[T]> for DynamicArray<T, A, R> {
    /// Allocate a `DynamicArray<T>` and fill it by cloning `s`'s items.
    fn from(s: &[T]) -> Self {
        Self::try_from_slice_in(s, A::default()).unwrap_or_else(|err| handle_error(err))
    }
}

impl<T, A: Allocator + Default, R: ReserveStrategy, const N: usize> From<[T; N]> for DynamicArray<T, A, R> {
    /// Allocate a `DynamicArray<T>` and move `s`'s items into it.
    fn from(s: [T; N]) -> Self {
        Self::try_from_array_in(s, A::default()).unwrap_or_else(|err| handle_error(err))
    }
}

impl<'a, T, A: Allocator, R: ReserveStrategy> IntoIterator for &'a DynamicArray<T, A, R> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator, R: ReserveStrategy> IntoIterator for &'a mut DynamicArray<T, A, R> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Creates a [`DynamicArray`] containing the arguments.
///
/// - `dyn_array![a, b, c]` moves the given elements into a new dynamic array.
/// - `dyn_array![value; n]` creates a dynamic array of `n` clones of `value`.
///
/// In both cases the capacity equals the length.
#[macro_export]
macro_rules! dyn_array {
    () => {
        <$crate::collections::DynamicArray<_>>::default()
    };
    ($elem:expr; $n:expr) => {
        <$crate::collections::DynamicArray<_>>::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::collections::DynamicArray<_>>::from([$($x),+])
    };
}
