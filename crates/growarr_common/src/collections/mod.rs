mod imp;
mod dyn_array;

use core::{alloc::Layout, fmt};
use std::error::Error;

pub use dyn_array::*;

//--------------------------------------------------------------

macro_rules! impl_slice_partial_eq_generic {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty $(where $ty:ty: $bound:ident)?) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs  where
            T : PartialEq<U>,
            $($ty: $bound)?
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
            #[inline]
            fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
        }
    };
}
use impl_slice_partial_eq_generic;

//--------------------------------------------------------------

/// Error returned when a container could not acquire the storage it needed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TryReserveError {
    /// The requested capacity does not fit in `isize::MAX` bytes, or its computation overflowed.
    CapacityOverflow,
    /// The allocator could not provide memory for the given layout.
    AllocError(Layout),
}

impl fmt::Display for TryReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("memory allocation failed: capacity overflow"),
            Self::AllocError(layout) => write!(
                f,
                "memory allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
        }
    }
}

impl Error for TryReserveError {}

/// Error returned by a bounds-checked access with an index past the logical length.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutOfRangeError {
    /// The requested index.
    pub index: usize,
    /// The length of the container at the time of the access.
    pub len:   usize,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl Error for OutOfRangeError {}

/// Any error reported by a [`DynamicArray`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrayError {
    Reserve(TryReserveError),
    OutOfRange(OutOfRangeError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserve(err) => fmt::Display::fmt(err, f),
            Self::OutOfRange(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Reserve(err) => Some(err),
            Self::OutOfRange(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for ArrayError {
    fn from(err: TryReserveError) -> Self {
        Self::Reserve(err)
    }
}

impl From<OutOfRangeError> for ArrayError {
    fn from(err: OutOfRangeError) -> Self {
        Self::OutOfRange(err)
    }
}

//--------------------------------------------------------------

/// A trait used to define a strategy to reserve additional memory for containers.
pub trait ReserveStrategy {
    /// Calculate the new capacity for a container.
    ///
    /// `cur_capacity` represents the current capacity of the container.
    ///
    /// `min_capacity` represents the minimum required capacity to be able to resize, and is larger than `cur_capacity`.
    ///
    /// The returned capacity is never smaller than `min_capacity`.
    /// Returns `Err(TryReserveError::CapacityOverflow)` if the capacity were to overflow
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, TryReserveError>;
}

/// A reserve strategy that will try to either return double the current capacity, or the minimum required capacity, whichever is bigger.
pub struct DoubleOrMinReserveStrategy;

impl ReserveStrategy for DoubleOrMinReserveStrategy {
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, TryReserveError> {
        let double_cap = cur_capacity.checked_mul(2).ok_or(TryReserveError::CapacityOverflow)?;
        let new_cap = if double_cap > min_capacity { double_cap } else { min_capacity };
        if new_cap <= isize::MAX as usize {
            Ok(new_cap)
        } else {
            Err(TryReserveError::CapacityOverflow)
        }
    }
}

/// A reserve strategy that will return a power of 2 capacity
pub struct Pow2ReserveStrategy;

impl ReserveStrategy for Pow2ReserveStrategy {
    fn calculate(_cur_capacity: usize, min_capacity: usize) -> Result<usize, TryReserveError> {
        match min_capacity.checked_next_power_of_two() {
            Some(new_cap) if new_cap <= isize::MAX as usize => Ok(new_cap),
            _ => Err(TryReserveError::CapacityOverflow),
        }
    }
}

/// A reserve stategy that grows the capacity by 1.5
pub struct ThreeHalvesReserveStrategy;

impl ReserveStrategy for ThreeHalvesReserveStrategy {
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, TryReserveError> {
        let mut cap = cur_capacity.max(1);
        while cap < min_capacity {
            // `max(1)` keeps tiny capacities moving
            cap = cap.checked_add((cap >> 1).max(1)).ok_or(TryReserveError::CapacityOverflow)?;
        }
        if cap <= isize::MAX as usize {
            Ok(cap)
        } else {
            Err(TryReserveError::CapacityOverflow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_or_min() {
        assert_eq!(DoubleOrMinReserveStrategy::calculate(0, 1), Ok(1));
        assert_eq!(DoubleOrMinReserveStrategy::calculate(1, 2), Ok(2));
        assert_eq!(DoubleOrMinReserveStrategy::calculate(4, 5), Ok(8));
        assert_eq!(DoubleOrMinReserveStrategy::calculate(4, 20), Ok(20));
        assert_eq!(DoubleOrMinReserveStrategy::calculate(usize::MAX / 2 + 1, usize::MAX), Err(TryReserveError::CapacityOverflow));
        assert_eq!(DoubleOrMinReserveStrategy::calculate(1, isize::MAX as usize + 1), Err(TryReserveError::CapacityOverflow));
    }

    #[test]
    fn pow2() {
        assert_eq!(Pow2ReserveStrategy::calculate(0, 1), Ok(1));
        assert_eq!(Pow2ReserveStrategy::calculate(4, 5), Ok(8));
        assert_eq!(Pow2ReserveStrategy::calculate(8, 9), Ok(16));
        assert_eq!(Pow2ReserveStrategy::calculate(0, usize::MAX), Err(TryReserveError::CapacityOverflow));
    }

    #[test]
    fn three_halves() {
        assert_eq!(ThreeHalvesReserveStrategy::calculate(0, 1), Ok(1));
        assert_eq!(ThreeHalvesReserveStrategy::calculate(1, 2), Ok(2));
        assert_eq!(ThreeHalvesReserveStrategy::calculate(4, 5), Ok(6));
        assert_eq!(ThreeHalvesReserveStrategy::calculate(10, 100), Ok(109));
    }

    #[test]
    fn error_display() {
        let err = ArrayError::from(OutOfRangeError { index: 5, len: 2 });
        assert_eq!(err.to_string(), "index 5 out of range for length 2");
        assert!(err.source().is_some());

        let err = ArrayError::from(TryReserveError::AllocError(Layout::from_size_align(8, 8).unwrap()));
        assert_eq!(err.to_string(), "memory allocation of 8 bytes (align 8) failed");
        assert_eq!(TryReserveError::CapacityOverflow.to_string(), "memory allocation failed: capacity overflow");
    }
}
