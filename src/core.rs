//! Sequence types for the demo.
//!
//! This module defines:
//! - [`IntArray`]: the bounded integer sequence, a fixed ten-element array.
//! - [`RunStart`]: a start-of-run view that hides how long the run is.
//! - [`DisplayElement`]: how an element type is written to the console.

use cuneiform::cuneiform;
use std::fmt;
use std::mem::size_of;

use crate::error::SortError;

/// Number of values in the bounded integer sequence.
pub const INT_ARRAY_LEN: usize = 10;

/// Literal contents of the bounded integer sequence.
pub const DEMO_INTS: [i32; INT_ARRAY_LEN] = [35, 10, 93, 85, 62, 77, 345, 43, 2, 10];

/// Literal contents of the dynamic character sequence.
pub const DEMO_CHARS: [char; 8] = ['t', 'o', 'y', ' ', 'b', 'o', 'a', 't'];

/// A fixed-length run of signed integers, stored inline on the stack.
///
/// The length is known only where the array is declared. Anything that
/// sorts it through [`IntArray::run_start`] must be told the count.
#[cuneiform]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntArray {
    values: [i32; INT_ARRAY_LEN],
}

impl IntArray {
    pub const fn new(values: [i32; INT_ARRAY_LEN]) -> Self {
        Self { values }
    }

    /// The ten demo values, unsorted.
    pub const fn demo() -> Self {
        Self::new(DEMO_INTS)
    }

    /// Element count taken from the declared storage width.
    ///
    /// This is only correct here, at the declaration site. Compare
    /// [`RunStart::decayed_count`].
    pub const fn num_elements() -> usize {
        size_of::<[i32; INT_ARRAY_LEN]>() / size_of::<i32>()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Hands out the start of the run, dropping its length.
    pub fn run_start(&mut self) -> RunStart<'_, i32> {
        RunStart::new(&mut self.values)
    }
}

/// The start of a contiguous run whose length the holder cannot ask for.
///
/// Callers pair it with an element count. The backing capacity is not
/// exposed by an accessor; it is kept to refuse counts that would run past
/// the storage, and [`SortError::CountOutOfBounds`] reports it when that
/// happens.
pub struct RunStart<'a, T> {
    storage: &'a mut [T],
}

impl<'a, T> RunStart<'a, T> {
    pub fn new(storage: &'a mut [T]) -> Self {
        Self { storage }
    }

    /// The count a callee gets when it divides the width of its start
    /// reference by the element width instead of being told the count.
    ///
    /// On a 64-bit target this is 2 for `i32` and `char`, whatever the
    /// real run holds.
    pub const fn decayed_count() -> usize {
        let elem = size_of::<T>();
        size_of::<&T>() / if elem == 0 { 1 } else { elem }
    }

    /// The first `count` elements of the run.
    pub fn elements(&self, count: usize) -> Result<&[T], SortError> {
        self.storage.get(..count).ok_or(SortError::CountOutOfBounds {
            count,
            capacity: self.storage.len(),
        })
    }

    /// The first `count` elements of the run, mutably.
    pub fn elements_mut(&mut self, count: usize) -> Result<&mut [T], SortError> {
        let capacity = self.storage.len();
        self.storage
            .get_mut(..count)
            .ok_or(SortError::CountOutOfBounds { count, capacity })
    }
}

// Debug output leaves the storage out so it cannot be read back as a length.
impl<T> fmt::Debug for RunStart<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunStart").finish_non_exhaustive()
    }
}

/// An element type the display routines know how to write.
///
/// Each element is written with its `Display` impl followed by
/// [`SEPARATOR`](Self::SEPARATOR); the line is closed with
/// [`TERMINATOR`](Self::TERMINATOR).
///
/// # Examples
///
/// ```
/// use seqsort::core::DisplayElement;
///
/// #[derive(Clone, Copy)]
/// struct Celsius(i16);
///
/// impl std::fmt::Display for Celsius {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// impl DisplayElement for Celsius {
///     const SEPARATOR: &'static str = ", ";
///     const TERMINATOR: &'static str = "\n";
/// }
/// ```
pub trait DisplayElement: fmt::Display {
    const SEPARATOR: &'static str;
    const TERMINATOR: &'static str;
}

impl DisplayElement for i32 {
    const SEPARATOR: &'static str = " ";
    const TERMINATOR: &'static str = "\n";
}

// Characters read as a word, so no separator and a blank line after.
impl DisplayElement for char {
    const SEPARATOR: &'static str = "";
    const TERMINATOR: &'static str = "\n\n";
}

/// Identifies which routine produced a display, e.g. `main(): array before sort`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Label {
    pub routine: &'static str,
    pub message: &'static str,
}

impl Label {
    pub const fn new(routine: &'static str, message: &'static str) -> Self {
        Self { routine, message }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(): {}", self.routine, self.message)
    }
}
