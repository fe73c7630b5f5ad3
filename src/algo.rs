//! Sort routines, one per way of handing a sequence to the callee.
//!
//! - [`sort_run`]: start of run plus an explicit count (bounded integer sequence).
//! - [`sort_by_value`]: takes an owned copy; the caller never sees the result.
//! - [`sort_by_ref`]: borrows the caller's sequence; the caller sees the result.
//!
//! All three use the standard comparison sort with the element type's `Ord`.

use crate::core::RunStart;
use crate::error::SortError;
use tracing::{debug, warn};

/// Sorts the first `count` elements behind `start` into ascending order.
///
/// `count` has to come from the caller, who knows how the run was
/// declared. A count below the real length sorts only a prefix and leaves
/// the rest as it was. A count past the end of the storage is refused
/// with [`SortError::CountOutOfBounds`] and nothing is reordered.
///
/// Passing discipline: mutable borrow through [`RunStart`].
///
/// # Examples
///
/// ```
/// use seqsort::algo::sort_run;
/// use seqsort::core::IntArray;
///
/// let mut array = IntArray::demo();
/// sort_run(array.run_start(), IntArray::num_elements()).unwrap();
///
/// assert_eq!(array.as_slice(), &[2, 10, 10, 35, 43, 62, 77, 85, 93, 345]);
/// ```
pub fn sort_run<T: Ord>(mut start: RunStart<'_, T>, count: usize) -> Result<(), SortError> {
    let run = start.elements_mut(count).inspect_err(|err| {
        warn!(count, %err, "refusing to sort past the end of the run");
    })?;
    debug!(count, discipline = "start+count", "sorting run");
    run.sort_unstable();
    Ok(())
}

/// Sorts an owned sequence, shows it to `observe`, then drops it.
///
/// Passing discipline: by value. The caller hands over an independent
/// copy (usually a `clone()`), so the call has no effect the caller can
/// observe on its own sequence. `observe` sees the sorted copy and its
/// result is passed back.
///
/// # Examples
///
/// ```
/// use seqsort::algo::sort_by_value;
///
/// let chars = vec!['t', 'o', 'y'];
/// let seen = sort_by_value(chars.clone(), |sorted| sorted.to_vec());
///
/// assert_eq!(seen, vec!['o', 't', 'y']);
/// assert_eq!(chars, vec!['t', 'o', 'y']);
/// ```
pub fn sort_by_value<T, F, R>(mut seq: Vec<T>, observe: F) -> R
where
    T: Ord,
    F: FnOnce(&[T]) -> R,
{
    debug!(len = seq.len(), discipline = "by value", "sorting copy");
    seq.sort_unstable();
    observe(&seq)
}

/// Sorts the caller's sequence in place, using its own length.
///
/// Passing discipline: by mutable reference. The caller's sequence is
/// ascending once this returns.
///
/// # Examples
///
/// ```
/// use seqsort::algo::sort_by_ref;
///
/// let mut chars = vec!['t', 'o', 'y'];
/// sort_by_ref(&mut chars);
///
/// assert_eq!(chars, vec!['o', 't', 'y']);
/// ```
pub fn sort_by_ref<T: Ord>(seq: &mut [T]) {
    debug!(len = seq.len(), discipline = "by reference", "sorting in place");
    seq.sort_unstable();
}

/// Returns `true` if `seq` is in non-decreasing order.
pub fn is_ascending<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}
