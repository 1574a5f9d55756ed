//! Recursive quicksort with the Hoare partition scheme and a middle element pivot.

use std::error::Error;
use std::fmt;

/// Returned by [`try_quick_sort_range`] when the requested range does not fit the slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// `first` or `last` is not a valid index into a slice of length `len`.
    OutOfBounds {
        first: usize,
        last: usize,
        len: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::OutOfBounds { first, last, len } => write!(
                f,
                "sort range [{first}, {last}] out of bounds for slice of length {len}"
            ),
        }
    }
}

impl Error for RangeError {}

/// Sorts `v` in non-descending order, in place.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// An empty slice is a no-op.
#[inline]
pub fn quick_sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v);
}

/// Alias of [`quick_sort`].
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quick_sort(v);
}

/// Sorts the inclusive range `v[first..=last]`, leaving the rest of `v` untouched.
///
/// `first >= last` is already sorted and does nothing. An empty `v` is always a no-op.
///
/// # Panics
///
/// Panics if `first` or `last` is out of bounds for a non-empty `v`.
#[track_caller]
pub fn quick_sort_range<T>(v: &mut [T], first: usize, last: usize)
where
    T: Ord,
{
    if let Err(err) = try_quick_sort_range(v, first, last) {
        panic!("{err}");
    }
}

/// Like [`quick_sort_range`], but reports an out of bounds range instead of panicking.
pub fn try_quick_sort_range<T>(v: &mut [T], first: usize, last: usize) -> Result<(), RangeError>
where
    T: Ord,
{
    if v.is_empty() {
        return Ok(());
    }

    let len = v.len();
    if first >= len || last >= len {
        return Err(RangeError::OutOfBounds { first, last, len });
    }

    if first < last {
        quicksort(&mut v[first..=last]);
    }

    Ok(())
}

/// Sorts a fixed size array, same as [`quick_sort`] on `arr.as_mut_slice()`.
#[inline]
pub fn quick_sort_array<T, const N: usize>(arr: &mut [T; N])
where
    T: Ord,
{
    quick_sort(arr.as_mut_slice());
}

/// Sorts the inclusive range `arr[first..=last]` of a fixed size array.
///
/// # Panics
///
/// Panics if `first` or `last` is out of bounds and `N > 0`.
#[track_caller]
#[inline]
pub fn quick_sort_array_range<T, const N: usize>(arr: &mut [T; N], first: usize, last: usize)
where
    T: Ord,
{
    quick_sort_range(arr.as_mut_slice(), first, last);
}

// --- IMPL ---

/// Sorts `v` by repeated partitioning.
///
/// Recurses into the shorter side and loops on the longer one, which bounds the stack depth to
/// *O*(log(*n*)) even when the pivot choice degrades to quadratic time.
fn quicksort<'a, T>(mut v: &'a mut [T])
where
    T: Ord,
{
    while v.len() > 1 {
        let split = partition(v);

        // `split` is the last index of the left side.
        let (left, right) = v.split_at_mut(split + 1);

        if left.len() <= right.len() {
            quicksort(left);
            v = right;
        } else {
            quicksort(right);
            v = left;
        }
    }
}

/// Hoare partition of `v` around its middle element.
///
/// Returns `split` such that every element of `v[..=split]` is `<=` the pivot and every element
/// of `v[split + 1..]` is `>=` the pivot. For `v.len() >= 2`, `split < v.len() - 1` holds, so
/// both sides are non-empty.
fn partition<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    debug_assert!(v.len() >= 2);

    // The pivot is a value, swaps may move it. `pivot` follows its slot so that every
    // comparison is against the same value.
    let mut pivot = (v.len() - 1) / 2;
    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        // The pivot value stays inside `v[i..=j]` or a swap left a stopper on either side, so
        // neither scan leaves the slice.
        while v[i] < v[pivot] {
            i += 1;
        }

        while v[j] > v[pivot] {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        v.swap(i, j);

        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_partition(v: &mut [i32]) {
        let original = v.to_vec();
        let pivot_val = original[(original.len() - 1) / 2];

        let split = partition(v);

        assert!(split < v.len() - 1, "split {split} for {original:?}");
        assert!(v[..=split].iter().all(|x| *x <= pivot_val));
        assert!(v[split + 1..].iter().all(|x| *x >= pivot_val));

        let mut sorted_original = original.clone();
        sorted_original.sort();
        let mut sorted_after = v.to_vec();
        sorted_after.sort();
        assert_eq!(sorted_original, sorted_after);
    }

    #[test]
    fn partition_two_elements() {
        check_partition(&mut [1, 2]);
        check_partition(&mut [2, 1]);
        check_partition(&mut [3, 3]);
    }

    #[test]
    fn partition_all_equal() {
        for len in 2..20 {
            check_partition(&mut vec![5; len]);
        }
    }

    #[test]
    fn partition_pivot_moves() {
        // Pivot 0 at index 2 gets swapped to the end in the first exchange.
        check_partition(&mut [4, 3, 0, 2, -1]);
        check_partition(&mut [10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        check_partition(&mut [-10, 9, -8, 7, -6, 5, -4, 3, -2, 1, 0]);
    }

    #[test]
    fn partition_extremes() {
        check_partition(&mut [i32::MAX, i32::MIN, i32::MAX, i32::MIN]);
        check_partition(&mut [0, 1, 2, 3, 4, 5, 6, 7]);
        check_partition(&mut [7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn partition_is_deterministic() {
        let mut a = [15, -1, 3, -1, -3, -1, 7, 0, 22, -5];
        let mut b = a;

        assert_eq!(partition(&mut a), partition(&mut b));
        assert_eq!(a, b);
    }

    #[test]
    fn range_error_display() {
        let err = RangeError::OutOfBounds {
            first: 2,
            last: 9,
            len: 4,
        };

        assert_eq!(
            err.to_string(),
            "sort range [2, 9] out of bounds for slice of length 4"
        );
    }
}
