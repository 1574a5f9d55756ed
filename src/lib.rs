//! Two classic comparison sorts over `&mut [T]`.
//!
//! - [`merge_sort`]: top-down merge sort, *O*(*n* \* log(*n*)) worst-case, allocates buffers.
//! - [`quick_sort`]: Hoare partition quicksort, in place, *O*(*n*^2) worst-case.
//!
//! Neither sort guarantees stability.

pub mod mergesort;
pub mod quicksort;

pub use mergesort::merge_sort;
pub use quicksort::{
    quick_sort, quick_sort_array, quick_sort_array_range, quick_sort_range, try_quick_sort_range,
    RangeError,
};
