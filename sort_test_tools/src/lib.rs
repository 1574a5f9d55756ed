/// A sort entry point under test.
///
/// Implementations forward to a whole-slice sort. `Clone` is required because merge sort works
/// on temporary copies of the input.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;
}

pub mod patterns;
