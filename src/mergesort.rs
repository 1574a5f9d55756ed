//! Top-down merge sort with auxiliary buffers.

/// Sorts `v` in non-descending order.
///
/// Both halves are copied into temporary buffers, sorted recursively and merged back into `v`.
/// *O*(*n* \* log(*n*)) worst-case, allocates *O*(*n*) per recursion level.
///
/// Ties are taken from the left half first, but no global stability guarantee is made.
pub fn merge_sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    if left.len() > 1 {
        merge_sort(&mut left);
    }

    if right.len() > 1 {
        merge_sort(&mut right);
    }

    merge(v, left, right);
}

/// Alias of [`merge_sort`].
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort(v);
}

/// Merges the sorted runs `left` and `right` into `dst`, moving the values out of the buffers.
fn merge<T>(dst: &mut [T], left: Vec<T>, right: Vec<T>)
where
    T: Ord,
{
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    for slot in dst.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };

        let next = if take_left { left.next() } else { right.next() };

        // The buffers hold exactly `dst.len()` values, so one of them is never exhausted here.
        if let Some(val) = next {
            *slot = val;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_left_on_ties() {
        // Compare on the key only, the tag records which run the value came from.
        #[derive(Clone, Debug)]
        struct Tagged(i32, char);

        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let left = vec![Tagged(1, 'l'), Tagged(2, 'l')];
        let right = vec![Tagged(1, 'r'), Tagged(2, 'r')];
        let mut dst = vec![Tagged(0, '-'); 4];

        merge(&mut dst, left, right);

        let tags = dst.iter().map(|t| t.1).collect::<String>();
        assert_eq!(tags, "lrlr");
    }

    #[test]
    fn merge_drains_remaining_run() {
        let mut dst = [0; 5];
        merge(&mut dst, vec![7, 8, 9], vec![1, 2]);
        assert_eq!(dst, [1, 2, 7, 8, 9]);
    }
}
