//! Houses the `symmetric_diff` and `merge_diff` functions, the kernel of the
//! application.
//!
use std::cmp::Ordering;

/// Returns the elements of `first` and `second` that don't pair off against
/// an equal element of the other slice, in sorted order.
///
/// Both slices must already be sorted ascending by `T`'s `Ord`. We don't check
/// that: an unsorted operand gives a meaningless (but memory-safe) answer.
///
/// If either slice is empty the result is a copy of the other one.
#[must_use]
pub fn symmetric_diff<T: Ord + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    merge_diff(first.iter().cloned(), second.iter().cloned())
}

/// The streaming form of [`symmetric_diff`]: takes its operands by value and
/// moves the surviving elements into the result.
///
/// The two operands are walked in step, like the merge step of a merge sort:
///
/// * When the current elements compare equal, both are dropped. If either
///   operand has nothing after its current element we stop walking in step.
/// * Otherwise the smaller element goes to the result and only its operand
///   moves on. If that operand has run out, the other operand's current
///   element goes to the result too, and we stop walking in step.
///
/// Whatever is left of either operand is then appended unchanged.
///
/// With duplicates this is *not* a multiset difference: `[1, 1]` against
/// `[1]` gives `[1]`, and `[1, 2]` against `[2, 2]` gives `[1, 2]`.
pub fn merge_diff<T: Ord>(
    first: impl IntoIterator<Item = T>,
    second: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let mut first = first.into_iter();
    let mut second = second.into_iter();
    let mut result = Vec::new();

    let (mut this, mut that) = match (first.next(), second.next()) {
        (Some(this), Some(that)) => (this, that),
        (Some(only), None) => {
            result.push(only);
            result.extend(first);
            return result;
        }
        (None, Some(only)) => {
            result.push(only);
            result.extend(second);
            return result;
        }
        (None, None) => return result,
    };

    loop {
        match this.cmp(&that) {
            Ordering::Less => {
                result.push(this);
                match first.next() {
                    Some(next) => this = next,
                    None => {
                        result.push(that);
                        break;
                    }
                }
            }
            Ordering::Greater => {
                result.push(that);
                match second.next() {
                    Some(next) => that = next,
                    None => {
                        result.push(this);
                        break;
                    }
                }
            }
            // An element taken from the side that still has some is the
            // head of its tail, so it goes out ahead of the rest.
            Ordering::Equal => match (first.next(), second.next()) {
                (Some(next_this), Some(next_that)) => {
                    this = next_this;
                    that = next_that;
                }
                (Some(head), None) | (None, Some(head)) => {
                    result.push(head);
                    break;
                }
                (None, None) => break,
            },
        }
    }

    result.extend(first);
    result.extend(second);
    result
}
