use csdiff::{merge_diff, symmetric_diff};
use itertools::Itertools;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

fn sorted(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(0u8..24, 0..max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

fn sorted_unique(max_len: usize) -> impl Strategy<Value = Vec<u16>> {
    btree_set(0u16..200, 0..max_len).prop_map(|set| set.into_iter().collect())
}

fn is_ascending<T: Ord>(v: &[T]) -> bool {
    v.iter().tuple_windows().all(|(a, b)| a <= b)
}

proptest! {
    #[test]
    fn a_sequence_cancels_itself(a in sorted(40)) {
        prop_assert!(symmetric_diff(&a, &a).is_empty());
    }

    #[test]
    fn an_empty_side_returns_the_other(a in sorted(40)) {
        prop_assert_eq!(symmetric_diff(&a, &[]), a.clone());
        prop_assert_eq!(symmetric_diff(&[], &a), a);
    }

    #[test]
    fn the_result_is_sorted(a in sorted(40), b in sorted(40)) {
        prop_assert!(is_ascending(&symmetric_diff(&a, &b)));
    }

    #[test]
    fn without_duplicates_the_order_of_operands_does_not_matter(
        a in sorted_unique(40),
        b in sorted_unique(40),
    ) {
        prop_assert_eq!(symmetric_diff(&a, &b), symmetric_diff(&b, &a));
    }

    #[test]
    fn without_duplicates_each_result_is_in_exactly_one_operand(
        a in sorted_unique(40),
        b in sorted_unique(40),
    ) {
        let result = symmetric_diff(&a, &b);
        for x in &result {
            prop_assert!(a.contains(x) != b.contains(x), "{} is in both or neither", x);
        }
        let expected: Vec<u16> = a.iter().merge(&b).copied().filter(|x| a.contains(x) != b.contains(x)).collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn streaming_and_slice_forms_agree(a in sorted(40), b in sorted(40)) {
        prop_assert_eq!(merge_diff(a.clone(), b.clone()), symmetric_diff(&a, &b));
    }
}

#[test]
fn concrete_scenarios() {
    let cases: [(&[u32], &[u32], &[u32]); 7] = [
        (&[], &[], &[]),
        (&[1, 2, 3], &[1, 2, 3], &[]),
        (&[1, 3, 5], &[2, 4, 6], &[1, 2, 3, 4, 5, 6]),
        (&[1, 2, 3, 4], &[1, 2], &[3, 4]),
        (&[1, 2], &[1, 2, 4, 5], &[4, 5]),
        (&[1, 2, 3, 5, 6, 7], &[3, 4, 5], &[1, 2, 4, 6, 7]),
        (&[4, 5], &[1, 2], &[1, 2, 4, 5]),
    ];
    for (first, second, expected) in cases {
        assert_eq!(symmetric_diff(first, second), expected, "for {first:?} and {second:?}");
    }
}
