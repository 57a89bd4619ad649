use frontier::Set;
use proptest::prelude::*;

fn small_set() -> impl Strategy<Value = Set<u8>> {
    proptest::collection::vec(0u8..32, 0..24).prop_map(|v| v.into_iter().collect::<Set<u8>>())
}

proptest! {
    #[test]
    fn union_is_bounded_and_covers_both(a in small_set(), b in small_set()) {
        let u = a.union(&b);
        prop_assert!(u.len() <= a.len() + b.len());
        prop_assert!(a.is_subset(&u));
        prop_assert!(b.is_subset(&u));
    }

    #[test]
    fn intersection_is_subset_of_both(a in small_set(), b in small_set()) {
        let i = a.intersection(&b);
        prop_assert!(i.is_subset(&a));
        prop_assert!(i.is_subset(&b));
        prop_assert_eq!(i, b.intersection(&a));
    }

    #[test]
    fn difference_excludes_rhs(a in small_set(), b in small_set()) {
        let d = a.difference(&b);
        prop_assert!(d.is_subset(&a));
        prop_assert!(d.is_disjoint(&b));
        prop_assert!(a.intersection(&b.difference(&a)).is_empty());
    }

    #[test]
    fn symmetric_difference_is_commutative(a in small_set(), b in small_set()) {
        let ab = a.symmetric_difference(&b);
        prop_assert_eq!(&ab, &b.symmetric_difference(&a));
        prop_assert_eq!(ab, a.union(&b).difference(&a.intersection(&b)));
    }

    #[test]
    fn operations_leave_operands_untouched(a in small_set(), b in small_set()) {
        let (a0, b0) = (a.clone(), b.clone());
        let _ = (&a | &b, &a & &b, &a - &b, &a ^ &b);
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    #[test]
    fn add_delete_track_std_set(ops in proptest::collection::vec((any::<bool>(), 0u8..16), 1..64)) {
        let mut ours = Set::new();
        let mut reference = std::collections::BTreeSet::new();
        for (insert, value) in ops {
            if insert {
                prop_assert_eq!(ours.add(value), reference.insert(value));
            } else {
                prop_assert_eq!(ours.delete(&value), reference.remove(&value));
            }
            prop_assert_eq!(ours.len(), reference.len());
        }
        let sorted: Vec<u8> = ours.iter_sorted().copied().collect();
        let expected: Vec<u8> = reference.into_iter().collect();
        prop_assert_eq!(sorted, expected);
    }
}
