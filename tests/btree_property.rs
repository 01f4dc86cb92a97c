//! Property tests: the tree must agree with `std::collections::BTreeMap`
//! under arbitrary operation sequences, and every mutation must leave all
//! structural invariants intact.
//!
//! Keys are drawn from a small domain on purpose, so sequences hit the
//! interesting cases often: upserts of live keys, removals of absent keys,
//! and deletions that force borrows, merges, and root collapses.

use std::collections::BTreeMap;

use proptest::prelude::*;

use arbordb::BTree;

/// One step of a workload.
#[derive(Debug, Clone)]
enum Op {
    Insert(i64, u64),
    Remove(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (0i64..64, any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        1 => (0i64..64).prop_map(Op::Remove),
    ]
}

proptest! {
    /// Sequences of inserts and removes behave exactly like a BTreeMap,
    /// and the invariants hold after every single step.
    #[test]
    fn random_ops_match_model(
        ops in prop::collection::vec(op_strategy(), 1..300),
        order in 3usize..9,
    ) {
        let mut tree = BTree::with_order(order).unwrap();
        let mut model: BTreeMap<i64, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    tree.insert(key, value);
                    model.insert(key, value);
                }
                Op::Remove(key) => {
                    let removed = tree.remove(&key);
                    prop_assert_eq!(removed, model.remove(&key).is_some());
                }
            }

            if let Err(violation) = tree.check_invariants() {
                return Err(TestCaseError::fail(format!("invariant violated: {violation}")));
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        // Final state: identical contents in identical order.
        let tree_pairs: Vec<(i64, u64)> =
            tree.get_all(None).iter().map(|e| (e.key, e.value)).collect();
        let model_pairs: Vec<(i64, u64)> =
            model.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(tree_pairs, model_pairs);

        for (key, value) in &model {
            prop_assert_eq!(tree.get(key).map(|e| e.value), Some(*value));
        }
    }

    /// Range scans agree with the model's ranges for arbitrary bounds and
    /// limits, and truncation preserves the ascending prefix.
    #[test]
    fn range_scans_match_model(
        entries in prop::collection::btree_map(0i64..256, any::<u64>(), 0..120),
        low in 0i64..256,
        high in 0i64..256,
        limit in proptest::option::of(0usize..40),
    ) {
        let mut tree = BTree::with_order(4).unwrap();
        for (&key, &value) in &entries {
            tree.insert(key, value);
        }

        let expect = |keys: Vec<i64>| -> Vec<i64> {
            match limit {
                None => keys,
                Some(n) => keys.into_iter().take(n).collect(),
            }
        };

        let all: Vec<i64> = tree.get_all(limit).iter().map(|e| e.key).collect();
        prop_assert_eq!(all, expect(entries.keys().copied().collect()));

        let above: Vec<i64> = tree.get_above(&low, limit).iter().map(|e| e.key).collect();
        prop_assert_eq!(
            above,
            expect(entries.keys().copied().filter(|&k| k > low).collect())
        );

        let below: Vec<i64> = tree.get_below(&high, limit).iter().map(|e| e.key).collect();
        prop_assert_eq!(
            below,
            expect(entries.keys().copied().filter(|&k| k < high).collect())
        );

        let between: Vec<i64> =
            tree.get_between(&low, &high, limit).iter().map(|e| e.key).collect();
        prop_assert_eq!(
            between,
            expect(
                entries
                    .keys()
                    .copied()
                    .filter(|&k| low <= k && k <= high)
                    .collect()
            )
        );
    }

    /// Inserting any permutation of distinct keys then draining them in a
    /// different permutation always ends on an empty, leak-free tree.
    #[test]
    fn build_then_drain_is_clean(
        seed_keys in prop::collection::btree_set(0i64..512, 1..100),
        order in 3usize..7,
        shuffle in any::<u64>(),
    ) {
        let mut insert_order: Vec<i64> = seed_keys.iter().copied().collect();
        let mut remove_order = insert_order.clone();

        // Cheap deterministic shuffles derived from the seed.
        let n = insert_order.len();
        for i in 0..n {
            let j = (shuffle as usize).wrapping_mul(i + 1) % n;
            insert_order.swap(i, j);
            let j = (shuffle as usize).wrapping_add(i * 7) % n;
            remove_order.swap(i, j);
        }

        let mut tree = BTree::with_order(order).unwrap();
        for &key in &insert_order {
            tree.insert(key, key);
        }
        if let Err(violation) = tree.check_invariants() {
            return Err(TestCaseError::fail(format!("after build: {violation}")));
        }
        prop_assert_eq!(tree.len(), seed_keys.len());

        for &key in &remove_order {
            prop_assert!(tree.remove(&key));
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.node_count(), 0);
        prop_assert_eq!(tree.height(), 0);
    }
}
