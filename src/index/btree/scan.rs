//! Bounded in-order range scans.
//!
//! All four public scans funnel into one traversal parameterized by a pair
//! of [`Bound`] endpoints. The walk visits entries in ascending key order
//! (left subtree, entry, next subtree), prunes subtrees that fall entirely
//! outside the bounds, and stops as soon as the result limit is reached.
//!
//! # Limit convention
//! `limit` is an `Option<usize>`: `None` scans without bound, `Some(0)`
//! yields an empty result immediately, and `Some(n)` truncates the result
//! to at most `n` entries.

use std::ops::Bound;

use crate::common::NodeId;
use crate::index::btree::{BTree, Entry};

impl<K: Ord, V> BTree<K, V> {
    /// All entries in ascending key order, truncated to `limit`.
    pub fn get_all(&self, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        self.scan(Bound::Unbounded, Bound::Unbounded, limit)
    }

    /// Entries with keys strictly above `key`, ascending, truncated to
    /// `limit`.
    pub fn get_above(&self, key: &K, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        self.scan(Bound::Excluded(key), Bound::Unbounded, limit)
    }

    /// Entries with keys strictly below `key`, ascending, truncated to
    /// `limit`.
    pub fn get_below(&self, key: &K, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        self.scan(Bound::Unbounded, Bound::Excluded(key), limit)
    }

    /// Entries with `low <= key <= high`, ascending, truncated to `limit`.
    pub fn get_between(&self, low: &K, high: &K, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        self.scan(Bound::Included(low), Bound::Included(high), limit)
    }

    fn scan(&self, low: Bound<&K>, high: Bound<&K>, limit: Option<usize>) -> Vec<&Entry<K, V>> {
        let mut out = Vec::new();
        if limit == Some(0) {
            return out;
        }

        if let Some(root) = self.root {
            self.scan_node(root, low, high, limit, &mut out);
        }
        out
    }

    /// In-order walk of one subtree. Returns `true` once the limit is
    /// reached, which unwinds the whole traversal.
    fn scan_node<'t>(
        &'t self,
        id: NodeId,
        low: Bound<&K>,
        high: Bound<&K>,
        limit: Option<usize>,
        out: &mut Vec<&'t Entry<K, V>>,
    ) -> bool {
        let node = self.arena.node(id);

        for (index, entry) in node.entries.iter().enumerate() {
            // The subtree left of this entry holds only smaller keys; skip
            // it when even those cannot reach the lower bound.
            if !node.is_leaf()
                && subtree_below_may_match(&entry.key, low)
                && self.scan_node(node.children[index], low, high, limit, out)
            {
                return true;
            }

            // This entry and everything after it only grows; once past the
            // upper bound the subtree is exhausted.
            if past_upper(&entry.key, high) {
                return false;
            }
            if meets_lower(&entry.key, low) {
                out.push(entry);
                if limit.is_some_and(|n| out.len() >= n) {
                    return true;
                }
            }
        }

        if !node.is_leaf() {
            let last = node
                .entries
                .last()
                .expect("internal node with no entries");
            // The rightmost subtree holds only keys above the last entry.
            if subtree_above_may_match(&last.key, high) {
                let rightmost = *node.children.last().expect("internal node with no children");
                return self.scan_node(rightmost, low, high, limit, out);
            }
        }

        false
    }
}

/// Whether a key satisfies the lower bound.
fn meets_lower<K: Ord>(key: &K, low: Bound<&K>) -> bool {
    match low {
        Bound::Unbounded => true,
        Bound::Included(lo) => key >= lo,
        Bound::Excluded(lo) => key > lo,
    }
}

/// Whether a key (and so every key after it) lies past the upper bound.
fn past_upper<K: Ord>(key: &K, high: Bound<&K>) -> bool {
    match high {
        Bound::Unbounded => false,
        Bound::Included(hi) => key > hi,
        Bound::Excluded(hi) => key >= hi,
    }
}

/// Whether a subtree of keys strictly below `separator` can contain a key
/// meeting the lower bound.
fn subtree_below_may_match<K: Ord>(separator: &K, low: Bound<&K>) -> bool {
    match low {
        Bound::Unbounded => true,
        Bound::Included(lo) | Bound::Excluded(lo) => separator > lo,
    }
}

/// Whether a subtree of keys strictly above `last_key` can contain a key
/// within the upper bound.
fn subtree_above_may_match<K: Ord>(last_key: &K, high: Bound<&K>) -> bool {
    match high {
        Bound::Unbounded => true,
        Bound::Included(hi) | Bound::Excluded(hi) => last_key < hi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_keys(order: usize, keys: impl IntoIterator<Item = i64>) -> BTree<i64, i64> {
        let mut tree = BTree::with_order(order).unwrap();
        for key in keys {
            tree.insert(key, key * 10);
        }
        tree
    }

    fn scanned_keys(entries: &[&Entry<i64, i64>]) -> Vec<i64> {
        entries.iter().map(|e| e.key).collect()
    }

    #[test]
    fn test_scans_on_empty_tree() {
        let tree: BTree<i64, i64> = BTree::new();
        assert!(tree.get_all(None).is_empty());
        assert!(tree.get_all(Some(10)).is_empty());
        assert!(tree.get_above(&0, None).is_empty());
        assert!(tree.get_below(&0, None).is_empty());
        assert!(tree.get_between(&0, &9, None).is_empty());
    }

    #[test]
    fn test_get_all_is_sorted() {
        let tree = tree_with_keys(3, [10, 20, 5, 6, 12, 30, 7, 17]);
        assert_eq!(
            scanned_keys(&tree.get_all(None)),
            vec![5, 6, 7, 10, 12, 17, 20, 30]
        );
    }

    #[test]
    fn test_limit_truncates_in_order() {
        let tree = tree_with_keys(4, 0..50);

        assert!(tree.get_all(Some(0)).is_empty());
        assert_eq!(scanned_keys(&tree.get_all(Some(1))), vec![0]);
        assert_eq!(scanned_keys(&tree.get_all(Some(5))), vec![0, 1, 2, 3, 4]);
        // Limit above size is harmless.
        assert_eq!(tree.get_all(Some(1000)).len(), 50);
    }

    #[test]
    fn test_get_above_is_exclusive() {
        let tree = tree_with_keys(3, 0..20);

        assert_eq!(
            scanned_keys(&tree.get_above(&16, None)),
            vec![17, 18, 19]
        );
        assert_eq!(scanned_keys(&tree.get_above(&17, Some(1))), vec![18]);
        assert!(tree.get_above(&19, None).is_empty());
        assert_eq!(tree.get_above(&-1, None).len(), 20);
    }

    #[test]
    fn test_get_below_is_exclusive() {
        let tree = tree_with_keys(3, 0..20);

        assert_eq!(scanned_keys(&tree.get_below(&3, None)), vec![0, 1, 2]);
        assert_eq!(scanned_keys(&tree.get_below(&3, Some(2))), vec![0, 1]);
        assert!(tree.get_below(&0, None).is_empty());
        assert_eq!(tree.get_below(&100, None).len(), 20);
    }

    #[test]
    fn test_get_between_is_inclusive() {
        let tree = tree_with_keys(4, 0..100);

        let window = tree.get_between(&20, &50, None);
        assert_eq!(window.len(), 31);
        assert_eq!(window.first().map(|e| e.key), Some(20));
        assert_eq!(window.last().map(|e| e.key), Some(50));

        // Bounds between stored keys.
        let tree = tree_with_keys(3, (0..40).map(|k| k * 2));
        assert_eq!(
            scanned_keys(&tree.get_between(&3, &9, None)),
            vec![4, 6, 8]
        );

        // Inverted bounds cannot match anything.
        assert!(tree.get_between(&9, &3, None).is_empty());
    }

    #[test]
    fn test_between_single_key_window() {
        let tree = tree_with_keys(3, 0..20);
        assert_eq!(scanned_keys(&tree.get_between(&7, &7, None)), vec![7]);
    }

    #[test]
    fn test_scan_values_come_along() {
        let tree = tree_with_keys(3, 0..10);
        for entry in tree.get_all(None) {
            assert_eq!(entry.value, entry.key * 10);
        }
    }

    #[test]
    fn test_range_results_are_subsequences_of_get_all() {
        let tree = tree_with_keys(5, (0..200).map(|k| (k * 7) % 200));
        let all = scanned_keys(&tree.get_all(None));

        for (low, high) in [(0, 199), (13, 77), (77, 13), (50, 50), (-5, 300)] {
            let window = scanned_keys(&tree.get_between(&low, &high, None));
            let expected: Vec<i64> = all
                .iter()
                .copied()
                .filter(|&k| low <= k && k <= high)
                .collect();
            assert_eq!(window, expected, "window [{low}, {high}]");
        }
    }
}
