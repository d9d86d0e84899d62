use visual_bst::{Order, Tree, TreeError};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(k.clone()), set.insert(k.clone()));
            }
            Op::Delete(k) => {
                let expected = if set.remove(k) {
                    Ok(k.clone())
                } else {
                    Err(TreeError::KeyNotFound(k.clone()))
                };
                assert_eq!(tree.delete(k), expected);
            }
        }
    }
}

fn is_strictly_ascending<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_after_any_ops(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        let keys = tree.keys(Order::In);
        is_strictly_ascending(&keys) && keys.into_iter().eq(set.into_iter())
    }

    fn every_order_visits_every_key(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        [Order::Pre, Order::Post].iter().all(|&order| {
            let mut keys = tree.keys(order);
            keys.sort_unstable();
            keys.into_iter().eq(set.iter().copied())
        })
    }

    fn pre_order_starts_and_post_order_ends_at_root(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let root = tree.root().ok().map(|root| *root.key());

        root == xs.first().copied()
            && tree.keys(Order::Pre).first().copied() == root
            && tree.keys(Order::Post).last().copied() == root
    }

    fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let before = tree.keys(Order::Pre);
        let (height, size) = (tree.height(), tree.size());

        let inserted_any = xs.iter().any(|x| tree.insert(*x));

        !inserted_any
            && tree.keys(Order::Pre) == before
            && tree.height() == height
            && tree.size() == size
    }

    fn failed_delete_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().filter(|x| *x != missing).collect();
        let before = tree.keys(Order::Pre);

        tree.delete(&missing) == Err(TreeError::KeyNotFound(missing))
            && tree.keys(Order::Pre) == before
    }

    fn search_finds_exactly_the_inserted_keys(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();

        probes.iter().all(|probe| {
            tree.reset_highlights();
            let found = tree.search(probe);
            let path = tree.highlighted();
            found == added.contains(probe)
                && (added.is_empty() || !path.is_empty())
                && path.len() <= tree.height()
                && (!found || path.last() == Some(probe))
        })
    }

    fn min_and_max_match_the_set(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let set: BTreeSet<_> = xs.into_iter().collect();

        tree.min() == set.iter().next() && tree.max() == set.iter().next_back()
    }
}
