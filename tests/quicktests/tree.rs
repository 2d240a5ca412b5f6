use quickcheck_macros::quickcheck;
use search_tree::{BinarySearchTree, Node};

use std::collections::HashSet;

fn build(xs: &[i8]) -> BinarySearchTree<i8> {
    xs.iter().copied().collect()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let visited: Vec<_> = tree.dfs_in_order().collect();

    visited.windows(2).all(|w| w[0] <= w[1]) && visited.len() == xs.len()
}

#[quickcheck]
fn every_traversal_visits_every_value(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut expected = xs;
    expected.sort_unstable();

    let sorted = |mut visited: Vec<i8>| {
        visited.sort_unstable();
        visited
    };

    sorted(tree.dfs_pre_order().copied().collect()) == expected
        && sorted(tree.dfs_post_order().copied().collect()) == expected
        && sorted(tree.bfs().copied().collect()) == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| {
        tree.find(x).map(Node::val) == Some(x) && tree.find_recursive(x).map(Node::val) == Some(x)
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursive(x).is_none())
}

#[quickcheck]
fn insert_variants_build_the_same_shape(xs: Vec<i8>) -> bool {
    let iterative = build(&xs);
    let mut recursive = BinarySearchTree::new();
    for x in &xs {
        recursive.insert_recursive(*x);
    }

    iterative.root() == recursive.root()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        // We may have inserted the same value multiple times - remove each one.
        while tree.remove(delete).is_some() {}
    }

    let mut still_present = xs;
    for delete in &deletes {
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.dfs_in_order().count() == still_present.len()
}

#[quickcheck]
fn removing_sample_in_any_order(seeds: Vec<u8>) -> bool {
    let keys = [5, 3, 8, 1, 4, 7, 9];
    let mut tree = build(&keys);

    let mut order: Vec<_> = keys
        .iter()
        .zip(seeds.into_iter().chain(std::iter::repeat(0)))
        .map(|(key, seed)| (seed, *key))
        .collect();
    order.sort_unstable();

    let mut removed = Vec::new();
    for (_, key) in order {
        if tree.remove(&key) != Some(key) {
            return false;
        }
        removed.push(key);

        let remaining: Vec<_> = tree.dfs_in_order().copied().collect();
        let sorted = remaining.windows(2).all(|w| w[0] < w[1]);
        let gone = removed.iter().all(|k| tree.find(k).is_none());
        let kept = remaining.len() + removed.len() == keys.len();
        if !(sorted && gone && kept) {
            return false;
        }
    }

    tree.is_empty()
}

#[quickcheck]
fn find_is_idempotent(xs: Vec<i8>, probe: i8) -> bool {
    let tree = build(&xs);
    let before: Vec<_> = tree.dfs_pre_order().copied().collect();

    let first = tree.find(&probe);
    let second = tree.find(&probe);
    let after: Vec<_> = tree.dfs_pre_order().copied().collect();

    first == second && before == after
}

#[quickcheck]
fn clone_keeps_shape(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    tree.clone().root() == tree.root()
}

#[test]
fn remove_two_children_promotes_successor() {
    let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(tree.remove(&5), Some(5));
    assert_eq!(tree.root().map(Node::val), Some(&7));
    assert_eq!(
        tree.dfs_in_order().copied().collect::<Vec<_>>(),
        [1, 3, 4, 7, 8, 9]
    );
}

#[test]
fn balance() {
    assert!(!build(&[1, 2, 3, 4, 5]).is_balanced());
    assert!(build(&[3, 1, 5, 0, 2, 4, 6]).is_balanced());
}

#[test]
fn second_highest() {
    assert_eq!(build(&[5, 3, 8, 1, 4, 7, 9]).find_second_highest(), Some(&8));
    assert_eq!(build(&[]).find_second_highest(), None);
    assert_eq!(build(&[5]).find_second_highest(), None);
}

#[test]
fn bfs_is_level_order() {
    assert_eq!(
        build(&[5, 3, 8, 1, 4, 7, 9]).bfs().copied().collect::<Vec<_>>(),
        [5, 3, 8, 1, 4, 7, 9]
    );
    assert_eq!(build(&[]).bfs().next(), None);
}
