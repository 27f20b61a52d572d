use intbst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree, set: &mut HashSet<i32>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                assert_eq!(bst.insert(i32::from(k)), set.insert(i32::from(k)));
            }
            Op::Remove(k) => {
                assert_eq!(bst.remove(i32::from(k)), set.remove(&i32::from(k)));
            }
            Op::Iter => {
                let keys: Vec<_> = bst.iter().collect();
                assert!(keys.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|key| tree.has(*key))
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter()
        .all(|x| tree.search(*x).map(|node| node.key()) == Some(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(i32::from(*x)).is_none())
}

#[quickcheck]
fn duplicates_are_rejected(xs: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
    let before = tree.clone();

    xs.iter().all(|x| !tree.insert(i32::from(*x))) && tree == before
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
    for remove in &removes {
        tree.remove(i32::from(*remove));
    }

    let mut still_present = xs;
    for remove in &removes {
        // The same key may have been generated multiple times - drop each one.
        while let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }

    removes.iter().all(|x| !tree.has(i32::from(*x)))
        && still_present.iter().all(|x| tree.has(i32::from(*x)))
        && tree.len() == tree.iter().count()
}

#[quickcheck]
fn sorted_inserts_make_a_linked_list(n: u8) -> bool {
    let tree: Tree = (0..i32::from(n)).collect();

    let (min, max) = if n == 0 {
        (None, None)
    } else {
        (Some(0), Some(i32::from(n) - 1))
    };

    tree.height() == usize::from(n)
        && tree.min().map(|node| node.key()) == min
        && tree.max().map(|node| node.key()) == max
}

#[quickcheck]
fn lca_is_an_ancestor_of_both(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
    let (a, b) = (i32::from(a), i32::from(b));

    match tree.lca(a, b) {
        Some(ancestor) => {
            let below = |key| {
                let mut node = Some(ancestor);
                while let Some(n) = node {
                    if n.key() == key {
                        return true;
                    }
                    node = if key < n.key() { n.left() } else { n.right() };
                }
                false
            };
            below(a) && below(b) && ancestor.key() >= a.min(b) && ancestor.key() <= a.max(b)
        }
        None => !tree.has(a) || !tree.has(b),
    }
}

#[quickcheck]
fn random_trees_are_permutations(n: u8, seed: u64) -> bool {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let len = i32::from(n);
    let tree = Tree::random_with(len, &mut StdRng::seed_from_u64(seed));

    tree.len() == usize::from(n) && tree.iter().eq(1..=len)
}
