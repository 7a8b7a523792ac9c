use exercises::functional::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and lookups the tree agrees with the set at every step.
fn do_ops<T>(ops: &[Op<T>], mut bst: Tree<T>, set: &mut BTreeSet<T>) -> Option<Tree<T>>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst = bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Contains(x) => {
                if bst.contains(x) != set.contains(x) {
                    return None;
                }
            }
            Op::Iter => {
                if !bst.iter().eq(set.iter()) {
                    return None;
                }
            }
        }
    }

    Some(bst)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();

    match do_ops(&ops, Tree::new(), &mut set) {
        Some(tree) => tree.size() == set.len() && tree.iter().eq(set.iter()),
        None => false,
    }
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut set = BTreeSet::new();

    do_ops(&ops, Tree::new(), &mut set).map_or(false, |tree| tree.size() == set.len())
}

#[quickcheck]
fn size_counts_distinct_values(xs: Vec<String>) -> bool {
    let tree: Tree = xs.iter().cloned().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn contains(xs: Vec<String>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(x.clone());
    }

    xs.iter().all(|x| tree.contains(x.as_str()))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<String>, x: String) -> bool {
    let tree: Tree = xs.into_iter().collect();
    let once = tree.insert(x.clone());
    let twice = once.insert(x);

    once.size() == twice.size() && once.to_string() == twice.to_string()
}

#[quickcheck]
fn insertion_order_does_not_change_contents(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let forward: Tree<i8> = xs.iter().copied().collect();
    let backward: Tree<i8> = xs.iter().rev().copied().collect();

    forward.size() == backward.size()
        && forward.iter().eq(backward.iter())
        && probes
            .iter()
            .chain(&xs)
            .all(|x| forward.contains(x) == backward.contains(x))
}

#[quickcheck]
fn insert_never_changes_the_original(xs: Vec<String>, extra: Vec<String>) -> bool {
    let tree: Tree = xs.into_iter().collect();
    let before = tree.to_string();
    let size_before = tree.size();

    let mut newer = tree.clone();
    for x in extra {
        newer = newer.insert(x);
    }

    tree.to_string() == before && tree.size() == size_before
}

#[quickcheck]
fn rendering_lists_values_in_order(xs: Vec<u8>) -> bool {
    // Single digits keep the rendering unambiguous once parens are removed.
    let digits: Vec<u8> = xs.into_iter().map(|x| x % 10).collect();
    let tree: Tree<u8> = digits.iter().copied().collect();

    let rendered: String = tree
        .to_string()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let expected: String = tree.iter().map(|d| d.to_string()).collect();

    rendered == expected
}

#[quickcheck]
fn rendering_parens_balance(xs: Vec<u8>) -> bool {
    let tree: Tree<u8> = xs.into_iter().map(|x| x % 10).collect();
    let rendered = tree.to_string();

    let opens = rendered.matches('(').count();
    let closes = rendered.matches(')').count();

    opens == closes && opens == tree.size().max(1)
}
