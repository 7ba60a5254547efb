//! Test-only walk over a tree that reports the first broken invariant.

use std::fmt::Debug;

use crate::{Aggregate, Link, LinkExt, Tree};

pub(crate) fn check<K: Ord + Debug>(tree: &Tree<K>) -> Result<(), String> {
    check_link(&tree.root)
}

pub(crate) fn check_link<K: Ord + Debug>(root: &Link<K>) -> Result<(), String> {
    if root.is_red() {
        return Err("root is red".to_string());
    }
    walk(root, None, None).map(|_| ())
}

/// In-order keys, for comparing shapes in tests.
pub(crate) fn keys<K: Clone>(link: &Link<K>) -> Vec<K> {
    let mut out = Vec::new();
    collect(link, &mut out);
    out
}

fn collect<K: Clone>(link: &Link<K>, out: &mut Vec<K>) {
    if let Some(node) = link {
        collect(&node.left, out);
        out.push(node.key.clone());
        collect(&node.right, out);
    }
}

// Returns the black height of `link`.
fn walk<K: Ord + Debug>(
    link: &Link<K>,
    low: Option<&K>,
    high: Option<&K>,
) -> Result<usize, String> {
    let Some(node) = link else {
        return Ok(0);
    };
    if low.is_some_and(|low| node.key <= *low) || high.is_some_and(|high| node.key >= *high) {
        return Err(format!("{:?} is out of order", node.key));
    }
    if node.right.is_red() {
        return Err(format!("{:?} has a red right link", node.key));
    }
    if node.is_red() && node.left.is_red() {
        return Err(format!("{:?} has two red links in a row", node.key));
    }
    let left = walk(&node.left, low, Some(&node.key))?;
    let right = walk(&node.right, Some(&node.key), high)?;
    if left != right {
        return Err(format!("{:?} has black heights {left} and {right}", node.key));
    }
    let expected = Aggregate::of(node.color) + node.left.aggregate() + node.right.aggregate();
    if node.aggregate != expected {
        return Err(format!(
            "{:?} stores {:?}, expected {:?}",
            node.key, node.aggregate, expected
        ));
    }
    Ok(left + usize::from(node.is_black()))
}
