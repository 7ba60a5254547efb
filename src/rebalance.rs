use std::cmp::Ordering::*;

use log::trace;

use super::{Color, Link, LinkExt, Node};

/// Insert `key` below `link` and return the new root of that subtree.
///
/// The subtree is repaired on the way back up, one frame at a time, so only
/// the nodes on the search path are touched.
pub(crate) fn put<K: Ord>(link: Link<K>, key: K) -> Box<Node<K>> {
    let Some(mut h) = link else {
        trace!("new red leaf");
        return Box::new(Node::new(key));
    };
    match key.cmp(&h.key) {
        Less => h.left = Some(put(h.left.take(), key)),
        Greater => h.right = Some(put(h.right.take(), key)),
        Equal => h.key = key,
    }
    rebalance(h)
}

/// Restore the left-leaning invariants at `h`, whose children are valid
/// subtrees, and refresh its aggregate.
pub(crate) fn rebalance<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    if h.right.is_red() && !h.left.is_red() {
        h = rotate_left(h);
    }
    if h.left.is_red() && h.left.left_is_red() {
        h = rotate_right(h);
    }
    if h.left.is_red() && h.right.is_red() {
        flip_colors(&mut h);
    }
    h.update();
    h
}

/// Turn a right-leaning red link into a left-leaning one.
///
/// ```text
///      h                x
///     / \              / \
///    a   x    -->     h   c
///       / \          / \
///      b   c        a   b
/// ```
///
/// `x` inherits `h`'s color and `h` turns red, so the pair keeps the same
/// number of red nodes and `x` ends up with the aggregate `h` had.
pub(crate) fn rotate_left<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    debug_assert!(h.right.is_red());
    let Some(mut x) = h.right.take() else {
        return h;
    };
    trace!("rotate left");
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    h.update();
    x.left = Some(h);
    x.update();
    x
}

/// Mirror of [`rotate_left`].
///
/// ```text
///        h            x
///       / \          / \
///      x   c  -->   a   h
///     / \              / \
///    a   b            b   c
/// ```
pub(crate) fn rotate_right<K>(mut h: Box<Node<K>>) -> Box<Node<K>> {
    debug_assert!(h.left.is_red());
    let Some(mut x) = h.left.take() else {
        return h;
    };
    trace!("rotate right");
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    h.update();
    x.right = Some(h);
    x.update();
    x
}

/// Split a temporary 4-node by pushing the red link one level up.
///
/// The children's red counts move by one each. `h`'s own aggregate is stale
/// afterwards; the caller recomputes it.
pub(crate) fn flip_colors<K>(h: &mut Node<K>) {
    debug_assert!(h.left.is_some() && h.right.is_some());
    debug_assert!(h.left.is_red() != h.is_red() && h.right.is_red() != h.is_red());
    trace!("flip colors");
    h.color = !h.color;
    if let Some(left) = h.left.as_mut() {
        left.flip();
    }
    if let Some(right) = h.right.as_mut() {
        right.flip();
    }
}
