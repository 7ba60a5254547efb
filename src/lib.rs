//! A left-leaning red-black tree whose nodes carry, next to the subtree size,
//! the number of red nodes below them.

mod error;
pub mod logging;
pub mod mst;
mod node;
mod rebalance;
pub mod report;
mod tree;
#[cfg(test)]
mod validate;

use std::ops::{Add, Not};

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Per-subtree counters, recomputed bottom-up after every structural change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub size: usize,
    pub red_count: usize,
}

impl Aggregate {
    /// The contribution of a single node of the given color.
    #[inline(always)]
    pub fn of(color: Color) -> Self {
        Aggregate {
            size: 1,
            red_count: match color {
                Color::Red => 1,
                Color::Black => 0,
            },
        }
    }
}

impl Add for Aggregate {
    type Output = Aggregate;

    #[inline(always)]
    fn add(self, other: Aggregate) -> Aggregate {
        Aggregate {
            size: self.size + other.size,
            red_count: self.red_count + other.red_count,
        }
    }
}

/// An owned, possibly absent, subtree.
pub type Link<K> = Option<Box<Node<K>>>;

pub(crate) trait LinkExt {
    fn aggregate(&self) -> Aggregate;
    fn is_red(&self) -> bool;
    fn left_is_red(&self) -> bool;
    fn height(&self) -> usize;
}

impl<K> LinkExt for Link<K> {
    #[inline(always)]
    fn aggregate(&self) -> Aggregate {
        self.as_ref().map_or(Aggregate::default(), |n| n.aggregate)
    }

    #[inline(always)]
    fn is_red(&self) -> bool {
        self.as_ref().is_some_and(|n| n.is_red())
    }

    #[inline(always)]
    fn left_is_red(&self) -> bool {
        self.as_ref().is_some_and(|n| n.left.is_red())
    }

    fn height(&self) -> usize {
        self.as_ref().map_or(0, |n| 1 + n.left.height().max(n.right.height()))
    }
}

#[derive(Clone, PartialEq)]
pub struct Node<K> {
    pub(crate) key: K,
    // Color of the link from the parent.
    pub(crate) color: Color,
    pub(crate) aggregate: Aggregate,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

/// A left-leaning red-black tree of keys.
///
/// Only insertion mutates the tree. Each node keeps the size and red count of
/// its subtree, so [`Tree::len`] and [`Tree::percent_red`] are O(1).
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
}
