use std::fmt::Debug;

use super::{Aggregate, Color, LinkExt, Node};

// Public API.
impl<K> Node<K> {
    /// A fresh red leaf.
    pub fn new(key: K) -> Self {
        Node {
            key,
            color: Color::Red,
            aggregate: Aggregate::of(Color::Red),
            left: None,
            right: None,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline(always)]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.aggregate.size
    }

    #[inline(always)]
    pub fn red_count(&self) -> usize {
        self.aggregate.red_count
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }
}

impl<K> Node<K> {
    /// Recompute this node's aggregate from its own color and its children.
    #[inline(always)]
    pub(crate) fn update(&mut self) {
        self.aggregate = Aggregate::of(self.color) + self.left.aggregate() + self.right.aggregate();
    }

    /// Toggle the color and move the red count by the one unit this node
    /// contributes. The children are left alone, so the aggregate must have
    /// been up to date before the call.
    #[inline(always)]
    pub(crate) fn flip(&mut self) {
        self.color = !self.color;
        match self.color {
            Color::Red => self.aggregate.red_count += 1,
            Color::Black => {
                debug_assert!(self.aggregate.red_count > 0);
                self.aggregate.red_count -= 1;
            }
        }
    }
}

impl<K> Debug for Node<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}::({:?})", self.color, self.key))
    }
}
