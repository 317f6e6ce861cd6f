use std::fmt::Debug;

use super::{Key, Link, Node};

/// Height of a possibly absent subtree; absent is 0.
#[inline(always)]
pub(crate) fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a possibly absent subtree; absent is 0.
#[inline(always)]
pub(crate) fn balance_factor(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

// Public API.
impl Node {
    pub fn new(key: Key) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> Key {
        self.key
    }

    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline(always)]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// `height(left) - height(right)`.
    #[inline(always)]
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    /// The leftmost node of this subtree, i.e. its in-order minimum.
    pub fn min_value_node(&self) -> &Node {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }
}

impl Node {
    #[inline(always)]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Lifts the left child into this node's place.
    ///
    /// ```text
    ///        n            l
    ///       / \          / \
    ///      l   c  -->   a   n
    ///     / \              / \
    ///    a   b            b   c
    /// ```
    ///
    /// `n` is re-heighted before `l`. Without a left child the node comes
    /// back untouched.
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.left.take() else {
            return self;
        };
        self.left = pivot.right.take();
        self.update_height();
        pivot.right = Some(self);
        pivot.update_height();
        pivot
    }

    /// Mirror of [`Self::rotate_right`]: lifts the right child.
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.right.take() else {
            return self;
        };
        self.right = pivot.left.take();
        self.update_height();
        pivot.left = Some(self);
        pivot.update_height();
        pivot
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}@{}", self.key, self.height))?;
        if self.left.is_some() || self.right.is_some() {
            f.write_fmt(format_args!("({:?},{:?})", self.left, self.right))?;
        }
        Ok(())
    }
}
