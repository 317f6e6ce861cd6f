//! A height-balanced (AVL) binary search tree over integer keys, and the
//! line-oriented command driver that feeds it.
mod command;
mod driver;
mod error;
mod node;
mod rebalance;
mod tree;
mod validate;

pub use command::Command;
pub use driver::{Driver, MISSING_INPUT, Reply, Summary};
pub use error::{Error, ParseError};
pub use validate::Violation;

pub type Key = i64;

/// An exclusively owned, possibly absent, subtree.
pub type Link = Option<Box<Node>>;

#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: Key,
    // Longest downward path to a leaf, counted in nodes. Absent is 0.
    pub(crate) height: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

/// The four ways a subtree gets rotated back into balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

/// An AVL tree. Duplicate inserts and deletes of absent keys are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
    len: usize,
}
