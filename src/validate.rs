use thiserror::Error;

use crate::{Key, Link, Tree, node};

/// The first broken invariant found by [`Tree::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("key {key} lies outside its subtree bounds")]
    Order { key: Key },
    #[error("node {key} stores height {stored}, its children give {expected}")]
    Height { key: Key, stored: i32, expected: i32 },
    #[error("node {key} has balance factor {balance}")]
    Balance { key: Key, balance: i32 },
    #[error("tree counts {stored} keys but holds {counted}")]
    Length { stored: usize, counted: usize },
}

impl Tree {
    /// Checks ordering, stored heights, balance and the element count
    /// across the whole tree.
    pub fn validate(&self) -> Result<(), Violation> {
        let mut counted = 0;
        check(&self.root, None, None, &mut counted)?;
        if counted != self.len {
            return Err(Violation::Length {
                stored: self.len,
                counted,
            });
        }
        Ok(())
    }
}

// Keys must lie strictly inside (lo, hi), which also rules out duplicates.
// Returns the recomputed height.
fn check(
    link: &Link,
    lo: Option<Key>,
    hi: Option<Key>,
    counted: &mut usize,
) -> Result<i32, Violation> {
    let Some(node) = link else {
        return Ok(0);
    };
    let key = node.key;
    if lo.is_some_and(|lo| key <= lo) || hi.is_some_and(|hi| key >= hi) {
        return Err(Violation::Order { key });
    }
    *counted += 1;
    let left = check(&node.left, lo, Some(key), counted)?;
    let right = check(&node.right, Some(key), hi, counted)?;
    let expected = 1 + left.max(right);
    if node.height != expected {
        return Err(Violation::Height {
            key,
            stored: node.height,
            expected,
        });
    }
    let balance = node::height(&node.left) - node::height(&node.right);
    if balance.abs() > 1 {
        return Err(Violation::Balance { key, balance });
    }
    Ok(expected)
}
