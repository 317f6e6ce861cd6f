use std::cmp::Ordering::*;

use log::trace;

use super::{Case, Key, Link, Node, node::balance_factor};

/// Inserts `key` below `root` and returns the new subtree root, which the
/// caller must store back into its slot. `inserted` is raised when a node
/// was created; on a duplicate the subtree comes back unchanged.
pub(crate) fn insert(root: Link, key: Key, inserted: &mut bool) -> Link {
    let Some(mut node) = root else {
        *inserted = true;
        return Some(Box::new(Node::new(key)));
    };
    match key.cmp(&node.key) {
        Less => node.left = insert(node.left.take(), key, inserted),
        Greater => node.right = insert(node.right.take(), key, inserted),
        Equal => return Some(node),
    }
    if !*inserted {
        return Some(node);
    }
    node.update_height();
    Some(rebalance_inserted(node, key))
}

/// Removes `key` from below `root` and returns the new subtree root, which
/// the caller must store back into its slot. `removed` is raised when a key
/// was taken out; an absent key leaves the subtree unchanged.
pub(crate) fn delete(root: Link, key: Key, removed: &mut bool) -> Link {
    let mut node = root?;
    match key.cmp(&node.key) {
        Less => node.left = delete(node.left.take(), key, removed),
        Greater => node.right = delete(node.right.take(), key, removed),
        Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    // The successor has no left child, so removing it below
                    // always takes one of the arms above.
                    let successor = right.min_value_node().key;
                    node.key = successor;
                    node.left = Some(left);
                    node.right = delete(Some(right), successor, &mut false);
                }
            }
        }
    }
    if !*removed {
        return Some(node);
    }
    node.update_height();
    Some(rebalance_deleted(node))
}

/// Restores balance after an insert, picking the case from the path `key`
/// took through the children.
fn rebalance_inserted(node: Box<Node>, key: Key) -> Box<Node> {
    let balance = node.balance_factor();
    let case = if balance > 1 {
        match node.left.as_ref().map(|left| key.cmp(&left.key)) {
            Some(Less) => Case::LeftLeft,
            Some(Greater) => Case::LeftRight,
            _ => return node,
        }
    } else if balance < -1 {
        match node.right.as_ref().map(|right| key.cmp(&right.key)) {
            Some(Greater) => Case::RightRight,
            Some(Less) => Case::RightLeft,
            _ => return node,
        }
    } else {
        return node;
    };
    rotate(node, case)
}

/// Restores balance after a delete, picking the case from the balance
/// factor of the heavier child.
fn rebalance_deleted(node: Box<Node>) -> Box<Node> {
    let balance = node.balance_factor();
    let case = if balance > 1 {
        if balance_factor(&node.left) >= 0 {
            Case::LeftLeft
        } else {
            Case::LeftRight
        }
    } else if balance < -1 {
        if balance_factor(&node.right) <= 0 {
            Case::RightRight
        } else {
            Case::RightLeft
        }
    } else {
        return node;
    };
    rotate(node, case)
}

fn rotate(mut node: Box<Node>, case: Case) -> Box<Node> {
    trace!("{case:?} rotation at {}", node.key);
    match case {
        Case::LeftLeft => node.rotate_right(),
        Case::LeftRight => {
            node.left = node.left.take().map(Node::rotate_left);
            node.rotate_right()
        }
        Case::RightRight => node.rotate_left(),
        Case::RightLeft => {
            node.right = node.right.take().map(Node::rotate_right);
            node.rotate_left()
        }
    }
}
