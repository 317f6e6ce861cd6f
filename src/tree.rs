use std::cmp::Ordering::*;

use crate::{Key, Node, Tree, node, rebalance};

impl Tree {
    pub const fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns whether `key` was new. Duplicates leave the tree as it was.
    pub fn insert(&mut self, key: Key) -> bool {
        let mut inserted = false;
        self.root = rebalance::insert(self.root.take(), key, &mut inserted);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns whether `key` was present. Absent keys leave the tree as it was.
    pub fn delete(&mut self, key: Key) -> bool {
        let mut removed = false;
        self.root = rebalance::delete(self.root.take(), key, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, key: Key) -> bool {
        self.search_exact(key).is_some()
    }

    pub fn search_exact(&self, target: Key) -> Option<Key> {
        let mut node = self.root.as_deref();
        while let Some(candidate) = node {
            match target.cmp(&candidate.key) {
                Equal => return Some(candidate.key),
                Greater => node = candidate.right.as_deref(),
                Less => node = candidate.left.as_deref(),
            }
        }
        None
    }

    /// Every key in `lo..=hi`, ascending. Walks the whole tree in order.
    pub fn search_range(&self, lo: Key, hi: Key) -> Vec<Key> {
        let mut found = Vec::new();
        self.in_order(|key| {
            if lo <= key && key <= hi {
                found.push(key);
            }
        });
        found
    }

    /// All keys, ascending.
    pub fn keys(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len);
        self.in_order(|key| keys.push(key));
        keys
    }

    fn in_order<F: FnMut(Key)>(&self, mut visit: F) {
        let mut pending: Vec<&Node> = Vec::with_capacity(self.height() as usize);
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            visit(node.key);
            current = node.right.as_deref();
        }
    }
}

impl Extend<Key> for Tree {
    fn extend<T: IntoIterator<Item = Key>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    #[test]
    fn tree_ctor_works() {
        let tree = Tree::new();
        assert_eq!(None, tree.root().map(Node::key));
        assert_eq!(0, tree.len());
        assert_eq!(0, tree.height());
        assert_eq!(true, tree.is_empty());
        assert_eq!(false, tree.contains(42));
    }

    #[test]
    fn right_right_scenario() {
        let tree: Tree = [10, 20, 30].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!((20, 2), (root.key(), root.height()));
        assert_eq!(Some((10, 1)), root.left().map(|n| (n.key(), n.height())));
        assert_eq!(Some((30, 1)), root.right().map(|n| (n.key(), n.height())));
    }

    #[test]
    fn insert_reports_novelty() {
        let mut tree = Tree::new();
        assert_eq!(true, tree.insert(5));
        assert_eq!(true, tree.insert(3));
        assert_eq!(false, tree.insert(5));
        assert_eq!(2, tree.len());
        assert_eq!(vec![3, 5], tree.keys());
    }

    #[test]
    fn duplicate_insert_keeps_shape() {
        let mut tree: Tree = (0..20).collect();
        let before = tree.clone();
        for key in 0..20 {
            assert_eq!(false, tree.insert(key));
        }
        assert_eq!(before, tree);
    }

    #[test]
    fn delete_absent_keeps_shape() {
        let mut tree: Tree = (0..20).map(|k| k * 2).collect();
        let before = tree.clone();
        assert_eq!(false, tree.delete(7));
        assert_eq!(false, tree.delete(-1));
        assert_eq!(false, tree.delete(100));
        assert_eq!(before, tree);

        let mut empty = Tree::new();
        assert_eq!(false, empty.delete(1));
        assert_eq!(Tree::new(), empty);
    }

    #[test]
    fn delete_down_to_empty() {
        let mut tree: Tree = (0..16).collect();
        for key in 0..16 {
            assert_eq!(true, tree.delete(key));
            assert_eq!(15 - key as usize, tree.len());
            assert_eq!(Ok(()), tree.validate());
        }
        assert_eq!(None, tree.root().map(Node::key));
        assert_eq!(true, tree.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut tree: Tree = (0..8).collect();
        tree.clear();
        assert_eq!(Tree::new(), tree);
        assert_eq!(true, tree.insert(3));
    }

    #[test]
    fn search_exact() {
        let tree: Tree = [5, 3, 8].into_iter().collect();
        assert_eq!(Some(3), tree.search_exact(3));
        assert_eq!(Some(8), tree.search_exact(8));
        assert_eq!(None, tree.search_exact(9));
        assert_eq!(None, Tree::new().search_exact(0));
    }

    #[test]
    fn search_range() {
        let tree: Tree = [1, 5, 3].into_iter().collect();
        assert_eq!(vec![1, 3], tree.search_range(0, 4));
        assert_eq!(vec![3], tree.search_range(3, 3));
        assert_eq!(Vec::<Key>::new(), tree.search_range(6, 10));
        assert_eq!(Vec::<Key>::new(), tree.search_range(4, 0));
        assert_eq!(vec![1, 3, 5], tree.search_range(Key::MIN, Key::MAX));
        assert_eq!(Vec::<Key>::new(), Tree::new().search_range(1, 10));
    }

    #[test]
    fn search_range_spans_both_subtrees() {
        let tree: Tree = (0..64).collect();
        assert_eq!((10..=50).collect::<Vec<_>>(), tree.search_range(10, 50));
    }

    #[test]
    fn ascending_inserts_stay_logarithmic() {
        let tree: Tree = (0..1024).collect();
        assert_eq!(11, tree.height());
        assert_eq!(Ok(()), tree.validate());
    }

    #[quickcheck]
    fn keys_match_model(ops: Vec<(bool, i8)>) -> bool {
        let mut tree = Tree::new();
        let mut model = BTreeSet::new();
        for (insert, key) in ops {
            let key = Key::from(key);
            if insert {
                if tree.insert(key) != model.insert(key) {
                    return false;
                }
            } else if tree.delete(key) != model.remove(&key) {
                return false;
            }
        }
        tree.validate().is_ok()
            && tree.len() == model.len()
            && tree.keys() == model.into_iter().collect::<Vec<_>>()
    }

    #[quickcheck]
    fn insert_then_delete_round_trips(keys: Vec<i16>, victim: i16) -> bool {
        let mut tree: Tree = keys.iter().copied().map(Key::from).collect();
        let mut expected: BTreeSet<Key> = keys.into_iter().map(Key::from).collect();
        tree.insert(Key::from(victim));
        tree.delete(Key::from(victim));
        expected.remove(&Key::from(victim));
        tree.validate().is_ok() && tree.keys() == expected.into_iter().collect::<Vec<_>>()
    }

    #[quickcheck]
    fn search_range_matches_model(keys: Vec<i8>, lo: i8, hi: i8) -> bool {
        let tree: Tree = keys.iter().copied().map(Key::from).collect();
        let model: BTreeSet<Key> = keys.into_iter().map(Key::from).collect();
        let expected: Vec<Key> = model
            .iter()
            .copied()
            .filter(|&k| Key::from(lo) <= k && k <= Key::from(hi))
            .collect();
        tree.search_range(Key::from(lo), Key::from(hi)) == expected
    }

    #[quickcheck]
    fn search_exact_matches_model(keys: Vec<i8>, target: i8) -> bool {
        let tree: Tree = keys.iter().copied().map(Key::from).collect();
        let present = keys.contains(&target);
        tree.search_exact(Key::from(target)) == present.then_some(Key::from(target))
    }
}
