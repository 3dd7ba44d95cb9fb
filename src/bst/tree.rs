use crate::arena::{Arena, NodeId};
use crate::bst::{Balance, Iter, Node, Side};
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;
use std::ops::{Index, IndexMut};

/// A binary search tree whose nodes live in an arena and whose shape is kept in check by `B`.
pub struct Tree<T, B: Balance<T>> {
    arena: Arena<B::Node>,
    root: Option<NodeId>,
}

impl<T, B: Balance<T>> Tree<T, B> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Makes `new` take the place of `old` below `parent`, or at the root when there is no parent.
    pub fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left() == Some(old) {
                    node.set_left(new);
                } else if node.right() == Some(old) {
                    node.set_right(new);
                }
            },
            None => self.root = new,
        }
    }

    /// Unlinks the leaf `id` from `parent`, releases its slot and returns its key.
    pub fn detach(&mut self, parent: Option<NodeId>, id: NodeId) -> T {
        self.replace_child(parent, id, None);
        self.arena.free(id).into_key()
    }

    fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        let (a, b) = self.arena.pair_mut(a, b);
        mem::swap(a.key_mut(), b.key_mut());
    }

    pub fn find<V>(&self, key: &V) -> Option<NodeId>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn get<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        match self.find(key) {
            Some(id) => Ok(self.arena[id].key()),
            None => Err(Error::NotFound),
        }
    }

    /// Links a new leaf holding `key` and lets `B` repair the tree. Returns `false`, leaving the
    /// tree untouched, if an equal key is already stored.
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let mut path = Vec::new();
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            path.push(id);
            curr = node.child(side);
        }

        let id = self.arena.allocate(<B::Node as Node<T>>::new(key));
        match path.last() {
            Some(&parent) => self.arena[parent].set_child(side, Some(id)),
            None => self.root = Some(id),
        }
        B::repair_insert(self, &path, id);
        true
    }

    /// Removes the node holding `key` and returns the stored key.
    pub fn remove<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut path = Vec::new();
        let mut curr = self.root;
        let target = loop {
            let id = match curr {
                Some(id) => id,
                None => return Err(Error::NotFound),
            };
            let node = &self.arena[id];
            curr = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => break id,
            };
            path.push(id);
        };

        let leaf = self.sink(target, &mut path);
        Ok(B::remove_leaf(self, &path, leaf))
    }

    // Moves the key held by `id` down to a leaf by repeatedly swapping it with its in-order
    // predecessor, or with its successor when there is no left subtree. Every node passed on the
    // way is appended to `path`.
    fn sink(&mut self, mut id: NodeId, path: &mut Vec<NodeId>) -> NodeId {
        loop {
            let (side, mut next) = {
                let node = &self.arena[id];
                match (node.left(), node.right()) {
                    (Some(left), _) => (Side::Left, left),
                    (None, Some(right)) => (Side::Right, right),
                    (None, None) => return id,
                }
            };
            path.push(id);
            while let Some(child) = self.arena[next].child(side.opposite()) {
                path.push(next);
                next = child;
            }
            self.swap_keys(id, next);
            id = next;
        }
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|mut curr| {
            while let Some(left) = self.arena[curr].left() {
                curr = left;
            }
            self.arena[curr].key()
        })
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|mut curr| {
            while let Some(right) = self.arena[curr].right() {
                curr = right;
            }
            self.arena[curr].key()
        })
    }

    fn ceil_from<V>(&self, tree: Option<NodeId>, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree.and_then(|id| {
            let node = &self.arena[id];
            match key.cmp(node.key().borrow()) {
                Ordering::Greater => self.ceil_from(node.right(), key),
                Ordering::Less => match self.ceil_from(node.left(), key) {
                    None => Some(node.key()),
                    res => res,
                },
                Ordering::Equal => Some(node.key()),
            }
        })
    }

    /// Returns the least key greater than or equal to `key`.
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.ceil_from(self.root, key)
    }

    fn floor_from<V>(&self, tree: Option<NodeId>, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree.and_then(|id| {
            let node = &self.arena[id];
            match key.cmp(node.key().borrow()) {
                Ordering::Less => self.floor_from(node.left(), key),
                Ordering::Greater => match self.floor_from(node.right(), key) {
                    None => Some(node.key()),
                    res => res,
                },
                Ordering::Equal => Some(node.key()),
            }
        })
    }

    /// Returns the greatest key less than or equal to `key`.
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.floor_from(self.root, key)
    }

    fn height_from(&self, tree: Option<NodeId>) -> usize {
        match tree {
            None => 0,
            Some(id) => {
                let node = &self.arena[id];
                cmp::max(self.height_from(node.left()), self.height_from(node.right())) + 1
            },
        }
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.height_from(self.root)
    }

    pub fn iter(&self) -> Iter<T, B> {
        Iter::new(self)
    }
}

impl<T, B: Balance<T>> Index<NodeId> for Tree<T, B> {
    type Output = B::Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.arena[id]
    }
}

impl<T, B: Balance<T>> IndexMut<NodeId> for Tree<T, B> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.arena[id]
    }
}

#[cfg(test)]
mod tests {
    use super::Tree;
    use crate::arena::NodeId;
    use crate::bst::{Balance, Node};
    use crate::error::Error;

    struct PlainNode<T> {
        key: T,
        left: Option<NodeId>,
        right: Option<NodeId>,
    }

    impl<T> Node<T> for PlainNode<T> {
        fn new(key: T) -> Self {
            PlainNode {
                key,
                left: None,
                right: None,
            }
        }

        fn key(&self) -> &T {
            &self.key
        }

        fn key_mut(&mut self) -> &mut T {
            &mut self.key
        }

        fn into_key(self) -> T {
            self.key
        }

        fn left(&self) -> Option<NodeId> {
            self.left
        }

        fn right(&self) -> Option<NodeId> {
            self.right
        }

        fn set_left(&mut self, child: Option<NodeId>) {
            self.left = child;
        }

        fn set_right(&mut self, child: Option<NodeId>) {
            self.right = child;
        }
    }

    // Never rebalances, so the shape follows the insertion order exactly.
    enum Unbalanced {}

    impl<T> Balance<T> for Unbalanced {
        type Node = PlainNode<T>;

        fn repair_insert(_: &mut Tree<T, Self>, _: &[NodeId], _: NodeId) {}

        fn remove_leaf(tree: &mut Tree<T, Self>, path: &[NodeId], id: NodeId) -> T {
            tree.detach(path.last().cloned(), id)
        }
    }

    fn keys(tree: &Tree<u32, Unbalanced>) -> Vec<u32> {
        tree.iter().map(|node| node.key).collect()
    }

    fn build(keys: &[u32]) -> Tree<u32, Unbalanced> {
        let mut tree = Tree::new();
        for &key in keys {
            assert!(tree.insert(key));
        }
        tree
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!tree.insert(2));
        assert_eq!(tree.len(), 3);
        assert_eq!(keys(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_get() {
        let tree = build(&[5, 2, 9]);
        assert_eq!(tree.get(&9), Ok(&9));
        assert_eq!(tree.get(&4), Err(Error::NotFound));
    }

    #[test]
    fn test_remove_swaps_with_predecessor() {
        let mut tree = build(&[5, 2, 9, 3, 4]);
        let root = tree.root().unwrap();
        assert_eq!(tree.remove(&5), Ok(5));
        // the root node survives and now holds the largest key of its left subtree
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree[root].key, 4);
        assert_eq!(keys(&tree), vec![2, 3, 4, 9]);
    }

    #[test]
    fn test_remove_swaps_with_successor() {
        let mut tree = build(&[1, 4, 3, 2]);
        let root = tree.root().unwrap();
        assert_eq!(tree.remove(&1), Ok(1));
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree[root].key, 2);
        assert_eq!(keys(&tree), vec![2, 3, 4]);
    }

    #[test]
    fn test_remove_chain_of_swaps() {
        // 6's predecessor 5 has a left child, so the key keeps sinking until it reaches a leaf
        let mut tree = build(&[6, 2, 5, 4, 3]);
        assert_eq!(tree.remove(&6), Ok(6));
        assert_eq!(keys(&tree), vec![2, 3, 4, 5]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[1, 2]);
        assert_eq!(tree.remove(&3), Err(Error::NotFound));
        assert_eq!(keys(&tree), vec![1, 2]);

        let mut empty: Tree<u32, Unbalanced> = Tree::new();
        assert_eq!(empty.remove(&3), Err(Error::NotFound));
    }

    #[test]
    fn test_remove_last() {
        let mut tree = build(&[1]);
        assert_eq!(tree.remove(&1), Ok(1));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_min_max_floor_ceil() {
        let tree = build(&[3, 1, 5]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.floor(&4), Some(&3));
        assert_eq!(tree.ceil(&4), Some(&5));
        assert_eq!(tree.ceil(&6), None);
    }

    #[test]
    fn test_height() {
        assert_eq!(build(&[]).height(), 0);
        assert_eq!(build(&[2, 1, 3]).height(), 2);
        assert_eq!(build(&[1, 2, 3, 4]).height(), 4);
    }
}
