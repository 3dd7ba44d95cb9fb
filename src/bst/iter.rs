use crate::arena::NodeId;
use crate::bst::{Balance, Node, Tree};

/// An in-order iterator over the nodes of a `Tree<T, B>`.
pub struct Iter<'a, T, B: Balance<T>> {
    tree: &'a Tree<T, B>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T, B: Balance<T>> Iter<'a, T, B> {
    pub fn new(tree: &'a Tree<T, B>) -> Self {
        let mut iter = Iter {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<NodeId>) {
        while let Some(id) = curr {
            self.stack.push(id);
            curr = self.tree[id].left();
        }
    }
}

impl<'a, T, B: Balance<T>> Iterator for Iter<'a, T, B> {
    type Item = &'a B::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        self.push_left_spine(tree[id].right());
        self.remaining -= 1;
        Some(&tree[id])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, B: Balance<T>> ExactSizeIterator for Iter<'a, T, B> {}
