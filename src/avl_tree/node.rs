use crate::arena::NodeId;
use crate::bst;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub key: T,
    pub height: i32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> bst::Node<T> for Node<T> {
    fn new(key: T) -> Self {
        Node {
            key,
            height: 0,
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
