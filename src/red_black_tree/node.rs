use crate::arena::NodeId;
use crate::bst;
use std::fmt;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// A struct representing an internal node of a red black tree.
///
/// `left` and `right` own their subtrees. `parent` only points back up for rotations and the
/// deletion fixup; it is `None` for the root.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> bst::Node<T> for Node<T> {
    fn new(key: T) -> Self {
        Node {
            key,
            color: Color::Red,
            parent: None,
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
